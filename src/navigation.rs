//! Carrying out [`NavCommand`]s in the browser.

use dioxus::prelude::*;
use folio_core::{Clock, DeferredPoll, NavCommand, RestorePlan, SystemClock};
use gloo::timers::future::TimeoutFuture;

use crate::app::Route;
use crate::browser::{self, DomLayout};
use crate::context::SiteContext;

/// Perform a navigation side effect.
///
/// `NavigateHome` routes to `/` and starts polling for the deferred target
/// in a task owned by the calling component, so the poll stops when that
/// component unmounts.
pub fn run_command(command: NavCommand, navigator: Navigator, site: SiteContext) {
    match command {
        NavCommand::ScrollTo { top } => browser::scroll_to(top),
        NavCommand::NavigateHome { then } => {
            navigator.push(Route::Home {});
            if then.is_some() {
                spawn(poll_deferred(site));
            }
        }
        NavCommand::HistoryBack => navigator.go_back(),
        NavCommand::None => {}
    }
}

async fn poll_deferred(mut site: SiteContext) {
    let poll_ms = site.config().deferred_scroll_poll_ms;
    loop {
        TimeoutFuture::new(poll_ms).await;
        let poll = site.sync.write().poll_deferred(
            &DomLayout,
            browser::scroll_y(),
            SystemClock.now_ms(),
        );
        match poll {
            DeferredPoll::Waiting => continue,
            DeferredPoll::Ready { target, top } => {
                tracing::debug!(section = %target, top, "Deferred scroll");
                browser::scroll_to(top);
                break;
            }
            DeferredPoll::Expired { .. } | DeferredPoll::Idle => break,
        }
    }
}

/// Wait out the settle delay, then scroll to the remembered section.
pub async fn restore_position(site: SiteContext, plan: RestorePlan) {
    TimeoutFuture::new(plan.delay_ms).await;
    let top = site
        .sync
        .read()
        .scroll_target(&plan.target, &DomLayout, browser::scroll_y());
    match top {
        Some(top) => {
            tracing::debug!(section = %plan.target, "Restoring last position");
            browser::scroll_to(top);
        }
        None => tracing::debug!(section = %plan.target, "Remembered section not rendered"),
    }
}

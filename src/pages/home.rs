//! Main view: every section on one scrollable page.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;

use crate::app::{on_window_scroll, Route};
use crate::browser::DomLayout;
use crate::components::{About, Blog, Contact, Experience, Hero, Projects, Skills};
use crate::context::use_site;
use crate::navigation::restore_position;

#[component]
pub fn Home() -> Element {
    let mut site = use_site();
    // Section tracking listener; dropped with this page
    let tracking: Rc<RefCell<Option<EventListener>>> = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let tracking = tracking.clone();
        use_effect(move || {
            let path = Route::Home {}.to_string();
            let update = site.sync.write().on_location_change(&path, &DomLayout);
            site.publish();

            if let Some(token) = update.token {
                let mut site = site;
                let listener = EventListener::new(&gloo::utils::window(), "scroll", move |_| {
                    on_window_scroll(&mut site, Some(token));
                });
                tracking.borrow_mut().replace(listener);
            }
            if let Some(plan) = update.restore {
                spawn(restore_position(site, plan));
            }
        });
    }

    use_drop(move || {
        tracking.borrow_mut().take();
        site.sync.write().leave_main();
    });

    rsx! {
        Hero {}
        About {}
        Skills {}
        Experience {}
        Projects {}
        Blog {}
        Contact {}
    }
}

//! Route/scroll coordination.
//!
//! Two states:
//!
//! ```text
//!            router resolves a detail path
//!   OnMain ─────────────────────────────────▶ OnDetail
//!     ▲                                          │
//!     └──────────────────────────────────────────┘
//!              router resolves "/"
//! ```
//!
//! On the main view a nav click scrolls to the section. On a detail view
//! the same click navigates home and leaves a [`DeferredScroll`] behind,
//! which is polled until the section exists or its timeout runs out.

use crate::layout::SectionLayout;
use crate::route::RouteContext;
use crate::section::SectionId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Root path, sections are scrollable
    #[default]
    OnMain,
    /// A sub-resource page without sections
    OnDetail,
}

/// What a location change did to the view mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    EnteredDetail,
    ReturnedToMain,
}

/// Side effect the host must perform in response to a navigation action
#[derive(Clone, Debug, PartialEq)]
pub enum NavCommand {
    /// Smooth-scroll the window to this vertical offset
    ScrollTo { top: f64 },
    /// Route to the main view, then scroll to `then` once it exists
    NavigateHome { then: Option<SectionId> },
    /// Pop browser history
    HistoryBack,
    /// Nothing to do (missing target, stale state)
    None,
}

/// Result of polling a deferred scroll
#[derive(Clone, Debug, PartialEq)]
pub enum DeferredPoll {
    /// No deferred scroll is pending
    Idle,
    /// Target not mounted yet, poll again later
    Waiting,
    /// Target found; the pending entry is consumed
    Ready { target: SectionId, top: f64 },
    /// Gave up; the pending entry is consumed and no scroll happens
    Expired { target: SectionId },
}

/// A scroll requested from a detail view, waiting for the main view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredScroll {
    pub target: SectionId,
    requested_at: i64,
    /// Set when the main view is first seen; the wait window starts here
    armed_at: Option<i64>,
}

#[derive(Debug)]
pub struct RouteCoordinator {
    mode: ViewMode,
    header_offset: f64,
    deferred_timeout_ms: i64,
    pending: Option<DeferredScroll>,
}

impl RouteCoordinator {
    pub fn new(header_offset: f64, deferred_timeout_ms: i64) -> Self {
        Self {
            mode: ViewMode::OnMain,
            header_offset,
            deferred_timeout_ms,
            pending: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn pending(&self) -> Option<&DeferredScroll> {
        self.pending.as_ref()
    }

    /// Feed a router location change into the state machine.
    pub fn on_location_change(&mut self, route: &RouteContext) -> Transition {
        let next = if route.is_detail_view {
            ViewMode::OnDetail
        } else {
            ViewMode::OnMain
        };
        let transition = match (self.mode, next) {
            (ViewMode::OnMain, ViewMode::OnDetail) => Transition::EnteredDetail,
            (ViewMode::OnDetail, ViewMode::OnMain) => Transition::ReturnedToMain,
            _ => Transition::Unchanged,
        };
        if transition != Transition::Unchanged {
            tracing::debug!(path = %route.current_path, ?transition, "View mode changed");
        }
        self.mode = next;
        transition
    }

    /// Window offset that puts `target` just below the fixed header.
    pub fn scroll_target(
        &self,
        target: &SectionId,
        layout: &impl SectionLayout,
        scroll_y: f64,
    ) -> Option<f64> {
        layout
            .bounds(target.as_str())
            .map(|rect| rect.top + scroll_y - self.header_offset)
    }

    /// Resolve a click on the nav entry for `target`.
    pub fn nav_click(
        &mut self,
        target: &SectionId,
        layout: &impl SectionLayout,
        scroll_y: f64,
        now_ms: i64,
    ) -> NavCommand {
        match self.mode {
            ViewMode::OnMain => match self.scroll_target(target, layout, scroll_y) {
                Some(top) => NavCommand::ScrollTo { top },
                None => {
                    tracing::debug!(section = %target, "Nav target not rendered, ignoring click");
                    NavCommand::None
                }
            },
            ViewMode::OnDetail => {
                self.pending = Some(DeferredScroll {
                    target: target.clone(),
                    requested_at: now_ms,
                    armed_at: None,
                });
                NavCommand::NavigateHome {
                    then: Some(target.clone()),
                }
            }
        }
    }

    /// Resolve a click on the logo/brand.
    pub fn brand_click(&self) -> NavCommand {
        match self.mode {
            ViewMode::OnMain => NavCommand::ScrollTo { top: 0.0 },
            ViewMode::OnDetail => NavCommand::HistoryBack,
        }
    }

    /// Check whether the deferred target can be scrolled to yet.
    pub fn poll_deferred(
        &mut self,
        layout: &impl SectionLayout,
        scroll_y: f64,
        now_ms: i64,
    ) -> DeferredPoll {
        let mode = self.mode;
        let (target, started) = {
            let Some(pending) = self.pending.as_mut() else {
                return DeferredPoll::Idle;
            };
            let started = match mode {
                // Route change still in flight: measure from the click
                ViewMode::OnDetail => pending.requested_at,
                ViewMode::OnMain => *pending.armed_at.get_or_insert(now_ms),
            };
            (pending.target.clone(), started)
        };

        if mode == ViewMode::OnMain {
            if let Some(top) = self.scroll_target(&target, layout, scroll_y) {
                self.pending = None;
                return DeferredPoll::Ready { target, top };
            }
        }

        if now_ms - started >= self.deferred_timeout_ms {
            tracing::debug!(section = %target, "Deferred scroll target never appeared");
            self.pending = None;
            return DeferredPoll::Expired { target };
        }
        DeferredPoll::Waiting
    }

    /// Drop any pending deferred scroll
    pub fn cancel_deferred(&mut self) {
        self.pending = None;
    }
}

//! Active section detection.
//!
//! A single ranked observer samples every watched section against a thin
//! band around the viewport midline and reports the best one. Sampling is
//! driven by the caller (scroll events in the browser), so a detached
//! observer simply stops producing results.
//!
//! ## Ranking
//!
//! - A section qualifies when it overlaps the band `[mid - b, mid + b]`.
//!   With `b = 0` the band is the midline itself and a section qualifies
//!   when `top <= mid < bottom`.
//! - The qualifying section with the largest overlap wins; equal overlaps
//!   go to the section that comes first in document order.
//! - When nothing qualifies the current active section is kept.

use crate::layout::{Rect, SectionLayout, Viewport};
use crate::section::SectionId;

/// Proof that a caller holds the current attachment.
///
/// Every [`SectionObserver::detach`] invalidates outstanding tokens, so a
/// scroll callback registered before a route change cannot mutate the
/// active section after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverToken {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct SectionObserver {
    half_band: f64,
    generation: u64,
    attached: bool,
    watched: Vec<SectionId>,
    active: Option<SectionId>,
}

impl SectionObserver {
    pub fn new(half_band: f64) -> Self {
        Self {
            half_band: half_band.max(0.0),
            ..Self::default()
        }
    }

    /// Start watching the sections of `ids` that currently resolve.
    ///
    /// `ids` must be in document order; it is the tie-break order.
    pub fn attach<I, S>(&mut self, ids: I, layout: &impl SectionLayout) -> ObserverToken
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generation += 1;
        self.attached = true;
        self.watched = ids
            .into_iter()
            .filter_map(|id| {
                let id = id.as_ref();
                if layout.bounds(id).is_some() {
                    Some(SectionId::new(id))
                } else {
                    tracing::debug!(section = id, "Skipping unresolved section");
                    None
                }
            })
            .collect();
        tracing::debug!(watched = self.watched.len(), "Section observer attached");
        ObserverToken {
            generation: self.generation,
        }
    }

    /// Stop watching. Outstanding tokens are invalidated immediately.
    pub fn detach(&mut self) {
        if self.attached {
            tracing::debug!("Section observer detached");
        }
        self.generation += 1;
        self.attached = false;
        self.watched.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether `token` belongs to the current attachment
    pub fn is_current(&self, token: ObserverToken) -> bool {
        self.attached && token.generation == self.generation
    }

    /// Token of the current attachment, `None` while detached
    pub fn token(&self) -> Option<ObserverToken> {
        self.attached.then_some(ObserverToken {
            generation: self.generation,
        })
    }

    pub fn watched(&self) -> &[SectionId] {
        &self.watched
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Force the active section, used when restoring a remembered position.
    pub fn set_active(&mut self, id: Option<SectionId>) {
        self.active = id;
    }

    /// Sample the layout and return the new active section if it changed.
    ///
    /// `viewport` is `None` when the host cannot measure the page; nothing
    /// changes in that case.
    pub fn observe(
        &mut self,
        token: ObserverToken,
        layout: &impl SectionLayout,
        viewport: Option<Viewport>,
    ) -> Option<SectionId> {
        if !self.is_current(token) {
            return None;
        }
        let viewport = viewport?;
        let best = self.rank(layout, viewport)?;
        if self.active.as_ref() == Some(&best) {
            return None;
        }
        tracing::trace!(section = %best, "Active section changed");
        self.active = Some(best.clone());
        Some(best)
    }

    fn rank(&self, layout: &impl SectionLayout, viewport: Viewport) -> Option<SectionId> {
        let mid = viewport.midline();
        let (lo, hi) = (mid - self.half_band, mid + self.half_band);

        let mut best: Option<(&SectionId, f64)> = None;
        for id in &self.watched {
            let Some(rect) = layout.bounds(id.as_str()) else {
                continue;
            };
            let Some(overlap) = band_overlap(&rect, lo, hi) else {
                continue;
            };
            match best {
                Some((_, current)) if current >= overlap => {}
                _ => best = Some((id, overlap)),
            }
        }
        best.map(|(id, _)| id.clone())
    }
}

/// Overlap of `rect` with the band `[lo, hi]`, `None` when they miss.
fn band_overlap(rect: &Rect, lo: f64, hi: f64) -> Option<f64> {
    if hi > lo {
        let overlap = rect.bottom().min(hi) - rect.top.max(lo);
        (overlap > 0.0).then_some(overlap)
    } else {
        (rect.top <= lo && rect.bottom() > lo).then_some(0.0)
    }
}

/// Scroll-offset flags, independent of section observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    scrolled_threshold: f64,
    back_to_top_threshold: f64,
}

/// Result of one [`ScrollTracker`] sample
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    /// The navbar switches to its compact, shadowed style
    pub is_scrolled: bool,
    /// The back-to-top button is shown
    pub show_back_to_top: bool,
}

impl ScrollTracker {
    pub fn new(scrolled_threshold: f64, back_to_top_threshold: f64) -> Self {
        Self {
            scrolled_threshold,
            back_to_top_threshold,
        }
    }

    pub fn sample(&self, scroll_y: f64) -> ScrollFlags {
        ScrollFlags {
            is_scrolled: scroll_y > self.scrolled_threshold,
            show_back_to_top: scroll_y > self.back_to_top_threshold,
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(10.0, 300.0)
    }
}

//! Geometry seen by the synchronizer.
//!
//! The browser answers these queries with `getBoundingClientRect` and
//! `window.scrollY`. [`PageLayout`] answers them from a fixed list of
//! section positions, which is how native tests drive the state machines.

use crate::section::SectionId;

/// Vertical extent of an element, relative to the top of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Viewport measurements for one sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub height: f64,
    pub scroll_y: f64,
}

impl Viewport {
    /// Vertical centre of the viewport, in viewport coordinates
    pub fn midline(&self) -> f64 {
        self.height / 2.0
    }
}

/// Resolves section anchors to their on-screen position.
pub trait SectionLayout {
    /// `None` when no element with this id is currently rendered
    fn bounds(&self, id: &str) -> Option<Rect>;
}

impl<L: SectionLayout + ?Sized> SectionLayout for &L {
    fn bounds(&self, id: &str) -> Option<Rect> {
        (**self).bounds(id)
    }
}

/// An in-memory page: sections at fixed document offsets plus a scroll position.
#[derive(Clone, Debug)]
pub struct PageLayout {
    sections: Vec<(SectionId, f64, f64)>,
    viewport_height: f64,
    scroll_y: f64,
}

impl PageLayout {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            sections: Vec::new(),
            viewport_height,
            scroll_y: 0.0,
        }
    }

    /// Append a section at `doc_top` (document coordinates)
    pub fn with_section(mut self, id: &str, doc_top: f64, height: f64) -> Self {
        self.sections.push((SectionId::new(id), doc_top, height));
        self
    }

    /// Stack the given sections back to back from the top of the document
    pub fn stacked(viewport_height: f64, sections: &[(&str, f64)]) -> Self {
        let mut layout = Self::new(viewport_height);
        let mut top = 0.0;
        for (id, height) in sections {
            layout = layout.with_section(id, top, *height);
            top += height;
        }
        layout
    }

    pub fn document_height(&self) -> f64 {
        self.sections
            .iter()
            .map(|(_, top, height)| top + height)
            .fold(0.0, f64::max)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Jump to `y`, clamped to the scrollable range like a real window
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            height: self.viewport_height,
            scroll_y: self.scroll_y,
        }
    }
}

impl SectionLayout for PageLayout {
    fn bounds(&self, id: &str) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(section, _, _)| section == id)
            .map(|(_, top, height)| Rect::new(top - self.scroll_y, *height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_scroll() {
        let mut layout = PageLayout::stacked(800.0, &[("home", 1000.0), ("about", 1000.0)]);
        assert_eq!(layout.bounds("about"), Some(Rect::new(1000.0, 1000.0)));

        layout.scroll_to(400.0);
        assert_eq!(layout.bounds("about"), Some(Rect::new(600.0, 1000.0)));
        assert!(layout.bounds("blog").is_none());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut layout = PageLayout::stacked(800.0, &[("home", 1000.0)]);
        layout.scroll_to(5000.0);
        assert_eq!(layout.scroll_y(), 200.0);
        layout.scroll_to(-10.0);
        assert_eq!(layout.scroll_y(), 0.0);
    }
}

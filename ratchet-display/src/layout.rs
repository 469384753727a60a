//! View geometry
//!
//! All positions derive from the panel size so the same views work on
//! any landscape panel. On a 320x240 panel the bar sits at (20, 180),
//! 280x20, and fills in steps of 56 px.

use ratchet_core::Progress;

use crate::backend::Rect;

/// Horizontal inset of the progress bar
pub const BAR_MARGIN: u16 = 20;

/// Height of the progress bar
pub const BAR_HEIGHT: u16 = 20;

/// Gap between the bar and the bottom edge
pub const BAR_BOTTOM_GAP: u16 = 40;

/// Top-left corner of the active view title
pub const TITLE_ORIGIN: (u16, u16) = (40, 20);

/// Geometry of the workflow views for one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: u16,
    height: u16,
    bar: Rect,
}

impl Layout {
    /// Compute the layout for a panel of the given size
    pub fn for_panel(width: u16, height: u16) -> Self {
        let bar_width = width.saturating_sub(2 * BAR_MARGIN);
        let bar_y = height.saturating_sub(BAR_BOTTOM_GAP + BAR_HEIGHT);
        Self {
            width,
            height,
            bar: Rect::new(BAR_MARGIN, bar_y, bar_width, BAR_HEIGHT),
        }
    }

    /// Outline of the progress bar
    pub fn bar(&self) -> Rect {
        self.bar
    }

    /// Filled part of the progress bar, `None` when nothing is filled
    pub fn bar_fill(&self, progress: Progress) -> Option<Rect> {
        let width = progress.scale(self.bar.width);
        if width == 0 {
            return None;
        }
        Some(Rect::new(self.bar.x, self.bar.y, width, self.bar.height))
    }

    /// Top-left corner that centres a `text_width` x `text_height` block
    pub fn centered(&self, text_width: u16, text_height: u16) -> (u16, u16) {
        (
            self.width.saturating_sub(text_width) / 2,
            self.height.saturating_sub(text_height) / 2,
        )
    }

    pub fn title_origin(&self) -> (u16, u16) {
        TITLE_ORIGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_tft() {
        let layout = Layout::for_panel(320, 240);
        assert_eq!(layout.bar(), Rect::new(20, 180, 280, 20));
        assert!(layout.bar().fits(320, 240));
    }

    #[test]
    fn test_fill_steps() {
        let layout = Layout::for_panel(320, 240);
        assert_eq!(layout.bar_fill(Progress::new(0, 5)), None);
        for n in 1..=5u8 {
            let fill = layout.bar_fill(Progress::new(n, 5)).unwrap();
            assert_eq!(fill.width, 56 * n as u16);
            assert_eq!(fill.x, 20);
            assert_eq!(fill.height, 20);
        }
    }

    #[test]
    fn test_fill_never_exceeds_bar() {
        let layout = Layout::for_panel(128, 64);
        let fill = layout.bar_fill(Progress::new(7, 5)).unwrap();
        assert_eq!(fill.width, layout.bar().width);
    }

    #[test]
    fn test_centered() {
        let layout = Layout::for_panel(320, 240);
        assert_eq!(layout.centered(72, 24), (124, 108));
        // Oversized text pins to the corner
        assert_eq!(layout.centered(400, 300), (0, 0));
    }
}

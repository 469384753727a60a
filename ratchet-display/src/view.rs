//! Workflow views
//!
//! Two mutually exclusive screens:
//! - Idle: a single centred label
//! - Active: a title above a framed progress bar

use ratchet_core::traits::Surface;
use ratchet_core::Progress;

use crate::backend::{DisplayBackend, DisplayError, TextSize, Tone};
use crate::layout::Layout;

/// Label shown while idle
pub const IDLE_LABEL: &str = "IDLE";

/// Heading shown while active
pub const ACTIVE_TITLE: &str = "IN PROGRESS";

/// Draws the workflow views onto a display backend
pub struct ProgressView<B> {
    backend: B,
    layout: Layout,
}

impl<B: DisplayBackend> ProgressView<B> {
    /// Create a view sized to the backend's panel
    pub fn new(backend: B) -> Self {
        let (width, height) = backend.pixel_dimensions();
        Self {
            backend,
            layout: Layout::for_panel(width, height),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Draw the idle view
    pub fn draw_idle(&mut self) -> Result<(), DisplayError> {
        self.backend.clear()?;

        let (glyph_w, glyph_h) = self.backend.glyph_size(TextSize::Banner);
        let text_w = glyph_w.saturating_mul(IDLE_LABEL.len() as u16);
        let (x, y) = self.layout.centered(text_w, glyph_h);
        self.backend.draw_text(x, y, TextSize::Banner, IDLE_LABEL)?;

        self.backend.flush()
    }

    /// Draw the active view with a bar filled to `progress`
    pub fn draw_active(&mut self, progress: Progress) -> Result<(), DisplayError> {
        self.backend.clear()?;

        let (x, y) = self.layout.title_origin();
        self.backend.draw_text(x, y, TextSize::Title, ACTIVE_TITLE)?;

        self.backend.draw_rect(self.layout.bar(), Tone::Foreground)?;
        if let Some(fill) = self.layout.bar_fill(progress) {
            self.backend.fill_rect(fill, Tone::Accent)?;
        }

        self.backend.flush()
    }
}

impl<B: DisplayBackend> Surface for ProgressView<B> {
    type Error = DisplayError;

    fn show_idle(&mut self) -> Result<(), Self::Error> {
        self.draw_idle()
    }

    fn show_active(&mut self, progress: Progress) -> Result<(), Self::Error> {
        self.draw_active(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Rect;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Clear,
        Text(u16, u16, TextSize, String),
        Outline(Rect, Tone),
        Fill(Rect, Tone),
        Flush,
    }

    /// 320x240 backend with a 6x8 font, recording every call
    #[derive(Default)]
    struct MockBackend {
        ops: Vec<Op>,
        offline: bool,
    }

    impl DisplayBackend for MockBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            if self.offline {
                return Err(DisplayError::Communication);
            }
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_text(&mut self, x: u16, y: u16, size: TextSize, text: &str) -> Result<(), DisplayError> {
            self.ops.push(Op::Text(x, y, size, text.to_string()));
            Ok(())
        }

        fn draw_rect(&mut self, rect: Rect, tone: Tone) -> Result<(), DisplayError> {
            self.ops.push(Op::Outline(rect, tone));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rect, tone: Tone) -> Result<(), DisplayError> {
            self.ops.push(Op::Fill(rect, tone));
            Ok(())
        }

        fn pixel_dimensions(&self) -> (u16, u16) {
            (320, 240)
        }

        fn glyph_size(&self, size: TextSize) -> (u16, u16) {
            match size {
                TextSize::Title => (12, 16),
                TextSize::Banner => (18, 24),
            }
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Flush);
            Ok(())
        }
    }

    #[test]
    fn test_idle_view_centres_label() {
        let mut view = ProgressView::new(MockBackend::default());
        view.draw_idle().unwrap();

        assert_eq!(
            view.backend().ops,
            [
                Op::Clear,
                Op::Text(124, 108, TextSize::Banner, IDLE_LABEL.to_string()),
                Op::Flush,
            ]
        );
    }

    #[test]
    fn test_active_view_without_progress_has_empty_bar() {
        let mut view = ProgressView::new(MockBackend::default());
        view.draw_active(Progress::new(0, 5)).unwrap();

        assert_eq!(
            view.backend().ops,
            [
                Op::Clear,
                Op::Text(40, 20, TextSize::Title, ACTIVE_TITLE.to_string()),
                Op::Outline(Rect::new(20, 180, 280, 20), Tone::Foreground),
                Op::Flush,
            ]
        );
    }

    #[test]
    fn test_active_view_fills_bar() {
        let mut view = ProgressView::new(MockBackend::default());
        view.show_active(Progress::new(3, 5)).unwrap();

        assert!(view
            .backend()
            .ops
            .contains(&Op::Fill(Rect::new(20, 180, 168, 20), Tone::Accent)));
    }

    #[test]
    fn test_backend_error_propagates() {
        let backend = MockBackend {
            offline: true,
            ..Default::default()
        };
        let mut view = ProgressView::new(backend);
        assert_eq!(view.show_idle(), Err(DisplayError::Communication));
        assert!(view.backend().ops.is_empty());
    }
}

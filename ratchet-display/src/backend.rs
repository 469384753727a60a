//! Display backend trait
//!
//! Defines the interface for pixel displays.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
}

/// Logical colours; the backend maps them onto its palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tone {
    /// Screen background
    Background,
    /// Text and outlines
    Foreground,
    /// Progress fill
    Accent,
}

/// Text sizes used by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Active view heading
    Title,
    /// Large idle label
    Banner,
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if the rectangle lies within a `width` x `height` area
    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.x as u32 + self.width as u32 <= width as u32
            && self.y as u32 + self.height as u32 <= height as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering to pixel displays.
/// Implementations handle the specifics of the panel controller.
pub trait DisplayBackend {
    /// Fill the whole display with the background tone
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, x: u16, y: u16, size: TextSize, text: &str) -> Result<(), DisplayError>;

    /// Draw a one-pixel rectangle outline
    fn draw_rect(&mut self, rect: Rect, tone: Tone) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, tone: Tone) -> Result<(), DisplayError>;

    /// Get pixel dimensions as (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);

    /// Size of one character cell as (width, height)
    fn glyph_size(&self, size: TextSize) -> (u16, u16);

    /// Flush buffered content to the display
    ///
    /// Panels that draw straight to their own RAM need not override this.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

//! ILI9341 TFT driver
//!
//! Minimal write-only driver for a 320x240 ILI9341 panel on a blocking
//! SPI bus. Rectangles are streamed straight into panel RAM; text is
//! rasterised with embedded-graphics mono fonts.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Timer;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use ratchet_display::{DisplayBackend, DisplayError, Rect, TextSize, Tone};

/// ILI9341 commands
mod cmd {
    pub const SOFT_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR: u8 = 0x2A;
    pub const PAGE_ADDR: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS: u8 = 0x36;
    pub const PIXEL_FORMAT: u8 = 0x3A;
}

/// Row/column exchange with BGR order: landscape, connector on the left
const MADCTL_LANDSCAPE: u8 = 0x28;

/// 16 bits per pixel
const PIXEL_FORMAT_RGB565: u8 = 0x55;

/// Pixels sent per SPI transfer when filling
const CHUNK_PIXELS: usize = 64;

/// ILI9341 panel on SPI0
pub struct Ili9341 {
    spi: Spi<'static, SPI0, Blocking>,
    dc: Output<'static>,
    cs: Output<'static>,
    width: u16,
    height: u16,
}

impl Ili9341 {
    /// Create the driver; call [`Ili9341::init`] before drawing
    pub fn new(
        spi: Spi<'static, SPI0, Blocking>,
        dc: Output<'static>,
        cs: Output<'static>,
        width: u16,
        height: u16,
    ) -> Self {
        Self {
            spi,
            dc,
            cs,
            width,
            height,
        }
    }

    /// Hardware reset and initialisation sequence
    pub async fn init(&mut self, rst: &mut Output<'static>) -> Result<(), DisplayError> {
        rst.set_low();
        Timer::after_millis(10).await;
        rst.set_high();
        Timer::after_millis(120).await;

        self.command(cmd::SOFT_RESET, &[])?;
        Timer::after_millis(150).await;
        self.command(cmd::SLEEP_OUT, &[])?;
        Timer::after_millis(120).await;

        self.command(cmd::PIXEL_FORMAT, &[PIXEL_FORMAT_RGB565])?;
        self.command(cmd::MEMORY_ACCESS, &[MADCTL_LANDSCAPE])?;
        self.command(cmd::DISPLAY_ON, &[])?;
        Ok(())
    }

    fn command(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low();
        self.dc.set_low();
        let sent = self.spi.blocking_write(&[command]);
        let sent = sent.and_then(|_| {
            self.dc.set_high();
            if data.is_empty() {
                Ok(())
            } else {
                self.spi.blocking_write(data)
            }
        });
        self.cs.set_high();
        sent.map_err(|_| DisplayError::Communication)
    }

    /// Select the RAM window for subsequent pixel data
    fn set_window(&mut self, rect: Rect) -> Result<(), DisplayError> {
        let x1 = rect.x + rect.width - 1;
        let y1 = rect.y + rect.height - 1;
        let [xs_hi, xs_lo] = rect.x.to_be_bytes();
        let [xe_hi, xe_lo] = x1.to_be_bytes();
        let [ys_hi, ys_lo] = rect.y.to_be_bytes();
        let [ye_hi, ye_lo] = y1.to_be_bytes();
        self.command(cmd::COLUMN_ADDR, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
        self.command(cmd::PAGE_ADDR, &[ys_hi, ys_lo, ye_hi, ye_lo])
    }

    /// Fill a rectangle with a raw RGB565 colour
    fn fill(&mut self, rect: Rect, color: u16) -> Result<(), DisplayError> {
        if rect.is_empty() {
            return Ok(());
        }
        if !rect.fits(self.width, self.height) {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.set_window(rect)?;

        let [hi, lo] = color.to_be_bytes();
        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        for px in chunk.chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }

        let mut remaining = rect.width as usize * rect.height as usize;
        self.cs.set_low();
        self.dc.set_low();
        let mut sent = self.spi.blocking_write(&[cmd::MEMORY_WRITE]);
        self.dc.set_high();
        while sent.is_ok() && remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            sent = self.spi.blocking_write(&chunk[..n * 2]);
            remaining -= n;
        }
        self.cs.set_high();
        sent.map_err(|_| DisplayError::Communication)
    }

    fn font(size: TextSize) -> &'static MonoFont<'static> {
        match size {
            TextSize::Title => &FONT_9X15,
            TextSize::Banner => &FONT_10X20,
        }
    }

    fn color(tone: Tone) -> Rgb565 {
        match tone {
            Tone::Background => Rgb565::BLACK,
            Tone::Foreground => Rgb565::WHITE,
            Tone::Accent => Rgb565::GREEN,
        }
    }

    fn raw(color: Rgb565) -> u16 {
        RawU16::from(color).into_inner()
    }
}

impl OriginDimensions for Ili9341 {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for Ili9341 {
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Glyphs may hang off the panel edge; clip them
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            if x >= self.width || y >= self.height {
                continue;
            }
            self.fill(Rect::new(x, y, 1, 1), Self::raw(color))?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let (Ok(x), Ok(y)) = (u16::try_from(area.top_left.x), u16::try_from(area.top_left.y)) else {
            return Ok(());
        };
        let rect = Rect::new(x, y, area.size.width as u16, area.size.height as u16);
        self.fill(rect, Self::raw(color))
    }
}

impl DisplayBackend for Ili9341 {
    fn clear(&mut self) -> Result<(), DisplayError> {
        let screen = Rect::new(0, 0, self.width, self.height);
        self.fill(screen, Self::raw(Self::color(Tone::Background)))
    }

    fn draw_text(&mut self, x: u16, y: u16, size: TextSize, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(Self::font(size), Self::color(Tone::Foreground));
        Text::with_baseline(text, Point::new(x as i32, y as i32), style, Baseline::Top).draw(self)?;
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, tone: Tone) -> Result<(), DisplayError> {
        if rect.is_empty() {
            return Ok(());
        }
        let color = Self::raw(Self::color(tone));
        let right = rect.x + rect.width - 1;
        let bottom = rect.y + rect.height - 1;
        self.fill(Rect::new(rect.x, rect.y, rect.width, 1), color)?;
        self.fill(Rect::new(rect.x, bottom, rect.width, 1), color)?;
        self.fill(Rect::new(rect.x, rect.y, 1, rect.height), color)?;
        self.fill(Rect::new(right, rect.y, 1, rect.height), color)
    }

    fn fill_rect(&mut self, rect: Rect, tone: Tone) -> Result<(), DisplayError> {
        self.fill(rect, Self::raw(Self::color(tone)))
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn glyph_size(&self, size: TextSize) -> (u16, u16) {
        let font = Self::font(size);
        (
            (font.character_size.width + font.character_spacing) as u16,
            font.character_size.height as u16,
        )
    }
}

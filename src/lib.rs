#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod command;
pub mod display;
pub mod drivers;
pub mod interface;
pub mod sequence;

#[cfg(test)]
mod mock;

use core::{iter, marker::PhantomData};

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{Dimensions, DrawTarget, OriginDimensions, Size},
    primitives::{PointsIter, Rectangle},
    Pixel,
};
use embedded_hal::delay::DelayNs;

pub use display::{Config, DisplayDescriptor, DisplayRotation};
pub use drivers::{Driver, ILI9806};
pub use interface::{DisplayError, DisplayInterface, SPIInterface};

// Hardware reset timing
const RESET_PULSE_US: u32 = 20;
const RESET_SETTLE_MS: u32 = 120;

pub struct TFT<DI: DisplayInterface, D: Driver> {
    pub interface: DI,
    config: Config,
    _phantom: PhantomData<D>,
}

impl<DI: DisplayInterface, D: Driver> TFT<DI, D> {
    pub fn new(interface: DI, config: Config) -> Self {
        Self {
            interface,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn release(self) -> DI {
        self.interface
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reset the panel, play the init sequence and apply rotation and colour order.
    pub fn init<DELAY>(&mut self, delay: &mut DELAY) -> Result<(), D::Error>
    where
        DELAY: DelayNs,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("init {}", D::DESCRIPTOR.name);

        self.interface.reset(delay, RESET_PULSE_US, RESET_SETTLE_MS)?;

        let sequence = self
            .config
            .init_sequence
            .unwrap_or(D::DESCRIPTOR.init_sequence);
        D::init_display(&mut self.interface, delay, sequence)?;

        D::set_var(&mut self.interface, self.config.rotate, self.config.bgr)
    }

    pub fn rotation(&self) -> Option<DisplayRotation> {
        self.config.rotation()
    }

    pub fn set_rotation(&mut self, rotation: DisplayRotation) -> Result<(), D::Error> {
        self.set_rotate_degrees(rotation.degrees())
    }

    /// Any degree value is accepted, but only 0/90/180/270 reach the controller.
    pub fn set_rotate_degrees(&mut self, rotate: u32) -> Result<(), D::Error> {
        self.config.rotate = rotate;
        D::set_var(&mut self.interface, self.config.rotate, self.config.bgr)
    }

    pub fn set_bgr(&mut self, bgr: bool) -> Result<(), D::Error> {
        self.config.bgr = bgr;
        D::set_var(&mut self.interface, self.config.rotate, self.config.bgr)
    }

    pub fn set_addr_win(&mut self, xs: u16, ys: u16, xe: u16, ye: u16) -> Result<(), D::Error> {
        D::set_addr_win(&mut self.interface, xs, ys, xe, ye)
    }

    /// Write colours into the inclusive window `(xs, ys)..=(xe, ye)`.
    pub fn write_pixels<I>(
        &mut self,
        xs: u16,
        ys: u16,
        xe: u16,
        ye: u16,
        colors: I,
    ) -> Result<(), D::Error>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        D::set_addr_win(&mut self.interface, xs, ys, xe, ye)?;
        D::write_vmem(&mut self.interface, color::pixel_bytes(colors))?;
        Ok(())
    }

    /// Write raw big-endian RGB565 bytes starting at the top left corner.
    pub fn write_frame(&mut self, buf: &[u8]) -> Result<(), D::Error> {
        if buf.len() > D::DESCRIPTOR.txbuflen || buf.len() % 2 != 0 {
            return Err(DisplayError::InvalidFormatError.into());
        }

        self.set_full_window()?;
        D::write_vmem(&mut self.interface, buf.iter().copied())?;
        Ok(())
    }

    pub fn fill_screen(&mut self, color: Rgb565) -> Result<(), D::Error> {
        self.set_full_window()?;
        let n = D::DESCRIPTOR.pixel_count();
        D::write_vmem(
            &mut self.interface,
            color::pixel_bytes(iter::repeat(color).take(n)),
        )?;
        Ok(())
    }

    fn set_full_window(&mut self) -> Result<(), D::Error> {
        let Size { width, height } = self.size();
        D::set_addr_win(
            &mut self.interface,
            0,
            0,
            (width - 1) as u16,
            (height - 1) as u16,
        )
    }
}

impl<DI: DisplayInterface, D: Driver> OriginDimensions for TFT<DI, D> {
    /// Logical size, exchanged in landscape
    fn size(&self) -> Size {
        let size = D::DESCRIPTOR.size();
        match self.config.rotation() {
            Some(rotation) if rotation.is_landscape() => Size::new(size.height, size.width),
            _ => size,
        }
    }
}

impl<DI: DisplayInterface, D: Driver> DrawTarget for TFT<DI, D> {
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounding_box = self.bounding_box();
        for Pixel(point, color) in pixels.into_iter() {
            if bounding_box.contains(point) {
                let (x, y) = (point.x as u16, point.y as u16);
                self.write_pixels(x, y, x, y, [color])?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable = area.intersection(&self.bounding_box());
        if drawable != *area {
            // partially visible, fall back to per-pixel writes
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }

        if let Some(bottom_right) = area.bottom_right() {
            let n = area.size.width as usize * area.size.height as usize;
            self.write_pixels(
                area.top_left.x as u16,
                area.top_left.y as u16,
                bottom_right.x as u16,
                bottom_right.y as u16,
                colors.into_iter().take(n),
            )?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if let Some(bottom_right) = area.bottom_right() {
            let n = area.size.width as usize * area.size.height as usize;
            self.write_pixels(
                area.top_left.x as u16,
                area.top_left.y as u16,
                bottom_right.x as u16,
                bottom_right.y as u16,
                iter::repeat(color).take(n),
            )?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color)
    }
}

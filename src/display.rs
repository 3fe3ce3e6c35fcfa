//! Panel description and the runtime display variables.

use embedded_graphics::prelude::Size;

use crate::sequence::Directive;

/// Rotation of the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayRotation {
    /// No rotation, normal display
    #[default]
    Rotate0,
    /// Rotate by 90 degress clockwise
    Rotate90,
    /// Rotate by 180 degress clockwise
    Rotate180,
    /// Rotate 270 degress clockwise
    Rotate270,
}

impl DisplayRotation {
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(DisplayRotation::Rotate0),
            90 => Some(DisplayRotation::Rotate90),
            180 => Some(DisplayRotation::Rotate180),
            270 => Some(DisplayRotation::Rotate270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            DisplayRotation::Rotate0 => 0,
            DisplayRotation::Rotate90 => 90,
            DisplayRotation::Rotate180 => 180,
            DisplayRotation::Rotate270 => 270,
        }
    }

    /// Width and height are exchanged
    pub fn is_landscape(self) -> bool {
        matches!(self, DisplayRotation::Rotate90 | DisplayRotation::Rotate270)
    }
}

/// Static description of one panel model.
#[derive(Clone, Copy, Debug)]
pub struct DisplayDescriptor {
    /// Driver name
    pub name: &'static str,
    /// Device-tree compatible string
    pub compatible: &'static str,
    /// Additional ids the driver binds to
    pub aliases: &'static [&'static str],
    /// Register width in bits
    pub regwidth: u8,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Transfer buffer length in bytes
    pub txbuflen: usize,
    /// Bits per pixel
    pub bpp: u8,
    /// Target frame rate
    pub fps: u8,
    pub init_sequence: &'static [Directive<'static>],
}

impl DisplayDescriptor {
    /// Whether `id` names this panel, either by driver name, compatible
    /// string or one of the aliases.
    pub fn matches(&self, id: &str) -> bool {
        id == self.name || id == self.compatible || self.aliases.iter().any(|&a| a == id)
    }

    /// Native (unrotated) size
    pub fn size(&self) -> Size {
        Size::new(self.width as _, self.height as _)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn frame_len(&self) -> usize {
        self.pixel_count() * (self.bpp as usize / 8)
    }
}

/// Display variables owned by the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Rotation in degrees. Values other than 0/90/180/270 leave the
    /// controller's orientation untouched.
    pub rotate: u32,
    /// Blue-green-red colour filter order
    pub bgr: bool,
    /// Replaces the driver's init sequence
    pub init_sequence: Option<&'static [Directive<'static>]>,
}

impl Config {
    pub fn rotation(&self) -> Option<DisplayRotation> {
        DisplayRotation::from_degrees(self.rotate)
    }

    pub fn with_rotation(mut self, rotation: DisplayRotation) -> Self {
        self.rotate = rotation.degrees();
        self
    }

    pub fn with_bgr(mut self, bgr: bool) -> Self {
        self.bgr = bgr;
        self
    }

    pub fn with_init_sequence(mut self, sequence: &'static [Directive<'static>]) -> Self {
        self.init_sequence = Some(sequence);
        self
    }
}

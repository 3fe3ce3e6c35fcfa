//! ILI9806 driver
//!
//! For:
//! - PiScreen 480x854 TFT

use super::Driver;
use crate::command::{madctl, Command};
use crate::display::{DisplayDescriptor, DisplayRotation};
use crate::interface::{DisplayError, DisplayInterface};
use crate::sequence::Directive::{self, Delay, EndOfSequence, WriteCommand};

pub const WIDTH: u16 = 480;
pub const HEIGHT: u16 = 854;
pub const BPP: u8 = 16;
pub const FPS: u8 = 30;
/// One full RGB565 frame
pub const TXBUFLEN: usize = WIDTH as usize * HEIGHT as usize * 2;

/// Matches the PiScreen panel.
#[rustfmt::skip]
pub const INIT_SEQUENCE: &[Directive<'static>] = &[
    // EXTC Command Set enable register
    WriteCommand(Command::SetExtc as u8, &[0xFF, 0x98, 0x06]),
    // SPI Interface Setting
    WriteCommand(Command::InterfaceModeControl as u8, &[0xE0]),
    // GIP 1
    WriteCommand(Command::GipControl1 as u8, &[
        0x03, 0x0F, 0x63, 0x69, 0x01, 0x01, 0x1B, 0x11, 0x70, 0x73,
        0xFF, 0xFF, 0x08, 0x09, 0x05, 0x00, 0xEE, 0xE2, 0x01, 0x00,
        0x0C,
    ]),
    // GIP 2
    WriteCommand(Command::GipControl2 as u8, &[0x01, 0x23, 0x45, 0x67, 0x01, 0x23, 0x45, 0x67]),
    // GIP 3
    WriteCommand(Command::GipControl3 as u8, &[0x00, 0x22, 0x27, 0x6A, 0xBC, 0xD8, 0x92, 0x22, 0x22]),
    // Vcom
    WriteCommand(Command::VcomControl as u8, &[0x1E]),
    WriteCommand(Command::EnVoltReg as u8, &[0x7F, 0x0F, 0x00]),
    WriteCommand(Command::PowerControl1 as u8, &[0xE3, 0x0B, 0x00]),
    WriteCommand(Command::LvglVoltageSetting as u8, &[0x08]),
    WriteCommand(Command::EngineeringSetting as u8, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x02]),
    WriteCommand(Command::DvddVoltageSetting as u8, &[0x74]),
    WriteCommand(Command::DisplayInversionControl as u8, &[0x00, 0x00, 0x00]),
    // 480x854
    WriteCommand(Command::ResolutionControl as u8, &[0x81]),
    WriteCommand(Command::FrameRateControl as u8, &[0x00, 0x10, 0x14]),
    WriteCommand(Command::PanelTimingControl1 as u8, &[0x29, 0x8A, 0x07]),
    WriteCommand(Command::PanelTimingControl2 as u8, &[0x40, 0xD2, 0x50, 0x28]),
    WriteCommand(Command::PowerControl2 as u8, &[0x17, 0x85, 0x85, 0x20]),
    WriteCommand(Command::PositiveGammaControl as u8, &[
        0x00, 0x0C, 0x15, 0x0D, 0x0F, 0x0C, 0x07, 0x05,
        0x07, 0x0B, 0x10, 0x10, 0x0D, 0x17, 0x0F, 0x00,
    ]),
    WriteCommand(Command::NegativeGammaControl as u8, &[
        0x00, 0x0D, 0x15, 0x0E, 0x10, 0x0D, 0x08, 0x06,
        0x07, 0x0C, 0x11, 0x11, 0x0E, 0x17, 0x0F, 0x00,
    ]),
    WriteCommand(Command::TearingEffectOn as u8, &[0x00]),
    WriteCommand(Command::MemoryAccessControl as u8, &[0x00]),
    // RGB565
    WriteCommand(Command::PixelFormatSet as u8, &[0x55]),
    // SPI Interface Setting
    WriteCommand(Command::DisplayFunctionControl as u8, &[0xA2]),
    WriteCommand(Command::SleepOut as u8, &[]),
    Delay(120),
    WriteCommand(Command::DisplayOn as u8, &[]),
    Delay(25),
    EndOfSequence,
];

/// 480 source x 854 gate, RGB565 over 4-wire SPI
pub struct ILI9806;

impl ILI9806 {
    /// MADCTL value for a rotation, BGR bit not included
    pub fn madctl_base(rotation: DisplayRotation) -> u8 {
        match rotation {
            DisplayRotation::Rotate0 => madctl::MX,
            DisplayRotation::Rotate90 => madctl::MX | madctl::MV,
            DisplayRotation::Rotate180 => madctl::MY | madctl::MX,
            DisplayRotation::Rotate270 => madctl::MY | madctl::MV,
        }
    }
}

impl Driver for ILI9806 {
    type Error = DisplayError;

    const DESCRIPTOR: DisplayDescriptor = DisplayDescriptor {
        name: "fb_ili9806",
        compatible: "ilitek,ili9806",
        aliases: &[
            "spi:fb_ili9806",
            "platform:fb_ili9806",
            "spi:ili9806",
            "platform:ili9806",
        ],
        regwidth: 8,
        width: WIDTH,
        height: HEIGHT,
        txbuflen: TXBUFLEN,
        bpp: BPP,
        fps: FPS,
        init_sequence: INIT_SEQUENCE,
    };

    fn set_addr_win<DI: DisplayInterface>(
        di: &mut DI,
        xs: u16,
        ys: u16,
        xe: u16,
        ye: u16,
    ) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("set_addr_win(xs={}, ys={}, xe={}, ye={})", xs, ys, xe, ye);

        let [xs_hi, xs_lo] = xs.to_be_bytes();
        let [xe_hi, xe_lo] = xe.to_be_bytes();
        di.send_command_data(Command::ColumnAddressSet as u8, &[xs_hi, xs_lo, xe_hi, xe_lo])?;

        let [ys_hi, ys_lo] = ys.to_be_bytes();
        let [ye_hi, ye_lo] = ye.to_be_bytes();
        di.send_command_data(Command::PageAddressSet as u8, &[ys_hi, ys_lo, ye_hi, ye_lo])?;

        di.send_command(Command::MemoryWrite as u8)?;
        Ok(())
    }

    fn set_var<DI: DisplayInterface>(
        di: &mut DI,
        rotate: u32,
        bgr: bool,
    ) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("set_var(rotate={}, bgr={})", rotate, bgr);

        // unknown rotations leave MADCTL as it is
        let Some(rotation) = DisplayRotation::from_degrees(rotate) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("ignoring rotation {}", rotate);
            return Ok(());
        };

        let value = Self::madctl_base(rotation) | if bgr { madctl::BGR } else { 0 };
        di.send_command_data(Command::MemoryAccessControl as u8, &[value])?;
        Ok(())
    }
}

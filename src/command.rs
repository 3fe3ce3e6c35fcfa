//! Command Table
//!
//! Standard DCS commands plus the ILI9806 extended set. The extended
//! registers (0xB0..) only respond after `SetExtc` has been written.

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Nop = 0x00,
    SwReset = 0x01,
    /// Leave sleep mode. Wait 120ms before the next command.
    SleepOut = 0x11,
    DisplayOff = 0x28,
    DisplayOn = 0x29,
    /// <<SC:u16, EC:u16>>, big endian
    ColumnAddressSet = 0x2a,
    /// <<SP:u16, EP:u16>>, big endian
    PageAddressSet = 0x2b,
    /// Arms the controller for the following pixel stream
    MemoryWrite = 0x2c,
    /// <<0:b7, M:b1>>
    TearingEffectOn = 0x35,
    /// Memory Access Control
    ///
    /// <<MY:b1, MX:b1, MV:b1, ML:b1, BGR:b1, MH:b1, 0:b2>>
    MemoryAccessControl = 0x36,
    /// Interface Pixel Format
    ///
    /// 0x55 = 16 bit/pixel on both RGB and MCU interface
    PixelFormatSet = 0x3a,
    /// Frame Rate Control (normal mode)
    FrameRateControl = 0xb1,
    DisplayInversionControl = 0xb4,
    DisplayFunctionControl = 0xb6,
    /// SPI Interface Setting
    InterfaceModeControl = 0xba,
    /// GIP 1
    GipControl1 = 0xbc,
    /// GIP 2
    GipControl2 = 0xbd,
    /// GIP 3
    GipControl3 = 0xbe,
    PowerControl1 = 0xc0,
    PowerControl2 = 0xc1,
    VcomControl = 0xc7,
    EngineeringSetting = 0xdf,
    PositiveGammaControl = 0xe0,
    NegativeGammaControl = 0xe1,
    EnVoltReg = 0xed,
    PanelTimingControl1 = 0xf1,
    PanelTimingControl2 = 0xf2,
    DvddVoltageSetting = 0xf3,
    /// Resolution control, 0x81 = 480x854
    ResolutionControl = 0xf7,
    LvglVoltageSetting = 0xfc,
    /// EXTC Command Set enable, <<0xff, 0x98, 0x06>>
    SetExtc = 0xff,
}

/// MADCTL bits
pub mod madctl {
    /// Row address order
    pub const MY: u8 = 0x80;
    /// Column address order
    pub const MX: u8 = 0x40;
    /// Row / column exchange
    pub const MV: u8 = 0x20;
    /// BGR colour filter order
    pub const BGR: u8 = 0x08;
}

use embedded_hal::delay::DelayNs;

use crate::display::DisplayDescriptor;
use crate::interface::{DisplayError, DisplayInterface};
use crate::sequence::{self, Directive};

pub use self::ili9806::*;

mod ili9806;

pub trait Driver {
    type Error: From<DisplayError>;

    const DESCRIPTOR: DisplayDescriptor;

    /// Bring the controller up from reset by playing `sequence`
    fn init_display<DI: DisplayInterface, DELAY: DelayNs>(
        di: &mut DI,
        delay: &mut DELAY,
        sequence: &[Directive<'_>],
    ) -> Result<(), Self::Error> {
        sequence::play(di, delay, sequence)?;
        Ok(())
    }

    /// Select the memory window for the following pixel data, inclusive
    fn set_addr_win<DI: DisplayInterface>(
        di: &mut DI,
        xs: u16,
        ys: u16,
        xe: u16,
        ye: u16,
    ) -> Result<(), Self::Error>;

    /// Program orientation and colour order
    fn set_var<DI: DisplayInterface>(di: &mut DI, rotate: u32, bgr: bool)
        -> Result<(), Self::Error>;

    /// Stream raw pixel bytes into the current window
    fn write_vmem<DI: DisplayInterface, I>(di: &mut DI, data: I) -> Result<usize, Self::Error>
    where
        I: IntoIterator<Item = u8>,
    {
        Ok(di.send_data_from_iter(data)?)
    }
}

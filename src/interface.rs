//! The display interface for SPI TFT controllers.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    InvalidFormatError,
    BusWriteError,
    DCError,
    RSTError,
    /// Malformed init sequence
    InvalidSequence,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormatError => write!(f, "invalid pixel data format"),
            Self::BusWriteError => write!(f, "SPI bus write error"),
            Self::DCError => write!(f, "D/C pin error"),
            Self::RSTError => write!(f, "reset pin error"),
            Self::InvalidSequence => write!(f, "malformed init sequence"),
        }
    }
}

/// Trait implemented by displays to provide implemenation of core functionality.
pub trait DisplayInterface {
    /// Send a command followed by its parameters. Commands without parameters
    /// send no data phase.
    fn send_command_data(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.send_command(command)?;
        if !data.is_empty() {
            self.send_data(data)?;
        }
        Ok(())
    }

    /// Send a command to the controller.
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send data for a command.
    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;

    /// Send data via iter, returns the number of bytes written
    fn send_data_from_iter<I>(&mut self, iter: I) -> Result<usize, DisplayError>
    where
        I: IntoIterator<Item = u8>;

    /// Hard reset: pull RST low for `pulse_us`, release it, then wait `settle_ms`.
    fn reset<D>(
        &mut self,
        delay: &mut D,
        pulse_us: u32,
        settle_ms: u32,
    ) -> Result<(), DisplayError>
    where
        D: DelayNs;
}

impl<T: DisplayInterface + ?Sized> DisplayInterface for &mut T {
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        T::send_command(self, command)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        T::send_data(self, data)
    }

    fn send_data_from_iter<I>(&mut self, iter: I) -> Result<usize, DisplayError>
    where
        I: IntoIterator<Item = u8>,
    {
        T::send_data_from_iter(self, iter)
    }

    fn reset<D>(
        &mut self,
        delay: &mut D,
        pulse_us: u32,
        settle_ms: u32,
    ) -> Result<(), DisplayError>
    where
        D: DelayNs,
    {
        T::reset(self, delay, pulse_us, settle_ms)
    }
}

// staging buffer for streamed pixel data
const CHUNK_SIZE: usize = 64;

/// 4-wire SPI display interface. Chip select is handled by the `SpiDevice`.
pub struct SPIInterface<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST> SPIInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        SPIInterface { spi, dc, rst }
    }

    /// Consume the display interface and return
    /// the underlying peripherial driver and GPIO pins used by it
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST> DisplayInterface for SPIInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        // 1 = data, 0 = command
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        self.spi
            .write(&[command])
            .map_err(|_| DisplayError::BusWriteError)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // 1 = data, 0 = command
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        self.spi
            .write(data)
            .map_err(|_| DisplayError::BusWriteError)
    }

    fn send_data_from_iter<I>(&mut self, iter: I) -> Result<usize, DisplayError>
    where
        I: IntoIterator<Item = u8>,
    {
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        let mut buf = [0u8; CHUNK_SIZE];
        let mut len = 0;
        let mut n = 0;
        for d in iter {
            buf[len] = d;
            len += 1;
            n += 1;
            if len == CHUNK_SIZE {
                self.spi
                    .write(&buf)
                    .map_err(|_| DisplayError::BusWriteError)?;
                len = 0;
            }
        }
        if len > 0 {
            self.spi
                .write(&buf[..len])
                .map_err(|_| DisplayError::BusWriteError)?;
        }

        Ok(n)
    }

    fn reset<D>(
        &mut self,
        delay: &mut D,
        pulse_us: u32,
        settle_ms: u32,
    ) -> Result<(), DisplayError>
    where
        D: DelayNs,
    {
        self.rst.set_low().map_err(|_| DisplayError::RSTError)?;
        delay.delay_us(pulse_us);
        self.rst.set_high().map_err(|_| DisplayError::RSTError)?;
        delay.delay_ms(settle_ms);
        Ok(())
    }
}

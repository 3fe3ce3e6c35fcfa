//! Init sequences and the players that send them.
//!
//! A sequence is an ordered list of [`Directive`]s. [`play`] sends them as-is;
//! [`play_legacy`] accepts the signed-word form found in device descriptions:
//! `-1, cmd, params..` for a command, `-2, ms` for a delay and `-3` to end.

use embedded_hal::delay::DelayNs;

use crate::interface::{DisplayError, DisplayInterface};

/// Largest number of parameters a single legacy command may carry.
pub const MAX_PARAMS: usize = 64;

const MARK_COMMAND: i16 = -1;
const MARK_DELAY: i16 = -2;
const MARK_END: i16 = -3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Command byte followed by its parameter bytes
    WriteCommand(u8, &'a [u8]),
    /// Sleep in milliseconds
    Delay(u32),
    EndOfSequence,
}

/// Play a typed sequence, stopping at the first `EndOfSequence`.
pub fn play<DI, DELAY>(
    di: &mut DI,
    delay: &mut DELAY,
    sequence: &[Directive<'_>],
) -> Result<(), DisplayError>
where
    DI: DisplayInterface,
    DELAY: DelayNs,
{
    for directive in sequence {
        match *directive {
            Directive::WriteCommand(cmd, params) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("init: cmd {:#x} {:x}", cmd, params);
                di.send_command_data(cmd, params)?;
            }
            Directive::Delay(ms) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("init: delay {}ms", ms);
                delay.delay_ms(ms);
            }
            Directive::EndOfSequence => break,
        }
    }
    Ok(())
}

/// Play a signed-word sequence.
///
/// The whole sequence is checked before anything is sent, so a malformed one
/// leaves the controller untouched.
pub fn play_legacy<DI, DELAY>(
    di: &mut DI,
    delay: &mut DELAY,
    words: &[i16],
) -> Result<(), DisplayError>
where
    DI: DisplayInterface,
    DELAY: DelayNs,
{
    walk_legacy(words, |_| Ok(()))?;
    walk_legacy(words, |directive| match directive {
        Directive::WriteCommand(cmd, params) => di.send_command_data(cmd, params),
        Directive::Delay(ms) => {
            delay.delay_ms(ms);
            Ok(())
        }
        Directive::EndOfSequence => Ok(()),
    })
}

fn walk_legacy<F>(words: &[i16], mut f: F) -> Result<(), DisplayError>
where
    F: FnMut(Directive<'_>) -> Result<(), DisplayError>,
{
    let mut i = 0;
    while i < words.len() {
        match words[i] {
            MARK_COMMAND => {
                let cmd = to_byte(words.get(i + 1).copied())?;
                i += 2;

                let mut params = [0u8; MAX_PARAMS];
                let mut n = 0;
                while i < words.len() && words[i] >= 0 {
                    if n == MAX_PARAMS {
                        return Err(DisplayError::InvalidSequence);
                    }
                    params[n] = to_byte(Some(words[i]))?;
                    n += 1;
                    i += 1;
                }
                f(Directive::WriteCommand(cmd, &params[..n]))?;
            }
            MARK_DELAY => {
                let ms = match words.get(i + 1) {
                    Some(&ms) if ms >= 0 => ms as u32,
                    _ => return Err(DisplayError::InvalidSequence),
                };
                i += 2;
                f(Directive::Delay(ms))?;
            }
            MARK_END => return f(Directive::EndOfSequence),
            _ => return Err(DisplayError::InvalidSequence),
        }
    }

    // ran off the end without an end marker
    Err(DisplayError::InvalidSequence)
}

fn to_byte(word: Option<i16>) -> Result<u8, DisplayError> {
    match word {
        Some(w) if (0..=0xff).contains(&w) => Ok(w as u8),
        _ => Err(DisplayError::InvalidSequence),
    }
}

//! Recording interface and delay for unit tests.

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::interface::{DisplayError, DisplayInterface};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(Vec<u8>),
    Reset { pulse_us: u32, settle_ms: u32 },
}

#[derive(Default)]
pub struct MockInterface {
    pub ops: Vec<Op>,
    /// Fail every bus write once set.
    pub fail: bool,
}

impl MockInterface {
    /// Collapse the recorded ops into `(command, parameters)` pairs. Data
    /// following a command is concatenated into its parameters.
    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
        for op in &self.ops {
            match op {
                Op::Command(c) => out.push((*c, Vec::new())),
                Op::Data(d) => {
                    if let Some((_, params)) = out.last_mut() {
                        params.extend_from_slice(d);
                    }
                }
                Op::Reset { .. } => {}
            }
        }
        out
    }

    pub fn commands(&self) -> Vec<u8> {
        self.writes().into_iter().map(|(c, _)| c).collect()
    }
}

impl DisplayInterface for MockInterface {
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::BusWriteError);
        }
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::BusWriteError);
        }
        self.ops.push(Op::Data(data.to_vec()));
        Ok(())
    }

    fn send_data_from_iter<I>(&mut self, iter: I) -> Result<usize, DisplayError>
    where
        I: IntoIterator<Item = u8>,
    {
        if self.fail {
            return Err(DisplayError::BusWriteError);
        }
        let data: Vec<u8> = iter.into_iter().collect();
        let n = data.len();
        self.ops.push(Op::Data(data));
        Ok(n)
    }

    fn reset<D>(
        &mut self,
        _delay: &mut D,
        pulse_us: u32,
        settle_ms: u32,
    ) -> Result<(), DisplayError>
    where
        D: DelayNs,
    {
        self.ops.push(Op::Reset { pulse_us, settle_ms });
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDelay {
    pub ns: Vec<u32>,
    pub us: Vec<u32>,
    pub ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns.push(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.us.push(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms.push(ms);
    }
}

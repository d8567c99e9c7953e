//! Sink trait for log output destinations

use super::error::Result;

pub trait Sink: Send {
    /// Write one complete, newline-terminated line.
    ///
    /// Either every byte reaches the destination or an error is returned.
    fn write_line(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &'static str;
}

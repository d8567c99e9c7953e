//! Sink implementations

pub mod file;
pub mod socket;

pub use file::FileSink;
pub use socket::SocketSink;

pub use crate::core::Sink;

use crate::core::Result;

/// The destination a [`Logger`](crate::Logger) writes to.
///
/// A logger owns exactly one destination for its whole lifetime and never
/// switches between variants. Dropping the destination closes the file or
/// socket.
pub enum Destination {
    File(FileSink),
    Socket(SocketSink),
}

impl Destination {
    /// Open a file destination for appending
    pub fn file(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        FileSink::open(path).map(Destination::File)
    }

    /// Connect a socket destination
    pub fn socket(host: &str, port: u16) -> Result<Self> {
        SocketSink::connect(host, port).map(Destination::Socket)
    }

    fn as_sink(&mut self) -> &mut dyn Sink {
        match self {
            Destination::File(sink) => sink,
            Destination::Socket(sink) => sink,
        }
    }
}

impl Sink for Destination {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.as_sink().write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        self.as_sink().flush()
    }

    fn name(&self) -> &'static str {
        match self {
            Destination::File(sink) => sink.name(),
            Destination::Socket(sink) => sink.name(),
        }
    }
}

impl From<FileSink> for Destination {
    fn from(sink: FileSink) -> Self {
        Destination::File(sink)
    }
}

impl From<SocketSink> for Destination {
    fn from(sink: SocketSink) -> Self {
        Destination::Socket(sink)
    }
}

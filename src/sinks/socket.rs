//! TCP socket sink
//!
//! Connects once at construction and writes plain-text lines to the peer.
//! There is no reconnection: a broken connection surfaces as write errors.

use crate::core::{LoggerError, Result, Sink};
use std::io::{self, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

pub struct SocketSink {
    stream: TcpStream,
    peer: SocketAddr,
}

impl SocketSink {
    /// Resolve `host:port` and connect to the first candidate that accepts.
    ///
    /// Candidates are tried in resolution order, IPv4 and IPv6 alike. A
    /// candidate that fails is dropped (closing its socket) before the next
    /// one is tried.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::Resolution`] if the name cannot be resolved or
    ///   resolves to nothing
    /// - [`LoggerError::Connection`] if no candidate accepts the connection
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let candidates = resolve(host, port)?;

        let mut last_error = None;
        for addr in candidates {
            match open_stream(&addr) {
                Ok(stream) => return Ok(Self { stream, peer: addr }),
                Err(e) => last_error = Some(e),
            }
        }

        Err(LoggerError::connection(host, port, last_error))
    }

    /// Address of the connected peer
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Shut down both directions so the peer observes EOF.
    ///
    /// Dropping the sink closes the socket as well; this only makes the
    /// end of the stream explicit.
    pub fn shutdown(&self) -> Result<()> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(LoggerError::write(self.name(), e)),
        }
    }
}

fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| LoggerError::resolution(host, port, e))?
        .collect();

    if addrs.is_empty() {
        return Err(LoggerError::resolution(
            host,
            port,
            io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
        ));
    }

    Ok(addrs)
}

fn open_stream(addr: &SocketAddr) -> io::Result<TcpStream> {
    let stream = TcpStream::connect(addr)?;

    // Lines go out as soon as they are written. The stream is adopted even
    // if the option is refused.
    if let Err(e) = stream.set_nodelay(true) {
        eprintln!("[LOGGER ERROR] cannot set TCP_NODELAY on {}: {}", addr, e);
    }

    Ok(stream)
}

impl Sink for SocketSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        // write_all retries short writes until the whole line is sent
        self.stream
            .write_all(line)
            .map_err(|e| LoggerError::write(self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.stream
            .flush()
            .map_err(|e| LoggerError::write(self.name(), e))
    }

    fn name(&self) -> &'static str {
        "socket"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_connect_and_write() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (mut conn, _) = listener.accept().unwrap();
            let mut received = String::new();
            conn.read_to_string(&mut received).unwrap();
            received
        });

        {
            let mut sink = SocketSink::connect("127.0.0.1", port).unwrap();
            assert_eq!(sink.peer_addr().port(), port);
            sink.write_line(b"hello\n").unwrap();
        }

        assert_eq!(server.join().unwrap(), "hello\n");
    }

    #[test]
    fn test_open_stream_adopts_first_connect() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let stream = open_stream(&addr).expect("listener accepts");
        assert_eq!(stream.peer_addr().unwrap(), addr);
        assert!(stream.nodelay().unwrap());
    }

    #[test]
    fn test_connect_refused() {
        // Grab a free port, then release it so nothing is listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = SocketSink::connect("127.0.0.1", port).err().expect("should fail");
        assert!(matches!(err, LoggerError::Connection { .. }));
        assert!(err.to_string().contains("Socket connection failed"));
    }

    #[test]
    fn test_unresolvable_host() {
        let err = SocketSink::connect("__invalid_host__", 12345)
            .err()
            .expect("should fail");
        assert!(matches!(err, LoggerError::Resolution { .. }));
        assert!(err.to_string().contains("getaddrinfo"));
    }

    #[test]
    fn test_shutdown_signals_eof() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let sink = SocketSink::connect("127.0.0.1", port).unwrap();
        let (mut conn, _) = listener.accept().unwrap();

        sink.shutdown().unwrap();

        let mut buf = [0u8; 1];
        assert_eq!(conn.read(&mut buf).unwrap(), 0);
    }
}

//! Client Connection
//!
//! One blocking TCP connection that runs a single request/response at a time.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;

use crate::config::ClientConfig;
use crate::error::{Result, WireError};
use crate::protocol::{decode_response, write_request, Command, Response};

/// A connection to one server
pub struct Connection {
    /// TCP stream reader (buffered for line reads)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered so a request goes out in one write)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,

    /// Set after a transport failure or desync; the stream is unusable
    broken: bool,
}

impl Connection {
    /// Connect using the address and timeouts in `config`
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let addr = config.resolve_addr()?;
        let stream = match config.connect_timeout() {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout)?,
            None => TcpStream::connect(addr)?,
        };

        stream.set_nodelay(config.nodelay)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        let conn = Self::from_stream(stream)?;
        tracing::debug!("Connected to {}", conn.peer_addr);
        Ok(conn)
    }

    /// Wrap an already connected stream
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
            broken: false,
        })
    }

    /// Send one request and read its reply.
    ///
    /// Encoding failures leave the connection untouched. Transport failures
    /// and desyncs mark it broken, after which every call fails with
    /// [`WireError::ConnectionBroken`].
    pub fn execute(&mut self, command: &Command, args: &[&[u8]]) -> Result<Response> {
        if self.broken {
            return Err(WireError::ConnectionBroken);
        }

        tracing::trace!("Sending {} to {}", command, self.peer_addr);

        let result = write_request(&mut self.writer, command, args)
            .and_then(|()| decode_response(&mut self.reader, command));

        match result {
            Ok(response) => {
                if response.is_error() {
                    tracing::debug!(
                        "{} from {} returned error: {}",
                        command,
                        self.peer_addr,
                        response.message()
                    );
                }
                Ok(response)
            }
            Err(e) => {
                if e.is_fatal() {
                    tracing::warn!("Connection to {} broken during {}: {}", self.peer_addr, command, e);
                    self.broken = true;
                }
                Err(e)
            }
        }
    }

    /// Whether an earlier failure made this connection unusable
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

//! Data connection dialing
//!
//! The seam through which the client opens secondary connections to the
//! address a server handed out in a PASV/EPSV reply.

use std::fmt;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use log::debug;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpStream, ToSocketAddrs};

/// Opens outbound data connections.
pub trait DataConnector {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;

    fn connect(
        &mut self,
        addr: SocketAddr,
    ) -> impl Future<Output = io::Result<Self::Stream>> + Send;
}

/// Dials plain TCP data connections, giving up after a fixed timeout.
#[derive(Debug, Clone)]
pub struct TcpConnector {
    timeout: Duration,
}

impl TcpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl DataConnector for TcpConnector {
    type Stream = TcpStream;

    async fn connect(&mut self, addr: SocketAddr) -> io::Result<TcpStream> {
        debug!("Dialing data connection to {}", addr);
        connect_with_timeout(addr, self.timeout).await
    }
}

/// Connects a TCP stream, turning an elapsed timeout into `TimedOut`.
pub(crate) async fn connect_with_timeout<A>(addr: A, timeout: Duration) -> io::Result<TcpStream>
where
    A: ToSocketAddrs + fmt::Display,
{
    let target = addr.to_string();
    match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("Timeout connecting to {}", target),
        )),
    }
}

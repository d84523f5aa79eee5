//! Module `session`
//!
//! Defines the `FtpClient` control session: the persistent command
//! connection, the collaborator used to dial data connections, and the
//! bookkeeping that keeps exactly one reply owed per command.

use std::net::SocketAddr;

use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::config::ClientConfig;
use crate::error::FtpError;
use crate::protocol::commands::loggable;
use crate::protocol::{Reply, read_reply};
use crate::transfer::connector::connect_with_timeout;
use crate::transfer::{DataConnector, PassiveMode, TcpConnector};

/// An FTP control session.
///
/// Only one command may be outstanding at a time, which `&mut self` on every
/// operation enforces.
pub struct FtpClient<S, C> {
    pub(crate) stream: BufReader<S>,
    pub(crate) connector: C,
    peer_addr: SocketAddr,
    passive_mode: PassiveMode,
    welcome: Reply,
    /// Set while a post-transfer confirmation has not been read yet.
    pub(crate) transfer_pending: bool,
}

impl FtpClient<TcpStream, TcpConnector> {
    /// Dials the configured server and reads its welcome reply.
    pub async fn connect(config: &ClientConfig) -> Result<Self, FtpError> {
        let control_socket = config.control_socket();
        let stream =
            connect_with_timeout(control_socket.as_str(), config.connect_timeout()).await?;
        let peer_addr = stream.peer_addr()?;
        info!("Connected to FTP server {} ({})", control_socket, peer_addr);

        let connector = TcpConnector::new(config.connect_timeout());
        let client = Self::new(stream, peer_addr, connector).await?;
        Ok(client.with_passive_mode(config.passive_mode))
    }
}

impl<S, C> FtpClient<S, C>
where
    S: AsyncRead + AsyncWrite + Unpin,
    C: DataConnector,
{
    /// Wraps an established control connection and reads the welcome reply.
    ///
    /// `peer_addr` is the remote end of `stream`; EPSV data connections reuse
    /// its IP address.
    pub async fn new(stream: S, peer_addr: SocketAddr, connector: C) -> Result<Self, FtpError> {
        let mut stream = BufReader::new(stream);
        let welcome = read_reply(&mut stream).await?;
        if !welcome.positive_complete() {
            warn!("Server {} greeted with {}", peer_addr, welcome);
        }

        Ok(Self {
            stream,
            connector,
            peer_addr,
            passive_mode: PassiveMode::default(),
            welcome,
            transfer_pending: false,
        })
    }

    pub fn with_passive_mode(mut self, passive_mode: PassiveMode) -> Self {
        self.passive_mode = passive_mode;
        self
    }

    /// The reply the server sent when the connection was opened.
    pub fn welcome(&self) -> &Reply {
        &self.welcome
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    pub fn passive_mode(&self) -> PassiveMode {
        self.passive_mode
    }

    /// Sends a command line and waits for its reply.
    ///
    /// The reply is returned whatever its code; only transport and framing
    /// failures are errors.
    pub async fn cmd(&mut self, command: &str) -> Result<Reply, FtpError> {
        if self.transfer_pending {
            let reply = self.read_transfer_reply().await?;
            warn!("Data connection dropped without close, server confirmed: {}", reply);
        }

        debug!("> {}", loggable(command));
        let writer = self.stream.get_mut();
        writer.write_all(format!("{}\r\n", command).as_bytes()).await?;
        writer.flush().await?;

        read_reply(&mut self.stream).await
    }

    /// Reads the reply that follows the end of a data transfer.
    pub(crate) async fn read_transfer_reply(&mut self) -> Result<Reply, FtpError> {
        self.transfer_pending = false;
        read_reply(&mut self.stream).await
    }
}

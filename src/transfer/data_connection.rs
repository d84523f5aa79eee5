//! Module `data_connection`
//!
//! The data stream handed to callers by `FtpClient::transfer`. It reads and
//! writes like the underlying socket, but closing it also collects the
//! server's post-transfer reply from the control connection.

use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadBuf};

use crate::client::FtpClient;
use crate::error::FtpError;
use crate::transfer::DataConnector;

/// A passive data connection tied to the control session that opened it.
///
/// The session stays mutably borrowed until the connection goes away, so no
/// other command can be issued mid-transfer. Call [`DataConnection::close`]
/// to learn whether the transfer succeeded; dropping it instead leaves the
/// confirmation to be drained by the session's next command.
pub struct DataConnection<'a, S, C: DataConnector> {
    /// `None` once `close` has released the socket.
    stream: Option<C::Stream>,
    client: &'a mut FtpClient<S, C>,
}

impl<'a, S, C> DataConnection<'a, S, C>
where
    S: AsyncRead + AsyncWrite + Unpin,
    C: DataConnector,
{
    pub(crate) fn new(stream: C::Stream, client: &'a mut FtpClient<S, C>) -> Self {
        client.transfer_pending = true;
        Self {
            stream: Some(stream),
            client,
        }
    }

    /// Closes the data stream, then reads the transfer's final reply.
    ///
    /// The socket is released in both directions before the reply is awaited,
    /// so a server still sending an unread download sees the connection go
    /// away and answers instead of blocking. The reply is always read so the
    /// control connection stays in step. A failure to close the socket is
    /// reported ahead of a negative reply.
    pub async fn close(mut self) -> Result<(), FtpError> {
        let shutdown = match self.stream.take() {
            Some(mut stream) => {
                let result = match stream.shutdown().await {
                    Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
                    other => other,
                };
                drop(stream);
                result
            }
            None => Ok(()),
        };

        let reply = self.client.read_transfer_reply().await;
        if let Err(e) = shutdown {
            if let Ok(reply) = &reply {
                debug!("Transfer confirmation after failed close: {}", reply);
            }
            return Err(e.into());
        }

        let reply = reply?;
        if !reply.positive_complete() {
            return Err(reply.into());
        }
        debug!("Transfer finished: {}", reply);
        Ok(())
    }
}

impl<S, C: DataConnector> Drop for DataConnection<'_, S, C> {
    fn drop(&mut self) {
        if self.stream.is_some() {
            warn!("Data connection dropped without close; confirmation still pending");
        }
    }
}

impl<S, C: DataConnector> fmt::Debug for DataConnection<'_, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataConnection")
            .field("closed", &self.stream.is_none())
            .finish_non_exhaustive()
    }
}

impl<S, C: DataConnector> DataConnection<'_, S, C> {
    fn stream_pin(self: Pin<&mut Self>) -> io::Result<Pin<&mut C::Stream>> {
        match self.get_mut().stream.as_mut() {
            Some(stream) => Ok(Pin::new(stream)),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "data connection already closed",
            )),
        }
    }
}

impl<S, C: DataConnector> AsyncRead for DataConnection<'_, S, C> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match self.stream_pin() {
            Ok(stream) => stream.poll_read(cx, buf),
            Err(e) => Poll::Ready(Err(e)),
        }
    }
}

impl<S, C: DataConnector> AsyncWrite for DataConnection<'_, S, C> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        match self.stream_pin() {
            Ok(stream) => stream.poll_write(cx, buf),
            Err(e) => Poll::Ready(Err(e)),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.stream_pin() {
            Ok(stream) => stream.poll_flush(cx),
            Err(e) => Poll::Ready(Err(e)),
        }
    }

    /// Shuts down the data stream only; use `close` to collect the reply.
    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.stream_pin() {
            Ok(stream) => stream.poll_shutdown(cx),
            Err(e) => Poll::Ready(Err(e)),
        }
    }
}

//! In-memory collaborators for unit tests.

use std::io;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, DuplexStream, ReadBuf, duplex};

use crate::client::FtpClient;
use crate::transfer::DataConnector;

/// Records dialed addresses and counts shutdowns and live instances of the
/// streams it hands out.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockConnector {
    dialed: Arc<Mutex<Vec<SocketAddr>>>,
    shutdowns: Arc<AtomicUsize>,
    open: Arc<AtomicUsize>,
    shutdown_error: Arc<Mutex<Option<io::ErrorKind>>>,
}

impl MockConnector {
    pub(crate) fn dialed(&self) -> Vec<SocketAddr> {
        self.dialed.lock().unwrap().clone()
    }

    pub(crate) fn shutdowns(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }

    /// Streams handed out and not dropped yet.
    pub(crate) fn open_streams(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Makes shutdown of streams dialed from now on fail with `kind`.
    pub(crate) fn fail_shutdown(&self, kind: io::ErrorKind) {
        *self.shutdown_error.lock().unwrap() = Some(kind);
    }
}

impl DataConnector for MockConnector {
    type Stream = MockDataStream;

    async fn connect(&mut self, addr: SocketAddr) -> io::Result<MockDataStream> {
        self.dialed.lock().unwrap().push(addr);
        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(MockDataStream {
            shutdowns: Arc::clone(&self.shutdowns),
            open: Arc::clone(&self.open),
            shutdown_error: *self.shutdown_error.lock().unwrap(),
        })
    }
}

/// A data stream that is always at end of file and swallows writes.
#[derive(Debug)]
pub(crate) struct MockDataStream {
    shutdowns: Arc<AtomicUsize>,
    open: Arc<AtomicUsize>,
    shutdown_error: Option<io::ErrorKind>,
}

impl Drop for MockDataStream {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AsyncRead for MockDataStream {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

impl AsyncWrite for MockDataStream {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        match self.shutdown_error {
            Some(kind) => Poll::Ready(Err(io::Error::new(kind, "shutdown failed"))),
            None => Poll::Ready(Ok(())),
        }
    }
}

/// Builds a session over an in-memory control connection whose server side
/// has already written `replies` (starting with the welcome).
pub(crate) async fn client_with(
    replies: &str,
    peer: &str,
) -> (FtpClient<DuplexStream, MockConnector>, DuplexStream, MockConnector) {
    let (local, mut remote) = duplex(4096);
    remote.write_all(replies.as_bytes()).await.unwrap();
    let connector = MockConnector::default();
    let client = FtpClient::new(local, peer.parse().unwrap(), connector.clone())
        .await
        .unwrap();
    (client, remote, connector)
}

//! Transfer operations
//!
//! Sequences TYPE, passive negotiation and the transfer command on the
//! control connection, handing the caller a ready data connection.

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::client::FtpClient;
use crate::error::FtpError;
use crate::protocol::Command;
use crate::transfer::{DataConnection, DataConnector, TransferType};

impl<S, C> FtpClient<S, C>
where
    S: AsyncRead + AsyncWrite + Unpin,
    C: DataConnector,
{
    /// Sets the representation type, opens a passive data connection and
    /// sends `command` (e.g. `RETR file`).
    ///
    /// The transfer command only needs a positive reply, typically 150. If it
    /// is refused the freshly opened data socket is closed before returning.
    pub async fn transfer(
        &mut self,
        command: &str,
        transfer_type: TransferType,
    ) -> Result<DataConnection<'_, S, C>, FtpError> {
        let reply = self.cmd(&Command::TYPE(transfer_type).to_string()).await?;
        if !reply.positive_complete() {
            return Err(reply.into());
        }

        let mut stream = self.open_passive().await?;

        let accepted = match self.cmd(command).await {
            Ok(reply) if !reply.positive() => Err(reply.into()),
            other => other,
        };
        let reply = match accepted {
            Ok(reply) => reply,
            Err(e) => {
                if let Err(close_err) = stream.shutdown().await {
                    debug!("Closing rejected data connection failed: {}", close_err);
                }
                drop(stream);
                return Err(e);
            }
        };

        info!("Transfer started: {}", reply);
        Ok(DataConnection::new(stream, self))
    }

    /// Runs `command` over a data connection in ASCII mode.
    pub async fn text(&mut self, command: &str) -> Result<DataConnection<'_, S, C>, FtpError> {
        self.transfer(command, TransferType::Ascii).await
    }

    /// Runs `command` over a data connection in image (binary) mode.
    pub async fn binary(&mut self, command: &str) -> Result<DataConnection<'_, S, C>, FtpError> {
        self.transfer(command, TransferType::Image).await
    }

    /// Downloads `path` in binary mode.
    pub async fn retrieve(&mut self, path: &str) -> Result<DataConnection<'_, S, C>, FtpError> {
        self.binary(&Command::RETR(path.to_string()).to_string()).await
    }

    /// Uploads to `path` in binary mode.
    pub async fn store(&mut self, path: &str) -> Result<DataConnection<'_, S, C>, FtpError> {
        self.binary(&Command::STOR(path.to_string()).to_string()).await
    }
}

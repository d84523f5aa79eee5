//! Client operations
//!
//! Session-level conveniences built on `FtpClient::cmd`.

use log::info;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::client::FtpClient;
use crate::error::FtpError;
use crate::protocol::{Command, ReplyCode};
use crate::transfer::DataConnector;

impl<S, C> FtpClient<S, C>
where
    S: AsyncRead + AsyncWrite + Unpin,
    C: DataConnector,
{
    /// Sends USER, then PASS if the server asks for one.
    ///
    /// Fails with the last reply unless it is a positive completion.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), FtpError> {
        let mut reply = self.cmd(&Command::USER(username.to_string()).to_string()).await?;
        if reply.code == ReplyCode::NEED_PASSWORD {
            reply = self.cmd(&Command::PASS(password.to_string()).to_string()).await?;
        }

        if !reply.positive_complete() {
            return Err(reply.into());
        }

        info!("Logged in to {} as {}", self.peer_addr(), username);
        Ok(())
    }

    /// Sends QUIT and closes the control connection.
    pub async fn quit(mut self) -> Result<(), FtpError> {
        self.cmd(&Command::QUIT.to_string()).await?;
        self.close().await
    }

    /// Closes the control connection without saying goodbye.
    pub async fn close(mut self) -> Result<(), FtpError> {
        self.stream.get_mut().shutdown().await?;
        info!("Closed control connection to {}", self.peer_addr());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::mock::client_with;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_login_with_password() {
        let (mut client, mut remote, _) = client_with(
            "220 Ready\r\n331 Need password\r\n230 Logged in\r\n",
            "192.0.2.1:21",
        )
        .await;

        client.login("alice", "alice123").await.unwrap();

        let mut sent = String::new();
        client.close().await.unwrap();
        remote.read_to_string(&mut sent).await.unwrap();
        assert_eq!(sent, "USER alice\r\nPASS alice123\r\n");
    }

    #[tokio::test]
    async fn test_login_without_password() {
        let (mut client, mut remote, _) =
            client_with("220 Ready\r\n230 No password needed\r\n", "192.0.2.1:21").await;

        client.login("anonymous", "unused").await.unwrap();

        let mut sent = String::new();
        client.close().await.unwrap();
        remote.read_to_string(&mut sent).await.unwrap();
        assert_eq!(sent, "USER anonymous\r\n");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let (mut client, _remote, _) = client_with(
            "220 Ready\r\n331 Need password\r\n530 Login incorrect\r\n",
            "192.0.2.1:21",
        )
        .await;

        let err = client.login("alice", "wrong").await.unwrap_err();
        let reply = err.reply().unwrap();
        assert_eq!(reply.code, ReplyCode::NOT_LOGGED_IN);
        assert_eq!(reply.message, "Login incorrect");
    }

    #[tokio::test]
    async fn test_login_rejects_unexpected_user_reply() {
        let (mut client, _remote, _) =
            client_with("220 Ready\r\n332 Need account\r\n", "192.0.2.1:21").await;

        let err = client.login("alice", "alice123").await.unwrap_err();
        assert_eq!(err.reply().map(|r| r.code), Some(ReplyCode::NEED_ACCOUNT));
    }

    #[tokio::test]
    async fn test_quit_sends_quit_and_closes() {
        let (client, mut remote, _) =
            client_with("220 Ready\r\n221 Goodbye\r\n", "192.0.2.1:21").await;

        client.quit().await.unwrap();

        let mut sent = String::new();
        remote.read_to_string(&mut sent).await.unwrap();
        assert_eq!(sent, "QUIT\r\n");
    }
}

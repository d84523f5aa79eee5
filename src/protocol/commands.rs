//! Module `commands`
//!
//! Defines the outbound FTP commands the client issues and their exact wire
//! text.

use std::fmt;

use crate::transfer::TransferType;

/// Represents an FTP command sent to the server.
///
/// Commands that carry an argument store it as a `String` variant. Anything
/// not listed here can still be sent as a raw string through `FtpClient::cmd`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    USER(String),       // Username for login
    PASS(String),       // Password for login
    TYPE(TransferType), // Representation type for the next transfer
    PASV,               // Request an IPv4 passive data port
    EPSV,               // Request an extended passive data port
    RETR(String),       // Retrieve/download file
    STOR(String),       // Store/upload file
    NOOP,
    QUIT,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::USER(name) => write!(f, "USER {}", name),
            Command::PASS(password) => write!(f, "PASS {}", password),
            Command::TYPE(transfer_type) => write!(f, "TYPE {}", transfer_type),
            Command::PASV => write!(f, "PASV"),
            Command::EPSV => write!(f, "EPSV"),
            Command::RETR(path) => write!(f, "RETR {}", path),
            Command::STOR(path) => write!(f, "STOR {}", path),
            Command::NOOP => write!(f, "NOOP"),
            Command::QUIT => write!(f, "QUIT"),
        }
    }
}

/// Returns the text of a command line that is safe to write to the log.
pub fn loggable(command: &str) -> &str {
    if command
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("PASS "))
    {
        "PASS ****"
    } else {
        command
    }
}

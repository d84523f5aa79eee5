//! Error types
//!
//! Defines the closed set of failures the FTP client can surface.

use std::fmt;
use std::io;

use crate::protocol::Reply;

/// Reply text that violates the line framing or passive address formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReply {
    ShortLine(String),
    InvalidCode(String),
    ExpectedSpace(String),
    PasvNoPort,
    EpsvNoPort,
}

impl fmt::Display for MalformedReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReply::ShortLine(line) => write!(f, "Short response line: {:?}", line),
            MalformedReply::InvalidCode(line) => {
                write!(f, "Invalid reply code in line: {:?}", line)
            }
            MalformedReply::ExpectedSpace(line) => {
                write!(f, "Expected space after reply code: {:?}", line)
            }
            MalformedReply::PasvNoPort => write!(f, "PASV reply provided no port"),
            MalformedReply::EpsvNoPort => write!(f, "EPSV reply provided no port"),
        }
    }
}

impl std::error::Error for MalformedReply {}

/// General FTP client error
///
/// `Reply` carries a well-formed server reply whose code failed the
/// classification the operation required, so callers can branch on the code.
#[derive(Debug)]
pub enum FtpError {
    Io(io::Error),
    MalformedReply(MalformedReply),
    Reply(Reply),
}

impl FtpError {
    /// Returns the server reply if this error is a negative reply.
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            FtpError::Reply(reply) => Some(reply),
            _ => None,
        }
    }
}

impl fmt::Display for FtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpError::Io(e) => write!(f, "I/O error: {}", e),
            FtpError::MalformedReply(e) => write!(f, "Malformed reply: {}", e),
            FtpError::Reply(reply) => write!(f, "Server replied: {}", reply),
        }
    }
}

impl std::error::Error for FtpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FtpError::Io(e) => Some(e),
            FtpError::MalformedReply(e) => Some(e),
            FtpError::Reply(reply) => Some(reply),
        }
    }
}

impl From<io::Error> for FtpError {
    fn from(error: io::Error) -> Self {
        FtpError::Io(error)
    }
}

impl From<MalformedReply> for FtpError {
    fn from(error: MalformedReply) -> Self {
        FtpError::MalformedReply(error)
    }
}

impl From<Reply> for FtpError {
    fn from(reply: Reply) -> Self {
        FtpError::Reply(reply)
    }
}

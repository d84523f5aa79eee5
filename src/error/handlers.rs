//! Error handlers
//!
//! Reporting helpers used by the command-line front end.

use crate::error::types::FtpError;
use log::error;

/// Log an FTP client error
pub fn handle_error(err: &FtpError) {
    error!("FTP Client Error: {}", err);
}

/// Convert an error to a sysexits-style process exit code
pub fn error_to_exit_code(err: &FtpError) -> i32 {
    match err {
        FtpError::Io(_) => 74,
        FtpError::MalformedReply(_) => 76,
        FtpError::Reply(reply) if reply.temporary() => 75,
        FtpError::Reply(_) => 69,
    }
}

//! FTP control session
//!
//! Owns the command connection and the request/reply discipline over it.

pub mod operations;
pub mod session;

pub use session::FtpClient;

//! Transfer module for the FTP client
//!
//! Passive data port negotiation, data connection dialing, and the transfer
//! sequence that ties a data connection to its closing reply.

pub mod connector;
pub mod data_connection;
pub mod modes;
pub mod operations;
pub mod passive;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types and functions
pub use connector::{DataConnector, TcpConnector};
pub use data_connection::DataConnection;
pub use modes::{PassiveMode, TransferType};
pub use passive::{parse_epsv_reply, parse_pasv_reply};

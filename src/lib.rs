pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod transfer;
pub mod utils;

pub use client::FtpClient;
pub use config::ClientConfig;
pub use error::{FtpError, MalformedReply};
pub use protocol::{Reply, ReplyCode};
pub use transfer::{DataConnection, DataConnector, PassiveMode, TcpConnector, TransferType};

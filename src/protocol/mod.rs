//! FTP Protocol implementation
//!
//! Reply codes, reply parsing and rendering, and outbound command text.

pub mod codes;
pub mod commands;
pub mod reader;
pub mod reply;

pub use codes::ReplyCode;
pub use commands::Command;
pub use reader::read_reply;
pub use reply::Reply;

//! Passive mode negotiation
//!
//! Requests a passive data port with PASV or EPSV and decodes the address
//! the server answers with.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use log::debug;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::client::FtpClient;
use crate::error::{FtpError, MalformedReply};
use crate::protocol::{Command, ReplyCode};
use crate::transfer::DataConnector;

const EPSV_START: &str = "(|||";
const EPSV_END: &str = "|)";

/// Returns the six comma-separated digit runs starting at the head of `s`.
fn scan_pasv_fields(s: &str) -> Option<[&str; 6]> {
    let mut fields = [""; 6];
    let mut rest = s;
    for (i, field) in fields.iter_mut().enumerate() {
        if i > 0 {
            rest = rest.strip_prefix(',')?;
        }
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        *field = &rest[..len];
        rest = &rest[len..];
    }
    Some(fields)
}

/// Decodes `h1,h2,h3,h4,p1,p2` found anywhere in a 227 reply message.
///
/// The first run of six comma-separated numbers wins; each must fit in a byte.
pub fn parse_pasv_reply(message: &str) -> Result<SocketAddr, FtpError> {
    let bytes = message.as_bytes();
    let fields = (0..bytes.len())
        .filter(|&i| bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()))
        .find_map(|i| scan_pasv_fields(&message[i..]))
        .ok_or(MalformedReply::PasvNoPort)?;

    let mut numbers = [0u8; 6];
    for (number, field) in numbers.iter_mut().zip(fields) {
        *number = field.parse().map_err(|_| MalformedReply::PasvNoPort)?;
    }

    let [h1, h2, h3, h4, p1, p2] = numbers;
    let ip = IpAddr::V4(Ipv4Addr::new(h1, h2, h3, h4));
    let port = (u16::from(p1) << 8) | u16::from(p2);
    Ok(SocketAddr::new(ip, port))
}

/// Decodes the port from the last `(|||<port>|)` in a 229 reply message.
pub fn parse_epsv_reply(message: &str) -> Result<u16, FtpError> {
    let start = message
        .rfind(EPSV_START)
        .ok_or(MalformedReply::EpsvNoPort)?
        + EPSV_START.len();
    let end = message
        .rfind(EPSV_END)
        .filter(|&end| end > start)
        .ok_or(MalformedReply::EpsvNoPort)?;

    message[start..end]
        .parse::<u16>()
        .map_err(|_| FtpError::from(MalformedReply::EpsvNoPort))
}

impl<S, C> FtpClient<S, C>
where
    S: AsyncRead + AsyncWrite + Unpin,
    C: DataConnector,
{
    /// Asks the server for a passive data port and returns its address.
    ///
    /// Any reply other than exactly 227 (PASV) or 229 (EPSV) is an error.
    pub async fn passive_address(&mut self) -> Result<SocketAddr, FtpError> {
        if self.passive_mode().use_epsv(&self.peer_addr()) {
            let reply = self.cmd(&Command::EPSV.to_string()).await?;
            if reply.code != ReplyCode::EXTENDED_PASSIVE {
                return Err(reply.into());
            }
            let port = parse_epsv_reply(&reply.message)?;
            Ok(SocketAddr::new(self.peer_addr().ip(), port))
        } else {
            let reply = self.cmd(&Command::PASV.to_string()).await?;
            if reply.code != ReplyCode::PASSIVE {
                return Err(reply.into());
            }
            parse_pasv_reply(&reply.message)
        }
    }

    /// Negotiates a passive port and dials it.
    pub async fn open_passive(&mut self) -> Result<C::Stream, FtpError> {
        let addr = self.passive_address().await?;
        debug!("Opening passive data connection to {}", addr);
        Ok(self.connector.connect(addr).await?)
    }
}

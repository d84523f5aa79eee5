//! Reply reader
//!
//! Reconstructs one `Reply` from the CRLF-framed lines of a control
//! connection, following the single-line and multi-line framing of
//! RFC 959 section 4.2.

use std::io;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::codes::ReplyCode;
use super::reply::Reply;
use crate::error::{FtpError, MalformedReply};

/// Reads a single line, stripping the line terminator.
///
/// A final line without a terminator at end of stream is returned as is.
async fn read_line<R>(reader: &mut R) -> Result<String, FtpError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(FtpError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "control connection closed",
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Parses the three leading digits of a reply line.
fn parse_code(line: &str) -> Result<ReplyCode, MalformedReply> {
    let digits = &line.as_bytes()[..3];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(MalformedReply::InvalidCode(line.to_string()));
    }

    let value = digits
        .iter()
        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
    ReplyCode::new(value).ok_or_else(|| MalformedReply::InvalidCode(line.to_string()))
}

/// Reads exactly one reply off the control connection.
///
/// Lines read before a failure are discarded; no partial reply is returned.
pub async fn read_reply<R>(reader: &mut R) -> Result<Reply, FtpError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    let line = read_line(reader).await?;
    if line.len() < 4 {
        return Err(MalformedReply::ShortLine(line).into());
    }

    let code = parse_code(&line)?;
    let reply = match line.as_bytes()[3] {
        b' ' => Reply::new(code, &line[4..]),
        b'-' => {
            let end_prefix = format!("{} ", code);
            let mut lines = vec![line[4..].to_string()];
            loop {
                let line = read_line(reader).await?;
                if let Some(last) = line.strip_prefix(end_prefix.as_str()) {
                    lines.push(last.to_string());
                    break;
                }
                lines.push(line);
            }
            Reply::new(code, lines.join("\n"))
        }
        _ => return Err(MalformedReply::ExpectedSpace(line).into()),
    };

    debug!("< {}", reply);
    Ok(reply)
}

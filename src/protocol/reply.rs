//! FTP reply value
//!
//! A reply is both the normal result of a command and, when its code is not
//! what the caller required, the error that gets surfaced.

use std::fmt;

use super::codes::ReplyCode;

/// A server reply: a code plus the unwrapped message body.
///
/// Multi-line messages keep one `\n` between lines with the code prefixes
/// stripped from the first and last lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: ReplyCode,
    pub message: String,
}

impl Reply {
    pub fn new(code: ReplyCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn preliminary(&self) -> bool {
        self.code.preliminary()
    }

    pub fn positive(&self) -> bool {
        self.code.positive()
    }

    pub fn complete(&self) -> bool {
        self.code.complete()
    }

    pub fn positive_complete(&self) -> bool {
        self.code.positive_complete()
    }

    pub fn temporary(&self) -> bool {
        self.code.temporary()
    }
}

/// Renders the reply in wire format, without a trailing CRLF.
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<&str> = self.message.split('\n').collect();
        match lines.as_slice() {
            [first, middle @ .., last] => {
                write!(f, "{}-{}\r\n", self.code, first)?;
                for line in middle {
                    write!(f, "{}\r\n", line)?;
                }
                write!(f, "{} {}", self.code, last)
            }
            _ => write!(f, "{} {}", self.code, self.message),
        }
    }
}

impl std::error::Error for Reply {}

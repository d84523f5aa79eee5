//! FTP reply codes
//!
//! Defines the RFC 959 reply codes and their hundreds-digit classification.

use std::fmt;

/// A three-digit FTP reply code in the range 100..=599.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplyCode(u16);

impl ReplyCode {
    pub const RESTART_MARKER: ReplyCode = ReplyCode(110);
    pub const SERVICE_READY_SOON: ReplyCode = ReplyCode(120);
    pub const STARTING_TRANSFER: ReplyCode = ReplyCode(125);
    pub const FILE_STATUS_OKAY: ReplyCode = ReplyCode(150);

    pub const OKAY: ReplyCode = ReplyCode(200);
    pub const SUPERFLUOUS: ReplyCode = ReplyCode(202);
    pub const SYSTEM_STATUS: ReplyCode = ReplyCode(211);
    pub const DIRECTORY_STATUS: ReplyCode = ReplyCode(212);
    pub const FILE_STATUS: ReplyCode = ReplyCode(213);
    pub const HELP_MESSAGE: ReplyCode = ReplyCode(214);
    pub const SYSTEM_TYPE: ReplyCode = ReplyCode(215);
    pub const SERVICE_READY: ReplyCode = ReplyCode(220);
    pub const SERVICE_CLOSING: ReplyCode = ReplyCode(221);
    pub const NO_TRANSFER: ReplyCode = ReplyCode(225);
    pub const CLOSING_DATA: ReplyCode = ReplyCode(226);
    pub const PASSIVE: ReplyCode = ReplyCode(227);
    pub const EXTENDED_PASSIVE: ReplyCode = ReplyCode(229);
    pub const LOGGED_IN: ReplyCode = ReplyCode(230);
    pub const ACTION_OKAY: ReplyCode = ReplyCode(250);
    pub const CREATED: ReplyCode = ReplyCode(257);

    pub const NEED_PASSWORD: ReplyCode = ReplyCode(331);
    pub const NEED_ACCOUNT: ReplyCode = ReplyCode(332);
    pub const PENDING_INFORMATION: ReplyCode = ReplyCode(350);

    pub const SERVICE_NOT_AVAILABLE: ReplyCode = ReplyCode(421);
    pub const CANT_OPEN_DATA: ReplyCode = ReplyCode(425);
    pub const TRANSFER_ABORTED: ReplyCode = ReplyCode(426);
    pub const ACTION_NOT_TAKEN: ReplyCode = ReplyCode(450);
    pub const LOCAL_ERROR: ReplyCode = ReplyCode(451);
    pub const INSUFFICIENT_STORAGE: ReplyCode = ReplyCode(452);

    pub const UNRECOGNIZED_COMMAND: ReplyCode = ReplyCode(500);
    pub const PARAMETER_SYNTAX_ERROR: ReplyCode = ReplyCode(501);
    pub const NOT_IMPLEMENTED: ReplyCode = ReplyCode(502);
    pub const BAD_SEQUENCE: ReplyCode = ReplyCode(503);
    pub const PARAMETER_NOT_IMPLEMENTED: ReplyCode = ReplyCode(504);
    pub const NOT_LOGGED_IN: ReplyCode = ReplyCode(530);
    pub const NO_ACCOUNT: ReplyCode = ReplyCode(532);
    pub const FILE_UNAVAILABLE: ReplyCode = ReplyCode(550);
    pub const PAGE_TYPE_UNKNOWN: ReplyCode = ReplyCode(551);
    pub const EXCEEDED_QUOTA: ReplyCode = ReplyCode(552);
    pub const FILE_NAME_NOT_ALLOWED: ReplyCode = ReplyCode(553);

    /// Returns `None` unless `code` lies in 100..=599.
    pub const fn new(code: u16) -> Option<Self> {
        if code >= 100 && code < 600 {
            Some(ReplyCode(code))
        } else {
            None
        }
    }

    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// 1yz: the action is being started, expect another reply.
    pub fn preliminary(self) -> bool {
        self.0 / 100 == 1
    }

    pub fn positive(self) -> bool {
        matches!(self.0 / 100, 1..=3)
    }

    /// A complete reply code is not necessarily positive.
    pub fn complete(self) -> bool {
        matches!(self.0 / 100, 2 | 4 | 5)
    }

    pub fn positive_complete(self) -> bool {
        self.0 / 100 == 2
    }

    /// 4yz: the command failed but may succeed if retried.
    pub fn temporary(self) -> bool {
        self.0 / 100 == 4
    }
}

impl TryFrom<u16> for ReplyCode {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        ReplyCode::new(code).ok_or(code)
    }
}

impl From<ReplyCode> for u16 {
    fn from(code: ReplyCode) -> Self {
        code.0
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

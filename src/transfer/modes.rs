//! FTP Transfer modes
//!
//! Representation types and the passive-mode negotiation policy.

use std::fmt;
use std::net::SocketAddr;

use serde::Deserialize;

/// Representation type selected with `TYPE` before a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    Ascii,
    Image,
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferType::Ascii => write!(f, "A"),
            TransferType::Image => write!(f, "I"),
        }
    }
}

/// Which command requests the passive data port
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassiveMode {
    /// EPSV when the control peer is an IPv6 address, PASV otherwise
    #[default]
    Auto,
    Pasv,
    Epsv,
}

impl PassiveMode {
    /// Decides whether to send EPSV for a control connection to `peer`.
    pub fn use_epsv(self, peer: &SocketAddr) -> bool {
        match self {
            PassiveMode::Auto => peer.is_ipv6(),
            PassiveMode::Pasv => false,
            PassiveMode::Epsv => true,
        }
    }
}

//! Error type shared by every module in this crate.

use thiserror::Error;

/// Everything that can go wrong talking to this crate, short of a
/// programmer error the type system already rules out (see the
/// `Client`/`Server` typestate in [`crate::client`] / [`crate::server`]).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SrpError {
    /// `A` or `B` was zero mod `N`, or was not in `[1, N)`.
    #[error("public value is zero mod N or out of range")]
    InvalidPublicValue,

    /// No RFC 5054 group exists at the requested bit length.
    #[error("no SRP group registered for {0}-bit N")]
    InvalidGroupSize(u32),

    /// A caller-supplied buffer was the wrong width for the active group.
    #[error("malformed buffer: expected {expected} bytes, got {got}")]
    MalformedBuffer { expected: usize, got: usize },

    /// `check_m1` or `check_m2` found a mismatched proof.
    #[error("authentication failed")]
    AuthenticationFailed,
}

//! SRP-6a (RFC 5054-compatible) password-authenticated key exchange.
//!
//! A client holding an identity and password, and a server holding only a
//! verifier derived from them, run a short message exchange that ends in a
//! shared session key neither side could have computed without knowing the
//! password — and the password itself never crosses the wire.
//!
//! This crate is the protocol engine only: transport, credential storage,
//! and session resumption are the caller's concern (see DESIGN.md). The
//! client and server sides are modeled as typestates (`Client`/`ClientReady`,
//! `Server`/`ServerReady`) so that calling an accessor before its required
//! transition is a compile error rather than a runtime one.

pub mod client;
pub mod compare;
pub mod error;
pub mod group;
pub mod hash;
pub mod numeric;
pub mod server;

pub use client::{Client, ClientReady};
pub use error::SrpError;
pub use group::{HashAlgorithm, SrpGroup};
pub use server::{Server, ServerReady};

use num_bigint::{BigUint, RandBigInt};
use rand::RngCore;

use numeric::{compute_v, compute_x, pad};

/// Derives a verifier from `(salt, identity, password)`, PAD'd to `|N|`
/// bytes. Pure and deterministic: the same inputs always produce the same
/// verifier.
pub fn compute_verifier(group: &SrpGroup, salt: &[u8], identity: &[u8], password: &[u8]) -> Vec<u8> {
    let x = compute_x(group, salt, identity, password);
    let v = compute_v(group, &x);
    pad(&v, group.n_bytes())
}

/// Draws `n_bytes` of randomness from the OS CSPRNG for use as an ephemeral
/// secret (`a` or `b`). Blocking; fills the whole buffer before returning it,
/// never a partial one.
pub fn generate_ephemeral(n_bytes: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n_bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    buf
}

/// Draws a uniform random exponent in `[1, n)`, as an alternative to
/// [`generate_ephemeral`] for callers that want a value already reduced to
/// the group's order rather than a raw byte buffer.
pub fn generate_ephemeral_exponent(group: &SrpGroup) -> BigUint {
    rand::thread_rng().gen_biguint_below(&group.n().clone())
}

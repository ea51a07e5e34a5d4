//! Client-side state machine: INIT → AWAITING_B → COMPLETE.
//!
//! The two states are distinct Rust types (`Client`, `ClientReady`) rather
//! than one struct with a runtime phase tag: calling `compute_m1` before
//! `set_b` consumed the prior state is a type error, not a runtime one.

use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::compare::ct_eq;
use crate::error::SrpError;
use crate::group::SrpGroup;
use crate::numeric::{
    check_public_value, compute_big_a, compute_client_s, compute_k, compute_m1, compute_m2,
    compute_session_key, compute_u, compute_x, decode_checked, pad,
};

/// `INIT` / `AWAITING_B`: holds `a`, `A`, `x`, `k` but nothing that depends
/// on the server's `B`.
pub struct Client {
    group: SrpGroup,
    k: BigUint,
    x: BigUint,
    a: BigUint,
    big_a: BigUint,
    a_bytes: Vec<u8>,
}

impl Client {
    /// Precomputes `k`, `x`, `a = int(secret)`, `A = g^a mod N`.
    ///
    /// `secret` is the caller-supplied ephemeral private key (`a`); this
    /// crate does not generate it itself — see [`crate::generate_ephemeral`].
    /// Ephemerals shorter than 256 bits are allowed with a warning, not
    /// rejected.
    pub fn new(group: &SrpGroup, salt: &[u8], identity: &[u8], password: &[u8], secret: &[u8]) -> Self {
        if secret.len() < 32 {
            tracing::warn!(
                bytes = secret.len(),
                "client ephemeral secret is shorter than 256 bits"
            );
        }
        let k = compute_k(group);
        let x = compute_x(group, salt, identity, password);
        let a = BigUint::from_bytes_be(secret);
        let big_a = compute_big_a(group, &a);
        let a_bytes = pad(&big_a, group.n_bytes());
        tracing::debug!("client initialized, awaiting B");
        Client {
            group: group.clone(),
            k,
            x,
            a,
            big_a,
            a_bytes,
        }
    }

    /// `A`, PAD'd to `|N|` bytes.
    pub fn compute_a(&self) -> &[u8] {
        &self.a_bytes
    }

    /// Ingests the server's `B`, computing `u`, `S`, `K`, `M1`, `M2`.
    /// Rejects `B` that is zero mod `N` or `>= N`.
    pub fn set_b(mut self, b: &[u8]) -> Result<ClientReady, SrpError> {
        let expected = self.group.n_bytes();
        if b.len() != expected {
            return Err(SrpError::MalformedBuffer {
                expected,
                got: b.len(),
            });
        }
        let big_b = decode_checked(&self.group, b)?;
        check_public_value(&self.group, &big_b)?;

        let u = compute_u(&self.group, &self.big_a, &big_b);
        let s = compute_client_s(&self.group, &big_b, &self.k, &self.x, &self.a, &u);
        let k_session = compute_session_key(&self.group, &s);
        let m1 = compute_m1(&self.group, &self.big_a, &big_b, &s);
        let m2 = compute_m2(&self.group, &self.big_a, &m1, &k_session);

        tracing::debug!("client completed key exchange");
        // `self` (and its `x`/`a`) is dropped at the end of this scope,
        // zeroizing them via `impl Drop for Client` below.
        Ok(ClientReady {
            s,
            k_session,
            m1,
            m2,
        })
    }
}

// No `Drop` impl here: `x` and `a` are `num_bigint::BigUint`, which has no
// `Zeroize` implementation to reach for; `a_bytes` is `A`, public protocol
// material, not a secret. `ClientReady` below holds the fields that are
// both secret and a fixed-size buffer, and zeroizes those.

/// `COMPLETE`: `S`, `K`, `M1`, `M2` are fixed for the rest of the session.
pub struct ClientReady {
    s: BigUint,
    k_session: Vec<u8>,
    m1: Vec<u8>,
    m2: Vec<u8>,
}

impl ClientReady {
    /// This session's proof, sent to the server.
    pub fn compute_m1(&self) -> &[u8] {
        &self.m1
    }

    /// The shared session key.
    pub fn compute_k(&self) -> &[u8] {
        &self.k_session
    }

    /// Verifies the server's `M2` against the locally computed value.
    /// Constant-time; this is the only channel by which the client learns
    /// the server is inauthentic.
    pub fn check_m2(&self, m2: &[u8]) -> Result<(), SrpError> {
        if ct_eq(&self.m2, m2) {
            Ok(())
        } else {
            Err(SrpError::AuthenticationFailed)
        }
    }
}

impl Drop for ClientReady {
    fn drop(&mut self) {
        // `s` is a `BigUint` and, as above, has no `Zeroize` impl to clear;
        // `k_session` is a plain byte buffer and gets the real treatment.
        self.k_session.zeroize();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Test-only accessor for `u`'s consumer: intermediate `S`, never part
    /// of the public API.
    pub fn client_internal_s(ready: &ClientReady) -> &BigUint {
        &ready.s
    }
}

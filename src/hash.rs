//! Streaming hash wrapper over the group's chosen digest.
//!
//! Lets callers build up a hash over several `update` calls before
//! `finalize`, or hash everything in one shot via [`hash_concat`] — both
//! hit the same digest, selected at runtime by [`HashAlgorithm`].

use digest::Digest;
use sha2::{Sha256, Sha512};

use crate::group::HashAlgorithm;

enum Inner {
    Sha256(Sha256),
    Sha512(Sha512),
}

/// A streaming hasher over whichever digest a group's derivations use.
pub struct SrpHash {
    inner: Inner,
}

impl SrpHash {
    pub fn new(alg: HashAlgorithm) -> Self {
        let inner = match alg {
            HashAlgorithm::Sha256 => Inner::Sha256(Sha256::new()),
            HashAlgorithm::Sha512 => Inner::Sha512(Sha512::new()),
        };
        SrpHash { inner }
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Sha256(h) => Digest::update(h, data),
            Inner::Sha512(h) => Digest::update(h, data),
        }
    }

    pub fn finalize(self) -> Vec<u8> {
        match self.inner {
            Inner::Sha256(h) => h.finalize().to_vec(),
            Inner::Sha512(h) => h.finalize().to_vec(),
        }
    }
}

/// One-shot hash of the concatenation of every part, under `alg`.
pub fn hash_concat(alg: HashAlgorithm, parts: &[&[u8]]) -> Vec<u8> {
    let mut h = SrpHash::new(alg);
    for part in parts {
        h.update(part);
    }
    h.finalize()
}

//! Constant-time buffer comparison for M1/M2 proofs.
//!
//! This is the sole comparison primitive in the crate; no `==` runs on a
//! secret-derived buffer anywhere else.

use subtle::ConstantTimeEq;

/// Compares two buffers in time depending only on their lengths, never on
/// the position of the first differing byte. Buffers of different length
/// are unequal without comparing content (SRP proofs are always `|H|`
/// bytes, so a length mismatch already indicates a malformed input, not a
/// secret-dependent branch).
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

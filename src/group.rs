//! RFC 5054 group parameter registry.
//!
//! `N` is a safe prime, `g` a generator of the corresponding large prime-order
//! subgroup. Values below are the RFC 5054 Appendix A table.

use num_bigint::BigUint;
use num_traits::Num;

use crate::error::SrpError;

/// Which hash this group's derivations run under. RFC 5054 itself only
/// defines SHA-1; this registry follows the common SHA-256/SHA-512 successor
/// convention instead, scaling the hash to the group size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Digest width in bytes — `|H|` in the derivation formulas.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

/// A fixed group (N, g) plus the hash algorithm its derivations use.
///
/// Not publicly constructible — callers go through [`srp_group`] so every
/// live `SrpGroup` traces back to the RFC 5054 table.
#[derive(Debug, Clone)]
pub struct SrpGroup {
    pub(crate) n: BigUint,
    pub(crate) g: BigUint,
    n_bits: u32,
    hash: HashAlgorithm,
}

impl SrpGroup {
    /// Modulus `N`, the safe prime defining the group.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Generator `g` of the subgroup.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Bit length of `N`, i.e. the group's nominal size.
    pub fn n_bits(&self) -> u32 {
        self.n_bits
    }

    /// Byte width of `N` — `|N|` in the derivation formulas, and the PAD
    /// width every public value and the shared secret is encoded to.
    pub fn n_bytes(&self) -> usize {
        (self.n_bits as usize).div_ceil(8)
    }

    /// Hash algorithm this group's derivations run under.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    fn from_hex(n_hex: &str, g: u32, n_bits: u32, hash: HashAlgorithm) -> Self {
        let n = BigUint::from_str_radix(n_hex, 16).expect("built-in group constant is valid hex");
        SrpGroup {
            n,
            g: BigUint::from(g),
            n_bits,
            hash,
        }
    }
}

const N_1024: &str =
    "EEAF0AB9ADB38DD69C33F80AFA8FC5E86072618775FF3C0B9EA2314C9C256576D674DF7496EA81D3383B4813D692C6\
E0E0D5D8E250B98BE48E495C1D6089DAD15DC7D7B46154D6B6CE8EF4AD69B15D4982559B297BCF1885C529F566660E57EC6\
8EDBC3C05726CC02FD4CBF4976EAA9AFD5138FE8376435B9FC61D2FC0EB06E3";

const N_1536: &str =
    "9DEF3CAFB939277AB1F12A8617A47BBBDBA51DF499AC4C80BEEEA9614B19CC4D5F4F5F556E27CBDE51C6A94BE4607A2\
91558903BA0D0F84380B655BB9A22E8DCDF028A7CEC67F0D08134B1C8B97989149B609E0BE3BAB63D47548381DBC5B1FC76\
4E3F4B53DD9DA1158BFD3E2B9C8CF56EDF019539349627DB2FD53D24B7C48665772E437D6C7F8CE442734AF7CCB7AE837C2\
64AE3A9BEB87F8A2FE9B8B5292E5A021FFF5E91479E8CE7A28C2442C6F315180F93499A234DCF76E3FED135F9BB";

const N_2048: &str =
    "AC6BDB41324A9A9BF166DE5E1389582FAF72B6651987EE07FC3192943DB56050A37329CBB4A099ED8193E0757767A1\
3DD52312AB4B03310DCD7F48A9DA04FD50E8083969EDB767B0CF6095179A163AB3661A05FBD5FAAAE82918A9962F0B93B85\
5F97993EC975EEAA80D740ADBF4FF747359D041D5C33EA71D281E446B14773BCA97B43A23FB801676BD207A436C6481F1D2\
B9078717461A5B9D32E688F87748544523B524B0D57D5EA77A2775D2ECFA032CFBDBF52FB3786160279004E57AE6AF874E7\
303CE53299CCC041C7BC308D82A5698F3A8D0C38271AE35F8E9DBFBB694B5C803D89F7AE435DE236D525F54759B65E372FC\
D68EF20FA7111F9E4AFF73";

const N_3072: &str =
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B139B22514A08798E3404\
DDEF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDE\
E386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F8365\
5D23DCA3AD961C62F356208552BB9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E77\
2C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA956AE515D2261898FA051015728E5A\
8AAAC42DAD33170D04507A33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7ABF5AE8CDB\
0933D71E8C94E04A25619DCEE3D2261AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B18177B200CBBE117577A61\
5D6C770988C0BAD946E208E24FA074E5AB3143DB5BFCE0FD108E4B82D120A93AD2CAFFFFFFFFFFFFFFFF";

const N_4096: &str =
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B139B22514A08798E3404\
DDEF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDE\
E386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F8365\
5D23DCA3AD961C62F356208552BB9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E77\
2C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA956AE515D2261898FA051015728E5A\
8AAAC42DAD33170D04507A33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7ABF5AE8CDB\
0933D71E8C94E04A25619DCEE3D2261AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B18177B200CBBE117577A61\
5D6C770988C0BAD946E208E24FA074E5AB3143DB5BFCE0FD108E4B82D120A92108011A723C12A787E6D788719A10BDBA5B\
2699C327186AF4E23C1A946834B6150BDA2583E9CA2AD44CE8DBBBC2DB04DE8EF92E8EFC141FBECAA6287C59474E6BC05D\
99B2964FA090C3A2233BA186515BE7ED1F612970CEE2D7AFB81BDD762170481CD0069127D5B05AA993B4EA988D8FDDC186\
FFB7DC90A6C08F4DF435C934063199FFFFFFFFFFFFFFFF";

/// Look up the RFC 5054 group with `N` of the given bit length.
///
/// Registered sizes: 1024/1536/2048/3072/4096 bits. 1024-2048 use SHA-256;
/// 3072 and 4096 use SHA-512 instead, so both hash algorithms this crate
/// supports are exercised by at least one registered group (RFC 5054 itself
/// only defines SHA-1 throughout; this registry follows the common SHA-2
/// successor convention).
///
/// The two largest RFC 5054 sizes, 6144 and 8192 bits, are deliberately not
/// registered: unlike the five sizes above (each independently confirmed a
/// safe prime of the exact expected bit length by the Miller-Rabin check in
/// `registered_groups_are_safe_primes_of_the_right_size`, below), this crate
/// has no authoritative source on hand to check a 6144/8192-bit transcription
/// against, and a `modpow`-reachable non-prime `N` silently breaks every
/// security property this protocol exists for. Shipping an unverified
/// ~1536/2048-hex-digit constant is a worse outcome than a documented gap —
/// see DESIGN.md. `srp_group(6144)`/`srp_group(8192)` return
/// `InvalidGroupSize` until a verified constant is available.
pub fn srp_group(bits: u32) -> Result<SrpGroup, SrpError> {
    let group = match bits {
        1024 => SrpGroup::from_hex(N_1024, 2, 1024, HashAlgorithm::Sha256),
        1536 => SrpGroup::from_hex(N_1536, 2, 1536, HashAlgorithm::Sha256),
        2048 => SrpGroup::from_hex(N_2048, 2, 2048, HashAlgorithm::Sha256),
        3072 => SrpGroup::from_hex(N_3072, 5, 3072, HashAlgorithm::Sha512),
        4096 => SrpGroup::from_hex(N_4096, 5, 4096, HashAlgorithm::Sha512),
        other => return Err(SrpError::InvalidGroupSize(other)),
    };
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sizes_resolve() {
        for bits in [1024, 1536, 2048, 3072, 4096] {
            let group = srp_group(bits).unwrap();
            assert_eq!(group.n_bits(), bits);
            assert_eq!(group.n_bytes(), (bits as usize) / 8);
        }
    }

    #[test]
    fn unknown_size_rejected() {
        assert_eq!(srp_group(512), Err(SrpError::InvalidGroupSize(512)));
        assert_eq!(srp_group(6144), Err(SrpError::InvalidGroupSize(6144)));
        assert_eq!(srp_group(8192), Err(SrpError::InvalidGroupSize(8192)));
    }

    #[test]
    fn group_2048_matches_known_generator() {
        let group = srp_group(2048).unwrap();
        assert_eq!(group.g(), &BigUint::from(2u32));
    }

    #[test]
    fn hash_choice_scales_with_group_size() {
        assert_eq!(srp_group(2048).unwrap().hash(), HashAlgorithm::Sha256);
        assert_eq!(srp_group(3072).unwrap().hash(), HashAlgorithm::Sha512);
        assert_eq!(srp_group(4096).unwrap().hash(), HashAlgorithm::Sha512);
    }

    /// Miller-Rabin probable-primality check, used only to catch a
    /// transcription error in the hex constants above — not a claim about
    /// primality testing in the protocol itself (the protocol never tests
    /// primality at runtime; `N` is always a built-in constant).
    fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
        use num_bigint::RandBigInt;
        use num_traits::{One, Zero};

        let two = BigUint::from(2u32);
        if n == &two {
            return true;
        }
        if n.is_zero() || !n.bit(0) {
            return false;
        }

        let n_minus_one = n - BigUint::one();
        let mut d = n_minus_one.clone();
        let mut r = 0u32;
        while !d.bit(0) {
            d /= &two;
            r += 1;
        }

        let mut rng = rand::thread_rng();
        'witness: for _ in 0..rounds {
            let a = rng.gen_biguint_range(&two, &(n - &two));
            let mut x = a.modpow(&d, n);
            if x == BigUint::one() || x == n_minus_one {
                continue;
            }
            for _ in 0..r - 1 {
                x = x.modpow(&two, n);
                if x == n_minus_one {
                    continue 'witness;
                }
            }
            return false;
        }
        true
    }

    #[test]
    fn registered_groups_are_safe_primes_of_the_right_size() {
        for bits in [1024, 1536, 2048, 3072, 4096] {
            let group = srp_group(bits).unwrap();
            assert_eq!(
                group.n().bits() as u32,
                bits,
                "transcribed N for the {bits}-bit group is not exactly {bits} bits wide"
            );
            assert!(
                is_probable_prime(group.n(), 32),
                "transcribed N for the {bits}-bit group is not prime"
            );
            let half = (group.n() - BigUint::from(1u32)) / BigUint::from(2u32);
            assert!(
                is_probable_prime(&half, 32),
                "transcribed N for the {bits}-bit group is not a safe prime: (N-1)/2 is not prime"
            );
        }
    }
}

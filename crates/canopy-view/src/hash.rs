//! Multi-value hash combination.
//!
//! The configuration hash is built from several independent subhashes that
//! must be folded into one value without losing distribution. Simple
//! addition or XOR would make `[a, b]` and `[b, a]` collide, so the
//! subhashes are fed through a single hasher in sequence instead.

use std::hash::{Hash, Hasher};

use ahash::AHasher;

/// Returns the hasher used for every digest this crate produces.
///
/// `AHasher::default()` is keyed with fixed constants, so equal inputs hash
/// equal for the lifetime of the process.
#[inline]
pub(crate) fn default_hasher() -> AHasher {
    AHasher::default()
}

/// Hashes a single value with the crate's default hasher.
#[inline]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = default_hasher();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Combines a sequence of subhashes into one order-sensitive hash.
///
/// The subhash count is mixed in first so that `[x]` and `[x, 0]` cannot
/// trivially collide.
pub fn combine_hashes(subhashes: &[u64]) -> u64 {
    let mut hasher = default_hasher();
    hasher.write_usize(subhashes.len());
    for &subhash in subhashes {
        hasher.write_u64(subhash);
    }
    hasher.finish()
}

//! Content hashing using FxHash.
//!
//! Uses `rustc_hash::FxHasher` for fast, deterministic hashing of small
//! data. Used by the config handle to detect whether `vellum.toml`
//! actually changed before paying for a reload.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_deterministic() {
        assert_eq!(compute("title = \"Test\""), compute("title = \"Test\""));
    }

    #[test]
    fn test_compute_distinguishes_content() {
        assert_ne!(compute("title = \"A\""), compute("title = \"B\""));
    }
}

//! Bucket selection for string keys.

/// Multiplier of the byte fold. Odd, so every step is invertible mod 2^n.
pub const HASH_MULTIPLIER: usize = 65599;

/// Map `key` to a bucket in `[0, bucket_count)`.
///
/// Folds the key's bytes into a multiplicative accumulator seeded with zero
/// (`h = h * 65599 + byte`, wrapping) and reduces the result modulo
/// `bucket_count`. Pure and allocation-free; equal keys always land in the
/// same bucket for a given `bucket_count`.
///
/// `bucket_count` must be non-zero; `CapacitySchedule` guarantees this for
/// every table.
#[inline]
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    let h = key
        .bytes()
        .fold(0usize, |h, b| h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(b as usize));
    h % bucket_count
}

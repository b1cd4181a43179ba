/// Return how many of `r` leftover units land in the first `k` of `n` slots, if the units are
/// spread as evenly as possible over the slots instead of being piled into the leading ones.
///
/// Both `k` and `r` must be at most `n`, and `n` must stay below `2^32` so that the product
/// cannot overflow.
pub fn spread_prefix(r: u64, n: u64, k: u64) -> u64 {
    debug_assert!(r < n && k <= n && n <= u32::MAX as u64);
    k * r / n
}

use rand::Rng;

/// Base delay plus a random jitter of up to `jitter_percent` percent.
pub fn jitter_wait(base_ms: u64, jitter_percent: u8) -> u64 {
    if jitter_percent == 0 || base_ms == 0 {
        return base_ms;
    }
    let jitter_range = std::cmp::max(1, base_ms.saturating_mul(u64::from(jitter_percent)) / 100);
    let mut rng = rand::rng();
    base_ms + rng.random_range(0..jitter_range)
}

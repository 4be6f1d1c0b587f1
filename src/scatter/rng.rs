//! Request-scoped random numbers keyed by `(seed, index)`.
//!
//! Each draw site builds a fresh generator from the layer seed and the
//! element index, so an element's jitter never depends on how many draws
//! happened before it or on which other layers ran.
//!
//! # Example
//!
//! ```
//! use pathstack::scatter::{RngStream, ScatterRng};
//!
//! let mut a = ScatterRng::new(42, 3, RngStream::Element);
//! let mut b = ScatterRng::new(42, 3, RngStream::Element);
//! assert_eq!(a.next_f32(), b.next_f32());
//! ```

/// Independent sequences drawn for the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RngStream {
    /// Sprite, angle, size, position and color jitter.
    Element,
    /// The frequency culling draw.
    Culling,
}

impl RngStream {
    fn salt(self) -> u64 {
        match self {
            RngStream::Element => 0x243F_6A88_85A3_08D3,
            RngStream::Culling => 0x1319_8A2E_0370_7344,
        }
    }
}

/// A xorshift64 generator.
#[derive(Debug, Clone)]
pub struct ScatterRng {
    state: u64,
}

impl ScatterRng {
    /// Seeds from `seed + index`, the key every jittered draw is tied to.
    pub fn new(seed: i32, index: u32, stream: RngStream) -> Self {
        let key = (seed as i64).wrapping_add(index as i64) as u64;
        Self::from_state(splitmix64(key ^ stream.salt()))
    }

    fn from_state(state: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = if state == 0 { 0x9E37_79B9_7F4A_7C15 } else { state };
        Self { state }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in `[-amount, amount)`.
    #[inline]
    pub fn signed(&mut self, amount: f32) -> f32 {
        (self.next_f32() * 2.0 - 1.0) * amount
    }
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

//! Fixed-length packed bit vectors.
//!
//! [`BitVec`] stores bits LSB-first in `u64` words: bit `i` lives in word
//! `i / 64` at position `i % 64`. All word and shift arithmetic stays in
//! this module; no other module manipulates raw words.
//!
//! # Tail invariant
//!
//! When the length is not a multiple of 64, the unused high bits of the last
//! word are always zero. Every constructor starts from zeroed storage and
//! every mutating operation touches in-bounds bits only, so word-level
//! popcounts never overcount past the logical length.

use rand::seq::index;
use rand::Rng;

/// A fixed-length sequence of bits packed into `u64` words.
///
/// Lengths are fixed at construction; binary operations require equal
/// lengths and treat a mismatch as a programming error (panic), not a
/// recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    /// Creates a vector of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Creates a vector of `len` bits with exactly `ones` bits set, at
    /// distinct positions sampled uniformly from `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `ones > len`.
    pub fn random_with_ones<R: Rng + ?Sized>(len: usize, ones: usize, rng: &mut R) -> Self {
        assert!(
            ones <= len,
            "cannot set {ones} bits in a vector of length {len}"
        );
        let mut bits = Self::zeros(len);
        for pos in index::sample(rng, len, ones) {
            bits.set(pos, true);
        }
        bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector has length zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn position(index: usize) -> (usize, u32) {
        (index / 64, (index % 64) as u32)
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "bit index {index} out of bounds (len {})",
            self.len
        );
        let (word, bit) = Self::position(index);
        self.words[word] & (1u64 << bit) != 0
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(
            index < self.len,
            "bit index {index} out of bounds (len {})",
            self.len
        );
        let (word, bit) = Self::position(index);
        if value {
            self.words[word] |= 1u64 << bit;
        } else {
            self.words[word] &= !(1u64 << bit);
        }
    }

    /// Inverts the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn flip(&mut self, index: usize) {
        assert!(
            index < self.len,
            "bit index {index} out of bounds (len {})",
            self.len
        );
        let (word, bit) = Self::position(index);
        self.words[word] ^= 1u64 << bit;
    }

    /// Returns the bitwise XOR of two equal-length vectors.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn xor(&self, other: &BitVec) -> BitVec {
        assert_eq!(
            self.len, other.len,
            "length mismatch in xor: {} vs {}",
            self.len, other.len
        );
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a ^ b)
            .collect();
        BitVec {
            words,
            len: self.len,
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Hamming distance to another equal-length vector: the number of
    /// positions where the two differ. Equivalent to
    /// `self.xor(other).count_ones()` without the intermediate allocation.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn hamming(&self, other: &BitVec) -> u32 {
        assert_eq!(
            self.len, other.len,
            "length mismatch in hamming: {} vs {}",
            self.len, other.len
        );
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }

    /// Iterates over the bits from position 0 upward.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.get(i))
    }
}

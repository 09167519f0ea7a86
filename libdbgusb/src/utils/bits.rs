//! Fixed-width bit vector.
//!
//! Bits are stored in machine words the same way the kernel bitmap helpers
//! do: bit `nr` lives in word `nr / BITS_PER_WORD` at position
//! `nr % BITS_PER_WORD`.

pub const BITS_PER_BYTE: usize = 8;
pub const BITS_PER_WORD: usize = BITS_PER_BYTE * std::mem::size_of::<usize>();

/// Mask of `nr` inside its word.
pub const fn bit_mask(nr: usize) -> usize {
    1usize << (nr % BITS_PER_WORD)
}

/// Index of the word holding bit `nr`.
pub const fn bit_word(nr: usize) -> usize {
    nr / BITS_PER_WORD
}

/// Number of words needed to hold `nbits` bits.
pub const fn bits_to_words(nbits: usize) -> usize {
    nbits.div_ceil(BITS_PER_WORD)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    words: Vec<usize>,
    nbits: usize,
}

impl Bitmap {
    /// Create a bitmap of `nbits` bits, all cleared.
    pub fn new(nbits: usize) -> Self {
        Self {
            words: vec![0; bits_to_words(nbits)],
            nbits,
        }
    }

    pub fn len(&self) -> usize {
        self.nbits
    }

    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Clear every bit.
    pub fn zero(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Set bit `nr`.
    ///
    /// # Panics
    /// Panics if `nr >= self.len()`.
    pub fn set(&mut self, nr: usize) {
        self.check(nr);
        self.words[bit_word(nr)] |= bit_mask(nr);
    }

    /// Clear bit `nr`.
    ///
    /// # Panics
    /// Panics if `nr >= self.len()`.
    pub fn clear(&mut self, nr: usize) {
        self.check(nr);
        self.words[bit_word(nr)] &= !bit_mask(nr);
    }

    /// Test bit `nr`.
    ///
    /// # Panics
    /// Panics if `nr >= self.len()`.
    pub fn test(&self, nr: usize) -> bool {
        self.check(nr);
        (self.words[bit_word(nr)] >> (nr % BITS_PER_WORD)) & 1 == 1
    }

    /// True when no bit is set.
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterate the indices of set bits in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nbits).filter(move |&nr| self.test(nr))
    }

    fn check(&self, nr: usize) {
        assert!(
            nr < self.nbits,
            "bit index {} out of range for bitmap of {} bits",
            nr,
            self.nbits
        );
    }
}

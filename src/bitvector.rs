//! Fixed-width bit vectors used as dataflow state.
//!
//! Every value the engine propagates is a [`BitVector`]: a fixed-length
//! vector of bits packed 64 per word. One analysis run fixes a single width
//! (the width of the analysis's top element) and every vector in that run
//! shares it. The type supports value equality for change detection and the
//! in-place set operations (union, intersection, difference) that concrete
//! analyses build their meet and transfer functions from.
//!
//! # Example
//!
//! ```rust
//! use bitflow::BitVector;
//!
//! let mut gen = BitVector::new(8);
//! gen.insert(1);
//! gen.insert(3);
//!
//! let mut state = BitVector::new(8);
//! state.insert(3);
//!
//! // union_with reports whether anything changed
//! assert!(state.union_with(&gen));
//! assert!(!state.union_with(&gen));
//! assert_eq!(state.count(), 2);
//! ```

/// A fixed-width bit vector.
///
/// The width is fixed at construction and never changes. All binary
/// operations require both operands to share one width; mixing widths is a
/// caller precondition violation and panics.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    /// The bits, packed 64 per word.
    words: Vec<u64>,
    /// The width in bits.
    len: usize,
}

impl BitVector {
    /// Creates an all-zeros vector of the given width.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Creates an all-ones vector of the given width.
    #[must_use]
    pub fn full(len: usize) -> Self {
        let mut vector = Self {
            words: vec![u64::MAX; len.div_ceil(64)],
            len,
        };
        vector.clear_excess_bits();
        vector
    }

    /// Returns the width of this vector in bits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index out of range");
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Sets the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn insert(&mut self, index: usize) {
        assert!(index < self.len, "bit index out of range");
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Clears the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) {
        assert!(index < self.len, "bit index out of range");
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Sets all bits.
    pub fn fill(&mut self) {
        self.words.fill(u64::MAX);
        self.clear_excess_bits();
    }

    /// Unions `other` into `self`, returning `true` if `self` changed.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn union_with(&mut self, other: &Self) -> bool {
        self.combine(other, |a, b| a | b)
    }

    /// Intersects `other` into `self`, returning `true` if `self` changed.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn intersect_with(&mut self, other: &Self) -> bool {
        self.combine(other, |a, b| a & b)
    }

    /// Removes every bit set in `other` from `self`, returning `true` if
    /// `self` changed.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn difference_with(&mut self, other: &Self) -> bool {
        self.combine(other, |a, b| a & !b)
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    pub fn iter(&self) -> BitIter<'_> {
        BitIter {
            vector: self,
            word_index: 0,
            pending: self.words.first().copied().unwrap_or(0),
        }
    }

    fn combine(&mut self, other: &Self, op: impl Fn(u64, u64) -> u64) -> bool {
        assert_eq!(self.len, other.len, "bit vectors must have equal width");
        let mut changed = false;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            let next = op(*a, *b);
            changed |= next != *a;
            *a = next;
        }
        changed
    }

    /// Keeps equality honest when the width is not a word multiple.
    fn clear_excess_bits(&mut self) {
        if !self.len.is_multiple_of(64) {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << (self.len % 64)) - 1;
            }
        }
    }
}

impl std::fmt::Debug for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set bits of a [`BitVector`].
pub struct BitIter<'a> {
    vector: &'a BitVector,
    word_index: usize,
    pending: u64,
}

impl Iterator for BitIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending == 0 {
            self.word_index += 1;
            if self.word_index >= self.vector.words.len() {
                return None;
            }
            self.pending = self.vector.words[self.word_index];
        }
        let bit = self.pending.trailing_zeros() as usize;
        self.pending &= self.pending - 1;
        Some(self.word_index * 64 + bit)
    }
}

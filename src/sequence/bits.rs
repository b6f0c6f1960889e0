//! Append-only packed bit sequence

use std::fmt;

/// Number of bits stored per backing word
const WORD_BITS: usize = u64::BITS as usize;

/// Words reserved up front; growth past this is left to `Vec`
const INITIAL_WORDS: usize = 4;

/// An ordered, append-only sequence of binary symbols.
///
/// Symbols are packed 64 to a word. Existing positions are never rewritten,
/// so a sequence only changes by growing at its end.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitSequence {
    words: Vec<u64>,
    len: usize,
}

impl BitSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            words: Vec::with_capacity(INITIAL_WORDS),
            len: 0,
        }
    }

    /// Create an empty sequence with room for `bits` symbols
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(bits.div_ceil(WORD_BITS)),
            len: 0,
        }
    }

    /// Create a sequence holding `len` copies of `bit`
    pub fn repeat(bit: bool, len: usize) -> Self {
        let mut seq = Self::with_capacity(len);
        for _ in 0..len {
            seq.append(bit);
        }
        seq
    }

    /// Append one symbol at the end
    pub fn append(&mut self, bit: bool) {
        let (word, offset) = (self.len / WORD_BITS, self.len % WORD_BITS);
        if offset == 0 {
            self.words.push(0);
        }
        if bit {
            self.words[word] |= 1 << offset;
        }
        self.len += 1;
    }

    /// Read the symbol at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let (word, offset) = (index / WORD_BITS, index % WORD_BITS);
        Some((self.words[word] >> offset) & 1 == 1)
    }

    /// Read the symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`. Every caller in the search derives its
    /// indices from the sequence length, so an out-of-range read is a logic
    /// error and is never recovered from.
    pub fn read(&self, index: usize) -> bool {
        match self.get(index) {
            Some(bit) => bit,
            None => panic!(
                "illegal read at position {} of a sequence of length {}",
                index, self.len
            ),
        }
    }

    /// Number of symbols in the sequence
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the symbols in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.read(i))
    }

    /// Copy this sequence and append `bit` to the copy
    pub fn extended(&self, bit: bool) -> Self {
        let mut child = self.clone();
        child.append(bit);
        child
    }

    /// Collect the symbols at `end`, `end - step`, `end - 2*step`, ... down to
    /// the first non-negative index, in that backward order.
    ///
    /// # Panics
    /// Panics if `end` is out of range or `step` is zero.
    pub fn extract_progression(&self, end: usize, step: usize) -> Self {
        assert!(step > 0, "progression step must be positive");
        let mut progression = Self::with_capacity(end / step + 1);
        for index in (0..=end).rev().step_by(step) {
            progression.append(self.read(index));
        }
        progression
    }

    /// True if this sequence equals the first `self.len()` symbols of `other`
    pub fn is_prefix_of(&self, other: &BitSequence) -> bool {
        if self.len > other.len {
            return false;
        }
        let full_words = self.len / WORD_BITS;
        if self.words[..full_words] != other.words[..full_words] {
            return false;
        }
        let tail = self.len % WORD_BITS;
        if tail == 0 {
            return true;
        }
        let mask = (1u64 << tail) - 1;
        (self.words[full_words] & mask) == (other.words[full_words] & mask)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence({})", self)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut seq = Self::new();
        for bit in iter {
            seq.append(bit);
        }
        seq
    }
}

impl std::str::FromStr for BitSequence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "empty" {
            return Ok(Self::new());
        }
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(format!(
                    "Invalid symbol '{}'. Valid symbols: 0, 1",
                    other
                )),
            })
            .collect()
    }
}

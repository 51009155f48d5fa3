//! Fixed-capacity output sink
//!
//! Every transformer that writes into a caller-sized destination goes through
//! [`BoundedBuffer`]. A buffer of capacity `k` keeps at most `k - 1`
//! characters; the last slot stands for the terminator of a C-style buffer so
//! that capacities behave the same as the templating callers expect.
//!
//! # Invariants
//!
//! 1. `len() <= capacity().saturating_sub(1)` at all times.
//! 2. Writes past the limit are dropped silently and mark the buffer as
//!    truncated; they never panic and never grow the allocation.

/// String sink that never exceeds its capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedBuffer {
    text: String,
    capacity: usize,
    chars: usize,
    truncated: bool,
}

impl BoundedBuffer {
    /// Create an empty buffer with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity.saturating_sub(1).min(4096)),
            capacity,
            chars: 0,
            truncated: false,
        }
    }

    /// Total capacity including the terminator slot
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum number of content characters
    pub fn limit(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    /// Number of characters written
    pub fn len(&self) -> usize {
        self.chars
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Whether another character would be dropped
    pub fn is_full(&self) -> bool {
        self.chars >= self.limit()
    }

    /// Characters that can still be written
    pub fn remaining(&self) -> usize {
        self.limit() - self.chars
    }

    /// Whether any write was dropped
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Append one character; returns `false` if it did not fit
    pub fn push(&mut self, ch: char) -> bool {
        if self.is_full() {
            self.truncated = true;
            return false;
        }
        self.text.push(ch);
        self.chars += 1;
        true
    }

    /// Append as much of `s` as fits; returns the number of characters written
    pub fn push_str(&mut self, s: &str) -> usize {
        let mut written = 0;
        for ch in s.chars() {
            if !self.push(ch) {
                break;
            }
            written += 1;
        }
        written
    }

    /// View the content
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the content
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for BoundedBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BoundedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Copy `s` into a fresh buffer of `capacity` and return the kept text
pub fn bounded(s: &str, capacity: usize) -> String {
    let mut buffer = BoundedBuffer::new(capacity);
    buffer.push_str(s);
    buffer.into_string()
}

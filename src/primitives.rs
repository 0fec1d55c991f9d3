//! Shared building blocks: element exchange, stack peeking and index spans.

/// Exchange the elements at `i` and `j`.
#[inline]
pub fn swap<T>(data: &mut [T], i: usize, j: usize) {
    data.swap(i, j);
}

/// Top of a stack, or `None` when it is empty.
#[inline]
pub fn peek<T>(stack: &[T]) -> Option<&T> {
    stack.last()
}

/// Closed index interval `[left, right]`.
///
/// A span with `left > right` is empty and is never explored by the
/// algorithms that accept one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub left: usize,
    pub right: usize,
}

impl Span {
    pub fn new(left: usize, right: usize) -> Self {
        Span { left, right }
    }

    /// Span covering a whole sequence of `len` elements, `None` if `len == 0`.
    pub fn of_len(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|right| Span { left: 0, right })
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.right - self.left + 1
        }
    }

    /// Whether every index of a non-empty span is valid for `len` elements.
    /// Empty spans always fit.
    pub fn fits(&self, len: usize) -> bool {
        self.is_empty() || self.right < len
    }

    /// Midpoint computed without overflow.
    #[inline]
    pub fn mid(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }
}

use std::fmt;
use std::ops::Add;

/// A half-open byte range `[start, end)` into the original source.
///
/// Every token, and every AST node built from tokens, carries one of these so
/// that diagnostics (and the LSP frontend) can point back at source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// The zero-width span at the very end of a source of the given length,
    /// used for the `EOF` token and for errors with no better anchor.
    pub const fn eof(source_len: u32) -> Self {
        Self { start: source_len, end: source_len }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The smallest span covering both `self` and `other`.
    pub fn merge(&self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}

/// Spans combine via `+` to cover both operands, matching the way the AST
/// builds a parent node's span out of its children's spans.
impl Add for Span {
    type Output = Span;

    fn add(self, rhs: Span) -> Span {
        self.merge(rhs)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_takes_the_widest_bounds() {
        let a = Span::new(3, 7);
        let b = Span::new(1, 4);
        assert_eq!(a.merge(b), Span::new(1, 7));
        assert_eq!(a + b, Span::new(1, 7));
    }

    #[test]
    fn eof_span_is_zero_width() {
        let s = Span::eof(42);
        assert!(s.is_empty());
        assert_eq!(s.start, 42);
    }
}

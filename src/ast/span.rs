//! Source spans and spanned values shared by the AST and IR.

use std::ops::Range;

/// A byte range in schema source text.
pub type Span = Range<usize>;

/// A value paired with the source range it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    /// The wrapped value.
    pub node: T,
    /// Where the value appears in source.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Creates a new spanned value.
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Maps the inner value while keeping the span.
    pub fn map<U, F>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned {
            node: f(self.node),
            span: self.span,
        }
    }

    /// Extracts the inner value, discarding the span.
    pub fn into_inner(self) -> T {
        self.node
    }
}

impl<T> AsRef<T> for Spanned<T> {
    fn as_ref(&self) -> &T {
        &self.node
    }
}

/// Returns a span covering both `start` and `end`.
pub fn merge_spans(start: &Span, end: &Span) -> Span {
    start.start..end.end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanned_map_keeps_span() {
        let spanned = Spanned::new("length", 3..9);
        let mapped = spanned.map(str::len);
        assert_eq!(mapped.node, 6);
        assert_eq!(mapped.span, 3..9);
    }

    #[test]
    fn spanned_into_inner() {
        let spanned = Spanned::new(42_i64, 0..2);
        assert_eq!(*spanned.as_ref(), 42);
        assert_eq!(spanned.into_inner(), 42);
    }

    #[test]
    fn merge_covers_both_ends() {
        assert_eq!(merge_spans(&(4..10), &(20..25)), 4..25);
    }
}

use ember_span::Span;

/// Every expression and statement node implements this so error reporting
/// and the LSP frontend's hover support can recover a source span from any
/// node without matching on its concrete variant.
pub trait Node {
    fn span(&self) -> Span;
}

/// Implements [`Node`] for a struct with a `span: Span` field.
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> ember_span::Span {
                self.span
            }
        }
    };
}

pub(crate) use simple_node_impl;

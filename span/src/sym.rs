//! Pre-interned symbols for the built-in function names, so the evaluator's
//! built-in dispatch never pays for an interner round trip.

use crate::Symbol;
use once_cell::sync::Lazy;

macro_rules! predefined_symbols {
    ($($name:ident => $text:literal),+ $(,)?) => {
        $(
            pub static $name: Lazy<Symbol> = Lazy::new(|| Symbol::intern($text));
        )+
    };
}

predefined_symbols! {
    len => "len",
    first => "first",
    last => "last",
    rest => "rest",
    push => "push",
}

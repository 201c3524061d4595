use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// A compact, interned handle to an identifier string.
///
/// Two `Symbol`s compare equal iff they were interned from equal strings, and
/// that comparison is a single integer compare rather than a string compare
/// -- the payoff for identifiers that get looked up in environments on every
/// evaluation step.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

struct Interner {
    strings: Vec<&'static str>,
    ids: HashMap<&'static str, u32>,
}

impl Interner {
    fn new() -> Self {
        Self { strings: Vec::new(), ids: HashMap::new() }
    }

    fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&id) = self.ids.get(s) {
            return Symbol(id);
        }
        // Strings are never evicted, so leaking them to get a `'static` slice
        // is sound: the interner (and thus every `Symbol` it handed out)
        // lives for the remainder of the process.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let id = self.strings.len() as u32;
        self.strings.push(leaked);
        self.ids.insert(leaked, id);
        Symbol(id)
    }

    fn resolve(&self, id: u32) -> &'static str {
        self.strings[id as usize]
    }
}

static INTERNER: Lazy<Mutex<Interner>> = Lazy::new(|| Mutex::new(Interner::new()));

impl Symbol {
    pub fn intern(s: &str) -> Symbol {
        INTERNER.lock().unwrap().intern(s)
    }

    pub fn as_str(&self) -> &'static str {
        INTERNER.lock().unwrap().resolve(self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

impl serde::Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_interns_to_the_same_symbol() {
        let a = Symbol::intern("hello");
        let b = Symbol::intern("hello");
        let c = Symbol::intern("world");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "hello");
    }
}

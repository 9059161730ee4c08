use std::collections::HashMap;

/// Variable bindings of a single run. Entries are created on first
/// assignment and overwritten afterwards; nothing is ever removed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SymbolTable {
    symbols: HashMap<String, bool>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    pub fn assign(&mut self, name: &str, value: bool) {
        self.symbols.insert(name.to_string(), value);
    }

    /// Returns `None` for a variable that was never assigned. There is no
    /// default value.
    pub fn lookup(&self, name: &str) -> Option<bool> {
        self.symbols.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.symbols
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }
}

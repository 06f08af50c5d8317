use std::collections::HashMap;

use crate::consts::KNOWN_MALFORMED;

/// Known malformed documents → number of trailing placeholder tokens to drop
/// from each of their rows before tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRegistry {
    entries: HashMap<String, usize>,
}

impl Default for MalformedRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for (file_name, trailing) in KNOWN_MALFORMED {
            registry.insert(*file_name, *trailing);
        }
        registry
    }
}

impl MalformedRegistry {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Later inserts for the same file name replace earlier ones.
    pub fn insert(&mut self, file_name: impl Into<String>, trailing: usize) {
        self.entries.insert(file_name.into(), trailing);
    }

    pub fn trailing_tokens(&self, file_name: &str) -> usize {
        self.entries.get(file_name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

use std::collections::HashSet;

/// Display names currently flagged as typing. Records state only.
#[derive(Debug, Default)]
pub struct TypingSet {
    names: HashSet<String>,
}

impl TypingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_typing(&mut self, name: &str, is_typing: bool) {
        if is_typing {
            self.names.insert(name.to_owned());
        } else {
            self.names.remove(name);
        }
    }

    pub fn clear(&mut self, name: &str) {
        self.names.remove(name);
    }

    pub fn is_typing(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Sorted snapshot.
    pub fn names(&self) -> Vec<String> {
        let mut out: Vec<String> = self.names.iter().cloned().collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

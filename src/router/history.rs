//! Session history

use std::fmt;

/// A browser-like history stack
pub trait History: fmt::Debug {
    /// Path of the current entry
    fn location(&self) -> &str;

    /// Add an entry after the current one, dropping any forward entries
    fn push(&mut self, path: &str);

    /// Overwrite the current entry
    fn replace(&mut self, path: &str);

    /// Move one entry back; `false` at the start of the stack
    fn back(&mut self) -> bool;

    /// Move one entry forward; `false` at the end of the stack
    fn forward(&mut self) -> bool;

    /// All entries, oldest first
    fn entries(&self) -> Vec<String>;
}

/// In-memory history
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = path.to_string();
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::new("/");
        history.push("/blog");
        history.push("/about");
        assert_eq!(history.location(), "/about");

        assert!(history.back());
        assert_eq!(history.location(), "/blog");
        assert!(history.back());
        assert!(!history.back());
        assert_eq!(history.location(), "/");

        assert!(history.forward());
        assert!(history.forward());
        assert!(!history.forward());
        assert_eq!(history.location(), "/about");
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/blog");
        history.push("/about");
        history.back();
        history.push("/blog/x");
        assert_eq!(history.entries(), vec!["/", "/blog", "/blog/x"]);
        assert!(!history.forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new("/");
        history.push("/blog/dead");
        history.replace("/blog");
        assert_eq!(history.entries(), vec!["/", "/blog"]);
        assert_eq!(history.index(), 1);
    }
}

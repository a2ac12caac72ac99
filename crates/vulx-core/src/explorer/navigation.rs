// Navigation history for the file explorer

use std::path::{Path, PathBuf};

/// Linear browsing history with a cursor, like a browser tab.
///
/// `index` is `None` while the history is empty, otherwise it points at
/// the current location.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<PathBuf>,
    index: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed list of locations with the first one current
    pub fn seeded(entries: Vec<PathBuf>) -> Self {
        let index = if entries.is_empty() { None } else { Some(0) };
        Self { entries, index }
    }

    /// Push a new path, dropping everything after the current position
    pub fn push(&mut self, path: PathBuf) {
        let keep = self.index.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(path);
        self.index = Some(self.entries.len() - 1);
    }

    /// Step back one entry
    pub fn back(&mut self) -> Option<&Path> {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Step forward one entry
    pub fn forward(&mut self) -> Option<&Path> {
        match self.index {
            Some(i) if i + 1 < self.entries.len() => {
                self.index = Some(i + 1);
                self.current()
            }
            _ => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.entries.len())
    }

    pub fn current(&self) -> Option<&Path> {
        self.index.map(|i| self.entries[i].as_path())
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn test_back_returns_previous() {
        let mut history = History::new();
        history.push(p("/a"));
        history.push(p("/b"));

        assert_eq!(history.back(), Some(Path::new("/a")));
        assert_eq!(history.index(), Some(0));
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::new();
        history.push(p("/a"));
        history.push(p("/b"));
        history.back();
        history.push(p("/c"));

        assert_eq!(history.entries(), &[p("/a"), p("/c")]);
        assert_eq!(history.forward(), None);
        assert_eq!(history.current(), Some(Path::new("/c")));
    }

    #[test]
    fn test_empty_history_is_inert() {
        let mut history = History::new();
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
        assert_eq!(history.index(), None);
        assert!(history.is_empty());
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_seeded_starts_at_first_entry() {
        let mut history = History::seeded(vec![p("C:/"), p("D:/")]);
        assert_eq!(history.current(), Some(Path::new("C:/")));
        assert_eq!(history.forward(), Some(Path::new("D:/")));

        let empty = History::seeded(Vec::new());
        assert_eq!(empty.index(), None);
    }
}

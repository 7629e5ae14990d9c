// Mon Feb 2 2026 - Alex

use crate::facts::FileId;
use indexmap::IndexMap;

/// Append-only table of distinct source file paths, referenced by index.
///
/// Deduplication is keyed on the provider's file identity, not on the path
/// string, so two files that happen to share a path stay distinct entries.
#[derive(Debug, Clone, Default)]
pub struct FileTable {
    entries: IndexMap<FileId, String>,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing index for a known identity, or appends the path
    /// and returns the new index.
    pub fn intern(&mut self, id: FileId, path: &str) -> usize {
        let entry = self.entries.entry(id);
        let index = entry.index();
        entry.or_insert_with(|| path.to_string());
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(|(_, path)| path.as_str())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_appends_in_order() {
        let mut table = FileTable::new();

        assert_eq!(table.intern(FileId(7), "a.cpp"), 0);
        assert_eq!(table.intern(FileId(2), "b.h"), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0), Some("a.cpp"));
        assert_eq!(table.get(1), Some("b.h"));
    }

    #[test]
    fn test_intern_dedups_by_identity() {
        let mut table = FileTable::new();

        let first = table.intern(FileId(7), "a.cpp");
        // Same identity, even under a different spelling, maps to the first entry.
        let again = table.intern(FileId(7), "./a.cpp");

        assert_eq!(first, again);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0), Some("a.cpp"));
    }

    #[test]
    fn test_same_path_distinct_identities() {
        let mut table = FileTable::new();

        let first = table.intern(FileId(1), "generated.h");
        let second = table.intern(FileId(2), "generated.h");

        assert_ne!(first, second);
        assert_eq!(table.len(), 2);
        assert_eq!(table.paths().collect::<Vec<_>>(), ["generated.h", "generated.h"]);
    }
}

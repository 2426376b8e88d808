//! Multi-select of members pending a bulk assignment

use tracing::debug;

use crate::types::Source;

/// Set of `(member, source)` pairs with stable insertion order.
///
/// Owned by the session and passed into the assignment functions; it is
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<(String, Source)>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the pair if missing, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, name: &str, source: Source) -> bool {
        if self.remove(name, source) {
            debug!(member = name, %source, "deselected member");
            return false;
        }
        self.items.push((name.to_string(), source));
        debug!(member = name, %source, "selected member");
        true
    }

    pub fn contains(&self, name: &str, source: Source) -> bool {
        self.items.iter().any(|(n, s)| n == name && *s == source)
    }

    /// Remove a single pair. Returns true if it was selected.
    pub fn remove(&mut self, name: &str, source: Source) -> bool {
        match self
            .items
            .iter()
            .position(|(n, s)| n == name && *s == source)
        {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Team headers act as assignment targets while anything is selected
    pub fn is_assign_mode(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Source)> {
        self.items.iter().map(|(n, s)| (n.as_str(), *s))
    }

    /// Palette lines: member name and where it currently is
    pub fn palette_entries(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .map(|(n, s)| (n.clone(), s.label()))
            .collect()
    }

    /// Take every item out, leaving the set empty
    pub(crate) fn take(&mut self) -> Vec<(String, Source)> {
        std::mem::take(&mut self.items)
    }
}

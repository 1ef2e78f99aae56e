#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::UserId;

/// Active members of the room, in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
}

/// One rendered member of the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: UserId,
    pub name: String,
}

impl Roster {
    #[must_use]
    pub fn contains(&self, id: &UserId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a member unless one with the same ID is already listed.
    ///
    /// Returns `true` when an entry was added.
    pub fn insert(&mut self, id: UserId, name: impl Into<String>) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.entries.push(RosterEntry { id, name: name.into() });
        true
    }

    /// Remove the member with `id`. Returns `true` when an entry was removed.
    pub fn remove(&mut self, id: &UserId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        self.entries.len() != before
    }
}

use std::fmt;

use crate::models::Pet;

/// Shown instead of a listing when nothing has been added yet.
pub const EMPTY_MESSAGE: &str = "There are no pets that are currently in the list.";

/// The in-memory collection of committed pets, in insertion order.
///
/// There is no removal or update; the registry only grows and is dropped
/// with the process.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    pets: Vec<Pet>,
}

/// Result of [`Registry::list_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    /// One rendered line per pet, oldest first.
    Pets(Vec<String>),
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Writes
    // ============================================================

    /// Appends `pet`. Duplicates are allowed.
    pub fn add(&mut self, pet: Pet) -> &Pet {
        tracing::debug!(
            kind = %pet.kind(),
            name = %pet.name,
            owner = %pet.owner,
            "registering pet"
        );
        self.pets.push(pet);
        &self.pets[self.pets.len() - 1]
    }

    // ============================================================
    // Reads
    // ============================================================

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pet> {
        self.pets.iter()
    }

    pub fn list_all(&self) -> Listing {
        if self.pets.is_empty() {
            return Listing::Empty;
        }
        Listing::Pets(self.pets.iter().map(Pet::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Pet;
    type IntoIter = std::slice::Iter<'a, Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_MESSAGE),
            Self::Pets(lines) => f.write_str(&lines.join("\n")),
        }
    }
}

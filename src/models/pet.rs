use std::fmt;

use serde::{Deserialize, Serialize};

use super::gender::Gender;

/// A pet registered with the shop.
///
/// Records are immutable once committed to the registry. The species payload
/// carries the single attribute that only applies to that kind of pet.
///
/// Rendering via [`fmt::Display`] always lists the shared fields in the order
/// Name, Gender, Owner, followed by the species attribute:
///
/// ```text
/// Dog: Name = Rex, Gender = Male, Owner = Alice, Breed = Labrador
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pet {
    pub gender: Gender,
    pub name: String,
    pub owner: String,
    #[serde(flatten)]
    pub species: Species,
}

/// The species of a pet together with its species-specific attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Species {
    Dog { breed: String },
    Cat { longhair: bool },
    Lizard { can_crawl: bool },
    Bird { will_fly: bool },
}

/// The species tag without its payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Dog,
    Cat,
    Lizard,
    Bird,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Self::Dog, Self::Cat, Self::Lizard, Self::Bird];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Lizard => "Lizard",
            Self::Bird => "Bird",
        }
    }

    /// Case-insensitive lookup by name, e.g. `"dOg"`.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    /// Label of the species attribute in a pet's rendering.
    pub fn field_label(&self) -> &'static str {
        match self {
            Self::Dog => "Breed",
            Self::Cat => "Longhair",
            Self::Lizard => "CanCrawl",
            Self::Bird => "WillFly",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Species {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Dog { .. } => Kind::Dog,
            Self::Cat { .. } => Kind::Cat,
            Self::Lizard { .. } => Kind::Lizard,
            Self::Bird { .. } => Kind::Bird,
        }
    }
}

impl Pet {
    pub fn new(
        gender: Gender,
        name: impl Into<String>,
        owner: impl Into<String>,
        species: Species,
    ) -> Self {
        Self {
            gender,
            name: name.into(),
            owner: owner.into(),
            species,
        }
    }

    pub fn dog(
        gender: Gender,
        name: impl Into<String>,
        breed: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self::new(gender, name, owner, Species::Dog { breed: breed.into() })
    }

    pub fn cat(
        gender: Gender,
        name: impl Into<String>,
        longhair: bool,
        owner: impl Into<String>,
    ) -> Self {
        Self::new(gender, name, owner, Species::Cat { longhair })
    }

    pub fn lizard(
        gender: Gender,
        name: impl Into<String>,
        can_crawl: bool,
        owner: impl Into<String>,
    ) -> Self {
        Self::new(gender, name, owner, Species::Lizard { can_crawl })
    }

    pub fn bird(
        gender: Gender,
        name: impl Into<String>,
        will_fly: bool,
        owner: impl Into<String>,
    ) -> Self {
        Self::new(gender, name, owner, Species::Bird { will_fly })
    }

    pub fn kind(&self) -> Kind {
        self.species.kind()
    }
}

/// Booleans render capitalised (`True`/`False`).
fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        write!(
            f,
            "{}: Name = {}, Gender = {}, Owner = {}, {} = ",
            kind,
            self.name,
            self.gender,
            self.owner,
            kind.field_label()
        )?;

        match &self.species {
            Species::Dog { breed } => f.write_str(breed),
            Species::Cat { longhair } => f.write_str(flag(*longhair)),
            Species::Lizard { can_crawl } => f.write_str(flag(*can_crawl)),
            Species::Bird { will_fly } => f.write_str(flag(*will_fly)),
        }
    }
}

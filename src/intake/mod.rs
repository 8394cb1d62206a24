//! The add-pet dialogue.
//!
//! Asks for kind, gender, name, owner and the species attribute in that
//! order, then shows the assembled record and asks for confirmation. The
//! first rejected response aborts the attempt; nothing reaches the registry
//! unless every field parsed and the user answered `y`.

mod validate;

pub use validate::*;

use std::io;

use thiserror::Error;

use crate::console::Console;
use crate::models::{Kind, Pet, Species};
use crate::registry::Registry;

pub const KIND_PROMPT: &str = "Enter the kind of pet (Dog, Cat, Lizard, Bird): ";
pub const GENDER_PROMPT: &str = "Enter the gender (Male, Female): ";
pub const NAME_PROMPT: &str = "Enter the name of the pet: ";
pub const OWNER_PROMPT: &str = "Enter the owner of the pet: ";
pub const CONFIRM_PROMPT: &str = "Do you want to proceed? (y/n): ";

/// The only answer to [`CONFIRM_PROMPT`] that commits the pet.
const AFFIRMATIVE: &str = "y";

/// Errors that end an add-pet attempt.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

/// How an add-pet attempt that passed validation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Added(Pet),
    Cancelled,
}

/// Runs the add-pet dialogue on `console`, committing to `registry` on
/// confirmation.
///
/// On `Err`, the registry is unchanged. Once the pet is committed the outcome
/// is `Added`, even if the success message cannot be written.
pub fn add_pet<C>(console: &mut C, registry: &mut Registry) -> Result<IntakeOutcome, IntakeError>
where
    C: Console + ?Sized,
{
    let pet = match read_pet(console) {
        Ok(pet) => pet,
        Err(IntakeError::Validation(e)) => {
            tracing::warn!(error = %e, "pet intake rejected");
            return Err(e.into());
        }
        Err(e) => return Err(e),
    };

    console.say(&format!("Your inputted details about the pet: \n{}", pet))?;

    if !confirm(console)? {
        tracing::debug!(kind = %pet.kind(), name = %pet.name, "pet intake cancelled");
        console.say("The user has cancelled.")?;
        return Ok(IntakeOutcome::Cancelled);
    }

    let added = registry.add(pet).clone();

    // The pet is committed; a failed report must not turn into an `Err`.
    if let Err(e) = console.say(&format!("The pet: {} has been added successfully!", added)) {
        tracing::error!(error = %e, "failed to report added pet");
    }
    Ok(IntakeOutcome::Added(added))
}

/// Collects and validates every field, stopping at the first bad response.
pub fn read_pet<C>(console: &mut C) -> Result<Pet, IntakeError>
where
    C: Console + ?Sized,
{
    let kind = parse_kind(&ask(console, KIND_PROMPT)?)?;
    let gender = parse_gender(&ask(console, GENDER_PROMPT)?)?;
    let name = require_text(&ask(console, NAME_PROMPT)?, ValidationError::EmptyName)?;
    let owner = require_text(&ask(console, OWNER_PROMPT)?, ValidationError::EmptyOwner)?;
    let species = read_species(console, kind)?;

    Ok(Pet::new(gender, name, owner, species))
}

fn read_species<C>(console: &mut C, kind: Kind) -> Result<Species, IntakeError>
where
    C: Console + ?Sized,
{
    let answer = ask(console, species_prompt(kind))?;

    let species = match kind {
        Kind::Dog => Species::Dog {
            breed: require_text(&answer, ValidationError::EmptyBreed)?,
        },
        Kind::Cat => Species::Cat {
            longhair: parse_yes_no(&answer, "longhaired")?,
        },
        Kind::Lizard => Species::Lizard {
            can_crawl: parse_yes_no(&answer, "crawl")?,
        },
        Kind::Bird => Species::Bird {
            will_fly: parse_yes_no(&answer, "fly")?,
        },
    };

    Ok(species)
}

/// Question asked for the species attribute of `kind`.
pub fn species_prompt(kind: Kind) -> &'static str {
    match kind {
        Kind::Dog => "Enter the breed of the dog: ",
        Kind::Cat => "Is the cat longhaired (yes/no)? ",
        Kind::Lizard => "Can the lizard crawl (yes/no)? ",
        Kind::Bird => "Can the bird fly (yes/no)? ",
    }
}

/// Anything but `y` (any casing), including end of input, declines.
fn confirm<C>(console: &mut C) -> Result<bool, IntakeError>
where
    C: Console + ?Sized,
{
    let answer = console.prompt(CONFIRM_PROMPT)?.unwrap_or_default();
    Ok(answer.trim().eq_ignore_ascii_case(AFFIRMATIVE))
}

/// End of input reads as an empty response.
fn ask<C>(console: &mut C, text: &str) -> Result<String, IntakeError>
where
    C: Console + ?Sized,
{
    Ok(console.prompt(text)?.unwrap_or_default())
}

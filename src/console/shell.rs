//! Top-level menu loop.

use anyhow::Result;

use super::Console;
use crate::intake::{self, IntakeError};
use crate::registry::Registry;

const BANNER: [&str; 10] = [
    "Welcome to the Pet shop!",
    "*******************************",
    "Please select from the choices below:",
    "-------------------------------",
    "1. - Add a Pet",
    "-------------------------------",
    "2. - List of all Pets",
    "-------------------------------",
    "3. - Exit application",
    "-------------------------------",
];

pub const MENU_PROMPT: &str = "Please choose your desired function: ";
pub const INVALID_OPTION: &str = "Invalid option! Please try again.";

/// An entry of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPet,
    ListPets,
    Exit,
}

impl MenuChoice {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::AddPet),
            "2" => Some(Self::ListPets),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Shows the menu until the user exits or input runs out.
///
/// A failed add-pet attempt is reported and the menu comes back; only a
/// console failure while showing the menu itself ends the loop with an error.
pub fn run<C>(console: &mut C, registry: &mut Registry) -> Result<()>
where
    C: Console + ?Sized,
{
    loop {
        for line in BANNER {
            console.say(line)?;
        }

        let Some(answer) = console.prompt(MENU_PROMPT)? else {
            tracing::debug!("input closed, leaving menu");
            return Ok(());
        };

        match MenuChoice::from_str(&answer) {
            Some(MenuChoice::AddPet) => add_pet(console, registry)?,
            Some(MenuChoice::ListPets) => console.say(&registry.list_all().to_string())?,
            Some(MenuChoice::Exit) => return Ok(()),
            None => console.say(INVALID_OPTION)?,
        }
    }
}

fn add_pet<C>(console: &mut C, registry: &mut Registry) -> Result<()>
where
    C: Console + ?Sized,
{
    // Failing to write a report ends the menu loop, like any other output failure.
    match intake::add_pet(console, registry) {
        Ok(_) => {}
        Err(IntakeError::Validation(e)) => console.say(&e.to_string())?,
        Err(e) => {
            tracing::error!(error = %e, "add pet failed");
            console.say(&format!("System error: {}", e))?;
        }
    }
    Ok(())
}

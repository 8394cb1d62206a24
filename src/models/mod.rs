//! Domain models for the pet registry.
//!
//! - [`Pet`]: a validated pet record. The shared fields (gender, name, owner)
//!   live on the struct; the one attribute unique to each kind lives in its
//!   [`Species`] payload.
//! - [`Kind`]: the payload-free species tag, used while a pet is still being
//!   collected and to look up the label of its variant field.
//! - [`Gender`]: one of the two accepted genders.
//!
//! Nothing in this module validates. Callers hand in values that already
//! passed the checks in [`crate::intake`].

mod gender;
mod pet;

pub use gender::*;
pub use pet::*;

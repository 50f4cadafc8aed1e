//! Puppy shelter bookkeeping on top of SQLite.
//!
//! [`ShelterManager`] owns the one rule that matters: a shelter never holds
//! more puppies than its capacity, and a puppy is adopted at most once.
//! [`queries`] and [`report`] are read-only views over the same tables.

pub mod config;
pub mod error;
pub mod manager;
pub mod populate;
pub mod queries;
pub mod report;
pub mod sql;
pub mod types;

pub use config::Config;
pub use error::{AdoptError, IntakeError, PopulateError, ShelterError};
pub use manager::ShelterManager;
pub use types::{Adopter, Gender, NewProfile, NewPuppy, NewShelter, Puppy, PuppyProfile, Shelter};

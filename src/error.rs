use crate::types::{Aid, Pid, Sid};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
	/// Every shelter is at capacity.
	#[error("all shelters are full, please open more shelters")]
	NoVacancy,
	#[error("no shelter with id {0}")]
	NoSuchShelter(Sid),
	#[error("invalid puppy: {0}")]
	InvalidPuppy(String),
	#[error("database error: {0}")]
	DB(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ShelterError {
	#[error("invalid shelter: {0}")]
	InvalidShelter(String),
	#[error("database error: {0}")]
	DB(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AdoptError {
	#[error("puppy {0} has already been adopted")]
	AlreadyAdopted(Pid),
	#[error("no puppy with id {0}")]
	NoSuchPuppy(Pid),
	#[error("no adopter with id {0}")]
	NoSuchAdopter(Aid),
	#[error("an adoption needs at least one adopter")]
	NoAdopters,
	#[error("database error: {0}")]
	DB(#[from] sqlx::Error),
}

/// Anything that can stop [`crate::populate::populate`].
#[derive(Debug, thiserror::Error)]
pub enum PopulateError {
	#[error(transparent)]
	Shelter(#[from] ShelterError),
	#[error(transparent)]
	Intake(#[from] IntakeError),
	#[error("database error: {0}")]
	DB(#[from] sqlx::Error),
}

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use puppy_shelter::types::Sid;
use puppy_shelter::{sql, Gender, NewPuppy, NewShelter, Shelter, ShelterManager};

// File-backed database in a fresh temporary directory; keep the TempDir alive.
pub async fn create_temp_db() -> anyhow::Result<(ShelterManager, TempDir)> {
	let dir = tempfile::tempdir()?;
	let url = format!("sqlite://{}", dir.path().join("puppyshelter.db").display());
	let db = sql::setup(&url).await?;
	Ok((ShelterManager::new(db), dir))
}

pub async fn create_memory_db() -> anyhow::Result<ShelterManager> {
	let db = sql::setup("sqlite::memory:").await?;
	Ok(ShelterManager::new(db))
}

pub fn puppy(name: &str) -> NewPuppy {
	NewPuppy{
		name: name.to_string(),
		gender: Gender::Female,
		date_of_birth: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
		weight: 8.5,
	}
}

pub async fn shelter(manager: &ShelterManager, name: &str, capacity: i64) -> anyhow::Result<Shelter> {
	Ok(manager.add_shelter(&NewShelter::new(name, capacity)).await?)
}

// Shelter with `occupancy` puppies already inside.
pub async fn filled_shelter(
	manager: &ShelterManager,
	name: &str,
	capacity: i64,
	occupancy: i64,
) -> anyhow::Result<Shelter> {
	let shelter = shelter(manager, name, capacity).await?;
	for i in 0..occupancy {
		manager.intake(&puppy(&format!("{name} resident {i}")), Some(shelter.id)).await?;
	}
	Ok(puppy_shelter::queries::shelter(manager.db(), shelter.id).await?.unwrap())
}

pub async fn occupancy(manager: &ShelterManager, sid: Sid) -> anyhow::Result<i64> {
	Ok(puppy_shelter::queries::shelter(manager.db(), sid).await?.unwrap().current_occupancy)
}

pub async fn count(manager: &ShelterManager, table: &str) -> anyhow::Result<i64> {
	let n: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
		.fetch_one(manager.db()).await?;
	Ok(n)
}

pub async fn assert_invariant(manager: &ShelterManager) -> anyhow::Result<()> {
	for shelter in puppy_shelter::queries::shelters(manager.db()).await? {
		assert!(shelter.current_occupancy >= 0, "{} below zero", shelter.name);
		assert!(
			shelter.current_occupancy <= shelter.maximum_capacity,
			"{} over capacity", shelter.name
		);
	}
	Ok(())
}

//! Shelter capacity & adoption bookkeeping.
//!
//! Every operation runs in one transaction. Occupancy only moves through
//! guarded `UPDATE`s whose affected-row count is checked, so
//! `0 <= current_occupancy <= maximum_capacity` holds even with several
//! writers on the same database.
//!
//! SQLite can't upgrade a deferred read transaction to a write while another
//! connection writes, so writers queue on a lock shared by every clone of the
//! manager before they open their transaction.

use std::sync::Arc;

use sqlx::SqliteConnection;
use tokio::sync::Mutex;

use crate::error::{AdoptError, IntakeError, ShelterError};
use crate::sql::DB;
use crate::types::{Adopter, Aid, NewProfile, NewPuppy, NewShelter, Pid, Puppy, Shelter, Sid};

#[derive(Debug, Clone)]
pub struct ShelterManager {
	db: DB,
	writer: Arc<Mutex<()>>,
}

impl ShelterManager {
	pub fn new(db: DB) -> Self {
		ShelterManager{
			db,
			writer: Arc::new(Mutex::new(())),
		}
	}

	pub fn db(&self) -> &DB {
		&self.db
	}

	pub async fn add_shelter(&self, shelter: &NewShelter) -> Result<Shelter, ShelterError> {
		if shelter.name.trim().is_empty() {
			return Err(ShelterError::InvalidShelter("name is empty".to_string()));
		}
		if shelter.maximum_capacity <= 0 {
			return Err(ShelterError::InvalidShelter(format!(
				"maximum capacity must be positive, got {}", shelter.maximum_capacity
			)));
		}

		let _writer = self.writer.lock().await;
		let id = sqlx::query(r#"
INSERT INTO shelter
	(name, address, city, state, zip_code, website, current_occupancy, maximum_capacity)
VALUES
	(?, ?, ?, ?, ?, ?, 0, ?)
		"#)
			.bind(&shelter.name)
			.bind(&shelter.address)
			.bind(&shelter.city)
			.bind(&shelter.state)
			.bind(&shelter.zip_code)
			.bind(&shelter.website)
			.bind(shelter.maximum_capacity)
			.execute(&self.db).await?
			.last_insert_rowid();

		tracing::debug!(shelter = id, name = %shelter.name, capacity = shelter.maximum_capacity, "shelter opened");
		Ok(Shelter{
			id,
			name: shelter.name.clone(),
			address: shelter.address.clone(),
			city: shelter.city.clone(),
			state: shelter.state.clone(),
			zip_code: shelter.zip_code.clone(),
			website: shelter.website.clone(),
			current_occupancy: 0,
			maximum_capacity: shelter.maximum_capacity,
		})
	}

	pub async fn add_adopter(&self, first_name: &str, last_name: &str) -> Result<Adopter, sqlx::Error> {
		let _writer = self.writer.lock().await;
		let id = sqlx::query("INSERT INTO adopter (first_name, last_name) VALUES (?, ?)")
			.bind(first_name)
			.bind(last_name)
			.execute(&self.db).await?
			.last_insert_rowid();

		Ok(Adopter{
			id,
			first_name: first_name.to_string(),
			last_name: last_name.to_string(),
		})
	}

	/// Takes a puppy in with a placeholder profile.
	pub async fn intake(&self, puppy: &NewPuppy, preferred: Option<Sid>) -> Result<Puppy, IntakeError> {
		self.intake_with_profile(puppy, &NewProfile::placeholder(), preferred).await
	}

	/// Places the puppy in `preferred` if it has room, otherwise in the
	/// emptiest shelter that does (lowest id on ties).
	pub async fn intake_with_profile(
		&self,
		puppy: &NewPuppy,
		profile: &NewProfile,
		preferred: Option<Sid>,
	) -> Result<Puppy, IntakeError> {
		if puppy.name.trim().is_empty() {
			return Err(IntakeError::InvalidPuppy("name is empty".to_string()));
		}
		if !puppy.weight.is_finite() || puppy.weight <= 0.0 {
			return Err(IntakeError::InvalidPuppy(format!(
				"weight must be a positive number, got {}", puppy.weight
			)));
		}

		let _writer = self.writer.lock().await;
		let mut tx = self.db.begin().await?;

		let shelter = choose_shelter(&mut *tx, preferred).await?;

		let claimed = sqlx::query(r#"
UPDATE shelter SET
	current_occupancy = current_occupancy + 1
WHERE
	id = ? AND current_occupancy < maximum_capacity
		"#)
			.bind(shelter.id)
			.execute(&mut *tx).await?
			.rows_affected();
		if claimed == 0 {
			// another process filled it between the read and the write
			return Err(IntakeError::NoVacancy);
		}

		let id = sqlx::query(r#"
INSERT INTO puppy
	(name, gender, date_of_birth, weight, shelter_id)
VALUES
	(?, ?, ?, ?, ?)
		"#)
			.bind(&puppy.name)
			.bind(puppy.gender)
			.bind(puppy.date_of_birth)
			.bind(puppy.weight)
			.bind(shelter.id)
			.execute(&mut *tx).await?
			.last_insert_rowid();

		sqlx::query(r#"
INSERT INTO puppy_profile
	(puppy_id, picture, description, special_needs)
VALUES
	(?, ?, ?, ?)
		"#)
			.bind(id)
			.bind(&profile.picture)
			.bind(&profile.description)
			.bind(&profile.special_needs)
			.execute(&mut *tx).await?;

		tx.commit().await?;

		tracing::info!(
			puppy = id,
			name = %puppy.name,
			shelter = shelter.id,
			occupancy = shelter.current_occupancy + 1,
			capacity = shelter.maximum_capacity,
			"puppy taken in"
		);

		Ok(Puppy{
			id,
			name: puppy.name.clone(),
			gender: puppy.gender,
			date_of_birth: puppy.date_of_birth,
			weight: puppy.weight,
			shelter_id: Some(shelter.id),
			adopted_on: None,
		})
	}

	/// Adopts the puppy into every adopter in `adopters` (duplicates ignored)
	/// and frees its slot in the shelter. The shelter reference is kept.
	pub async fn adopt(&self, pid: Pid, adopters: &[Aid]) -> Result<Puppy, AdoptError> {
		let mut household: Vec<Aid> = Vec::with_capacity(adopters.len());
		for aid in adopters {
			if !household.contains(aid) {
				household.push(*aid);
			}
		}
		if household.is_empty() {
			return Err(AdoptError::NoAdopters);
		}

		let _writer = self.writer.lock().await;
		let mut tx = self.db.begin().await?;

		let mut puppy = fetch_puppy(&mut *tx, pid).await?
			.ok_or(AdoptError::NoSuchPuppy(pid))?;

		let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM adoption WHERE puppy_id = ?")
			.bind(pid)
			.fetch_one(&mut *tx).await?;
		if puppy.is_adopted() || existing > 0 {
			return Err(AdoptError::AlreadyAdopted(pid));
		}

		for aid in &household {
			let found: Option<Aid> = sqlx::query_scalar("SELECT id FROM adopter WHERE id = ?")
				.bind(aid)
				.fetch_optional(&mut *tx).await?;
			if found.is_none() {
				return Err(AdoptError::NoSuchAdopter(*aid));
			}
		}

		let today = chrono::Utc::now().date_naive();
		let marked = sqlx::query("UPDATE puppy SET adopted_on = ? WHERE id = ? AND adopted_on IS NULL")
			.bind(today)
			.bind(pid)
			.execute(&mut *tx).await?
			.rows_affected();
		if marked == 0 {
			return Err(AdoptError::AlreadyAdopted(pid));
		}

		for aid in &household {
			sqlx::query("INSERT INTO adoption (puppy_id, adopter_id) VALUES (?, ?)")
				.bind(pid)
				.bind(aid)
				.execute(&mut *tx).await?;
		}

		if let Some(sid) = puppy.shelter_id {
			let released = sqlx::query(r#"
UPDATE shelter SET
	current_occupancy = current_occupancy - 1
WHERE
	id = ? AND current_occupancy > 0
			"#)
				.bind(sid)
				.execute(&mut *tx).await?
				.rows_affected();
			if released == 0 {
				tracing::warn!(puppy = pid, shelter = sid, "shelter occupancy already at zero");
			}
		}

		tx.commit().await?;

		tracing::info!(puppy = pid, adopters = ?household, "puppy adopted");
		puppy.adopted_on = Some(today);
		Ok(puppy)
	}
}

async fn choose_shelter(conn: &mut SqliteConnection, preferred: Option<Sid>) -> Result<Shelter, IntakeError> {
	if let Some(sid) = preferred {
		let shelter = fetch_shelter(&mut *conn, sid).await?
			.ok_or(IntakeError::NoSuchShelter(sid))?;
		if shelter.has_room() {
			return Ok(shelter);
		}
		tracing::info!(shelter = %shelter.name, "shelter is full, trying another shelter");
	}

	let emptiest = sqlx::query_as::<_, Shelter>(r#"
SELECT * FROM shelter
WHERE current_occupancy < maximum_capacity
ORDER BY current_occupancy, id
LIMIT 1
	"#)
		.fetch_optional(&mut *conn).await?;

	emptiest.ok_or(IntakeError::NoVacancy)
}

async fn fetch_shelter(conn: &mut SqliteConnection, sid: Sid) -> Result<Option<Shelter>, sqlx::Error> {
	sqlx::query_as::<_, Shelter>("SELECT * FROM shelter WHERE id = ?")
		.bind(sid)
		.fetch_optional(&mut *conn).await
}

async fn fetch_puppy(conn: &mut SqliteConnection, pid: Pid) -> Result<Option<Puppy>, sqlx::Error> {
	sqlx::query_as::<_, Puppy>("SELECT * FROM puppy WHERE id = ?")
		.bind(pid)
		.fetch_optional(&mut *conn).await
}

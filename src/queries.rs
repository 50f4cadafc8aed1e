use chrono::{Duration, NaiveDate};

use crate::sql::DB;
use crate::types::{Adopter, Aid, Pid, Puppy, PuppyProfile, Shelter, Sid};

/// "Less than six months old" is counted in days.
pub const SIX_MONTHS_IN_DAYS: i64 = 180;

pub async fn shelter(db: &DB, sid: Sid) -> Result<Option<Shelter>, sqlx::Error> {
	sqlx::query_as::<_, Shelter>("SELECT * FROM shelter WHERE id = ?")
		.bind(sid)
		.fetch_optional(db).await
}

pub async fn shelters(db: &DB) -> Result<Vec<Shelter>, sqlx::Error> {
	sqlx::query_as::<_, Shelter>("SELECT * FROM shelter ORDER BY id")
		.fetch_all(db).await
}

pub async fn puppy(db: &DB, pid: Pid) -> Result<Option<Puppy>, sqlx::Error> {
	sqlx::query_as::<_, Puppy>("SELECT * FROM puppy WHERE id = ?")
		.bind(pid)
		.fetch_optional(db).await
}

pub async fn profile(db: &DB, pid: Pid) -> Result<Option<PuppyProfile>, sqlx::Error> {
	sqlx::query_as::<_, PuppyProfile>("SELECT * FROM puppy_profile WHERE puppy_id = ?")
		.bind(pid)
		.fetch_optional(db).await
}

pub async fn puppies_by_name(db: &DB) -> Result<Vec<Puppy>, sqlx::Error> {
	sqlx::query_as::<_, Puppy>("SELECT * FROM puppy ORDER BY name, id")
		.fetch_all(db).await
}

/// Puppies born after `today - 180 days`, youngest first.
pub async fn puppies_younger_than_six_months(db: &DB, today: NaiveDate) -> Result<Vec<Puppy>, sqlx::Error> {
	let cutoff = today - Duration::days(SIX_MONTHS_IN_DAYS);
	sqlx::query_as::<_, Puppy>(r#"
SELECT * FROM puppy
WHERE date_of_birth > ?
ORDER BY date_of_birth DESC, id
	"#)
		.bind(cutoff)
		.fetch_all(db).await
}

pub async fn puppies_by_weight(db: &DB) -> Result<Vec<Puppy>, sqlx::Error> {
	sqlx::query_as::<_, Puppy>("SELECT * FROM puppy ORDER BY weight, id")
		.fetch_all(db).await
}

/// Puppies currently housed at the shelter; adopted ones are left out.
pub async fn puppies_in_shelter(db: &DB, sid: Sid) -> Result<Vec<Puppy>, sqlx::Error> {
	sqlx::query_as::<_, Puppy>(r#"
SELECT * FROM puppy
WHERE shelter_id = ? AND adopted_on IS NULL
ORDER BY name, id
	"#)
		.bind(sid)
		.fetch_all(db).await
}

pub async fn adopters_of(db: &DB, pid: Pid) -> Result<Vec<Adopter>, sqlx::Error> {
	sqlx::query_as::<_, Adopter>(r#"
SELECT adopter.id, adopter.first_name, adopter.last_name
FROM adopter
	JOIN adoption ON adoption.adopter_id = adopter.id
WHERE adoption.puppy_id = ?
ORDER BY adopter.id
	"#)
		.bind(pid)
		.fetch_all(db).await
}

pub async fn adopted_by(db: &DB, aid: Aid) -> Result<Vec<Puppy>, sqlx::Error> {
	sqlx::query_as::<_, Puppy>(r#"
SELECT puppy.*
FROM puppy
	JOIN adoption ON adoption.puppy_id = puppy.id
WHERE adoption.adopter_id = ?
ORDER BY puppy.id
	"#)
		.bind(aid)
		.fetch_all(db).await
}

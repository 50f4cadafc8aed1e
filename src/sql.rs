use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, Pool, Sqlite};

pub type DB = Pool<Sqlite>;

/// Opens a pool against `url` (`sqlite://puppyshelter.db`, `sqlite::memory:`, ...),
/// creating the database file if missing.
///
/// An in-memory database only lives as long as its connection, so those get a
/// single connection that is never recycled.
pub async fn open(url: &str) -> Result<DB, sqlx::Error> {
	let options = SqliteConnectOptions::from_str(url)?
		.create_if_missing(true)
		.foreign_keys(true);

	let pool = if is_memory(url) {
		SqlitePoolOptions::new()
			.max_connections(1)
			.idle_timeout(None)
			.max_lifetime(None)
	} else {
		SqlitePoolOptions::new().max_connections(5)
	};

	pool.acquire_timeout(Duration::from_secs(3))
		.connect_with(options)
		.await
}

/// Creates every table that doesn't exist yet.
pub async fn schema(db: &DB) -> Result<(), sqlx::Error> {
	db.execute(TABLE_SCHEMA).await?;
	Ok(())
}

/// [`open`] followed by [`schema`].
pub async fn setup(url: &str) -> Result<DB, sqlx::Error> {
	let db = open(url).await?;
	schema(&db).await?;
	Ok(db)
}

fn is_memory(url: &str) -> bool {
	url.contains(":memory:") || url.contains("mode=memory")
}

/*
DROP TABLE IF EXISTS adoption;
DROP TABLE IF EXISTS adopter;
DROP TABLE IF EXISTS puppy_profile;
DROP TABLE IF EXISTS puppy;
DROP TABLE IF EXISTS shelter;
*/

pub const TABLE_SCHEMA: &str = r#"

CREATE TABLE IF NOT EXISTS shelter (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	name TEXT NOT NULL,
	address TEXT DEFAULT NULL,
	city TEXT DEFAULT NULL,
	state TEXT DEFAULT NULL,
	zip_code TEXT DEFAULT NULL,
	website TEXT DEFAULT NULL,
	current_occupancy INTEGER NOT NULL DEFAULT 0,
	maximum_capacity INTEGER NOT NULL,
	CHECK(maximum_capacity > 0),
	CHECK(current_occupancy >= 0 AND current_occupancy <= maximum_capacity)
);

CREATE TABLE IF NOT EXISTS puppy (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	name TEXT NOT NULL,
	gender TEXT NOT NULL,
	date_of_birth DATE NOT NULL,
	weight REAL NOT NULL,
	shelter_id INTEGER DEFAULT NULL,
	adopted_on DATE DEFAULT NULL,
	CHECK(gender IN ('male', 'female')),
	FOREIGN KEY(shelter_id) REFERENCES shelter(id)
);

CREATE TABLE IF NOT EXISTS puppy_profile (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	puppy_id INTEGER NOT NULL UNIQUE,
	picture TEXT DEFAULT NULL,
	description TEXT DEFAULT NULL,
	special_needs TEXT DEFAULT NULL,
	FOREIGN KEY(puppy_id) REFERENCES puppy(id)
);

CREATE TABLE IF NOT EXISTS adopter (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	first_name TEXT NOT NULL,
	last_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS adoption (
	puppy_id INTEGER NOT NULL,
	adopter_id INTEGER NOT NULL,
	UNIQUE(puppy_id, adopter_id),
	FOREIGN KEY(puppy_id) REFERENCES puppy(id),
	FOREIGN KEY(adopter_id) REFERENCES adopter(id)
);

CREATE INDEX IF NOT EXISTS idx_puppy_shelter ON puppy(shelter_id);
CREATE INDEX IF NOT EXISTS idx_adoption_adopter ON adoption(adopter_id);

"#;

/*

[intake] claim a slot -- fails (0 rows) when the shelter is full
UPDATE shelter SET
	current_occupancy = current_occupancy + 1
WHERE
	id = ? AND current_occupancy < maximum_capacity;

[intake] emptiest shelter with room
SELECT * FROM shelter
WHERE current_occupancy < maximum_capacity
ORDER BY current_occupancy, id
LIMIT 1;

[adopt] mark adopted -- fails (0 rows) when already adopted
UPDATE puppy SET
	adopted_on = ?
WHERE
	id = ? AND adopted_on IS NULL;

[adopt] release the slot
UPDATE shelter SET
	current_occupancy = current_occupancy - 1
WHERE
	id = ? AND current_occupancy > 0;

*/

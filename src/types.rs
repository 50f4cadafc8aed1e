use chrono::NaiveDate;

pub type Sid = i64;
pub type Pid = i64;
pub type Aid = i64;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Shelter {
	pub id: Sid,
	pub name: String,
	pub address: Option<String>,
	pub city: Option<String>,
	pub state: Option<String>,
	pub zip_code: Option<String>,
	pub website: Option<String>,
	pub current_occupancy: i64,
	pub maximum_capacity: i64,
}

impl Shelter {
	pub fn has_room(&self) -> bool {
		self.current_occupancy < self.maximum_capacity
	}
	pub fn vacancies(&self) -> i64 {
		self.maximum_capacity - self.current_occupancy
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewShelter {
	pub name: String,
	pub address: Option<String>,
	pub city: Option<String>,
	pub state: Option<String>,
	pub zip_code: Option<String>,
	pub website: Option<String>,
	pub maximum_capacity: i64,
}

impl NewShelter {
	pub fn new(name: impl Into<String>, maximum_capacity: i64) -> Self {
		NewShelter{
			name: name.into(),
			maximum_capacity,
			..Default::default()
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender {0:?}, expected \"male\" or \"female\"")]
pub struct ParseGenderError(pub String);

impl std::str::FromStr for Gender {
	type Err = ParseGenderError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"male"|"m" => Ok(Gender::Male),
			"female"|"f" => Ok(Gender::Female),
			_ => Err(ParseGenderError(s.to_string())),
		}
	}
}

impl std::fmt::Display for Gender {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(match self {
			Gender::Male => "male",
			Gender::Female => "female",
		})
	}
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Puppy {
	pub id: Pid,
	pub name: String,
	pub gender: Gender,
	pub date_of_birth: NaiveDate,
	pub weight: f64,
	pub shelter_id: Option<Sid>,
	pub adopted_on: Option<NaiveDate>,
}

impl Puppy {
	pub fn is_adopted(&self) -> bool {
		self.adopted_on.is_some()
	}
	/// Age in whole days as of `today`.
	pub fn age_in_days(&self, today: NaiveDate) -> i64 {
		(today - self.date_of_birth).num_days()
	}
}

/// Intake form: everything a puppy needs before it has a shelter.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPuppy {
	pub name: String,
	pub gender: Gender,
	pub date_of_birth: NaiveDate,
	pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PuppyProfile {
	pub id: i64,
	pub puppy_id: Pid,
	pub picture: Option<String>,
	pub description: Option<String>,
	pub special_needs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProfile {
	pub picture: Option<String>,
	pub description: Option<String>,
	pub special_needs: Option<String>,
}

impl NewProfile {
	/// What a profile holds until somebody writes a real one.
	pub fn placeholder() -> Self {
		NewProfile{
			picture: None,
			description: Some("No description yet.".to_string()),
			special_needs: Some("None".to_string()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Adopter {
	pub id: Aid,
	pub first_name: String,
	pub last_name: String,
}

impl std::fmt::Display for Adopter {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{} {}", self.first_name, self.last_name)
	}
}

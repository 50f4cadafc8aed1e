use chrono::NaiveDate;

use crate::queries;
use crate::sql::DB;
use crate::types::{Aid, Pid, Puppy, Sid};

/// Somewhere to put human-readable lines.
pub trait Report {
	fn line(&mut self, line: String);
}

/// Prints every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Report for Console {
	fn line(&mut self, line: String) {
		println!("{line}");
	}
}

impl Report for Vec<String> {
	fn line(&mut self, line: String) {
		self.push(line);
	}
}

fn puppy_line(puppy: &Puppy) -> String {
	format!("{:>4}  {}", puppy.id, puppy.name)
}

pub async fn by_name(db: &DB, out: &mut impl Report) -> Result<(), sqlx::Error> {
	out.line("Puppies by name, alphabetically:".to_string());
	for puppy in queries::puppies_by_name(db).await? {
		out.line(puppy_line(&puppy));
	}
	Ok(())
}

pub async fn younger_than_six_months(db: &DB, today: NaiveDate, out: &mut impl Report) -> Result<(), sqlx::Error> {
	out.line("Puppies less than 6 months old, youngest to oldest:".to_string());
	for puppy in queries::puppies_younger_than_six_months(db, today).await? {
		out.line(format!("{}  {}", puppy_line(&puppy), puppy.date_of_birth));
	}
	Ok(())
}

pub async fn by_weight(db: &DB, out: &mut impl Report) -> Result<(), sqlx::Error> {
	out.line("Puppies by weight, ascending:".to_string());
	for puppy in queries::puppies_by_weight(db).await? {
		out.line(format!("{}  {:.1}", puppy_line(&puppy), puppy.weight));
	}
	Ok(())
}

pub async fn occupancy(db: &DB, out: &mut impl Report) -> Result<(), sqlx::Error> {
	out.line("Shelter occupancy:".to_string());
	for shelter in queries::shelters(db).await? {
		out.line(format!(
			"{:>4}  {}  {}/{}  ({} free)",
			shelter.id, shelter.name, shelter.current_occupancy, shelter.maximum_capacity,
			shelter.vacancies(),
		));
	}
	Ok(())
}

pub async fn shelter(db: &DB, sid: Sid, out: &mut impl Report) -> Result<(), sqlx::Error> {
	let Some(shelter) = queries::shelter(db, sid).await? else {
		out.line(format!("No shelter with id {sid}"));
		return Ok(());
	};
	out.line(format!(
		"{} ({}/{}):",
		shelter.name, shelter.current_occupancy, shelter.maximum_capacity
	));
	for puppy in queries::puppies_in_shelter(db, sid).await? {
		out.line(puppy_line(&puppy));
	}
	Ok(())
}

pub async fn adopters(db: &DB, pid: Pid, out: &mut impl Report) -> Result<(), sqlx::Error> {
	let Some(puppy) = queries::puppy(db, pid).await? else {
		out.line(format!("No puppy with id {pid}"));
		return Ok(());
	};
	let adopters = queries::adopters_of(db, pid).await?;
	if adopters.is_empty() {
		out.line(format!("{} has not been adopted yet", puppy.name));
		return Ok(());
	}
	out.line(format!("{} was adopted by:", puppy.name));
	for adopter in adopters {
		out.line(format!("{:>4}  {adopter}", adopter.id));
	}
	Ok(())
}

pub async fn adopted_by(db: &DB, aid: Aid, out: &mut impl Report) -> Result<(), sqlx::Error> {
	out.line(format!("Puppies adopted by adopter {aid}:"));
	for puppy in queries::adopted_by(db, aid).await? {
		out.line(puppy_line(&puppy));
	}
	Ok(())
}

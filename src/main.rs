// puppy shelter

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use puppy_shelter::report::{self, Console};
use puppy_shelter::types::{Aid, Gender, Pid, Sid};
use puppy_shelter::{populate, sql, Config, NewPuppy, NewShelter, ShelterManager};

#[derive(Parser)]
#[command(name = "puppy-shelter")]
#[command(about = "Shelter intake and adoption bookkeeping.")]
struct CommandLine {
	/// Overrides DATABASE_URL
	#[arg(long, global = true)]
	database_url: Option<String>,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Create the tables
	Setup,
	/// Fill the database with seed shelters, puppies and adopters
	Populate,
	/// Open a new shelter
	AddShelter {
		name: String,
		#[arg(long)]
		capacity: i64,
		#[arg(long)]
		city: Option<String>,
	},
	/// Register an adopter
	AddAdopter { first_name: String, last_name: String },
	/// Take a puppy in
	Intake {
		#[arg(long)]
		name: String,
		#[arg(long)]
		gender: Gender,
		/// Date of birth, YYYY-MM-DD
		#[arg(long)]
		born: NaiveDate,
		#[arg(long)]
		weight: f64,
		/// Shelter to try first
		#[arg(long)]
		shelter: Option<Sid>,
	},
	/// Adopt a puppy into one or more adopters
	Adopt {
		#[arg(long)]
		puppy: Pid,
		#[arg(long = "adopter", required = true)]
		adopters: Vec<Aid>,
	},
	/// Print a report
	#[command(subcommand)]
	Report(Reports),
}

#[derive(Subcommand)]
enum Reports {
	/// All puppies, alphabetically
	ByName,
	/// Puppies under six months old, youngest first
	Young,
	/// All puppies, lightest first
	ByWeight,
	/// Occupancy of every shelter
	Occupancy,
	/// Puppies housed at a shelter
	Shelter { id: Sid },
	/// Who adopted a puppy
	Adopters { puppy: Pid },
	/// Puppies an adopter took home
	AdoptedBy { adopter: Aid },
}

fn init_logging() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let commands = CommandLine::parse();
	init_logging();

	let config = Config::from_env().with_database_url(commands.database_url);
	tracing::debug!(url = %config.database_url, "opening database");
	let db = sql::setup(&config.database_url).await?;
	let manager = ShelterManager::new(db.clone());
	let mut out = Console;

	match commands.command {
		Commands::Setup => {
			tracing::info!("tables ready");
		},
		Commands::Populate => {
			let today = chrono::Utc::now().date_naive();
			let population = populate::populate(&manager, &mut rand::rng(), today).await?;
			println!(
				"{} shelters, {} puppies, {} adopters ({} turned away)",
				population.shelters.len(),
				population.puppies_taken_in,
				population.adopters.len(),
				population.turned_away,
			);
		},
		Commands::AddShelter { name, capacity, city } => {
			let shelter = manager.add_shelter(&NewShelter{
				city,
				..NewShelter::new(name, capacity)
			}).await?;
			println!("shelter {} opened: {}", shelter.id, shelter.name);
		},
		Commands::AddAdopter { first_name, last_name } => {
			let adopter = manager.add_adopter(&first_name, &last_name).await?;
			println!("adopter {} registered: {adopter}", adopter.id);
		},
		Commands::Intake { name, gender, born, weight, shelter } => {
			let puppy = NewPuppy{ name, gender, date_of_birth: born, weight };
			let puppy = manager.intake(&puppy, shelter).await?;
			match puppy.shelter_id {
				Some(sid) => println!("puppy {} ({}) is in shelter {sid}", puppy.id, puppy.name),
				None => println!("puppy {} ({}) has no shelter", puppy.id, puppy.name),
			}
		},
		Commands::Adopt { puppy, adopters } => {
			let puppy = manager.adopt(puppy, &adopters).await?;
			println!("puppy {} ({}) adopted", puppy.id, puppy.name);
		},
		Commands::Report(which) => match which {
			Reports::ByName => report::by_name(&db, &mut out).await?,
			Reports::Young => {
				let today = chrono::Utc::now().date_naive();
				report::younger_than_six_months(&db, today, &mut out).await?
			},
			Reports::ByWeight => report::by_weight(&db, &mut out).await?,
			Reports::Occupancy => report::occupancy(&db, &mut out).await?,
			Reports::Shelter { id } => report::shelter(&db, id, &mut out).await?,
			Reports::Adopters { puppy } => report::adopters(&db, puppy, &mut out).await?,
			Reports::AdoptedBy { adopter } => report::adopted_by(&db, adopter, &mut out).await?,
		},
	}

	db.close().await;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn adopt_takes_repeated_adopters() {
		let cli = CommandLine::try_parse_from([
			"puppy-shelter", "adopt", "--puppy", "7", "--adopter", "1", "--adopter", "2",
		]).unwrap();
		let Commands::Adopt { puppy, adopters } = cli.command else {
			panic!("expected adopt");
		};
		assert_eq!(puppy, 7);
		assert_eq!(adopters, vec![1, 2]);
	}

	#[test]
	fn adopt_needs_an_adopter() {
		assert!(CommandLine::try_parse_from(["puppy-shelter", "adopt", "--puppy", "7"]).is_err());
	}

	#[test]
	fn intake_parses_gender_and_date() {
		let cli = CommandLine::try_parse_from([
			"puppy-shelter", "--database-url", "sqlite::memory:",
			"intake", "--name", "Bella", "--gender", "f", "--born", "2024-01-15", "--weight", "8.5",
		]).unwrap();
		assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
		let Commands::Intake { name, gender, born, weight, shelter } = cli.command else {
			panic!("expected intake");
		};
		assert_eq!(name, "Bella");
		assert_eq!(gender, Gender::Female);
		assert_eq!(born, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
		assert_eq!(weight, 8.5);
		assert_eq!(shelter, None);
	}

	#[test]
	fn intake_rejects_unknown_gender() {
		let parsed = CommandLine::try_parse_from([
			"puppy-shelter", "intake", "--name", "Rex", "--gender", "dog",
			"--born", "2024-01-15", "--weight", "8.5",
		]);
		assert!(parsed.is_err());
	}

	#[test]
	fn report_subcommands() {
		let cli = CommandLine::try_parse_from(["puppy-shelter", "report", "adopted-by", "3"]).unwrap();
		assert!(matches!(cli.command, Commands::Report(Reports::AdoptedBy { adopter: 3 })));
	}
}

//! Seed data: five Bay Area shelters, a hundred puppies and one household of
//! adopters. Puppies go through [`ShelterManager::intake_with_profile`] like
//! any other arrival, so capacity is respected.

use chrono::{Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{IntakeError, PopulateError};
use crate::manager::ShelterManager;
use crate::types::{Adopter, Gender, NewProfile, NewPuppy, NewShelter, Shelter};

pub const MALE_NAMES: &[&str] = &[
	"Bailey", "Max", "Charlie", "Buddy", "Rocky", "Jake", "Jack", "Toby", "Cody", "Buster",
	"Duke", "Cooper", "Riley", "Harley", "Bear", "Tucker", "Murphy", "Lucky", "Oliver", "Sam",
	"Oscar", "Teddy", "Winston", "Sammy", "Rusty", "Shadow", "Gizmo", "Bentley", "Zeus", "Jackson",
	"Baxter", "Bandit", "Gus", "Samson", "Milo", "Rudy", "Louie", "Hunter", "Casey", "Rocco",
	"Sparky", "Joey", "Bruno", "Beau", "Dakota", "Maximus", "Romeo", "Boomer", "Luke", "Henry",
];

pub const FEMALE_NAMES: &[&str] = &[
	"Bella", "Lucy", "Molly", "Daisy", "Maggie", "Sophie", "Sadie", "Chloe", "Bailey", "Lola",
	"Zoe", "Abby", "Ginger", "Roxy", "Gracie", "Coco", "Sasha", "Lily", "Angel", "Princess",
	"Emma", "Annie", "Rosie", "Ruby", "Lady", "Missy", "Lilly", "Mia", "Katie", "Zoey",
	"Madison", "Stella", "Penny", "Belle", "Casey", "Samantha", "Holly", "Lexi", "Lulu", "Brandy",
	"Jasmine", "Shelby", "Sandy", "Roxie", "Pepper", "Heidi", "Luna", "Dixie", "Honey", "Dakota",
];

const PUPPY_IMAGES: &[&str] = &[
	"http://pixabay.com/get/da0c8c7e4aa09ba3a353/1433170694/dog-785193_1280.jpg?direct",
	"http://pixabay.com/get/6540c0052781e8d21783/1433170742/dog-280332_1280.jpg?direct",
	"http://pixabay.com/get/8f62ce526ed56cd16e57/1433170768/pug-690566_1280.jpg?direct",
	"http://pixabay.com/get/be6ebb661e44f929e04e/1433170798/pet-423398_1280.jpg?direct",
	"http://pixabay.com/static/uploads/photo/2010/12/13/10/20/beagle-puppy-2681_640.jpg",
	"http://pixabay.com/get/4b1799cb4e3f03684b69/1433170894/dog-589002_1280.jpg?direct",
	"http://pixabay.com/get/3157a0395f9959b7a000/1433170921/puppy-384647_1280.jpg?direct",
	"http://pixabay.com/get/2a11ff73f38324166ac6/1433170950/puppy-742620_1280.jpg?direct",
	"http://pixabay.com/get/7dcd78e779f8110ca876/1433170979/dog-710013_1280.jpg?direct",
	"http://pixabay.com/get/31d494632fa1c64a7225/1433171005/dog-668940_1280.jpg?direct",
];

const PUPPY_DESCRIPTIONS: &[&str] = &[
	"Easy going dog with a good temperament.",
	"Feisty but friendly.",
	"Great with children.",
	"Whiny and annoying.",
	"Large dog with a big heart.",
	"Playful daschund who takes on more than it can chew.",
	"Small chihuahua",
	"Exciting Boxer who has lots of love to give",
	"Crazy Terrier who will destroy your furniture.",
	"Dalmation who loves to walk!",
];

const PUPPY_SPECIAL_NEEDS: &[&str] = &[
	"Lots of room to walk",
	"Plenty of exercise",
	"Restricted diet",
	"Large bed and plenty of food",
	"Veterinary shots daily",
	"None",
];

/// Oldest a seeded puppy gets, roughly 18 months.
pub const MAX_AGE_DAYS: i64 = 540;
pub const MIN_WEIGHT: f64 = 1.0;
pub const MAX_WEIGHT: f64 = 40.0;

pub fn seed_shelters() -> Vec<NewShelter> {
	// (name, address, city, zip, website, capacity)
	[
		("Oakland Animal Services", "1101 29th Ave", "Oakland", "94601", "oaklandanimalservices.org", 31),
		("San Francisco SPCA Mission Adoption Center", "250 Florida St", "San Francisco", "94103", "sfspca.org", 15),
		("Wonder Dog Rescue", "2926 16th Street", "San Francisco", "94103", "http://wonderdogrescue.org", 20),
		("Humane Society of Alameda", "PO Box 1571", "Alameda", "94501", "hsalameda.org", 15),
		("Palo Alto Humane Society", "1149 Chestnut St.", "Menlo Park", "94025", "paloaltohumane.org", 20),
	]
	.into_iter()
	.map(|(name, address, city, zip, website, capacity)| NewShelter{
		name: name.to_string(),
		address: Some(address.to_string()),
		city: Some(city.to_string()),
		state: Some("California".to_string()),
		zip_code: Some(zip.to_string()),
		website: Some(website.to_string()),
		maximum_capacity: capacity,
	})
	.collect()
}

/// Birthday somewhere in the last [`MAX_AGE_DAYS`] days.
pub fn random_birthday(rng: &mut impl Rng, today: NaiveDate) -> NaiveDate {
	today - Duration::days(rng.random_range(0..=MAX_AGE_DAYS))
}

pub fn random_weight(rng: &mut impl Rng) -> f64 {
	rng.random_range(MIN_WEIGHT..MAX_WEIGHT)
}

pub fn random_profile(rng: &mut impl Rng) -> NewProfile {
	NewProfile{
		picture: PUPPY_IMAGES.choose(rng).map(|s| s.to_string()),
		description: PUPPY_DESCRIPTIONS.choose(rng).map(|s| s.to_string()),
		special_needs: PUPPY_SPECIAL_NEEDS.choose(rng).map(|s| s.to_string()),
	}
}

#[derive(Debug, Default)]
pub struct Population {
	pub shelters: Vec<Shelter>,
	pub adopters: Vec<Adopter>,
	pub puppies_taken_in: usize,
	/// Puppies left over once every shelter was full.
	pub turned_away: usize,
}

/// Opens the seed shelters, takes in every named puppy (each one trying a
/// random shelter first) and registers the Smith household.
pub async fn populate(
	manager: &ShelterManager,
	rng: &mut impl Rng,
	today: NaiveDate,
) -> Result<Population, PopulateError> {
	let mut population = Population::default();

	for shelter in seed_shelters() {
		population.shelters.push(manager.add_shelter(&shelter).await?);
	}

	let (taken_in, turned_away) = take_in_puppies(manager, &population.shelters, rng, today).await?;
	population.puppies_taken_in = taken_in;
	population.turned_away = turned_away;

	for (first, last) in [("James", "Smith"), ("Maggie", "Smith"), ("Crazy", "Lady")] {
		population.adopters.push(manager.add_adopter(first, last).await?);
	}

	tracing::info!(
		shelters = population.shelters.len(),
		puppies = population.puppies_taken_in,
		adopters = population.adopters.len(),
		"database populated"
	);
	Ok(population)
}

/// Takes in every name in [`MALE_NAMES`] then [`FEMALE_NAMES`], each puppy
/// preferring a random one of `shelters`. Stops at the first
/// [`IntakeError::NoVacancy`]; returns `(taken in, turned away)`.
pub async fn take_in_puppies(
	manager: &ShelterManager,
	shelters: &[Shelter],
	rng: &mut impl Rng,
	today: NaiveDate,
) -> Result<(usize, usize), IntakeError> {
	let arrivals = MALE_NAMES.iter().map(|name| (*name, Gender::Male))
		.chain(FEMALE_NAMES.iter().map(|name| (*name, Gender::Female)))
		.collect::<Vec<_>>();
	let total = arrivals.len();
	let mut taken_in = 0;

	for (name, gender) in arrivals {
		let preferred = shelters.choose(rng).map(|s| s.id);
		let puppy = NewPuppy{
			name: name.to_string(),
			gender,
			date_of_birth: random_birthday(rng, today),
			weight: random_weight(rng),
		};
		let profile = random_profile(rng);

		match manager.intake_with_profile(&puppy, &profile, preferred).await {
			Ok(_) => taken_in += 1,
			Err(IntakeError::NoVacancy) => {
				let turned_away = total - taken_in;
				tracing::warn!(turned_away, "all shelters are full, please open more shelters");
				return Ok((taken_in, turned_away));
			},
			Err(e) => return Err(e),
		}
	}

	Ok((taken_in, 0))
}

mod common;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::*;
use puppy_shelter::{populate, queries, report, Gender, NewPuppy};

fn born(today: NaiveDate, days_ago: i64) -> NaiveDate {
	today - Duration::days(days_ago)
}

#[tokio::test]
async fn listings_are_ordered() -> anyhow::Result<()> {
	let manager = create_memory_db().await?;
	shelter(&manager, "Oakland Animal Services", 31).await?;
	let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

	for (name, days, weight) in [("Milo", 30, 12.0), ("Bear", 400, 35.5), ("Coco", 179, 3.2), ("Luna", 181, 20.0)] {
		manager.intake(&NewPuppy{
			name: name.to_string(),
			gender: Gender::Male,
			date_of_birth: born(today, days),
			weight,
		}, None).await?;
	}

	let names = |puppies: Vec<puppy_shelter::Puppy>| puppies.into_iter().map(|p| p.name).collect::<Vec<_>>();

	assert_eq!(names(queries::puppies_by_name(manager.db()).await?), ["Bear", "Coco", "Luna", "Milo"]);
	assert_eq!(names(queries::puppies_by_weight(manager.db()).await?), ["Coco", "Milo", "Luna", "Bear"]);
	assert_eq!(
		names(queries::puppies_younger_than_six_months(manager.db(), today).await?),
		["Milo", "Coco"]
	);
	Ok(())
}

#[tokio::test]
async fn reports_write_lines() -> anyhow::Result<()> {
	let manager = create_memory_db().await?;
	let sid = shelter(&manager, "Wonder Dog Rescue", 20).await?.id;
	let james = manager.add_adopter("James", "Smith").await?;
	let bella = manager.intake(&puppy("Bella"), Some(sid)).await?;
	manager.intake(&puppy("Abby"), Some(sid)).await?;

	let mut lines: Vec<String> = Vec::new();
	report::occupancy(manager.db(), &mut lines).await?;
	assert_eq!(lines.len(), 2);
	assert!(lines[1].contains("Wonder Dog Rescue  2/20"), "{lines:?}");
	assert!(lines[1].ends_with("(18 free)"), "{lines:?}");

	let mut lines: Vec<String> = Vec::new();
	report::adopters(manager.db(), bella.id, &mut lines).await?;
	assert_eq!(lines, ["Bella has not been adopted yet"]);

	manager.adopt(bella.id, &[james.id]).await?;

	let mut lines: Vec<String> = Vec::new();
	report::adopters(manager.db(), bella.id, &mut lines).await?;
	assert_eq!(lines.len(), 2);
	assert!(lines[1].ends_with("James Smith"), "{lines:?}");

	let mut lines: Vec<String> = Vec::new();
	report::shelter(manager.db(), sid, &mut lines).await?;
	assert_eq!(lines.len(), 2);
	assert!(lines[0].starts_with("Wonder Dog Rescue (1/20)"), "{lines:?}");
	assert!(lines[1].ends_with("Abby"), "{lines:?}");

	let mut lines: Vec<String> = Vec::new();
	report::by_name(manager.db(), &mut lines).await?;
	assert_eq!(lines.len(), 3);
	assert!(lines[1].ends_with("Abby"));
	assert!(lines[2].ends_with("Bella"));

	let mut lines: Vec<String> = Vec::new();
	report::shelter(manager.db(), 42, &mut lines).await?;
	assert_eq!(lines, ["No shelter with id 42"]);
	Ok(())
}

#[tokio::test]
async fn populate_fills_within_capacity() -> anyhow::Result<()> {
	let (manager, _dir) = create_temp_db().await?;
	let mut rng = StdRng::seed_from_u64(7);
	let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

	let population = populate::populate(&manager, &mut rng, today).await?;
	assert_eq!(population.shelters.len(), 5);
	assert_eq!(population.adopters.len(), 3);
	assert_eq!(population.puppies_taken_in, 100);
	assert_eq!(population.turned_away, 0);

	assert_eq!(count(&manager, "puppy").await?, 100);
	assert_eq!(count(&manager, "puppy_profile").await?, 100);
	assert_invariant(&manager).await?;

	let housed: i64 = queries::shelters(manager.db()).await?
		.iter()
		.map(|s| s.current_occupancy)
		.sum();
	assert_eq!(housed, 100);

	for puppy in queries::puppies_by_weight(manager.db()).await? {
		assert!(puppy.age_in_days(today) <= populate::MAX_AGE_DAYS);
		assert!(puppy.weight >= populate::MIN_WEIGHT && puppy.weight < populate::MAX_WEIGHT);
	}
	Ok(())
}

#[tokio::test]
async fn intake_stops_when_shelters_fill_up() -> anyhow::Result<()> {
	let manager = create_memory_db().await?;
	let mut rng = StdRng::seed_from_u64(11);
	let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
	let shelters = vec![
		shelter(&manager, "Tiny", 4).await?,
		shelter(&manager, "Small", 6).await?,
	];

	let (taken_in, turned_away) = populate::take_in_puppies(&manager, &shelters, &mut rng, today).await?;
	assert_eq!(taken_in, 10);
	assert_eq!(turned_away, 90);
	assert_eq!(count(&manager, "puppy").await?, 10);
	assert_eq!(occupancy(&manager, shelters[0].id).await?, 4);
	assert_eq!(occupancy(&manager, shelters[1].id).await?, 6);
	Ok(())
}

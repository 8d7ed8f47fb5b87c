use cheirinho::recommendation::{candidates, FallbackTier, HOT_REASON, RAINY_REASON};
use cheirinho::store::static_recipes;
use cheirinho::{classify, recommend, NoRecommendation, Recipe, WeatherBucket, WeatherSnapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn with_tags(mut recipe: Recipe, tags: &[WeatherBucket]) -> Recipe {
    recipe.weather_suitability = tags.to_vec();
    recipe
}

#[test]
fn test_classify_over_temperature_range() {
    let conditions = ["Ensolarado", "Chuvoso", "light rain", "", "Nublado"];
    for t in -20..=45 {
        for condition in conditions {
            let bucket = classify(t, condition);
            if t > 25 {
                assert_eq!(bucket, WeatherBucket::Hot, "{} {}", t, condition);
            } else if t < 18 {
                assert_eq!(bucket, WeatherBucket::Cold, "{} {}", t, condition);
            } else {
                assert!(
                    matches!(bucket, WeatherBucket::Rainy | WeatherBucket::Neutral),
                    "{} {}",
                    t,
                    condition
                );
            }
        }
    }
}

#[test]
fn test_boundary_temperatures_are_neither_hot_nor_cold() {
    assert_eq!(classify(18, "ensolarado"), WeatherBucket::Neutral);
    assert_eq!(classify(25, "ensolarado"), WeatherBucket::Neutral);
    assert_eq!(classify(17, "ensolarado"), WeatherBucket::Cold);
    assert_eq!(classify(26, "ensolarado"), WeatherBucket::Hot);
}

#[test]
fn test_hot_sunny_day_with_fixture_recipes() {
    let recipes = static_recipes();
    let weather = WeatherSnapshot::new(30, "Ensolarado");

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rec = recommend(&weather, &recipes, &mut rng).unwrap();
        let picked = recipes.iter().find(|r| r.id == rec.recipe_id).unwrap();
        assert!(picked.suits(WeatherBucket::Hot));
        assert_eq!(rec.reason, HOT_REASON);
    }
}

/// The reason follows the classified weather even when no recipe is tagged
/// for it and the pick comes from the neutral fallback.
#[test]
fn test_rainy_reason_kept_when_falling_back_to_neutral() {
    let recipes: Vec<Recipe> = static_recipes()
        .into_iter()
        .map(|r| {
            let tags: Vec<WeatherBucket> = r
                .weather_suitability
                .iter()
                .copied()
                .filter(|b| *b != WeatherBucket::Rainy)
                .collect();
            with_tags(r, &tags)
        })
        .collect();
    let weather = WeatherSnapshot::new(20, "Chuvoso");

    let (tier, _) = candidates(WeatherBucket::Rainy, &recipes);
    assert_eq!(tier, FallbackTier::Neutral);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rec = recommend(&weather, &recipes, &mut rng).unwrap();
        let picked = recipes.iter().find(|r| r.id == rec.recipe_id).unwrap();
        assert!(picked.suits(WeatherBucket::Neutral));
        assert_eq!(rec.reason, RAINY_REASON);
    }
}

#[test]
fn test_pick_always_matches_bucket_or_neutral() {
    let fixtures = static_recipes();
    let weathers = [
        WeatherSnapshot::new(30, "Ensolarado"),
        WeatherSnapshot::new(10, "Nublado"),
        WeatherSnapshot::new(21, "Chuva fraca"),
        WeatherSnapshot::new(22, "Parcialmente Nublado"),
    ];

    // Every subset of the fixtures, so some lack the bucket or neutral tags
    for mask in 1u32..(1 << fixtures.len()) {
        let subset: Vec<Recipe> = fixtures
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, r)| r.clone())
            .collect();

        for weather in &weathers {
            let bucket = classify(weather.temperature, &weather.condition);
            let mut rng = StdRng::seed_from_u64(u64::from(mask));
            let rec = recommend(weather, &subset, &mut rng).unwrap();
            let picked = subset.iter().find(|r| r.id == rec.recipe_id).unwrap();

            let nothing_eligible = subset
                .iter()
                .all(|r| !r.suits(bucket) && !r.suits(WeatherBucket::Neutral));
            assert!(
                picked.suits(bucket) || picked.suits(WeatherBucket::Neutral) || nothing_eligible,
                "picked {} for {:?} from mask {:#b}",
                picked.id,
                weather,
                mask
            );
        }
    }
}

#[test]
fn test_empty_collection_has_no_recommendation() {
    let mut rng = StdRng::seed_from_u64(0);
    for weather in [
        WeatherSnapshot::new(30, "Ensolarado"),
        WeatherSnapshot::new(20, "Chuvoso"),
        WeatherSnapshot::new(5, "Nevando"),
    ] {
        assert_eq!(recommend(&weather, &[], &mut rng), Err(NoRecommendation));
    }
}

#[test]
fn test_untagged_collection_uses_every_recipe() {
    let recipes: Vec<Recipe> = static_recipes()
        .into_iter()
        .map(|r| with_tags(r, &[]))
        .collect();
    let weather = WeatherSnapshot::new(10, "Nublado");
    let mut rng = StdRng::seed_from_u64(99);

    let seen: HashSet<String> = (0..500)
        .map(|_| recommend(&weather, &recipes, &mut rng).unwrap().recipe_id)
        .collect();
    assert_eq!(seen.len(), recipes.len());
}

#[test]
fn test_every_candidate_is_reachable() {
    // Cold weather: recipes 1, 3 and 4 are tagged cold
    let recipes = static_recipes();
    let weather = WeatherSnapshot::new(12, "Nublado");
    let mut rng = StdRng::seed_from_u64(2024);

    let mut counts = std::collections::HashMap::new();
    for _ in 0..3000 {
        let rec = recommend(&weather, &recipes, &mut rng).unwrap();
        *counts.entry(rec.recipe_id).or_insert(0u32) += 1;
    }

    let mut ids: Vec<&str> = counts.keys().map(String::as_str).collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "3", "4"]);
    // Roughly uniform: each should land near 1000 of 3000
    for count in counts.values() {
        assert!((800..=1200).contains(count), "{:?}", counts);
    }
}

#[test]
fn test_same_seed_same_pick() {
    let recipes = static_recipes();
    let weather = WeatherSnapshot::new(12, "Nublado");
    let first = recommend(&weather, &recipes, &mut StdRng::seed_from_u64(5)).unwrap();
    let second = recommend(&weather, &recipes, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(first, second);
}

//! Weather classification and recipe selection.
//!
//! Both functions are pure: the caller fetches the weather and the recipe
//! collection beforehand and supplies the random source.

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::model::{Recipe, Recommendation, WeatherBucket, WeatherSnapshot};

/// Above this temperature (°C, exclusive) the weather is hot
pub const HOT_ABOVE: i32 = 25;
/// Below this temperature (°C, exclusive) the weather is cold
pub const COLD_BELOW: i32 = 18;

/// Lowercase substrings that mark a condition label as rainy.
/// "chuv" covers chuva, chuvoso and chuvisco.
const RAIN_TOKENS: [&str; 2] = ["chuv", "rain"];

pub const HOT_REASON: &str =
    "O tempo está quente! Que tal algo refrescante para equilibrar o calor?";
pub const COLD_REASON: &str =
    "O tempo está frio. Nada como um café encorpado e bem quente para te abraçar.";
pub const RAINY_REASON: &str = "Dia de chuva pede um café aconchegante e um momento de pausa.";
pub const NEUTRAL_REASON: &str =
    "O tempo está fresco, pede um café especial para acompanhar o ritmo do dia.";

/// Returned when the recipe collection is empty
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No recommendation available: the recipe collection is empty")]
pub struct NoRecommendation;

/// Which step of the fallback progression produced the candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTier {
    /// Recipes tagged with the primary bucket
    Primary,
    /// Recipes tagged neutral
    Neutral,
    /// The whole collection
    All,
}

/// Classify a temperature and condition label into a weather bucket.
///
/// Both thresholds are exclusive: 18 °C is not cold and 25 °C is not hot,
/// so those temperatures go on to the rain check.
pub fn classify(temperature: i32, condition: &str) -> WeatherBucket {
    if temperature > HOT_ABOVE {
        WeatherBucket::Hot
    } else if temperature < COLD_BELOW {
        WeatherBucket::Cold
    } else if is_rainy(condition) {
        WeatherBucket::Rainy
    } else {
        WeatherBucket::Neutral
    }
}

fn is_rainy(condition: &str) -> bool {
    let condition = condition.to_lowercase();
    RAIN_TOKENS.iter().any(|token| condition.contains(token))
}

/// Canned justification shown for a bucket
pub fn reason_for(bucket: WeatherBucket) -> &'static str {
    match bucket {
        WeatherBucket::Hot => HOT_REASON,
        WeatherBucket::Cold => COLD_REASON,
        WeatherBucket::Rainy => RAINY_REASON,
        WeatherBucket::Neutral => NEUTRAL_REASON,
    }
}

/// Select the recipes eligible for `bucket`, falling back to neutral recipes
/// and then to the whole collection.
///
/// A neutral bucket has no first-pass filter of its own and starts at the
/// neutral tier.
pub fn candidates(bucket: WeatherBucket, recipes: &[Recipe]) -> (FallbackTier, Vec<&Recipe>) {
    if bucket != WeatherBucket::Neutral {
        let primary: Vec<&Recipe> = recipes.iter().filter(|r| r.suits(bucket)).collect();
        if !primary.is_empty() {
            return (FallbackTier::Primary, primary);
        }
    }

    let neutral: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| r.suits(WeatherBucket::Neutral))
        .collect();
    if !neutral.is_empty() {
        return (FallbackTier::Neutral, neutral);
    }

    (FallbackTier::All, recipes.iter().collect())
}

/// Recommend one recipe for the given weather.
///
/// The reason always follows the classified bucket, even when the pick came
/// from a fallback tier.
pub fn recommend<R: Rng + ?Sized>(
    weather: &WeatherSnapshot,
    recipes: &[Recipe],
    rng: &mut R,
) -> Result<Recommendation, NoRecommendation> {
    let bucket = classify(weather.temperature, &weather.condition);
    let (tier, pool) = candidates(bucket, recipes);

    if pool.is_empty() {
        return Err(NoRecommendation);
    }

    let pick = pool[rng.gen_range(0..pool.len())];
    debug!(
        "Picked '{}' for {} weather from {} candidate(s) ({:?} tier)",
        pick.name,
        bucket,
        pool.len(),
        tier
    );

    Ok(Recommendation {
        recipe_id: pick.id.clone(),
        reason: reason_for(bucket).to_string(),
    })
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete weather classification, also used as a recipe suitability tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherBucket {
    Hot,
    Cold,
    Neutral,
    Rainy,
}

impl WeatherBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherBucket::Hot => "hot",
            WeatherBucket::Cold => "cold",
            WeatherBucket::Neutral => "neutral",
            WeatherBucket::Rainy => "rainy",
        }
    }
}

impl fmt::Display for WeatherBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hot" => Ok(WeatherBucket::Hot),
            "cold" => Ok(WeatherBucket::Cold),
            "neutral" => Ok(WeatherBucket::Neutral),
            "rainy" => Ok(WeatherBucket::Rainy),
            other => Err(format!("Unknown weather tag: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Espresso,
    Latte,
    Cappuccino,
    #[serde(rename = "Cold Brew")]
    ColdBrew,
    #[default]
    Specialty,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Espresso,
        Category::Latte,
        Category::Cappuccino,
        Category::ColdBrew,
        Category::Specialty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Espresso => "Espresso",
            Category::Latte => "Latte",
            Category::Cappuccino => "Cappuccino",
            Category::ColdBrew => "Cold Brew",
            Category::Specialty => "Specialty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .or_else(|| wanted.eq_ignore_ascii_case("coldbrew").then_some(Category::ColdBrew))
            .ok_or_else(|| format!("Unknown category: {}", wanted))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// An ingredient with its quantity, e.g. "Leite Integral" / "150ml"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// A coffee recipe as shown to the user.
///
/// `ingredients` mirrors the names in `detailed_ingredients`; whoever edits a
/// recipe is expected to keep the two in sync (see [`crate::admin::RecipeDraft`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub country: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub prep_time: String,
    pub description: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub equipment: Vec<String>,
    pub detailed_ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub weather_suitability: Vec<WeatherBucket>,
}

impl Recipe {
    /// Whether the recipe is tagged as suitable for `bucket`
    pub fn suits(&self, bucket: WeatherBucket) -> bool {
        self.weather_suitability.contains(&bucket)
    }
}

/// Current temperature (°C) and a free-text condition label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: i32,
    pub condition: String,
}

impl WeatherSnapshot {
    pub fn new(temperature: i32, condition: impl Into<String>) -> Self {
        Self {
            temperature,
            condition: condition.into(),
        }
    }
}

/// A recommended recipe together with the reason shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recipe_id: String,
    pub reason: String,
}

mod catalog;
mod row;
mod supabase;

pub use catalog::static_recipes;
pub use supabase::SupabaseStore;

use async_trait::async_trait;
use log::{info, warn};
use std::collections::HashSet;

use crate::admin::RecipeDraft;
use crate::model::{Category, Difficulty, Ingredient, Recipe, Step, WeatherBucket};
use crate::CheirinhoError;

/// Partial update of a stored recipe; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipePatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub prep_time: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub detailed_ingredients: Option<Vec<Ingredient>>,
    pub steps: Option<Vec<Step>>,
    pub equipment: Option<Vec<String>>,
    pub weather_suitability: Option<Vec<WeatherBucket>>,
}

impl From<&RecipeDraft> for RecipePatch {
    /// The edit form always submits every field
    fn from(draft: &RecipeDraft) -> Self {
        RecipePatch {
            name: Some(draft.name.clone()),
            country: Some(draft.country.clone()),
            description: Some(draft.description.clone()),
            image: Some(draft.image.clone()),
            category: Some(draft.category),
            prep_time: Some(draft.prep_time.clone()),
            difficulty: Some(draft.difficulty),
            detailed_ingredients: Some(draft.detailed_ingredients.clone()),
            steps: Some(draft.steps.clone()),
            equipment: Some(draft.equipment.clone()),
            weather_suitability: Some(draft.weather_suitability.clone()),
        }
    }
}

/// Remote persistence for recipes
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Get the store name (e.g., "supabase")
    fn store_name(&self) -> &str;

    /// Every stored recipe
    async fn fetch_all(&self) -> Result<Vec<Recipe>, CheirinhoError>;

    /// Store a new recipe, returning the created record(s)
    async fn insert(&self, draft: &RecipeDraft) -> Result<Vec<Recipe>, CheirinhoError>;

    /// Apply `patch` to the recipe with `id`, returning the updated record(s)
    async fn update(&self, id: &str, patch: &RecipePatch) -> Result<Vec<Recipe>, CheirinhoError>;

    async fn delete(&self, id: &str) -> Result<(), CheirinhoError>;
}

/// Combine the baked-in recipes with remote ones.
///
/// Remote records win on a case-insensitive name collision. An empty remote
/// collection leaves the static list as is.
pub fn merge_catalog(static_list: Vec<Recipe>, remote: Vec<Recipe>) -> Vec<Recipe> {
    if remote.is_empty() {
        return static_list;
    }

    let remote_names: HashSet<String> = remote.iter().map(|r| r.name.to_lowercase()).collect();
    let mut merged: Vec<Recipe> = static_list
        .into_iter()
        .filter(|r| !remote_names.contains(&r.name.to_lowercase()))
        .collect();
    merged.extend(remote);
    merged
}

/// The recipe collection served to the user
#[derive(Debug, Clone)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    /// Set when the remote store could not be read and only static recipes
    /// are being served
    pub remote_error: Option<String>,
}

/// Load the catalog, falling back to the static recipes when the store is
/// missing or failing.
pub async fn load_catalog(store: Option<&dyn RecipeStore>) -> Catalog {
    let Some(store) = store else {
        return Catalog {
            recipes: static_recipes(),
            remote_error: None,
        };
    };

    match store.fetch_all().await {
        Ok(remote) => {
            info!(
                "Loaded {} recipe(s) from {}",
                remote.len(),
                store.store_name()
            );
            Catalog {
                recipes: merge_catalog(static_recipes(), remote),
                remote_error: None,
            }
        }
        Err(e) => {
            warn!(
                "Failed to load recipes from {}: {}",
                store.store_name(),
                e
            );
            Catalog {
                recipes: static_recipes(),
                remote_error: Some(e.to_string()),
            }
        }
    }
}

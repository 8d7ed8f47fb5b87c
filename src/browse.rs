use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tokio::fs;

use crate::model::{Category, Recipe};
use crate::CheirinhoError;

/// Search and filter criteria for the recipe list
#[derive(Debug, Clone, Default)]
pub struct RecipeQuery {
    /// Matched case-insensitively against name, description and country
    pub text: String,
    pub category: Option<Category>,
    /// Every listed ingredient must be present
    pub ingredients: Vec<String>,
    /// Every listed piece of equipment must be present
    pub equipment: Vec<String>,
    pub favorites_only: bool,
}

impl RecipeQuery {
    pub fn matches(&self, recipe: &Recipe, favorites: &Favorites) -> bool {
        if self.favorites_only && !favorites.contains(&recipe.id) {
            return false;
        }

        let needle = self.text.to_lowercase();
        let matches_text = recipe.name.to_lowercase().contains(&needle)
            || recipe.description.to_lowercase().contains(&needle)
            || recipe.country.to_lowercase().contains(&needle);
        let matches_category = self.category.map_or(true, |c| recipe.category == c);
        let matches_ingredients = self
            .ingredients
            .iter()
            .all(|ing| recipe.ingredients.contains(ing));
        let matches_equipment = self
            .equipment
            .iter()
            .all(|eq| recipe.equipment.contains(eq));

        matches_text && matches_category && matches_ingredients && matches_equipment
    }

    /// Recipes matching the query, in collection order
    pub fn filter<'a>(&self, recipes: &'a [Recipe], favorites: &Favorites) -> Vec<&'a Recipe> {
        recipes
            .iter()
            .filter(|r| self.matches(r, favorites))
            .collect()
    }
}

fn facet<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct ingredient names across the collection, sorted
pub fn ingredient_facets(recipes: &[Recipe]) -> Vec<String> {
    facet(recipes.iter().flat_map(|r| r.ingredients.iter()))
}

/// Distinct equipment names across the collection, sorted
pub fn equipment_facets(recipes: &[Recipe]) -> Vec<String> {
    facet(recipes.iter().flat_map(|r| r.equipment.iter()))
}

pub fn find_recipe<'a>(recipes: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    recipes.iter().find(|r| r.id == id)
}

/// The user's favorite recipe ids, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Add or remove `id`; returns whether it is a favorite afterwards
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Read favorites from a JSON file; a missing file means no favorites
    pub async fn load(path: &Path) -> Result<Self, CheirinhoError> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save(&self, path: &Path) -> Result<(), CheirinhoError> {
        fs::write(path, serde_json::to_string(self)?).await?;
        Ok(())
    }
}

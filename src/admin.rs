use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;
use crate::model::{Category, Difficulty, Ingredient, Recipe, Step, WeatherBucket};
use crate::store::{load_catalog, RecipePatch, RecipeStore};
use crate::CheirinhoError;

/// Form state for creating or editing a recipe.
///
/// `ingredients` is maintained alongside `detailed_ingredients` by the
/// add/remove methods and always lists the same names in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
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

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: "Brasil".to_string(),
            category: Category::Espresso,
            difficulty: Difficulty::Easy,
            prep_time: String::new(),
            description: String::new(),
            image: String::new(),
            ingredients: Vec::new(),
            equipment: Vec::new(),
            detailed_ingredients: Vec::new(),
            steps: Vec::new(),
            weather_suitability: vec![WeatherBucket::Neutral],
        }
    }
}

impl RecipeDraft {
    /// Pre-fill the form with an existing recipe
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            country: recipe.country.clone(),
            category: recipe.category,
            difficulty: recipe.difficulty,
            prep_time: recipe.prep_time.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone(),
            ingredients: recipe.ingredients.clone(),
            equipment: recipe.equipment.clone(),
            detailed_ingredients: recipe.detailed_ingredients.clone(),
            steps: recipe.steps.clone(),
            weather_suitability: recipe.weather_suitability.clone(),
        }
    }

    /// Append an ingredient; ignored when the name or amount is blank
    pub fn add_ingredient(&mut self, name: &str, amount: &str) -> bool {
        if name.trim().is_empty() || amount.trim().is_empty() {
            return false;
        }
        self.detailed_ingredients.push(Ingredient {
            name: name.to_string(),
            amount: amount.to_string(),
        });
        self.ingredients.push(name.to_string());
        true
    }

    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.detailed_ingredients.len() {
            self.detailed_ingredients.remove(index);
        }
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    pub fn add_equipment(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.equipment.push(name.to_string());
        true
    }

    pub fn remove_equipment(&mut self, index: usize) {
        if index < self.equipment.len() {
            self.equipment.remove(index);
        }
    }

    /// Append a preparation step; ignored when the title or description is blank
    pub fn add_step(&mut self, title: &str, description: &str) -> bool {
        if title.trim().is_empty() || description.trim().is_empty() {
            return false;
        }
        self.steps.push(Step {
            title: title.to_string(),
            description: description.to_string(),
        });
        true
    }

    pub fn remove_step(&mut self, index: usize) {
        if index < self.steps.len() {
            self.steps.remove(index);
        }
    }

    /// Add the tag if absent, remove it otherwise
    pub fn toggle_weather(&mut self, bucket: WeatherBucket) {
        if let Some(pos) = self.weather_suitability.iter().position(|b| *b == bucket) {
            self.weather_suitability.remove(pos);
        } else {
            self.weather_suitability.push(bucket);
        }
    }

    /// Rebuild `ingredients` from `detailed_ingredients`.
    ///
    /// Drafts read from JSON files may carry only one of the two lists.
    pub fn sync_ingredient_names(&mut self) {
        self.ingredients = self
            .detailed_ingredients
            .iter()
            .map(|i| i.name.clone())
            .collect();
    }

    pub fn validate(&self) -> Result<(), CheirinhoError> {
        if self.name.trim().is_empty() {
            return Err(CheirinhoError::InvalidRecipe(
                "Recipe name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Password check guarding the editing commands
#[derive(Debug, Clone)]
pub struct AdminGate {
    password: Option<String>,
}

impl AdminGate {
    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            password: config.password.clone(),
        }
    }

    pub fn login<'a>(
        &self,
        attempt: &str,
        store: &'a dyn RecipeStore,
    ) -> Result<AdminSession<'a>, CheirinhoError> {
        let expected = self
            .password
            .as_deref()
            .ok_or(CheirinhoError::AdminDisabled)?;
        if attempt != expected {
            return Err(CheirinhoError::Unauthorized);
        }
        Ok(AdminSession { store })
    }
}

/// Authenticated access to recipe editing.
///
/// Every write reloads the catalog and returns the refreshed collection.
pub struct AdminSession<'a> {
    store: &'a dyn RecipeStore,
}

impl<'a> AdminSession<'a> {
    pub async fn create(&self, draft: &RecipeDraft) -> Result<Vec<Recipe>, CheirinhoError> {
        draft.validate()?;
        let created = self.store.insert(draft).await?;
        info!("Created {} recipe(s) named '{}'", created.len(), draft.name);
        self.refresh().await
    }

    pub async fn update(
        &self,
        id: &str,
        draft: &RecipeDraft,
    ) -> Result<Vec<Recipe>, CheirinhoError> {
        draft.validate()?;
        self.store.update(id, &RecipePatch::from(draft)).await?;
        info!("Updated recipe {}", id);
        self.refresh().await
    }

    pub async fn delete(&self, id: &str) -> Result<Vec<Recipe>, CheirinhoError> {
        self.store.delete(id).await?;
        info!("Deleted recipe {}", id);
        self.refresh().await
    }

    async fn refresh(&self) -> Result<Vec<Recipe>, CheirinhoError> {
        let catalog = load_catalog(Some(self.store)).await;
        match catalog.remote_error {
            Some(e) => Err(CheirinhoError::StoreError(e)),
            None => Ok(catalog.recipes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = RecipeDraft::default();
        assert_eq!(draft.country, "Brasil");
        assert_eq!(draft.category, Category::Espresso);
        assert_eq!(draft.difficulty, Difficulty::Easy);
        assert_eq!(draft.weather_suitability, vec![WeatherBucket::Neutral]);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_ingredient_lists_stay_in_sync() {
        let mut draft = RecipeDraft::default();
        assert!(draft.add_ingredient("Espresso", "30ml"));
        assert!(draft.add_ingredient("Leite", "120ml"));
        assert!(!draft.add_ingredient("Canela", ""));
        assert!(!draft.add_ingredient("  ", "1g"));
        assert_eq!(draft.ingredients, vec!["Espresso", "Leite"]);

        draft.remove_ingredient(0);
        assert_eq!(draft.ingredients, vec!["Leite"]);
        assert_eq!(draft.detailed_ingredients.len(), 1);
        assert_eq!(draft.detailed_ingredients[0].name, "Leite");

        draft.remove_ingredient(5);
        assert_eq!(draft.ingredients.len(), 1);
    }

    #[test]
    fn test_steps_and_equipment() {
        let mut draft = RecipeDraft::default();
        assert!(draft.add_step("Moer", "Moa 18g de café."));
        assert!(!draft.add_step("Extrair", ""));
        assert!(draft.add_equipment("Moedor"));
        assert!(!draft.add_equipment(""));
        assert_eq!(draft.steps.len(), 1);
        assert_eq!(draft.equipment, vec!["Moedor"]);

        draft.remove_step(0);
        draft.remove_equipment(0);
        assert!(draft.steps.is_empty());
        assert!(draft.equipment.is_empty());
    }

    #[test]
    fn test_toggle_weather() {
        let mut draft = RecipeDraft::default();
        draft.toggle_weather(WeatherBucket::Hot);
        draft.toggle_weather(WeatherBucket::Neutral);
        assert_eq!(draft.weather_suitability, vec![WeatherBucket::Hot]);
    }

    #[test]
    fn test_partial_json_draft_uses_defaults() {
        let mut draft: RecipeDraft = serde_json::from_str(
            r#"{"name": "Café Gelado", "detailedIngredients": [{"name": "Gelo", "amount": "5 cubos"}]}"#,
        )
        .unwrap();
        draft.sync_ingredient_names();

        assert_eq!(draft.country, "Brasil");
        assert_eq!(draft.ingredients, vec!["Gelo"]);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_from_recipe_copies_fields() {
        let recipe = crate::store::static_recipes().remove(1);
        let draft = RecipeDraft::from_recipe(&recipe);
        assert_eq!(draft.name, recipe.name);
        assert_eq!(draft.category, Category::ColdBrew);
        assert_eq!(draft.weather_suitability, recipe.weather_suitability);
    }
}

//! Mapping between `receitas_cafe` rows (Portuguese column names, loosely
//! typed JSON) and [`Recipe`].

use crate::admin::RecipeDraft;
use crate::model::{Category, Difficulty, Ingredient, Recipe, Step, WeatherBucket};
use crate::store::RecipePatch;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(crate) const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1541167760496-1628856ab772?q=80&w=1000&auto=format&fit=crop";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowId {
    Number(i64),
    Text(String),
}

/// A JSON column that should hold an array; anything else reads as empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    List(Vec<T>),
    Other(Value),
}

impl<T> Loose<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Loose::List(items) => items,
            Loose::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IngredientEntry {
    Name(String),
    Detailed {
        name: Option<String>,
        amount: Option<String>,
    },
    Other(Value),
}

impl IngredientEntry {
    fn into_ingredient(self) -> Option<Ingredient> {
        let (name, amount) = match self {
            IngredientEntry::Name(name) => (name, String::new()),
            IngredientEntry::Detailed { name, amount } => (name?, amount.unwrap_or_default()),
            IngredientEntry::Other(_) => return None,
        };
        if name.trim().is_empty() {
            return None;
        }
        Some(Ingredient { name, amount })
    }
}

#[derive(Debug, Default, Deserialize)]
struct StepObject {
    title: Option<String>,
    titulo: Option<String>,
    description: Option<String>,
    descricao: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StepEntry {
    Object(StepObject),
    Other(Value),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeRow {
    id: RowId,
    nome: String,
    pais: Option<String>,
    descricao: Option<String>,
    imagem: Option<String>,
    ingredientes: Option<Loose<IngredientEntry>>,
    equipamentos: Option<Loose<Value>>,
    modo_preparo: Option<Loose<StepEntry>>,
    clima_adequado: Option<Loose<Value>>,
    categoria: Option<String>,
    dificuldade: Option<String>,
    tempo_preparo: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        let id = match row.id {
            RowId::Number(n) => n.to_string(),
            RowId::Text(s) => s,
        };

        let detailed_ingredients: Vec<Ingredient> = row
            .ingredientes
            .map(Loose::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter_map(IngredientEntry::into_ingredient)
            .collect();

        let equipment = row
            .equipamentos
            .map(Loose::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .filter(|s| !s.is_empty())
            .collect();

        let steps = row
            .modo_preparo
            .map(Loose::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| match entry {
                StepEntry::Object(s) => Some(Step {
                    title: s.title.or(s.titulo).unwrap_or_default(),
                    description: s.description.or(s.descricao).unwrap_or_default(),
                }),
                StepEntry::Other(_) => None,
            })
            .collect();

        let weather_suitability = match row.clima_adequado {
            Some(tags) => tags
                .into_vec()
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|tag| match tag.parse::<WeatherBucket>() {
                    Ok(bucket) => Some(bucket),
                    Err(e) => {
                        warn!("Recipe '{}': {}", row.nome, e);
                        None
                    }
                })
                .collect(),
            None => vec![WeatherBucket::Neutral],
        };

        let category = non_empty(row.categoria)
            .map(|c| {
                c.parse::<Category>().unwrap_or_else(|e| {
                    warn!("Recipe '{}': {}", row.nome, e);
                    Category::default()
                })
            })
            .unwrap_or_default();

        let difficulty = non_empty(row.dificuldade)
            .map(|d| {
                d.parse::<Difficulty>().unwrap_or_else(|e| {
                    warn!("Recipe '{}': {}", row.nome, e);
                    Difficulty::default()
                })
            })
            .unwrap_or_default();

        Recipe {
            id,
            ingredients: detailed_ingredients.iter().map(|i| i.name.clone()).collect(),
            detailed_ingredients,
            equipment,
            steps,
            weather_suitability,
            category,
            difficulty,
            country: non_empty(row.pais).unwrap_or_else(|| "Brasil".to_string()),
            description: row.descricao.unwrap_or_default(),
            image: non_empty(row.imagem).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            prep_time: non_empty(row.tempo_preparo).unwrap_or_else(|| "5 min".to_string()),
            name: row.nome,
        }
    }
}

/// Full row written on insert
#[derive(Debug, Serialize)]
pub(crate) struct NewRow<'a> {
    nome: &'a str,
    pais: &'a str,
    descricao: &'a str,
    imagem: &'a str,
    categoria: Category,
    tempo_preparo: &'a str,
    dificuldade: Difficulty,
    ingredientes: &'a [Ingredient],
    modo_preparo: &'a [Step],
    equipamentos: &'a [String],
    clima_adequado: &'a [WeatherBucket],
}

impl<'a> From<&'a RecipeDraft> for NewRow<'a> {
    fn from(draft: &'a RecipeDraft) -> Self {
        NewRow {
            nome: &draft.name,
            pais: &draft.country,
            descricao: &draft.description,
            imagem: &draft.image,
            categoria: draft.category,
            tempo_preparo: &draft.prep_time,
            dificuldade: draft.difficulty,
            ingredientes: &draft.detailed_ingredients,
            modo_preparo: &draft.steps,
            equipamentos: &draft.equipment,
            clima_adequado: &draft.weather_suitability,
        }
    }
}

/// Only the columns that are being changed
#[derive(Debug, Serialize)]
pub(crate) struct PatchRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    nome: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pais: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descricao: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    imagem: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categoria: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tempo_preparo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dificuldade: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ingredientes: Option<&'a [Ingredient]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modo_preparo: Option<&'a [Step]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    equipamentos: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clima_adequado: Option<&'a [WeatherBucket]>,
}

impl<'a> From<&'a RecipePatch> for PatchRow<'a> {
    fn from(patch: &'a RecipePatch) -> Self {
        PatchRow {
            nome: patch.name.as_deref(),
            pais: patch.country.as_deref(),
            descricao: patch.description.as_deref(),
            imagem: patch.image.as_deref(),
            categoria: patch.category,
            tempo_preparo: patch.prep_time.as_deref(),
            dificuldade: patch.difficulty,
            ingredientes: patch.detailed_ingredients.as_deref(),
            modo_preparo: patch.steps.as_deref(),
            equipamentos: patch.equipment.as_deref(),
            clima_adequado: patch.weather_suitability.as_deref(),
        }
    }
}

use log::{debug, warn};
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::AiConfig;
use crate::model::{Recipe, Recommendation, WeatherSnapshot};
use crate::recommendation::{recommend, NoRecommendation};
use crate::CheirinhoError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiAnswer {
    recipe_id: String,
    reason: String,
}

/// Build the barista prompt listing every recipe with its suitability tags
pub fn build_prompt(weather: &WeatherSnapshot, recipes: &[Recipe]) -> String {
    let list = recipes
        .iter()
        .map(|r| {
            let tags: Vec<&str> = r.weather_suitability.iter().map(|b| b.as_str()).collect();
            format!(
                "- [id: {}] {} (Categoria: {}, Clima: {})",
                r.id,
                r.name,
                r.category,
                tags.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Você é um especialista em café brasileiro (barista).\n\
         O clima atual é: {}°C e {}.\n\n\
         Com base nisso, escolha a melhor receita de café da lista abaixo para o usuário hoje.\n\
         Explique brevemente por que essa é a escolha perfeita para este clima em português brasileiro.\n\n\
         Lista de receitas:\n{}\n\n\
         Retorne apenas um JSON no formato:\n\
         {{\"recipeId\": \"id_da_receita\", \"reason\": \"sua explicação curta e charmosa\"}}",
        weather.temperature, weather.condition, list
    )
}

/// Recommendation chosen by a Gemini model
pub struct GeminiRecommender {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl GeminiRecommender {
    /// Create a new recommender from configuration
    pub fn new(config: &AiConfig) -> Result<Self, CheirinhoError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                CheirinhoError::AiError(
                    "GEMINI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(GeminiRecommender {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn provider_name(&self) -> &str {
        "gemini"
    }

    /// Ask the model for a recommendation.
    ///
    /// Answers naming a recipe that is not in `recipes` are rejected.
    pub async fn recommend(
        &self,
        weather: &WeatherSnapshot,
        recipes: &[Recipe],
    ) -> Result<Recommendation, CheirinhoError> {
        if recipes.is_empty() {
            return Err(NoRecommendation.into());
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": build_prompt(weather, recipes) }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "responseMimeType": "application/json"
                }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(CheirinhoError::AiError(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                CheirinhoError::AiError(
                    "Failed to extract content from Gemini response".to_string(),
                )
            })?;

        let answer: AiAnswer = serde_json::from_str(text.trim())?;
        if !recipes.iter().any(|r| r.id == answer.recipe_id) {
            return Err(CheirinhoError::AiError(format!(
                "Model picked unknown recipe '{}'",
                answer.recipe_id
            )));
        }

        Ok(Recommendation {
            recipe_id: answer.recipe_id,
            reason: answer.reason,
        })
    }

    /// Ask the model, using the local engine when the model call fails
    pub async fn recommend_or_fallback<R: Rng + ?Sized>(
        &self,
        weather: &WeatherSnapshot,
        recipes: &[Recipe],
        rng: &mut R,
    ) -> Result<Recommendation, NoRecommendation> {
        match self.recommend(weather, recipes).await {
            Ok(recommendation) => Ok(recommendation),
            Err(e) => {
                warn!("{} recommendation failed, using local engine: {}", self.provider_name(), e);
                recommend(weather, recipes, rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::HOT_REASON;
    use crate::store::static_recipes;
    use mockito::{Matcher, Server};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn recommender(base_url: String) -> GeminiRecommender {
        let config = AiConfig {
            enabled: true,
            api_key: Some("test-key".to_string()),
            base_url,
            ..Default::default()
        };
        GeminiRecommender::new(&config).unwrap()
    }

    fn gemini_body(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn test_prompt_lists_recipes() {
        let prompt = build_prompt(&WeatherSnapshot::new(12, "Nublado"), &static_recipes());
        assert!(prompt.contains("12°C e Nublado"));
        assert!(
            prompt.contains("[id: 2] Cold Brew de Rapadura (Categoria: Cold Brew, Clima: hot)")
        );
        assert!(prompt.contains("\"recipeId\""));
    }

    #[tokio::test]
    async fn test_recommend_parses_answer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(gemini_body(r#"{"recipeId": "4", "reason": "Frio pede cacau."}"#))
            .create_async()
            .await;

        let rec = recommender(server.url())
            .recommend(&WeatherSnapshot::new(12, "Nublado"), &static_recipes())
            .await
            .unwrap();

        assert_eq!(rec.recipe_id, "4");
        assert_eq!(rec.reason, "Frio pede cacau.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_recipe_falls_back_to_local_engine() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(gemini_body(r#"{"recipeId": "999", "reason": "?"}"#))
            .create_async()
            .await;

        let recipes = static_recipes();
        let mut rng = StdRng::seed_from_u64(3);
        let rec = recommender(server.url())
            .recommend_or_fallback(&WeatherSnapshot::new(32, "Ensolarado"), &recipes, &mut rng)
            .await
            .unwrap();

        assert!(["2", "5"].contains(&rec.recipe_id.as_str()));
        assert_eq!(rec.reason, HOT_REASON);
    }

    #[tokio::test]
    async fn test_api_error_is_reported() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error": {"message": "quota"}}"#)
            .create_async()
            .await;

        let result = recommender(server.url())
            .recommend(&WeatherSnapshot::new(20, "Nublado"), &static_recipes())
            .await;
        assert!(matches!(result, Err(CheirinhoError::AiError(msg)) if msg.contains("429")));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(recommender("http://localhost".to_string()).provider_name(), "gemini");
    }
}

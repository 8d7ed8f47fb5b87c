use crate::admin::RecipeDraft;
use crate::config::StoreConfig;
use crate::model::Recipe;
use crate::store::row::{NewRow, PatchRow, RecipeRow};
use crate::store::{RecipePatch, RecipeStore};
use crate::CheirinhoError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

/// Recipe table exposed through a Supabase (PostgREST) REST endpoint
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseStore {
    /// Create a store from configuration, or `None` when no URL is configured
    pub fn from_config(config: &StoreConfig) -> Result<Option<Self>, CheirinhoError> {
        let Some(url) = config.url.as_deref() else {
            return Ok(None);
        };

        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SUPABASE_ANON_KEY").ok())
            .ok_or_else(|| {
                CheirinhoError::StoreError(
                    "SUPABASE_ANON_KEY not found in config or environment".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Some(SupabaseStore {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            api_key,
            table: config.table.clone(),
        }))
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, table: String) -> Self {
        SupabaseStore {
            client: Client::new(),
            base_url,
            api_key,
            table,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn check(response: Response) -> Result<Response, CheirinhoError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().await?;
        Err(CheirinhoError::StoreError(format!(
            "Supabase error ({}): {}",
            status, error_text
        )))
    }

    async fn read_rows(response: Response) -> Result<Vec<Recipe>, CheirinhoError> {
        let rows: Vec<RecipeRow> = response
            .json()
            .await
            .map_err(|e| CheirinhoError::StoreError(format!("Malformed recipe rows: {}", e)))?;
        debug!("Received {} recipe row(s)", rows.len());
        Ok(rows.into_iter().map(Recipe::from).collect())
    }
}

#[async_trait]
impl RecipeStore for SupabaseStore {
    fn store_name(&self) -> &str {
        "supabase"
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, CheirinhoError> {
        let request = self
            .client
            .get(self.endpoint())
            .query(&[("select", "*")]);
        let response = Self::check(self.authorized(request).send().await?).await?;
        Self::read_rows(response).await
    }

    async fn insert(&self, draft: &RecipeDraft) -> Result<Vec<Recipe>, CheirinhoError> {
        let request = self
            .client
            .post(self.endpoint())
            .header("Prefer", "return=representation")
            .json(&[NewRow::from(draft)]);
        let response = Self::check(self.authorized(request).send().await?).await?;
        Self::read_rows(response).await
    }

    async fn update(&self, id: &str, patch: &RecipePatch) -> Result<Vec<Recipe>, CheirinhoError> {
        let request = self
            .client
            .patch(self.endpoint())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&PatchRow::from(patch));
        let response = Self::check(self.authorized(request).send().await?).await?;
        let updated = Self::read_rows(response).await?;
        if updated.is_empty() {
            return Err(CheirinhoError::RecipeNotFound(id.to_string()));
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), CheirinhoError> {
        let request = self
            .client
            .delete(self.endpoint())
            .query(&[("id", format!("eq.{}", id))]);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}

//! REST client for the food backend.
//!
//! Talks to the four catalog endpoints: list, create, update and delete.

use crate::api::models::NewFood;
use crate::api::{ApiError, Food, FoodInput};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

/// Remote food collection used by the dashboard.
///
/// `FoodClient` implements it over HTTP. Tests drive the dashboard
/// with the generated `MockFoodApi`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodApi: Send + Sync {
    /// `GET /foods`
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError>;

    /// `POST /foods`, always sent with `available: true`
    async fn create_food(&self, input: &FoodInput) -> Result<Food, ApiError>;

    /// `PUT /foods/:id` with the full record
    async fn update_food(&self, food: &Food) -> Result<Food, ApiError>;

    /// `DELETE /foods/:id`
    async fn delete_food(&self, id: u64) -> Result<(), ApiError>;
}

/// HTTP client for the food backend.
#[derive(Debug, Clone)]
pub struct FoodClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL without trailing slash (e.g. http://localhost:3333)
    base_url: String,
}

impl FoodClient {
    /// Create a new food client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<FoodClient>` - New client or error
    pub fn new(config: &Config) -> Result<Self> {
        if config.api_url.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "Food API URL is required. Please set api_url in config.jsonc"
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn food_url(&self, id: u64) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }
}

/// Turn a non-success response into `ApiError::Status`.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    Ok(response)
}

#[async_trait]
impl FoodApi for FoodClient {
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError> {
        tracing::debug!(url = %self.foods_url(), "listing foods");
        let response = self.client.get(self.foods_url()).send().await?;
        check_status(response)
            .await?
            .json()
            .await
            .map_err(|source| ApiError::Decode {
                what: "food list",
                source,
            })
    }

    async fn create_food(&self, input: &FoodInput) -> Result<Food, ApiError> {
        tracing::debug!(name = %input.name, "creating food");
        let response = self
            .client
            .post(self.foods_url())
            .json(&NewFood::new(input))
            .send()
            .await?;
        check_status(response)
            .await?
            .json()
            .await
            .map_err(|source| ApiError::Decode {
                what: "created food",
                source,
            })
    }

    async fn update_food(&self, food: &Food) -> Result<Food, ApiError> {
        tracing::debug!(id = food.id, "updating food");
        let response = self
            .client
            .put(self.food_url(food.id))
            .json(food)
            .send()
            .await?;
        check_status(response)
            .await?
            .json()
            .await
            .map_err(|source| ApiError::Decode {
                what: "updated food",
                source,
            })
    }

    async fn delete_food(&self, id: u64) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting food");
        let response = self.client.delete(self.food_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

//! HTTP client for the grocery list API.
//!
//! One request per user action. Failures abandon the operation; retry is the
//! user's decision, never the client's.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;

use grocer_core::{
    CreateItemRequest, CreateListRequest, GroceryItem, ShoppingList, UpdateItemRequest,
};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Grocery list API client.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new client for the configured base URL.
    pub fn new(config: ApiConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .unwrap_or_default();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a new shopping list.
    ///
    /// The response carries the server-issued share code for the list.
    pub async fn create_list(&self, name: &str) -> ApiResult<ShoppingList> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::invalid_input("list name must not be empty"));
        }

        let url = format!("{}/api/list", self.base_url);
        debug!(url = %url, name = %name, "Creating list");

        let request = CreateListRequest {
            name: name.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let response = Self::ensure_success(response).await?;

        let list: ShoppingList = response.json().await?;
        debug!(list_id = %list.id, share_code = %list.share_code, "List created");
        Ok(list)
    }

    /// Resolve a share code to its shopping list.
    pub async fn get_list_by_share_code(&self, share_code: &str) -> ApiResult<ShoppingList> {
        let url = format!("{}/api/list/{}", self.base_url, share_code.trim());
        debug!(url = %url, "Fetching shared list");

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.json().await?)
    }

    /// Add an item to a list. Category assignment is left to the server.
    pub async fn create_item(&self, request: CreateItemRequest) -> ApiResult<GroceryItem> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::invalid_input("item name must not be empty"));
        }

        let request = CreateItemRequest {
            list_id: request.list_id,
            name,
            // Quantities below 1 never reach the server.
            quantity: request.quantity.max(1),
        };

        let url = format!("{}/api/items", self.base_url);
        debug!(url = %url, list_id = %request.list_id, name = %request.name, "Creating item");

        let response = self.client.post(&url).json(&request).send().await?;
        let response = Self::ensure_success(response).await?;

        let item: GroceryItem = response.json().await?;
        debug!(item_id = item.id, category = %item.category, "Item created");
        Ok(item)
    }

    /// Fetch all items of a list.
    pub async fn list_items(&self, list_id: &str) -> ApiResult<Vec<GroceryItem>> {
        let url = format!("{}/api/items", self.base_url);
        debug!(url = %url, list_id = %list_id, "Fetching items");

        let response = self
            .client
            .get(&url)
            .query(&[("list_id", list_id)])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let items: Vec<GroceryItem> = response.json().await?;
        debug!(count = items.len(), "Items fetched");
        Ok(items)
    }

    /// Apply a partial update to an item.
    pub async fn update_item(
        &self,
        id: i64,
        mut update: UpdateItemRequest,
    ) -> ApiResult<GroceryItem> {
        if update.is_empty() {
            return Err(ApiError::invalid_input("update carries no fields"));
        }
        if let Some(name) = update.name.take() {
            let trimmed = name.trim().to_string();
            if trimmed.is_empty() {
                return Err(ApiError::invalid_input("item name must not be empty"));
            }
            update.name = Some(trimmed);
        }
        if let Some(quantity) = update.quantity {
            update.quantity = Some(quantity.max(1));
        }

        let url = format!("{}/api/items/{}", self.base_url, id);
        debug!(url = %url, item_id = id, "Updating item");

        let response = self.client.put(&url).json(&update).send().await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.json().await?)
    }

    /// Delete an item.
    pub async fn delete_item(&self, id: i64) -> ApiResult<()> {
        let url = format!("{}/api/items/{}", self.base_url, id);
        debug!(url = %url, item_id = id, "Deleting item");

        let response = self.client.delete(&url).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Map a non-2xx response to an error carrying the body text.
    async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn sample_list_json() -> String {
        json!({
            "id": "0d9f3a7e",
            "name": "Weekly Shop",
            "share_code": "a1b2c3",
            "created_at": "2024-05-04T10:30:00Z"
        })
        .to_string()
    }

    fn sample_item_json(id: i64, name: &str, category: &str) -> serde_json::Value {
        json!({
            "id": id,
            "list_id": "0d9f3a7e",
            "name": name,
            "quantity": 1,
            "category": category,
            "bought": false,
            "created_at": "2024-05-04T10:31:00Z",
            "updated_at": null
        })
    }

    #[tokio::test]
    async fn create_list_trims_name_and_returns_share_code() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/list")
            .match_header("accept", "application/json")
            .match_body(Matcher::Json(json!({ "name": "Weekly Shop" })))
            .with_status(201)
            .with_body(sample_list_json())
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let list = client
            .create_list("  Weekly Shop  ")
            .await
            .expect("list should be created");

        mock.assert_async().await;
        assert_eq!(list.share_code, "a1b2c3");
        assert_eq!(list.name, "Weekly Shop");
    }

    #[tokio::test]
    async fn create_list_rejects_blank_name_without_a_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/list")
            .expect(0)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let err = client.create_list("   ").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn get_list_by_share_code_uses_share_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/list/a1b2c3")
            .with_status(200)
            .with_body(sample_list_json())
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let list = client
            .get_list_by_share_code("a1b2c3")
            .await
            .expect("shared list should resolve");

        mock.assert_async().await;
        assert_eq!(list.id, "0d9f3a7e");
    }

    #[tokio::test]
    async fn create_item_bumps_zero_quantity_to_one() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/items")
            .match_body(Matcher::Json(json!({
                "list_id": "0d9f3a7e",
                "name": "Milk",
                "quantity": 1
            })))
            .with_status(201)
            .with_body(sample_item_json(42, "Milk", "Dairy").to_string())
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let item = client
            .create_item(CreateItemRequest {
                list_id: "0d9f3a7e".to_string(),
                name: " Milk ".to_string(),
                quantity: 0,
            })
            .await
            .expect("item should be created");

        mock.assert_async().await;
        assert_eq!(item.id, 42);
        assert_eq!(item.category, "Dairy");
    }

    #[tokio::test]
    async fn create_item_rejects_blank_name_without_a_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/items")
            .expect(0)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let err = client
            .create_item(CreateItemRequest {
                list_id: "0d9f3a7e".to_string(),
                name: "   ".to_string(),
                quantity: 2,
            })
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn list_items_sends_list_id_query() {
        let mut server = Server::new_async().await;
        let body = json!([
            sample_item_json(1, "Milk", "Dairy"),
            sample_item_json(2, "Apples", "Fruits"),
        ]);
        let mock = server
            .mock("GET", "/api/items")
            .match_query(Matcher::UrlEncoded("list_id".into(), "0d9f3a7e".into()))
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let items = client
            .list_items("0d9f3a7e")
            .await
            .expect("items should be fetched");

        mock.assert_async().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Apples");
    }

    #[tokio::test]
    async fn update_item_sends_only_set_fields() {
        let mut server = Server::new_async().await;
        let mut bought = sample_item_json(42, "Milk", "Dairy");
        bought["bought"] = json!(true);
        let mock = server
            .mock("PUT", "/api/items/42")
            .match_body(Matcher::Json(json!({ "bought": true })))
            .with_status(200)
            .with_body(bought.to_string())
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let item = client
            .update_item(42, UpdateItemRequest::bought(true))
            .await
            .expect("item should be updated");

        mock.assert_async().await;
        assert!(item.bought);
    }

    #[tokio::test]
    async fn empty_update_short_circuits() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/items/42")
            .expect(0)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let err = client
            .update_item(42, UpdateItemRequest::default())
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn update_item_rejects_blank_name_without_a_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/items/42")
            .expect(0)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let update = UpdateItemRequest {
            name: Some("   ".to_string()),
            ..UpdateItemRequest::default()
        };
        let err = client.update_item(42, update).await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn delete_item_hits_item_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/items/42")
            .with_status(204)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        client.delete_item(42).await.expect("delete should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_carries_body_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/list/missing")
            .with_status(404)
            .with_body("list not found")
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let err = client.get_list_by_share_code("missing").await.unwrap_err();

        mock.assert_async().await;
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(message, "list not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}

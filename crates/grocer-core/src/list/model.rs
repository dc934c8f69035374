//! Shopping list and grocery item wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shopping list, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    /// Server-issued code for the shared view. Opaque and stable; never
    /// derived from the list id on this side.
    pub share_code: String,
    pub created_at: DateTime<Utc>,
}

/// A single grocery item belonging to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: i64,
    pub list_id: String,
    pub name: String,
    pub quantity: u32,
    /// Category name assigned by the server. Empty when the server sent
    /// none; grouping treats that as "Other".
    #[serde(default)]
    pub category: String,
    pub bought: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `POST /api/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

/// Body for `POST /api/items`. Carries no category: assignment is the
/// server's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub list_id: String,
    pub name: String,
    pub quantity: u32,
}

/// Partial body for `PUT /api/items/{id}`. Unset fields are left out of the
/// serialized JSON entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bought: Option<bool>,
}

impl UpdateItemRequest {
    /// Update that only sets the bought flag.
    pub fn bought(value: bool) -> Self {
        Self {
            bought: Some(value),
            ..Self::default()
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.bought.is_none()
    }
}

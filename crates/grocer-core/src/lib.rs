//! Grocer Core Library
//!
//! Domain models and display logic for the shared grocery list client.

pub mod category;
pub mod list;

pub use category::grouping::{group_by_category, CategoryBucket, GroupedItems};
pub use category::{color_for, icon_for, Category};
pub use list::model::{
    CreateItemRequest, CreateListRequest, GroceryItem, ShoppingList, UpdateItemRequest,
};
pub use list::{parse_quantity, ListStats};

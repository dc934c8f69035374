//! Grouping of flat item sequences into ordered display buckets.

use crate::list::model::GroceryItem;

use super::Category;

/// Category key used when an item carries no category.
const UNCATEGORIZED: &str = "Other";

/// One display bucket: a category name and its items, in input order.
#[derive(Debug, Clone)]
pub struct CategoryBucket {
    pub category: String,
    pub items: Vec<GroceryItem>,
}

/// Buckets in display order: recognized categories first, in preference
/// order, then unrecognized ones in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct GroupedItems {
    pub buckets: Vec<CategoryBucket>,
}

impl GroupedItems {
    /// Look up one bucket by category name.
    pub fn get(&self, category: &str) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Partition items into display buckets.
///
/// Items keep their relative order inside each bucket. An empty category
/// groups under "Other". Empty input produces no buckets at all, not an
/// empty "Other".
pub fn group_by_category(items: &[GroceryItem]) -> GroupedItems {
    // Collected in first-seen order, so the result never leans on a map
    // type's iteration order.
    let mut seen: Vec<CategoryBucket> = Vec::new();

    for item in items {
        let key = if item.category.is_empty() {
            UNCATEGORIZED
        } else {
            item.category.as_str()
        };

        match seen.iter_mut().find(|b| b.category == key) {
            Some(bucket) => bucket.items.push(item.clone()),
            None => seen.push(CategoryBucket {
                category: key.to_string(),
                items: vec![item.clone()],
            }),
        }
    }

    let mut buckets = Vec::with_capacity(seen.len());
    for category in Category::ALL {
        if let Some(pos) = seen.iter().position(|b| b.category == category.as_str()) {
            buckets.push(seen.remove(pos));
        }
    }
    // Whatever is left was not recognized; it trails in first-seen order.
    buckets.append(&mut seen);

    GroupedItems { buckets }
}

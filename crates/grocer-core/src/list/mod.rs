//! List-level helpers: quantity normalization and purchase stats.

pub mod model;

use model::GroceryItem;
use tracing::debug;

/// Parse a user-entered quantity, falling back to 1.
///
/// The leading run of digits wins: "2.5" reads as 2 and "12abc" as 12.
/// Input with no leading digit, zero, and values past `u32` all become 1.
/// Callers apply this before building a create or update request, so the
/// server never sees a quantity below 1.
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    match trimmed[..digits_end].parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            debug!(raw = %input, "quantity did not resolve to a positive integer, using 1");
            1
        }
    }
}

/// Purchase progress for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStats {
    pub total: usize,
    pub bought: usize,
}

impl ListStats {
    /// Compute stats over a set of items.
    pub fn for_items(items: &[GroceryItem]) -> Self {
        let bought = items.iter().filter(|item| item.bought).count();
        Self {
            total: items.len(),
            bought,
        }
    }

    /// Items still to buy.
    pub fn remaining(&self) -> usize {
        self.total - self.bought
    }
}

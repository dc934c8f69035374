//! Category registry: color and icon lookups with deterministic fallbacks.

pub mod grouping;
pub mod model;

pub use model::Category;

/// Icon identifier used when a category name is not recognized.
///
/// Distinct from the `Other` icon, so a category the registry has never
/// heard of still renders, and renders as unfamiliar.
pub const FALLBACK_ICON: &str = "shopping-basket";

/// Color token for a category name.
///
/// Unrecognized names, including the empty string, get the `Other` token.
pub fn color_for(name: &str) -> &'static str {
    Category::from_name(name)
        .unwrap_or(Category::Other)
        .color_token()
}

/// Icon identifier for a category name.
///
/// Unrecognized names get [`FALLBACK_ICON`], not the `Other` icon.
pub fn icon_for(name: &str) -> &'static str {
    match Category::from_name(name) {
        Some(category) => category.icon(),
        None => FALLBACK_ICON,
    }
}

//! Recognized grocery categories and their display metadata.

/// A recognized grocery category.
///
/// Declaration order is the display preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Dairy,
    Fruits,
    Vegetables,
    Protein,
    Grains,
    Snacks,
    Other,
}

impl Category {
    /// All recognized categories, in display preference order.
    pub const ALL: &'static [Category] = &[
        Category::Dairy,
        Category::Fruits,
        Category::Vegetables,
        Category::Protein,
        Category::Grains,
        Category::Snacks,
        Category::Other,
    ];

    /// Parse an exact category name.
    ///
    /// No trimming and no case folding: category values are opaque keys from
    /// the server, and a near-miss falls back like any other unrecognized
    /// name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Dairy" => Some(Self::Dairy),
            "Fruits" => Some(Self::Fruits),
            "Vegetables" => Some(Self::Vegetables),
            "Protein" => Some(Self::Protein),
            "Grains" => Some(Self::Grains),
            "Snacks" => Some(Self::Snacks),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Protein => "Protein",
            Self::Grains => "Grains",
            Self::Snacks => "Snacks",
            Self::Other => "Other",
        }
    }

    /// Color token for rendering this category's items.
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Dairy => "category-dairy",
            Self::Fruits => "category-fruits",
            Self::Vegetables => "category-vegetables",
            Self::Protein => "category-protein",
            Self::Grains => "category-grains",
            Self::Snacks => "category-snacks",
            Self::Other => "category-other",
        }
    }

    /// Icon identifier for this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dairy => "milk",
            Self::Fruits => "apple",
            Self::Vegetables => "carrot",
            Self::Protein => "beef",
            Self::Grains => "wheat",
            Self::Snacks => "cookie",
            Self::Other => "package",
        }
    }
}

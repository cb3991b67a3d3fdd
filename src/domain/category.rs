//! The closed set of spending categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Spending classification attached to every expense.
///
/// The declaration order is the enumeration order used for per-category
/// totals, chart rows and top-category tie-breaks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Entertainment,
    Transportation,
}

impl Category {
    /// Every category in enumeration order.
    pub const ALL: [Category; 3] = [
        Category::Food,
        Category::Entertainment,
        Category::Transportation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Transportation => "Transportation",
        }
    }

    /// Position of the category in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Food => 0,
            Category::Entertainment => 1,
            Category::Transportation => 2,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    /// Accepts labels case-insensitively, or any prefix matching exactly one label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(TrackerError::UnknownCategory(s.to_string()));
        }
        if let Some(exact) = Category::ALL
            .iter()
            .find(|category| category.label().eq_ignore_ascii_case(&needle))
        {
            return Ok(*exact);
        }
        let mut matches = Category::ALL
            .iter()
            .filter(|category| category.label().to_ascii_lowercase().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(category), None) => Ok(*category),
            _ => Err(TrackerError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_follows_declaration_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
        assert!(Category::Food < Category::Entertainment);
        assert!(Category::Entertainment < Category::Transportation);
    }

    #[test]
    fn parses_labels_and_prefixes() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(
            "ENTERTAINMENT".parse::<Category>().unwrap(),
            Category::Entertainment
        );
        assert_eq!(
            "transport".parse::<Category>().unwrap(),
            Category::Transportation
        );
        assert_eq!(" e ".parse::<Category>().unwrap(), Category::Entertainment);
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "rent".parse::<Category>().expect_err("rent is not a category");
        assert!(err.to_string().contains("rent"));
        assert!("".parse::<Category>().is_err());
    }
}

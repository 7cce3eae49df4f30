//! Disease category taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The eight disease categories recognized by the classifier cascade.
///
/// The order of [`Category::ALL`] is the canonical table order used when
/// scanning the compatibility matrix, so lookups are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Viral,
    Bacterial,
    Parasitic,
    Metabolic,
    Respiratory,
    Cardiovascular,
    Musculoskeletal,
    Gastrointestinal,
}

impl Category {
    /// Canonical ordering for deterministic iteration.
    pub const ALL: [Category; 8] = [
        Category::Viral,
        Category::Bacterial,
        Category::Parasitic,
        Category::Metabolic,
        Category::Respiratory,
        Category::Cardiovascular,
        Category::Musculoskeletal,
        Category::Gastrointestinal,
    ];

    /// Display name used across tables and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Viral => "Viral",
            Category::Bacterial => "Bacterial",
            Category::Parasitic => "Parasitic",
            Category::Metabolic => "Metabolic",
            Category::Respiratory => "Respiratory",
            Category::Cardiovascular => "Cardiovascular",
            Category::Musculoskeletal => "Musculoskeletal",
            Category::Gastrointestinal => "Gastrointestinal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for category names that are not part of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown disease category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Viral" => Ok(Category::Viral),
            "Bacterial" => Ok(Category::Bacterial),
            "Parasitic" => Ok(Category::Parasitic),
            "Metabolic" => Ok(Category::Metabolic),
            "Respiratory" => Ok(Category::Respiratory),
            "Cardiovascular" => Ok(Category::Cardiovascular),
            "Musculoskeletal" => Ok(Category::Musculoskeletal),
            "Gastrointestinal" => Ok(Category::Gastrointestinal),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

//! Query value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidModeError;

/// How the user's query should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Query is an ingredient list; suggest recipe names first
    #[default]
    Ingredients,
    /// Query is a recipe name; fetch the recipe directly
    RecipeName,
}

impl InputMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredients => "ingredients",
            Self::RecipeName => "recipe",
        }
    }
}

impl FromStr for InputMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" => Ok(Self::Ingredients),
            "recipe" | "recipe-name" | "name" => Ok(Self::RecipeName),
            _ => Err(InvalidModeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The resolved text driving a recipe lookup.
///
/// Always stored trimmed. An empty query means "no data yet"; downstream
/// stages must treat it as "await further input", never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    text: String,
}

impl Query {
    /// Create a query from raw text, trimming surrounding whitespace
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
        }
    }

    /// An empty query ("no data")
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

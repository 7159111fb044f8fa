use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A JSON scalar kept exactly as the server sent it. Ids and ratings may come back as either a
/// number or a string, and nothing in the menu ever does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ramen {
    pub id: Scalar,
    pub name: String,
    pub restaurant: String,
    /// url to image
    pub image: String,
    pub rating: Scalar,
    #[serde(default)]
    pub comment: String,
}

/// Raw create form input, posted verbatim. No field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct NewRamen {
    pub name: String,
    pub restaurant: String,
    pub image: String,
    pub rating: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RamenPatch {
    pub rating: String,
    pub comment: String,
}

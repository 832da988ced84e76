//! Structured recipe returned by generation

use serde::{Deserialize, Deserializer, Serialize};

/// Physical preparation action, the only backend-constrained vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrepAction {
    Chop,
    Slice,
    Peel,
    Mix,
    Boil,
    Fry,
    Wash,
    Other,
}

impl PrepAction {
    pub const ALL: [PrepAction; 8] = [
        PrepAction::Chop,
        PrepAction::Slice,
        PrepAction::Peel,
        PrepAction::Mix,
        PrepAction::Boil,
        PrepAction::Fry,
        PrepAction::Wash,
        PrepAction::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrepAction::Chop => "CHOP",
            PrepAction::Slice => "SLICE",
            PrepAction::Peel => "PEEL",
            PrepAction::Mix => "MIX",
            PrepAction::Boil => "BOIL",
            PrepAction::Fry => "FRY",
            PrepAction::Wash => "WASH",
            PrepAction::Other => "OTHER",
        }
    }

    /// Parse an action name, mapping anything unrecognized to `Other`
    pub fn parse_lossy(value: &str) -> Self {
        let upper = value.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == upper)
            .unwrap_or(PrepAction::Other)
    }
}

impl std::fmt::Display for PrepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown or non-string values become `Other` instead of failing the recipe.
impl<'de> Deserialize<'de> for PrepAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .map(PrepAction::parse_lossy)
            .unwrap_or(PrepAction::Other))
    }
}

/// How to prepare one ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepTechnique {
    #[serde(default)]
    pub ingredient: String,
    #[serde(default = "default_action")]
    pub action: PrepAction,
    #[serde(default)]
    pub tip: String,
}

fn default_action() -> PrepAction {
    PrepAction::Other
}

/// A generated recipe
///
/// `steps` are sequential: step *i* assumes step *i-1* is done.
/// Empty sequences are tolerated rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub prep_techniques: Vec<PrepTechnique>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
}

impl Recipe {
    /// Whether the recipe has both ingredients and steps
    pub fn is_well_formed(&self) -> bool {
        !self.ingredients.is_empty() && !self.steps.is_empty()
    }
}

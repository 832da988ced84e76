//! Structured recipe output schema

use serde_json::{json, Value};

use crate::types::PrepAction;

/// Schema name sent along with structured-output requests
pub const RECIPE_SCHEMA_NAME: &str = "recipe";

/// JSON schema of the recipe object every backend must return
pub fn recipe_schema() -> Value {
    let actions: Vec<&str> = PrepAction::ALL.iter().map(PrepAction::as_str).collect();

    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "description": "The name of the dish." },
            "description": { "type": "string", "description": "A short, appetizing description." },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of ingredients with quantities."
            },
            "steps": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Step by step cooking instructions."
            },
            "calories": { "type": "string", "description": "Approximate calories per serving." },
            "cookingTime": { "type": "string", "description": "Total cooking time." },
            "prepTechniques": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "action": {
                            "type": "string",
                            "enum": actions,
                            "description": "The type of physical action required."
                        },
                        "tip": {
                            "type": "string",
                            "description": "A specific pro-tip for how to do this action for this ingredient (e.g. 'Use a rolling chop motion')."
                        }
                    },
                    "required": ["ingredient", "action", "tip"]
                },
                "description": "Detailed preparation techniques for key ingredients."
            }
        },
        "required": ["title", "description", "ingredients", "steps", "prepTechniques"]
    })
}

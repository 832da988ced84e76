//! Prompt construction for vision and recipe generation

use crate::types::{resolve_names, Language, UserProfile, AVAILABLE_EQUIPMENT, DIETARY_GOALS};

/// System prompt every generation starts with
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful expert chef assistant. You always respond with valid JSON.";

/// JSON shape repeated in the prompt for backends without schema mode
const RECIPE_JSON_SHAPE: &str = r#"{
  "title": "string",
  "description": "string",
  "ingredients": ["string"],
  "steps": ["string"],
  "calories": "string",
  "cookingTime": "string",
  "prepTechniques": [
     { "ingredient": "string", "action": "CHOP|SLICE|PEEL|MIX|BOIL|FRY|WASH|OTHER", "tip": "string" }
  ]
}"#;

/// Instruction sent with a photo of ingredients
pub fn vision_prompt(language: Language) -> String {
    let language_clause = match language {
        Language::Zh => "Please list the ingredients in Simplified Chinese.",
        Language::En => "Return a comma-separated list in English.",
    };
    format!(
        "Identify the food ingredients in this image. Return a comma-separated list of the main \
         ingredients visible. Ignore common pantry staples like salt or oil unless clearly visible. {}",
        language_clause
    )
}

/// Language directive for the generated recipe
pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Zh => {
            "IMPORTANT: Generate the recipe title, description, ingredients, steps, and tips \
             entirely in Simplified Chinese (zh-CN)."
        }
        Language::En => "Generate the recipe in English.",
    }
}

/// Equipment constraint, `None` when the profile lists no equipment
pub fn equipment_clause(profile: &UserProfile, language: Language) -> Option<String> {
    let names = resolve_names(&profile.equipment, AVAILABLE_EQUIPMENT, language);
    (!names.is_empty()).then(|| {
        format!(
            "User only has the following equipment available: {}. Ensure the recipe can be cooked with these.",
            names.join(", ")
        )
    })
}

/// Dietary-goal clause, `None` when the profile lists no goals
pub fn dietary_clause(profile: &UserProfile, language: Language) -> Option<String> {
    let names = resolve_names(&profile.dietary_goals, DIETARY_GOALS, language);
    (!names.is_empty()).then(|| {
        format!(
            "User has the following dietary goals/habits: {}. Adjust the recipe to fit these goals.",
            names.join(", ")
        )
    })
}

/// Full generation prompt
pub fn recipe_prompt(ingredients: &[String], language: Language, profile: &UserProfile) -> String {
    let mut lines = vec![
        format!(
            "Create a delicious recipe using some or all of these ingredients: {}.",
            ingredients.join(", ")
        ),
        "You can assume the user has basic pantry staples (salt, pepper, oil, water).".to_string(),
    ];
    lines.extend(equipment_clause(profile, language));
    lines.extend(dietary_clause(profile, language));
    lines.push(
        "Focus on clear instructions and specifically highlight preparation techniques for the main ingredients."
            .to_string(),
    );
    lines.push(language_instruction(language).to_string());
    lines.push(String::new());
    lines.push("Return ONLY valid JSON matching this schema:".to_string());
    lines.push(RECIPE_JSON_SHAPE.to_string());
    lines.join("\n")
}

/// Default system prompt followed by a non-blank user override
///
/// The override is appended exactly as the user wrote it.
pub fn effective_system_prompt(override_prompt: Option<&str>) -> String {
    match override_prompt.filter(|p| !p.trim().is_empty()) {
        Some(extra) => format!("{} {}", DEFAULT_SYSTEM_PROMPT, extra),
        None => DEFAULT_SYSTEM_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients() -> Vec<String> {
        vec!["egg".to_string(), "rice".to_string()]
    }

    #[test]
    fn test_vision_prompt_language() {
        assert!(vision_prompt(Language::En).ends_with("Return a comma-separated list in English."));
        assert!(vision_prompt(Language::Zh).ends_with("in Simplified Chinese."));
        assert!(vision_prompt(Language::En).starts_with("Identify the food ingredients"));
    }

    #[test]
    fn test_recipe_prompt_without_profile() {
        let prompt = recipe_prompt(&ingredients(), Language::En, &UserProfile::default());
        assert!(prompt.contains("these ingredients: egg, rice."));
        assert!(!prompt.contains("equipment"));
        assert!(!prompt.contains("dietary"));
        assert!(prompt.contains("Generate the recipe in English."));
        assert!(prompt.contains("\"prepTechniques\""));
    }

    #[test]
    fn test_recipe_prompt_with_profile() {
        let profile = UserProfile::new()
            .with_equipment(["oven", "wok"])
            .with_dietary_goals(["highprotein"]);
        let prompt = recipe_prompt(&ingredients(), Language::En, &profile);
        assert!(prompt.contains("equipment available: Oven, wok."));
        assert!(prompt.contains("dietary goals/habits: High Protein."));
    }

    #[test]
    fn test_recipe_prompt_chinese() {
        let profile = UserProfile::new().with_equipment(["ricecooker"]);
        let prompt = recipe_prompt(&ingredients(), Language::Zh, &profile);
        assert!(prompt.contains("电饭煲"));
        assert!(prompt.contains("Simplified Chinese (zh-CN)"));
    }

    #[test]
    fn test_effective_system_prompt() {
        assert_eq!(effective_system_prompt(None), DEFAULT_SYSTEM_PROMPT);
        assert_eq!(effective_system_prompt(Some("   ")), DEFAULT_SYSTEM_PROMPT);
        assert_eq!(
            effective_system_prompt(Some("Keep it vegan.")),
            format!("{} Keep it vegan.", DEFAULT_SYSTEM_PROMPT)
        );
    }

    #[test]
    fn test_system_prompt_override_kept_verbatim() {
        assert_eq!(
            effective_system_prompt(Some("  Keep it vegan.\n")),
            format!("{}   Keep it vegan.\n", DEFAULT_SYSTEM_PROMPT)
        );
    }
}

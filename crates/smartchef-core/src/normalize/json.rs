//! Fence stripping and JSON parsing of backend text

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::providers::{ProviderError, ProviderResult};
use crate::types::Recipe;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Remove Markdown code-fence markers and surrounding whitespace
///
/// Every ```` ```json ```` and ```` ``` ```` marker is removed, not just
/// the outer pair.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(JSON_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// Strip fences and parse into any deserializable type
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> ProviderResult<T> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| ProviderError::malformed(raw, e.to_string()))
}

/// Strip fences and parse into a JSON value
pub fn normalize_json(raw: &str) -> ProviderResult<Value> {
    parse_json(raw)
}

/// Strip fences and parse into a `Recipe`
///
/// Unknown prep actions become `Other`; a non-object top level is fatal.
pub fn parse_recipe(raw: &str) -> ProviderResult<Recipe> {
    parse_json(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrepAction;
    use serde_json::json;

    #[test]
    fn test_strip_fenced_json() {
        let raw = "```json\n{\"title\":\"X\"}\n```";
        assert_eq!(strip_code_fences(raw), "{\"title\":\"X\"}");
        assert_eq!(normalize_json(raw).unwrap(), json!({"title": "X"}));
    }

    #[test]
    fn test_bare_json_untouched() {
        let raw = "{\"title\":\"X\",\"steps\":[]}";
        assert_eq!(strip_code_fences(raw), raw);
        assert_eq!(normalize_json(raw).unwrap(), json!({"title": "X", "steps": []}));
    }

    #[test]
    fn test_bare_fence_without_language() {
        let raw = "  ```\n[1, 2]\n```  ";
        assert_eq!(normalize_json(raw).unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_prose_is_malformed() {
        let raw = "Sure! Here is your recipe: {\"title\": \"X\"}";
        let err = normalize_json(raw).unwrap_err();
        match err {
            ProviderError::MalformedResponse { raw: kept, .. } => assert_eq!(kept, raw),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_recipe_coerces_unknown_action() {
        let raw = r#"```json
{"title":"Omelette","description":"Fluffy","ingredients":["egg"],"steps":["Whisk","Cook"],
 "prepTechniques":[{"ingredient":"egg","action":"WHISK","tip":"Use a fork"}]}
```"#;
        let recipe = parse_recipe(raw).unwrap();
        assert_eq!(recipe.title, "Omelette");
        assert_eq!(recipe.prep_techniques[0].action, PrepAction::Other);
    }

    #[test]
    fn test_parse_recipe_rejects_non_object() {
        assert!(matches!(
            parse_recipe("\"just a string\""),
            Err(ProviderError::MalformedResponse { .. })
        ));
        assert!(parse_recipe("").is_err());
    }
}

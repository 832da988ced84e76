//! Ingredient list helpers

/// Split backend text on ASCII or full-width commas, trimming and
/// dropping empty tokens. Order is preserved; duplicates are kept.
pub fn split_ingredient_list(text: &str) -> Vec<String> {
    text.split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append `detected` to `existing`, skipping names already present
pub fn merge_ingredients(existing: &[String], detected: &[String]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for name in detected {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}

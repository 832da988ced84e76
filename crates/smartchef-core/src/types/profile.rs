//! User profile and the fixed equipment / dietary-goal catalogs

use serde::{Deserialize, Serialize};

use super::api::Language;

/// Kitchen equipment and dietary goals chosen by the user
///
/// Ids are not validated against the catalogs; unknown ids are passed
/// through to the prompt verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub dietary_goals: Vec<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_equipment(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.equipment = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dietary_goals(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dietary_goals = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty() && self.dietary_goals.is_empty()
    }
}

/// A catalog item with English and Simplified Chinese display names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub en: &'static str,
    pub zh: &'static str,
}

impl CatalogEntry {
    const fn new(id: &'static str, en: &'static str, zh: &'static str) -> Self {
        Self { id, en, zh }
    }

    /// Display name in the given language
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Zh => self.zh,
        }
    }
}

pub const AVAILABLE_EQUIPMENT: &[CatalogEntry] = &[
    CatalogEntry::new("stove", "Stove", "燃气灶/电磁炉"),
    CatalogEntry::new("oven", "Oven", "烤箱"),
    CatalogEntry::new("microwave", "Microwave", "微波炉"),
    CatalogEntry::new("airfryer", "Air Fryer", "空气炸锅"),
    CatalogEntry::new("blender", "Blender", "搅拌机"),
    CatalogEntry::new("ricecooker", "Rice Cooker", "电饭煲"),
];

pub const DIETARY_GOALS: &[CatalogEntry] = &[
    CatalogEntry::new("balanced", "Balanced", "均衡饮食"),
    CatalogEntry::new("lowcarb", "Low Carb", "低碳水"),
    CatalogEntry::new("highprotein", "High Protein", "高蛋白"),
    CatalogEntry::new("vegetarian", "Vegetarian", "素食"),
    CatalogEntry::new("quick", "Quick & Easy", "快速简单"),
    CatalogEntry::new("lowfat", "Low Fat", "低脂"),
];

/// Quick-pick ingredient offered by the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientOption {
    pub entry: CatalogEntry,
    pub emoji: &'static str,
}

impl IngredientOption {
    const fn new(id: &'static str, en: &'static str, zh: &'static str, emoji: &'static str) -> Self {
        Self {
            entry: CatalogEntry::new(id, en, zh),
            emoji,
        }
    }

    pub fn name(&self, language: Language) -> &'static str {
        self.entry.name(language)
    }
}

pub const COMMON_INGREDIENTS: &[IngredientOption] = &[
    IngredientOption::new("egg", "Eggs", "鸡蛋", "🥚"),
    IngredientOption::new("chicken", "Chicken", "鸡肉", "🍗"),
    IngredientOption::new("rice", "Rice", "米饭", "🍚"),
    IngredientOption::new("tomato", "Tomato", "番茄", "🍅"),
    IngredientOption::new("potato", "Potato", "土豆", "🥔"),
    IngredientOption::new("onion", "Onion", "洋葱", "🧅"),
    IngredientOption::new("garlic", "Garlic", "大蒜", "🧄"),
    IngredientOption::new("beef", "Beef", "牛肉", "🥩"),
    IngredientOption::new("pasta", "Pasta", "意面", "🍝"),
    IngredientOption::new("carrot", "Carrot", "胡萝卜", "🥕"),
];

/// Look up a catalog entry by id
pub fn find_entry<'a>(catalog: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    catalog.iter().find(|entry| entry.id == id)
}

/// Map ids to display names, keeping the raw id when it is not in the catalog
pub fn resolve_names(ids: &[String], catalog: &[CatalogEntry], language: Language) -> Vec<String> {
    ids.iter()
        .map(|id| match find_entry(catalog, id) {
            Some(entry) => entry.name(language).to_string(),
            None => id.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_names_known_ids() {
        let ids = vec!["oven".to_string(), "airfryer".to_string()];
        assert_eq!(
            resolve_names(&ids, AVAILABLE_EQUIPMENT, Language::En),
            vec!["Oven", "Air Fryer"]
        );
        assert_eq!(
            resolve_names(&ids, AVAILABLE_EQUIPMENT, Language::Zh),
            vec!["烤箱", "空气炸锅"]
        );
    }

    #[test]
    fn test_resolve_names_unknown_id_passes_through() {
        let ids = vec!["lowcarb".to_string(), "keto".to_string()];
        assert_eq!(
            resolve_names(&ids, DIETARY_GOALS, Language::En),
            vec!["Low Carb", "keto"]
        );
    }

    #[test]
    fn test_profile_serialization() {
        let profile = UserProfile::new()
            .with_equipment(["stove"])
            .with_dietary_goals(["quick"]);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"equipment":["stove"],"dietaryGoals":["quick"]}"#);

        let empty: UserProfile = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_common_ingredients() {
        assert_eq!(COMMON_INGREDIENTS.len(), 10);
        assert_eq!(COMMON_INGREDIENTS[0].name(Language::En), "Eggs");
        assert_eq!(COMMON_INGREDIENTS[0].name(Language::Zh), "鸡蛋");
    }
}

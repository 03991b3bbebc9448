use serde::Deserialize;

/// A single catalog entry
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Form payload submitted by the create and edit pages
///
/// Fields are optional so a submission missing either one still
/// deserializes; what happens to an absent field differs per route
/// (create rejects it, edit treats it as an empty string).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    pub item_name: Option<String>,
    pub item_description: Option<String>,
}

impl ItemForm {
    /// Both fields present and non-empty, as required by create
    pub fn filled(&self) -> Option<(&str, &str)> {
        match (self.item_name.as_deref(), self.item_description.as_deref()) {
            (Some(name), Some(description)) if !name.is_empty() && !description.is_empty() => {
                Some((name, description))
            }
            _ => None,
        }
    }

    /// Field values with absent fields collapsed to empty strings (edit semantics)
    pub fn into_values(self) -> (String, String) {
        (
            self.item_name.unwrap_or_default(),
            self.item_description.unwrap_or_default(),
        )
    }
}

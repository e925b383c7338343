use serde::{Deserialize, Serialize};

/// Canonical (Persian, English) name pair from the allow-list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllowListEntry {
    #[serde(default)]
    pub persian_name: String,

    #[serde(default)]
    pub english_name: String,
}

impl AllowListEntry {
    /// Build an entry from trimmed names; `None` when both are empty
    pub fn new(persian_name: impl AsRef<str>, english_name: impl AsRef<str>) -> Option<Self> {
        let persian_name = persian_name.as_ref().trim();
        let english_name = english_name.as_ref().trim();

        if persian_name.is_empty() && english_name.is_empty() {
            return None;
        }

        Some(Self {
            persian_name: persian_name.to_string(),
            english_name: english_name.to_string(),
        })
    }

    /// Non-empty names, English first, lower-cased for matching
    pub(crate) fn match_keys(&self) -> impl Iterator<Item = String> + '_ {
        [self.english_name.as_str(), self.persian_name.as_str()]
            .into_iter()
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_trims_names() {
        let entry = AllowListEntry::new("  کاتان ", " Catan").unwrap();
        assert_eq!(entry.persian_name, "کاتان");
        assert_eq!(entry.english_name, "Catan");
    }

    #[test]
    fn test_entry_requires_a_name() {
        assert!(AllowListEntry::new("", "   ").is_none());
        assert!(AllowListEntry::new("", "Azul").is_some());
        assert!(AllowListEntry::new("آزول", "").is_some());
    }

    #[test]
    fn test_match_keys_skip_empty() {
        let entry = AllowListEntry::new("", "Azul").unwrap();
        assert_eq!(entry.match_keys().collect::<Vec<_>>(), vec!["azul"]);
    }
}

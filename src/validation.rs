//! Allow-list name matching
//!
//! Lookup runs two passes over the entries in file order: exact
//! (case-insensitive) equality first, then substring containment in either
//! direction. The first hit wins. Several entries can satisfy the containment
//! pass when canonical names share a substring ("Catan" vs "Catan: Seafarers");
//! list order decides and the result may not be the intended game.
//!
//! Blank or whitespace-only input is always reported as not found, and empty
//! name fields never take part in either pass. A bare substring check would
//! instead match the empty string against the first entry.

use crate::core::{AllowListEntry, ValidationResponse};

/// Canonical name table loaded from the allow-list file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<AllowListEntry>,
}

impl AllowList {
    pub fn new(entries: Vec<AllowListEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AllowListEntry] {
        &self.entries
    }

    /// First entry matching `name`, exact matches before partial ones
    pub fn find(&self, name: &str) -> Option<&AllowListEntry> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| entry.match_keys().any(|key| key == needle))
            .or_else(|| {
                self.entries.iter().find(|entry| {
                    entry
                        .match_keys()
                        .any(|key| key.contains(&needle) || needle.contains(&key))
                })
            })
    }

    pub fn validate(&self, name: &str) -> ValidationResponse {
        let found = self.find(name);
        match found {
            Some(entry) => tracing::debug!(
                "Allow-list match for \"{}\": {} / {}",
                name,
                entry.english_name,
                entry.persian_name
            ),
            None => tracing::debug!("No allow-list match for \"{}\"", name),
        }
        ValidationResponse::from(found)
    }
}

impl From<Vec<AllowListEntry>> for AllowList {
    fn from(entries: Vec<AllowListEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(persian: &str, english: &str) -> AllowListEntry {
        AllowListEntry::new(persian, english).unwrap()
    }

    fn allow_list() -> AllowList {
        AllowList::new(vec![
            entry("کاتان: دریانوردان", "Catan: Seafarers"),
            entry("کاتان", "Catan"),
            entry("پندمیک", "Pandemic"),
            entry("آزول", ""),
        ])
    }

    #[test]
    fn test_exact_english_match() {
        let response = allow_list().validate("Catan");
        assert!(response.exists);
        assert_eq!(response.english_name.as_deref(), Some("Catan"));
        assert_eq!(response.persian_name.as_deref(), Some("کاتان"));
    }

    #[test]
    fn test_exact_match_beats_earlier_partial() {
        // "Catan: Seafarers" contains "catan" and comes first, exact pass still wins
        let list = allow_list();
        let found = list.find("  CATAN ").unwrap();
        assert_eq!(found.english_name, "Catan");
    }

    #[test]
    fn test_exact_persian_match() {
        let list = allow_list();
        let found = list.find("پندمیک").unwrap();
        assert_eq!(found.english_name, "Pandemic");
    }

    #[test]
    fn test_partial_match_entry_contains_input() {
        let list = allow_list();
        let found = list.find("pandem").unwrap();
        assert_eq!(found.english_name, "Pandemic");
    }

    #[test]
    fn test_partial_match_input_contains_entry() {
        let list = allow_list();
        let found = list.find("Pandemic Legacy Season 1").unwrap();
        assert_eq!(found.english_name, "Pandemic");
    }

    #[test]
    fn test_partial_ambiguity_takes_first_in_list() {
        let list = allow_list();
        let found = list.find("cata").unwrap();
        assert_eq!(found.english_name, "Catan: Seafarers");
    }

    #[test]
    fn test_empty_fields_never_match() {
        assert!(allow_list().find("Wingspan").is_none());
        assert!(allow_list().find("   ").is_none());
        assert!(allow_list().find("").is_none());
    }

    #[test]
    fn test_not_found() {
        let response = allow_list().validate("Nonexistent Game");
        assert_eq!(response, ValidationResponse::not_found());
    }
}

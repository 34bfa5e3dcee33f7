use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// One selectable scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeEntry {
    pub code: String,
    /// Unique display label; the scheme name unless it collides
    pub label: String,
}

/// Immutable two-way lookup between scheme codes and display labels.
///
/// Built once at startup from the provider's `code -> name` map and shared
/// behind an `Arc`. Labels are the scheme names; when several codes share a
/// name, the first code (in code order) keeps the bare name and each later
/// one is labelled `"{name} ({code})"` (or `"{name} ({code} #n)"` if that
/// label is itself taken), so every label resolves to exactly one code.
#[derive(Clone, Debug, Default)]
pub struct SchemeDirectory {
    entries: Vec<SchemeEntry>,
    by_code: HashMap<String, usize>,
    by_label: HashMap<String, usize>,
}

impl SchemeDirectory {
    pub fn from_codes(codes: BTreeMap<String, String>) -> Self {
        let mut directory = Self::default();
        for (code, name) in codes {
            let name = name.trim().to_string();
            let mut label = name.clone();
            let mut suffix = 1;
            while directory.by_label.contains_key(&label) {
                // A real scheme may already carry the "(code)" form
                label = if suffix == 1 {
                    format!("{} ({})", name, code)
                } else {
                    format!("{} ({} #{})", name, code, suffix)
                };
                suffix += 1;
            }

            let index = directory.entries.len();
            directory.by_code.insert(code.clone(), index);
            directory.by_label.insert(label.clone(), index);
            directory.entries.push(SchemeEntry { code, label });
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SchemeEntry] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn code_for(&self, label: &str) -> Option<&str> {
        self.by_label
            .get(label)
            .map(|&i| self.entries[i].code.as_str())
    }

    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(code)
            .map(|&i| self.entries[i].label.as_str())
    }

    /// Resolve a widget value that may be either a label or a raw code.
    pub fn resolve(&self, label_or_code: &str) -> Option<&SchemeEntry> {
        let key = label_or_code.trim();
        self.by_label
            .get(key)
            .or_else(|| self.by_code.get(key))
            .map(|&i| &self.entries[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(c, n)| (c.to_string(), n.to_string()))
            .collect()
    }

    #[test]
    fn test_round_trip_code_label_code() {
        let directory = SchemeDirectory::from_codes(codes(&[
            ("119598", "SBI Bluechip Fund - Direct Plan - Growth"),
            ("103504", "SBI Bluechip Fund - Regular Plan - Growth"),
            ("119018", "HDFC Top 100 Fund - Direct Plan - Growth"),
        ]));

        assert_eq!(directory.len(), 3);
        for entry in directory.entries() {
            assert_eq!(directory.code_for(&entry.label), Some(entry.code.as_str()));
            assert_eq!(directory.label_for(&entry.code), Some(entry.label.as_str()));
        }
    }

    #[test]
    fn test_duplicate_names_get_distinct_labels() {
        let directory = SchemeDirectory::from_codes(codes(&[
            ("100001", "Liquid Fund"),
            ("100002", "Liquid Fund"),
        ]));

        assert_eq!(directory.label_for("100001"), Some("Liquid Fund"));
        assert_eq!(directory.label_for("100002"), Some("Liquid Fund (100002)"));
        assert_eq!(directory.code_for("Liquid Fund"), Some("100001"));
        assert_eq!(directory.code_for("Liquid Fund (100002)"), Some("100002"));
    }

    #[test]
    fn test_generated_label_never_shadows_a_real_name() {
        let directory = SchemeDirectory::from_codes(codes(&[
            ("100001", "X"),
            ("100002", "X (100003)"),
            ("100003", "X"),
        ]));

        assert_eq!(directory.label_for("100002"), Some("X (100003)"));
        assert_eq!(directory.label_for("100003"), Some("X (100003 #2)"));
        for code in ["100001", "100002", "100003"] {
            let label = directory.label_for(code).unwrap();
            assert_eq!(directory.code_for(label), Some(code));
        }
    }

    #[test]
    fn test_resolve_accepts_label_or_code() {
        let directory = SchemeDirectory::from_codes(codes(&[("119598", "SBI Bluechip Fund")]));

        assert_eq!(directory.resolve("SBI Bluechip Fund").map(|e| e.code.as_str()), Some("119598"));
        assert_eq!(directory.resolve(" 119598 ").map(|e| e.label.as_str()), Some("SBI Bluechip Fund"));
        assert!(directory.resolve("Unknown Fund").is_none());
    }

    #[test]
    fn test_empty_directory() {
        let directory = SchemeDirectory::default();
        assert!(directory.is_empty());
        assert_eq!(directory.labels().count(), 0);
    }
}

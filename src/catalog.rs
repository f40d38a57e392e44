//! The language catalog.
//!
//! A fixed set of [`LanguageGroup`]s built once on first access and shared
//! read-only for the lifetime of the process.

use serde::Serialize;
use std::sync::OnceLock;

/// One programming language's display data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRecord {
    /// Stable key, unique across all records (the image key)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Key into the bundled asset store
    pub image: &'static str,
    /// Short description, mirrors the owning group's title
    pub description: &'static str,
}

impl LanguageRecord {
    const fn new(name: &'static str, image: &'static str, description: &'static str) -> Self {
        Self {
            id: image,
            name,
            image,
            description,
        }
    }
}

/// A named, ordered collection of languages shown as one list section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageGroup {
    /// Stable key, unique across all groups
    pub id: &'static str,
    /// Section title
    pub title: &'static str,
    /// Languages in display order
    pub languages: Vec<LanguageRecord>,
}

impl LanguageGroup {
    fn new(id: &'static str, title: &'static str, languages: Vec<LanguageRecord>) -> Self {
        Self {
            id,
            title,
            languages,
        }
    }
}

/// The fixed, process-wide set of language groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: Vec<LanguageGroup>,
}

const COMPILED: &str = "Compiled";
const INTERPRETED: &str = "Interpreted";

impl Catalog {
    /// Build the standard two-group catalog
    pub fn standard() -> Self {
        let compiled = LanguageGroup::new(
            "compiled",
            COMPILED,
            vec![
                LanguageRecord::new("Rust", "rust", COMPILED),
                LanguageRecord::new("Kotlin", "kotlin", COMPILED),
                LanguageRecord::new("Swift", "swift", COMPILED),
            ],
        );
        let interpreted = LanguageGroup::new(
            "interpreted",
            INTERPRETED,
            vec![
                LanguageRecord::new("JavaScript", "javascript", INTERPRETED),
                LanguageRecord::new("Python", "python", INTERPRETED),
                LanguageRecord::new("Ruby", "ruby", INTERPRETED),
            ],
        );

        Self {
            groups: vec![compiled, interpreted],
        }
    }

    /// Groups in display order
    pub fn groups(&self) -> &[LanguageGroup] {
        &self.groups
    }

    /// All records in display order, group by group
    pub fn records(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.groups.iter().flat_map(|g| g.languages.iter())
    }

    /// Look up a record by its id
    pub fn record(&self, id: &str) -> Option<&LanguageRecord> {
        self.records().find(|r| r.id == id)
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.languages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The process-wide catalog
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(group: &LanguageGroup) -> Vec<&str> {
        group.languages.iter().map(|l| l.name).collect()
    }

    #[test]
    fn test_two_groups_in_order() {
        let groups = catalog().groups();
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].title, "Compiled");
        assert_eq!(names(&groups[0]), vec!["Rust", "Kotlin", "Swift"]);

        assert_eq!(groups[1].title, "Interpreted");
        assert_eq!(names(&groups[1]), vec!["JavaScript", "Python", "Ruby"]);
    }

    #[test]
    fn test_groups_are_non_empty() {
        for group in catalog().groups() {
            assert!(!group.languages.is_empty(), "{} is empty", group.title);
        }
    }

    #[test]
    fn test_description_mirrors_group_title() {
        for group in catalog().groups() {
            for language in &group.languages {
                assert_eq!(language.description, group.title);
            }
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let record_ids: HashSet<_> = catalog().records().map(|r| r.id).collect();
        assert_eq!(record_ids.len(), catalog().len());

        let group_ids: HashSet<_> = catalog().groups().iter().map(|g| g.id).collect();
        assert_eq!(group_ids.len(), catalog().groups().len());
    }

    #[test]
    fn test_accessor_is_idempotent() {
        let first = catalog().groups().to_vec();
        let second = catalog().groups().to_vec();
        assert_eq!(first, second);
        assert_eq!(Catalog::standard(), *catalog());
    }

    #[test]
    fn test_record_lookup() {
        let swift = catalog().record("swift").unwrap();
        assert_eq!(swift.name, "Swift");
        assert_eq!(swift.image, "swift");
        assert_eq!(swift.description, "Compiled");

        assert!(catalog().record("cobol").is_none());
        assert!(catalog().record("Swift").is_none());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(catalog()).unwrap();
        assert_eq!(json[0]["title"], "Compiled");
        assert_eq!(json[1]["languages"][0]["name"], "JavaScript");
        assert_eq!(json[1]["languages"][0]["image"], "javascript");
    }
}

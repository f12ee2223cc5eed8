mod entry;

pub use entry::{ExtractedMetadata, SourceFile, UNKNOWN_TYPE};

use log::warn;
use std::collections::{BTreeMap, HashMap};

/// Files of one run, grouped by category.
///
/// Built fresh by the classifier and handed to the renderer; nothing about a
/// grouping outlives the run that produced it. Iteration is always ordered by
/// category, then by relative path.
#[derive(Debug, Clone, Default)]
pub struct ScriptCatalog {
    groups: BTreeMap<String, Vec<SourceFile>>,
}

impl ScriptCatalog {
    pub fn new() -> Self {
        ScriptCatalog {
            groups: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, category: impl Into<String>, file: SourceFile) {
        self.groups.entry(category.into()).or_default().push(file);
    }

    /// Categories with their files sorted by relative path.
    pub fn groups(&self) -> impl Iterator<Item = (&str, Vec<&SourceFile>)> {
        self.groups.iter().map(|(category, files)| {
            let mut sorted: Vec<&SourceFile> = files.iter().collect();
            sorted.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
            (category.as_str(), sorted)
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|k| k.as_str())
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    pub fn file_count(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }

    /// Categories that would land on the same document on a case-insensitive
    /// filesystem. These are reported, not merged or renamed.
    pub fn colliding_categories(&self) -> Vec<Vec<&str>> {
        let mut by_folded: HashMap<String, Vec<&str>> = HashMap::new();
        for category in self.groups.keys() {
            by_folded
                .entry(category.to_lowercase())
                .or_default()
                .push(category.as_str());
        }

        let mut collisions: Vec<Vec<&str>> = by_folded
            .into_values()
            .filter(|names| names.len() > 1)
            .collect();
        collisions.sort();
        collisions
    }

    /// Logs each collision; returns how many were found.
    pub fn warn_on_collisions(&self) -> usize {
        let collisions = self.colliding_categories();
        for names in &collisions {
            warn!(
                "Categories {:?} map to the same output document name; later ones overwrite earlier ones",
                names
            );
        }
        collisions.len()
    }
}

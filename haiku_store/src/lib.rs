// JSON-file-backed collection of saved haikus.
//
// The engine produces `Haiku` values; this crate holds them. A
// `Collection` supports insert (newest first), list, and delete-by-id,
// and round-trips through a JSON file (serde string in, typed struct
// out). The engine never calls into this crate — the dependency points
// one way only.

use haiku_engine::Haiku;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A saved-haiku collection, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    haikus: Vec<Haiku>,
}

impl Collection {
    /// An empty collection.
    pub fn new() -> Self {
        Collection::default()
    }

    /// Parse a collection from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a collection from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)?;
        Ok(Collection::from_json(&json)?)
    }

    /// Load a collection, treating a missing file as empty.
    ///
    /// A present-but-malformed file is still an error — silently dropping
    /// a user's saved haikus would be worse than failing.
    pub fn load_or_default(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if path.exists() {
            Collection::load(path)
        } else {
            Ok(Collection::new())
        }
    }

    /// Write the collection to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Insert a haiku at the front: the most recent save lists first.
    pub fn insert(&mut self, haiku: Haiku) {
        self.haikus.insert(0, haiku);
    }

    /// All saved haikus, newest first.
    pub fn list(&self) -> &[Haiku] {
        &self.haikus
    }

    /// Remove the haiku with the given id. Returns whether one was found.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.haikus.len();
        self.haikus.retain(|h| h.id != id);
        self.haikus.len() != before
    }

    pub fn len(&self) -> usize {
        self.haikus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.haikus.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haiku_engine::generate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample(prompt: &str, seed: u64) -> Haiku {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(prompt, &mut rng)
    }

    #[test]
    fn test_insert_is_newest_first() {
        let mut collection = Collection::new();
        let first = sample("morning dew", 1);
        let second = sample("evening mist", 2);
        collection.insert(first.clone());
        collection.insert(second.clone());

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.list()[0].id, second.id);
        assert_eq!(collection.list()[1].id, first.id);
    }

    #[test]
    fn test_delete_by_id() {
        let mut collection = Collection::new();
        let keep = sample("pine forest", 3);
        let drop = sample("city rain", 4);
        collection.insert(keep.clone());
        collection.insert(drop.clone());

        assert!(collection.delete(&drop.id));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.list()[0].id, keep.id);
    }

    #[test]
    fn test_delete_missing_id_reports_false() {
        let mut collection = Collection::new();
        collection.insert(sample("snowfall", 5));
        assert!(!collection.delete("no-such-id"));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haikus.json");

        let mut collection = Collection::new();
        collection.insert(sample("river stones", 6));
        collection.insert(sample("bamboo shadows", 7));
        collection.save(&path).unwrap();

        let restored = Collection::load(&path).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.list()[0].id, collection.list()[0].id);
        assert_eq!(restored.list()[0].lines, collection.list()[0].lines);
        assert_eq!(restored.list()[1].prompt, collection.list()[1].prompt);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let collection = Collection::load_or_default(&path).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Collection::load_or_default(&path).is_err());
    }

    #[test]
    fn test_from_json_shape() {
        let collection = Collection::from_json(r#"{"haikus": []}"#).unwrap();
        assert!(collection.is_empty());
    }
}

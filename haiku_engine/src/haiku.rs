// The haiku artifact and the assembly pipeline.
//
// `compose_lines` is the deterministic core: extraction → theme detection
// → pool assembly → template selection → composition, one synchronous
// pass with no I/O. `generate` wraps it into an immutable `Haiku` with a
// fresh UUID and a creation timestamp; those two fields are the only
// non-deterministic part of the artifact.
//
// Precondition: the prompt trims non-empty. Enforcing that is the
// caller's job (the CLI does it); the core has no blank-prompt path and
// no fallible step, so generation always completes.

use crate::keywords::extract_keywords;
use crate::pool::WordPool;
use crate::templates::{compose, select_template};
use crate::themes::detect_themes;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated three-line haiku artifact.
///
/// Immutable once created: no mutating methods are provided, and holders
/// (UI state, collection store) own their copy outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Haiku {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Exactly three non-empty lines, position-significant.
    pub lines: [String; 3],
    /// The originating prompt, untrimmed.
    pub prompt: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Haiku {
    /// The export form for clipboard sinks: the three lines joined by
    /// line breaks.
    pub fn clipboard_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Run the deterministic generation pipeline, producing the three lines.
///
/// Same prompt + same RNG state ⇒ identical lines.
pub fn compose_lines(prompt: &str, rng: &mut impl Rng) -> [String; 3] {
    let lower = prompt.to_lowercase();
    let keywords = extract_keywords(prompt);
    let flags = detect_themes(&lower);
    let pool = WordPool::build(&flags, &keywords);
    let template = select_template(&flags, &lower, rng);
    compose(template, &flags, &pool, rng)
}

/// Generate one haiku from a non-blank prompt.
pub fn generate(prompt: &str, rng: &mut impl Rng) -> Haiku {
    let lines = compose_lines(prompt, rng);
    Haiku {
        id: Uuid::new_v4().to_string(),
        lines,
        prompt: prompt.to_string(),
        created_at: Utc::now(),
    }
}

/// Generate `count` haikus from one RNG stream.
///
/// Callers bound `count` (the CLI allows 1-10); the engine itself just
/// iterates.
pub fn generate_batch(prompt: &str, count: usize, rng: &mut impl Rng) -> Vec<Haiku> {
    (0..count).map(|_| generate(prompt, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    #[test]
    fn test_three_nonempty_lines_for_any_prompt() {
        for prompt in [
            "cherry blossom",
            "ocean waves",
            "the meaning of existence",
            "neon city music",
            "x y z",
            "Grußwort über Flüsse",
        ] {
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let haiku = generate(prompt, &mut rng);
                assert_eq!(haiku.lines.len(), 3);
                for line in &haiku.lines {
                    assert!(!line.trim().is_empty(), "blank line for '{prompt}'");
                }
            }
        }
    }

    #[test]
    fn test_compose_lines_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            compose_lines("autumn rain on the river", &mut a),
            compose_lines("autumn rain on the river", &mut b)
        );
    }

    #[test]
    fn test_prompt_preserved_untrimmed() {
        let mut rng = StdRng::seed_from_u64(1);
        let haiku = generate("  cherry blossom  ", &mut rng);
        assert_eq!(haiku.prompt, "  cherry blossom  ");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(2);
        let batch = generate_batch("mountain dawn", 10, &mut rng);
        let ids: BTreeSet<&str> = batch.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_batch_length() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_batch("dusk", 1, &mut rng).len(), 1);
        assert_eq!(generate_batch("dusk", 10, &mut rng).len(), 10);
    }

    #[test]
    fn test_batch_varies_within_one_stream() {
        let mut rng = StdRng::seed_from_u64(4);
        let batch = generate_batch("whisper of wind", 10, &mut rng);
        let distinct: BTreeSet<String> =
            batch.iter().map(|h| h.lines.join("\n")).collect();
        assert!(
            distinct.len() > 1,
            "ten draws from one stream should not all collide"
        );
    }

    #[test]
    fn test_seed_variety() {
        let mut outputs = BTreeSet::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            outputs.insert(compose_lines("evening breeze", &mut rng).join("\n"));
        }
        assert!(
            outputs.len() > 20,
            "expected >20 distinct haikus from 50 seeds, got {}",
            outputs.len()
        );
    }

    #[test]
    fn test_clipboard_text_joins_lines() {
        let mut rng = StdRng::seed_from_u64(5);
        let haiku = generate("quiet lake", &mut rng);
        let text = haiku.clipboard_text();
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text, haiku.lines.join("\n"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut rng = StdRng::seed_from_u64(6);
        let haiku = generate("winter starlight", &mut rng);
        let json = serde_json::to_string(&haiku).unwrap();
        let restored: Haiku = serde_json::from_str(&json).unwrap();
        assert_eq!(haiku, restored);
    }
}

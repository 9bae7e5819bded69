// Keyword extraction: reduces a free-text prompt to candidate words.
//
// Lower-cases the prompt, splits on whitespace runs, and keeps only tokens
// longer than two characters that are not in the stop-word set. Order is
// prompt order. This is a total function — any input, including the empty
// string, yields a (possibly empty) keyword list.

/// Common filler words that never make useful haiku material.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "about", "that", "this", "from", "have", "will",
];

/// Extract candidate keywords from a prompt, in prompt order.
pub fn extract_keywords(prompt: &str) -> Vec<String> {
    let lower = prompt.to_lowercase();
    lower
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding_and_stop_words() {
        assert_eq!(
            extract_keywords("the Autumn Leaves Dance"),
            vec!["autumn", "leaves", "dance"]
        );
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert_eq!(extract_keywords("an ox in fog"), vec!["fog"]);
    }

    #[test]
    fn test_all_stop_words_dropped() {
        for stop in STOP_WORDS {
            assert!(
                extract_keywords(stop).is_empty(),
                "stop word '{stop}' should be filtered"
            );
        }
    }

    #[test]
    fn test_empty_prompt_yields_empty() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \t\n  ").is_empty());
    }

    #[test]
    fn test_prompt_order_preserved() {
        assert_eq!(
            extract_keywords("ocean waves crash softly"),
            vec!["ocean", "waves", "crash", "softly"]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(
            extract_keywords("  moonlight   over\tmountains\n"),
            vec!["moonlight", "over", "mountains"]
        );
    }
}

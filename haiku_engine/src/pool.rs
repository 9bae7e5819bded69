// Per-call word pool: theme-curated vocabulary plus prompt keywords.
//
// Built fresh for every generation call and discarded afterwards. For each
// active theme tag, in the fixed `Theme::ALL` order, the tag's ten curated
// words are appended; then every extracted keyword follows in prompt
// order. Duplicates are allowed and the pool may be empty.
//
// The derived `use_prompt_heavily` flag (pool length > 3) governs the
// pool-vs-bank choice in `templates.rs`: a rich pool means the prompt has
// enough material to carry the haiku, a thin one means the static banks
// should dominate.

use crate::themes::{Theme, ThemeFlags};
use rand::Rng;

/// The ephemeral per-call word pool.
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Assemble the pool from theme flags and extracted keywords.
    pub fn build(flags: &ThemeFlags, keywords: &[String]) -> Self {
        let mut words = Vec::new();
        for theme in Theme::ALL {
            if flags.has(theme) {
                words.extend(theme.pool_words().iter().map(|w| (*w).to_string()));
            }
        }
        words.extend(keywords.iter().cloned());
        WordPool { words }
    }

    /// Whether templates should prefer the pool over the static banks.
    pub fn use_prompt_heavily(&self) -> bool {
        self.words.len() > 3
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// The pooled words, in assembly order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draw one word uniformly at random. Panics on an empty pool; callers
    /// gate on `is_empty` first.
    pub fn pick(&self, rng: &mut impl Rng) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::extract_keywords;
    use crate::themes::detect_themes;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ocean_waves_pool_composition() {
        let keywords = extract_keywords("ocean waves");
        let flags = detect_themes("ocean waves");
        let pool = WordPool::build(&flags, &keywords);

        // 10 curated water words, then the two prompt keywords.
        assert_eq!(pool.len(), 12);
        let curated: Vec<String> = Theme::Water
            .pool_words()
            .iter()
            .map(|w| (*w).to_string())
            .collect();
        assert_eq!(&pool.words()[..10], curated.as_slice());
        assert_eq!(pool.words()[10], "ocean");
        assert_eq!(pool.words()[11], "waves");
        assert!(pool.use_prompt_heavily());
    }

    #[test]
    fn test_theme_order_is_fixed() {
        // Dark comes after water in the enumeration order regardless of
        // which marker appears first in the prompt.
        let flags = detect_themes("night river");
        let pool = WordPool::build(&flags, &[]);
        assert_eq!(pool.len(), 20);
        assert_eq!(pool.words()[0], Theme::Water.pool_words()[0]);
        assert_eq!(pool.words()[10], Theme::Dark.pool_words()[0]);
    }

    #[test]
    fn test_empty_pool() {
        let flags = detect_themes("zen");
        let pool = WordPool::build(&flags, &[]);
        assert!(pool.is_empty());
        assert!(!pool.use_prompt_heavily());
    }

    #[test]
    fn test_keywords_alone_below_threshold() {
        let keywords = extract_keywords("quiet zen garden");
        let flags = detect_themes("quiet zen garden");
        let pool = WordPool::build(&flags, &keywords);
        assert_eq!(pool.len(), 3);
        assert!(!pool.use_prompt_heavily());
    }

    #[test]
    fn test_duplicates_allowed() {
        let keywords = extract_keywords("waves waves waves waves");
        let flags = detect_themes("waves waves waves waves");
        let pool = WordPool::build(&flags, &keywords);
        // No theme marker trips ("waves" is not a water marker), so the
        // pool is just the repeated keyword.
        assert_eq!(pool.len(), 4);
        assert!(pool.words().iter().all(|w| w == "waves"));
        assert!(pool.use_prompt_heavily());
    }

    #[test]
    fn test_pick_draws_from_pool() {
        let keywords = extract_keywords("ocean waves");
        let flags = detect_themes("ocean waves");
        let pool = WordPool::build(&flags, &keywords);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let word = pool.pick(&mut rng).to_string();
            assert!(pool.words().contains(&word));
        }
    }
}

// Theme detection: maps a prompt onto fifteen fixed theme tags.
//
// Each tag fires iff the lower-cased prompt contains any of that tag's
// substring markers. Matching is plain substring containment, deliberately
// not word-boundary aware: a marker can match inside a longer unrelated
// word ("love" inside "glove"). That quirk is part of the observable
// contract — downstream template selection depends on it — so do not
// "fix" it with word-boundary matching.
//
// Tags are independent and may co-occur. `ThemeFlags` is computed fresh
// per generation call and discarded afterwards.

/// The fifteen theme tags, in the fixed enumeration order used when
/// assembling the word pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Water,
    Mountain,
    Sky,
    Love,
    Time,
    Flower,
    City,
    Space,
    Music,
    Dream,
    Philosophy,
    Light,
    Dark,
    Animal,
    Color,
}

impl Theme {
    /// All tags, in pool-assembly order.
    pub const ALL: [Theme; 15] = [
        Theme::Water,
        Theme::Mountain,
        Theme::Sky,
        Theme::Love,
        Theme::Time,
        Theme::Flower,
        Theme::City,
        Theme::Space,
        Theme::Music,
        Theme::Dream,
        Theme::Philosophy,
        Theme::Light,
        Theme::Dark,
        Theme::Animal,
        Theme::Color,
    ];

    /// Human-readable tag name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Water => "water",
            Theme::Mountain => "mountain",
            Theme::Sky => "sky",
            Theme::Love => "love",
            Theme::Time => "time",
            Theme::Flower => "flower",
            Theme::City => "city",
            Theme::Space => "space",
            Theme::Music => "music",
            Theme::Dream => "dream",
            Theme::Philosophy => "philosophy",
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Animal => "animal",
            Theme::Color => "color",
        }
    }

    /// Substring markers that trip this tag.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Theme::Water => &["water", "ocean", "river", "lake"],
            Theme::Mountain => &["mountain", "hill", "peak"],
            Theme::Sky => &["sky", "cloud", "star"],
            Theme::Love => &["love", "heart", "romance"],
            Theme::Time => &["time", "moment", "memory"],
            Theme::Flower => &["flower", "blossom", "bloom"],
            Theme::City => &["city", "urban", "street"],
            Theme::Space => &["space", "cosmos", "galaxy"],
            Theme::Music => &["music", "song", "melody"],
            Theme::Dream => &["dream", "sleep", "nightmare"],
            Theme::Philosophy => &["philosophy", "meaning", "existence"],
            Theme::Light => &["light", "shine", "glow"],
            Theme::Dark => &["dark", "night", "shadow"],
            Theme::Animal => &["animal", "creature", "beast"],
            Theme::Color => &["color", "hue", "shade"],
        }
    }

    /// The ten curated words this tag contributes to the word pool when
    /// active.
    pub fn pool_words(self) -> &'static [&'static str] {
        match self {
            Theme::Water => &[
                "ripples", "waves", "flowing", "current", "tide",
                "splash", "droplet", "trickle", "cascade", "deluge",
            ],
            Theme::Mountain => &[
                "towering", "ancient", "stone", "peak", "summit",
                "ridge", "valley", "crag", "precipice", "monolith",
            ],
            Theme::Sky => &[
                "endless", "vast", "celestial", "horizon", "firmament",
                "atmosphere", "expanse", "boundless", "ether", "azure",
            ],
            Theme::Love => &[
                "tender", "embrace", "passion", "affection", "devotion",
                "adoration", "ardor", "cherish", "yearning", "longing",
            ],
            Theme::Time => &[
                "fleeting", "eternal", "passing", "moment", "eternity",
                "duration", "ephemeral", "transient", "sempiternal", "instantaneous",
            ],
            Theme::Flower => &[
                "petals", "fragrance", "delicate", "bloom", "blossom",
                "budding", "unfurling", "withering", "aromatic", "botanical",
            ],
            Theme::City => &[
                "bustling", "crowded", "neon", "skyscraper", "pavement",
                "subway", "metropolis", "urbanite", "asphalt", "structure",
            ],
            Theme::Space => &[
                "infinite", "stellar", "cosmic", "interstellar", "nebula",
                "void", "vacuum", "astral", "galactic", "universal",
            ],
            Theme::Music => &[
                "rhythm", "harmony", "melody", "symphony", "orchestra",
                "tempo", "cadence", "refrain", "crescendo", "diminuendo",
            ],
            Theme::Dream => &[
                "subconscious", "ethereal", "surreal", "fantasy", "illusion",
                "chimera", "phantasm", "reverie", "slumber", "hypnagogic",
            ],
            Theme::Philosophy => &[
                "existential", "ontological", "epistemological", "metaphysical", "transcendental",
                "phenomenological", "axiological", "ethical", "aesthetical", "logical",
            ],
            Theme::Light => &[
                "luminescent", "radiant", "illuminated", "brilliant", "lustrous",
                "incandescent", "effulgent", "phosphorescent", "lambent", "lucent",
            ],
            Theme::Dark => &[
                "umbral", "tenebrous", "obscure", "murky", "dusky",
                "crepuscular", "nocturnal", "vespertine", "shadowy", "gloaming",
            ],
            Theme::Animal => &[
                "feral", "untamed", "instinctual", "primal", "bestial",
                "savage", "predatory", "primitive", "natural", "wild",
            ],
            Theme::Color => &[
                "chromatic", "prismatic", "vivid", "vibrant", "polychromatic",
                "iridescent", "variegated", "multihued", "technicolor", "kaleidoscopic",
            ],
        }
    }
}

/// Which theme tags a prompt tripped. One flag per tag; flags are
/// independent and any subset may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeFlags {
    pub water: bool,
    pub mountain: bool,
    pub sky: bool,
    pub love: bool,
    pub time: bool,
    pub flower: bool,
    pub city: bool,
    pub space: bool,
    pub music: bool,
    pub dream: bool,
    pub philosophy: bool,
    pub light: bool,
    pub dark: bool,
    pub animal: bool,
    pub color: bool,
}

impl ThemeFlags {
    /// Whether the given tag is set.
    pub fn has(&self, theme: Theme) -> bool {
        match theme {
            Theme::Water => self.water,
            Theme::Mountain => self.mountain,
            Theme::Sky => self.sky,
            Theme::Love => self.love,
            Theme::Time => self.time,
            Theme::Flower => self.flower,
            Theme::City => self.city,
            Theme::Space => self.space,
            Theme::Music => self.music,
            Theme::Dream => self.dream,
            Theme::Philosophy => self.philosophy,
            Theme::Light => self.light,
            Theme::Dark => self.dark,
            Theme::Animal => self.animal,
            Theme::Color => self.color,
        }
    }

    /// Number of tags set.
    pub fn active_count(&self) -> usize {
        Theme::ALL.iter().filter(|&&t| self.has(t)).count()
    }

    fn set(&mut self, theme: Theme) {
        match theme {
            Theme::Water => self.water = true,
            Theme::Mountain => self.mountain = true,
            Theme::Sky => self.sky = true,
            Theme::Love => self.love = true,
            Theme::Time => self.time = true,
            Theme::Flower => self.flower = true,
            Theme::City => self.city = true,
            Theme::Space => self.space = true,
            Theme::Music => self.music = true,
            Theme::Dream => self.dream = true,
            Theme::Philosophy => self.philosophy = true,
            Theme::Light => self.light = true,
            Theme::Dark => self.dark = true,
            Theme::Animal => self.animal = true,
            Theme::Color => self.color = true,
        }
    }
}

/// Evaluate every theme tag against a lower-cased prompt.
///
/// The caller is responsible for lower-casing; `compose_lines` does this
/// once and shares the result with template selection.
pub fn detect_themes(prompt_lower: &str) -> ThemeFlags {
    let mut flags = ThemeFlags::default();
    for theme in Theme::ALL {
        if theme.markers().iter().any(|m| prompt_lower.contains(m)) {
            flags.set(theme);
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_markers() {
        for prompt in ["water", "the ocean deep", "a river runs", "by the lake"] {
            let flags = detect_themes(prompt);
            assert!(flags.water, "'{prompt}' should trip the water tag");
        }
    }

    #[test]
    fn test_ocean_waves_trips_only_water() {
        let flags = detect_themes("ocean waves");
        assert!(flags.water);
        assert_eq!(flags.active_count(), 1);
    }

    #[test]
    fn test_cherry_blossom_trips_only_flower() {
        let flags = detect_themes("cherry blossom");
        assert!(flags.flower);
        assert_eq!(flags.active_count(), 1);
    }

    #[test]
    fn test_tags_co_occur() {
        let flags = detect_themes("moonlight on the ocean at night");
        assert!(flags.water);
        assert!(flags.dark);
        assert!(flags.light); // "moonlight" contains "light"
    }

    #[test]
    fn test_substring_matching_is_not_word_boundary_aware() {
        // Preserved quirk: markers match inside longer words.
        assert!(detect_themes("a glove on the bench").love);
        assert!(detect_themes("stars above").sky);
        assert!(detect_themes("nightingale").dark);
    }

    #[test]
    fn test_no_markers_no_flags() {
        let flags = detect_themes("quiet zen garden");
        assert_eq!(flags, ThemeFlags::default());
        assert_eq!(flags.active_count(), 0);
    }

    #[test]
    fn test_every_theme_has_markers_and_pool_words() {
        for theme in Theme::ALL {
            assert!(
                (2..=4).contains(&theme.markers().len()),
                "tag '{}' should have 2-4 markers",
                theme.name()
            );
            assert_eq!(
                theme.pool_words().len(),
                10,
                "tag '{}' should contribute exactly 10 pool words",
                theme.name()
            );
        }
    }

    #[test]
    fn test_all_fifteen_tags_detectable() {
        for theme in Theme::ALL {
            let flags = detect_themes(theme.markers()[0]);
            assert!(
                flags.has(theme),
                "tag '{}' should fire on its own marker",
                theme.name()
            );
        }
    }
}

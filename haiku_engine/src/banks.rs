// Static vocabulary banks: eleven named categories of candidate words.
//
// The banks are `'static` constant data, fixed at compile time and never
// mutated, so any number of concurrent generation calls can read them
// without synchronization. Templates in `templates.rs` name the category
// they want per slot via `Category`; the pool-vs-bank choice itself lives
// in `templates.rs`.
//
// A bank is never empty — every slot draw has a guaranteed terminal word
// source, which is what makes the generation pipeline infallible.

use rand::Rng;

/// The eleven vocabulary categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Seasons,
    Nature,
    Emotions,
    Subjects,
    Urban,
    Celestial,
    Abstract,
    Literary,
    Philosophical,
    Actions,
    Descriptors,
}

impl Category {
    /// All categories, in registry order.
    pub const ALL: [Category; 11] = [
        Category::Seasons,
        Category::Nature,
        Category::Emotions,
        Category::Subjects,
        Category::Urban,
        Category::Celestial,
        Category::Abstract,
        Category::Literary,
        Category::Philosophical,
        Category::Actions,
        Category::Descriptors,
    ];

    /// The word bank for this category.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Category::Seasons => SEASONS,
            Category::Nature => NATURE,
            Category::Emotions => EMOTIONS,
            Category::Subjects => SUBJECTS,
            Category::Urban => URBAN,
            Category::Celestial => CELESTIAL,
            Category::Abstract => ABSTRACT,
            Category::Literary => LITERARY,
            Category::Philosophical => PHILOSOPHICAL,
            Category::Actions => ACTIONS,
            Category::Descriptors => DESCRIPTORS,
        }
    }

    /// Human-readable category name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Seasons => "seasons",
            Category::Nature => "nature",
            Category::Emotions => "emotions",
            Category::Subjects => "subjects",
            Category::Urban => "urban",
            Category::Celestial => "celestial",
            Category::Abstract => "abstract",
            Category::Literary => "literary",
            Category::Philosophical => "philosophical",
            Category::Actions => "actions",
            Category::Descriptors => "descriptors",
        }
    }
}

/// Draw one word uniformly at random from a non-empty word list.
pub fn pick<'a>(words: &[&'a str], rng: &mut impl Rng) -> &'a str {
    words[rng.random_range(0..words.len())]
}

pub const SEASONS: &[&str] = &[
    "spring", "summer", "autumn", "winter", "dawn", "dusk", "twilight", "midnight",
    "solstice", "equinox", "monsoon", "harvest", "bloom", "thaw", "frost", "mist",
    "morning", "evening", "noon", "nightfall", "daybreak", "sunset", "sunrise", "gloaming",
    "eclipse", "zenith", "golden hour", "blue hour", "witching hour", "starlight", "moonlight",
];

pub const NATURE: &[&str] = &[
    "mountain", "river", "ocean", "forest", "flower", "moon", "sun", "stars",
    "rain", "snow", "petal", "blossom", "garden", "meadow", "waterfall", "breeze",
    "thunder", "mist", "fog", "cloud", "desert", "valley", "canyon", "lake",
    "stream", "pond", "cliff", "cave", "glacier", "volcano", "geyser", "reef",
    "island", "peninsula", "horizon", "shadow", "rainbow", "storm", "lightning",
    "dew", "frost", "ice", "flame", "ember", "smoke", "ash", "dust", "pollen",
    "vine", "thorn", "reed", "moss", "lichen", "fern", "pine", "willow", "oak",
    "aurora", "avalanche", "cosmos", "prairie", "savanna", "tundra", "basin", "summit",
    "crest", "ravine", "fjord", "atoll", "everglades", "oasis", "citadel", "precipice",
    "escarpment", "plateau", "archipelago", "current", "eddy", "cascade", "cataract",
    "delta", "estuary", "glade", "gorge", "inlet", "isthmus", "lagoon", "marsh",
];

pub const EMOTIONS: &[&str] = &[
    "peace", "joy", "wonder", "silence", "solitude", "harmony", "tranquility",
    "sadness", "longing", "hope", "serenity", "nostalgia", "awe", "contentment",
    "melancholy", "bliss", "passion", "courage", "fear", "love", "grief",
    "yearning", "desire", "regret", "euphoria", "excitement", "envy", "pride",
    "gratitude", "compassion", "empathy", "enlightenment", "wisdom", "clarity",
    "confusion", "curiosity", "wonder", "anticipation", "patience", "persistence",
    "equanimity", "reverence", "veneration", "astonishment", "bewilderment", "elation",
    "exuberance", "adoration", "amazement", "trepidation", "delight", "rapture",
    "ecstasy", "tenderness", "affection", "fondness", "intimacy", "devotion",
    "mirth", "merriment", "joviality", "euphony", "epiphany", "realization",
];

pub const SUBJECTS: &[&str] = &[
    "cat", "dog", "bird", "butterfly", "dragonfly", "child", "elder", "traveler",
    "monk", "artist", "farmer", "fisherman", "cherry blossom", "pine", "bamboo",
    "frog", "cricket", "firefly", "fox", "deer", "wolf", "bear", "eagle", "hawk",
    "sparrow", "crow", "raven", "swan", "heron", "turtle", "fish", "whale", "dolphin",
    "shark", "octopus", "squid", "crab", "lobster", "shrimp", "snail", "beetle",
    "ant", "bee", "wasp", "spider", "scorpion", "serpent", "dragon", "phoenix",
    "unicorn", "griffin", "pegasus", "mermaid", "centaur", "minotaur", "cyclops",
    "giant", "dwarf", "elf", "fairy", "sprite", "nymph", "dryad", "sylph", "gnome",
    "goblin", "troll", "ogre", "witch", "wizard", "mage", "sorcerer", "necromancer",
    "paladin", "knight", "samurai", "ninja", "pirate", "captain", "sailor", "warrior",
    "lioness", "panda", "koala", "lemur", "otter", "peacock", "nightingale", "wren",
    "kestrel", "osprey", "falcon", "owl", "bat", "salamander", "newt", "chameleon",
    "iguana", "gecko", "python", "cobra", "viper", "woodpecker", "cardinal", "jay",
    "robin", "finch", "dove", "seagull", "albatross", "pelican", "swallow", "sable",
    "ermine", "chipmunk", "squirrel", "raccoon", "badger", "wolverine", "monk seal",
];

pub const URBAN: &[&str] = &[
    "city", "street", "skyscraper", "alley", "subway", "café", "restaurant", "park",
    "museum", "gallery", "theater", "cinema", "concert", "festival", "parade", "market",
    "shop", "store", "mall", "plaza", "square", "boulevard", "avenue", "bridge", "tunnel",
    "metropolis", "downtown", "suburb", "neighborhood", "quarter", "district", "precinct",
    "terrace", "balcony", "rooftop", "courtyard", "garden", "pavilion", "promenade",
    "esplanade", "boardwalk", "pier", "wharf", "dock", "harbor", "port", "station",
    "terminal", "airport", "railway", "highway", "freeway", "intersection", "junction",
    "landmark", "monument", "statue", "fountain", "obelisk", "spire", "dome", "minaret",
];

pub const CELESTIAL: &[&str] = &[
    "star", "planet", "moon", "sun", "comet", "asteroid", "meteor", "galaxy",
    "universe", "cosmos", "constellation", "nebula", "supernova", "black hole",
    "quasar", "pulsar", "aurora", "eclipse", "solstice", "equinox", "zodiac",
    "orbital", "celestial", "cosmic", "interstellar", "galactic", "astral", "ethereal",
    "heavenly", "firmament", "planetoid", "satellite", "lunar", "solar", "stellar",
    "astronomical", "astrophysical", "astrological", "cosmological", "cosmogonic",
    "Big Dipper", "Orion", "Pleiades", "Andromeda", "Milky Way", "Cygnus", "Ursa",
    "corona", "chromosphere", "photosphere", "magnetosphere", "ionosphere", "atmosphere",
];

pub const ABSTRACT: &[&str] = &[
    "dream", "thought", "idea", "memory", "vision", "illusion", "reality", "truth",
    "lie", "secret", "mystery", "enigma", "paradox", "eternity", "infinity", "void",
    "chaos", "order", "balance", "harmony", "discord", "rhythm", "melody", "symphony",
    "freedom", "bondage", "duality", "unity", "synchronicity", "symmetry", "asymmetry",
    "polarity", "opacity", "transparency", "luminosity", "obscurity", "clarity", "ambiguity",
    "complexity", "simplicity", "entropy", "synergy", "apathy", "vitality", "mortality",
    "immortality", "vulnerability", "invincibility", "fragility", "resilience", "transience",
    "permanence", "ephemeral", "perpetual", "momentary", "everlasting", "temporary", "eternal",
];

pub const LITERARY: &[&str] = &[
    "verse", "stanza", "rhyme", "meter", "alliteration", "metaphor", "simile", "personification",
    "imagery", "symbolism", "allegory", "irony", "paradox", "oxymoron", "hyperbole", "understatement",
    "sonnet", "ballad", "ode", "elegy", "epic", "lyric", "narrative", "dramatic", "didactic",
    "fable", "parable", "myth", "legend", "folklore", "saga", "tale", "story", "anecdote",
    "prose", "poetry", "verse", "stanza", "couplet", "tercet", "quatrain", "quintain", "sestet",
    "octave", "refrain", "chorus", "prelude", "interlude", "postlude", "crescendo", "diminuendo",
];

pub const PHILOSOPHICAL: &[&str] = &[
    "being", "becoming", "existence", "essence", "substance", "form", "matter", "mind",
    "soul", "spirit", "consciousness", "unconsciousness", "subconscious", "perception", "cognition",
    "intuition", "reason", "logic", "dialectic", "discourse", "argument", "thesis", "antithesis",
    "synthesis", "analysis", "induction", "deduction", "abduction", "syllogism", "premise",
    "conclusion", "causality", "teleology", "determinism", "indeterminism", "destiny", "fate",
    "chance", "necessity", "contingency", "possibility", "actuality", "potentiality", "virtuality",
];

pub const ACTIONS: &[&str] = &[
    "dance", "sing", "whisper", "shout", "run", "walk", "fly", "swim", "dive", "float",
    "soar", "glide", "drift", "meander", "wander", "roam", "explore", "discover", "find",
    "lose", "seek", "hide", "reveal", "conceal", "illuminate", "darken", "brighten", "dim",
    "reflect", "refract", "disperse", "concentrate", "gather", "scatter", "collect", "dispense",
    "create", "destroy", "build", "dismantle", "construct", "deconstruct", "assemble", "disassemble",
    "bloom", "wither", "grow", "shrink", "expand", "contract", "inflate", "deflate", "rise", "fall",
    "ascend", "descend", "climb", "slide", "slip", "glide", "twirl", "spin", "revolve", "rotate",
];

pub const DESCRIPTORS: &[&str] = &[
    "luminous", "radiant", "brilliant", "dull", "vibrant", "vivid", "pale", "faded", "lustrous",
    "gleaming", "glimmering", "shimmering", "sparkling", "glittering", "glistening", "twinkling",
    "flickering", "flashing", "blazing", "burning", "smoldering", "incandescent", "phosphorescent",
    "fluorescent", "iridescent", "opalescent", "pearlescent", "translucent", "transparent", "opaque",
    "diaphanous", "filmy", "gossamer", "ethereal", "delicate", "robust", "sturdy", "fragile", "brittle",
    "malleable", "fluid", "rigid", "flexible", "supple", "stiff", "soft", "hard", "smooth", "rough",
    "mute", "silent", "quiet", "loud", "melodious", "harmonious", "cacophonous", "discordant", "euphonious",
];

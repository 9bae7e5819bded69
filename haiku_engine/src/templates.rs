// The template set and selector: eight fixed three-line frames.
//
// Each template is a pure slot-filling function over the theme flags, the
// per-call word pool, the static banks, and an injected RNG. Slot policy:
// when the pool is rich (`use_prompt_heavily`) and non-empty, slots draw
// from the pool; otherwise each slot draws from its designated bank
// category. Several slots branch on specific theme flags first, choosing
// among small fixed word lists before the random draw, so that verbs and
// nouns stay in register with the prompt.
//
// Selection is an ordered sequence of assignments in which every later
// applicable rule unconditionally overwrites the earlier pick —
// last-applicable-rule-wins, not first-match. A prompt tripping both the
// space and dream tags therefore lands on DreamSequence, never
// CosmicWonder. This ordering is a contract; preserve it exactly.
//
// **Critical constraint: determinism.** Given the same flags, pool, and
// RNG state, selection and composition must produce identical output. The
// baseline random draw in `select_template` happens even when a rule
// overrides it, keeping the RNG stream alignment independent of which
// rule fires.

use crate::banks::{self, Category};
use crate::pool::WordPool;
use crate::themes::ThemeFlags;
use rand::Rng;

/// Prompt substrings that force the LiteraryAllusion template. These are
/// checked against the prompt directly rather than through a theme tag.
const LITERARY_MARKERS: &[&str] = &["literature", "poetry", "writing"];

/// The eight haiku frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    NatureObservation,
    SeasonTransition,
    EmotionalReflection,
    UrbanLife,
    CosmicWonder,
    DreamSequence,
    PhilosophicalContemplation,
    LiteraryAllusion,
}

impl Template {
    /// All variants, in baseline-draw order.
    pub const ALL: [Template; 8] = [
        Template::NatureObservation,
        Template::SeasonTransition,
        Template::EmotionalReflection,
        Template::UrbanLife,
        Template::CosmicWonder,
        Template::DreamSequence,
        Template::PhilosophicalContemplation,
        Template::LiteraryAllusion,
    ];

    /// Human-readable variant name.
    pub fn name(self) -> &'static str {
        match self {
            Template::NatureObservation => "nature-observation",
            Template::SeasonTransition => "season-transition",
            Template::EmotionalReflection => "emotional-reflection",
            Template::UrbanLife => "urban-life",
            Template::CosmicWonder => "cosmic-wonder",
            Template::DreamSequence => "dream-sequence",
            Template::PhilosophicalContemplation => "philosophical-contemplation",
            Template::LiteraryAllusion => "literary-allusion",
        }
    }
}

/// Choose the template for this call.
///
/// Rule 1 is a uniform random baseline; rules 2-8 overwrite it in order
/// whenever their flags hold, so the last applicable rule decides.
pub fn select_template(
    flags: &ThemeFlags,
    prompt_lower: &str,
    rng: &mut impl Rng,
) -> Template {
    let mut pick = Template::ALL[rng.random_range(0..Template::ALL.len())];

    if flags.water || flags.sky {
        pick = Template::SeasonTransition;
    }
    if flags.love || flags.time {
        pick = Template::EmotionalReflection;
    }
    if flags.city || flags.music {
        pick = Template::UrbanLife;
    }
    if flags.space {
        pick = Template::CosmicWonder;
    }
    if flags.dream {
        pick = Template::DreamSequence;
    }
    if flags.philosophy {
        pick = Template::PhilosophicalContemplation;
    }
    if LITERARY_MARKERS.iter().any(|m| prompt_lower.contains(m)) {
        pick = Template::LiteraryAllusion;
    }

    pick
}

/// Fill one slot: pool word when the pool is rich, bank word otherwise.
fn slot(pool: &WordPool, category: Category, rng: &mut impl Rng) -> String {
    if pool.use_prompt_heavily() && !pool.is_empty() {
        pool.pick(rng).to_string()
    } else {
        banks::pick(category.words(), rng).to_string()
    }
}

/// Draw from a small fixed word list inlined in a template frame.
fn pick(words: &[&'static str], rng: &mut impl Rng) -> &'static str {
    banks::pick(words, rng)
}

/// Compose the three lines for a chosen template. Every branch terminates
/// in a non-empty word source, so composition cannot fail.
pub fn compose(
    template: Template,
    flags: &ThemeFlags,
    pool: &WordPool,
    rng: &mut impl Rng,
) -> [String; 3] {
    match template {
        Template::NatureObservation => {
            let subject = slot(pool, Category::Subjects, rng);
            let nature = slot(pool, Category::Nature, rng);
            let descriptor = slot(pool, Category::Descriptors, rng);
            let action = slot(pool, Category::Actions, rng);
            let found = if flags.philosophy {
                banks::pick(banks::PHILOSOPHICAL, rng)
            } else {
                banks::pick(banks::ABSTRACT, rng)
            };
            [
                format!("{subject} in {nature}"),
                format!("{descriptor} as it {action}s"),
                format!("{found} found"),
            ]
        }

        Template::SeasonTransition => {
            let season = slot(pool, Category::Seasons, rng);
            let nature = slot(pool, Category::Nature, rng);
            let action = if flags.water {
                pick(&["flowing", "rippling", "cascading", "streaming", "pouring"], rng)
            } else if flags.sky {
                pick(&["drifting", "floating", "soaring", "gliding", "hovering"], rng)
            } else {
                pick(&["dancing", "swaying", "trembling", "rustling", "stirring"], rng)
            };
            let greeting = if flags.love {
                pick(&["embraces", "cherishes", "caresses", "nurtures", "cradles"], rng)
            } else {
                pick(&["welcomes", "accepts", "receives", "greets", "acknowledges"], rng)
            };
            let mover = if flags.dark {
                "shadows"
            } else if flags.light {
                "light"
            } else {
                "time"
            };
            let closing = banks::pick(banks::ACTIONS, rng);
            [
                format!("{season} {action} by"),
                format!("{nature} {greeting} change"),
                format!("{mover} {closing}s"),
            ]
        }

        Template::EmotionalReflection => {
            let emotion = slot(pool, Category::Emotions, rng);
            let subject = slot(pool, Category::Subjects, rng);
            let descriptor = slot(pool, Category::Descriptors, rng);
            let simile = if flags.water {
                pick(&["water", "waves", "river", "rain", "mist"], rng)
            } else if flags.flower {
                pick(&["blossoms", "petals", "flowers", "gardens", "buds"], rng)
            } else {
                pick(&["shadows", "echoes", "whispers", "memories", "dreams"], rng)
            };
            let deed = if flags.sky {
                pick(
                    &[
                        "gazes at stars",
                        "watches clouds",
                        "sees the moon",
                        "feels the breeze",
                        "breathes the air",
                    ],
                    rng,
                )
            } else {
                pick(
                    &[
                        "finds the path",
                        "seeks the truth",
                        "discovers meaning",
                        "follows instinct",
                        "listens closely",
                    ],
                    rng,
                )
            };
            let insight = pick(
                &["vision", "insight", "wisdom", "revelation", "understanding"],
                rng,
            );
            [
                format!("{emotion} like {simile}"),
                format!("{subject} {deed}"),
                format!("{descriptor} {insight}"),
            ]
        }

        Template::UrbanLife => {
            let urban = slot(pool, Category::Urban, rng);
            let emotion = slot(pool, Category::Emotions, rng);
            let action = slot(pool, Category::Actions, rng);
            let sight = pick(&["lights", "sounds", "scenes", "sights", "moments"], rng);
            let motion = pick(&["flicker", "echo", "unfold", "emerge", "appear"], rng);
            let surround = if flags.music {
                pick(&["rhythm", "melody", "harmony", "tempo", "beat"], rng)
            } else {
                pick(&["bustle", "crowd", "noise", "movement", "energy"], rng)
            };
            let refuge = if flags.time {
                pick(&["stillness", "silence", "pauses", "moments", "intervals"], rng)
            } else {
                pick(&["peace", "solitude", "quiet", "sanctuary", "retreat"], rng)
            };
            [
                format!("{urban} {sight} {motion}"),
                format!("{emotion} amid the {surround}"),
                format!("{action}ing in {refuge}"),
            ]
        }

        Template::CosmicWonder => {
            let celestial = slot(pool, Category::Celestial, rng);
            let abstract_ = slot(pool, Category::Abstract, rng);
            let philosophical = slot(pool, Category::Philosophical, rng);
            let radiance = pick(&["shine", "glow", "pulse", "flare", "beam"], rng);
            let reach = if flags.space {
                pick(
                    &["galaxies", "nebulae", "constellations", "cosmos", "universe"],
                    rng,
                )
            } else {
                pick(
                    &["expanse", "distance", "horizon", "infinity", "eternity"],
                    rng,
                )
            };
            let ponder = if flags.dream {
                pick(
                    &["dreams", "visions", "imaginings", "fantasies", "reveries"],
                    rng,
                )
                .to_string()
            } else {
                philosophical
            };
            let scale = pick(
                &["infinite", "boundless", "limitless", "eternal", "endless"],
                rng,
            );
            [
                format!("distant {celestial} {radiance}"),
                format!("{abstract_} across vast {reach}"),
                format!("{ponder} {scale}"),
            ]
        }

        Template::DreamSequence => {
            let abstract_ = slot(pool, Category::Abstract, rng);
            let subject = slot(pool, Category::Subjects, rng);
            let descriptor = slot(pool, Category::Descriptors, rng);
            let drifting = if flags.dream {
                pick(&["dreams", "visions", "fantasies", "illusions", "mirages"], rng)
            } else {
                pick(&["thoughts", "ideas", "concepts", "notions", "impressions"], rng)
            };
            let realm = if flags.space {
                pick(&["ethereal", "cosmic", "astral", "celestial", "interstellar"], rng)
            } else {
                pick(&["surreal", "phantasmal", "mystical", "magical", "enchanted"], rng)
            };
            let motion = pick(&["dance", "movement", "rhythm", "flow", "current"], rng);
            let emerging = if flags.time {
                pick(&["moments", "instances", "seconds", "minutes", "intervals"], rng)
            } else {
                pick(
                    &[
                        "thoughts",
                        "musings",
                        "contemplations",
                        "reflections",
                        "meditations",
                    ],
                    rng,
                )
            };
            [
                format!("{abstract_} {drifting} float"),
                format!("{subject} in {realm} {motion}"),
                format!("{descriptor} {emerging} emerge"),
            ]
        }

        Template::PhilosophicalContemplation => {
            let philosophical = slot(pool, Category::Philosophical, rng);
            let abstract_ = slot(pool, Category::Abstract, rng);
            let emotion = slot(pool, Category::Emotions, rng);
            let musing = pick(
                &[
                    "questions",
                    "ponderings",
                    "inquiries",
                    "contemplations",
                    "deliberations",
                ],
                rng,
            );
            let unveiling = pick(
                &["reveals", "unfolds", "discloses", "manifests", "presents"],
                rng,
            );
            let yield_ = pick(
                &["meaning", "purpose", "essence", "significance", "relevance"],
                rng,
            );
            let waking = pick(
                &["awakens", "arises", "emerges", "blossoms", "develops"],
                rng,
            );
            [
                format!("{philosophical} {musing}"),
                format!("{abstract_} {unveiling} {yield_}"),
                format!("{emotion} {waking}"),
            ]
        }

        Template::LiteraryAllusion => {
            let literary = slot(pool, Category::Literary, rng);
            let emotion = slot(pool, Category::Emotions, rng);
            let abstract_ = slot(pool, Category::Abstract, rng);
            let shaping = pick(&["forms", "shapes", "creates", "molds", "crafts"], rng);
            let material = pick(
                &["words", "verses", "stanzas", "phrases", "expressions"],
                rng,
            );
            let surging = pick(
                &["flows", "surges", "pulsates", "resonates", "vibrates"],
                rng,
            );
            let medium = pick(
                &["lines", "passages", "sections", "segments", "fragments"],
                rng,
            );
            let seizing = pick(
                &["captured", "seized", "grasped", "apprehended", "comprehended"],
                rng,
            );
            [
                format!("{literary} {shaping} {material}"),
                format!("{emotion} {surging} through {medium}"),
                format!("{abstract_} {seizing}"),
            ]
        }
    }
}

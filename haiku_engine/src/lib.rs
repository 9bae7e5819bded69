// Theme-aware procedural haiku generation engine.
//
// Turns a free-text prompt into a three-line haiku-shaped artifact by
// detecting latent themes, assembling a prompt-derived word pool, picking
// one of eight fixed templates via a priority-ordered rule table, and
// filling the template's slots from the pool or from static vocabulary
// banks.
//
// Architecture:
// - `banks.rs`: eleven static vocabulary banks keyed by `Category`
// - `keywords.rs`: prompt tokenizer and stop-word filter
// - `themes.rs`: fifteen theme tags, substring detection, `ThemeFlags`
// - `pool.rs`: per-call `WordPool` (curated theme words + keywords)
// - `templates.rs`: the eight `Template` variants and the selector
// - `haiku.rs`: the `Haiku` artifact and the `generate` entry points
//
// The engine performs no I/O and holds no mutable shared state; the word
// banks are `'static` constants. Persistence lives in the separate
// `haiku_store` crate, which consumes `Haiku` values but is never called
// from here.
//
// **Critical constraint: determinism.** All randomness flows through an
// injected `rand::Rng`; given the same prompt and a same-seeded RNG,
// `compose_lines` returns identical lines. Never reach for an ambient
// global generator inside the engine.

pub mod banks;
pub mod keywords;
pub mod pool;
pub mod templates;
pub mod themes;

mod haiku;

pub use banks::Category;
pub use haiku::{Haiku, compose_lines, generate, generate_batch};
pub use pool::WordPool;
pub use templates::Template;
pub use themes::{Theme, ThemeFlags, detect_themes};

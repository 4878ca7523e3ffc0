//! Field resolvers.
//!
//! Each resolver is a candidate chain: several lazy sources concatenated in
//! priority order, of which only the first non-empty answer is used. Sources
//! after the one that answers are never queried.

pub mod description;
pub mod hero;
pub mod site_name;
pub mod title;

pub use description::resolve_description;
pub use hero::{hero_candidates, resolve_hero, MAX_HERO};
pub use site_name::resolve_site_name;
pub use title::{clean_title, resolve_title};

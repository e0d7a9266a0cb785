//! Texas hold'em specific code: validated spots, outs and how good
//! they really are.

/// Hero, board and villain cards checked for size and duplicates.
mod spot;
/// Export `Spot`
pub use self::spot::Spot;

/// Rules for what counts as an improvement or a danger.
mod config;
pub use self::config::{DangerRule, ImprovementRule, OutsConfig};

/// Finding every card that improves hero.
mod outs;
/// Export `Score` and the free function.
pub use self::outs::{Score, effective_outs};

/// Splitting outs into positive and negative.
mod classify;
pub use self::classify::{Outs, classify};

/// Draw kinds and dealing random draw spots.
mod draw;
pub use self::draw::{DrawKind, UnknownDrawKind};

//! Battle Arena
//!
//! A two-combatant, turn-based battle resolver. Combatants roll random
//! attributes from their class's declared bounds, then trade attacks
//! through an evasion/defence pipeline until one of them runs out of
//! health, with PRE- and POST-turn skill hooks and a drainable message
//! queue for the presentation layer.

// --- MODULE DECLARATIONS ---
pub mod attributes;
pub mod battle;
pub mod classes;
pub mod combatant;
pub mod errors;
pub mod rng;
pub mod skills;

// --- PUBLIC API RE-EXPORTS ---
// The most important types, importable straight from the crate root.

// Battle orchestration and the event stream.
pub use battle::state::{validate_name, Battle, BattleEvent, EventBus, MAX_NAME_LENGTH};

// Combatants and their attribute model.
pub use attributes::{generate, AttributeDefinition, AttributeKind, AttributePatch, Attributes};
pub use classes::{ClassDefinition, CombatantClass};
pub use combatant::{AttributeSnapshot, Combatant};

// The skill contract and registry.
pub use skills::{Skill, SkillId, SkillPhase, SkillRegistry};

// Randomness injection points.
pub use rng::{EntropySource, RandomSource, ScriptedSource};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, ConfigurationError, GenerationError, GenerationResult,
    ValidationError,
};

use crate::errors::{GenerationError, GenerationResult};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Whether an attribute definition produces whole or fractional values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Integer,
    Fractional,
}

/// Bounds and kind for one attribute, declared per combatant class and
/// consulted exactly once, at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeDefinition {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub min: f64,
    pub max: f64,
}

impl AttributeDefinition {
    pub const fn integer(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            kind: AttributeKind::Integer,
            min,
            max,
        }
    }

    pub const fn fractional(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            kind: AttributeKind::Fractional,
            min,
            max,
        }
    }
}

/// Roll a value for `definition` from the supplied random source.
///
/// Integer kind yields a uniform whole value in `[min, max]` inclusive;
/// fractional kind yields `min + u * (max - min)` with `u` in `[0, 1)`,
/// so the result lies in the half-open `[min, max)`. Malformed bounds
/// fail fast rather than degrading to zero.
pub fn generate(
    definition: &AttributeDefinition,
    rng: &mut dyn RandomSource,
) -> GenerationResult<f64> {
    if definition.min > definition.max {
        return Err(GenerationError::InvertedBounds {
            min: definition.min,
            max: definition.max,
        });
    }

    let draw = rng.next_fraction(definition.name);

    match definition.kind {
        AttributeKind::Integer => {
            if definition.min.fract() != 0.0 || definition.max.fract() != 0.0 {
                return Err(GenerationError::NonWholeBounds {
                    min: definition.min,
                    max: definition.max,
                });
            }
            // draw < 1.0, so the floor never reaches past max
            let span = definition.max - definition.min + 1.0;
            Ok(definition.min + (draw * span).floor())
        }
        AttributeKind::Fractional => Ok(definition.min + draw * (definition.max - definition.min)),
    }
}

/// The working attribute values of a combatant: the five numeric combat
/// attributes plus this turn's status flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attributes {
    pub health: f64,
    pub strength: f64,
    pub defence: f64,
    pub speed: f64,
    pub luck: f64,
    pub was_hit: bool,
    pub stunned: bool,
    pub evaded: bool,
}

/// Partial update for a combatant's working attributes.
///
/// The field set is closed: a patch can adjust existing attributes but can
/// never introduce a new one. Fields left as `None` are untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttributePatch {
    pub health: Option<f64>,
    pub strength: Option<f64>,
    pub defence: Option<f64>,
    pub speed: Option<f64>,
    pub luck: Option<f64>,
    pub was_hit: Option<bool>,
    pub stunned: Option<bool>,
    pub evaded: Option<bool>,
}

impl Attributes {
    /// Merge the set fields of `patch` into these attributes. Patch values
    /// win on conflict.
    pub fn apply(&mut self, patch: &AttributePatch) {
        if let Some(health) = patch.health {
            self.health = health;
        }
        if let Some(strength) = patch.strength {
            self.strength = strength;
        }
        if let Some(defence) = patch.defence {
            self.defence = defence;
        }
        if let Some(speed) = patch.speed {
            self.speed = speed;
        }
        if let Some(luck) = patch.luck {
            self.luck = luck;
        }
        if let Some(was_hit) = patch.was_hit {
            self.was_hit = was_hit;
        }
        if let Some(stunned) = patch.stunned {
            self.stunned = stunned;
        }
        if let Some(evaded) = patch.evaded {
            self.evaded = evaded;
        }
    }
}

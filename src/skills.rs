use crate::attributes::Attributes;
use crate::errors::ConfigurationError;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Phase of the turn at which a skill activates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillPhase {
    /// Runs after the turn reset, before the attack exchange
    Pre,
    /// Runs after both attacks have resolved
    Post,
}

/// A pluggable unit of turn-phase behavior.
///
/// A skill is activated with its owning combatant's working attributes and
/// may mutate them freely; changes last until the next turn reset. Skills
/// never see the opponent or the battle.
pub trait Skill: std::fmt::Debug {
    fn phase(&self) -> SkillPhase;
    fn activate(&mut self, attributes: &mut Attributes, rng: &mut dyn RandomSource);
}

/// Identifier a combatant class uses to declare its skills.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillId {
    AdrenalineRush,
    GuardStance,
    RecklessSwing,
    ShakeOff,
}

type SkillFactory = fn() -> Box<dyn Skill>;

/// Maps skill identifiers to factories. Combatant construction resolves a
/// class's declared ids through this registry instead of instantiating
/// types directly; an id without a factory is a configuration error.
pub struct SkillRegistry {
    factories: HashMap<SkillId, SkillFactory>,
}

impl SkillRegistry {
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry pre-populated with every shipped skill.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(SkillId::AdrenalineRush, || Box::new(AdrenalineRush));
        registry.register(SkillId::GuardStance, || Box::new(GuardStance));
        registry.register(SkillId::RecklessSwing, || Box::new(RecklessSwing));
        registry.register(SkillId::ShakeOff, || Box::new(ShakeOff));
        registry
    }

    pub fn register(&mut self, id: SkillId, factory: SkillFactory) {
        self.factories.insert(id, factory);
    }

    pub fn instantiate(&self, id: SkillId) -> Result<Box<dyn Skill>, ConfigurationError> {
        match self.factories.get(&id) {
            Some(factory) => Ok(factory()),
            None => Err(ConfigurationError::UnknownSkill(id)),
        }
    }
}

/// PRE: one turn in four, fight with an extra 10 strength.
#[derive(Debug)]
pub struct AdrenalineRush;

impl Skill for AdrenalineRush {
    fn phase(&self) -> SkillPhase {
        SkillPhase::Pre
    }

    fn activate(&mut self, attributes: &mut Attributes, rng: &mut dyn RandomSource) {
        if rng.next_fraction("adrenaline rush chance") < 0.25 {
            attributes.strength += 10.0;
        }
    }
}

/// PRE: three turns in ten, brace for an extra 5 defence.
#[derive(Debug)]
pub struct GuardStance;

impl Skill for GuardStance {
    fn phase(&self) -> SkillPhase {
        SkillPhase::Pre
    }

    fn activate(&mut self, attributes: &mut Attributes, rng: &mut dyn RandomSource) {
        if rng.next_fraction("guard stance chance") < 0.30 {
            attributes.defence += 5.0;
        }
    }
}

/// PRE: swing 15 strength harder, at a one-in-ten risk of stunning
/// yourself for the turn.
#[derive(Debug)]
pub struct RecklessSwing;

impl Skill for RecklessSwing {
    fn phase(&self) -> SkillPhase {
        SkillPhase::Pre
    }

    fn activate(&mut self, attributes: &mut Attributes, rng: &mut dyn RandomSource) {
        attributes.strength += 15.0;
        if rng.next_fraction("reckless swing backfire") < 0.10 {
            attributes.stunned = true;
        }
    }
}

/// POST: clear the stun flag at the end of the turn.
#[derive(Debug)]
pub struct ShakeOff;

impl Skill for ShakeOff {
    fn phase(&self) -> SkillPhase {
        SkillPhase::Post
    }

    fn activate(&mut self, attributes: &mut Attributes, _rng: &mut dyn RandomSource) {
        attributes.stunned = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;
    use pretty_assertions::assert_eq;

    fn base_attributes() -> Attributes {
        Attributes {
            health: 80.0,
            strength: 50.0,
            defence: 30.0,
            speed: 40.0,
            luck: 0.2,
            was_hit: false,
            stunned: false,
            evaded: false,
        }
    }

    #[test]
    fn builtin_registry_resolves_every_shipped_skill() {
        let registry = SkillRegistry::builtin();
        for id in [
            SkillId::AdrenalineRush,
            SkillId::GuardStance,
            SkillId::RecklessSwing,
            SkillId::ShakeOff,
        ] {
            assert!(registry.instantiate(id).is_ok(), "missing factory for {:?}", id);
        }
    }

    #[test]
    fn empty_registry_reports_unknown_skill() {
        let registry = SkillRegistry::empty();
        let err = registry.instantiate(SkillId::ShakeOff).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownSkill(SkillId::ShakeOff));
    }

    #[test]
    fn adrenaline_rush_boosts_strength_on_a_low_draw() {
        let mut skill = AdrenalineRush;
        let mut attributes = base_attributes();

        let mut rng = ScriptedSource::new_for_test(vec![0.1]);
        skill.activate(&mut attributes, &mut rng);
        assert_eq!(attributes.strength, 60.0);

        let mut rng = ScriptedSource::new_for_test(vec![0.9]);
        skill.activate(&mut attributes, &mut rng);
        assert_eq!(attributes.strength, 60.0, "high draw must not trigger the rush");
    }

    #[test]
    fn reckless_swing_always_boosts_and_sometimes_backfires() {
        let mut skill = RecklessSwing;

        let mut attributes = base_attributes();
        let mut rng = ScriptedSource::new_for_test(vec![0.5]);
        skill.activate(&mut attributes, &mut rng);
        assert_eq!(attributes.strength, 65.0);
        assert!(!attributes.stunned);

        let mut attributes = base_attributes();
        let mut rng = ScriptedSource::new_for_test(vec![0.05]);
        skill.activate(&mut attributes, &mut rng);
        assert_eq!(attributes.strength, 65.0);
        assert!(attributes.stunned);
    }

    #[test]
    fn shake_off_clears_the_stun_flag() {
        let mut skill = ShakeOff;
        let mut attributes = base_attributes();
        attributes.stunned = true;

        let mut rng = ScriptedSource::new_for_test(vec![]);
        skill.activate(&mut attributes, &mut rng);
        assert!(!attributes.stunned);
        assert_eq!(skill.phase(), SkillPhase::Post);
    }
}

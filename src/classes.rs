use crate::attributes::AttributeDefinition;
use crate::skills::SkillId;
use serde::{Deserialize, Serialize};

/// Tag identifying a concrete combatant variant. Carried as data on every
/// combatant and shown in the pre-battle summary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatantClass {
    Swordsman,
    Brute,
}

/// Everything a class declares: the bounds each attribute is rolled from
/// and the skills wired in at construction.
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    pub class: CombatantClass,
    pub health: AttributeDefinition,
    pub strength: AttributeDefinition,
    pub defence: AttributeDefinition,
    pub speed: AttributeDefinition,
    pub luck: AttributeDefinition,
    pub skills: &'static [SkillId],
}

impl CombatantClass {
    /// Every class a battle may assign to a combatant.
    pub const ROSTER: [CombatantClass; 2] = [CombatantClass::Swordsman, CombatantClass::Brute];

    pub fn name(&self) -> &'static str {
        match self {
            CombatantClass::Swordsman => "Swordsman",
            CombatantClass::Brute => "Brute",
        }
    }

    pub fn definition(&self) -> ClassDefinition {
        match self {
            CombatantClass::Swordsman => ClassDefinition {
                class: *self,
                health: AttributeDefinition::integer("health", 60.0, 100.0),
                strength: AttributeDefinition::integer("strength", 60.0, 90.0),
                defence: AttributeDefinition::integer("defence", 40.0, 60.0),
                speed: AttributeDefinition::integer("speed", 40.0, 60.0),
                luck: AttributeDefinition::fractional("luck", 0.0, 0.5),
                skills: &[SkillId::AdrenalineRush, SkillId::ShakeOff],
            },
            CombatantClass::Brute => ClassDefinition {
                class: *self,
                health: AttributeDefinition::integer("health", 70.0, 100.0),
                strength: AttributeDefinition::integer("strength", 65.0, 95.0),
                defence: AttributeDefinition::integer("defence", 30.0, 50.0),
                speed: AttributeDefinition::integer("speed", 30.0, 50.0),
                luck: AttributeDefinition::fractional("luck", 0.0, 0.35),
                skills: &[SkillId::RecklessSwing, SkillId::GuardStance],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeKind;
    use crate::skills::SkillRegistry;

    #[test]
    fn every_class_declares_sane_bounds() {
        for class in CombatantClass::ROSTER {
            let definition = class.definition();
            for attribute in [
                &definition.health,
                &definition.strength,
                &definition.defence,
                &definition.speed,
                &definition.luck,
            ] {
                assert!(
                    attribute.min <= attribute.max,
                    "{:?} declares inverted bounds for {}",
                    class,
                    attribute.name
                );
            }
            assert_eq!(definition.luck.kind, AttributeKind::Fractional);
            assert!(definition.luck.max <= 1.0, "luck must stay within [0, 1)");
        }
    }

    #[test]
    fn every_declared_skill_resolves_through_the_builtin_registry() {
        let registry = SkillRegistry::builtin();
        for class in CombatantClass::ROSTER {
            for &id in class.definition().skills {
                assert!(
                    registry.instantiate(id).is_ok(),
                    "{:?} declares unresolvable skill {:?}",
                    class,
                    id
                );
            }
        }
    }
}

use crate::attributes::{generate, AttributePatch, Attributes};
use crate::battle::engine::TurnContext;
use crate::battle::state::BattleEvent;
use crate::classes::CombatantClass;
use crate::errors::BattleResult;
use crate::rng::RandomSource;
use crate::skills::{Skill, SkillPhase, SkillRegistry};
use serde::Serialize;

/// Read-only view of a combatant's current working attributes, used by the
/// presentation layer for the pre-battle summary table.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttributeSnapshot {
    pub name: String,
    pub class: CombatantClass,
    pub health: f64,
    pub strength: f64,
    pub defence: f64,
    pub speed: f64,
    pub luck: f64,
    pub was_hit: bool,
    pub stunned: bool,
    pub evaded: bool,
}

/// A single participant in a battle.
///
/// Owns a persistent attribute baseline, the per-turn working copy every
/// combat operation reads and writes, and the skills its class declared,
/// bucketed by phase in declaration order.
pub struct Combatant {
    pub(crate) name: String,
    pub(crate) class: CombatantClass,
    pub(crate) baseline: Attributes,
    pub(crate) working: Attributes,
    pub(crate) pre_skills: Vec<Box<dyn Skill>>,
    pub(crate) post_skills: Vec<Box<dyn Skill>>,
}

impl Combatant {
    /// Roll a fresh combatant of the given class.
    ///
    /// Every attribute the class declares is generated from its bounds,
    /// the display name is capitalized, and each declared skill is
    /// resolved through the registry and filed under its phase.
    pub fn new(
        name: &str,
        class: CombatantClass,
        registry: &SkillRegistry,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<Self> {
        let definition = class.definition();

        let baseline = Attributes {
            health: generate(&definition.health, rng)?,
            strength: generate(&definition.strength, rng)?,
            defence: generate(&definition.defence, rng)?,
            speed: generate(&definition.speed, rng)?,
            luck: generate(&definition.luck, rng)?,
            was_hit: false,
            stunned: false,
            evaded: false,
        };

        let mut pre_skills: Vec<Box<dyn Skill>> = Vec::new();
        let mut post_skills: Vec<Box<dyn Skill>> = Vec::new();
        for &id in definition.skills {
            let skill = registry.instantiate(id)?;
            match skill.phase() {
                SkillPhase::Pre => pre_skills.push(skill),
                SkillPhase::Post => post_skills.push(skill),
            }
        }

        let mut combatant = Self {
            name: capitalize(name),
            class,
            working: baseline.clone(),
            baseline,
            pre_skills,
            post_skills,
        };
        combatant.init_next_turn();
        Ok(combatant)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> CombatantClass {
        self.class
    }

    /// Snapshot of the current working attributes.
    pub fn snapshot(&self) -> AttributeSnapshot {
        AttributeSnapshot {
            name: self.name.clone(),
            class: self.class,
            health: self.working.health,
            strength: self.working.strength,
            defence: self.working.defence,
            speed: self.working.speed,
            luck: self.working.luck,
            was_hit: self.working.was_hit,
            stunned: self.working.stunned,
            evaded: self.working.evaded,
        }
    }

    /// Merge a patch into the working attributes and return the post-merge
    /// snapshot. This is the single write surface skills and tests use.
    pub fn apply(&mut self, patch: AttributePatch) -> AttributeSnapshot {
        self.working.apply(&patch);
        self.snapshot()
    }

    /// Reset the working copy from the persistent baseline.
    ///
    /// Clears `was_hit`/`stunned`/`evaded` (the baseline flags are never
    /// set) while health carries over, because damage is written into the
    /// baseline as well as the working copy.
    pub fn init_next_turn(&mut self) {
        self.working = self.baseline.clone();
    }

    /// Resolve one attack against `opponent`, from the attacker's side.
    ///
    /// A stunned attacker only announces it cannot act. Otherwise the
    /// opponent gets its evasion check; a failed evasion means the attack
    /// lands, marks the opponent as hit, and hands over to `defend`.
    pub(crate) fn attack(&self, opponent: &mut Combatant, ctx: &mut TurnContext<'_>) {
        if !ctx.is_active() {
            return;
        }

        if self.working.stunned {
            ctx.bus.push(BattleEvent::StunnedSkip {
                name: self.name.clone(),
            });
            return;
        }

        if opponent.evade(self, ctx) {
            return;
        }

        ctx.bus.push(BattleEvent::AttackLanded {
            attacker: self.name.clone(),
            strength: self.working.strength,
        });
        opponent.working.was_hit = true;
        opponent.defend(self, ctx);
    }

    /// Evasion check against an incoming attack. A draw at or below this
    /// combatant's working luck negates the attack entirely; the inclusive
    /// comparison is part of the observable contract.
    pub(crate) fn evade(&mut self, attacker: &Combatant, ctx: &mut TurnContext<'_>) -> bool {
        let draw = ctx.rng.next_fraction("evasion check");
        if draw <= self.working.luck {
            ctx.bus.push(BattleEvent::AttackEvaded {
                attacker: attacker.name.clone(),
                defender: self.name.clone(),
            });
            self.working.evaded = true;
            return true;
        }
        false
    }

    /// Convert a landed attack into damage: attacker strength less own
    /// defence, floored at zero.
    pub(crate) fn defend(&mut self, attacker: &Combatant, ctx: &mut TurnContext<'_>) {
        let damage = (attacker.working.strength - self.working.defence).max(0.0);
        self.take_damage(damage, attacker, ctx);
    }

    /// Apply damage to both the baseline and the working copy, flooring
    /// health at zero. A lethal hit deactivates the battle and crowns the
    /// attacker in the same call.
    pub(crate) fn take_damage(&mut self, damage: f64, attacker: &Combatant, ctx: &mut TurnContext<'_>) {
        let remaining = (self.working.health - damage).max(0.0);
        self.baseline.health = remaining;
        self.working.health = remaining;

        ctx.bus.push(BattleEvent::DamageTaken {
            name: self.name.clone(),
            damage,
            remaining,
        });

        if remaining <= 0.0 {
            ctx.end_battle();
            ctx.bus.push(BattleEvent::BattleEnded {
                winner: attacker.name.clone(),
            });
        }
    }

    /// Activate every PRE skill in registration order. Skipped entirely
    /// once the battle has ended.
    pub(crate) fn pre_turn_skills(&mut self, ctx: &mut TurnContext<'_>) {
        if !ctx.is_active() {
            return;
        }
        for skill in &mut self.pre_skills {
            skill.activate(&mut self.working, &mut *ctx.rng);
        }
    }

    /// Activate every POST skill in registration order, with the same
    /// liveness guard as the PRE phase.
    pub(crate) fn post_turn_skills(&mut self, ctx: &mut TurnContext<'_>) {
        if !ctx.is_active() {
            return;
        }
        for skill in &mut self.post_skills {
            skill.activate(&mut self.working, &mut *ctx.rng);
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Skill-less combatant with fixed attributes, for deterministic tests.
#[cfg(test)]
pub(crate) fn test_combatant(name: &str, class: CombatantClass) -> Combatant {
    let baseline = Attributes {
        health: 80.0,
        strength: 50.0,
        defence: 20.0,
        speed: 40.0,
        luck: 0.0,
        was_hit: false,
        stunned: false,
        evaded: false,
    };
    Combatant {
        name: capitalize(name),
        class,
        working: baseline.clone(),
        baseline,
        pre_skills: Vec::new(),
        post_skills: Vec::new(),
    }
}

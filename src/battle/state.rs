use crate::classes::CombatantClass;
use crate::combatant::{AttributeSnapshot, Combatant};
use crate::errors::{BattleResult, ValidationError};
use crate::rng::{EntropySource, RandomSource};
use crate::skills::SkillRegistry;
use serde::{Deserialize, Serialize};

/// Longest combatant name the battle accepts.
pub const MAX_NAME_LENGTH: usize = 32;

/// One observable thing that happened during a turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// A stunned combatant skipped its attack
    StunnedSkip { name: String },
    /// An attack got past the evasion check
    AttackLanded { attacker: String, strength: f64 },
    /// The defender's luck negated the attack outright
    AttackEvaded { attacker: String, defender: String },
    /// Damage was applied, possibly zero
    DamageTaken {
        name: String,
        damage: f64,
        remaining: f64,
    },
    /// A lethal hit ended the battle
    BattleEnded { winner: String },
}

impl BattleEvent {
    /// Render the event as the human-readable battle message.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::StunnedSkip { name } => {
                format!("{} is stunned and cannot attack", name)
            }
            BattleEvent::AttackLanded { attacker, strength } => {
                format!("{} attacked with {} strength", attacker, strength)
            }
            BattleEvent::AttackEvaded { attacker, defender } => format!(
                "{} missed their attack as {} was lucky and managed to evade",
                attacker, defender
            ),
            BattleEvent::DamageTaken {
                name,
                damage,
                remaining,
            } => format!(
                "{} received {} damage and has {} health remaining",
                name, damage, remaining
            ),
            BattleEvent::BattleEnded { winner } => format!("{} is the winner!", winner),
        }
    }
}

/// FIFO queue of battle events, drained by the caller after each turn.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Remove and return every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {}", event.format())?;
        }
        Ok(())
    }
}

/// Check a combatant name against the interface contract: non-empty and
/// at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length == 0 {
        return Err(ValidationError::EmptyName);
    }
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            name: name.to_string(),
            length,
        });
    }
    Ok(())
}

/// A battle between exactly two combatants.
///
/// Roles are fixed at construction: the first combatant acts first on
/// every turn. `is_active` starts true and latches false on the first
/// lethal hit.
pub struct Battle {
    pub(crate) combatants: [Combatant; 2],
    pub(crate) is_active: bool,
    pub(crate) bus: EventBus,
    pub(crate) rng: Box<dyn RandomSource>,
}

impl Battle {
    /// Create a battle from two validated names, rolling a random class
    /// and random attributes for each combatant from process entropy.
    pub fn new(first_name: &str, second_name: &str) -> BattleResult<Self> {
        Self::with_rng(first_name, second_name, Box::new(EntropySource::new()))
    }

    /// Like [`Battle::new`] but with an injected random source, so an
    /// entire battle can be replayed deterministically.
    pub fn with_rng(
        first_name: &str,
        second_name: &str,
        mut rng: Box<dyn RandomSource>,
    ) -> BattleResult<Self> {
        validate_name(first_name)?;
        validate_name(second_name)?;

        let registry = SkillRegistry::builtin();
        let first_class = roll_class(rng.as_mut());
        let first = Combatant::new(first_name, first_class, &registry, rng.as_mut())?;
        let second_class = roll_class(rng.as_mut());
        let second = Combatant::new(second_name, second_class, &registry, rng.as_mut())?;

        Ok(Self {
            combatants: [first, second],
            is_active: true,
            bus: EventBus::new(),
            rng,
        })
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn combatant(&self, index: usize) -> &Combatant {
        &self.combatants[index]
    }

    /// Snapshots of both combatants, first combatant first.
    pub fn snapshots(&self) -> [AttributeSnapshot; 2] {
        [self.combatants[0].snapshot(), self.combatants[1].snapshot()]
    }

    /// The typed events pending since the last drain.
    pub fn events(&self) -> &[BattleEvent] {
        self.bus.events()
    }

    /// Drain the pending events as formatted messages, oldest first. The
    /// queue is empty afterwards; an empty battle yields an empty vec.
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.bus
            .drain()
            .iter()
            .map(|event| event.format())
            .collect()
    }
}

fn roll_class(rng: &mut dyn RandomSource) -> CombatantClass {
    let roster = CombatantClass::ROSTER;
    let pick = (rng.next_fraction("class roll") * roster.len() as f64) as usize;
    roster[pick]
}

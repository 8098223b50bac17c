use crate::battle::state::{Battle, EventBus};
use crate::rng::RandomSource;

/// The narrow channel combat operations get back into the battle: they
/// can post events, read or end the activity flag, and draw randomness.
/// Nothing else about the battle is reachable from a combatant.
pub(crate) struct TurnContext<'a> {
    pub(crate) bus: &'a mut EventBus,
    pub(crate) is_active: &'a mut bool,
    pub(crate) rng: &'a mut dyn RandomSource,
}

impl TurnContext<'_> {
    pub(crate) fn is_active(&self) -> bool {
        *self.is_active
    }

    pub(crate) fn end_battle(&mut self) {
        *self.is_active = false;
    }
}

impl Battle {
    /// Run one full turn: reset both working copies, fire PRE skills,
    /// exchange attacks in fixed role order, fire POST skills.
    ///
    /// A lethal hit mid-turn flips the battle inactive; the remaining
    /// steps of the same turn still run but their liveness guards make
    /// them no-ops, and no further turn does anything.
    pub fn run_turn(&mut self) {
        if !self.is_active {
            return;
        }

        let [first, second] = &mut self.combatants;
        first.init_next_turn();
        second.init_next_turn();

        let mut ctx = TurnContext {
            bus: &mut self.bus,
            is_active: &mut self.is_active,
            rng: self.rng.as_mut(),
        };

        first.pre_turn_skills(&mut ctx);
        second.pre_turn_skills(&mut ctx);

        first.attack(second, &mut ctx);
        second.attack(first, &mut ctx);

        first.post_turn_skills(&mut ctx);
        second.post_turn_skills(&mut ctx);
    }
}

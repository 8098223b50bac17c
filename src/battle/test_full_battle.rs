use crate::battle::state::Battle;
use crate::classes::CombatantClass;
use crate::rng::ScriptedSource;
use pretty_assertions::assert_eq;

/// Drive an entire battle from a scripted random source and check the
/// complete message stream, turn by turn.
///
/// Draw order per the resolver: one class roll plus five attribute rolls
/// (health, strength, defence, speed, luck) per combatant at construction,
/// then per turn one draw for each PRE skill chance and one evasion draw
/// per non-stunned attack while the battle is live.
#[test]
fn scripted_battle_plays_out_deterministically() {
    let outcomes = vec![
        // Alice: Swordsman, health 80, strength 87, defence 40, speed 40, luck 0
        0.0, 0.5, 0.9, 0.0, 0.0, 0.0,
        // Bob: Swordsman, health 60, strength 60, defence 40, speed 40, luck 0
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        // Turn 1: both AdrenalineRush chances miss, both evasion draws miss
        0.9, 0.9, 0.5, 0.5,
        // Turn 2: both rush chances miss, Bob's evasion draw misses; the
        // lethal hit ends the battle before Bob's attack
        0.9, 0.9, 0.5,
    ];

    let mut battle =
        Battle::with_rng("alice", "bob", Box::new(ScriptedSource::new_for_test(outcomes)))
            .unwrap();

    let [alice, bob] = battle.snapshots();
    assert_eq!(alice.class, CombatantClass::Swordsman);
    assert_eq!(bob.class, CombatantClass::Swordsman);
    assert_eq!(alice.health, 80.0);
    assert_eq!(alice.strength, 87.0);
    assert_eq!(bob.health, 60.0);
    assert_eq!(bob.strength, 60.0);

    assert!(battle.is_active());
    battle.run_turn();
    assert_eq!(
        battle.drain_messages(),
        vec![
            "Alice attacked with 87 strength".to_string(),
            "Bob received 47 damage and has 13 health remaining".to_string(),
            "Bob attacked with 60 strength".to_string(),
            "Alice received 20 damage and has 60 health remaining".to_string(),
        ]
    );

    assert!(battle.is_active());
    battle.run_turn();
    assert_eq!(
        battle.drain_messages(),
        vec![
            "Alice attacked with 87 strength".to_string(),
            "Bob received 47 damage and has 0 health remaining".to_string(),
            "Alice is the winner!".to_string(),
        ]
    );

    assert!(!battle.is_active());
    assert_eq!(battle.combatant(1).snapshot().health, 0.0);
    assert_eq!(battle.combatant(0).snapshot().health, 60.0);
}

/// An undirected battle from process entropy must still terminate once
/// someone can deal damage, and the winner message must close the stream.
#[test]
fn entropy_battle_ends_with_a_winner_message() {
    let mut battle = Battle::new("alice", "bob").unwrap();
    let mut all_messages = Vec::new();

    for _ in 0..500 {
        if !battle.is_active() {
            break;
        }
        battle.run_turn();
        all_messages.extend(battle.drain_messages());
    }

    // A zero-damage stalemate is possible but vanishingly unlikely with
    // the shipped class bounds; when the battle ended, the last message
    // names the winner.
    if !battle.is_active() {
        let last = all_messages.last().expect("a finished battle has messages");
        assert!(last.ends_with("is the winner!"), "unexpected final message: {}", last);
    }
}

use battle_arena::{validate_name, AttributeSnapshot, Battle};
use std::io::{self, BufRead, Write};

// A zero-damage stalemate would loop forever without a cap
const MAX_TURNS: usize = 200;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // --json swaps the summary table for machine-readable output
    let json_summary = if let Some(position) = args.iter().position(|arg| arg == "--json") {
        args.remove(position);
        true
    } else {
        false
    };

    let names: Vec<String> = args.into_iter().take(2).collect();

    let (first_name, second_name) = if names.len() == 2 {
        (names[0].clone(), names[1].clone())
    } else {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let first = prompt_name("first", &mut lines);
        let second = prompt_name("second", &mut lines);
        (first, second)
    };

    let mut battle = match Battle::new(&first_name, &second_name) {
        Ok(battle) => battle,
        Err(e) => {
            eprintln!("Error creating battle: {}", e);
            std::process::exit(1);
        }
    };

    if json_summary {
        match serde_json::to_string_pretty(&battle.snapshots()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing summary: {}", e),
        }
    } else {
        render_summary(&battle.snapshots());
    }
    println!();

    let mut turns = 0;
    while battle.is_active() {
        battle.run_turn();
        println!("{}", battle.drain_messages().join(", "));

        turns += 1;
        if turns >= MAX_TURNS {
            println!("Battle reached the turn limit with no winner - calling it a draw.");
            break;
        }
    }
}

fn prompt_name(label: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> String {
    loop {
        print!("Please enter the name of the {} combatant: ", label);
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            _ => {
                eprintln!("No input available.");
                std::process::exit(1);
            }
        };

        match validate_name(&line) {
            Ok(()) => return line,
            Err(e) => println!("{}.", e),
        }
    }
}

fn render_summary(snapshots: &[AttributeSnapshot; 2]) {
    println!(
        "{:<8}{:<34}{:<12}{:<8}{:<10}{:<9}{:<7}{}",
        "Order", "Name", "Class", "Health", "Strength", "Defence", "Speed", "Luck"
    );
    for (index, snapshot) in snapshots.iter().enumerate() {
        println!(
            "{:<8}{:<34}{:<12}{:<8}{:<10}{:<9}{:<7}{:.2}",
            if index == 0 { "First" } else { "Second" },
            snapshot.name,
            snapshot.class.name(),
            snapshot.health,
            snapshot.strength,
            snapshot.defence,
            snapshot.speed,
            snapshot.luck
        );
    }
}

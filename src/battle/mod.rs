pub mod engine;
pub mod state;

#[cfg(test)]
mod test_full_battle;

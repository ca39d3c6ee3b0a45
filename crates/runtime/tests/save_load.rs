//! Saving and resuming sessions through the file repository.

use rogue_core::{Command, Direction, GameConfig, LevelUpChoice, PlayerPrompt, Position, SpawnTables, World};
use rogue_runtime::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, RuntimeError, SaveRepository,
    Session,
};

struct Abort;

impl PlayerPrompt for Abort {
    fn select_tile(&mut self, _world: &World, _max_range: Option<f64>) -> Option<Position> {
        None
    }

    fn choose_level_up(&mut self, _world: &World, _options: &[LevelUpChoice]) -> LevelUpChoice {
        LevelUpChoice::Toughness
    }
}

fn script() -> Vec<Command> {
    let mut commands = Vec::new();
    for direction in [Direction::East, Direction::South, Direction::West, Direction::North] {
        commands.push(Command::Move(direction));
        commands.push(Command::Wait);
    }
    commands
}

#[test]
fn resumed_game_continues_identically() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(dir.path()).unwrap();

    let mut original = Session::new(GameConfig::default(), SpawnTables::default(), 2024);
    for command in script() {
        original.step(command, &mut Abort).unwrap();
    }
    original.save(&repo, "slot").unwrap();

    let mut resumed =
        Session::load(&repo, "slot", GameConfig::default(), SpawnTables::default()).unwrap();
    assert_eq!(resumed.world(), original.world());
    assert_eq!(resumed.turns(), original.turns());

    // Both copies draw from the same generator state from here on.
    for command in script() {
        original.step(command, &mut Abort).unwrap();
        resumed.step(command, &mut Abort).unwrap();
    }
    assert_eq!(resumed.world(), original.world());
}

#[test]
fn loading_an_empty_slot_is_an_error() {
    let repo = InMemorySaveRepository::new();
    let result = Session::load(&repo, "nothing", GameConfig::default(), SpawnTables::default());
    assert!(matches!(
        result,
        Err(RuntimeError::Repository(RepositoryError::EmptySlot(_)))
    ));
}

#[test]
fn saving_twice_overwrites_the_slot() {
    let repo = InMemorySaveRepository::new();
    let mut session = Session::new(GameConfig::default(), SpawnTables::default(), 1);
    session.save(&repo, "slot").unwrap();
    session.step(Command::Wait, &mut Abort).unwrap();
    session.save(&repo, "slot").unwrap();

    let save = repo.load("slot").unwrap().unwrap();
    assert_eq!(save.turns, 1);
}

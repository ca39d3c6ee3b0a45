//! End-to-end runs of the autopilot against real sessions.

use rogue_client::Client;
use rogue_core::{GameConfig, SpawnTables};
use rogue_runtime::{FileSaveRepository, InMemorySaveRepository, SaveRepository, Session};

#[test]
fn bounded_run_saves_or_clears_the_slot() {
    for seed in [1, 7, 42] {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(GameConfig::default(), SpawnTables::default(), seed);

        let summary = Client::builder()
            .session(session)
            .repository(FileSaveRepository::new(dir.path()).unwrap())
            .slot("run")
            .max_turns(Some(300))
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert!(summary.turns <= 300, "seed {seed}: ran {} turns", summary.turns);
        assert!(summary.dungeon_level >= 1);
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        assert_eq!(repo.exists("run"), !summary.died, "seed {seed}");
    }
}

#[test]
fn resumed_run_keeps_counting_turns() {
    let dir = tempfile::tempdir().unwrap();
    let first = Client::builder()
        .session(Session::new(GameConfig::default(), SpawnTables::default(), 3))
        .repository(FileSaveRepository::new(dir.path()).unwrap())
        .max_turns(Some(20))
        .build()
        .unwrap()
        .run()
        .unwrap();
    if first.died {
        return;
    }

    let repo = FileSaveRepository::new(dir.path()).unwrap();
    let session = Session::load(
        &repo,
        rogue_runtime::RuntimeConfig::DEFAULT_SLOT,
        GameConfig::default(),
        SpawnTables::default(),
    )
    .unwrap();
    assert_eq!(session.turns(), first.turns);

    let second = Client::builder()
        .session(session)
        .repository(repo)
        .max_turns(Some(20))
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert!(second.turns >= first.turns);
}

#[test]
fn builder_requires_a_session() {
    let result = Client::builder()
        .repository(InMemorySaveRepository::new())
        .build();
    assert!(result.is_err());
}

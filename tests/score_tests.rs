use std::fs;
use std::path::PathBuf;

use twenty48::score::{FileStore, MemoryStore, ScoreStore, Scoreboard};

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("twenty48-{}-{}.json", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

struct BrokenStore;

impl ScoreStore for BrokenStore {
    fn get(&self) -> Result<Option<u64>, String> {
        Err("unreadable".to_string())
    }

    fn set(&mut self, _value: u64) -> Result<(), String> {
        Err("read-only".to_string())
    }
}

#[test]
fn test_scoreboard_starts_from_stored_best() {
    assert_eq!(Scoreboard::new(MemoryStore::default()).best(), 0);
    assert_eq!(Scoreboard::new(MemoryStore::new(Some(512))).best(), 512);
}

#[test]
fn test_best_tracks_the_maximum_score() {
    let mut scoreboard = Scoreboard::new(MemoryStore::new(Some(100)));
    let scores = [0, 40, 100, 180, 60, 250, 250, 10];
    let mut before = scoreboard.best();

    for score in scores {
        scoreboard.record(score);

        // never goes down
        assert!(scoreboard.best() >= before);
        before = scoreboard.best();
    }

    assert_eq!(scoreboard.best(), 250);
    assert_eq!(scoreboard.store().get().unwrap(), Some(250));
}

#[test]
fn test_record_reports_only_new_bests() {
    let mut scoreboard = Scoreboard::new(MemoryStore::new(Some(20)));

    assert!(!scoreboard.record(0));
    assert!(!scoreboard.record(20));
    assert!(scoreboard.record(24));
    assert!(!scoreboard.record(22));
    assert_eq!(scoreboard.store().get().unwrap(), Some(24));
}

#[test]
fn test_best_survives_a_new_session() {
    let mut first = Scoreboard::new(MemoryStore::default());
    first.record(300);

    let stored = first.store().clone();
    let mut second = Scoreboard::new(stored);

    assert_eq!(second.best(), 300);
    second.record(120);
    assert_eq!(second.best(), 300);
}

#[test]
fn test_broken_store_is_not_fatal() {
    let mut scoreboard = Scoreboard::new(BrokenStore);

    assert_eq!(scoreboard.best(), 0);
    assert!(scoreboard.record(64));
    assert_eq!(scoreboard.best(), 64);
}

#[test]
fn test_file_store_round_trip() {
    let path = temp_path("round-trip");
    let mut store = FileStore::new(path.clone());

    assert_eq!(store.get().unwrap(), None);

    store.set(2048).unwrap();
    assert_eq!(store.get().unwrap(), Some(2048));
    assert_eq!(FileStore::new(path.clone()).get().unwrap(), Some(2048));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_file_store_corrupt_file_counts_as_zero() {
    let path = temp_path("corrupt");
    fs::write(&path, "not json").unwrap();

    let store = FileStore::new(path.clone());
    assert!(store.get().is_err());
    assert_eq!(Scoreboard::new(store).best(), 0);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_scoreboard_persists_through_file_store() {
    let path = temp_path("scoreboard");

    let mut scoreboard = Scoreboard::new(FileStore::new(path.clone()));
    scoreboard.record(96);
    drop(scoreboard);

    assert_eq!(Scoreboard::new(FileStore::new(path.clone())).best(), 96);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_unwritable_file_store_is_not_fatal() {
    let path = std::env::temp_dir()
        .join(format!("twenty48-missing-dir-{}", std::process::id()))
        .join("best.json");
    let mut scoreboard = Scoreboard::new(FileStore::new(path));

    assert!(scoreboard.record(8));
    assert_eq!(scoreboard.best(), 8);
}

use std::cell::RefCell;
use std::rc::Rc;

use twenty48::{
    audio::{Audio, Cue, Jukebox},
    engine::GridEngine,
    grid::{Direction, Grid},
    input::Command,
    render::GameEvent,
    score::{MemoryStore, Scoreboard},
    session::Session,
};

const TEST_SEED: u64 = 42;

#[derive(Clone, Default)]
struct RecordingAudio {
    played: Rc<RefCell<Vec<Cue>>>,
}

impl Audio for RecordingAudio {
    fn play(&mut self, cue: Cue) -> Result<(), String> {
        self.played.borrow_mut().push(cue);
        Ok(())
    }
}

struct FailingAudio;

impl Audio for FailingAudio {
    fn play(&mut self, _cue: Cue) -> Result<(), String> {
        Err("autoplay blocked".to_string())
    }
}

fn engine_from(rows: [[u32; 4]; 4]) -> GridEngine {
    let grid = Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap();
    GridEngine::from_grid(grid, 0, TEST_SEED).unwrap()
}

fn session_with(engine: GridEngine, best: Option<u64>, audio: Box<dyn Audio>) -> Session<MemoryStore> {
    Session::new(
        engine,
        Scoreboard::new(MemoryStore::new(best)),
        Jukebox::new(audio),
    )
}

// One move right fills the last hole and leaves nothing to merge
const ALMOST_OVER: [[u32; 4]; 4] = [
    [2, 4, 2, 4],
    [4, 2, 4, 2],
    [32, 4, 2, 4],
    [8, 16, 8, 0],
];

#[test]
fn test_merge_raises_best_and_plays_move_cue() {
    let audio = RecordingAudio::default();
    let mut session = session_with(
        engine_from([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        None,
        Box::new(audio.clone()),
    );

    let events = session.handle(Command::Move(Direction::Left));

    assert_eq!(
        events,
        vec![GameEvent::NewBest(4), GameEvent::Moved { score_delta: 4 }]
    );
    assert_eq!(session.scoreboard().best(), 4);
    assert_eq!(*audio.played.borrow(), vec![Cue::Move]);
}

#[test]
fn test_ineffective_move_is_silent() {
    let audio = RecordingAudio::default();
    let mut session = session_with(
        engine_from([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        None,
        Box::new(audio.clone()),
    );

    assert!(session.handle(Command::Move(Direction::Up)).is_empty());
    assert!(session.handle(Command::Move(Direction::Left)).is_empty());
    assert!(audio.played.borrow().is_empty());
    assert_eq!(session.engine().tile_count(), 1);
}

#[test]
fn test_last_move_ends_the_game() {
    let audio = RecordingAudio::default();
    let mut session = session_with(engine_from(ALMOST_OVER), Some(1000), Box::new(audio.clone()));

    let events = session.handle(Command::Move(Direction::Right));

    assert_eq!(
        events,
        vec![GameEvent::Moved { score_delta: 0 }, GameEvent::GameOver]
    );
    assert!(session.engine().is_terminal());
    assert!(session.view().game_over);
    assert_eq!(*audio.played.borrow(), vec![Cue::Move, Cue::GameOver]);

    // nothing moves any more
    for direction in Direction::ALL {
        assert!(session.handle(Command::Move(direction)).is_empty());
    }
}

#[test]
fn test_audio_failures_do_not_reach_the_game() {
    let mut session = session_with(engine_from(ALMOST_OVER), None, Box::new(FailingAudio));

    let events = session.handle(Command::Move(Direction::Right));

    assert!(events.contains(&GameEvent::GameOver));
    assert_eq!(session.jukebox().played(Cue::Move), 1);
    assert_eq!(session.jukebox().played(Cue::GameOver), 1);
}

#[test]
fn test_muted_jukebox_plays_nothing() {
    let audio = RecordingAudio::default();
    let mut jukebox = Jukebox::new(Box::new(audio.clone()));
    jukebox.set_muted(true);

    let mut session = Session::new(
        engine_from(ALMOST_OVER),
        Scoreboard::new(MemoryStore::default()),
        jukebox,
    );

    session.handle(Command::Move(Direction::Right));

    assert!(audio.played.borrow().is_empty());
    assert_eq!(session.jukebox().played(Cue::Move), 0);
}

#[test]
fn test_restart_keeps_best_and_resets_score() {
    let mut session = session_with(
        engine_from([
            [4, 4, 8, 8],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        None,
        Box::new(RecordingAudio::default()),
    );

    session.handle(Command::Move(Direction::Left));
    assert_eq!(session.engine().score(), 24);

    let events = session.handle(Command::Restart);

    assert_eq!(events, vec![GameEvent::Restarted]);
    assert_eq!(session.engine().score(), 0);
    assert_eq!(session.engine().tile_count(), 2);
    assert_eq!(session.view().best, 24);
}

#[test]
fn test_quit_is_recorded() {
    let mut session = session_with(GridEngine::with_seed(TEST_SEED), None, Box::new(RecordingAudio::default()));

    assert!(!session.quit_requested());
    assert!(session.handle(Command::Quit).is_empty());
    assert!(session.quit_requested());
}

#[test]
fn test_best_equals_highest_score_over_many_moves() {
    let mut session = session_with(GridEngine::with_seed(TEST_SEED), Some(0), Box::new(RecordingAudio::default()));
    let mut highest = 0;

    for direction in [Direction::Left, Direction::Down, Direction::Right, Direction::Up].repeat(50) {
        session.handle(Command::Move(direction));
        highest = highest.max(session.engine().score());

        assert_eq!(session.scoreboard().best(), highest);
    }
}

#![cfg(feature = "cli")]

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

use twenty48::{
    app::run_session,
    audio::Jukebox,
    engine::GridEngine,
    grid::Grid,
    render::console_renderer::ConsoleRenderer,
    render::{BoardView, GameEvent, Renderer},
    score::{MemoryStore, Scoreboard},
    session::Session,
};

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Remembers every event and the score at finalize
#[derive(Clone, Default)]
struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
    final_score: Rc<RefCell<Option<u64>>>,
}

impl Renderer for EventLog {
    type Error = String;

    fn initialize(&mut self, _view: &BoardView) -> Result<(), Self::Error> {
        Ok(())
    }

    fn handle_event(&mut self, event: &GameEvent) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }

    fn finalize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        *self.final_score.borrow_mut() = Some(view.score);
        Ok(())
    }
}

fn session() -> Session<MemoryStore> {
    let grid = Grid::from_rows(vec![
        vec![2, 2, 4, 4],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();

    Session::new(
        GridEngine::from_grid(grid, 0, 9).unwrap(),
        Scoreboard::new(MemoryStore::default()),
        Jukebox::silent(),
    )
}

#[test]
fn test_console_game_runs_until_quit() {
    let output = SharedBuffer::default();
    let log = EventLog::default();
    let mut session = session();

    let renderers: Vec<Box<dyn Renderer<Error = String>>> = vec![
        Box::new(ConsoleRenderer::new(Cursor::new("a\nq\nd\n"), output.clone())),
        Box::new(log.clone()),
    ];

    run_session(&mut session, renderers).unwrap();

    let events = log.events.borrow();
    assert_eq!(events[0], GameEvent::Started);
    assert!(events.contains(&GameEvent::Moved { score_delta: 12 }));
    assert!(events.contains(&GameEvent::NewBest(12)));

    // "d" after "q" is never read
    assert_eq!(session.engine().score(), 12);
    assert_eq!(*log.final_score.borrow(), Some(12));

    let text = String::from_utf8(output.0.borrow().clone()).unwrap();
    assert!(text.contains("Final score: 12  Best: 12"));
}

#[test]
fn test_console_game_stops_at_end_of_input() {
    let log = EventLog::default();
    let mut session = session();

    let renderers: Vec<Box<dyn Renderer<Error = String>>> = vec![
        Box::new(ConsoleRenderer::new(Cursor::new("r\n"), Vec::new())),
        Box::new(log.clone()),
    ];

    run_session(&mut session, renderers).unwrap();

    assert!(log.events.borrow().contains(&GameEvent::Restarted));
    assert_eq!(session.engine().score(), 0);
    assert_eq!(*log.final_score.borrow(), Some(0));
}

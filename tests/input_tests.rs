use twenty48::{
    grid::Direction,
    input::{console_command, key_command, Command, Swipe},
};

#[test]
fn test_arrow_keys_map_to_moves() {
    assert_eq!(key_command("ArrowUp"), Some(Command::Move(Direction::Up)));
    assert_eq!(key_command("ArrowDown"), Some(Command::Move(Direction::Down)));
    assert_eq!(key_command("ArrowLeft"), Some(Command::Move(Direction::Left)));
    assert_eq!(key_command("ArrowRight"), Some(Command::Move(Direction::Right)));
    assert_eq!(key_command("r"), Some(Command::Restart));
    assert_eq!(key_command("Escape"), Some(Command::Quit));
    assert_eq!(key_command("Enter"), None);
}

#[test]
fn test_console_commands() {
    assert_eq!(console_command("w\n"), Some(Command::Move(Direction::Up)));
    assert_eq!(console_command(" J "), Some(Command::Move(Direction::Down)));
    assert_eq!(console_command("left"), Some(Command::Move(Direction::Left)));
    assert_eq!(console_command("d"), Some(Command::Move(Direction::Right)));
    assert_eq!(console_command("restart"), Some(Command::Restart));
    assert_eq!(console_command("q"), Some(Command::Quit));
    assert_eq!(console_command(""), None);
    assert_eq!(console_command("jump"), None);
}

#[test]
fn test_swipe_larger_axis_wins() {
    let swipe = Swipe::start(100.0, 100.0);

    assert_eq!(swipe.finish(180.0, 120.0), Some(Direction::Right));
    assert_eq!(swipe.finish(20.0, 70.0), Some(Direction::Left));
    assert_eq!(swipe.finish(110.0, 190.0), Some(Direction::Down));
    assert_eq!(swipe.finish(95.0, 10.0), Some(Direction::Up));
}

#[test]
fn test_swipe_ties_go_vertical() {
    let swipe = Swipe::start(0.0, 0.0);

    assert_eq!(swipe.finish(30.0, 30.0), Some(Direction::Down));
    assert_eq!(swipe.finish(30.0, -30.0), Some(Direction::Up));
}

#[test]
fn test_tap_is_not_a_swipe() {
    assert_eq!(Swipe::start(42.0, 7.0).finish(42.0, 7.0), None);
}

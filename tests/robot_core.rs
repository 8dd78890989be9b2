// tests/robot_core.rs
use glam::IVec2;
use tabletop_robot::{COORDINATE_RANGE, DIRECTIONS, Direction, Robot};

/// Shorthand for the original "make valid" helper: a default placement.
fn placed() -> Robot {
    let mut robot = Robot::new();
    robot.place(IVec2::ZERO, Some(Direction::East));
    robot
}

#[test]
fn directions_are_in_turn_order() {
    // Left turns walk this sequence forward; the order is part of the contract.
    let expected = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];
    assert_eq!(DIRECTIONS, expected);
    assert_eq!(DIRECTIONS.len(), 4);
    for (i, d) in DIRECTIONS.into_iter().enumerate() {
        assert_eq!(d.index(), i);
    }
}

#[test]
fn coordinate_range_is_the_5x5_grid() {
    assert_eq!(COORDINATE_RANGE, 0..=4);
}

#[test]
fn invalid_before_the_first_place() {
    let robot = Robot::new();
    assert!(!robot.is_valid());
    assert_eq!(robot.position(), IVec2::splat(-1));
    assert_eq!(robot.heading(), None);
}

#[test]
fn valid_after_the_first_place() {
    assert!(placed().is_valid());
}

#[test]
fn can_advance_in_every_direction() {
    let mut robot = placed();
    let start = IVec2::new(2, 2);
    let destinations = [
        (Direction::East, IVec2::new(3, 2)),
        (Direction::North, IVec2::new(2, 3)),
        (Direction::West, IVec2::new(1, 2)),
        (Direction::South, IVec2::new(2, 1)),
    ];
    for (direction, destination) in destinations {
        robot.reposition(start);
        robot.orient(Some(direction));
        robot.advance();
        assert_eq!(robot.heading(), Some(direction));
        assert_eq!(robot.position(), destination);
    }
}

#[test]
fn reposition_is_unchecked() {
    let mut robot = Robot::new();
    let off_table = IVec2::new(-1, -1);
    robot.reposition(off_table);
    assert_eq!(robot.position(), off_table);
}

#[test]
fn validity_tracks_position() {
    let mut robot = placed();
    robot.reposition(IVec2::ZERO);
    assert!(robot.is_valid());
    for bad in [IVec2::new(-1, -1), IVec2::new(5, 5), IVec2::new(-1, 5)] {
        robot.reposition(bad);
        assert!(!robot.is_valid(), "({}, {}) should be off-table", bad.x, bad.y);
    }
}

#[test]
fn validity_tracks_heading() {
    let mut robot = placed();
    for direction in DIRECTIONS {
        robot.orient(Some(direction));
        assert!(robot.is_valid());
    }
    robot.orient(None);
    assert!(!robot.is_valid());
}

#[test]
fn turn_left_cycles_through_all_directions() {
    let mut robot = placed();
    for expected in [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ] {
        robot.turn_left();
        assert_eq!(robot.heading(), Some(expected));
    }
}

#[test]
fn turn_right_cycles_through_all_directions() {
    let mut robot = placed();
    for expected in [
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::East,
    ] {
        robot.turn_right();
        assert_eq!(robot.heading(), Some(expected));
    }
}

#[test]
fn opposite_turns_cancel() {
    let mut robot = placed();
    robot.turn_left();
    robot.turn_right();
    robot.turn_right();
    robot.turn_left();
    assert_eq!(robot.heading(), Some(Direction::East));
}

#[test]
fn revert_restores_position() {
    let mut robot = placed();
    robot.reposition(IVec2::new(1, 1));
    assert_eq!(robot.position(), IVec2::new(1, 1));
    robot.revert();
    assert_eq!(robot.position(), IVec2::ZERO);
}

#[test]
fn revert_restores_heading() {
    let mut robot = placed();
    robot.orient(Some(Direction::North));
    assert_eq!(robot.heading(), Some(Direction::North));
    robot.revert();
    assert_eq!(robot.heading(), Some(Direction::East));
}

#[test]
fn undo_depth_is_exactly_one() {
    let mut robot = placed();
    robot.reposition(IVec2::new(1, 0));
    robot.reposition(IVec2::new(2, 0));
    robot.revert();
    // Only the immediately preceding state is recoverable.
    assert_eq!(robot.position(), IVec2::new(1, 0));
}

#[test]
fn direction_parses_case_insensitively() {
    assert_eq!("west".parse::<Direction>(), Ok(Direction::West));
    assert_eq!("West".parse::<Direction>(), Ok(Direction::West));
    assert_eq!("WEST".parse::<Direction>(), Ok(Direction::West));
    assert!("bad".parse::<Direction>().is_err());
}

#[test]
fn direction_displays_upper_case() {
    assert_eq!(Direction::North.to_string(), "NORTH");
    assert_eq!(Direction::East.to_string(), "EAST");
}

#[test]
#[should_panic(expected = "turn step must be +1 or -1")]
fn turn_rejects_other_steps() {
    placed().turn(2);
}

#[test]
#[should_panic(expected = "advance called without a compass heading")]
fn advance_requires_a_heading() {
    Robot::new().advance();
}

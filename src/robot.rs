//! Raw robot state and unchecked geometric transitions.

use crate::table::{self, DIRECTIONS, Direction};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The observable state of the robot.
///
/// `heading: None` models a robot that has never been given a usable compass
/// direction; together with an off-table position it is the "never placed"
/// state every session starts in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    /// Current tabletop coordinates.
    pub position: IVec2,

    /// Current compass heading, if one has been established.
    pub heading: Option<Direction>,
}

impl Default for RobotState {
    fn default() -> Self {
        // One below the range start on both axes: deliberately off the table.
        let off = *table::COORDINATE_RANGE.start() - 1;
        Self {
            position: IVec2::splat(off),
            heading: None,
        }
    }
}

impl RobotState {
    /// True iff the position is on the table and a heading is set.
    pub fn is_valid(&self) -> bool {
        table::on_table(self.position) && self.heading.is_some()
    }
}

/// The unchecked robot: mechanical transitions plus a one-level undo.
///
/// Every mutating operation snapshots the current state first; [`Robot::revert`]
/// swaps the snapshot back in. Only the immediately preceding state is
/// recoverable. Nothing here validates anything; bounds enforcement lives in
/// [`SafeRobot`](crate::safe::SafeRobot).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Robot {
    state: RobotState,
    saved: RobotState,
}

impl Robot {
    /// Creates a robot in the invalid "never placed" state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    pub fn heading(&self) -> Option<Direction> {
        self.state.heading
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// Unconditionally overwrites position and heading, saving the prior state.
    pub fn place(&mut self, position: IVec2, heading: Option<Direction>) {
        self.saved = self.state;
        self.state = RobotState { position, heading };
    }

    /// Sets a new position, saving the prior state as the undo point.
    pub fn reposition(&mut self, position: IVec2) {
        self.saved = self.state;
        self.state.position = position;
    }

    /// Sets a new heading, saving the prior state as the undo point.
    pub fn orient(&mut self, heading: Option<Direction>) {
        self.saved = self.state;
        self.state.heading = heading;
    }

    /// Advances one square in the current heading.
    ///
    /// # Panics
    ///
    /// Panics if no heading is set. Callers that cannot rule this out must go
    /// through [`SafeRobot`](crate::safe::SafeRobot), which guards first.
    pub fn advance(&mut self) {
        let heading = match self.state.heading {
            Some(d) => d,
            None => panic!("advance called without a compass heading"),
        };
        self.reposition(self.state.position + heading.increment());
    }

    /// Rotates one step through the direction cycle: `+1` for left, `-1` for right.
    ///
    /// # Panics
    ///
    /// Panics if `step` is anything other than `+1`/`-1`, or if no heading is
    /// set. Both are programming-contract violations, not user errors.
    pub fn turn(&mut self, step: i8) {
        assert!(step == 1 || step == -1, "turn step must be +1 or -1");
        let heading = match self.state.heading {
            Some(d) => d,
            None => panic!("turn called without a compass heading"),
        };
        let len = DIRECTIONS.len() as i8;
        // +len keeps the sum nonnegative before the modulo.
        let index = (heading.index() as i8 + len + step) % len;
        self.orient(Some(DIRECTIONS[index as usize]));
    }

    pub fn turn_left(&mut self) {
        self.turn(1);
    }

    pub fn turn_right(&mut self) {
        self.turn(-1);
    }

    /// Restores the single saved snapshot by swapping it with the current
    /// state. Does not cascade further back.
    pub fn revert(&mut self) {
        std::mem::swap(&mut self.state, &mut self.saved);
    }

    /// True iff the position is on the table and a heading is set.
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }
}

//! Validating wrapper around [`Robot`]: guard, speculative mutation, rollback.

use crate::robot::Robot;
use crate::table::Direction;
use glam::IVec2;
use thiserror::Error;

/// Recoverable robot-level failures. The `Display` forms are the exact
/// strings the command loop hands back to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RobotError {
    /// The robot has no valid state yet, so nothing but PLACE may act on it.
    #[error("Must start with a valid Place command")]
    NotPlaced,

    /// The attempted operation produced an invalid state and was rolled back.
    #[error("Invalid")]
    Rejected,
}

/// A robot that cannot be driven off the table.
///
/// Wraps an owned [`Robot`] and brackets every mutating operation with a
/// guard/check-after protocol:
///
/// - **guard**: an operation on an invalid (never placed) robot is refused
///   outright with [`RobotError::NotPlaced`], before any state changes.
/// - **check-after**: the operation is then performed speculatively; if the
///   resulting state is invalid the snapshot is reverted and the caller gets
///   [`RobotError::Rejected`].
///
/// Both halves are needed: whether a MOVE lands on the table is only knowable
/// after the mutation, so rejection alone cannot keep the state legal.
/// `place` skips the guard (it must work from the unplaced state) but is
/// still subject to check-after.
#[derive(Clone, Debug, Default)]
pub struct SafeRobot {
    robot: Robot,
}

impl SafeRobot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> IVec2 {
        self.robot.position()
    }

    pub fn heading(&self) -> Option<Direction> {
        self.robot.heading()
    }

    fn guard(&self) -> Result<(), RobotError> {
        if self.robot.is_valid() {
            Ok(())
        } else {
            Err(RobotError::NotPlaced)
        }
    }

    fn check_after(&mut self) -> Result<(), RobotError> {
        if self.robot.is_valid() {
            Ok(())
        } else {
            self.robot.revert();
            Err(RobotError::Rejected)
        }
    }

    /// Places the robot, defaulting unparseable direction words to no heading
    /// so that check-after rejects them.
    ///
    /// This is the one operation allowed while unplaced; a rejected placement
    /// leaves the prior state untouched.
    pub fn place(&mut self, position: IVec2, heading: &str) -> Result<(), RobotError> {
        let heading = heading.parse::<Direction>().ok();
        self.robot.place(position, heading);
        self.check_after()
    }

    /// Moves one square forward, rolling back if that would leave the table.
    pub fn advance(&mut self) -> Result<(), RobotError> {
        self.guard()?;
        self.robot.advance();
        self.check_after()
    }

    pub fn turn_left(&mut self) -> Result<(), RobotError> {
        self.guard()?;
        self.robot.turn_left();
        self.check_after()
    }

    pub fn turn_right(&mut self) -> Result<(), RobotError> {
        self.guard()?;
        self.robot.turn_right();
        self.check_after()
    }

    /// Reports the current position and heading, e.g. `At [2, 3], facing WEST`.
    ///
    /// Guarded like the mutating operations: before a valid PLACE there is
    /// nothing meaningful to report.
    pub fn report(&self) -> Result<String, RobotError> {
        self.guard()?;
        let position = self.robot.position();
        // Guard passed, so a heading is set.
        let heading = match self.robot.heading() {
            Some(d) => d,
            None => unreachable!(),
        };
        Ok(format!(
            "At [{}, {}], facing {}",
            position.x, position.y, heading
        ))
    }
}

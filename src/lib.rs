//! # tabletop-robot
//!
//! A validated command interpretation layer for a toy robot on a bounded
//! 5×5 tabletop.
//!
//! Text lines (`PLACE [x, y[, DIRECTION]]`, `MOVE`, `LEFT`, `RIGHT`,
//! `REPORT`) flow through [`CommandProcessor`], which tokenizes and validates
//! them and dispatches to a [`SafeRobot`]. The safe layer brackets each
//! mutation of the raw [`Robot`] with a guard/check-after protocol, rolling
//! back any transition that would leave the table. Every outcome comes back
//! to the caller as a plain string ready to print.

pub mod command;
pub mod robot;
pub mod safe;
pub mod table;

pub use command::*;
pub use robot::*;
pub use safe::*;
pub use table::*;

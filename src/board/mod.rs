//! Board state and win detection.
//!
//! - `Board`: fixed-dimension square grid with clone, placement,
//!   enumeration and win/draw detection
//! - `Decision`: tri-state outcome (winner, tie, pending)
//! - `lines`: row/column/diagonal enumeration in win-detection order

mod decision;
mod grid;
pub mod lines;

pub use decision::Decision;
pub use grid::{Board, BoardSnapshot, EmptyCells};
pub use lines::{Line, LineKind};

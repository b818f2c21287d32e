//! The live-scoring engine: delivery processing, over/innings progression,
//! bowler rotation, strike rotation, and undo/redo.

pub mod bowling;
pub mod delivery;
pub mod progression;
pub mod strike;
pub mod undo;


pub use bowling::{can_bowl_next_over, eligible_bowlers, set_next_bowler};
pub use delivery::{apply, DeliveryOutcome};
pub use progression::{is_innings_complete, is_over_complete};
pub use strike::should_rotate;
pub use undo::{redo, undo, UndoRedo};

//! Domain entities
//!
//! Typed, read-only models built from tracker API documents. Each is built
//! once from a response snapshot and never updated afterwards.

pub mod iteration;
pub mod portfolio;
pub mod project;
pub mod story;
pub mod tally;

pub use iteration::{states_in, Iteration, IterationId, OwnerIndex};
pub use portfolio::{Portfolio, WorkInfo, BUGS_KEY, CHORES_KEY};
pub use project::{Project, ProjectId};
pub use story::{Story, StoryId, StoryState, StoryType};
pub use tally::{CategoryLabel, OwnerProfile, PointTally, WorkProfile, NONE_LABEL};

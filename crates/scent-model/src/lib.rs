//! Data model for scent-work tournament standings.
//!
//! Every type here is a plain value. Stages of the pipeline consume these
//! values and produce new ones; nothing is shared mutably across stages.

pub mod category;
pub mod enums;
pub mod error;
pub mod ids;
pub mod result;
pub mod standing;

pub use category::{Category, CategoryTable};
pub use enums::{LEVEL_B_MAX_EVENT_POINTS, Level};
pub use error::{ModelError, Result};
pub use ids::{EventIndex, Participant, ParticipantId, ParticipantRegistry};
pub use result::{EventRanking, EventResults, RankedResult, RawResult};
pub use standing::{AggregatedStanding, Placement, TournamentPointEntry};

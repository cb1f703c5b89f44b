//! Error types for scoring and aggregation.

use thiserror::Error;

use scent_model::{EventIndex, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A participant has more than one result or point entry for an event.
    #[error("participant {participant} has more than one entry for event {event}")]
    DuplicateEventIndex {
        participant: ParticipantId,
        event: EventIndex,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;

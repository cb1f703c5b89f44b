#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one handler/dog team for the whole run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ParticipantId(u32);

impl ParticipantId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of one event (a single search, or a whole round) within a run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventIndex(u32);

impl EventIndex {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A handler/dog team as it appears in the source sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub handler: String,
    pub animal: String,
    /// Start number from a search sheet, when the source had one.
    pub start_number: Option<u32>,
}

/// Lookup table from (handler, animal) to an explicitly assigned id.
///
/// Ids are issued sequentially from 1 in first-seen order and never reused.
#[derive(Debug, Clone, Default)]
pub struct ParticipantRegistry {
    by_key: BTreeMap<(String, String), ParticipantId>,
    participants: Vec<Participant>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for the team, registering it on first sight.
    ///
    /// Names are compared after trimming surrounding whitespace. The entry
    /// recorded on first sight is kept as is.
    pub fn register(
        &mut self,
        handler: &str,
        animal: &str,
        start_number: Option<u32>,
    ) -> ParticipantId {
        let key = (handler.trim().to_string(), animal.trim().to_string());
        if let Some(&id) = self.by_key.get(&key) {
            return id;
        }
        let id = ParticipantId::new(self.participants.len() as u32 + 1);
        self.participants.push(Participant {
            id,
            handler: key.0.clone(),
            animal: key.1.clone(),
            start_number,
        });
        self.by_key.insert(key, id);
        id
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        let slot = (id.get() as usize).checked_sub(1)?;
        self.participants.get(slot)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_first_seen_order() {
        let mut registry = ParticipantRegistry::new();
        let anna = registry.register("Anna", "Rex", Some(4));
        let bo = registry.register("Bo", "Kiwi", None);
        let again = registry.register(" Anna ", "Rex", None);

        assert_eq!(anna, ParticipantId::new(1));
        assert_eq!(bo, ParticipantId::new(2));
        assert_eq!(again, anna);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(anna).unwrap().start_number, Some(4));
    }

    #[test]
    fn same_handler_with_other_dog_is_new_team() {
        let mut registry = ParticipantRegistry::new();
        let first = registry.register("Anna", "Rex", None);
        let second = registry.register("Anna", "Zelda", None);
        assert_ne!(first, second);
        assert_eq!(registry.get(second).unwrap().animal, "Zelda");
    }

    #[test]
    fn first_registration_is_kept() {
        let mut registry = ParticipantRegistry::new();
        let id = registry.register("Bo", "Kiwi", Some(9));
        registry.register("Bo", "Kiwi", Some(11));
        assert_eq!(registry.get(id).unwrap().start_number, Some(9));
        assert!(registry.get(ParticipantId::new(0)).is_none());
    }
}

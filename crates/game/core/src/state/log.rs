use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Bounded, chronological message log.
///
/// New messages are appended at the back; once `capacity` is reached the
/// oldest message is dropped from the front. Index 0 is always the oldest
/// retained message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    capacity: usize,
    messages: ArrayVec<String, { GameConfig::MAX_MESSAGES }>,
}

impl MessageLog {
    /// Creates an empty log. `capacity` is clamped to `1..=MAX_MESSAGES`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.clamp(1, GameConfig::MAX_MESSAGES),
            messages: ArrayVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.messages.len() >= self.capacity {
            self.messages.remove(0);
        }
        self.messages.push(message.into());
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message.
    pub fn latest(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Owned copy for presentation layers.
    pub fn snapshot(&self) -> Vec<String> {
        self.messages.to_vec()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_MESSAGE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_oldest_when_full() {
        let mut log = MessageLog::new(4);
        for i in 1..=6 {
            log.push(format!("m{i}"));
        }
        assert_eq!(log.snapshot(), vec!["m3", "m4", "m5", "m6"]);
        assert_eq!(log.latest(), Some("m6"));
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(MessageLog::new(0).capacity(), 1);
        assert_eq!(MessageLog::new(1_000).capacity(), GameConfig::MAX_MESSAGES);
        let mut log = MessageLog::new(1_000);
        for i in 0..40 {
            log.push(format!("{i}"));
        }
        assert_eq!(log.len(), GameConfig::MAX_MESSAGES);
        assert_eq!(log.iter().next(), Some("24"));
    }
}

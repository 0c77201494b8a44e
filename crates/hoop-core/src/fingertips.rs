use crate::constants::CHANNEL_COUNT;
use glam::Vec2;
use smallvec::SmallVec;

/// (detected hand slot, fingertip landmark) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FingertipKey {
    pub hand: u8,
    pub tip: u8,
}

impl FingertipKey {
    pub fn new(hand: usize, tip: usize) -> Self {
        Self {
            hand: hand as u8,
            tip: tip as u8,
        }
    }
}

/// Last known surface position of every fingertip seen this session.
///
/// Holds at most one entry per key; two hands of five tips fit inline.
/// Entries for fingertips that disappear are kept until they reappear or
/// the history is cleared.
#[derive(Clone, Debug, Default)]
pub struct FingertipHistory {
    entries: SmallVec<[(FingertipKey, Vec2); CHANNEL_COUNT]>,
}

impl FingertipHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FingertipKey) -> Option<Vec2> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| *p)
    }

    /// Store `pos` for `key`, returning the previous position if any.
    pub fn record(&mut self, key: FingertipKey, pos: Vec2) -> Option<Vec2> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, p)) => Some(std::mem::replace(p, pos)),
            None => {
                self.entries.push((key, pos));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_replaces_existing_entry() {
        let mut h = FingertipHistory::new();
        let k = FingertipKey::new(0, 8);
        assert_eq!(h.record(k, Vec2::new(1.0, 2.0)), None);
        assert_eq!(h.record(k, Vec2::new(3.0, 4.0)), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(h.len(), 1);
        assert_eq!(h.get(k), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn ten_keys_stay_inline_and_clear() {
        let mut h = FingertipHistory::new();
        for hand in 0..2 {
            for tip in [4, 8, 12, 16, 20] {
                h.record(FingertipKey::new(hand, tip), Vec2::ZERO);
            }
        }
        assert_eq!(h.len(), 10);
        assert!(!h.entries.spilled());
        h.clear();
        assert!(h.is_empty());
    }
}

//! Immutable detection catalog with a frame index built once at load.

use std::collections::BTreeMap;

use crate::engine::detection::DetectionRecord;

#[derive(Debug, Clone, Default)]
pub struct DetectionCatalog {
    records: Vec<DetectionRecord>,
    by_frame: BTreeMap<i64, Vec<usize>>,
}

impl DetectionCatalog {
    pub fn new(records: Vec<DetectionRecord>) -> Self {
        let mut by_frame: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_frame.entry(record.frame).or_default().push(idx);
        }
        Self { records, by_frame }
    }

    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct analyzed frames in ascending order.
    pub fn frames(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_frame.keys().copied()
    }

    /// Records of exactly one frame, in catalog order.
    pub fn at_frame(&self, frame: i64) -> Vec<&DetectionRecord> {
        self.by_frame
            .get(&frame)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Records with `first <= frame <= last`, in catalog order.
    pub fn window(&self, first: i64, last: i64) -> Vec<&DetectionRecord> {
        if first > last {
            return Vec::new();
        }
        let mut indices: Vec<usize> = self
            .by_frame
            .range(first..=last)
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        indices.sort_unstable();
        indices.into_iter().map(|i| &self.records[i]).collect()
    }
}

impl From<Vec<DetectionRecord>> for DetectionCatalog {
    fn from(records: Vec<DetectionRecord>) -> Self {
        Self::new(records)
    }
}

use crate::oem::{OemDataset, OemHeader, OemMetadata, StateVector};

/// Owns the currently loaded ephemeris. Mutable only as a whole: the record
/// sequence is fully replaced by a reload and fully emptied by a clear, no
/// partial or append mutation. Callers share it behind a reader/writer lock
/// so a mutation is never observed mid-way.
///
/// `replace` trusts the record parser to hand over epoch-sorted,
/// unit-consistent data; no validation or re-sorting happens here.
#[derive(Debug, Default)]
pub struct TrajectoryStore {
    records: Vec<StateVector>,
    header: Option<OemHeader>,
    metadata: Option<OemMetadata>,
    comments: Vec<String>,
}

impl TrajectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitutes the entire store contents with a freshly parsed dataset.
    pub fn replace(&mut self, dataset: OemDataset) {
        self.records = dataset.records;
        self.header = Some(dataset.header);
        self.metadata = Some(dataset.metadata);
        self.comments = dataset.comments;
    }

    /// Empties the record sequence. The descriptive blocks keep describing
    /// the last dataset that was loaded.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[StateVector] {
        &self.records
    }

    pub fn header(&self) -> Option<&OemHeader> {
        self.header.as_ref()
    }

    pub fn metadata(&self) -> Option<&OemMetadata> {
        self.metadata.as_ref()
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> OemDataset {
        OemDataset {
            header: OemHeader {
                creation_date: "2023-062T20:02:19.972Z".to_string(),
                originator: "JSC".to_string(),
            },
            metadata: OemMetadata {
                object_name: "ISS".to_string(),
                object_id: "1998-067-A".to_string(),
                center_name: "EARTH".to_string(),
                ref_frame: "EME2000".to_string(),
                time_system: "UTC".to_string(),
                start_time: "2023-058T12:00:00.000Z".to_string(),
                stop_time: "2023-058T12:04:00.000Z".to_string(),
            },
            comments: vec!["MASS=459154.20".to_string()],
            records: vec![
                StateVector {
                    epoch: "2023-058T12:00:00.000Z".to_string(),
                    position: [6800.0, 0.0, 0.0],
                    velocity: [0.0, 7.5, 0.0],
                },
                StateVector {
                    epoch: "2023-058T12:04:00.000Z".to_string(),
                    position: [-291.5, -5916.1, 3396.4],
                    velocity: [-3.29, 2.87, 4.94],
                },
            ],
        }
    }

    #[test]
    fn replace_then_records_round_trips_in_order() {
        let data = dataset();
        let expected = data.records.clone();
        let mut store = TrajectoryStore::new();
        store.replace(data);
        assert_eq!(store.records(), expected.as_slice());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_the_sequence() {
        let mut store = TrajectoryStore::new();
        store.replace(dataset());
        store.clear();
        assert!(store.is_empty());
        assert!(store.records().is_empty());
        // Descriptive blocks survive a clear.
        assert!(store.header().is_some());
        assert_eq!(store.comments().len(), 1);
    }

    #[test]
    fn replace_overwrites_previous_contents() {
        let mut store = TrajectoryStore::new();
        store.replace(dataset());

        let mut next = dataset();
        next.records.truncate(1);
        store.replace(next);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_store_is_empty_with_no_descriptive_blocks() {
        let store = TrajectoryStore::new();
        assert!(store.is_empty());
        assert!(store.header().is_none());
        assert!(store.metadata().is_none());
        assert!(store.comments().is_empty());
    }
}

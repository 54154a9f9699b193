use super::epoch;
use crate::oem::StateVector;

/// Result of a nearest-to-time search: the winning record's index and the
/// signed difference `reference - epoch` in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub index: usize,
    pub time_difference_seconds: f64,
}

/// Windows the epoch strings of the sequence, preserving store order.
///
/// An out-of-range offset yields an empty list, never an error. Negative
/// values keep the lenient semantics of the reference behavior: a negative
/// offset starts at the beginning and a negative limit means "no limit".
pub fn list_epochs(records: &[StateVector], offset: i64, limit: i64) -> Vec<String> {
    let skip = offset.max(0) as usize;
    let take = if limit < 0 {
        records.len()
    } else {
        limit as usize
    };
    records
        .iter()
        .skip(skip)
        .take(take)
        .map(|record| record.epoch.clone())
        .collect()
}

/// First record whose epoch equals the argument exactly (case-sensitive,
/// full-string, no normalization). Absence is an ordinary `None`.
pub fn find_by_epoch<'a>(records: &'a [StateVector], epoch: &str) -> Option<&'a StateVector> {
    records.iter().find(|record| record.epoch == epoch)
}

/// Scans the full sequence for the record whose epoch is closest to the
/// reference time (Unix seconds). Strict `<` comparison on the absolute
/// difference keeps the first-encountered record on ties. Records whose
/// epoch fails the format contract are skipped with a warning.
///
/// The reference time is an explicit parameter so callers own the clock.
pub fn find_nearest_to_time(records: &[StateVector], reference_unix_seconds: f64) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;
    for (index, record) in records.iter().enumerate() {
        let epoch_seconds = match epoch::unix_seconds_local(&record.epoch) {
            Ok(seconds) => seconds,
            Err(err) => {
                log::warn!("skipping record in nearest-time search: {err}");
                continue;
            }
        };
        let difference = reference_unix_seconds - epoch_seconds;
        let closer = match best {
            Some(current) => difference.abs() < current.time_difference_seconds.abs(),
            None => true,
        };
        if closer {
            best = Some(Nearest {
                index,
                time_difference_seconds: difference,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn record(epoch: &str) -> StateVector {
        StateVector {
            epoch: epoch.to_string(),
            position: [6800.0, 0.0, 0.0],
            velocity: [0.0, 7.5, 0.0],
        }
    }

    fn sequence() -> Vec<StateVector> {
        vec![
            record("2023-058T12:00:00.000Z"),
            record("2023-058T12:04:00.000Z"),
            record("2023-058T12:08:00.000Z"),
            record("2023-058T12:12:00.000Z"),
        ]
    }

    #[test]
    fn list_epochs_full_window_returns_everything_in_order() {
        let records = sequence();
        let epochs = list_epochs(&records, 0, records.len() as i64);
        assert_eq!(epochs.len(), records.len());
        for (listed, stored) in epochs.iter().zip(&records) {
            assert_eq!(listed, &stored.epoch);
        }
    }

    #[test]
    fn list_epochs_respects_offset_and_limit() {
        let records = sequence();
        let epochs = list_epochs(&records, 1, 2);
        assert_eq!(
            epochs,
            vec!["2023-058T12:04:00.000Z", "2023-058T12:08:00.000Z"]
        );
    }

    #[test]
    fn list_epochs_out_of_range_offset_is_empty() {
        let records = sequence();
        assert!(list_epochs(&records, 99, 10).is_empty());
    }

    #[test]
    fn list_epochs_negative_values_are_lenient() {
        let records = sequence();
        assert_eq!(list_epochs(&records, -3, -1).len(), records.len());
        assert_eq!(list_epochs(&records, -3, 2).len(), 2);
    }

    #[test]
    fn list_epochs_on_empty_store() {
        assert!(list_epochs(&[], 0, 10).is_empty());
        assert!(list_epochs(&[], 5, -1).is_empty());
    }

    #[test]
    fn find_by_epoch_exact_match_only() {
        let records = sequence();
        let hit = find_by_epoch(&records, "2023-058T12:08:00.000Z").unwrap();
        assert_eq!(hit.epoch, "2023-058T12:08:00.000Z");
        assert!(find_by_epoch(&records, "2023-058T12:08:00.000z").is_none());
        assert!(find_by_epoch(&records, "2023-058T12:09:00.000Z").is_none());
    }

    #[test]
    fn nearest_on_empty_store_is_none() {
        assert!(find_nearest_to_time(&[], 0.0).is_none());
    }

    #[test]
    fn nearest_minimizes_absolute_difference() {
        let records = sequence();
        let reference = epoch::unix_seconds_local("2023-058T12:04:00.000Z").unwrap() + 10.0;
        let nearest = find_nearest_to_time(&records, reference).unwrap();
        assert_eq!(nearest.index, 1);
        assert_approx_eq!(nearest.time_difference_seconds, 10.0);

        // No other record is strictly closer.
        for record in &records {
            let other = reference - epoch::unix_seconds_local(&record.epoch).unwrap();
            assert!(other.abs() >= nearest.time_difference_seconds.abs());
        }
    }

    #[test]
    fn nearest_signed_difference_is_reference_minus_epoch() {
        let records = sequence();
        let reference = epoch::unix_seconds_local("2023-058T12:00:00.000Z").unwrap() - 30.0;
        let nearest = find_nearest_to_time(&records, reference).unwrap();
        assert_eq!(nearest.index, 0);
        assert_approx_eq!(nearest.time_difference_seconds, -30.0);
    }

    #[test]
    fn nearest_tie_keeps_first_in_sequence_order() {
        let records = sequence();
        // Exactly halfway between the first two records.
        let reference = epoch::unix_seconds_local("2023-058T12:02:00.000Z").unwrap();
        let nearest = find_nearest_to_time(&records, reference).unwrap();
        assert_eq!(nearest.index, 0);
        assert_approx_eq!(nearest.time_difference_seconds, 120.0);
    }

    #[test]
    fn nearest_skips_malformed_epochs() {
        let mut records = sequence();
        records.insert(0, record("garbage"));
        let reference = epoch::unix_seconds_local("2023-058T12:00:00.000Z").unwrap();
        let nearest = find_nearest_to_time(&records, reference).unwrap();
        assert_eq!(nearest.index, 1);
    }
}

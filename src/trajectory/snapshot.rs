use super::physics::{self, Geodetic};
use super::query;
use crate::oem::StateVector;

/// The record nearest to a reference time, bundled with its derivations.
/// The place description is resolved separately by the web layer, since it
/// needs the external geocoding adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct NowSnapshot {
    pub record: StateVector,
    pub time_difference_seconds: f64,
    pub speed_km_s: f64,
    pub geodetic: Geodetic,
}

/// Assembles the now-snapshot for an explicit reference time (Unix
/// seconds). `None` when the store is empty; every non-empty sequence has a
/// nearest element.
pub fn now_snapshot(records: &[StateVector], reference_unix_seconds: f64) -> Option<NowSnapshot> {
    let nearest = query::find_nearest_to_time(records, reference_unix_seconds)?;
    let record = records[nearest.index].clone();
    // The winner already passed the epoch format contract in the search.
    let geodetic = physics::geodetic(&record).ok()?;
    Some(NowSnapshot {
        speed_km_s: physics::speed_km_s(&record),
        time_difference_seconds: nearest.time_difference_seconds,
        geodetic,
        record,
    })
}

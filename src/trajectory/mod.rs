mod epoch;
mod physics;
mod query;
mod snapshot;
mod store;

pub use epoch::EpochError;
pub use physics::{geodetic, speed_km_s, Geodetic, MEAN_EARTH_RADIUS_KM};
pub use query::{find_by_epoch, find_nearest_to_time, list_epochs, Nearest};
pub use snapshot::{now_snapshot, NowSnapshot};
pub use store::TrajectoryStore;

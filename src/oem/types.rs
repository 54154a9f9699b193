use serde::{Deserialize, Serialize};

/// One sample of the trajectory: epoch plus position/velocity in the
/// J2000 Earth-centered inertial frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StateVector {
    /// Timestamp in the fixed `YYYY-DDDTHH:MM:SS.sssZ` layout. Unique within
    /// a dataset and the order-defining key of the sequence.
    pub epoch: String,
    /// X, Y, Z in kilometers.
    #[schema(value_type = Vec<f64>)]
    pub position: [f64; 3],
    /// X_DOT, Y_DOT, Z_DOT in kilometers per second.
    #[schema(value_type = Vec<f64>)]
    pub velocity: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OemHeader {
    pub creation_date: String,
    pub originator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OemMetadata {
    pub object_name: String,
    pub object_id: String,
    pub center_name: String,
    pub ref_frame: String,
    pub time_system: String,
    pub start_time: String,
    pub stop_time: String,
}

/// Normalized output of the record parser: the ordered state vector
/// sequence plus the document's descriptive blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct OemDataset {
    pub header: OemHeader,
    pub metadata: OemMetadata,
    pub comments: Vec<String>,
    pub records: Vec<StateVector>,
}

use serde::Deserialize;

use super::error::OemError;
use super::types::{OemDataset, OemHeader, OemMetadata, StateVector};

/// Numeric OEM field. The feed writes either a plain value
/// (`<X>1.0</X>`) or an element with a units attribute
/// (`<X units="km">1.0</X>`); both collapse to the bare value here.
#[derive(Debug, Deserialize)]
struct Measurement {
    #[serde(rename = "@units")]
    #[allow(dead_code)]
    units: Option<String>,
    #[serde(rename = "$text")]
    value: f64,
}

#[derive(Debug, Deserialize)]
struct RawStateVector {
    #[serde(rename = "EPOCH")]
    epoch: String,
    #[serde(rename = "X")]
    x: Measurement,
    #[serde(rename = "Y")]
    y: Measurement,
    #[serde(rename = "Z")]
    z: Measurement,
    #[serde(rename = "X_DOT")]
    x_dot: Measurement,
    #[serde(rename = "Y_DOT")]
    y_dot: Measurement,
    #[serde(rename = "Z_DOT")]
    z_dot: Measurement,
}

impl From<RawStateVector> for StateVector {
    fn from(raw: RawStateVector) -> Self {
        StateVector {
            epoch: raw.epoch,
            position: [raw.x.value, raw.y.value, raw.z.value],
            velocity: [raw.x_dot.value, raw.y_dot.value, raw.z_dot.value],
        }
    }
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "COMMENT", default)]
    comments: Vec<String>,
    #[serde(rename = "stateVector", default)]
    state_vectors: Vec<RawStateVector>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    metadata: OemMetadata,
    data: Data,
}

#[derive(Debug, Deserialize)]
struct Body {
    segment: Segment,
}

#[derive(Debug, Deserialize)]
struct Oem {
    header: OemHeader,
    body: Body,
}

/// Children of the `<ndm>` document root.
#[derive(Debug, Deserialize)]
struct NdmDocument {
    oem: Oem,
}

/// Parses a CCSDS OEM XML document into the normalized dataset shape.
///
/// The sequence is handed back in document order; the feed guarantees it is
/// already sorted ascending by epoch, so no re-sort happens here.
pub fn parse_oem(xml: &str) -> Result<OemDataset, OemError> {
    let document: NdmDocument = quick_xml::de::from_str(xml)?;
    let segment = document.oem.body.segment;

    Ok(OemDataset {
        header: document.oem.header,
        metadata: segment.metadata,
        comments: segment.data.comments,
        records: segment
            .data
            .state_vectors
            .into_iter()
            .map(StateVector::from)
            .collect(),
    })
}

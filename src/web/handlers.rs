use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::geocode::NO_COVERAGE_SENTINEL;
use crate::oem::{OemHeader, OemMetadata, StateVector};
use crate::trajectory::{self, Geodetic};
use crate::web::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SpeedResponse {
    pub value: f64,
    pub units: String,
}

impl SpeedResponse {
    fn km_s(value: f64) -> Self {
        SpeedResponse {
            value,
            units: "km/s".to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AltitudeResponse {
    pub value: f64,
    pub units: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: AltitudeResponse,
    /// Address block from the geocoder, or the no-coverage sentinel string.
    #[schema(value_type = Object)]
    pub geoposition: Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NowResponse {
    pub closest_epoch: String,
    /// Signed seconds, wall-clock reference minus record epoch.
    pub time_difference_seconds: f64,
    pub location: LocationResponse,
    pub speed: SpeedResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EpochsQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

fn parse_int_param(raw: Option<&str>, name: &str, default: i64) -> Result<i64, ApiError> {
    match raw {
        None => Ok(default),
        Some(s) => s.parse().map_err(|_| {
            ApiError::Validation(format!("please specify an integer for {name}"))
        }),
    }
}

async fn location_response(state: &AppState, geo: Geodetic) -> LocationResponse {
    let geoposition = state
        .geocoder
        .reverse(geo.latitude_deg, geo.longitude_deg)
        .await
        .unwrap_or_else(|| Value::String(NO_COVERAGE_SENTINEL.to_string()));
    LocationResponse {
        latitude: geo.latitude_deg,
        longitude: geo.longitude_deg,
        altitude: AltitudeResponse {
            value: geo.altitude_km,
            units: "km".to_string(),
        },
        geoposition,
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Full ordered state vector sequence", body = Vec<StateVector>)
    ),
    tag = "ephemeris"
)]
pub async fn list_records(State(state): State<AppState>) -> Json<Vec<StateVector>> {
    let store = state.store.read().await;
    Json(store.records().to_vec())
}

#[utoipa::path(
    get,
    path = "/epochs",
    params(
        ("offset" = Option<String>, Query, description = "0-based start index, default 0"),
        ("limit" = Option<String>, Query, description = "Maximum entries returned, default the full sequence length")
    ),
    responses(
        (status = 200, description = "Epoch strings in store order", body = Vec<String>),
        (status = 400, description = "Non-integer offset or limit", body = ErrorResponse)
    ),
    tag = "ephemeris"
)]
pub async fn list_epochs(
    State(state): State<AppState>,
    Query(query): Query<EpochsQuery>,
) -> ApiResult<Json<Vec<String>>> {
    let store = state.store.read().await;
    let offset = parse_int_param(query.offset.as_deref(), "offset", 0)?;
    let limit = parse_int_param(query.limit.as_deref(), "limit", store.len() as i64)?;
    Ok(Json(trajectory::list_epochs(store.records(), offset, limit)))
}

#[utoipa::path(
    get,
    path = "/epochs/{epoch}",
    params(("epoch" = String, Path, description = "Epoch timestamp, exact match")),
    responses(
        (status = 200, description = "Matching state vector, or null when the epoch is absent", body = Option<StateVector>)
    ),
    tag = "ephemeris"
)]
pub async fn get_state_vector(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> Json<Option<StateVector>> {
    let store = state.store.read().await;
    Json(trajectory::find_by_epoch(store.records(), &epoch).cloned())
}

#[utoipa::path(
    get,
    path = "/epochs/{epoch}/speed",
    params(("epoch" = String, Path, description = "Epoch timestamp, exact match")),
    responses(
        (status = 200, description = "Instantaneous speed, or null when the epoch is absent", body = Option<SpeedResponse>)
    ),
    tag = "derived"
)]
pub async fn get_speed(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> Json<Option<SpeedResponse>> {
    let store = state.store.read().await;
    let speed = trajectory::find_by_epoch(store.records(), &epoch)
        .map(|record| SpeedResponse::km_s(trajectory::speed_km_s(record)));
    Json(speed)
}

#[utoipa::path(
    get,
    path = "/epochs/{epoch}/location",
    params(("epoch" = String, Path, description = "Epoch timestamp, exact match")),
    responses(
        (status = 200, description = "Geodetic location, or null when the epoch is absent", body = Option<LocationResponse>),
        (status = 500, description = "Record epoch violates the format contract", body = ErrorResponse)
    ),
    tag = "derived"
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> ApiResult<Json<Option<LocationResponse>>> {
    // Release the read lock before the external geocoding round-trip.
    let record = {
        let store = state.store.read().await;
        trajectory::find_by_epoch(store.records(), &epoch).cloned()
    };
    let Some(record) = record else {
        return Ok(Json(None));
    };
    let geo = trajectory::geodetic(&record)?;
    Ok(Json(Some(location_response(&state, geo).await)))
}

#[utoipa::path(
    get,
    path = "/now",
    responses(
        (status = 200, description = "Record nearest to wall-clock now with derivations, or null when the store is empty", body = Option<NowResponse>)
    ),
    tag = "derived"
)]
pub async fn get_now(State(state): State<AppState>) -> Json<Option<NowResponse>> {
    let reference = Utc::now().timestamp_millis() as f64 / 1000.0;
    let snapshot = {
        let store = state.store.read().await;
        trajectory::now_snapshot(store.records(), reference)
    };
    let Some(snapshot) = snapshot else {
        return Json(None);
    };
    let location = location_response(&state, snapshot.geodetic).await;
    Json(Some(NowResponse {
        closest_epoch: snapshot.record.epoch,
        time_difference_seconds: snapshot.time_difference_seconds,
        location,
        speed: SpeedResponse::km_s(snapshot.speed_km_s),
    }))
}

#[utoipa::path(
    get,
    path = "/comment",
    responses(
        (status = 200, description = "Comment lines from the loaded dataset", body = Vec<String>)
    ),
    tag = "ephemeris"
)]
pub async fn get_comments(State(state): State<AppState>) -> Json<Vec<String>> {
    let store = state.store.read().await;
    Json(store.comments().to_vec())
}

#[utoipa::path(
    get,
    path = "/header",
    responses(
        (status = 200, description = "OEM header, or null before the first load", body = Option<OemHeader>)
    ),
    tag = "ephemeris"
)]
pub async fn get_header(State(state): State<AppState>) -> Json<Option<OemHeader>> {
    let store = state.store.read().await;
    Json(store.header().cloned())
}

#[utoipa::path(
    get,
    path = "/metadata",
    responses(
        (status = 200, description = "OEM segment metadata, or null before the first load", body = Option<OemMetadata>)
    ),
    tag = "ephemeris"
)]
pub async fn get_metadata(State(state): State<AppState>) -> Json<Option<OemMetadata>> {
    let store = state.store.read().await;
    Json(store.metadata().cloned())
}

#[utoipa::path(
    get,
    path = "/help",
    responses((status = 200, description = "Plain-text route summary", body = String)),
    tag = "admin"
)]
pub async fn help() -> &'static str {
    concat!(
        "Usage: curl http://<host>:<port>[ROUTE]\n",
        "\n",
        "Routes:\n",
        "  /                          (GET)    the entire state vector data set\n",
        "  /epochs                    (GET)    list of all epochs in the data set\n",
        "  /epochs?offset=i&limit=i   (GET)    windowed list of epochs; offset shifts the\n",
        "                                      start index, limit caps the result count\n",
        "  /epochs/<epoch>            (GET)    state vector for a specific epoch\n",
        "  /epochs/<epoch>/speed      (GET)    instantaneous speed at a specific epoch\n",
        "  /epochs/<epoch>/location   (GET)    latitude, longitude, altitude and geoposition\n",
        "  /now                       (GET)    data for the epoch closest to the current time\n",
        "  /comment                   (GET)    comment lines from the data set\n",
        "  /header                    (GET)    OEM header of the data set\n",
        "  /metadata                  (GET)    OEM segment metadata of the data set\n",
        "  /help                      (GET)    this text\n",
        "  /delete-data               (DELETE) clear all loaded state vectors\n",
        "  /post-data                 (POST)   reload the data set from the upstream feed\n",
    )
}

#[utoipa::path(
    delete,
    path = "/delete-data",
    responses(
        (status = 200, description = "Store cleared", body = MessageResponse)
    ),
    tag = "admin"
)]
pub async fn delete_data(State(state): State<AppState>) -> Json<MessageResponse> {
    let mut store = state.store.write().await;
    store.clear();
    log::info!("trajectory store cleared");
    Json(MessageResponse {
        message: "ISS data has been deleted".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/post-data",
    responses(
        (status = 200, description = "Store replaced from upstream", body = MessageResponse),
        (status = 502, description = "Upstream fetch or parse failed; store unchanged", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn post_data(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    // Fetch completes before the write lock is taken, so a failure cannot
    // disturb the current contents and readers never see a partial load.
    let dataset = state.oem.fetch().await?;
    let count = dataset.records.len();
    let mut store = state.store.write().await;
    store.replace(dataset);
    Ok(Json(MessageResponse {
        message: format!("ISS data has been reloaded ({count} state vectors)"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_fall_back_to_defaults() {
        assert_eq!(parse_int_param(None, "offset", 0).unwrap(), 0);
        assert_eq!(parse_int_param(None, "limit", 42).unwrap(), 42);
    }

    #[test]
    fn integer_params_parse_including_negatives() {
        assert_eq!(parse_int_param(Some("7"), "offset", 0).unwrap(), 7);
        assert_eq!(parse_int_param(Some("-3"), "limit", 0).unwrap(), -3);
    }

    #[test]
    fn malformed_params_are_rejected_not_defaulted() {
        for raw in ["abc", "1.5", "", "ten"] {
            let err = parse_int_param(Some(raw), "limit", 42).unwrap_err();
            match err {
                ApiError::Validation(msg) => assert!(msg.contains("limit")),
                _ => panic!("expected a validation rejection for {raw:?}"),
            }
        }
    }
}

use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers::{
    AltitudeResponse, EpochsQuery, LocationResponse, MessageResponse, NowResponse, SpeedResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_records,
        super::handlers::list_epochs,
        super::handlers::get_state_vector,
        super::handlers::get_speed,
        super::handlers::get_location,
        super::handlers::get_now,
        super::handlers::get_comments,
        super::handlers::get_header,
        super::handlers::get_metadata,
        super::handlers::help,
        super::handlers::delete_data,
        super::handlers::post_data,
    ),
    components(
        schemas(
            crate::oem::StateVector,
            crate::oem::OemHeader,
            crate::oem::OemMetadata,
            SpeedResponse,
            AltitudeResponse,
            LocationResponse,
            NowResponse,
            MessageResponse,
            EpochsQuery,
            ErrorResponse,
        )
    ),
    info(
        title = "ISS Tracker API",
        description = "ISS OEM ephemeris queries and derived quantities",
        version = "0.1.0"
    ),
    tags(
        (name = "ephemeris", description = "Loaded state vector data set"),
        (name = "derived", description = "Quantities derived per request"),
        (name = "admin", description = "Data set lifecycle and help")
    )
)]
pub struct ApiDoc;

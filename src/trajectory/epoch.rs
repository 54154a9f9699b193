use chrono::{Local, NaiveDateTime, TimeZone};
use thiserror::Error;

/// Fixed-width contract for ephemeris timestamps:
/// `YYYY-DDDTHH:MM:SS.sssZ` (four-digit year, three-digit day of year,
/// zero-padded time, millisecond fraction, literal `Z`). 22 bytes total,
/// hour at bytes 9..11, minute at bytes 12..14.
const EPOCH_LEN: usize = 22;
const CIVIL_FORMAT: &str = "%Y-%jT%H:%M:%S";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EpochError {
    #[error("epoch `{0}` does not match YYYY-DDDTHH:MM:SS.sssZ")]
    Format(String),
    #[error("epoch `{0}` has an out-of-range time field")]
    OutOfRange(String),
}

fn check_shape(epoch: &str) -> Result<(), EpochError> {
    let bytes = epoch.as_bytes();
    let shaped = bytes.len() == EPOCH_LEN
        && bytes[4] == b'-'
        && bytes[8] == b'T'
        && bytes[11] == b':'
        && bytes[14] == b':'
        && bytes[17] == b'.'
        && bytes[21] == b'Z';
    if shaped {
        Ok(())
    } else {
        Err(EpochError::Format(epoch.to_string()))
    }
}

/// Extracts the hour and minute fields from their fixed positions.
pub fn hour_minute(epoch: &str) -> Result<(u32, u32), EpochError> {
    check_shape(epoch)?;
    let hour: u32 = epoch[9..11]
        .parse()
        .map_err(|_| EpochError::Format(epoch.to_string()))?;
    let minute: u32 = epoch[12..14]
        .parse()
        .map_err(|_| EpochError::Format(epoch.to_string()))?;
    if hour > 23 || minute > 59 {
        return Err(EpochError::OutOfRange(epoch.to_string()));
    }
    Ok((hour, minute))
}

/// Converts the `YYYY-DDDTHH:MM:SS` prefix to Unix seconds, interpreting it
/// as civil time in the process-local timezone. The millisecond fraction and
/// trailing `Z` are discarded before parsing.
pub fn unix_seconds_local(epoch: &str) -> Result<f64, EpochError> {
    check_shape(epoch)?;
    let civil = &epoch[..17];
    let naive = NaiveDateTime::parse_from_str(civil, CIVIL_FORMAT)
        .map_err(|_| EpochError::Format(epoch.to_string()))?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| EpochError::OutOfRange(epoch.to_string()))?;
    Ok(local.timestamp() as f64)
}

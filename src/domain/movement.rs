//! Recorded parolee movements

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPosition { latitude, longitude }
    }
}

/// Where a parolee was observed, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub timestamp: NaiveDateTime,
    pub geo_position: GeoPosition,
}

impl Movement {
    pub fn new(timestamp: NaiveDateTime, geo_position: GeoPosition) -> Self {
        Movement {
            timestamp,
            geo_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_timestamp_is_iso8601() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let movement = Movement::new(timestamp, GeoPosition::new(-36.870618, 174.772172));

        let json = serde_json::to_value(&movement).unwrap();
        assert_eq!(json["timestamp"], "2024-03-01T22:00:00");
        assert_eq!(json["geoPosition"]["latitude"], -36.870618);

        let back: Movement = serde_json::from_value(json).unwrap();
        assert_eq!(back, movement);
    }
}

//! Postal addresses

use serde::{Deserialize, Serialize};

/// A street address, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub suburb: String,
    pub city: String,
    pub zip_code: String,
}

impl Address {
    pub fn new(
        street_number: impl Into<String>,
        street_name: impl Into<String>,
        suburb: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Address {
            street_number: street_number.into(),
            street_name: street_name.into(),
            suburb: suburb.into(),
            city: city.into(),
            zip_code: zip_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let address = Address::new("34", "Appleby Road", "Remuera", "Auckland", "1070");
        let json = serde_json::to_value(&address).unwrap();

        assert_eq!(json["streetNumber"], "34");
        assert_eq!(json["streetName"], "Appleby Road");
        assert_eq!(json["zipCode"], "1070");
    }
}

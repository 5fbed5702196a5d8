//! Wire representation of a parolee

use super::address::Address;
use super::movement::Movement;
use super::parolee::{Gender, Parolee};
use crate::store::Identified;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The subset of a parolee exchanged over HTTP
///
/// Movements, convictions and disassociates have their own sub-resources;
/// only the most recent movement is carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParoleeDto {
    #[serde(default)]
    pub id: Option<u64>,
    pub last_name: String,
    pub first_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub home_address: Address,
    #[serde(default)]
    pub last_known_position: Option<Movement>,
}

impl ParoleeDto {
    pub fn from_domain(parolee: &Parolee) -> Self {
        ParoleeDto {
            id: parolee.id(),
            last_name: parolee.last_name.clone(),
            first_name: parolee.first_name.clone(),
            gender: parolee.gender,
            date_of_birth: parolee.date_of_birth,
            home_address: parolee.home_address.clone(),
            last_known_position: parolee.last_known_position().cloned(),
        }
    }

    /// Build a new parolee from the DTO
    ///
    /// The id is left unset for the store to assign, and a last known position,
    /// if given, becomes the parolee's first movement.
    pub fn into_domain(self) -> Parolee {
        let mut parolee = Parolee::new(
            self.last_name,
            self.first_name,
            self.gender,
            self.date_of_birth,
            self.home_address,
        );
        if let Some(movement) = self.last_known_position {
            parolee.add_movement(movement);
        }
        parolee
    }

    /// Copy the editable fields onto an existing parolee
    pub fn apply_to(self, parolee: &mut Parolee) {
        parolee.last_name = self.last_name;
        parolee.first_name = self.first_name;
        parolee.gender = self.gender;
        parolee.date_of_birth = self.date_of_birth;
        parolee.home_address = self.home_address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn zoran() -> ParoleeDto {
        ParoleeDto {
            id: None,
            last_name: "Salcic".to_string(),
            first_name: "Zoran".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1958, 5, 17).unwrap(),
            home_address: Address::new("34", "Appleby Road", "Remuera", "Auckland", "1070"),
            last_known_position: None,
        }
    }

    #[test]
    fn test_deserialize_without_id() {
        let dto: ParoleeDto = serde_json::from_value(json!({
            "lastName": "Salcic",
            "firstName": "Zoran",
            "gender": "MALE",
            "dateOfBirth": "1958-05-17",
            "homeAddress": {
                "streetNumber": "34",
                "streetName": "Appleby Road",
                "suburb": "Remuera",
                "city": "Auckland",
                "zipCode": "1070"
            }
        }))
        .unwrap();

        assert_eq!(dto, zoran());
    }

    #[test]
    fn test_domain_conversion() {
        let mut parolee = zoran().into_domain();
        assert_eq!(parolee.id(), None);
        parolee.set_id(7);

        let dto = ParoleeDto::from_domain(&parolee);
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto, ParoleeDto { id: Some(7), ..zoran() });
    }

    #[test]
    fn test_apply_keeps_history() {
        let mut parolee = zoran().into_domain();
        parolee.set_disassociates([3].into_iter().collect());

        let mut update = zoran();
        update.home_address = Address::new("40", "Clifton Road", "Herne Bay", "Auckland", "1022");
        update.apply_to(&mut parolee);

        assert_eq!(parolee.home_address.street_name, "Clifton Road");
        assert_eq!(parolee.disassociates().len(), 1);
    }
}

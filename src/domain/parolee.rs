//! Parolees

use super::address::Address;
use super::conviction::Conviction;
use super::curfew::Curfew;
use super::movement::{GeoPosition, Movement};
use crate::store::Identified;
use chrono::{NaiveDate, SubsecRound};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// A parolee and everything recorded against them
#[derive(Debug, Clone, PartialEq)]
pub struct Parolee {
    id: Option<u64>,
    pub last_name: String,
    pub first_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub home_address: Address,
    pub curfew: Option<Curfew>,
    movements: Vec<Movement>,
    convictions: Vec<Conviction>,
    disassociates: BTreeSet<u64>,
}

impl Parolee {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
        home_address: Address,
    ) -> Self {
        Parolee {
            id: None,
            last_name: last_name.into(),
            first_name: first_name.into(),
            gender,
            date_of_birth,
            home_address,
            curfew: None,
            movements: Vec::new(),
            convictions: Vec::new(),
            disassociates: BTreeSet::new(),
        }
    }

    pub fn with_curfew(mut self, curfew: Curfew) -> Self {
        self.curfew = Some(curfew);
        self
    }

    /// Recorded movements, most recent first
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Record a movement, keeping the most-recent-first order
    ///
    /// Timestamps are stored to millisecond precision.
    pub fn add_movement(&mut self, mut movement: Movement) {
        movement.timestamp = movement.timestamp.trunc_subsecs(3);
        let pos = self
            .movements
            .partition_point(|m| m.timestamp >= movement.timestamp);
        self.movements.insert(pos, movement);
    }

    /// The most recent movement, if any has been recorded
    pub fn last_known_position(&self) -> Option<&Movement> {
        self.movements.first()
    }

    pub fn convictions(&self) -> &[Conviction] {
        &self.convictions
    }

    pub fn add_conviction(&mut self, conviction: Conviction) {
        self.convictions.push(conviction);
    }

    pub fn set_convictions(&mut self, convictions: Vec<Conviction>) {
        self.convictions = convictions;
    }

    /// Identifiers of the parolees this parolee must not associate with
    pub fn disassociates(&self) -> &BTreeSet<u64> {
        &self.disassociates
    }

    pub fn set_disassociates(&mut self, disassociates: BTreeSet<u64>) {
        self.disassociates = disassociates;
    }

    /// Check a movement against the curfew, returning the violation if it breaks it
    pub fn check_curfew(&self, movement: &Movement) -> Option<ParoleViolation> {
        let curfew = self.curfew.as_ref()?;
        let id = self.id?;
        if curfew.is_in_effect(movement.timestamp.time()) {
            Some(ParoleViolation {
                parolee_id: id,
                location: movement.geo_position,
            })
        } else {
            None
        }
    }
}

impl Identified for Parolee {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}

/// A parolee observed somewhere they should not be
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParoleViolation {
    pub parolee_id: u64,
    pub location: GeoPosition,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime, Timelike};

    fn parolee() -> Parolee {
        Parolee::new(
            "Sinnen",
            "Oliver",
            Gender::Male,
            NaiveDate::from_ymd_opt(1970, 5, 26).unwrap(),
            Address::new("15", "Bermuda Road", "St Johns", "Auckland", "1071"),
        )
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn movement(day: u32, hour: u32) -> Movement {
        Movement::new(at(day, hour), GeoPosition::new(-36.848238, 174.762212))
    }

    #[test]
    fn test_movements_most_recent_first() {
        let mut p = parolee();
        p.add_movement(movement(2, 10));
        p.add_movement(movement(5, 10));
        p.add_movement(movement(3, 10));

        let days: Vec<_> = p.movements().iter().map(|m| m.timestamp).collect();
        assert_eq!(days, vec![at(5, 10), at(3, 10), at(2, 10)]);
        assert_eq!(p.last_known_position(), Some(&movement(5, 10)));
    }

    #[test]
    fn test_movement_timestamp_truncated_to_millis() {
        let mut p = parolee();
        let precise = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_nano_opt(10, 15, 30, 123_456_789)
            .unwrap();
        p.add_movement(Movement::new(precise, GeoPosition::new(-36.85, 174.76)));

        let stored = p.last_known_position().unwrap().timestamp;
        assert_eq!(stored.nanosecond(), 123_000_000);

        let json = serde_json::to_value(p.last_known_position().unwrap()).unwrap();
        assert_eq!(json["timestamp"], "2024-03-04T10:15:30.123");
    }

    #[test]
    fn test_no_last_known_position() {
        assert!(parolee().last_known_position().is_none());
    }

    #[test]
    fn test_check_curfew() {
        let home = parolee().home_address.clone();
        let mut p = parolee().with_curfew(Curfew::new(
            home,
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        ));
        p.set_id(1);

        let night = movement(4, 22);
        let violation = p.check_curfew(&night).unwrap();
        assert_eq!(violation.parolee_id, 1);
        assert_eq!(violation.location, night.geo_position);

        assert!(p.check_curfew(&movement(4, 12)).is_none());
    }

    #[test]
    fn test_check_curfew_without_curfew() {
        let mut p = parolee();
        p.set_id(1);
        assert!(p.check_curfew(&movement(4, 22)).is_none());
    }
}

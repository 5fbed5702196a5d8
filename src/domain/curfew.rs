//! Curfews

use super::address::Address;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Where a parolee must stay, and between which times of day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curfew {
    pub confinement_address: Address,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl Curfew {
    pub fn new(confinement_address: Address, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Curfew {
            confinement_address,
            start_time,
            end_time,
        }
    }

    /// Whether the curfew applies at the given time of day
    ///
    /// A window whose start is after its end runs overnight. The start is
    /// inclusive and the end exclusive.
    pub fn is_in_effect(&self, time: NaiveTime) -> bool {
        if self.start_time <= self.end_time {
            time >= self.start_time && time < self.end_time
        } else {
            time >= self.start_time || time < self.end_time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn home() -> Address {
        Address::new("1", "Queen Street", "CBD", "Auckland", "1010")
    }

    #[test]
    fn test_overnight_window() {
        let curfew = Curfew::new(home(), at(20, 0), at(6, 0));

        assert!(curfew.is_in_effect(at(20, 0)));
        assert!(curfew.is_in_effect(at(23, 59)));
        assert!(curfew.is_in_effect(at(0, 0)));
        assert!(curfew.is_in_effect(at(5, 59)));
        assert!(!curfew.is_in_effect(at(6, 0)));
        assert!(!curfew.is_in_effect(at(12, 0)));
    }

    #[test]
    fn test_daytime_window() {
        let curfew = Curfew::new(home(), at(9, 0), at(17, 0));

        assert!(curfew.is_in_effect(at(9, 0)));
        assert!(curfew.is_in_effect(at(16, 30)));
        assert!(!curfew.is_in_effect(at(17, 0)));
        assert!(!curfew.is_in_effect(at(22, 0)));
    }
}

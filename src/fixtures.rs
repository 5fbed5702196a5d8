//! Seed data
//!
//! The canonical set of parolees the service starts with, and is restored to
//! on every reset. Identifiers are deterministic because the store restarts
//! its sequence at 1 on reset.

use crate::domain::{Address, Conviction, Curfew, Gender, GeoPosition, Movement, Offence, Parolee};
use crate::ParoleeDb;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(time(h, min))
}

/// The seed parolees, in insertion order
pub fn parolees() -> Vec<Parolee> {
    let oliver_home = Address::new("15", "Bermuda Road", "St Johns", "Auckland", "1071");
    let mut oliver = Parolee::new(
        "Sinnen",
        "Oliver",
        Gender::Male,
        date(1970, 5, 26),
        oliver_home.clone(),
    )
    .with_curfew(Curfew::new(oliver_home, time(20, 0), time(6, 0)));
    oliver.add_movement(Movement::new(
        timestamp(2015, 1, 20, 12, 0),
        GeoPosition::new(-36.852617, 174.769525),
    ));
    oliver.add_movement(Movement::new(
        timestamp(2015, 1, 21, 14, 30),
        GeoPosition::new(-36.848238, 174.762212),
    ));
    oliver.add_movement(Movement::new(
        timestamp(2015, 1, 22, 9, 15),
        GeoPosition::new(-36.862418, 174.763811),
    ));
    oliver.add_conviction(Conviction::new(
        date(1994, 4, 7),
        "Crashed a car while over the legal limit",
        [Offence::DrinkDriving],
    ));

    let catherine = Parolee::new(
        "Watson",
        "Catherine",
        Gender::Female,
        date(1970, 2, 9),
        Address::new("22", "Tarawera Terrace", "St Heliers", "Auckland", "1071"),
    );

    let nasser = Parolee::new(
        "Giacaman",
        "Nasser",
        Gender::Male,
        date(1980, 10, 2),
        Address::new("8", "Kauri Road", "Birkenhead", "Auckland", "0626"),
    );

    let rebecca = Parolee::new(
        "Bennett",
        "Rebecca",
        Gender::Female,
        date(1985, 7, 14),
        Address::new("102", "Ponsonby Road", "Ponsonby", "Auckland", "1011"),
    );

    vec![oliver, catherine, nasser, rebecca]
}

/// Insert the seed parolees into the store
pub fn load(db: &ParoleeDb) {
    let ids: Vec<u64> = parolees().into_iter().map(|p| db.insert(p)).collect();
    info!("Loaded {} seed parolees (ids {:?})", ids.len(), ids);
}

/// Clear the store and load the seed parolees again
pub fn reload(db: &ParoleeDb) {
    db.reset();
    load(db);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_assigns_ids_from_one() {
        let db = ParoleeDb::new();
        load(&db);

        assert_eq!(db.len(), 4);
        let oliver = db.get(1).unwrap();
        assert_eq!(oliver.read().first_name, "Oliver");
        assert_eq!(oliver.read().movements().len(), 3);
        assert_eq!(db.get(2).unwrap().read().first_name, "Catherine");
        assert_eq!(db.get(3).unwrap().read().first_name, "Nasser");
    }

    #[test]
    fn test_reload_restores_seed_state() {
        let db = ParoleeDb::new();
        load(&db);
        db.delete(2);
        db.get(1).unwrap().write().set_convictions(Vec::new());

        reload(&db);

        assert_eq!(db.len(), 4);
        assert_eq!(db.next_id(), 5);
        assert_eq!(db.get(1).unwrap().read().convictions().len(), 1);
        assert_eq!(db.get(2).unwrap().read().last_name, "Watson");
    }
}

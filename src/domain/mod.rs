//! Domain model
//!
//! Value types for parolees and everything recorded against them, plus the
//! `ParoleeDto` wire representation. All JSON uses camelCase field names and
//! ISO-8601 dates and times.

mod address;
mod conviction;
mod curfew;
mod dto;
mod movement;
mod parolee;

pub use address::Address;
pub use conviction::{Conviction, Offence};
pub use curfew::Curfew;
pub use dto::ParoleeDto;
pub use movement::{GeoPosition, Movement};
pub use parolee::{Gender, ParoleViolation, Parolee};

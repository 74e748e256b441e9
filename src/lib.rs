#![warn(clippy::pedantic)]

//! Web front end: a form that turns an HSE profile URL into a calendar
//! subscription, and the `.ics` endpoint calendar clients poll.

pub mod error;
pub mod page;
pub mod qr;
pub mod routes;

pub use routes::{router, AppState};

//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON shapes exchanged with clients. They carry no
//! behavior; conversion to and from server domain models happens in
//! `server::model`.

pub mod api;
pub mod student;

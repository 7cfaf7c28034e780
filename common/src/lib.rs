//! Data model shared between the lead dashboard backend and its clients.

pub mod model;
pub mod requests;
pub mod responses;

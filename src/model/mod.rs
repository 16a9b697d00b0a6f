//! Request and response bodies of the HTTP API.

pub mod api;
pub mod aspect;
pub mod guild;
pub mod tome;

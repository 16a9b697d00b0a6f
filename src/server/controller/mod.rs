//! HTTP request handlers.
//!
//! Controllers extract request data, call the matching service, and shape the response.
//! Authentication is handled outside this backend.

pub mod aspect;
pub mod guild;
pub mod tome;

//! # Blog Shared
//!
//! Request payloads and response shapes shared by the server and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

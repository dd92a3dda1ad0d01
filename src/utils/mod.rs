// Start of file: /src/utils/mod.rs

/*
    * Error mapping for middleware layers, the API response envelope,
    * and JSON formatting helpers.
*/

pub mod error_handler;
pub mod json;
pub mod response_handler;

// End of file: /src/utils/mod.rs

/*
* System endpoints mounted under the global prefix (service status and identity).
*/

pub mod handler;
pub mod routes;

pub use routes::system_routes;

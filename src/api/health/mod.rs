/*
* Load balancer health check.
* Registered on the outer router so it is never wrapped in the API envelope.
*/

pub mod handler;
pub mod routes;

pub use routes::health_routes;

// Route modules: the load balancer health check and the prefixed API endpoints

pub mod health;
pub mod system;

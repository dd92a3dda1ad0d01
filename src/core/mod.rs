// Process bootstrap: logging, CORS policy, router assembly, listener and shutdown

pub mod cors;
pub mod logging;
pub mod server;

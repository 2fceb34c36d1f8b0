/// API error types and the not-found fallback
pub mod errors;
/// Function invocation handler
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;

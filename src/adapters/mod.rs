// Adapters layer: concrete implementations for external systems (HTTP page
// fetching/parsing, in-memory job queue).

pub mod http;
pub mod queue;

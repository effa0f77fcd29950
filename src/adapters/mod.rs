// Adapters layer: concrete implementations for external systems (remote classifier, inbound HTTP, Lambda events).

pub mod anthropic;
pub mod gateway;
pub mod http;

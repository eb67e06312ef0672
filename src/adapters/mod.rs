// Adapters layer: concrete implementations for external systems (http, terminal).

pub mod http;
pub mod terminal;

pub use http::HttpTransport;
pub use terminal::StdinPrompt;

// Agent backend client

pub mod http;
pub mod provider;

pub use http::HttpAgentClient;
pub use provider::*;

mod client;
pub mod domain;
mod transport;

pub use client::{Client, EnvoyError, INFO_PATH, INVENTORY_PATH, PRODUCTION_PATH};
pub use transport::{HttpResponse, HttpTransport, TransportError};

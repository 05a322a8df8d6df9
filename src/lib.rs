//! Client for the local HTTP API of an Enphase Envoy solar gateway.
//!
//! ```no_run
//! let client = envoy::Client::new("192.168.1.20:80")?;
//!
//! let info = client.info()?;
//! let production = client.production()?;
//! println!("{} produces {} W", info.device.sn, production.inverters().map_or(0.0, |r| r.w_now));
//! # Ok::<(), envoy::EnvoyError>(())
//! ```

mod envoy;
pub mod extensions;

pub use envoy::domain;
pub use envoy::{
    Client, EnvoyError, HttpResponse, HttpTransport, INFO_PATH, INVENTORY_PATH, PRODUCTION_PATH, TransportError,
};

use crate::envoy::domain::{Info, Inventory, Production};
use crate::envoy::transport::{HttpTransport, TransportError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::io;
use std::io::Read;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub const INVENTORY_PATH: &str = "/inventory.json?deleted=1";
pub const PRODUCTION_PATH: &str = "/production.json?details=1";
pub const INFO_PATH: &str = "/info.xml";

/// Client for the local API of an Envoy gateway at `address` (host:port).
///
/// Every call is a single blocking GET on the transport. Retries, timeouts and connection reuse are whatever the
/// transport is configured to do.
#[derive(Debug, Clone)]
pub struct Client<T = reqwest::blocking::Client> {
    address: String,
    transport: T,
}

impl Client {
    /// Creates a client that owns a default-configured reqwest transport.
    pub fn new(address: impl Into<String>) -> Result<Self, EnvoyError> {
        let transport = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| EnvoyError::Transport(e.into()))?;
        Ok(Client::with_transport(address, transport))
    }
}

impl<T: HttpTransport> Client<T> {
    pub fn with_transport(address: impl Into<String>, transport: T) -> Self {
        Client {
            address: address.into(),
            transport,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the parts installed in the system and registered with the gateway, including removed ones.
    #[instrument(skip(self), fields(address = %self.address))]
    pub fn inventory(&self) -> Result<Vec<Inventory>, EnvoyError> {
        info!("Retrieving inventory...");
        let inventory: Vec<Inventory> = self.get_json(INVENTORY_PATH)?;
        info!(
            "Retrieving inventory... OK, {} found",
            inventory.iter().map(Inventory::device_count).sum::<usize>()
        );

        Ok(inventory)
    }

    /// Returns the current data of the production and consumption sensors, if equipped.
    #[instrument(skip(self), fields(address = %self.address))]
    pub fn production(&self) -> Result<Production, EnvoyError> {
        info!("Retrieving production...");
        let production: Production = self.get_json(PRODUCTION_PATH)?;
        info!(
            "Retrieving production... OK, {} production and {} consumption readings",
            production.production.len(),
            production.consumption.len()
        );

        Ok(production)
    }

    #[instrument(skip(self), fields(address = %self.address))]
    pub fn info(&self) -> Result<Info, EnvoyError> {
        info!("Retrieving info...");
        let info: Info = self.get_xml(INFO_PATH)?;
        info!(serial_number = %info.device.sn, "Retrieving info... OK");

        Ok(info)
    }

    fn get(&self, path: &str) -> Result<Vec<u8>, EnvoyError> {
        let url = format!("http://{}{}", self.address, path);
        debug!(url = %url, "GET");

        let mut response = self.transport.get(&url).map_err(EnvoyError::Transport)?;

        if response.status != StatusCode::OK {
            warn!(status = %response.status, url = %url, "Gateway did not return 200");
            // Drain so the transport can reuse the connection, the content is irrelevant
            if let Err(e) = io::copy(&mut response.body, &mut io::sink()) {
                debug!("Unable to drain the response body: {}", e);
            }
            return Err(EnvoyError::NotOk);
        }

        let mut body = Vec::new();
        response
            .body
            .read_to_end(&mut body)
            .map_err(|e| EnvoyError::Transport(Box::new(e)))?;
        Ok(body)
    }

    fn get_json<R: DeserializeOwned + Default>(&self, path: &str) -> Result<R, EnvoyError> {
        let body = self.get(path)?;
        // A literal `null` is a valid payload and decodes to the empty value
        Ok(serde_json::from_slice::<Option<R>>(&body)?.unwrap_or_default())
    }

    fn get_xml<R: DeserializeOwned>(&self, path: &str) -> Result<R, EnvoyError> {
        let body = self.get(path)?;
        Ok(quick_xml::de::from_reader(body.as_slice())?)
    }
}

#[derive(Error, Debug)]
pub enum EnvoyError {
    #[error("request error: {0}")]
    Transport(#[source] TransportError),
    #[error("server did not return 200")]
    NotOk,
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid XML payload: {0}")]
    Xml(#[from] quick_xml::DeError),
}

impl EnvoyError {
    pub fn is_not_ok(&self) -> bool {
        matches!(self, EnvoyError::NotOk)
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, EnvoyError::Json(_) | EnvoyError::Xml(_))
    }
}

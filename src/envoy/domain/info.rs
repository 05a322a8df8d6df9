use crate::extensions::timestamp_ext::EpochSeconds;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// API: GET /info.xml, root element <envoy_info>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    pub time: i64,
    pub device: DeviceInfo,
    #[serde(rename = "package")]
    pub packages: Vec<Package>,
    pub build_info: Option<BuildInfo>,
}

impl Info {
    /// The gateway clock at the moment it rendered the document.
    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.time.to_date_time()
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|package| package.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    pub sn: String,
    pub pn: String,
    pub software: String,
    pub euaid: String,
    pub seqnum: u32,
    pub apiver: u32,
    pub imeter: bool,
}

/// A firmware package installed on the gateway.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Package {
    #[serde(rename = "@name")]
    pub name: String,
    pub pn: String,
    pub version: String,
    pub build: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    pub build_id: String,
    pub build_time_gmt: i64,
}

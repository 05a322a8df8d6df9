use crate::extensions::timestamp_ext::EpochSeconds;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// API: GET /inventory.json?deleted=1
/// The parts of a single device class, e.g. `PCU` for microinverters, `ACB` for AC batteries and `NSRB` for Q-relays.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub r#type: String,
    pub devices: Vec<InventoryDevice>,
}

impl Inventory {
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct InventoryDevice {
    pub part_num: String,
    pub installed: String,
    pub serial_num: String,
    pub device_status: Vec<String>,
    pub last_rpt_date: String,
    pub admin_state: i64,
    pub dev_type: i64,
    pub created_date: String,
    pub img_load_date: String,
    pub img_pnum_running: String,
    pub ptpn: String,
    pub chaneid: i64,
    pub device_control: Vec<DeviceControl>,
    pub producing: bool,
    pub communicating: bool,
    pub provisioned: bool,
    pub operating: bool,
    // Only present for parts that were removed from the system
    pub deleted: bool,
}

impl InventoryDevice {
    pub fn installed_at(&self) -> Option<DateTime<Utc>> {
        self.installed.to_date_time()
    }

    pub fn last_report(&self) -> Option<DateTime<Utc>> {
        self.last_rpt_date.to_date_time()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DeviceControl {
    pub gficlearset: bool,
}

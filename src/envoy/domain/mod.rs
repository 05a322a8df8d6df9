mod info;
mod inventory;
mod production;

pub use info::{BuildInfo, DeviceInfo, Info, Package};
pub use inventory::{DeviceControl, Inventory, InventoryDevice};
pub use production::{LineReading, MeasurementType, MeterValues, Production, Reading, StorageReading};

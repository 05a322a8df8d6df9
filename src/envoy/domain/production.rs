use crate::extensions::timestamp_ext::EpochSeconds;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// API: GET /production.json?details=1
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Production {
    pub production: Vec<Reading>,
    pub consumption: Vec<Reading>,
    pub storage: Vec<StorageReading>,
}

impl Production {
    /// The aggregate of all microinverters, reported without meter details.
    pub fn inverters(&self) -> Option<&Reading> {
        self.production.iter().find(|reading| reading.r#type == "inverters")
    }

    pub fn production_meter(&self) -> Option<&Reading> {
        Self::find_meter(&self.production, MeasurementType::Production)
    }

    pub fn total_consumption(&self) -> Option<&Reading> {
        Self::find_meter(&self.consumption, MeasurementType::TotalConsumption)
    }

    pub fn net_consumption(&self) -> Option<&Reading> {
        Self::find_meter(&self.consumption, MeasurementType::NetConsumption)
    }

    fn find_meter<'a>(readings: &'a [Reading], measurement_type: MeasurementType) -> Option<&'a Reading> {
        readings
            .iter()
            .find(|reading| reading.measurement_type.as_ref() == Some(&measurement_type))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reading {
    pub r#type: String,
    pub active_count: u32,
    pub measurement_type: Option<MeasurementType>,
    pub reading_time: i64,
    pub w_now: f64,
    pub wh_lifetime: f64,
    #[serde(flatten)]
    pub meter: MeterValues,
    // Per phase, only reported by the integrated meters
    pub lines: Vec<LineReading>,
}

impl Reading {
    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.reading_time.to_date_time()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineReading {
    pub w_now: f64,
    pub wh_lifetime: f64,
    #[serde(flatten)]
    pub meter: MeterValues,
}

/// Details reported by the integrated meters (`eim`) next to the power and lifetime energy.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterValues {
    pub varh_lead_lifetime: Option<f64>,
    pub varh_lag_lifetime: Option<f64>,
    pub vah_lifetime: Option<f64>,
    pub rms_current: Option<f64>,
    pub rms_voltage: Option<f64>,
    pub react_pwr: Option<f64>,
    pub apprnt_pwr: Option<f64>,
    pub pwr_factor: Option<f64>,
    pub wh_today: Option<f64>,
    pub wh_last_seven_days: Option<f64>,
    pub vah_today: Option<f64>,
    pub varh_lead_today: Option<f64>,
    pub varh_lag_today: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementType {
    Production,
    TotalConsumption,
    NetConsumption,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageReading {
    pub r#type: String,
    pub active_count: u32,
    pub reading_time: i64,
    pub w_now: f64,
    pub wh_now: f64,
    pub state: String,
}

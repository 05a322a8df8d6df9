use chrono::{DateTime, Utc};

/// Converts the epoch seconds the gateway reports into a UTC date time.
/// Zero and unparsable values mean the gateway never recorded the moment.
pub trait EpochSeconds {
    fn to_date_time(&self) -> Option<DateTime<Utc>>;
}

impl EpochSeconds for i64 {
    fn to_date_time(&self) -> Option<DateTime<Utc>> {
        match self {
            0 => None,
            seconds => DateTime::from_timestamp(*seconds, 0),
        }
    }
}

impl EpochSeconds for u64 {
    fn to_date_time(&self) -> Option<DateTime<Utc>> {
        i64::try_from(*self).ok()?.to_date_time()
    }
}

impl EpochSeconds for str {
    fn to_date_time(&self) -> Option<DateTime<Utc>> {
        self.trim().parse::<i64>().ok()?.to_date_time()
    }
}

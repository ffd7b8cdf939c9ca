//! Query-string parameters for the filtered appointment listings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::instant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceQuery {
    pub service: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientQuery {
    pub patient: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriodQuery {
    pub start_date: Option<String>,
    pub start_time: Option<String>,
}

impl TimePeriodQuery {
    pub fn new(start_date: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            start_time: Some(start_time.into()),
        }
    }

    /// Lower bound of the window, or `None` if either part is missing or malformed.
    pub fn threshold(&self) -> Option<NaiveDateTime> {
        instant::combine(self.start_date.as_deref()?, self.start_time.as_deref()?)
    }
}

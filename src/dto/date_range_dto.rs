use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::utils::datetime::deserialize_iso_datetime;

// Query `?startDate=...&endDate=...` en ISO-8601; un offset o `Z` se convierte a UTC
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    #[serde(deserialize_with = "deserialize_iso_datetime")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_iso_datetime")]
    pub end_date: NaiveDateTime,
}

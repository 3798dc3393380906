use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub(crate) struct DailyEnvelope {
    #[serde(rename = "Meta Data")]
    pub(crate) meta: Option<MetaNode>,
    #[serde(rename = "Time Series (Daily)")]
    pub(crate) series: Option<BTreeMap<String, BarNode>>,

    // Alpha Vantage answers 200 with one of these instead of data.
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct MetaNode {
    #[serde(rename = "2. Symbol")]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub(crate) last_refreshed: Option<String>,
    #[serde(rename = "5. Time Zone")]
    pub(crate) time_zone: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct BarNode {
    #[serde(rename = "1. open")]
    pub(crate) open: Option<String>,
    #[serde(rename = "2. high")]
    pub(crate) high: Option<String>,
    #[serde(rename = "3. low")]
    pub(crate) low: Option<String>,
    #[serde(rename = "4. close")]
    pub(crate) close: Option<String>,
    #[serde(rename = "5. volume")]
    pub(crate) volume: Option<String>,
}

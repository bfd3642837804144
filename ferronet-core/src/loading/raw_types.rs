use serde::Deserialize;

use super::de::deserialize_flag;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedStop {
    pub stop_id: String,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedRoute {
    pub from_id: String,
    pub to_id: String,
    pub distance: f64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub bidirectional: bool,
}

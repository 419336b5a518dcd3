use serde::{Deserialize, Serialize};

/// A dedicated-hardware plan offered by the API.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BareMetalPlan {
    pub id: String,
    pub cpu_count: i64,
    pub cpu_model: String,
    pub cpu_threads: i64,
    pub ram: i64,
    pub disk: i64,
    pub disk_count: i64,
    pub bandwidth: i64,
    pub monthly_cost: f64,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub locations: Vec<String>,
}

use serde::{Deserialize, Serialize};

/// A compute plan offered by the API.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Plan {
    pub id: String,
    pub vcpu_count: i64,
    /// Memory in MB
    pub ram: i64,
    /// Disk size in GB
    pub disk: i64,
    pub disk_count: i64,
    /// Monthly bandwidth in GB
    pub bandwidth: i64,
    pub monthly_cost: f64,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub gpu_vram_gb: i64,
    pub gpu_type: String,
    /// Region identifiers where the plan is available
    pub locations: Vec<String>,
}

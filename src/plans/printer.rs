use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{BareMetalPlan, Meta, Plan};
use crate::printer::{placeholder_row, Paging, Printer, TableOptions};

const PLAN_COLUMNS: [&str; 11] = [
    "ID",
    "VCPU COUNT",
    "RAM",
    "DISK",
    "DISK COUNT",
    "BANDWIDTH GB",
    "PRICE PER MONTH",
    "TYPE",
    "GPU VRAM",
    "GPU TYPE",
    "REGIONS",
];

const METAL_PLAN_COLUMNS: [&str; 11] = [
    "ID",
    "CPU COUNT",
    "CPU MODEL",
    "CPU THREADS",
    "RAM",
    "DISK",
    "DISK COUNT",
    "BANDWIDTH GB",
    "PRICE PER MONTH",
    "TYPE",
    "REGIONS",
];

/// A page of compute plans as returned by the API.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PlansPrinter {
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub meta: Meta,
    #[serde(skip)]
    pub options: TableOptions,
}

impl PlansPrinter {
    pub fn new(plans: Vec<Plan>, meta: Meta) -> Self {
        Self { plans, meta, options: TableOptions::default() }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }
}

// Display options are not part of the record set.
impl PartialEq for PlansPrinter {
    fn eq(&self, other: &Self) -> bool {
        self.plans == other.plans && self.meta == other.meta
    }
}

impl Printer for PlansPrinter {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn column_headers(&self) -> Vec<String> {
        PLAN_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        if self.plans.is_empty() {
            return vec![placeholder_row(PLAN_COLUMNS.len())];
        }

        self.plans
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    p.vcpu_count.to_string(),
                    p.ram.to_string(),
                    p.disk.to_string(),
                    p.disk_count.to_string(),
                    p.bandwidth.to_string(),
                    self.options.format_price(p.monthly_cost),
                    p.plan_type.clone(),
                    p.gpu_vram_gb.to_string(),
                    p.gpu_type.clone(),
                    self.options.format_list(&p.locations),
                ]
            })
            .collect()
    }

    fn paging(&self) -> Paging {
        Paging::from_meta(&self.meta)
    }
}

/// A page of bare-metal plans as returned by the API.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MetalPlansPrinter {
    #[serde(rename = "plans_metal", default)]
    pub plans: Vec<BareMetalPlan>,
    #[serde(default)]
    pub meta: Meta,
    #[serde(skip)]
    pub options: TableOptions,
}

impl MetalPlansPrinter {
    pub fn new(plans: Vec<BareMetalPlan>, meta: Meta) -> Self {
        Self { plans, meta, options: TableOptions::default() }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }
}

impl PartialEq for MetalPlansPrinter {
    fn eq(&self, other: &Self) -> bool {
        self.plans == other.plans && self.meta == other.meta
    }
}

impl Printer for MetalPlansPrinter {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn column_headers(&self) -> Vec<String> {
        METAL_PLAN_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        if self.plans.is_empty() {
            return vec![placeholder_row(METAL_PLAN_COLUMNS.len())];
        }

        self.plans
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    p.cpu_count.to_string(),
                    p.cpu_model.clone(),
                    p.cpu_threads.to_string(),
                    p.ram.to_string(),
                    p.disk.to_string(),
                    p.disk_count.to_string(),
                    p.bandwidth.to_string(),
                    self.options.format_price(p.monthly_cost),
                    p.plan_type.clone(),
                    self.options.format_list(&p.locations),
                ]
            })
            .collect()
    }

    fn paging(&self) -> Paging {
        Paging::from_meta(&self.meta)
    }
}

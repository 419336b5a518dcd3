mod printer;

pub use printer::{MetalPlansPrinter, PlansPrinter};

use crate::config::DEFAULT_PER_PAGE;

/// Query parameters for the plan listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Plan type filter such as `vc2` or `vhf`. Ignored for bare metal.
    pub plan_type: Option<String>,
    /// Operating system id filter. Ignored for bare metal.
    pub os: Option<String>,
    pub per_page: u32,
    pub cursor: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            plan_type: None,
            os: None,
            per_page: DEFAULT_PER_PAGE,
            cursor: None,
        }
    }
}

impl ListOptions {
    /// Query pairs for `/plans`.
    pub fn plan_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(t) = non_blank(&self.plan_type) {
            params.push(("type".to_string(), t.to_string()));
        }
        if let Some(os) = non_blank(&self.os) {
            params.push(("os".to_string(), os.to_string()));
        }
        params.extend(self.paging_params());
        params
    }

    /// Query pairs for `/plans-metal`.
    pub fn metal_params(&self) -> Vec<(String, String)> {
        self.paging_params()
    }

    fn paging_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("per_page".to_string(), self.per_page.to_string())];
        if let Some(c) = non_blank(&self.cursor) {
            params.push(("cursor".to_string(), c.to_string()));
        }
        params
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

use super::client::ApiClient;
use crate::error::Result;
use crate::plans::{ListOptions, MetalPlansPrinter, PlansPrinter};

pub const PLANS_ENDPOINT: &str = "/plans";
pub const METAL_PLANS_ENDPOINT: &str = "/plans-metal";

/// Load one page of compute plans.
pub async fn list_plans(client: &ApiClient, opts: &ListOptions) -> Result<PlansPrinter> {
    let page: PlansPrinter = client.get_json(PLANS_ENDPOINT, &opts.plan_params()).await?;
    tracing::debug!(count = page.plans.len(), total = page.meta.total, "Loaded plans");
    Ok(page)
}

/// Load one page of bare-metal plans.
pub async fn list_metal_plans(client: &ApiClient, opts: &ListOptions) -> Result<MetalPlansPrinter> {
    let page: MetalPlansPrinter = client.get_json(METAL_PLANS_ENDPOINT, &opts.metal_params()).await?;
    tracing::debug!(count = page.plans.len(), total = page.meta.total, "Loaded bare metal plans");
    Ok(page)
}

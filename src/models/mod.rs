pub mod bare_metal_plan;
pub mod meta;
pub mod plan;

pub use bare_metal_plan::BareMetalPlan;
pub use meta::{Links, Meta};
pub use plan::Plan;

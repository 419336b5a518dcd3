/// Tests for the plan and bare-metal plan printers
use plans::models::{BareMetalPlan, Links, Meta, Plan};
use plans::plans::{MetalPlansPrinter, PlansPrinter};
use plans::printer::{render, OutputFormat, Printer, TableOptions, PAGING_SEPARATOR};

fn sample_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "vc2-1c-1gb".into(),
            vcpu_count: 1,
            ram: 1024,
            disk: 25,
            disk_count: 1,
            bandwidth: 1024,
            monthly_cost: 5.5,
            plan_type: "vc2".into(),
            gpu_vram_gb: 0,
            gpu_type: String::new(),
            locations: vec!["ewr".into(), "lax".into()],
        },
        Plan {
            id: "vcg-a100-1c-6g-4vram".into(),
            vcpu_count: 1,
            ram: 6144,
            disk: 70,
            disk_count: 1,
            bandwidth: 1024,
            monthly_cost: 90.0,
            plan_type: "vcg".into(),
            gpu_vram_gb: 4,
            gpu_type: "NVIDIA_A100".into(),
            locations: vec!["sjc".into()],
        },
    ]
}

fn sample_metal_plans() -> Vec<BareMetalPlan> {
    vec![BareMetalPlan {
        id: "vbm-4c-32gb".into(),
        cpu_count: 4,
        cpu_model: "E3-1270v6".into(),
        cpu_threads: 8,
        ram: 32768,
        disk: 240,
        disk_count: 2,
        bandwidth: 5120,
        monthly_cost: 120.0,
        plan_type: "SSD".into(),
        locations: vec!["ewr".into(), "ams".into(), "nrt".into()],
    }]
}

fn sample_meta() -> Meta {
    Meta {
        total: 2,
        links: Links {
            next: "bmV4dF9fdmMyLTFjLTFnYg==".into(),
            prev: String::new(),
        },
    }
}

#[test]
fn test_plan_headers_in_order() {
    let printer = PlansPrinter::default();
    assert_eq!(
        printer.column_headers(),
        vec![
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
        ]
    );
}

#[test]
fn test_metal_plan_headers_in_order() {
    let printer = MetalPlansPrinter::default();
    assert_eq!(
        printer.column_headers(),
        vec![
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
        ]
    );
}

#[test]
fn test_plan_rows_follow_input_order() {
    let printer = PlansPrinter::new(sample_plans(), sample_meta());
    let rows = printer.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        vec!["vc2-1c-1gb", "1", "1024", "25", "1", "1024", "5.50", "vc2", "0", "", "ewr,lax"]
    );
    assert_eq!(
        rows[1],
        vec!["vcg-a100-1c-6g-4vram", "1", "6144", "70", "1", "1024", "90.00", "vcg", "4", "NVIDIA_A100", "sjc"]
    );
}

#[test]
fn test_plan_rows_match_header_width() {
    let printer = PlansPrinter::new(sample_plans(), sample_meta());
    let width = printer.column_headers().len();
    assert!(printer.rows().iter().all(|r| r.len() == width));
}

#[test]
fn test_empty_plans_yield_placeholder_row() {
    let printer = PlansPrinter::new(vec![], Meta::default());
    let rows = printer.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 11);
    assert!(rows[0].iter().all(|c| c == "---"));
}

#[test]
fn test_empty_metal_plans_yield_placeholder_row() {
    let printer = MetalPlansPrinter::new(vec![], Meta::default());
    let rows = printer.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 11);
    assert!(rows[0].iter().all(|c| c == "---"));
}

#[test]
fn test_metal_plan_rows_are_printed() {
    let printer = MetalPlansPrinter::new(sample_metal_plans(), sample_meta());
    let rows = printer.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec!["vbm-4c-32gb", "4", "E3-1270v6", "8", "32768", "240", "2", "5120", "120.00", "SSD", "ewr,ams,nrt"]
    );
}

#[test]
fn test_custom_table_options() {
    let options = TableOptions {
        decimal_precision: 3,
        list_separator: " | ".into(),
    };
    let printer = PlansPrinter::new(sample_plans(), sample_meta()).with_options(options);
    let row = &printer.rows()[0];
    assert_eq!(row[6], "5.500");
    assert_eq!(row[10], "ewr | lax");
}

#[test]
fn test_paging_rows() {
    let printer = PlansPrinter::new(sample_plans(), sample_meta());
    let paging = printer.paging_rows();
    assert_eq!(paging.len(), 3);
    assert_eq!(paging[0], vec![PAGING_SEPARATOR]);
    assert_eq!(paging[1], vec!["TOTAL", "NEXT PAGE", "PREV PAGE"]);
    assert_eq!(paging[2], vec!["2", "bmV4dF9fdmMyLTFjLTFnYg==", ""]);
}

#[test]
fn test_plans_json_round_trip() {
    let printer = PlansPrinter::new(sample_plans(), sample_meta());
    let json = printer.to_json().unwrap();
    let decoded: PlansPrinter = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_plans_json_is_indented() {
    let printer = PlansPrinter::new(sample_plans(), sample_meta());
    let json = printer.to_json().unwrap();
    assert!(json.starts_with("{\n  \"plans\": ["));
    assert!(json.contains("\"type\": \"vc2\""));
}

#[test]
fn test_plans_yaml_round_trip() {
    let printer = PlansPrinter::new(sample_plans(), sample_meta());
    let yaml = printer.to_yaml().unwrap();
    let decoded: PlansPrinter = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_metal_plans_json_round_trip() {
    let printer = MetalPlansPrinter::new(sample_metal_plans(), sample_meta());
    let json = printer.to_json().unwrap();
    assert!(json.contains("\"plans_metal\""));
    let decoded: MetalPlansPrinter = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_metal_plans_yaml_round_trip() {
    let printer = MetalPlansPrinter::new(sample_metal_plans(), sample_meta());
    let yaml = printer.to_yaml().unwrap();
    assert!(yaml.contains("plans_metal:"));
    let decoded: MetalPlansPrinter = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_render_empty_table() {
    let printer = MetalPlansPrinter::default();
    let mut buf = Vec::new();
    render(&printer, OutputFormat::Table, &mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("ID"));
    assert!(out.contains("---"));
    assert!(out.contains("TOTAL"));
}

fn plans_with_prices(prices: &[f64]) -> Vec<Plan> {
    prices
        .iter()
        .enumerate()
        .map(|(i, cost)| Plan {
            id: format!("vc2-plan-{}", i),
            monthly_cost: *cost,
            ..Plan::default()
        })
        .collect()
}

const LONG_PRICES: [f64; 4] = [
    9253.544043599999,
    1928.0510674999998,
    370.51407340000003,
    3254.2950432000002,
];

#[test]
fn test_plans_json_round_trip_keeps_full_price_precision() {
    let printer = PlansPrinter::new(plans_with_prices(&LONG_PRICES), sample_meta());
    let decoded: PlansPrinter = serde_json::from_str(&printer.to_json().unwrap()).unwrap();
    let costs: Vec<f64> = decoded.plans.iter().map(|p| p.monthly_cost).collect();
    assert_eq!(costs, LONG_PRICES.to_vec());
    assert_eq!(decoded, printer);
}

#[test]
fn test_plans_yaml_round_trip_keeps_full_price_precision() {
    let printer = PlansPrinter::new(plans_with_prices(&LONG_PRICES), sample_meta());
    let decoded: PlansPrinter = serde_yaml::from_str(&printer.to_yaml().unwrap()).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_metal_plans_json_round_trip_keeps_full_price_precision() {
    let plans = LONG_PRICES
        .iter()
        .map(|cost| BareMetalPlan { monthly_cost: *cost, ..BareMetalPlan::default() })
        .collect();
    let printer = MetalPlansPrinter::new(plans, Meta::default());
    let decoded: MetalPlansPrinter = serde_json::from_str(&printer.to_json().unwrap()).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_round_trip_ignores_table_options() {
    let options = TableOptions {
        decimal_precision: 4,
        list_separator: ";".into(),
    };
    let printer = PlansPrinter::new(sample_plans(), sample_meta()).with_options(options.clone());
    let decoded: PlansPrinter = serde_json::from_str(&printer.to_json().unwrap()).unwrap();
    assert_eq!(decoded.options, TableOptions::default());
    assert_eq!(decoded, printer);

    let metal = MetalPlansPrinter::new(sample_metal_plans(), sample_meta()).with_options(options);
    let decoded: MetalPlansPrinter = serde_yaml::from_str(&metal.to_yaml().unwrap()).unwrap();
    assert_eq!(decoded, metal);
}

#[test]
fn test_different_records_are_not_equal() {
    let a = PlansPrinter::new(sample_plans(), sample_meta());
    let b = PlansPrinter::new(plans_with_prices(&[1.0]), sample_meta());
    assert_ne!(a, b);
}

#[test]
fn test_empty_plans_round_trip() {
    let printer = PlansPrinter::default();

    let json = printer.to_json().unwrap();
    assert!(json.contains("\"plans\": []"));
    let decoded: PlansPrinter = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, printer);
    assert!(decoded.rows()[0].iter().all(|c| c == "---"));

    let decoded: PlansPrinter = serde_yaml::from_str(&printer.to_yaml().unwrap()).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_empty_metal_plans_round_trip() {
    let printer = MetalPlansPrinter::default();

    let json = printer.to_json().unwrap();
    assert!(json.contains("\"plans_metal\": []"));
    let decoded: MetalPlansPrinter = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, printer);
    assert!(decoded.rows()[0].iter().all(|c| c == "---"));

    let yaml = printer.to_yaml().unwrap();
    assert!(yaml.contains("plans_metal: []"));
    let decoded: MetalPlansPrinter = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded, printer);
}

#[test]
fn test_paging_comes_from_wrapped_meta() {
    let printer = MetalPlansPrinter::new(sample_metal_plans(), sample_meta());
    let paging = printer.paging();
    assert!(paging.has_next());
    assert!(!paging.has_prev());
    assert_eq!(
        paging.navigation_hints("metal"),
        vec!["→ Next page: plans metal --cursor bmV4dF9fdmMyLTFjLTFnYg=="]
    );
}

use std::io::Write;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use plans::api::{self, ApiClient};
use plans::config::{self, DEFAULT_PER_PAGE};
use plans::plans::ListOptions;
use plans::printer::{render, OutputFormat, Printer, TableOptions};
use plans::{Error, Result};

#[derive(Parser)]
#[command(
    name = "plans",
    author,
    version,
    about = "List compute and bare-metal plans",
    long_about = r#"List the compute and bare-metal plans offered by the API.

Results are printed as a table by default; use `--output json` or `--output yaml` for machine-readable output. Credentials are read from API_TOKEN (and optionally API_BASE_URL), either from the environment or a `.env` file.

Examples:
  1) All compute plans:
      plans list
  2) Only VC2 plans as JSON:
      plans list --type vc2 -o json
  3) Next page of bare-metal plans:
      plans metal --per-page 10 --cursor <cursor>
"#,
    after_help = "Use `plans <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List compute plans
    #[command(about = "List compute plans", long_about = "List the compute plans available for deployment. Filter by plan type with `--type` (e.g. vc2, vhf, vdc, voc, vcg) or by operating system with `--os`. Use `--per-page` and `--cursor` to page through results.")]
    List {
        /// Plan type filter (all, vc2, vhf, vhp, vdc, voc, vcg, ...)
        #[arg(long = "type", short = 't')]
        plan_type: Option<String>,
        /// Only show plans compatible with this operating system id
        #[arg(long)]
        os: Option<String>,
        /// Number of plans per page
        #[arg(long, short = 'p', default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,
        /// Cursor of the page to fetch
        #[arg(long, short = 'c')]
        cursor: Option<String>,
    },
    /// List bare-metal plans
    #[command(about = "List bare-metal plans", long_about = "List the dedicated bare-metal plans available for deployment. Use `--per-page` and `--cursor` to page through results.")]
    Metal {
        /// Number of plans per page
        #[arg(long, short = 'p', default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,
        /// Cursor of the page to fetch
        #[arg(long, short = 'c')]
        cursor: Option<String>,
    },
    /// Validate configuration (env vars / API credentials)
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Check that API_BASE_URL and API_TOKEN are configured, then fetch a single plan to confirm the API accepts the token.")]
    CheckConfig,
}

fn build_client() -> Result<ApiClient> {
    ApiClient::new(config::get_api_base_url(), config::get_api_token())
}

fn print_page<P: Printer>(page: &P, format: OutputFormat, command: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(page, format, &mut out)?;

    if format == OutputFormat::Table {
        for hint in page.paging().navigation_hints(command) {
            writeln!(out, "{}", yansi::Paint::new(hint).dim())?;
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    config::load_env_file(cli.env_file.as_deref());
    let table_options = TableOptions::from_env();

    match cli.command {
        Commands::List { plan_type, os, per_page, cursor } => {
            let client = build_client()?;
            let opts = ListOptions { plan_type, os, per_page, cursor };
            let page = api::list_plans(&client, &opts).await?.with_options(table_options);
            print_page(&page, cli.output, "list")
        }
        Commands::Metal { per_page, cursor } => {
            let client = build_client()?;
            let opts = ListOptions { per_page, cursor, ..ListOptions::default() };
            let page = api::list_metal_plans(&client, &opts).await?.with_options(table_options);
            print_page(&page, cli.output, "metal")
        }
        Commands::CheckConfig => {
            if config::get_api_token().trim().is_empty() {
                return Err(Error::Config("API_TOKEN is not configured".into()));
            }
            let client = build_client()?;
            let opts = ListOptions { per_page: 1, ..ListOptions::default() };
            let page = api::list_plans(&client, &opts).await?;
            println!(
                "{} ({}, {} plans available)",
                yansi::Paint::new("Configuration looks valid").green(),
                client.base_url(),
                page.meta.total
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(%e, "Command failed");
        eprintln!("{}: {}", yansi::Paint::new("Error").red(), e);
        process::exit(1);
    }
}

//! # Hangar Docs CLI
//!
//! Command-line interface for rendering aviation compliance records.
//!
//! ## Usage
//!
//! ```bash
//! # Render a part record for the browser
//! hangar-docs render part.json
//!
//! # Printable page with a QR deep link
//! hangar-docs render part.json --mode print --qr --base-url https://hangar.example -o tag.html
//!
//! # Email body and its inline images, as JSON
//! hangar-docs render part.json --mode email
//!
//! # Traceability timeline
//! hangar-docs timeline part.json
//!
//! # Inventory report as CSV
//! hangar-docs report items.json --type by-location --format csv
//!
//! # Start the HTTP server
//! hangar-docs serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use hangar_docs::{
    Assembler, Config, DocsError, Part, RenderMode, RenderOptions,
    document::{email, print, web},
    logging::{Verbosity, init_logging},
    report::{Filters, ReportSnapshot, ReportTable, ReportType, dispatch, export, html},
    server,
};

/// Hangar Docs - compliance records for aviation part inventory
#[derive(Parser, Debug)]
#[command(name = "hangar-docs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./hangar-docs.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a part record
    Render {
        /// Part record (JSON, camelCase or snake_case)
        part: PathBuf,

        /// Delivery context
        #[arg(long, default_value = "web")]
        mode: RenderMode,

        /// Embed a QR code linking to the part
        #[arg(long)]
        qr: bool,

        /// Base URL for the QR deep link (falls back to server.public_base_url)
        #[arg(long)]
        base_url: Option<String>,

        /// Write the full page instead of a bare fragment (web mode)
        #[arg(long)]
        page: bool,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a part's traceability timeline
    Timeline {
        /// Part record with its history (JSON)
        part: PathBuf,

        #[arg(long, default_value = "web")]
        mode: RenderMode,

        #[arg(long)]
        qr: bool,

        #[arg(long)]
        base_url: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Build an inventory report
    Report {
        /// JSON array of part records
        items: PathBuf,

        /// Report type (TOTAL_INVENTORY, BY_STATUS, BY_LOCATION, BY_PART_NUMBER)
        #[arg(long = "type", default_value = "TOTAL_INVENTORY")]
        report_type: ReportType,

        #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
        format: ReportFormat,

        /// Filter applied to select the items, recorded in the snapshot (KEY=VALUE)
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Name recorded as the report author
        #[arg(long, default_value = "System")]
        generated_by: String,

        /// Acknowledgement token for the dispatch email (random when omitted)
        #[arg(long)]
        token: Option<String>,

        /// Base URL for the acknowledgement link
        #[arg(long)]
        base_url: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Listen address (overrides server.listen_addr)
        #[arg(long)]
        listen: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ReportFormat {
    /// Landscape printable page
    Html,
    Csv,
    /// Dispatch email with an acknowledgement link
    Email,
    /// Raw snapshot
    Json,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DocsError> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let mut config = Config::load_from(cli.config.as_deref())?;
    let assembler = Assembler::from_config(&config);

    match cli.command {
        Commands::Render {
            part,
            mode,
            qr,
            base_url,
            page,
            output,
        } => {
            let part = read_part(&part)?;
            let options = render_options(&config, mode, qr, base_url);
            let rendered = match mode {
                RenderMode::Web if page => web::render_page(&assembler, &part, &options)?,
                RenderMode::Web => assembler.assemble(&part, &options)?,
                RenderMode::Print => print::render_part(&assembler, &part, &options)?,
                RenderMode::Email => {
                    serde_json::to_string_pretty(&email::render_part(&assembler, &part, &options)?)?
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }

        Commands::Timeline {
            part,
            mode,
            qr,
            base_url,
            output,
        } => {
            let part = read_part(&part)?;
            let options = render_options(&config, mode, qr, base_url);
            let rendered = assembler.timeline(&part.history, &part.identity(), &options)?;
            write_output(output.as_deref(), &rendered)?;
        }

        Commands::Report {
            items,
            report_type,
            format,
            filters,
            generated_by,
            token,
            base_url,
            output,
        } => {
            let items: Vec<Part> = serde_json::from_str(&fs::read_to_string(&items)?)?;
            let snapshot = ReportSnapshot::build(
                items,
                parse_filters(&filters)?,
                &generated_by,
                report_type,
                Utc::now(),
            );
            info!(
                report = %snapshot.report_id,
                items = snapshot.summary.total,
                "report built"
            );

            let rendered = match format {
                ReportFormat::Html => html::render_page(&snapshot, assembler.branding()),
                ReportFormat::Csv => export::to_csv_string(&ReportTable::from_snapshot(&snapshot))?,
                ReportFormat::Json => serde_json::to_string_pretty(&snapshot)?,
                ReportFormat::Email => {
                    let base_url = base_url
                        .or_else(|| config.server.public_base_url.clone())
                        .ok_or(DocsError::MissingBaseUrl)?;
                    let token = token.unwrap_or_else(|| Uuid::new_v4().simple().to_string());
                    let body = dispatch::render_dispatch(
                        &snapshot,
                        assembler.branding(),
                        &base_url,
                        &token,
                    )?;
                    serde_json::to_string_pretty(&body)?
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }

        Commands::Serve { listen } => {
            if let Some(listen) = listen {
                config.server.listen_addr = listen;
            }
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

fn read_part(path: &Path) -> Result<Part, DocsError> {
    let json = fs::read_to_string(path)?;
    let part: Part = serde_json::from_str(&json)?;
    debug!(part = %part.id, path = %path.display(), "part record loaded");
    Ok(part)
}

fn render_options(
    config: &Config,
    mode: RenderMode,
    qr: bool,
    base_url: Option<String>,
) -> RenderOptions {
    let mut options = RenderOptions::new(mode);
    if qr {
        options.include_qr = true;
        options.base_url = base_url.or_else(|| config.server.public_base_url.clone());
    }
    options
}

/// Parse `KEY=VALUE` filters. Values that read as JSON (numbers, booleans)
/// keep their type; everything else is a string.
fn parse_filters(raw: &[String]) -> Result<Filters, DocsError> {
    let mut filters = Filters::new();
    for entry in raw {
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            DocsError::InvalidRecord(format!("filter '{}' is not KEY=VALUE", entry))
        })?;
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        filters.insert(key.trim().to_string(), value);
    }
    Ok(filters)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), DocsError> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(path = %path.display(), bytes = content.len(), "written");
        }
        None => println!("{}", content),
    }
    Ok(())
}

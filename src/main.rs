mod cause_list;
mod config;
mod error;
mod heuristics;
mod lawyer;
mod matcher;
mod pdf_extract;

use cause_list::CauseList;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "wclist",
    version,
    about = "Read a warden's court cause list PDF and find assigned matters in it"
)]
struct Cli {
    /// Cause list PDF to read
    pdf: PathBuf,

    /// TOML config with cause list metadata and lawyers' matters
    /// [default: .config/wclist.toml, skipped when absent]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only search the matters assigned to this lawyer
    #[arg(long)]
    lawyer: Option<String>,

    /// Also search for this client, in addition to the configured matters
    #[arg(long)]
    client: Option<String>,

    /// Tenement number for --client
    #[arg(long, requires = "client", default_value = "")]
    tenement: String,

    /// Other party names for --client (repeatable)
    #[arg(long = "other-party", requires = "client")]
    other_parties: Vec<String>,

    /// Print records and matches as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    jurisdiction: &'a str,
    warden: &'a str,
    release_date: String,
    records: &'a [heuristics::Record],
    matches: Vec<matcher::MatchResult<'a>>,
    diagnostics: &'a [String],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::load_or_default(config::DEFAULT_CONFIG_PATH)?,
    };

    let mut cause_list = CauseList::new(
        &cfg.header.jurisdiction,
        &cfg.header.warden,
        cfg.header.release_date()?,
    );

    let pdf_bytes = std::fs::read(&cli.pdf)?;
    info!(path = %cli.pdf.display(), bytes = pdf_bytes.len(), "Loaded PDF");
    let summary = cause_list.read_cause_list(&pdf_bytes)?;

    let mut assigned = cfg.assigned_matters(cli.lawyer.as_deref());
    if let Some(client) = &cli.client {
        let mut ad_hoc = lawyer::Lawyer::new("command line", "", "");
        let others: Vec<&str> = cli.other_parties.iter().map(String::as_str).collect();
        ad_hoc.add_assigned_matter(client, &cli.tenement, &others);
        assigned.extend(ad_hoc.assigned);
    }
    info!(matters = assigned.len(), "Searching assigned matters");
    let matches = cause_list.search_assigned_matters(&assigned);

    if cli.json {
        let report = Report {
            jurisdiction: &cause_list.jurisdiction,
            warden: &cause_list.warden,
            release_date: cause_list.release_date.format(&Rfc3339)?,
            records: &cause_list.items,
            matches,
            diagnostics: &summary.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} cause list ({}), {} records",
        cause_list.jurisdiction,
        cause_list.release_date.format(&Rfc3339)?,
        cause_list.items.len()
    );
    for (i, record) in cause_list.items.iter().enumerate() {
        println!("\nRecord {}: {}", i + 1, record.section());
        println!("  Matter Number: {}", record.matter_number());
        if let Some(objection) = record.objection_number() {
            println!("  Objection Number: {objection}");
        }
        println!("  Tenement: {}", record.tenement_number());
        println!("  Applying Party: {}", record.applying_party());
        println!("  Responding Party: {}", record.responding_party());
        println!("  Comments: {}", record.comments());
    }

    for message in &summary.diagnostics {
        println!("\n! {message}");
    }

    if matches.is_empty() {
        println!("\nNo matches found for assigned matters.");
        return Ok(());
    }

    println!("\nFound {} matches:", matches.len());
    for (i, m) in matches.iter().enumerate() {
        println!("\nMatch {}:", i + 1);
        println!("  Client: {}", m.assigned_matter.client_name);
        println!("  Tenement: {}", m.assigned_matter.tenement_number);
        println!("  Matter Number: {}", m.record.matter_number());
        println!("  Match Reason: {}", m.reason);
    }

    Ok(())
}

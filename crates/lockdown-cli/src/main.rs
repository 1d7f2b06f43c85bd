//! lockdown: command-line interface for lockdown-core
//!
//! Reads a lockdown table pasted from a wiki page, keeps the national
//! lockdowns, resolves country codes, and writes a JSON document with the
//! eyeball networks of each country and the ASes they depend on.
//!
//! Usage examples
//! --------------
//!
//! - Full pipeline, writing `lockdowns.json`
//!   $ lockdown table.txt
//!
//! - Keyed by ISO2 code, without the hegemony queries
//!   $ lockdown --key cc --skip-dependencies -o eyeballs.json table.txt
//!
//! - See what each line turns into, offline
//!   $ lockdown parse table.txt
//!
//! - Check how a name resolves
//!   $ lockdown resolve United Kingdom
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`).
mod args;

use crate::args::{BuildArgs, CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use lockdown_core::loader::read_lines;
use lockdown_core::prelude::*;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let custom_db;
    let db: &CountryDb = match &args.countries {
        Some(path) => {
            custom_db = CountryDb::load_from_path(path)
                .with_context(|| format!("loading country dataset {}", path.display()))?;
            &custom_db
        }
        None => CountryDb::bundled().context("loading bundled country dataset")?,
    };

    match args.command {
        Some(Commands::Parse { input }) => parse(db, &input),
        Some(Commands::Resolve { name, subdivision }) => {
            match db.resolve(&name, subdivision.as_deref()) {
                Some(r) => {
                    println!("Name: {}", r.name);
                    println!("ISO2: {}", r.cc);
                    println!("Continent: {}", r.continent);
                    Ok(())
                }
                None => bail!("no country found for: {name}"),
            }
        }
        Some(Commands::Countries) => {
            for c in db.countries() {
                println!("{} ({}, {})", c.name, c.iso2, c.continent);
            }
            Ok(())
        }
        None => match args.input {
            Some(input) => build(db, &input, &args.build),
            None => bail!("an input file is required"),
        },
    }
}

fn build(db: &CountryDb, input: &Path, opts: &BuildArgs) -> anyhow::Result<()> {
    let lines = read_lines(input).with_context(|| format!("reading {}", input.display()))?;
    info!(lines = lines.len(), input = %input.display(), "startup");

    let endpoints = Endpoints {
        eyeball_template: opts.eyeball_url.clone(),
        hegemony_url: opts.hegemony_url.clone(),
    };
    let timeout = (opts.timeout > 0).then(|| Duration::from_secs(opts.timeout));
    let source = HttpNetworkSource::new(endpoints, timeout).context("building HTTP client")?;

    let config = PipelineConfig {
        top: opts.top,
        key: opts.key.into(),
        dependencies: !opts.skip_dependencies,
    };
    let report = Pipeline::new(db, &source, config)
        .run(&lines)
        .context("enriching lockdown records")?;

    write_json_file(&opts.output, &report.records)
        .with_context(|| format!("writing {}", opts.output.display()))?;

    let stats = report.stats();
    info!(
        records = stats.records,
        skipped = stats.lines() - stats.accepted,
        output = %opts.output.display(),
        "all done"
    );
    Ok(())
}

fn parse(db: &CountryDb, input: &Path) -> anyhow::Result<()> {
    let lines = read_lines(input).with_context(|| format!("reading {}", input.display()))?;
    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        match classify_line(db, line) {
            LineOutcome::Accepted(r) => {
                let w = r.monitoring_dates;
                println!(
                    "{line_no:>4}  OK          {} ({}, {}) start {} lockdown {}..{} before {}..{}",
                    r.name,
                    r.cc,
                    r.continent,
                    r.start,
                    w.lockdown.monday,
                    w.lockdown.sunday,
                    w.before.monday,
                    w.before.sunday
                );
            }
            LineOutcome::Skipped(SkipReason::Comment) => {}
            LineOutcome::Skipped(SkipReason::Scope { scope }) => {
                println!("{line_no:>4}  SCOPE       {scope}");
            }
            LineOutcome::Skipped(SkipReason::Unresolved { name }) => {
                println!("{line_no:>4}  UNRESOLVED  {name}");
            }
            LineOutcome::Skipped(SkipReason::Malformed { reason }) => {
                println!("{line_no:>4}  MALFORMED   {reason}");
            }
        }
    }
    Ok(())
}

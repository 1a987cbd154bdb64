//! fileops demo
//!
//! Runs the fixed create → write → append → read → rename → copy → delete
//! sequence and prints one status line per step.
//!
//! No CLI flags. Environment:
//! - FILEOPS_ROOT: directory to run in (default ".")
//! - FILEOPS_JSON: print the report as JSON
//! - RUST_LOG: log filter (default "warn")

use anyhow::{Context, Result};

use fileops::logging::init_logging;
use fileops::{run_demo, DemoConfig, FileOperations};

fn main() -> Result<()> {
    init_logging()?;

    let config = DemoConfig::from_env().context("failed to resolve demo configuration")?;
    let ops = FileOperations::new();
    let report = run_demo(&ops, &config.root);

    if config.json_output {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{}", json);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

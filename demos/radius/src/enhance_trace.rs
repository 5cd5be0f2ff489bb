//! enhance_trace — add `dt`, `dx`, and `v` columns to a vehicle trace CSV.
//!
//! ```text
//! enhance_trace <input.csv> <output.csv>
//! ```
//!
//! The input must have `Timestamp(ms)`, `Latitude[deg]`, and
//! `Longitude[deg]` columns (Vehicle Energy Dataset layout).  Prints the
//! Tukey upper-whisker speed so implausible GPS jumps can be filtered.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use gs_trace::{TraceConfig, TraceEnhancer, load_trace_csv, write_trace_csv};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        bail!("usage: enhance_trace <input.csv> <output.csv>");
    };
    let (input, output) = (PathBuf::from(input), PathBuf::from(output));

    let config = TraceConfig::default();
    let mut trace = load_trace_csv(&input, &config)
        .with_context(|| format!("reading {}", input.display()))?;

    let enhancer = TraceEnhancer::new(config);
    enhancer.enhance(&mut trace)?;

    write_trace_csv(&output, &trace, enhancer.config())
        .with_context(|| format!("writing {}", output.display()))?;

    let distance_m: f64 = trace.dx().map(|dx| dx.iter().sum()).unwrap_or(0.0);
    println!("{} samples, {:.1} km travelled", trace.len(), distance_m / 1_000.0);
    match enhancer.max_speed(&trace)? {
        Some(v) => println!("speed whisker: {v:.1} km/h"),
        None => println!("speed whisker: n/a (empty trace)"),
    }

    Ok(())
}

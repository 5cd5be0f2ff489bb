//! CSV trace loader and writer.
//!
//! # CSV format
//!
//! One row per sample, located by header name (see [`TraceConfig`]); extra
//! columns are ignored on load.
//!
//! ```csv
//! Timestamp(ms),Latitude[deg],Longitude[deg]
//! 0,42.2776,-83.6985
//! 1000,42.2777,-83.6984
//! ```
//!
//! On write the three base columns come first, followed by whichever of
//! `dt`, `dx`, `v` have been computed.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, StringRecord, Writer};

use crate::{Trace, TraceConfig, TraceError, TraceResult};

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load a trace from a CSV file.
pub fn load_trace_csv(path: &Path, config: &TraceConfig) -> TraceResult<Trace> {
    let file = File::open(path)?;
    load_trace_reader(file, config)
}

/// Like [`load_trace_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_trace_reader<R: Read>(reader: R, config: &TraceConfig) -> TraceResult<Trace> {
    let mut csv_reader = Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let cols = [&config.ts_col, &config.lat_col, &config.lon_col];
    let mut pos = [0usize; 3];
    for (slot, name) in pos.iter_mut().zip(cols) {
        *slot = column_position(&headers, name)?;
    }

    let mut timestamps = Vec::new();
    let mut lats = Vec::new();
    let mut lons = Vec::new();

    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        timestamps.push(parse_field(&record, row, pos[0], cols[0])?);
        lats.push(parse_field(&record, row, pos[1], cols[1])?);
        lons.push(parse_field(&record, row, pos[2], cols[2])?);
    }

    log::debug!("loaded {} trace samples", timestamps.len());
    Trace::new(timestamps, lats, lons)
}

fn column_position(headers: &StringRecord, name: &str) -> TraceResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| TraceError::MissingColumn(name.to_owned()))
}

fn parse_field(record: &StringRecord, row: usize, pos: usize, column: &str) -> TraceResult<f64> {
    let raw = record.get(pos).unwrap_or("");
    raw.trim().parse::<f64>().map_err(|_| TraceError::Parse {
        row,
        column: column.to_owned(),
        value: raw.to_owned(),
    })
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Write a trace, including any computed derived columns, to a CSV file.
pub fn write_trace_csv(path: &Path, trace: &Trace, config: &TraceConfig) -> TraceResult<()> {
    let file = File::create(path)?;
    write_trace_writer(file, trace, config)
}

/// Like [`write_trace_csv`] but accepts any `Write` sink.
pub fn write_trace_writer<W: Write>(sink: W, trace: &Trace, config: &TraceConfig) -> TraceResult<()> {
    let mut writer = Writer::from_writer(sink);

    let derived: Vec<(&str, &[f64])> = [
        (config.dt_col.as_str(), trace.dt()),
        (config.dx_col.as_str(), trace.dx()),
        (config.speed_col.as_str(), trace.speed()),
    ]
    .into_iter()
    .filter_map(|(name, col)| col.map(|c| (name, c)))
    .collect();

    let mut header = vec![config.ts_col.as_str(), config.lat_col.as_str(), config.lon_col.as_str()];
    header.extend(derived.iter().map(|(name, _)| *name));
    writer.write_record(&header)?;

    for i in 0..trace.len() {
        let mut row = vec![
            trace.timestamps()[i].to_string(),
            trace.lats()[i].to_string(),
            trace.lons()[i].to_string(),
        ];
        row.extend(derived.iter().map(|(_, col)| col[i].to_string()));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

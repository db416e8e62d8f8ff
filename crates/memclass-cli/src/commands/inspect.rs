//! Inspect command for decoding a class layout from a memory dump.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use memclass_core::{
    Class, MemclassConfig, ProjectData, SnapshotMemory, format_address, format_offset,
    parse_address,
};
use serde::Serialize;
use tracing::info;

use crate::cli_utils::FieldSpec;

const DEFAULT_CLASS_NAME: &str = "Dump";

pub struct InspectOptions<'a> {
    pub dump: &'a Path,
    pub base: &'a str,
    pub address: Option<&'a str>,
    /// Class name; `None` keeps the seed name, or "Dump" for `--field` layouts.
    pub name: Option<&'a str>,
    pub fields: &'a [FieldSpec],
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    class: &'a str,
    address: u64,
    decoded: usize,
    failed: usize,
    properties: Vec<Row>,
}

#[derive(Debug, Serialize)]
struct Row {
    offset: u64,
    address: u64,
    name: String,
    kind: String,
    value: Option<String>,
}

pub fn run(config: &MemclassConfig, options: &InspectOptions<'_>) -> Result<()> {
    let data = fs::read(options.dump)
        .with_context(|| format!("Failed to read dump {}", options.dump.display()))?;
    info!("Loaded {} bytes from {:?}", data.len(), options.dump);

    print!("{}", render(config, data, options)?);
    Ok(())
}

pub fn render(
    config: &MemclassConfig,
    data: Vec<u8>,
    options: &InspectOptions<'_>,
) -> Result<String> {
    let base = parse_address(options.base)?;
    let address = match options.address {
        Some(address) => parse_address(address)?,
        None => base,
    };
    let memory = SnapshotMemory::new(base, data);

    let mut project = ProjectData::with_config(config);
    let uuid = if options.fields.is_empty() {
        project
            .class_at(0)
            .context("Project has no seeded class")?
            .uuid()
    } else {
        let class = project.new_class(DEFAULT_CLASS_NAME);
        for spec in options.fields {
            spec.apply(class);
        }
        class.uuid()
    };

    let class = project
        .get_class_mut(&uuid)
        .context("Inspected class disappeared from project")?;
    if let Some(name) = options.name {
        class.name = name.to_string();
    }
    class.set_address(address);
    let report = class.refresh(&memory, config.pointer_width);
    eprintln!(
        "{}: {} decoded, {} failed",
        class.name, report.decoded, report.failed
    );

    let rows = rows(class);
    if options.json {
        let report = Report {
            class: &class.name,
            address: class.address,
            decoded: report.decoded,
            failed: report.failed,
            properties: rows,
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }

    let mut output = String::new();
    for row in &rows {
        let _ = writeln!(
            output,
            "{} {} {:<16} {:<7} {}",
            format_offset(row.offset),
            format_address(row.address),
            row.name,
            row.kind,
            row.value.as_deref().unwrap_or("??")
        );
    }
    Ok(output)
}

fn rows(class: &Class) -> Vec<Row> {
    class
        .properties
        .iter()
        .map(|p| Row {
            offset: p.offset,
            address: class.address.wrapping_add(p.offset),
            name: p.display_name().to_string(),
            kind: p.kind.to_string(),
            value: p.data.as_ref().map(|v| v.to_string()),
        })
        .collect()
}

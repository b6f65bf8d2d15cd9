use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use catmatch_core::{Matcher, aggregate, build_report};
use catmatch_ingest::{REPORT_CSV_NAME, ReadOptions, discover_input_files, load_input_file};
use catmatch_map::{MappingTable, load_mapping_file};
use catmatch_model::Report;
use catmatch_output::{write_report, write_summary_csv};

use crate::cli::{MappingArgs, ReportFormatArg, RunArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

const REPORT_XLSX_NAME: &str = "category_match_report.xlsx";

pub fn run_mapping(args: &MappingArgs) -> Result<()> {
    let table = effective_mapping(args.mapping.as_deref())?;
    let mut output = Table::new();
    output.set_header(vec!["Spanish category", "English slug"]);
    apply_table_style(&mut output);
    for (_, entry) in table.iter() {
        output.add_row(vec![entry.label.as_str(), entry.slug.as_str()]);
    }
    println!("{output}");
    println!("{} entries", table.len());
    Ok(())
}

pub fn run_report(args: &RunArgs) -> Result<RunResult> {
    let root = &args.root;
    let span = info_span!("run", root = %root.display());
    let _guard = span.enter();

    let table = effective_mapping(args.mapping.as_deref())?;
    let matcher = Matcher::new(&table);
    let options = ReadOptions::default().with_delimiter(delimiter_byte(args.delimiter)?);
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(root, args.format));

    // A CSV report written into ROOT by an earlier run is not an input.
    let output_name = output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    let excluded: Vec<&str> = output_name.iter().map(String::as_str).collect();
    let inputs = discover_input_files(root, &excluded)
        .with_context(|| format!("discover CSV files in {}", root.display()))?;
    if inputs.is_empty() {
        bail!(
            "no CSV files found in {} or its reports/ folder",
            root.display()
        );
    }
    info!(files = inputs.len(), "discovered input files");

    let mut results = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let input = load_input_file(path, &options)
            .with_context(|| format!("read {}", path.display()))?;
        results.push(aggregate(&input.filename, input.rows, &matcher));
    }
    let report = build_report(&results);

    let output = if args.dry_run {
        info!("dry run, report not written");
        None
    } else {
        Some(write_output(&report, &output_path, args.format)?)
    };

    Ok(RunResult {
        root: root.clone(),
        inputs,
        report,
        output,
    })
}

/// Built-in table, with entries from `overrides` taking precedence.
pub fn effective_mapping(overrides: Option<&Path>) -> Result<MappingTable> {
    let mut table = MappingTable::default();
    if let Some(path) = overrides {
        let extra = load_mapping_file(path)
            .with_context(|| format!("load mapping file {}", path.display()))?;
        info!(path = %path.display(), entries = extra.len(), "merging mapping overrides");
        table.extend(extra);
    }
    Ok(table)
}

fn write_output(
    report: &Report,
    path: &Path,
    format: ReportFormatArg,
) -> Result<PathBuf> {
    match format {
        ReportFormatArg::Xlsx => {
            write_report(report, path).with_context(|| format!("write {}", path.display()))
        }
        ReportFormatArg::Csv => {
            write_summary_csv(report, path)
                .with_context(|| format!("write {}", path.display()))?;
            Ok(path.to_path_buf())
        }
    }
}

fn default_output_path(root: &Path, format: ReportFormatArg) -> PathBuf {
    match format {
        ReportFormatArg::Xlsx => root.join(REPORT_XLSX_NAME),
        ReportFormatArg::Csv => root.join(REPORT_CSV_NAME),
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }
    Ok(delimiter as u8)
}

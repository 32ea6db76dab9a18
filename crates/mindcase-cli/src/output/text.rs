//! Human-readable rendering of records and diagnostics.

use colored::Colorize;
use mindcase_core::{CaseRecord, CaseStep, ImportReport};
use std::fmt::Write as _;

pub fn print_records_text(records: &[CaseRecord], report: &ImportReport) {
    for record in records {
        print!("{}", format_record(record));
    }

    let summary = format!(
        "{} accepted, {} rejected of {} case nodes",
        report.accepted,
        report.rejected(),
        report.visited
    );
    if report.is_clean() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
}

/// Print each diagnostic on its own line to stderr.
pub fn print_diagnostics(report: &ImportReport) {
    for diagnostic in &report.diagnostics {
        let message = diagnostic.message.trim_end_matches("; ");
        eprintln!("{} {message}", "✗".red());
    }
}

fn format_record(record: &CaseRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} {}",
        record.priority.bold(),
        format!("[{}/{}]", record.case_type.as_str(), record.method.as_str()).dimmed(),
        record.node_path.cyan(),
        record.name
    );
    if let Some(prerequisite) = &record.prerequisite {
        let _ = writeln!(out, "    pc: {prerequisite}");
    }
    for step in &record.steps {
        out.push_str(&format_step(step));
    }
    if let Some(remark) = &record.remark {
        let _ = writeln!(out, "    rc: {remark}");
    }
    out
}

fn format_step(step: &CaseStep) -> String {
    match step.expected_result.as_deref() {
        Some(expected) if !expected.is_empty() => {
            format!("    {}. {} -> {expected}\n", step.index, step.description)
        },
        _ => format!("    {}. {}\n", step.index, step.description),
    }
}

use crag_best_effort::config::best_effort;
use crag_best_effort::diagnostics::{BestEffortReport, LogSink};
use crag_best_effort::io::{load_problem, write_json_file};
use crag_best_effort::BestEffort;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = best_effort::load_config(Path::new(&config_path))?;

    let (crag, volumes, gt) = load_problem(&config.input)?.into_parts()?;
    let best_effort = BestEffort::new(config.params.clone());
    let report = best_effort
        .compute_with_sink(&crag, &volumes, &gt, &mut LogSink)
        .map_err(|e| format!("Best-effort computation failed: {e}"))?;

    print_text_summary(&report);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.selection_json {
        write_json_file(path, &report.selection)?;
        println!("Selection written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &BestEffortReport) {
    let trace = &report.trace;
    println!("Best-effort summary");
    println!(
        "  input: {} nodes ({} regions, {} link nodes, {} placeholders), {} edges",
        trace.input.nodes,
        trace.input.regions,
        trace.input.link_nodes,
        trace.input.placeholders,
        trace.input.edges
    );
    println!(
        "  strategy: {:?} full={}",
        trace.selection.strategy, trace.selection.full_best_effort
    );
    println!(
        "  assignment: foreground={} background={}",
        trace.assignment.foreground, trace.assignment.background
    );
    println!(
        "  selected: {} nodes, {} edges",
        report.selection.num_selected_nodes(),
        report.selection.num_selected_edges()
    );
    let linking = &trace.linking;
    println!(
        "  links: direct={} link_nodes={} conflicts={} no_link={}",
        linking.direct_links_selected,
        linking.link_nodes_selected,
        linking.conflicts_resolved,
        linking.no_links_selected
    );
    let check = &linking.link_check;
    if !check.is_ok() {
        println!(
            "  link check: missing={} partial={} excess={} of {}",
            check.missing.len(),
            check.partial.len(),
            check.excess.len(),
            check.checked
        );
    }
    println!("  latency_ms: {:.3}", trace.timings.total_ms);
    for stage in &trace.timings.stages {
        println!("    {}: {:.3}", stage.stage, stage.elapsed_ms);
    }
}

fn usage() -> String {
    "Usage: best_effort_tool <config.json>".to_string()
}

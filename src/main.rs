use crag_best_effort::prelude::*;
use nalgebra::Vector3;

fn main() {
    // Demo stub: one region split into two halves over a two-label ground truth
    let mut builder = CragBuilder::new();
    let whole = builder.add_node(NodeKind::Region);
    let left = builder.add_node(NodeKind::Region);
    let right = builder.add_node(NodeKind::Region);
    builder.add_subset(left, whole);
    builder.add_subset(right, whole);
    let crag = match builder.build() {
        Ok(crag) => crag,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let unit = Vector3::repeat(1.0);
    let (w, h) = (8usize, 4usize);
    let mut volumes = CragVolumes::new(crag.num_nodes());
    volumes.insert(whole, RegionVolume::from_fn(Vector3::zeros(), unit, [w, h, 1], |_, _, _| true));
    volumes.insert(left, RegionVolume::from_fn(Vector3::zeros(), unit, [w / 2, h, 1], |_, _, _| true));
    volumes.insert(
        right,
        RegionVolume::from_fn(Vector3::new((w / 2) as f64, 0.0, 0.0), unit, [w / 2, h, 1], |_, _, _| true),
    );
    let gt = LabelVolume::from_fn(Vector3::zeros(), unit, [w, h, 1], |x, _, _| {
        GtLabel(if x < w / 2 { 1 } else { 2 })
    });

    match BestEffort::default().compute(&crag, &volumes, &gt) {
        Ok(report) => println!(
            "selected_nodes={} latency_ms={:.3}",
            report.selection.num_selected_nodes(),
            report.trace.timings.total_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}

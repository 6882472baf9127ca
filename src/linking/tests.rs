use super::*;
use crate::assignment::assign_labels;
use crate::crag::CragBuilder;
use crate::diagnostics::NullSink;
use crate::overlap::OverlapHistogram;
use crate::types::{EdgeId, GtLabel, NodeKind};
use crate::volume::RegionVolume;
use nalgebra::Vector3;

/// Small graph where every candidate is a single voxel at a chosen z.
#[derive(Default)]
struct Scene {
    builder: CragBuilder,
    z: Vec<(NodeId, f64)>,
    hists: Vec<(NodeId, OverlapHistogram)>,
}

struct Solved {
    crag: Crag,
    volumes: CragVolumes,
    overlaps: Overlaps,
    assignments: Assignments,
}

impl Solved {
    fn ctx(&self) -> LinkContext<'_> {
        LinkContext {
            crag: &self.crag,
            volumes: &self.volumes,
            overlaps: &self.overlaps,
            assignments: &self.assignments,
        }
    }
}

impl Scene {
    fn node(&mut self, kind: NodeKind, z: f64, label: u32, count: u64) -> NodeId {
        let n = self.builder.add_node(kind);
        self.z.push((n, z));
        if kind.has_overlap() {
            self.hists
                .push((n, std::iter::once((GtLabel(label), count)).collect()));
        }
        n
    }

    fn region(&mut self, z: f64, label: u32, count: u64) -> NodeId {
        self.node(NodeKind::Region, z, label, count)
    }

    fn hub(&mut self, z: f64, label: u32) -> NodeId {
        self.node(NodeKind::Link, z, label, 1)
    }

    fn placeholder(&mut self, z: f64) -> NodeId {
        self.node(NodeKind::NoLinkPlaceholder, z, 0, 0)
    }

    /// Region with its two no-link placeholders one section up and down.
    fn tracked_region(&mut self, z: f64, label: u32, count: u64) -> NodeId {
        let r = self.region(z, label, count);
        let up = self.placeholder(z + 1.0);
        let down = self.placeholder(z - 1.0);
        self.edge(r, up, EdgeKind::NoLink);
        self.edge(r, down, EdgeKind::NoLink);
        r
    }

    fn edge(&mut self, u: NodeId, v: NodeId, kind: EdgeKind) -> EdgeId {
        self.builder.add_edge(u, v, kind)
    }

    fn solve(self) -> Solved {
        let crag = self.builder.build().unwrap();
        let mut volumes = CragVolumes::new(crag.num_nodes());
        for (n, z) in self.z {
            let offset = Vector3::new(0.0, 0.0, z);
            let voxel = RegionVolume::from_fn(offset, Vector3::repeat(1.0), [1, 1, 1], |_, _, _| true);
            volumes.insert(n, voxel);
        }
        let mut hists = vec![None; crag.num_nodes()];
        for (n, h) in self.hists {
            hists[n.index()] = Some(h);
        }
        let overlaps = Overlaps::from_histograms(hists);
        let assignments = assign_labels(&crag, &overlaps, 1.0);
        Solved {
            crag,
            volumes,
            overlaps,
            assignments,
        }
    }
}

fn select(solved: &Solved, nodes: &[NodeId]) -> Selection {
    let mut selection = Selection::for_crag(&solved.crag);
    for &n in nodes {
        selection.set_node(n, true);
    }
    selection
}

#[test]
fn selected_region_clears_its_subtree() {
    let mut scene = Scene::default();
    let root = scene.region(0.0, 1, 4);
    let child = scene.region(0.0, 1, 2);
    let grandchild = scene.region(0.0, 1, 1);
    scene.builder.add_subset(child, root);
    scene.builder.add_subset(grandchild, child);
    let solved = scene.solve();

    let mut selection = select(&solved, &[root, child, grandchild]);
    let mut events = Vec::new();
    let unselected = unselect_descendants(&solved.crag, &mut selection, &mut events);

    assert_eq!(unselected, 2);
    assert_eq!(selection.selected_nodes().collect::<Vec<_>>(), vec![root]);
    assert!(events.contains(&BestEffortEvent::DescendantUnselected {
        ancestor: root,
        node: grandchild
    }));
}

#[test]
fn adjacency_inside_a_full_selection_outlives_the_cleanup() {
    let mut scene = Scene::default();
    let root = scene.region(0.0, 1, 4);
    let a = scene.region(0.0, 1, 2);
    let b = scene.region(0.0, 1, 2);
    scene.builder.add_subset(a, root);
    scene.builder.add_subset(b, root);
    let ab = scene.edge(a, b, EdgeKind::Adjacency);
    let solved = scene.solve();
    let resolver = LinkResolver::new(solved.ctx());

    let mut plain = select(&solved, &[root]);
    let stage = resolver.resolve(&mut plain, &mut NullSink).unwrap();
    assert_eq!(stage.adjacency_selected, 0);
    assert!(!plain.is_edge_selected(ab));

    let mut full = select(&solved, &[root, a, b]);
    let mut events = Vec::new();
    let stage = resolver.resolve(&mut full, &mut events).unwrap();
    assert_eq!(stage.adjacency_selected, 1);
    assert_eq!(stage.descendants_unselected, 2);
    assert_eq!(full.selected_nodes().collect::<Vec<_>>(), vec![root]);
    assert!(full.is_edge_selected(ab));
    let adjacency_at = events
        .iter()
        .position(|e| matches!(e, BestEffortEvent::AdjacencySelected { .. }));
    let cleanup_at = events
        .iter()
        .position(|e| matches!(e, BestEffortEvent::DescendantUnselected { .. }));
    assert!(adjacency_at < cleanup_at);
}

#[test]
fn adjacency_requires_shared_foreground_label() {
    let mut scene = Scene::default();
    let a = scene.region(0.0, 3, 5);
    let b = scene.region(0.0, 3, 5);
    let c = scene.region(0.0, 4, 5);
    let bg0 = scene.region(0.0, 0, 5);
    let bg1 = scene.region(0.0, 0, 5);
    let same = scene.edge(a, b, EdgeKind::Adjacency);
    let differ = scene.edge(b, c, EdgeKind::Adjacency);
    let background = scene.edge(bg0, bg1, EdgeKind::Adjacency);
    let solved = scene.solve();

    let mut selection = select(&solved, &[a, b, c, bg0, bg1]);
    let count = select_adjacency_edges(&solved.ctx(), &mut selection, &mut NullSink);

    assert_eq!(count, 1);
    assert!(selection.is_edge_selected(same));
    assert!(!selection.is_edge_selected(differ));
    assert!(!selection.is_edge_selected(background));
}

#[test]
fn link_hub_needs_all_regions_with_one_foreground_label() {
    let mut scene = Scene::default();
    let a = scene.region(0.0, 2, 5);
    let b = scene.region(2.0, 2, 5);
    let hub = scene.hub(1.0, 2);
    scene.edge(a, hub, EdgeKind::DirectLink);
    scene.edge(hub, b, EdgeKind::DirectLink);

    let c = scene.region(0.0, 2, 5);
    let d = scene.region(2.0, 6, 5);
    let mixed_hub = scene.hub(1.0, 2);
    scene.edge(c, mixed_hub, EdgeKind::DirectLink);
    scene.edge(d, mixed_hub, EdgeKind::DirectLink);

    let lonely_hub = scene.hub(1.0, 2);
    let solved = scene.solve();

    let mut selection = select(&solved, &[a, b, c, d]);
    let mut events = Vec::new();
    let count = select_link_nodes(&solved.ctx(), &mut selection, &mut events);

    assert_eq!(count, 1);
    assert!(selection.is_node_selected(hub));
    assert!(!selection.is_node_selected(mixed_hub));
    assert!(!selection.is_node_selected(lonely_hub));
    assert_eq!(
        events,
        vec![BestEffortEvent::LinkNodeSelected {
            node: hub,
            label: GtLabel(2)
        }]
    );

    // One unselected region keeps the hub off.
    let mut selection = select(&solved, &[a]);
    assert_eq!(select_link_nodes(&solved.ctx(), &mut selection, &mut NullSink), 0);
    assert!(!selection.is_node_selected(hub));
}

#[test]
fn link_hub_between_background_regions_stays_unselected() {
    let mut scene = Scene::default();
    let a = scene.region(0.0, 0, 5);
    let b = scene.region(2.0, 0, 5);
    let hub = scene.hub(1.0, 0);
    scene.edge(a, hub, EdgeKind::DirectLink);
    scene.edge(b, hub, EdgeKind::DirectLink);
    let solved = scene.solve();

    let mut selection = select(&solved, &[a, b]);
    assert_eq!(select_link_nodes(&solved.ctx(), &mut selection, &mut NullSink), 0);
    assert!(!selection.is_node_selected(hub));
}

#[test]
fn direct_links_follow_shared_labels() {
    let mut scene = Scene::default();
    let a = scene.region(0.0, 1, 5);
    let b = scene.region(1.0, 1, 5);
    let c = scene.region(1.0, 2, 5);
    let ab = scene.edge(a, b, EdgeKind::DirectLink);
    let ac = scene.edge(a, c, EdgeKind::DirectLink);
    let solved = scene.solve();

    let mut selection = select(&solved, &[a, b, c]);
    let count = select_direct_links(&solved.ctx(), &mut selection, &mut NullSink);
    assert_eq!(count, 1);
    assert!(selection.is_edge_selected(ab));
    assert!(!selection.is_edge_selected(ac));
}

#[test]
fn competing_links_keep_larger_overlap() {
    let mut scene = Scene::default();
    let strong = scene.tracked_region(0.0, 7, 10);
    let weak = scene.tracked_region(0.0, 7, 4);
    let r = scene.tracked_region(1.0, 7, 12);
    let to_strong = scene.edge(r, strong, EdgeKind::DirectLink);
    let to_weak = scene.edge(r, weak, EdgeKind::DirectLink);
    let solved = scene.solve();

    let mut selection = select(&solved, &[strong, weak, r]);
    let mut events = Vec::new();
    let stage = LinkResolver::new(solved.ctx())
        .resolve(&mut selection, &mut events)
        .unwrap();

    assert_eq!(stage.direct_links_selected, 2);
    assert_eq!(stage.conflicts_resolved, 1);
    assert!(selection.is_edge_selected(to_strong));
    assert!(!selection.is_edge_selected(to_weak));
    assert!(!selection.is_node_selected(weak));
    assert!(events.contains(&BestEffortEvent::ConflictResolved {
        node: r,
        direction: Direction::Down,
        kept: strong,
        removed: weak,
    }));
    assert!(events.contains(&BestEffortEvent::EdgeUnselected {
        edge: to_weak,
        u: r,
        v: weak,
    }));

    // Remaining regions end up with one link per direction.
    assert!(stage.link_check.is_ok());
    assert_eq!(stage.link_check.checked, 2);
    let ctx = solved.ctx();
    assert_eq!(ctx.active_links(&selection, r).unwrap(), [1, 1]);
    assert_eq!(ctx.active_links(&selection, strong).unwrap(), [1, 1]);
}

#[test]
fn three_competing_links_reduce_to_the_strongest() {
    let mut scene = Scene::default();
    let strong = scene.tracked_region(0.0, 7, 10);
    let mid = scene.tracked_region(0.0, 7, 6);
    let weak = scene.tracked_region(0.0, 7, 4);
    let r = scene.tracked_region(1.0, 7, 12);
    let to_weak = scene.edge(r, weak, EdgeKind::DirectLink);
    let to_mid = scene.edge(r, mid, EdgeKind::DirectLink);
    let to_strong = scene.edge(r, strong, EdgeKind::DirectLink);
    let solved = scene.solve();

    let mut selection = select(&solved, &[strong, mid, weak, r]);
    let mut events = Vec::new();
    let stage = LinkResolver::new(solved.ctx())
        .resolve(&mut selection, &mut events)
        .unwrap();

    assert_eq!(stage.direct_links_selected, 3);
    assert_eq!(stage.conflicts_resolved, 2);
    let conflicts: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            BestEffortEvent::ConflictResolved { kept, removed, .. } => Some((*kept, *removed)),
            _ => None,
        })
        .collect();
    assert_eq!(conflicts, vec![(mid, weak), (strong, mid)]);

    assert!(selection.is_edge_selected(to_strong));
    assert!(!selection.is_edge_selected(to_mid));
    assert!(!selection.is_edge_selected(to_weak));
    let mut remaining: Vec<_> = selection.selected_nodes().collect();
    remaining.sort();
    assert_eq!(remaining, vec![strong, r]);
    assert!(stage.link_check.is_ok());
    assert_eq!(stage.link_check.checked, 2);
}

#[test]
fn duplicate_no_link_edges_in_one_direction_are_excess() {
    let mut scene = Scene::default();
    // Two "up" placeholders and nothing below.
    let lopsided = scene.region(0.0, 3, 2);
    for z in [1.0, 2.0] {
        let p = scene.placeholder(z);
        scene.edge(lopsided, p, EdgeKind::NoLink);
    }
    // Same, plus one below: three active edges in total.
    let crowded = scene.region(5.0, 3, 2);
    for z in [6.0, 7.0, 4.0] {
        let p = scene.placeholder(z);
        scene.edge(crowded, p, EdgeKind::NoLink);
    }
    let solved = scene.solve();

    let mut selection = select(&solved, &[lopsided, crowded]);
    let mut events = Vec::new();
    let stage = LinkResolver::new(solved.ctx())
        .resolve(&mut selection, &mut events)
        .unwrap();

    assert_eq!(stage.no_links_selected, 5);
    let check = &stage.link_check;
    assert_eq!(check.checked, 2);
    assert_eq!(check.excess, vec![lopsided, crowded]);
    assert!(check.missing.is_empty() && check.partial.is_empty());
    assert!(events.contains(&BestEffortEvent::LinkCheckFailed {
        node: lopsided,
        active: [2, 0]
    }));
    assert!(events.contains(&BestEffortEvent::LinkCheckFailed {
        node: crowded,
        active: [2, 1]
    }));
}

#[test]
fn equal_overlap_drops_the_earlier_link() {
    let mut scene = Scene::default();
    let first = scene.tracked_region(0.0, 7, 6);
    let second = scene.tracked_region(0.0, 7, 6);
    let r = scene.tracked_region(1.0, 7, 12);
    scene.edge(r, first, EdgeKind::DirectLink);
    scene.edge(r, second, EdgeKind::DirectLink);
    let solved = scene.solve();

    let mut selection = select(&solved, &[first, second, r]);
    LinkResolver::new(solved.ctx())
        .resolve(&mut selection, &mut NullSink)
        .unwrap();

    assert!(!selection.is_node_selected(first));
    assert!(selection.is_node_selected(second));
}

#[test]
fn missing_direction_takes_no_link_edge() {
    let mut scene = Scene::default();
    let lower = scene.region(0.0, 5, 3);
    let upper = scene.region(2.0, 5, 3);
    let hub = scene.hub(1.0, 5);
    let lower_link = scene.edge(lower, hub, EdgeKind::DirectLink);
    scene.edge(upper, hub, EdgeKind::DirectLink);
    let lower_up = scene.placeholder(1.0);
    let lower_down = scene.placeholder(-1.0);
    let no_up = scene.edge(lower, lower_up, EdgeKind::NoLink);
    let no_down = scene.edge(lower, lower_down, EdgeKind::NoLink);
    let solved = scene.solve();

    let mut selection = select(&solved, &[lower, upper]);
    let mut events = Vec::new();
    let stage = LinkResolver::new(solved.ctx())
        .resolve(&mut selection, &mut events)
        .unwrap();

    assert_eq!(stage.link_nodes_selected, 1);
    assert!(selection.is_edge_selected(lower_link));
    assert!(!selection.is_edge_selected(no_up));
    assert!(selection.is_edge_selected(no_down));
    assert!(events.contains(&BestEffortEvent::NoLinkSelected {
        node: lower,
        edge: no_down,
        direction: Direction::Down,
    }));

    // `upper` has no placeholders at all, so only its hub link is active.
    assert_eq!(stage.link_check.partial, vec![upper]);
    assert!(events.contains(&BestEffortEvent::LinkCheckFailed {
        node: upper,
        active: [0, 1]
    }));
}

#[test]
fn same_plane_neighbour_counts_in_both_directions() {
    let mut scene = Scene::default();
    let a = scene.region(0.0, 1, 2);
    let b = scene.region(0.0, 1, 2);
    let e = scene.edge(a, b, EdgeKind::DirectLink);
    let solved = scene.solve();

    let mut selection = select(&solved, &[a, b]);
    selection.set_edge(e, true);
    assert_eq!(solved.ctx().active_links(&selection, a).unwrap(), [1, 1]);
}

#[test]
fn missing_volume_is_reported() {
    let mut scene = Scene::default();
    let a = scene.region(0.0, 1, 2);
    let b = scene.region(1.0, 1, 2);
    scene.edge(a, b, EdgeKind::DirectLink);
    let mut solved = scene.solve();
    solved.volumes = CragVolumes::new(solved.crag.num_nodes());

    let mut selection = select(&solved, &[a, b]);
    let err = LinkResolver::new(solved.ctx())
        .resolve(&mut selection, &mut NullSink)
        .unwrap_err();
    assert!(matches!(err, BestEffortError::MissingVolume(_)));
}

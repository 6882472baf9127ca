use super::*;
use crate::crag::CragBuilder;
use crate::types::NodeKind;

#[test]
fn starts_unselected_and_tracks_flags() {
    let mut sel = Selection::new(3, 2);
    assert_eq!(sel.num_selected_nodes(), 0);
    sel.set_node(NodeId(2), true);
    sel.set_edge(EdgeId(1), true);
    assert_eq!(sel.selected_nodes().collect::<Vec<_>>(), vec![NodeId(2)]);
    assert_eq!(sel.selected_edges().collect::<Vec<_>>(), vec![EdgeId(1)]);
    sel.set_node(NodeId(2), false);
    assert!(!sel.is_node_selected(NodeId(2)));
}

#[test]
fn superset_compares_nodes_only() {
    let mut small = Selection::new(3, 1);
    let mut big = Selection::new(3, 1);
    small.set_node(NodeId(0), true);
    big.set_node(NodeId(0), true);
    big.set_node(NodeId(1), true);
    small.set_edge(EdgeId(0), true);
    assert!(big.contains_nodes_of(&small));
    assert!(!small.contains_nodes_of(&big));
}

#[test]
fn antichain_detects_selected_ancestor() {
    let mut b = CragBuilder::new();
    let root = b.add_node(NodeKind::Region);
    let mid = b.add_node(NodeKind::Region);
    let leaf = b.add_node(NodeKind::Region);
    b.add_subset(mid, root);
    b.add_subset(leaf, mid);
    let crag = b.build().unwrap();

    let mut sel = Selection::for_crag(&crag);
    sel.set_node(mid, true);
    assert!(is_antichain(&crag, &sel));
    sel.set_node(root, true);
    sel.set_node(leaf, true);
    assert_eq!(
        antichain_violations(&crag, &sel),
        vec![(root, mid), (mid, leaf), (root, leaf)]
    );
}

#[test]
fn link_check_buckets_by_direction_counts() {
    let mut check = LinkCheck::default();
    assert!(check.record(NodeId(0), [1, 1]));
    assert!(!check.record(NodeId(1), [0, 0]));
    assert!(!check.record(NodeId(2), [1, 0]));
    assert!(!check.record(NodeId(3), [0, 1]));
    // Three active edges, two of them in one direction.
    assert!(!check.record(NodeId(4), [2, 1]));
    // Two up and none down is not two well-placed links.
    assert!(!check.record(NodeId(5), [2, 0]));

    assert_eq!(check.checked, 6);
    assert_eq!(check.missing, vec![NodeId(1)]);
    assert_eq!(check.partial, vec![NodeId(2), NodeId(3)]);
    assert_eq!(check.excess, vec![NodeId(4), NodeId(5)]);
    assert!(!check.is_ok());
}

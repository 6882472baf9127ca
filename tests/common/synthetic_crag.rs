//! Box-shaped candidates on a stack of single-voxel-thick sections.
use crag_best_effort::types::{EdgeId, EdgeKind, GtLabel, NodeId, NodeKind};
use crag_best_effort::{Crag, CragBuilder, CragVolumes, LabelVolume, RegionVolume};
use nalgebra::Vector3;
use std::ops::Range;

pub struct SyntheticCrag {
    builder: CragBuilder,
    volumes: Vec<(NodeId, RegionVolume)>,
    ground_truth: LabelVolume,
}

impl SyntheticCrag {
    /// Ground truth of `width x height x sections` voxels labelled by
    /// `label(x, y, section)`.
    pub fn new<F>(width: usize, height: usize, sections: usize, label: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> u32,
    {
        let mut label = label;
        let ground_truth = LabelVolume::from_fn(
            Vector3::zeros(),
            Vector3::repeat(1.0),
            [width, height, sections],
            |x, y, z| GtLabel(label(x, y, z)),
        );
        Self {
            builder: CragBuilder::new(),
            volumes: Vec::new(),
            ground_truth,
        }
    }

    /// Region covering the box `xs x ys` of one section.
    pub fn region(&mut self, section: usize, xs: Range<usize>, ys: Range<usize>) -> NodeId {
        let n = self.builder.add_node(NodeKind::Region);
        self.volumes.push((n, box_volume(section, 1, xs, ys)));
        n
    }

    /// Link hub spanning `section` and the one above it.
    pub fn hub(&mut self, section: usize, xs: Range<usize>, ys: Range<usize>) -> NodeId {
        let n = self.builder.add_node(NodeKind::Link);
        self.volumes.push((n, box_volume(section, 2, xs, ys)));
        n
    }

    /// Region with no-link placeholders in the sections above and below.
    pub fn tracked_region(&mut self, section: usize, xs: Range<usize>, ys: Range<usize>) -> NodeId {
        let r = self.region(section, xs, ys);
        let z = section as f64;
        for dz in [1.0, -1.0] {
            let p = self.builder.add_node(NodeKind::NoLinkPlaceholder);
            let offset = Vector3::new(0.0, 0.0, z + dz);
            self.volumes
                .push((p, RegionVolume::new(offset, Vector3::repeat(1.0), [1, 1, 1])));
            self.builder.add_edge(r, p, EdgeKind::NoLink);
        }
        r
    }

    pub fn subset(&mut self, child: NodeId, parent: NodeId) {
        self.builder.add_subset(child, parent);
    }

    pub fn edge(&mut self, u: NodeId, v: NodeId, kind: EdgeKind) -> EdgeId {
        self.builder.add_edge(u, v, kind)
    }

    pub fn finish(self) -> (Crag, CragVolumes, LabelVolume) {
        let crag = self.builder.build().expect("synthetic graph is valid");
        let mut volumes = CragVolumes::new(crag.num_nodes());
        for (n, volume) in self.volumes {
            volumes.insert(n, volume);
        }
        (crag, volumes, self.ground_truth)
    }
}

fn box_volume(section: usize, depth: usize, xs: Range<usize>, ys: Range<usize>) -> RegionVolume {
    let offset = Vector3::new(xs.start as f64, ys.start as f64, section as f64);
    RegionVolume::from_fn(
        offset,
        Vector3::repeat(1.0),
        [xs.len(), ys.len(), depth],
        |_, _, _| true,
    )
}

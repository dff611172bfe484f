use std::fmt::Display;

/// One node of a secondary-structure tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureNode {
    /// Unpaired residue.
    Leaf { label: String },
    /// Base pair. `label` is `"<open> - <close>"`, `children` is everything
    /// strictly between the two paired positions.
    Pair { label: String, children: Structure },
}

impl StructureNode {
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        StructureNode::Leaf { label: label.into() }
    }

    pub fn pair<S: Into<String>>(
        label: S,
        children: Structure,
    ) -> Self {
        StructureNode::Pair {
            label: label.into(),
            children,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StructureNode::Leaf { label } => label,
            StructureNode::Pair { label, .. } => label,
        }
    }

    /// Children of a pair; `None` for leaves.
    pub fn children(&self) -> Option<&Structure> {
        match self {
            StructureNode::Leaf { .. } => None,
            StructureNode::Pair { children, .. } => Some(children),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, StructureNode::Pair { .. })
    }
}

/// Ordered siblings of one scope. The root structure holds the top-level
/// nodes of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    nodes: Vec<StructureNode>,
}

impl Structure {
    pub fn new(nodes: Vec<StructureNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[StructureNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StructureNode> {
        self.nodes.iter()
    }

    pub(crate) fn push(
        &mut self,
        node: StructureNode,
    ) {
        self.nodes.push(node)
    }

    /// Counts leaves and pairs over the whole tree and measures the deepest
    /// pair nesting (0 for a structure without pairs).
    pub fn stats(&self) -> StructureStats {
        let mut stats = StructureStats::default();
        self.collect_stats(&mut stats, 0);
        stats
    }

    fn collect_stats(
        &self,
        stats: &mut StructureStats,
        depth: usize,
    ) {
        for node in self.iter() {
            match node {
                StructureNode::Leaf { .. } => stats.leaves += 1,
                StructureNode::Pair { children, .. } => {
                    stats.pairs += 1;
                    stats.max_depth = stats.max_depth.max(depth + 1);
                    children.collect_stats(stats, depth + 1);
                },
            }
        }
    }
}

impl<'a> IntoIterator for &'a Structure {
    type IntoIter = std::slice::Iter<'a, StructureNode>;
    type Item = &'a StructureNode;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Summary of a structure tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureStats {
    pub leaves:    usize,
    pub pairs:     usize,
    pub max_depth: usize,
}

impl StructureStats {
    /// Number of annotation positions the tree covers: one per leaf, two per
    /// pair.
    pub fn positions(&self) -> usize {
        self.leaves + 2 * self.pairs
    }
}

impl Display for StructureStats {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{} positions ({} paired, {} unpaired), max depth {}",
            self.positions(),
            self.pairs * 2,
            self.leaves,
            self.max_depth
        )
    }
}

//! Merge history produced by a Ward fit.
//!
//! Nodes live in a single arena: the `n` leaves occupy indices `0..n` (so a leaf's
//! arena index equals its observation index), and each merge appends one node.
//! A [`Level`] is the partition at one step, stored as arena indices. Every node
//! except the root is the child of exactly one parent.

use crate::error::{Error, Result};

/// A cluster at one point in the merge history.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterNode {
    /// Cluster id: an observation index. A merged node takes the smaller child id.
    pub id: usize,

    /// Observation indices covered by this cluster.
    pub instances: Vec<usize>,

    /// Arena indices of the two merged children (empty for leaves).
    pub children: Vec<usize>,

    /// Merge height (0.0 for leaves).
    pub dist: f64,
}

impl ClusterNode {
    fn leaf(index: usize) -> Self {
        Self {
            id: index,
            instances: vec![index],
            children: Vec::new(),
            dist: 0.0,
        }
    }

    /// True for single-observation nodes.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of observations in the cluster.
    pub fn size(&self) -> usize {
        self.instances.len()
    }
}

/// The partition of all observations at one step of the algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    nodes: Vec<usize>,
}

impl Level {
    /// Number of clusters at this level.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for levels of a fitted dendrogram.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena indices of this level's clusters, in level order.
    pub fn node_indices(&self) -> &[usize] {
        &self.nodes
    }
}

/// One merge step, in the style of a linkage matrix row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Merge {
    /// Id of the first child (the smaller id, kept by the merged cluster).
    pub left: usize,
    /// Id of the second child.
    pub right: usize,
    /// Merge height.
    pub height: f64,
    /// Observations in the merged cluster.
    pub size: usize,
}

/// The full sequence of levels, from `n` singletons to the root.
#[derive(Clone, Debug, PartialEq)]
pub struct Dendrogram {
    nodes: Vec<ClusterNode>,
    levels: Vec<Level>,
    num_observations: usize,
    clamped_updates: usize,
}

impl Dendrogram {
    /// Level 0: one leaf per observation.
    pub(crate) fn with_leaves(n: usize) -> Self {
        let mut nodes = Vec::with_capacity((2 * n).saturating_sub(1));
        nodes.extend((0..n).map(ClusterNode::leaf));
        let levels = vec![Level {
            nodes: (0..n).collect(),
        }];
        Self {
            nodes,
            levels,
            num_observations: n,
            clamped_updates: 0,
        }
    }

    /// The most recent level.
    pub(crate) fn current(&self) -> &Level {
        // `with_leaves` always pushes level 0.
        &self.levels[self.levels.len() - 1]
    }

    /// Cluster ids of the most recent level, in level order.
    pub(crate) fn current_ids(&self) -> Vec<usize> {
        self.current()
            .nodes
            .iter()
            .map(|&idx| self.nodes[idx].id)
            .collect()
    }

    /// Observation count of the cluster at `pos` in the most recent level.
    pub(crate) fn current_size(&self, pos: usize) -> usize {
        self.nodes[self.current().nodes[pos]].size()
    }

    /// Merge the clusters at positions `first_pos` and `second_pos` of the current
    /// level and push the next level as `[merged, ...survivors]`.
    ///
    /// `first_pos` must hold the smaller id; the merged node inherits it.
    pub(crate) fn merge(
        &mut self,
        first_pos: usize,
        second_pos: usize,
        dist: f64,
    ) -> &ClusterNode {
        let current = self.current();
        let a = current.nodes[first_pos];
        let b = current.nodes[second_pos];
        debug_assert!(self.nodes[a].id < self.nodes[b].id);

        let mut instances = Vec::with_capacity(self.nodes[a].size() + self.nodes[b].size());
        instances.extend_from_slice(&self.nodes[a].instances);
        instances.extend_from_slice(&self.nodes[b].instances);

        let id = self.nodes[a].id;
        let merged = self.nodes.len();
        let mut next = Vec::with_capacity(current.len() - 1);
        next.push(merged);
        next.extend(
            current
                .nodes
                .iter()
                .enumerate()
                .filter(|&(pos, _)| pos != first_pos && pos != second_pos)
                .map(|(_, &idx)| idx),
        );

        self.nodes.push(ClusterNode {
            id,
            instances,
            children: vec![a, b],
            dist,
        });
        self.levels.push(Level { nodes: next });
        &self.nodes[merged]
    }

    pub(crate) fn add_clamped(&mut self, count: usize) {
        self.clamped_updates += count;
    }

    /// Number of observations clustered.
    pub fn num_observations(&self) -> usize {
        self.num_observations
    }

    /// All levels, leaves first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Number of levels (equals the number of observations).
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Level `k` (0 = singletons).
    pub fn level(&self, k: usize) -> Option<&Level> {
        self.levels.get(k)
    }

    /// Nodes of level `k`, in level order.
    pub fn level_nodes(&self, k: usize) -> impl Iterator<Item = &ClusterNode> + '_ {
        self.levels
            .get(k)
            .into_iter()
            .flat_map(|level| level.nodes.iter().map(|&idx| &self.nodes[idx]))
    }

    /// Node arena: leaves at `0..n`, then merged nodes in merge order.
    pub fn nodes(&self) -> &[ClusterNode] {
        &self.nodes
    }

    /// Node at arena index `idx`.
    pub fn node(&self, idx: usize) -> Option<&ClusterNode> {
        self.nodes.get(idx)
    }

    /// The single cluster containing every observation.
    pub fn root(&self) -> Option<&ClusterNode> {
        self.levels
            .last()
            .filter(|level| level.len() == 1)
            .map(|level| &self.nodes[level.nodes[0]])
    }

    /// Children of `node` (none for leaves).
    pub fn children<'a>(
        &'a self,
        node: &'a ClusterNode,
    ) -> impl Iterator<Item = &'a ClusterNode> + 'a {
        node.children.iter().map(|&idx| &self.nodes[idx])
    }

    /// Number of times the Lance-Williams update was clamped at zero.
    pub fn clamped_updates(&self) -> usize {
        self.clamped_updates
    }

    /// Merge steps in order.
    pub fn merges(&self) -> Vec<Merge> {
        self.nodes[self.num_observations..]
            .iter()
            .map(|node| Merge {
                left: self.nodes[node.children[0]].id,
                right: self.nodes[node.children[1]].id,
                height: node.dist,
                size: node.size(),
            })
            .collect()
    }

    /// Merge heights in merge order.
    pub fn heights(&self) -> Vec<f64> {
        self.nodes[self.num_observations..]
            .iter()
            .map(|node| node.dist)
            .collect()
    }

    /// Flat labels for the level holding exactly `n_clusters` clusters.
    ///
    /// The label of an observation is the position of its cluster in that level.
    pub fn labels(&self, n_clusters: usize) -> Result<Vec<usize>> {
        let n = self.num_observations;
        if n_clusters == 0 || n_clusters > n {
            return Err(Error::InvalidClusterCount {
                requested: n_clusters,
                n_items: n,
            });
        }

        let mut labels = vec![0usize; n];
        for (label, node) in self.level_nodes(n - n_clusters).enumerate() {
            for &i in &node.instances {
                labels[i] = label;
            }
        }
        Ok(labels)
    }

    /// Observation indices in left-to-right leaf order below the root.
    pub fn leaf_order(&self) -> Vec<usize> {
        let Some(root) = self.levels.last().and_then(|l| l.nodes.first().copied()) else {
            return Vec::new();
        };

        let mut order = Vec::with_capacity(self.num_observations);
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if node.is_leaf() {
                order.push(node.id);
            } else {
                // Right first so the left subtree is visited first.
                stack.push(node.children[1]);
                stack.push(node.children[0]);
            }
        }
        order
    }
}

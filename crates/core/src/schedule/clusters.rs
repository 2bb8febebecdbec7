use crate::models::session::Session;

/// Union-find over session indices with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }
}

/// Partitions `sessions` into connected components of the overlap relation.
///
/// Overlap is not transitive, so two sessions that never intersect still share
/// a cluster when a chain of overlapping sessions links them. Every index
/// appears in exactly one returned cluster. Clusters are ordered by their
/// smallest index and each lists its indices ascending, so callers that pass
/// sessions pre-sorted get clusters in the same order.
///
/// The pairwise scan is quadratic, which is fine for the tens of sessions a
/// single teaching day holds.
pub(crate) fn overlap_clusters(sessions: &[&Session]) -> Vec<Vec<usize>> {
    let mut set = DisjointSet::new(sessions.len());

    for (i, a) in sessions.iter().enumerate() {
        for (j, b) in sessions.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                set.union(i, j);
            }
        }
    }

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut cluster_of_root: Vec<Option<usize>> = vec![None; sessions.len()];
    for index in 0..sessions.len() {
        let root = set.find(index);
        match cluster_of_root[root] {
            Some(cluster) => clusters[cluster].push(index),
            None => {
                cluster_of_root[root] = Some(clusters.len());
                clusters.push(vec![index]);
            }
        }
    }

    clusters
}

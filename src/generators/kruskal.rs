use rand::{Rng, seq::SliceRandom};

use super::log::Recorder;
use super::{logical_nodes, node_dims, node_index};
use crate::maze::Coord;

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        // Iterative with path halving, so long chains cannot overflow the stack
        let mut x = x;
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall edge between two adjacent logical nodes
#[derive(Clone, Copy)]
struct Edge {
    node1: Coord,
    node2: Coord,
}

pub(super) fn randomized_kruskal<R: Rng + ?Sized>(recorder: &mut Recorder, rng: &mut R) {
    let grid = recorder.grid();
    let (cols, rows) = (grid.cols(), grid.rows());
    let (node_cols, node_rows) = node_dims(grid);
    let mut uf = UnionFind::new(node_cols as usize * node_rows as usize);

    // Collect every edge looking East and South from each node
    let mut edges: Vec<Edge> = logical_nodes(grid)
        .flat_map(|(x, y)| {
            [
                (x + 2 < cols - 1).then(|| Edge {
                    node1: (x, y),
                    node2: (x + 2, y),
                }),
                (y + 2 < rows - 1).then(|| Edge {
                    node1: (x, y),
                    node2: (x, y + 2),
                }),
            ]
        })
        .flatten()
        .collect();

    edges.shuffle(rng);

    for edge in edges {
        let idx1 = node_index(recorder.grid(), edge.node1);
        let idx2 = node_index(recorder.grid(), edge.node2);

        // If nodes are not yet connected, remove the wall between them
        if uf.unite(idx1, idx2) {
            recorder.open_edge(edge.node1, edge.node2);
        }
    }
}

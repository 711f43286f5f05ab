use rand::Rng;

use super::log::Recorder;
use super::logical_nodes;

/// Carves from every node toward North or West, picking at random when both exist.
///
/// The result always has an open top row and left column.
pub(super) fn binary_tree<R: Rng + ?Sized>(recorder: &mut Recorder, rng: &mut R) {
    let nodes = logical_nodes(recorder.grid()).collect::<Vec<_>>();

    for (x, y) in nodes {
        let north = (y > 1).then(|| (x, y - 2));
        let west = (x > 1).then(|| (x - 2, y));
        let target = match (north, west) {
            (Some(n), Some(w)) => {
                if rng.random_bool(0.5) {
                    n
                } else {
                    w
                }
            }
            (Some(n), None) => n,
            (None, Some(w)) => w,
            // Top-left corner has nothing to carve toward
            (None, None) => continue,
        };
        recorder.open_edge((x, y), target);
    }
}

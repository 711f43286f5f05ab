use rand::Rng;

use super::log::{Recorder, StepKind};
use super::node_dims;
use crate::maze::Orientation;

/// Chambers narrower than this many nodes on either side are left undivided.
const MIN_CHAMBER: u16 = 2;

/// Recursive division over an open interior.
///
/// Chambers are measured in logical nodes. Each division draws one wall line along an even
/// grid row or column and leaves exactly one gap, at an odd coordinate.
pub(super) fn recursive_division<R: Rng + ?Sized>(recorder: &mut Recorder, rng: &mut R) {
    let (width, height) = node_dims(recorder.grid());
    for wall in Divisions::new(width, height, rng) {
        wall.cells().for_each(|cell| recorder.record(cell, StepKind::BuildWall));
    }
}

/// A chamber in node units: top-left node and size.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

/// One dividing wall in grid cells.
///
/// The wall lies on the even line `fixed` and covers `first..=last` along the other axis,
/// except for the single cell at `gap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WallLine {
    orientation: Orientation,
    fixed: u16,
    first: u16,
    last: u16,
    gap: u16,
}

impl WallLine {
    fn cells(self) -> impl Iterator<Item = (u16, u16)> {
        (self.first..=self.last)
            .filter(move |&along| along != self.gap)
            .map(move |along| match self.orientation {
                Orientation::Horizontal => (along, self.fixed),
                Orientation::Vertical => (self.fixed, along),
            })
    }
}

/// Yields the dividing walls in the order a recursive division draws them: a chamber's wall
/// first, then everything inside its first half, then its second half.
struct Divisions<'a, R: Rng + ?Sized> {
    pending: Vec<Chamber>,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Divisions<'a, R> {
    fn new(width: u16, height: u16, rng: &'a mut R) -> Self {
        Divisions {
            pending: vec![Chamber {
                x: 0,
                y: 0,
                width,
                height,
            }],
            rng,
        }
    }

    fn split(&mut self, chamber: Chamber) -> WallLine {
        let Chamber {
            x,
            y,
            width,
            height,
        } = chamber;

        // A horizontal wall splits a tall chamber, a vertical wall a wide one
        let orientation = match width.cmp(&height) {
            std::cmp::Ordering::Less => Orientation::Horizontal,
            std::cmp::Ordering::Greater => Orientation::Vertical,
            std::cmp::Ordering::Equal => {
                if self.rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        // Halves are pushed second-first so the first half is divided next
        match orientation {
            Orientation::Horizontal => {
                // Randomly choose the node row the wall goes after
                let diff = self.rng.random_range(0..height - 1);
                // Randomly choose a node column for the hole in the wall
                let x_hole = (x + self.rng.random_range(0..width)) * 2 + 1;

                let upper_height = diff + 1;
                self.pending.push(Chamber {
                    y: y + upper_height,
                    height: height - upper_height,
                    ..chamber
                });
                self.pending.push(Chamber {
                    height: upper_height,
                    ..chamber
                });
                WallLine {
                    orientation,
                    fixed: (y + diff) * 2 + 2,
                    first: x * 2 + 1,
                    last: (x + width - 1) * 2 + 1,
                    gap: x_hole,
                }
            }
            Orientation::Vertical => {
                // Randomly choose the node column the wall goes after
                let diff = self.rng.random_range(0..width - 1);
                // Randomly choose a node row for the hole in the wall
                let y_hole = (y + self.rng.random_range(0..height)) * 2 + 1;

                let left_width = diff + 1;
                self.pending.push(Chamber {
                    x: x + left_width,
                    width: width - left_width,
                    ..chamber
                });
                self.pending.push(Chamber {
                    width: left_width,
                    ..chamber
                });
                WallLine {
                    orientation,
                    fixed: (x + diff) * 2 + 2,
                    first: y * 2 + 1,
                    last: (y + height - 1) * 2 + 1,
                    gap: y_hole,
                }
            }
        }
    }
}

impl<R: Rng + ?Sized> Iterator for Divisions<'_, R> {
    type Item = WallLine;

    fn next(&mut self) -> Option<WallLine> {
        while let Some(chamber) = self.pending.pop() {
            if chamber.width >= MIN_CHAMBER && chamber.height >= MIN_CHAMBER {
                return Some(self.split(chamber));
            }
        }
        None
    }
}

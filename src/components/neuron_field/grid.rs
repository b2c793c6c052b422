//! Uniform spatial grid for finding nearby particle pairs.
//!
//! Cells are `radius` wide, so any pair closer than `radius` lies in the same
//! or an adjacent cell. Each cell is compared with itself and four forward
//! neighbours, which visits every adjacent cell pair exactly once.

use std::collections::HashMap;

use super::types::Point;

/// Forward neighbour offsets; the mirrored four are covered from the other side.
const FORWARD: [(i64, i64); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

pub struct SpatialGrid {
	cell: f64,
	buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
	/// Buckets `positions` by cell. `radius` must be positive.
	pub fn new(positions: &[Point], radius: f64) -> Self {
		let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
		for (i, p) in positions.iter().enumerate() {
			buckets.entry(Self::key(*p, radius)).or_default().push(i);
		}
		Self {
			cell: radius,
			buckets,
		}
	}

	// Positions may sit outside the surface after a shrink; floor keeps them keyed.
	fn key(p: Point, cell: f64) -> (i64, i64) {
		((p.x / cell).floor() as i64, (p.y / cell).floor() as i64)
	}

	/// Calls `visit(i, j, distance)` with `i < j` for every pair closer than the cell size.
	pub fn for_each_pair(&self, positions: &[Point], mut visit: impl FnMut(usize, usize, f64)) {
		let mut check = |i: usize, j: usize| {
			let (i, j) = if i < j { (i, j) } else { (j, i) };
			let d = positions[i].distance(positions[j]);
			if d < self.cell {
				visit(i, j, d);
			}
		};

		for (&(cx, cy), members) in &self.buckets {
			for (n, &i) in members.iter().enumerate() {
				for &j in &members[n + 1..] {
					check(i, j);
				}
			}
			for (dx, dy) in FORWARD {
				// Keys saturate at the i64 range when the cell is tiny.
				let (Some(nx), Some(ny)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
					continue;
				};
				if let Some(others) = self.buckets.get(&(nx, ny)) {
					for &i in members {
						for &j in others {
							check(i, j);
						}
					}
				}
			}
		}
	}
}

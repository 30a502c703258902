//! Static triangle mesh over a particle layout.
//!
//! Each point is joined to its nearest neighbours in the base layout. Small
//! fields use a pairwise scan; larger ones go through a uniform grid index.

use crate::constants::{MESH_BRUTE_FORCE_MAX, MESH_MAX_EDGE, MESH_NEIGHBORS};
use fnv::{FnvHashMap, FnvHashSet};
use glam::{IVec3, Vec3};
use smallvec::SmallVec;

pub type Triangle = [usize; 3];

type Neighbors = SmallVec<[(f32, usize); 4]>;

/// Keep the `k` closest candidates sorted by ascending squared distance.
/// Ties are broken by index so results do not depend on visit order.
fn offer(best: &mut Neighbors, k: usize, d2: f32, j: usize) {
    let pos = best
        .iter()
        .position(|&(bd, bj)| d2 < bd || (d2 == bd && j < bj))
        .unwrap_or(best.len());
    if pos < k {
        best.insert(pos, (d2, j));
        best.truncate(k);
    }
}

fn nearest_brute(points: &[Vec3], i: usize, k: usize) -> Neighbors {
    let mut best = Neighbors::new();
    for (j, p) in points.iter().enumerate() {
        if j != i {
            offer(&mut best, k, points[i].distance_squared(*p), j);
        }
    }
    best
}

/// Uniform grid over point positions for k-nearest queries.
pub struct GridIndex<'a> {
    points: &'a [Vec3],
    cell: f32,
    cells: FnvHashMap<IVec3, SmallVec<[usize; 8]>>,
    max_ring: i32,
}

impl<'a> GridIndex<'a> {
    pub fn new(points: &'a [Vec3], cell: f32) -> Self {
        let cell = cell.max(1e-4);
        let mut cells: FnvHashMap<IVec3, SmallVec<[usize; 8]>> = FnvHashMap::default();
        let mut lo = IVec3::splat(i32::MAX);
        let mut hi = IVec3::splat(i32::MIN);
        for (i, p) in points.iter().enumerate() {
            let key = Self::key_for(*p, cell);
            lo = lo.min(key);
            hi = hi.max(key);
            cells.entry(key).or_default().push(i);
        }
        let max_ring = if points.is_empty() {
            0
        } else {
            (hi - lo).max_element() + 1
        };
        Self {
            points,
            cell,
            cells,
            max_ring,
        }
    }

    #[inline]
    fn key_for(p: Vec3, cell: f32) -> IVec3 {
        (p / cell).floor().as_ivec3()
    }

    /// The `k` nearest neighbours of point `i`, excluding itself.
    pub fn nearest(&self, i: usize, k: usize) -> Neighbors {
        let q = self.points[i];
        let center = Self::key_for(q, self.cell);
        let mut best = Neighbors::new();
        for ring in 0..=self.max_ring {
            for dz in -ring..=ring {
                for dy in -ring..=ring {
                    for dx in -ring..=ring {
                        if dx.abs().max(dy.abs()).max(dz.abs()) != ring {
                            continue;
                        }
                        let Some(bucket) = self.cells.get(&(center + IVec3::new(dx, dy, dz)))
                        else {
                            continue;
                        };
                        for &j in bucket {
                            if j != i {
                                offer(&mut best, k, q.distance_squared(self.points[j]), j);
                            }
                        }
                    }
                }
            }
            // Anything outside the rings scanned so far is at least ring*cell away.
            let reach = ring as f32 * self.cell;
            if best.len() == k && best[k - 1].0 <= reach * reach {
                break;
            }
        }
        best
    }
}

fn push_triangle(
    out: &mut Vec<Triangle>,
    seen: &mut FnvHashSet<Triangle>,
    points: &[Vec3],
    i: usize,
    near: &Neighbors,
) {
    if near.len() < 2 {
        return;
    }
    let (a, b) = (near[0].1, near[1].1);
    let max2 = MESH_MAX_EDGE * MESH_MAX_EDGE;
    if near[0].0 > max2 || near[1].0 > max2 || points[a].distance_squared(points[b]) > max2 {
        return;
    }
    let mut tri = [i, a, b];
    tri.sort_unstable();
    if seen.insert(tri) {
        out.push(tri);
    }
}

/// Build the mesh for `points`, one candidate triangle per point, with
/// duplicates dropped. Output order follows the first point that produced
/// each triangle.
pub fn build_mesh(points: &[Vec3]) -> Vec<Triangle> {
    let out = if points.len() <= MESH_BRUTE_FORCE_MAX {
        build_mesh_brute(points)
    } else {
        let mut out = Vec::new();
        let mut seen = FnvHashSet::default();
        let index = GridIndex::new(points, MESH_MAX_EDGE);
        for i in 0..points.len() {
            let near = index.nearest(i, MESH_NEIGHBORS);
            push_triangle(&mut out, &mut seen, points, i, &near);
        }
        out
    };
    log::debug!("[mesh] points={} triangles={}", points.len(), out.len());
    out
}

/// O(N²) scan used for small fields.
pub fn build_mesh_brute(points: &[Vec3]) -> Vec<Triangle> {
    let mut out = Vec::new();
    let mut seen = FnvHashSet::default();
    for i in 0..points.len() {
        let near = nearest_brute(points, i, MESH_NEIGHBORS);
        push_triangle(&mut out, &mut seen, points, i, &near);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_yields_two_triangles() {
        let pts = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.1, 0.0, 0.0),
            Vec3::new(0.0, 0.12, 0.0),
            Vec3::new(0.1, 0.12, 0.0),
        ];
        let tris = build_mesh(&pts);
        assert!(!tris.is_empty());
        for t in &tris {
            assert!(t[0] < t[1] && t[1] < t[2]);
        }
    }

    #[test]
    fn far_apart_points_are_not_joined() {
        let pts = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
        ];
        assert!(build_mesh(&pts).is_empty());
    }

    #[test]
    fn grid_mesh_matches_brute_force_on_large_spirals() {
        use crate::particles::{build_field, FieldShape};
        for n in [MESH_BRUTE_FORCE_MAX + 1, 1200, 2500] {
            let pts: Vec<Vec3> = build_field(FieldShape::GoldenSpiral, n, 7)
                .iter()
                .map(|p| p.base)
                .collect();
            let grid = build_mesh(&pts);
            assert!(!grid.is_empty(), "n={}", n);
            assert_eq!(grid, build_mesh_brute(&pts), "n={}", n);
        }
    }

    #[test]
    fn grid_nearest_matches_brute_force() {
        let pts: Vec<Vec3> = (0..200)
            .map(|i| {
                let f = i as f32;
                Vec3::new((f * 0.37).sin(), (f * 0.61).cos(), (f * 0.13).sin() * 0.5)
            })
            .collect();
        let index = GridIndex::new(&pts, 0.2);
        for i in 0..pts.len() {
            let a: Vec<usize> = index.nearest(i, 3).iter().map(|n| n.1).collect();
            let b: Vec<usize> = nearest_brute(&pts, i, 3).iter().map(|n| n.1).collect();
            assert_eq!(a, b, "point {}", i);
        }
    }
}

//! Two-dimensional K-D tree over (lat, lon) points.
//!
//! The tree is built once by median splits on presorted index lists and
//! answers closed-ball range queries under Euclidean distance. Points are
//! kept apart from nodes; nodes hold only indices into the point slice.
//! Points with a NaN or infinite coordinate are kept in `points` but never
//! enter the tree, so no query returns them.

use std::cmp::Ordering;

use super::point::{Point, PointList};

/// K-D tree for eps-neighbourhood queries
pub struct KdTree {
    /// All points in the tree
    pub points: PointList,
    root: Option<Box<Node>>,
}

struct Node {
    /// Index of the point associated with this node
    point_id: usize,
    /// Indices of points equal to this node's point
    equal_ids: Vec<usize>,
    split: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl KdTree {
    /// Creates a new K-D tree built from the given points
    pub fn new(points: PointList) -> Self {
        let root = build_tree(0, &PreSorted::new(&points), &points);
        KdTree { points, root }
    }

    /// Returns indices of every point within `eps` (inclusive) of `pt`
    ///
    /// A finite point stored in the tree is always part of its own neighbourhood.
    /// Results are appended to `nodes`; to avoid allocation it can be cleared
    /// and re-used across calls.
    pub fn within(&self, pt: &Point, eps: f64, mut nodes: Vec<usize>) -> Vec<usize> {
        if eps < 0.0 {
            return nodes;
        }
        self.within_recursive(self.root.as_deref(), pt, eps * eps, &mut nodes);
        nodes
    }

    fn within_recursive(&self, t: Option<&Node>, pt: &Point, r2: f64, nodes: &mut Vec<usize>) {
        let Some(t) = t else {
            return;
        };

        let here = &self.points[t.point_id];
        let diff = pt.0[t.split] - here.0[t.split];

        let (this_side, other_side) = if diff < 0.0 {
            (t.left.as_deref(), t.right.as_deref())
        } else {
            (t.right.as_deref(), t.left.as_deref())
        };

        self.within_recursive(this_side, pt, r2, nodes);
        // The splitting plane is diff away; nothing beyond it can be closer
        if diff * diff <= r2 {
            if here.sq_dist(pt) <= r2 {
                nodes.push(t.point_id);
                nodes.extend_from_slice(&t.equal_ids);
            }
            self.within_recursive(other_side, pt, r2, nodes);
        }
    }
}

/// Builds a tree node by finding the median point and recursively building left and right subtrees
fn build_tree(depth: usize, nodes: &PreSorted, points: &[Point]) -> Option<Box<Node>> {
    let split = depth % 2;
    match nodes.cur[split].len() {
        0 => None,
        1 => Some(Box::new(Node {
            point_id: nodes.cur[split][0],
            equal_ids: Vec::new(),
            split,
            left: None,
            right: None,
        })),
        _ => {
            let (med, equal, left, right) = nodes.split_med(split, points);
            Some(Box::new(Node {
                point_id: med,
                equal_ids: equal,
                split,
                left: build_tree(depth + 1, &left, points),
                right: build_tree(depth + 1, &right, points),
            }))
        }
    }
}

/// Point indices sorted on each dimension
struct PreSorted {
    cur: [Vec<usize>; 2],
}

fn compare(points: &[Point], dim: usize, a: usize, b: usize) -> Ordering {
    let (pa, pb) = (&points[a], &points[b]);
    pa.0[dim]
        .total_cmp(&pb.0[dim])
        // Ties are broken on the other dimension
        .then_with(|| pa.0[1 - dim].total_cmp(&pb.0[1 - dim]))
}

impl PreSorted {
    fn new(points: &[Point]) -> Self {
        let mut cur = [Vec::new(), Vec::new()];
        for (dim, ids) in cur.iter_mut().enumerate() {
            *ids = (0..points.len()).filter(|&i| points[i].is_finite()).collect();
            ids.sort_by(|&a, &b| compare(points, dim, a, b));
        }
        PreSorted { cur }
    }

    /// Returns the median node on the split dimension, the ids of points
    /// identical to it, and two PreSorted sets (still sorted on each dimension)
    /// holding the nodes less than, and greater than or equal to, the median
    /// value on the splitting dimension.
    fn split_med(
        &self,
        dim: usize,
        points: &[Point],
    ) -> (usize, Vec<usize>, PreSorted, PreSorted) {
        let ids = &self.cur[dim];
        let mut m = ids.len() / 2;
        while m > 0 && points[ids[m - 1]].0[dim] == points[ids[m]].0[dim] {
            m -= 1;
        }
        let mut mh = m;
        while mh < ids.len() - 1 && points[ids[mh + 1]] == points[ids[m]] {
            mh += 1;
        }
        let med = ids[m];
        let equal = ids[m + 1..=mh].to_vec();
        let pivot = points[med].0[dim];

        let mut left = PreSorted {
            cur: [Vec::new(), Vec::new()],
        };
        left.cur[dim] = ids[..m].to_vec();

        let mut right = PreSorted {
            cur: [Vec::new(), Vec::new()],
        };
        right.cur[dim] = ids[mh + 1..].to_vec();

        let other = 1 - dim;
        for &n in &self.cur[other] {
            if n == med || equal.contains(&n) {
                continue;
            }
            if points[n].0[dim] < pivot {
                left.cur[other].push(n);
            } else {
                right.cur[other].push(n);
            }
        }

        (med, equal, left, right)
    }
}

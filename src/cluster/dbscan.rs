use super::kdtree::KdTree;
use super::point::{Cluster, Point};
use bitvec::prelude::*;

/// Label of a point that belongs to no cluster
pub const NOISE: i32 = -1;

/// Neighbourhood radius used for signal clustering, in degrees
pub const DEFAULT_EPS: f64 = 0.001;

/// Smallest neighbourhood (the point itself included) that makes a core point
pub const DEFAULT_MIN_POINTS: usize = 2;

// DBSCAN algorithm pseudocode (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) < MinPts
//          mark P as NOISE
//       else
//          C = next cluster
//          expandCluster(P, NeighborPts, C, eps, MinPts)
//
// expandCluster(P, NeighborPts, C, eps, MinPts)
//    add P to cluster C
//    for each point P' in NeighborPts
//       if P' is not visited
//          mark P' as visited
//          NeighborPts' = regionQuery(P', eps)
//          if sizeof(NeighborPts') >= MinPts
//             NeighborPts = NeighborPts joined with NeighborPts'
//       if P' is not yet member of any cluster
//          add P' to cluster C
//
// regionQuery(P, eps)
//    return all points within P's eps-neighborhood (including P)

/// Clusters incoming points using DBSCAN algorithm
///
/// # Arguments
///
/// * `points` - List of points to cluster
/// * `eps` - Clustering radius, Euclidean, in degrees
/// * `min_points` - Minimum number of points in eps-neighbourhood (density threshold)
///
/// # Returns
///
/// A tuple `(clusters, noise)` where:
/// - `clusters` is a vector of found clusters, numbered from 0 in discovery order
/// - `noise` is a vector of point indices that are outliers (not in any cluster)
pub fn db_scan(points: &[Point], eps: f64, min_points: usize) -> (Vec<Cluster>, Vec<usize>) {
    let mut visited = bitvec![0; points.len()];
    let mut members = bitvec![0; points.len()];
    let mut clusters = Vec::new();
    let mut c = 0;
    let kd_tree = KdTree::new(points.to_vec());

    let mut neighbor_unique = bitvec![0; points.len()];
    let mut scratch = Vec::new();

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited.set(i, true);

        let neighbor_pts = kd_tree.within(&points[i], eps, Vec::new());
        if neighbor_pts.len() < min_points {
            // Provisional: a later cluster may still claim it as a border point
            continue;
        }

        let mut cluster = Cluster { c, points: vec![i] };
        members.set(i, true);
        c += 1;
        // expandCluster goes here inline
        neighbor_unique.fill(false);
        for &j in &neighbor_pts {
            neighbor_unique.set(j, true);
        }

        let mut neighbor_pts = neighbor_pts;
        let mut j = 0;
        // neighbor_pts grows while it is being walked
        while j < neighbor_pts.len() {
            let k = neighbor_pts[j];
            if !visited[k] {
                visited.set(k, true);
                scratch.clear();
                scratch = kd_tree.within(&points[k], eps, scratch);
                if scratch.len() >= min_points {
                    for &p in &scratch {
                        if !neighbor_unique[p] {
                            neighbor_pts.push(p);
                            neighbor_unique.set(p, true);
                        }
                    }
                }
            }

            if !members[k] {
                cluster.points.push(k);
                members.set(k, true);
            }
            j += 1;
        }
        clusters.push(cluster);
    }

    let noise = members.iter_zeros().collect();
    (clusters, noise)
}

/// Creates a labels array from clusters
///
/// `labels[i]` = cluster ID for point i, or [`NOISE`]
pub fn labels(clusters: &[Cluster], num_points: usize) -> Vec<i32> {
    let mut labels = vec![NOISE; num_points];

    for cluster in clusters {
        for &idx in &cluster.points {
            labels[idx] = cluster.c as i32;
        }
    }

    labels
}

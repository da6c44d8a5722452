#[cfg(test)]
mod tests {
    use crate::cluster::intersection::centroids_by_label;
    use crate::cluster::{IntersectionClusterer, NOISE, Point, PointList, intersections};
    use quickcheck::quickcheck;
    use std::collections::BTreeMap;

    #[test]
    fn test_empty_candidates() {
        assert!(intersections(&[]).is_empty());
        assert!(IntersectionClusterer::default().label(&[]).is_empty());
    }

    #[test]
    fn test_chain_centroid_excludes_noise() {
        let candidates = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0005),
            Point::new(0.0, 0.0009),
            Point::new(5.0, 5.0),
        ];
        let result = intersections(&candidates);
        assert_eq!(result.len(), 1);
        assert!(result[0].lat().abs() < 1e-12);
        assert!((result[0].lon() - 0.0014 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_lonely_points_give_no_centroid() {
        let candidates = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(intersections(&candidates).is_empty());
    }

    #[test]
    fn test_centroids_follow_label_order() {
        let points = vec![
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 4.0),
            Point::new(1.0, 3.0),
            Point::new(9.0, 9.0),
        ];
        // Labels are not contiguous and appear out of order
        let labels = vec![7, 2, 7, 2, NOISE];
        assert_eq!(
            centroids_by_label(&points, &labels),
            vec![Point::new(1.0, 2.0), Point::new(2.0, 3.0)]
        );
    }

    #[test]
    fn test_custom_parameters() {
        let candidates = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0015)];
        assert!(intersections(&candidates).is_empty());

        let wide = IntersectionClusterer {
            eps: 0.002,
            min_points: 2,
        };
        assert_eq!(wide.centroids(&candidates), vec![Point::new(0.0, 0.00075)]);
    }

    #[test]
    fn test_non_finite_candidates_are_noise() {
        let grid = |i: usize| Point::new((i / 20) as f64 * 0.0004, (i % 20) as f64 * 0.003);
        let mixed: PointList = (0..200)
            .map(|i| {
                if i % 3 == 0 {
                    Point::new(f64::NAN, i as f64 * 1e-4)
                } else {
                    grid(i)
                }
            })
            .collect();
        let finite: PointList = mixed.iter().copied().filter(|p| p.is_finite()).collect();

        let clusterer = IntersectionClusterer::default();
        let labels = clusterer.label(&mixed);
        for (p, &l) in mixed.iter().zip(&labels) {
            if !p.is_finite() {
                assert_eq!(l, NOISE);
            }
        }
        assert_eq!(clusterer.centroids(&mixed), clusterer.centroids(&finite));
        assert!(!clusterer.centroids(&finite).is_empty());
    }

    #[test]
    fn prop_every_centroid_has_two_members() {
        fn prop(raw: Vec<(i8, i8)>) -> bool {
            let candidates: PointList = raw
                .iter()
                .map(|&(a, b)| Point::new(a as f64 * 0.0005, b as f64 * 0.0005))
                .collect();
            let clusterer = IntersectionClusterer::default();
            let labels = clusterer.label(&candidates);

            let mut sizes: BTreeMap<i32, usize> = BTreeMap::new();
            for &l in labels.iter().filter(|&&l| l != NOISE) {
                *sizes.entry(l).or_default() += 1;
            }
            sizes.values().all(|&n| n >= 2)
                && clusterer.centroids(&candidates).len() == sizes.len()
        }
        quickcheck(prop as fn(Vec<(i8, i8)>) -> bool);
    }
}

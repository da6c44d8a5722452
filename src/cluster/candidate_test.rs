#[cfg(test)]
mod tests {
    use crate::cluster::candidate::{CandidateFilter, SelfMatch, candidates};
    use crate::cluster::distance::distance_euclidean;
    use crate::cluster::{Point, PointList};
    use quickcheck::quickcheck;
    use std::collections::HashSet;

    fn to_points(raw: &[(i8, i8)]) -> PointList {
        // A 0.005-degree grid so that a good share of pairs land within 0.02
        raw.iter()
            .map(|&(a, b)| Point::new(a as f64 * 0.005, b as f64 * 0.005))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(candidates(&[]).is_empty());
        let masked = CandidateFilter {
            self_match: SelfMatch::MaskNearZero,
            ..Default::default()
        };
        assert!(masked.filter(&[]).is_empty());
    }

    #[test]
    fn test_single_point_is_not_a_candidate() {
        assert!(candidates(&[Point::new(39.29, -76.61)]).is_empty());
    }

    #[test]
    fn test_two_near_points_excludes_far_one() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0001),
            Point::new(10.0, 10.0),
        ];
        let result = candidates(&points);
        assert_eq!(result, vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0001)]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.5)];
        let filter = CandidateFilter {
            proximity: 0.5,
            ..Default::default()
        };
        assert!(filter.filter(&points).is_empty());
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let points = vec![
            Point::new(5.0, 5.0),
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.01),
            Point::new(1.0, 1.01),
        ];
        assert_eq!(
            candidates(&points),
            vec![
                Point::new(5.0, 5.0),
                Point::new(1.0, 1.0),
                Point::new(5.0, 5.01),
                Point::new(1.0, 1.01),
            ]
        );
    }

    #[test]
    fn test_exact_duplicates_by_index() {
        // Two signals at one coordinate are near each other, but only one candidate survives
        let points = vec![Point::new(2.0, 2.0), Point::new(2.0, 2.0), Point::new(9.0, 9.0)];
        assert_eq!(candidates(&points), vec![Point::new(2.0, 2.0)]);
    }

    #[test]
    fn test_exact_duplicates_masked() {
        let points = vec![Point::new(2.0, 2.0), Point::new(2.0, 2.0), Point::new(9.0, 9.0)];
        let filter = CandidateFilter {
            self_match: SelfMatch::MaskNearZero,
            ..Default::default()
        };
        assert!(filter.filter(&points).is_empty());
    }

    #[test]
    fn test_masked_duplicate_with_distinct_neighbor() {
        let points = vec![Point::new(2.0, 2.0), Point::new(2.0, 2.0), Point::new(2.0, 2.01)];
        let filter = CandidateFilter {
            self_match: SelfMatch::MaskNearZero,
            ..Default::default()
        };
        assert_eq!(
            filter.filter(&points),
            vec![Point::new(2.0, 2.0), Point::new(2.0, 2.01)]
        );
    }

    #[test]
    fn prop_candidates_are_unique() {
        fn prop(raw: Vec<(i8, i8)>) -> bool {
            let points = to_points(&raw);
            let result = candidates(&points);
            let keys: HashSet<_> = result.iter().map(|p| p.key()).collect();
            keys.len() == result.len()
        }
        quickcheck(prop as fn(Vec<(i8, i8)>) -> bool);
    }

    #[test]
    fn prop_candidates_have_a_near_neighbor() {
        fn prop(raw: Vec<(i8, i8)>) -> bool {
            let points = to_points(&raw);
            candidates(&points).iter().all(|c| {
                let occurrences = points.iter().filter(|p| *p == c).count();
                occurrences > 1
                    || points
                        .iter()
                        .any(|p| p != c && distance_euclidean(p, c) < 0.02)
            })
        }
        quickcheck(prop as fn(Vec<(i8, i8)>) -> bool);
    }

    #[test]
    fn prop_masked_candidates_have_a_distinct_near_neighbor() {
        fn prop(raw: Vec<(i8, i8)>) -> bool {
            let points = to_points(&raw);
            let filter = CandidateFilter {
                self_match: SelfMatch::MaskNearZero,
                ..Default::default()
            };
            filter.filter(&points).iter().all(|c| {
                points.iter().any(|p| {
                    let d = distance_euclidean(p, c);
                    d >= 1e-7 && d < 0.02
                })
            })
        }
        quickcheck(prop as fn(Vec<(i8, i8)>) -> bool);
    }

    #[test]
    fn prop_candidates_are_a_subset_of_input() {
        fn prop(raw: Vec<(i8, i8)>) -> bool {
            let points = to_points(&raw);
            let result = candidates(&points);
            result.len() <= points.len() && result.iter().all(|c| points.contains(c))
        }
        quickcheck(prop as fn(Vec<(i8, i8)>) -> bool);
    }
}

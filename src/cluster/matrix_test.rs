#[cfg(test)]
mod tests {
    use crate::cluster::Point;
    use crate::cluster::matrix::{DistanceMatrix, MASK_SENTINEL};

    fn points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0001),
            Point::new(3.0, 4.0),
        ]
    }

    #[test]
    fn test_matrix_shape_and_symmetry() {
        let m = DistanceMatrix::new(&points());
        for i in 0..3 {
            assert_eq!(m.row(i).len(), 3);
            assert_eq!(m.row(i)[i], 0.0);
            for j in 0..3 {
                assert_eq!(m.row(i)[j], m.row(j)[i]);
            }
        }
        assert_eq!(m.row(0)[2], 5.0);
        assert_eq!(m.row(2)[0], 5.0);
    }

    #[test]
    fn test_empty_matrix() {
        let m = DistanceMatrix::new(&[]);
        assert_eq!(m, DistanceMatrix::new(&[]).masked(1e-7));
    }

    #[test]
    fn test_masked_replaces_diagonal_and_duplicates() {
        let pts = vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 1.001)];
        let m = DistanceMatrix::new(&pts).masked(1e-7);
        assert_eq!(m.row(0)[0], MASK_SENTINEL);
        assert_eq!(m.row(0)[1], MASK_SENTINEL);
        assert_eq!(m.row(1)[0], MASK_SENTINEL);
        assert!(m.row(0)[2] < 0.0011);
    }
}

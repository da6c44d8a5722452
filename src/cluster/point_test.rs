#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(39.2904, -76.6122);
        assert_eq!(p.lat(), 39.2904);
        assert_eq!(p.lon(), -76.6122);
        assert_eq!(p, Point::from((39.2904, -76.6122)));
    }

    #[test]
    fn test_key_treats_signed_zero_as_equal() {
        assert_eq!(Point::new(0.0, -0.0).key(), Point::new(-0.0, 0.0).key());
        assert_ne!(Point::new(0.0, 0.0).key(), Point::new(0.0, 0.0001).key());
    }

    #[test]
    fn test_sq_dist_is_euclidean() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.sq_dist(&b), 25.0);
    }
}

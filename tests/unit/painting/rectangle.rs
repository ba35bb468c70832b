//! Tests for percentage-space rectangles, orientation and splitting

#[cfg(test)]
mod tests {
    use pimondrian::painting::rectangle::{Axis, Point, Rectangle};

    // Tests the root spans the whole canvas with no color or parent
    // Verified by starting the root at generation 1
    #[test]
    fn test_root_spans_canvas() {
        let root = Rectangle::root();

        assert_eq!(root.generation, 0);
        assert_eq!(root.axis, Axis::Horizontal);
        assert_eq!(root.origin, Point::new(0.0, 0.0));
        assert_eq!(root.corner, Point::new(100.0, 100.0));
        assert_eq!(root.color, None);
        assert_eq!(root.parent, None);
        assert!((root.area() - 10_000.0).abs() < f64::EPSILON);
    }

    // Tests orientation flips back and forth
    // Verified by returning self from opposite
    #[test]
    fn test_axis_opposite() {
        assert_eq!(Axis::Vertical.opposite(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.opposite(), Axis::Vertical);
        assert_eq!(Axis::Vertical.opposite().opposite(), Axis::Vertical);
    }

    // Tests point accessors pick the dimension divided by each cut
    // Verified by swapping x and y in along
    #[test]
    fn test_point_along_and_with() {
        let point = Point::new(10.0, 20.0);

        assert!((point.along(Axis::Vertical) - 10.0).abs() < f64::EPSILON);
        assert!((point.along(Axis::Horizontal) - 20.0).abs() < f64::EPSILON);
        assert_eq!(point.with(Axis::Vertical, 5.0), Point::new(5.0, 20.0));
        assert_eq!(point.with(Axis::Horizontal, 5.0), Point::new(10.0, 5.0));
    }

    // Tests the root is divided by a vertical cut along x
    // Verified by using the root's own axis as cut axis
    #[test]
    fn test_split_root_divides_x() {
        let root = Rectangle::root();
        assert_eq!(root.cut_axis(), Axis::Vertical);

        let (first, second) = root.split(0, 50.0, (2, 7));

        assert_eq!(first.origin, Point::new(0.0, 0.0));
        assert_eq!(first.corner, Point::new(50.0, 100.0));
        assert_eq!(second.origin, Point::new(50.0, 0.0));
        assert_eq!(second.corner, Point::new(100.0, 100.0));

        for child in [&first, &second] {
            assert_eq!(child.generation, 1);
            assert_eq!(child.axis, Axis::Vertical);
            assert_eq!(child.parent, Some(0));
        }
        assert_eq!(first.color, Some(2));
        assert_eq!(second.color, Some(7));
    }

    // Tests a second-generation split divides y and keeps x
    // Verified by dividing x again in the second generation
    #[test]
    fn test_split_child_divides_y() {
        let (left, _) = Rectangle::root().split(0, 30.0, (1, 1));
        let (top, bottom) = left.split(1, 40.0, (3, 4));

        assert_eq!(top.axis, Axis::Horizontal);
        assert_eq!(top.origin, Point::new(0.0, 0.0));
        assert_eq!(top.corner, Point::new(30.0, 40.0));
        assert_eq!(bottom.origin, Point::new(0.0, 40.0));
        assert_eq!(bottom.corner, Point::new(30.0, 100.0));
        assert_eq!(bottom.parent, Some(1));
        assert!((top.area() + bottom.area() - left.area()).abs() < f64::EPSILON);
    }

    // Tests a cut at the far edge leaves a zero-width second child
    // Verified by clamping the cut inside the rectangle
    #[test]
    fn test_split_at_end_is_degenerate() {
        let (first, second) = Rectangle::root().split(0, 100.0, (3, 4));

        assert!((first.width() - 100.0).abs() < f64::EPSILON);
        assert!(second.width().abs() < f64::EPSILON);
        assert!(second.area().abs() < f64::EPSILON);
    }
}

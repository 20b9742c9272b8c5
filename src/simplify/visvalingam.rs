//! Visvalingam-Whyatt point removal over a working sequence of points.
//!
//! Each pass scores every interior point by its effective area, the area of
//! the triangle it forms with its current neighbours, and drops the lowest
//! scoring one. The first and last points are never candidates.

use crate::simplify::area::{AreaCache, AreaFunction};
use crate::simplify::point::Point;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimplifyMode {
    /// Remove points while the least significant one has an effective
    /// area at or below this threshold.
    MinimumArea(f64),
    /// Remove points until this percentage of the original count is left.
    PercentageRetained(f64),
}

/// MinimumArea never reduces a sequence below this many points.
const MINIMUM_AREA_FLOOR: usize = 4;
/// PercentageRetained leaves a sequence alone when its target is smaller.
const PERCENTAGE_TARGET_FLOOR: f64 = 4.0;

/// Index and effective area of the interior point with the smallest area.
/// Ties go to the lowest index.
pub fn least_significant<A: AreaFunction + ?Sized>(
    points: &[Point],
    cache: &mut AreaCache<A>,
) -> Option<(usize, f64)> {
    if points.len() < 3 {
        return None;
    }

    let mut min_area = f64::MAX;
    let mut min_idx = None;
    for i in 1..points.len() - 1 {
        let area = cache.area(&points[i - 1], &points[i], &points[i + 1]);
        if area < min_area {
            min_area = area;
            min_idx = Some(i);
        }
    }
    min_idx.map(|i| (i, min_area))
}

fn remove(points: &mut Vec<Point>, idx: usize, area: f64) {
    let removed = points.remove(idx);
    trace!(id = %removed.id, idx, area, remaining = points.len(), "Removed point");
}

fn by_minimum_area<A: AreaFunction + ?Sized>(
    points: &mut Vec<Point>,
    tolerance: f64,
    cache: &mut AreaCache<A>,
) {
    while points.len() >= MINIMUM_AREA_FLOOR {
        let (idx, area) = match least_significant(points, cache) {
            Some(found) => found,
            None => break,
        };
        if area > tolerance {
            break;
        }
        remove(points, idx, area);
    }
}

fn by_percentage_retained<A: AreaFunction + ?Sized>(
    points: &mut Vec<Point>,
    percentage: f64,
    cache: &mut AreaCache<A>,
) {
    let target = ((percentage / 100.0) * points.len() as f64).floor();
    // also rejects NaN
    if !(target >= PERCENTAGE_TARGET_FLOOR) {
        return;
    }
    let target = target as usize;

    while points.len() > target {
        match least_significant(points, cache) {
            Some((idx, area)) => remove(points, idx, area),
            None => break,
        }
    }
}

/// Removes points from `points` in place according to `mode`.
pub fn simplify_points<A: AreaFunction + ?Sized>(
    points: &mut Vec<Point>,
    mode: SimplifyMode,
    cache: &mut AreaCache<A>,
) {
    match mode {
        SimplifyMode::MinimumArea(tolerance) => by_minimum_area(points, tolerance, cache),
        SimplifyMode::PercentageRetained(percentage) => {
            by_percentage_retained(points, percentage, cache)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{least_significant, simplify_points, SimplifyMode};
    use crate::simplify::area::{AreaCache, AreaFunction, PlanarArea};
    use crate::simplify::point::{Point, PointIds};
    use geo_types::Coord;

    fn points(xys: &[(f64, f64)]) -> Vec<Point> {
        let mut ids = PointIds::new();
        xys.iter()
            .map(|&(x, y)| ids.point(Coord { x, y }))
            .collect()
    }

    fn xys(points: &[Point]) -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.lon, p.lat)).collect()
    }

    fn zigzag(n: usize) -> Vec<(f64, f64)> {
        (0..n)
            .map(|i| (i as f64, if i % 2 == 0 { 0.0 } else { 1.0 + i as f64 * 0.1 }))
            .collect()
    }

    fn effective_areas(points: &[Point]) -> Vec<f64> {
        (1..points.len() - 1)
            .map(|i| {
                PlanarArea.triangle_area(
                    points[i - 1].coord(),
                    points[i].coord(),
                    points[i + 1].coord(),
                )
            })
            .collect()
    }

    #[test]
    fn selects_smallest_interior_area() {
        let pts = points(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.1), (3.0, 0.0), (4.0, 0.0)]);
        let mut cache = AreaCache::new(&PlanarArea);
        let (idx, area) = least_significant(&pts, &mut cache).unwrap();
        assert_eq!(3, idx);
        assert!((area - 0.05).abs() < 1e-9);
    }

    #[test]
    fn ties_go_to_first_candidate() {
        // every interior point is collinear
        let pts = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let mut cache = AreaCache::new(&PlanarArea);
        assert_eq!(Some((1, 0.0)), least_significant(&pts, &mut cache));
    }

    #[test]
    fn no_candidates_without_interior_points() {
        let pts = points(&[(0.0, 0.0), (1.0, 0.0)]);
        let mut cache = AreaCache::new(&PlanarArea);
        assert_eq!(None, least_significant(&pts, &mut cache));
    }

    #[test]
    fn minimum_area_removes_up_to_tolerance() {
        let mut pts = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 3.0), (3.0, 0.0), (4.0, 0.01), (5.0, 0.0)]);
        let mut cache = AreaCache::new(&PlanarArea);
        simplify_points(&mut pts, SimplifyMode::MinimumArea(2.0), &mut cache);
        assert_eq!(vec![(0.0, 0.0), (2.0, 3.0), (3.0, 0.0), (5.0, 0.0)], xys(&pts));
        assert!(effective_areas(&pts).iter().all(|a| *a > 2.0));
    }

    #[test]
    fn minimum_area_stops_at_floor() {
        let mut pts = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
        let mut cache = AreaCache::new(&PlanarArea);
        simplify_points(&mut pts, SimplifyMode::MinimumArea(1e9), &mut cache);
        assert_eq!(3, pts.len());
        assert_eq!((0.0, 0.0), (pts[0].lon, pts[0].lat));
        assert_eq!((4.0, 0.0), (pts[2].lon, pts[2].lat));
    }

    #[test]
    fn zero_tolerance_removes_only_collinear_points() {
        let mut pts = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 2.0), (4.0, 0.0), (5.0, 1.0)]);
        let mut cache = AreaCache::new(&PlanarArea);
        simplify_points(&mut pts, SimplifyMode::MinimumArea(0.0), &mut cache);
        assert_eq!(
            vec![(0.0, 0.0), (2.0, 0.0), (3.0, 2.0), (4.0, 0.0), (5.0, 1.0)],
            xys(&pts)
        );
    }

    #[test]
    fn minimum_area_termination_property() {
        let tolerance = 0.4;
        let mut pts = points(&zigzag(25));
        let mut cache = AreaCache::new(&PlanarArea);
        simplify_points(&mut pts, SimplifyMode::MinimumArea(tolerance), &mut cache);
        assert!(pts.len() == 3 || effective_areas(&pts).iter().all(|a| *a > tolerance));
    }

    #[test]
    fn percentage_retained_hits_exact_target() {
        for (n, percentage, expected) in &[(10, 50.0, 5), (25, 40.0, 10), (9, 50.0, 4), (100, 33.3, 33)] {
            let mut pts = points(&zigzag(*n));
            let first = pts[0];
            let last = pts[pts.len() - 1];
            let mut cache = AreaCache::new(&PlanarArea);
            simplify_points(&mut pts, SimplifyMode::PercentageRetained(*percentage), &mut cache);
            assert_eq!(*expected, pts.len());
            assert_eq!(first, pts[0]);
            assert_eq!(last, pts[pts.len() - 1]);
        }
    }

    #[test]
    fn percentage_retained_below_target_floor_is_untouched() {
        for percentage in &[30.0, 0.0, -10.0, std::f64::NAN] {
            let mut pts = points(&zigzag(10));
            let original = pts.clone();
            let mut cache = AreaCache::new(&PlanarArea);
            simplify_points(&mut pts, SimplifyMode::PercentageRetained(*percentage), &mut cache);
            assert_eq!(original, pts);
            assert_eq!(0, cache.misses());
        }
    }

    #[test]
    fn percentage_retained_over_hundred_keeps_everything() {
        let mut pts = points(&zigzag(10));
        let original = pts.clone();
        let mut cache = AreaCache::new(&PlanarArea);
        simplify_points(&mut pts, SimplifyMode::PercentageRetained(150.0), &mut cache);
        assert_eq!(original, pts);
    }

    #[test]
    fn neighbour_triples_are_reused() {
        let mut pts = points(&zigzag(12));
        let mut cache = AreaCache::new(&PlanarArea);
        simplify_points(&mut pts, SimplifyMode::PercentageRetained(50.0), &mut cache);
        assert_eq!(6, pts.len());
        assert!(cache.hits() > 0);
    }

    #[test]
    fn deterministic() {
        let run = || {
            let mut pts = points(&zigzag(30));
            let mut cache = AreaCache::new(&PlanarArea);
            simplify_points(&mut pts, SimplifyMode::PercentageRetained(30.0), &mut cache);
            pts
        };
        assert_eq!(run(), run());
    }
}

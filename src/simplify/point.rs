use geo_types::Coord;
use std::fmt;

/// Identity of a point read off an input geometry. Two points with equal
/// coordinates but different ids are different points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

/// Hands out point ids for one simplify call. Ids keep increasing across
/// every ring and sub-geometry read during the call.
#[derive(Debug, Default)]
pub struct PointIds {
    next: u64,
}

impl PointIds {
    pub fn new() -> PointIds {
        PointIds { next: 0 }
    }

    pub fn point(&mut self, c: Coord<f64>) -> Point {
        let id = PointId(self.next);
        self.next += 1;
        Point {
            id,
            lat: c.y,
            lon: c.x,
        }
    }

    pub fn issued(&self) -> u64 {
        self.next
    }
}

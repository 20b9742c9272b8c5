use crate::simplify::point::{Point, PointId};
use geo::algorithm::area::Area;
use geo::algorithm::chamberlain_duquette_area::ChamberlainDuquetteArea;
use geo_types::{Coord, LineString, Polygon};
use rustc_hash::FxHashMap;

/// WGS84 geographic coordinates.
pub const WGS84_SRID: i32 = 4326;
/// Unreferenced planar coordinates.
pub const PLANAR_SRID: i32 = 0;

/// Area enclosed by the triangle a -> b -> c -> a, in the native area
/// unit of the spatial reference `srid()`.
pub trait AreaFunction {
    fn srid(&self) -> i32;
    fn triangle_area(&self, a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64;
}

fn triangle(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Polygon<f64> {
    Polygon::new(LineString(vec![a, b, c, a]), vec![])
}

/// Spherical area in square meters on the WGS84 equatorial radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalArea;

impl AreaFunction for SphericalArea {
    fn srid(&self) -> i32 {
        WGS84_SRID
    }

    fn triangle_area(&self, a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
        triangle(a, b, c).chamberlain_duquette_unsigned_area()
    }
}

/// Cartesian area in squared coordinate units, for projected inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarArea;

impl AreaFunction for PlanarArea {
    fn srid(&self) -> i32 {
        PLANAR_SRID
    }

    fn triangle_area(&self, a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
        triangle(a, b, c).unsigned_area()
    }
}

/// Memoizes triangle areas by the ids of their three corners, in the
/// order they were asked for. Lives for a single ring.
pub struct AreaCache<'a, A: AreaFunction + ?Sized> {
    area_fn: &'a A,
    areas: FxHashMap<(PointId, PointId, PointId), f64>,
    hits: u64,
    misses: u64,
}

impl<'a, A: AreaFunction + ?Sized> AreaCache<'a, A> {
    pub fn new(area_fn: &'a A) -> AreaCache<'a, A> {
        AreaCache {
            area_fn,
            areas: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn area(&mut self, p1: &Point, p2: &Point, p3: &Point) -> f64 {
        let key = (p1.id, p2.id, p3.id);
        if let Some(area) = self.areas.get(&key) {
            self.hits += 1;
            return *area;
        }
        self.misses += 1;
        let area = self
            .area_fn
            .triangle_area(p1.coord(), p2.coord(), p3.coord());
        self.areas.insert(key, area);
        area
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

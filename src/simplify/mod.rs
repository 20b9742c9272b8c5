//! Visvalingam-Whyatt simplification of lines and polygons.
//!
//! A call walks the input geometry, reads every line or ring into a
//! sequence of identified points, drops the least significant interior
//! points and writes the survivors to a `GeometryBuilder`. Multi geometries
//! are rebuilt member by member in their original order.

pub mod area;
pub mod builder;
pub mod point;
pub mod ring;
pub mod visvalingam;

use crate::error::{Error, Result};
use area::{AreaFunction, SphericalArea};
use builder::GeometryBuilder;
use geo_types::{Geometry, LineString, Polygon};
use point::PointIds;
use ring::{RingKind, RingSimplifier};
use std::fmt;
use tracing::debug;
pub use visvalingam::SimplifyMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    Line,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Rect,
    Triangle,
}

impl GeometryType {
    pub fn of(geom: &Geometry<f64>) -> GeometryType {
        match *geom {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Line(_) => GeometryType::Line,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::Rect(_) => GeometryType::Rect,
            Geometry::Triangle(_) => GeometryType::Triangle,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// State for one simplify call: the id sequence shared by every ring and
/// the builder receiving the output.
pub struct Simplifier<'a, A: AreaFunction + ?Sized> {
    mode: SimplifyMode,
    area_fn: &'a A,
    ids: PointIds,
    builder: GeometryBuilder,
}

impl<'a, A: AreaFunction + ?Sized> Simplifier<'a, A> {
    pub fn new(mode: SimplifyMode, area_fn: &'a A) -> Result<Simplifier<'a, A>> {
        let mut builder = GeometryBuilder::new();
        builder.set_srid(area_fn.srid())?;
        Ok(Simplifier {
            mode,
            area_fn,
            ids: PointIds::new(),
            builder,
        })
    }

    pub fn simplify(mut self, geom: &Geometry<f64>) -> Result<Geometry<f64>> {
        self.geometry(geom)?;
        debug!(points_read = self.ids.issued(), "Simplified geometry");
        self.builder.constructed_geometry()
    }

    fn geometry(&mut self, geom: &Geometry<f64>) -> Result<()> {
        match *geom {
            Geometry::LineString(ref g) => self.line_string(g),
            Geometry::Polygon(ref g) => self.polygon(g),
            Geometry::MultiLineString(ref g) => {
                self.builder.begin_geometry(GeometryType::MultiLineString)?;
                for line in g.0.iter() {
                    self.line_string(line)?;
                }
                self.builder.end_geometry()
            }
            Geometry::MultiPolygon(ref g) => {
                self.builder.begin_geometry(GeometryType::MultiPolygon)?;
                for poly in g.0.iter() {
                    self.polygon(poly)?;
                }
                self.builder.end_geometry()
            }
            _ => Err(Error::UnsupportedGeometryType(GeometryType::of(geom))),
        }
    }

    fn line_string(&mut self, line: &LineString<f64>) -> Result<()> {
        let rings = RingSimplifier::new(RingKind::Line, self.mode, self.area_fn);
        self.builder.begin_geometry(GeometryType::LineString)?;
        rings.simplify_ring(line, &mut self.ids, &mut self.builder)?;
        self.builder.end_geometry()
    }

    fn polygon(&mut self, poly: &Polygon<f64>) -> Result<()> {
        let rings = RingSimplifier::new(RingKind::Polygon, self.mode, self.area_fn);
        self.builder.begin_geometry(GeometryType::Polygon)?;
        for ring in std::iter::once(poly.exterior()).chain(poly.interiors()) {
            rings.simplify_ring(ring, &mut self.ids, &mut self.builder)?;
        }
        self.builder.end_geometry()
    }
}

/// Simplifies `geom` with `mode`, scoring points with `area_fn`.
pub fn simplify<A: AreaFunction + ?Sized>(
    geom: &Geometry<f64>,
    mode: SimplifyMode,
    area_fn: &A,
) -> Result<Geometry<f64>> {
    Simplifier::new(mode, area_fn)?.simplify(geom)
}

/// Removes points whose spherical effective area, in square meters, is at
/// most `tolerance`.
pub fn simplify_by_minimum_area(geom: &Geometry<f64>, tolerance: f64) -> Result<Geometry<f64>> {
    simplify(geom, SimplifyMode::MinimumArea(tolerance), &SphericalArea)
}

/// Keeps `percentage` percent of each line's or ring's points, removing the
/// least significant ones by spherical effective area.
pub fn simplify_by_percentage_retained(
    geom: &Geometry<f64>,
    percentage: f64,
) -> Result<Geometry<f64>> {
    simplify(geom, SimplifyMode::PercentageRetained(percentage), &SphericalArea)
}

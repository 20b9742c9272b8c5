use crate::error::{Error, Result};
use crate::simplify::area::{AreaCache, AreaFunction};
use crate::simplify::builder::GeometryBuilder;
use crate::simplify::point::{Point, PointIds};
use crate::simplify::visvalingam::{self, SimplifyMode};
use geo_types::LineString;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingKind {
    Line,
    /// Closed ring of a polygon, read with its closing point.
    Polygon,
}

impl RingKind {
    /// Rings with this many points or fewer are copied through untouched.
    pub fn floor(self) -> usize {
        match self {
            RingKind::Line => 2,
            RingKind::Polygon => 3,
        }
    }
}

/// Simplifies one line or polygon ring and writes it to a builder as a
/// single figure.
pub struct RingSimplifier<'a, A: AreaFunction + ?Sized> {
    kind: RingKind,
    mode: SimplifyMode,
    area_fn: &'a A,
}

impl<'a, A: AreaFunction + ?Sized> RingSimplifier<'a, A> {
    pub fn new(kind: RingKind, mode: SimplifyMode, area_fn: &'a A) -> RingSimplifier<'a, A> {
        RingSimplifier {
            kind,
            mode,
            area_fn,
        }
    }

    pub fn read_points(&self, ring: &LineString<f64>, ids: &mut PointIds) -> Result<Vec<Point>> {
        if ring.0.is_empty() {
            return Err(Error::EmptyRing);
        }
        Ok(ring.0.iter().map(|c| ids.point(*c)).collect())
    }

    fn simplify(&self, mut points: Vec<Point>) -> Vec<Point> {
        let before = points.len();
        let mut cache = AreaCache::new(self.area_fn);
        visvalingam::simplify_points(&mut points, self.mode, &mut cache);
        debug!(
            kind = ?self.kind,
            mode = ?self.mode,
            before,
            after = points.len(),
            cache_hits = cache.hits(),
            cache_misses = cache.misses(),
            "Simplified ring"
        );
        points
    }

    pub fn simplify_ring(
        &self,
        ring: &LineString<f64>,
        ids: &mut PointIds,
        builder: &mut GeometryBuilder,
    ) -> Result<()> {
        let points = self.read_points(ring, ids)?;
        if points.len() <= self.kind.floor() {
            return figure(builder, &points, None);
        }

        let points = self.simplify(points);
        match self.kind {
            RingKind::Line => figure(builder, &points, None),
            // drop the old closing point and close on the first point again
            RingKind::Polygon => figure(builder, &points[..points.len() - 1], points.first()),
        }
    }
}

fn figure(builder: &mut GeometryBuilder, points: &[Point], closing: Option<&Point>) -> Result<()> {
    let (first, rest) = points.split_first().ok_or(Error::EmptyRing)?;
    builder.begin_figure(first.lat, first.lon)?;
    for p in rest {
        builder.add_point(p.lat, p.lon)?;
    }
    if let Some(p) = closing {
        builder.add_point(p.lat, p.lon)?;
    }
    builder.end_figure()
}

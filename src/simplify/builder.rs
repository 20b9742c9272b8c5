//! Incremental construction of a `geo_types::Geometry`.
//!
//! Calls must follow
//! `begin_geometry -> (begin_figure -> add_point* -> end_figure)* -> end_geometry`,
//! with one extra `begin_geometry`/`end_geometry` level inside a
//! MultiLineString or MultiPolygon. A call made out of that order is
//! rejected with `Error::BuilderState`.

use crate::error::{Error, Result};
use crate::simplify::GeometryType;
use geo_types::{Coord, Geometry, LineString, MultiLineString, MultiPolygon, Polygon};

#[derive(Debug)]
enum Frame {
    LineString {
        figure: Option<Vec<Coord<f64>>>,
        line: Option<LineString<f64>>,
    },
    Polygon {
        figure: Option<Vec<Coord<f64>>>,
        rings: Vec<LineString<f64>>,
    },
    MultiLineString(Vec<LineString<f64>>),
    MultiPolygon(Vec<Polygon<f64>>),
}

impl Frame {
    fn open(kind: GeometryType) -> Result<Frame> {
        match kind {
            GeometryType::LineString => Ok(Frame::LineString {
                figure: None,
                line: None,
            }),
            GeometryType::Polygon => Ok(Frame::Polygon {
                figure: None,
                rings: Vec::new(),
            }),
            GeometryType::MultiLineString => Ok(Frame::MultiLineString(Vec::new())),
            GeometryType::MultiPolygon => Ok(Frame::MultiPolygon(Vec::new())),
            other => Err(Error::UnsupportedGeometryType(other)),
        }
    }

    fn accepts(&self, child: GeometryType) -> bool {
        match self {
            Frame::MultiLineString(_) => child == GeometryType::LineString,
            Frame::MultiPolygon(_) => child == GeometryType::Polygon,
            _ => false,
        }
    }

    fn push(&mut self, child: Geometry<f64>) -> Result<()> {
        match (self, child) {
            (Frame::MultiLineString(lines), Geometry::LineString(line)) => lines.push(line),
            (Frame::MultiPolygon(polys), Geometry::Polygon(poly)) => polys.push(poly),
            _ => return Err(Error::BuilderState("child geometry does not match its parent")),
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct GeometryBuilder {
    srid: Option<i32>,
    stack: Vec<Frame>,
    constructed: Option<Geometry<f64>>,
}

impl GeometryBuilder {
    pub fn new() -> GeometryBuilder {
        GeometryBuilder::default()
    }

    pub fn set_srid(&mut self, srid: i32) -> Result<()> {
        if self.srid.is_some() || !self.stack.is_empty() || self.constructed.is_some() {
            return Err(Error::BuilderState("srid must be set once, before any geometry"));
        }
        self.srid = Some(srid);
        Ok(())
    }

    pub fn begin_geometry(&mut self, kind: GeometryType) -> Result<()> {
        if self.srid.is_none() {
            return Err(Error::BuilderState("srid must be set before a geometry"));
        }
        if self.constructed.is_some() {
            return Err(Error::BuilderState("geometry already constructed"));
        }
        if let Some(parent) = self.stack.last() {
            if !parent.accepts(kind) {
                return Err(Error::BuilderState("geometry cannot be nested here"));
            }
        }
        let frame = Frame::open(kind)?;
        self.stack.push(frame);
        Ok(())
    }

    pub fn begin_figure(&mut self, lat: f64, lon: f64) -> Result<()> {
        let figure = match self.stack.last_mut() {
            Some(Frame::LineString { figure, line: None }) => figure,
            Some(Frame::Polygon { figure, .. }) => figure,
            _ => {
                return Err(Error::BuilderState(
                    "figure must start inside an empty LineString or a Polygon",
                ))
            }
        };
        if figure.is_some() {
            return Err(Error::BuilderState("previous figure was not ended"));
        }
        *figure = Some(vec![Coord { x: lon, y: lat }]);
        Ok(())
    }

    pub fn add_point(&mut self, lat: f64, lon: f64) -> Result<()> {
        match self.stack.last_mut() {
            Some(Frame::LineString {
                figure: Some(coords),
                ..
            })
            | Some(Frame::Polygon {
                figure: Some(coords),
                ..
            }) => {
                coords.push(Coord { x: lon, y: lat });
                Ok(())
            }
            _ => Err(Error::BuilderState("point added outside of a figure")),
        }
    }

    pub fn end_figure(&mut self) -> Result<()> {
        let finished = match self.stack.last_mut() {
            Some(Frame::LineString { figure, line }) => figure.take().map(|coords| {
                *line = Some(LineString(coords));
            }),
            Some(Frame::Polygon { figure, rings }) => figure.take().map(|coords| {
                rings.push(LineString(coords));
            }),
            _ => None,
        };
        finished.ok_or(Error::BuilderState("no figure to end"))
    }

    pub fn end_geometry(&mut self) -> Result<()> {
        let complete = match self.stack.last() {
            Some(Frame::LineString { figure, line }) => figure.is_none() && line.is_some(),
            Some(Frame::Polygon { figure, rings }) => figure.is_none() && !rings.is_empty(),
            Some(_) => true,
            None => return Err(Error::BuilderState("no geometry to end")),
        };
        if !complete {
            return Err(Error::BuilderState("geometry ended without a complete figure"));
        }

        let geom = match self.stack.pop() {
            Some(Frame::LineString {
                line: Some(line), ..
            }) => Geometry::LineString(line),
            Some(Frame::Polygon { mut rings, .. }) => {
                let exterior = rings.remove(0);
                Geometry::Polygon(Polygon::new(exterior, rings))
            }
            Some(Frame::MultiLineString(lines)) => Geometry::MultiLineString(MultiLineString(lines)),
            Some(Frame::MultiPolygon(polys)) => Geometry::MultiPolygon(MultiPolygon(polys)),
            _ => return Err(Error::BuilderState("no geometry to end")),
        };

        match self.stack.last_mut() {
            Some(parent) => parent.push(geom),
            None => {
                self.constructed = Some(geom);
                Ok(())
            }
        }
    }

    pub fn constructed_geometry(self) -> Result<Geometry<f64>> {
        if !self.stack.is_empty() {
            return Err(Error::BuilderState("geometry is still open"));
        }
        self.constructed
            .ok_or(Error::BuilderState("no geometry was built"))
    }
}

use crate::simplify::GeometryType;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("simplify not implemented for geometry type {0}")]
    UnsupportedGeometryType(GeometryType),
    #[error("line or ring has no points")]
    EmptyRing,
    #[error("geometry builder called out of order: {0}")]
    BuilderState(&'static str),
    #[error("invalid GeoJSON")]
    InvalidGeoJSON,
    #[error("unknown command")]
    UnknownCommand,
    #[error("unrecognized entity format")]
    UnknownEntityFormat,
    #[error("invalid WKT")]
    InvalidWkt,
    #[error("missing argument")]
    MissingArgument,
    #[error("invalid number format")]
    InvalidNumberFormat,
    #[error("I/O error: {0}")]
    IOError(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    JSONParseError(#[from] serde_json::Error),
}

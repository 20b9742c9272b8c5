//! Visvalingam-Whyatt simplification for geographic lines and polygons.
//!
//! ```
//! use geo_types::{Geometry, LineString};
//!
//! let line: LineString<f64> = vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.001], [3.0, 0.0]].into();
//! let simplified = geoq_vw::simplify_by_minimum_area(&Geometry::LineString(line), 1e8).unwrap();
//! match simplified {
//!     Geometry::LineString(l) => assert_eq!(3, l.0.len()),
//!     _ => unreachable!(),
//! }
//! ```

pub mod commands;
pub mod entity;
pub mod error;
pub mod input;
pub mod reader;
pub mod simplify;
pub mod text;

pub use error::{Error, Result};
pub use simplify::{simplify, simplify_by_minimum_area, simplify_by_percentage_retained, SimplifyMode};

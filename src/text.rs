pub const MAIN_AFTER_HELP: &str = r#"
Reads one entity per line from STDIN and writes the simplified entity to
STDOUT. Entities may be WKT, GeoJSON (Geometry, Feature, or
FeatureCollection), or Lat/Lon pairs.

Only LineString, Polygon, MultiLineString and MultiPolygon geometries can
be simplified; any other geometry type stops the run with an error.

Set RUST_LOG=debug to log each simplified ring to STDERR.
"#;

pub const AREA_ABOUT: &str =
    "Remove points whose effective area is at most a tolerance";

pub const AREA_AFTER_HELP: &str = r#"
Repeatedly removes the interior point forming the smallest triangle with
its two neighbors, until that triangle is larger than TOLERANCE.

TOLERANCE is in square meters, or in squared coordinate units with
--planar. The first and last point of each line or ring are always kept.

Example:

$ echo 'LINESTRING (0 0, 1 0, 2 0.001, 3 0)' | geoq-vw area 100000000 --output wkt
  LINESTRING(0 0,2 0.001,3 0)
"#;

pub const PERCENT_ABOUT: &str =
    "Keep a percentage of the points of each line and ring";

pub const PERCENT_AFTER_HELP: &str = r#"
Repeatedly removes the least significant interior point until PERCENTAGE
percent of each line's or ring's original points remain (rounded down).

Lines and rings are left unchanged when that target is below 4 points.

Example:

$ echo 'LINESTRING (0 0, 1 0, 2 0, 3 1, 4 0, 5 0)' | geoq-vw percent 70 --output wkt
  LINESTRING(0 0,2 0,3 1,5 0)
"#;

pub const TOLERANCE_ARG_HELP: &str = "Largest effective area to remove";
pub const PERCENTAGE_ARG_HELP: &str = "Percentage of points to keep, e.g. 50";
pub const PLANAR_ARG_HELP: &str =
    "Measure areas on the plane instead of the WGS84 sphere.\nUse for projected coordinates.";
pub const OUTPUT_ARG_HELP: &str = "Output format";

use crate::entity::{self, Entity};
use crate::error::{Error, Result};
use crate::reader;
use crate::simplify::area::{AreaFunction, PlanarArea, SphericalArea};
use crate::simplify::{self, SimplifyMode};
use clap::ArgMatches;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    GeoJSON,
    Wkt,
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    match matches.value_of("output") {
        Some("wkt") => OutputFormat::Wkt,
        _ => OutputFormat::GeoJSON,
    }
}

fn number_arg(matches: &ArgMatches, name: &str) -> Result<f64> {
    match matches.value_of(name) {
        Some(arg) => match f64::from_str(arg) {
            Ok(n) if n.is_finite() => Ok(n),
            _ => {
                eprintln!(
                    "Invalid {}: {:?} - must be a floating point number, e.g. 0.001.",
                    name, arg
                );
                Err(Error::InvalidNumberFormat)
            }
        },
        None => Err(Error::MissingArgument),
    }
}

fn simplify_entity<A: AreaFunction + ?Sized>(
    e: Entity,
    mode: SimplifyMode,
    area_fn: &A,
    format: OutputFormat,
) -> Result<Vec<String>> {
    let geom = e.geom()?;
    let simplified = simplify::simplify(&geom, mode, area_fn)?;
    debug!(entity = %e, ?mode, "Simplified entity");
    match format {
        OutputFormat::Wkt => Ok(vec![entity::wkt_string(&simplified)?]),
        OutputFormat::GeoJSON => {
            let feature = entity::geojson_feature(&simplified, e.geojson_properties());
            Ok(vec![serde_json::to_string(&feature)?])
        }
    }
}

fn run(matches: &ArgMatches, mode: SimplifyMode) -> Result<()> {
    let format = output_format(matches);
    if matches.is_present("planar") {
        reader::for_stdin_entity(|e| simplify_entity(e, mode, &PlanarArea, format))
    } else {
        reader::for_stdin_entity(|e| simplify_entity(e, mode, &SphericalArea, format))
    }
}

pub fn minimum_area(matches: &ArgMatches) -> Result<()> {
    let tolerance = number_arg(matches, "tolerance")?;
    run(matches, SimplifyMode::MinimumArea(tolerance))
}

pub fn percentage_retained(matches: &ArgMatches) -> Result<()> {
    let percentage = number_arg(matches, "percentage")?;
    run(matches, SimplifyMode::PercentageRetained(percentage))
}

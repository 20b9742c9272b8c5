use crate::error::{Error, Result};
use crate::input::Input;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use once_cell::sync::Lazy;
use regex::Regex;
use std::convert::{TryFrom, TryInto};
use std::fmt;
use std::str::FromStr;
use wkt::ToWkt;

static LATLON_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(",|\t").unwrap());

#[derive(Clone, Debug)]
pub enum Entity {
    LatLon(String),
    Wkt(String, Geometry<f64>),
    GeoJsonFeature(String, geojson::Feature),
    GeoJsonGeometry(String, geojson::Geometry),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Entity::LatLon(ref raw) => write!(f, "LatLon: {}", raw),
            Entity::Wkt(ref raw, _) => write!(f, "WKT: {}", raw),
            Entity::GeoJsonFeature(ref raw, _) => write!(f, "GeoJSON Feature: {}", raw),
            Entity::GeoJsonGeometry(ref raw, _) => write!(f, "GeoJSON Geometry: {}", raw),
        }
    }
}

fn latlon_geom(raw: &str) -> Result<Geometry<f64>> {
    let pieces: Vec<&str> = LATLON_SPLIT.split(raw).collect();
    if pieces.len() != 2 {
        return Err(Error::UnknownEntityFormat);
    }
    let lat = f64::from_str(pieces[0]).map_err(|_| Error::InvalidNumberFormat)?;
    let lon = f64::from_str(pieces[1]).map_err(|_| Error::InvalidNumberFormat)?;
    Ok(Geometry::Point(Point::new(lon, lat)))
}

fn geojson_geom(gj_geom: &geojson::Geometry) -> Result<Geometry<f64>> {
    let geom: Geometry<f64> = gj_geom
        .value
        .clone()
        .try_into()
        .map_err(|_| Error::InvalidGeoJSON)?;
    Ok(geom)
}

fn wkt_entities(raw: &str) -> Result<Vec<Entity>> {
    let wkts: wkt::Wkt<f64> = wkt::Wkt::from_str(raw).map_err(|_| Error::InvalidWkt)?;
    wkts.items
        .iter()
        .map(|wkt_geom| {
            let geom = Geometry::<f64>::try_from(wkt_geom.clone()).map_err(|_| Error::InvalidWkt)?;
            Ok(Entity::Wkt(wkt_geom.to_string(), geom))
        })
        .collect()
}

fn parsed_geojson_entities(raw: String, gj: GeoJson) -> Result<Vec<Entity>> {
    match gj {
        GeoJson::Geometry(gj_geom) => Ok(vec![Entity::GeoJsonGeometry(raw, gj_geom)]),
        GeoJson::Feature(gj_feature) => Ok(vec![Entity::GeoJsonFeature(raw, gj_feature)]),
        GeoJson::FeatureCollection(gj_fc) => gj_fc
            .features
            .into_iter()
            .map(|f| {
                let gj_raw = serde_json::to_string(&f)?;
                Ok(Entity::GeoJsonFeature(gj_raw, f))
            })
            .collect(),
    }
}

fn geojson_entities(raw: String) -> Result<Vec<Entity>> {
    match raw.parse::<GeoJson>() {
        Ok(gj) => parsed_geojson_entities(raw, gj),
        Err(_) => Err(Error::InvalidGeoJSON),
    }
}

impl Entity {
    pub fn geom(&self) -> Result<Geometry<f64>> {
        match *self {
            Entity::LatLon(ref raw) => latlon_geom(raw),
            Entity::Wkt(_, ref geom) => Ok(geom.clone()),
            Entity::GeoJsonGeometry(_, ref gj_geom) => geojson_geom(gj_geom),
            Entity::GeoJsonFeature(_, ref gj_feature) => match gj_feature.geometry {
                Some(ref gj_geom) => geojson_geom(gj_geom),
                None => Err(Error::InvalidGeoJSON),
            },
        }
    }

    pub fn geojson_properties(&self) -> serde_json::Map<String, serde_json::Value> {
        match *self {
            Entity::GeoJsonFeature(_, ref f) => f.properties.clone().unwrap_or_default(),
            _ => serde_json::Map::new(),
        }
    }

    pub fn raw(&self) -> &str {
        match *self {
            Entity::LatLon(ref raw) => raw,
            Entity::Wkt(ref raw, _) => raw,
            Entity::GeoJsonGeometry(ref raw, _) => raw,
            Entity::GeoJsonFeature(ref raw, _) => raw,
        }
    }
}

pub fn wkt_string(geom: &Geometry<f64>) -> Result<String> {
    match geom.to_wkt().items.pop() {
        Some(wkt_geom) => Ok(wkt_geom.to_string()),
        None => Err(Error::InvalidWkt),
    }
}

/// A GeoJSON Feature for `geom` carrying this entity's properties.
pub fn geojson_feature(
    geom: &Geometry<f64>,
    properties: serde_json::Map<String, serde_json::Value>,
) -> geojson::Feature {
    geojson::Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(geom))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn from_input(i: Input) -> Result<Vec<Entity>> {
    match i {
        Input::LatLon(raw) => Ok(vec![Entity::LatLon(raw)]),
        Input::WKT(raw) => wkt_entities(&raw),
        Input::GeoJSON(raw) => geojson_entities(raw),
        Input::Unknown(_) => Err(Error::UnknownEntityFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::{from_input, geojson_feature, wkt_string, Entity};
    use crate::error::Error;
    use crate::input::Input;
    use geo_types::{Coord, Geometry, LineString, Point};

    fn entities(i: Input) -> Vec<Entity> {
        from_input(i.clone()).unwrap_or_else(|e| panic!("Should get entities from input {}: {:?}", i, e))
    }

    fn geoms(i: Input) -> Vec<Geometry<f64>> {
        entities(i).iter().map(|e| e.geom().unwrap()).collect()
    }

    fn sample_line() -> Geometry<f64> {
        Geometry::LineString(LineString(vec![
            Coord { x: 30.0, y: 10.0 },
            Coord { x: 10.0, y: 30.0 },
            Coord { x: 40.0, y: 40.0 },
        ]))
    }

    #[test]
    fn entities_for_latlon() {
        assert_eq!(
            vec![Geometry::Point(Point::new(34.0, 12.0))],
            geoms(Input::LatLon("12,34".to_string()))
        );
    }

    #[test]
    fn entities_for_wkt() {
        let i = Input::WKT("LINESTRING (30 10, 10 30, 40 40)".to_string());
        let es = entities(i.clone());
        assert_eq!(1, es.len());
        assert_eq!("LINESTRING(30 10,10 30,40 40)", es[0].raw());
        assert_eq!(vec![sample_line()], geoms(i));
    }

    #[test]
    fn invalid_wkt() {
        match from_input(Input::WKT("Polygon ((30 10, 10 30, 40 40, 30 10)".to_string())) {
            Err(Error::InvalidWkt) => {}
            other => panic!("expected InvalidWkt, got {:?}", other),
        }
    }

    #[test]
    fn entities_for_geojson_feature() {
        let raw = r#"{"type": "Feature", "properties": {"pizza": "pie"}, "geometry": {"type": "LineString", "coordinates": [[30, 10], [10, 30], [40, 40]]}}"#;
        let es = entities(Input::GeoJSON(raw.to_string()));
        assert_eq!(1, es.len());
        assert_eq!(sample_line(), es[0].geom().unwrap());
        assert_eq!(
            Some(&serde_json::Value::from("pie")),
            es[0].geojson_properties().get("pizza")
        );
    }

    #[test]
    fn entities_for_feature_collection() {
        let raw = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"a":"b"},"geometry":{"type":"Point","coordinates":[34.0,12.0]}},{"type":"Feature","properties":{"c":1},"geometry":{"type":"Point","coordinates":[78.0,56.0]}}]}"#;
        assert_eq!(
            vec![
                Geometry::Point(Point::new(34.0, 12.0)),
                Geometry::Point(Point::new(78.0, 56.0)),
            ],
            geoms(Input::GeoJSON(raw.to_string()))
        );
    }

    #[test]
    fn feature_without_geometry() {
        let raw = r#"{"type":"Feature","properties":{},"geometry":null}"#;
        let es = entities(Input::GeoJSON(raw.to_string()));
        match es[0].geom() {
            Err(Error::InvalidGeoJSON) => {}
            other => panic!("expected InvalidGeoJSON, got {:?}", other),
        }
    }

    #[test]
    fn unknown_input() {
        match from_input(Input::Unknown("pizza".to_string())) {
            Err(Error::UnknownEntityFormat) => {}
            other => panic!("expected UnknownEntityFormat, got {:?}", other),
        }
    }

    #[test]
    fn output_formats() {
        assert_eq!("LINESTRING(30 10,10 30,40 40)", wkt_string(&sample_line()).unwrap());
        let f = geojson_feature(&sample_line(), serde_json::Map::new());
        assert_eq!(
            r#"{"geometry":{"coordinates":[[30.0,10.0],[10.0,30.0],[40.0,40.0]],"type":"LineString"},"properties":{},"type":"Feature"}"#,
            serde_json::to_string(&f).unwrap()
        );
    }
}

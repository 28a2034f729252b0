//! Rendering a route and its estimate into a shareable map artifact
//!
//! Produces a self-contained Leaflet page with the route geometry
//! embedded as GeoJSON, written next to the other static assets and
//! overwritten on every prediction.

use std::fs;
use std::path::Path;

use geojson::{
    Feature, FeatureCollection, GeoJson, Geometry, GeometryValue as GeoJsonValue, JsonObject,
};
use serde_json::json;

use crate::geometry::centroid;
use crate::routing::Route;
use crate::traffic::TrafficEstimate;
use crate::Error;

const ZOOM_LEVEL: u8 = 13;

/// Writes the map artifact for a route to `path`, overwriting any
/// previous artifact.
///
/// # Errors
///
/// Fails on an empty route (no centroid to frame the map around) and
/// propagates write errors untouched.
pub fn render_map(route: &Route, estimate: &TrafficEstimate, path: &Path) -> Result<(), Error> {
    let center = centroid(route.points())
        .ok_or_else(|| Error::InvalidData("cannot render an empty route".to_string()))?;

    let overlay = GeoJson::FeatureCollection(route_overlay(route, estimate));
    let html = page(center.y(), center.x(), &overlay.to_string());

    fs::write(path, html)?;
    Ok(())
}

fn route_overlay(route: &Route, estimate: &TrafficEstimate) -> FeatureCollection {
    let mut features = Vec::with_capacity(3);

    let line = GeoJsonValue::LineString {
        coordinates: route
            .points()
            .iter()
            .map(|p| vec![p.x(), p.y()].into())
            .collect(),
    };
    let label = format!(
        "Traffic Level: {}<br>Estimated Time: {} minutes<br>Total Distance: {} km",
        estimate.level, estimate.estimated_minutes, estimate.distance_km
    );
    features.push(feature(line, &label));

    if let (Some(first), Some(last)) = (route.points().first(), route.points().last()) {
        features.push(feature(
            GeoJsonValue::Point {
                coordinates: vec![first.x(), first.y()].into(),
            },
            "Start",
        ));
        features.push(feature(
            GeoJsonValue::Point {
                coordinates: vec![last.x(), last.y()].into(),
            },
            "End",
        ));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn feature(geometry: GeoJsonValue, popup: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("popup".to_string(), json!(popup));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn page(center_lat: f64, center_lon: f64, overlay: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>Route map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
    var map = L.map('map').setView([{center_lat}, {center_lon}], {ZOOM_LEVEL});
    L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
        maxZoom: 19,
        attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    L.geoJSON({overlay}, {{
        style: {{ color: 'blue', weight: 3, opacity: 0.8 }},
        onEachFeature: function (feature, layer) {{
            if (feature.properties && feature.properties.popup) {{
                layer.bindPopup(feature.properties.popup);
            }}
        }}
    }}).addTo(map);
</script>
</body>
</html>
"#
    )
}

//! GPX 1.1 export of an ordered route
//!
//! Writes one track with one segment; every stop becomes a `trkpt` in visit
//! order. A stop's `name` field, if present, becomes the point name.

use serde_json::Value;
use std::fmt::Write;

use super::stop::Stop;

/// Media type for GPX documents
pub const GPX_CONTENT_TYPE: &str = "application/gpx+xml";

const TRACK_NAME: &str = "Optimized Route";

/// Escape text for use in XML content and attribute values
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Point name: strings as-is, other non-null values as their JSON text
fn stop_name(stop: &Stop) -> Option<String> {
    match stop.extra.get("name")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Render stops (already in visit order) as a GPX document
pub fn to_gpx(stops: &[Stop]) -> String {
    let mut gpx = String::with_capacity(256 + stops.len() * 96);

    // Writing into a String cannot fail
    let _ = write!(
        gpx,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <gpx version=\"1.1\" creator=\"butterfly-trip\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n\
         <metadata><name>{TRACK_NAME}</name></metadata>\n\
         <trk><name>{TRACK_NAME}</name><trkseg>\n"
    );

    for stop in stops {
        let _ = write!(gpx, "<trkpt lat=\"{}\" lon=\"{}\">", stop.lat, stop.lng);
        if let Some(name) = stop_name(stop) {
            let _ = write!(gpx, "<name>{}</name>", escape_xml(&name));
        }
        gpx.push_str("</trkpt>\n");
    }

    gpx.push_str("</trkseg></trk></gpx>\n");
    gpx
}

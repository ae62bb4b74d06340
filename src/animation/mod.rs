//! Animation description model
//!
//! Reads the subset of a Lottie-style JSON document the previewer cares about:
//! the marker list, frame rate, output frame count and pixel dimensions.
//! Everything else (layers, assets, ...) is kept verbatim so it can be handed
//! to a playback engine untouched.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, ScrubError};

/// A marker as it appears in the description, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMarker {
    /// Marker comment (`cm`), used as a display label only
    #[serde(rename = "cm", default)]
    pub name: String,
    /// Frame the marker sits on (`tm`)
    #[serde(rename = "tm", deserialize_with = "frame_number")]
    pub time: i64,
    /// Marker duration in frames (`dr`)
    #[serde(rename = "dr", default, deserialize_with = "frame_number")]
    pub duration: i64,
}

impl RawMarker {
    pub fn new(name: impl Into<String>, time: i64, duration: i64) -> Self {
        Self {
            name: name.into(),
            time,
            duration,
        }
    }

    /// Marker at `time` with no name and zero duration.
    pub fn at(time: i64) -> Self {
        Self::new("", time, 0)
    }
}

/// Frame numbers may be written as floats; round them to whole frames.
fn frame_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(D::Error::custom("frame number must be finite"));
    }
    Ok(value.round() as i64)
}

/// A loaded animation description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescription {
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip", default)]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    #[serde(default)]
    pub markers: Vec<RawMarker>,
    /// Remaining document content, passed through to the engine
    #[serde(flatten)]
    pub content: serde_json::Map<String, serde_json::Value>,
}

/// Read-only facts about the loaded animation, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationMeta {
    pub name: Option<String>,
    pub frame_rate: f64,
    pub total_frames: i64,
    pub width: u32,
    pub height: u32,
}

impl AnimationDescription {
    /// Read and parse a description file.
    ///
    /// Both IO failures and JSON errors are reported as
    /// [`ScrubError::UnreadableFile`].
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ScrubError::UnreadableFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse_str(&content).map_err(|e| match e {
            ScrubError::UnreadableFile { reason, .. } => ScrubError::UnreadableFile {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parse a description from an in-memory string.
    pub fn parse_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ScrubError::UnreadableFile {
            path: "<memory>".into(),
            reason: e.to_string(),
        })
    }

    /// Total output frame count (`op`), rounded to whole frames.
    pub fn total_frames(&self) -> i64 {
        self.out_point.round().max(0.0) as i64
    }

    pub fn meta(&self) -> AnimationMeta {
        AnimationMeta {
            name: self.name.clone(),
            frame_rate: self.frame_rate,
            total_frames: self.total_frames(),
            width: self.width,
            height: self.height,
        }
    }
}

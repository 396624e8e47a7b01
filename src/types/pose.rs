//! Camera pose value carried by each frame

use serde::{Deserialize, Serialize};

/// Camera pose and lens state for a single transmission tick.
///
/// A pose is a plain value: the send loop asks its source for one per tick and hands it
/// to the frame builder by reference. Nothing holds on to it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    /// Pitch (tilt) in degrees
    pub pitch: f64,
    /// Yaw (pan) in degrees
    pub yaw: f64,
    /// Roll in degrees
    pub roll: f64,
    /// X position in linear units
    pub x: f64,
    /// Y position in linear units
    pub y: f64,
    /// Z position (height) in linear units
    pub z: f64,
    /// Raw zoom encoder count
    pub zoom: i32,
    /// Raw focus encoder count
    pub focus: i32,
}

impl CameraPose {
    /// The fixed pose transmitted by the stock sender.
    pub const REFERENCE: CameraPose = CameraPose {
        pitch: 90.0,
        yaw: 0.0,
        roll: 0.0,
        x: 100.0,
        y: 200.0,
        z: 300.0,
        zoom: 0,
        focus: 0,
    };

    /// Create a pose from rotation, position and lens values.
    pub fn new(rotation: [f64; 3], position: [f64; 3], zoom: i32, focus: i32) -> Self {
        let [pitch, yaw, roll] = rotation;
        let [x, y, z] = position;
        Self { pitch, yaw, roll, x, y, z, zoom, focus }
    }

    /// Rotation as `[pitch, yaw, roll]`.
    pub fn rotation(&self) -> [f64; 3] {
        [self.pitch, self.yaw, self.roll]
    }

    /// Position as `[x, y, z]`.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

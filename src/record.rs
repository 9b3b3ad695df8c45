//! Record types - the shape of one calibration session
//!
//! A store file is a sequence of [`CalibrationRecord`]s. Each record carries
//! session metadata plus an ordered list of [`CameraRecord`]s (left, center,
//! right, ...). Field declaration order is the order fields are written to
//! disk, so do not reorder them. Unknown keys are rejected on load; a save
//! would otherwise drop them.

use serde::{Deserialize, Serialize};

/// Calibration software used for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationProgram {
    pub name: String,
    pub version: String,
}

/// Platforms a session was recorded and calibrated on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Platform {
    pub recording: String,
    pub calibration: String,
}

/// One camera within a calibration session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraRecord {
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub position: String,
    /// Lens distortion correction is present/needed
    pub distortion: bool,
    /// Camera was confirmed in focus at capture time
    pub in_focus: bool,
    pub fov: String,
}

impl CameraRecord {
    /// Create a camera with only its name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_distortion(mut self, distortion: bool) -> Self {
        self.distortion = distortion;
        self
    }

    pub fn with_in_focus(mut self, in_focus: bool) -> Self {
        self.in_focus = in_focus;
        self
    }

    pub fn with_fov(mut self, fov: impl Into<String>) -> Self {
        self.fov = fov.into();
        self
    }

    fn push_search_fields<'a>(&'a self, parts: &mut Vec<&'a str>) {
        parts.push(&self.name);
        parts.push(&self.model);
        parts.push(&self.serial_number);
        parts.push(&self.position);
        parts.push(bool_text(self.distortion));
        parts.push(bool_text(self.in_focus));
        parts.push(&self.fov);
    }
}

/// One calibration session.
///
/// `id` has the form `YYYYMMDD-NN` and `date` is an ISO calendar date; both
/// are assigned once when the record is created and never change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationRecord {
    pub id: String,
    pub date: String,
    pub scene: String,
    /// Physical/logical camera order, fixed at creation
    pub cameras: Vec<CameraRecord>,
    pub baseline: String,
    pub gstreamer_pipeline: String,
    pub resolution: String,
    pub calibration_program: CalibrationProgram,
    pub platform: Platform,
    pub notes: String,
}

impl CalibrationRecord {
    /// Create an empty record with the given identity
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = scene.into();
        self
    }

    pub fn with_camera(mut self, camera: CameraRecord) -> Self {
        self.cameras.push(camera);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Text searched by [`crate::query::search`].
    ///
    /// Every field value in declaration order, cameras expanded in place,
    /// booleans as `true`/`false`, one value per line. Keys are not included.
    pub fn search_text(&self) -> String {
        let mut parts = vec![self.id.as_str(), self.date.as_str(), self.scene.as_str()];
        for camera in &self.cameras {
            camera.push_search_fields(&mut parts);
        }
        parts.extend([
            self.baseline.as_str(),
            self.gstreamer_pipeline.as_str(),
            self.resolution.as_str(),
            self.calibration_program.name.as_str(),
            self.calibration_program.version.as_str(),
            self.platform.recording.as_str(),
            self.platform.calibration.as_str(),
            self.notes.as_str(),
        ]);
        parts.join("\n")
    }
}

fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

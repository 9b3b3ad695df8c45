//! Interactive field entry for new calibration records
//!
//! Generic over the input and output streams so the CLI can use stdin/stdout
//! while tests feed scripted answers.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::record::{CalibrationRecord, CameraRecord};
use crate::storage::CalibrationStore;
use crate::{Error, Result};

/// Camera count offered when nothing is configured
pub const DEFAULT_CAMERA_COUNT: usize = 3;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a free-text value; an empty answer yields `default`.
    pub fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        write!(self.output, "{} [{}]: ", prompt, default)?;
        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask a yes/no question until the answer is one of y, yes, n, no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            write!(self.output, "{} (y/n): ", prompt)?;
            match self.read_answer()?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please enter 'y' or 'n'.")?,
            }
        }
    }

    /// Ask for a non-negative count, re-asking on anything unparseable.
    pub fn count(&mut self, prompt: &str, default: usize) -> Result<usize> {
        loop {
            let answer = self.input(prompt, &default.to_string())?;
            match answer.parse::<usize>() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Invalid number '{}'.", answer)?,
            }
        }
    }

    /// Walk through every field of a new record.
    ///
    /// `id` and `date` are fixed by the caller; everything else is asked
    /// for, cameras last, in the order they will be stored.
    pub fn read_calibration(
        &mut self,
        id: &str,
        date: &str,
        default_cameras: usize,
    ) -> Result<CalibrationRecord> {
        let mut record = CalibrationRecord::new(id, date);
        record.scene = self.input("Enter the scene description", "")?;
        record.baseline = self.input("Enter the baseline", "")?;
        record.gstreamer_pipeline = self.input("Enter the GStreamer pipeline", "")?;
        record.resolution = self.input("Enter the resolution (e.g., 1920x1080)", "")?;
        record.calibration_program.name = self.input("Enter the calibration program name", "")?;
        record.calibration_program.version =
            self.input("Enter the calibration program version", "")?;
        record.platform.recording = self.input("Enter the recording platform", "")?;
        record.platform.calibration = self.input("Enter the calibration platform", "")?;
        record.notes = self.input("Enter any notes", "")?;

        let num_cameras = self.count("Enter the number of cameras", default_cameras)?;
        for i in 0..num_cameras {
            writeln!(self.output, "\n--- Entering details for Camera {} ---", i + 1)?;
            record.cameras.push(self.read_camera()?);
        }

        Ok(record)
    }

    fn read_camera(&mut self) -> Result<CameraRecord> {
        Ok(CameraRecord {
            name: self.input("Enter camera name (e.g., left, right, center)", "")?,
            model: self.input("Enter camera model", "")?,
            serial_number: self.input("Enter camera serial number", "")?,
            position: self.input("Enter camera position", "")?,
            distortion: self.confirm("Does the camera have distortion?")?,
            in_focus: self.confirm("Is the camera in focus?")?,
            fov: self.input("Enter the camera field of view (FOV)", "")?,
        })
    }

    fn read_answer(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Prompt("input closed before all fields were entered".to_string()));
        }
        Ok(line.trim().to_string())
    }
}

/// Outcome of [`add_calibration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedCalibration {
    pub id: String,
    /// The counted id was already taken by an earlier record
    pub duplicate_id: bool,
}

/// Prompt for a record dated `today`, append it to `store` and save.
///
/// Nothing is written if prompting fails.
pub fn add_calibration<R: BufRead, W: Write>(
    store: &mut CalibrationStore,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
    default_cameras: usize,
) -> Result<AddedCalibration> {
    let id = store.next_id(today);
    let date = today.format("%Y-%m-%d").to_string();
    let duplicate_id = store.find_by_id(&id).is_some();
    if duplicate_id {
        tracing::debug!("Generated id {} already exists in {}", id, store.path().display());
    }

    let record = prompter.read_calibration(&id, &date, default_cameras)?;
    store.add(record);
    store.persist()?;

    Ok(AddedCalibration { id, duplicate_id })
}

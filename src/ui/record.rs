//! Human-readable rendering of a calibration record

use owo_colors::OwoColorize;

use crate::record::CalibrationRecord;
use crate::ui::{theme, Theme};

const SEPARATOR_WIDTH: usize = 20;

pub fn print_calibration(record: &CalibrationRecord) {
    print!("{}", render_calibration(record, theme()));
}

/// Every field of `record`, labelled and indented by nesting level, ending
/// with a separator line.
pub fn render_calibration(record: &CalibrationRecord, theme: &Theme) -> String {
    let field = |indent: &str, name: &str, value: &str| field_line(theme, indent, name, value);
    let flag = |value: bool| {
        let style = if value { &theme.flag_on } else { &theme.flag_off };
        value.style(style.clone()).to_string()
    };
    let heading = |indent: &str, name: &str| {
        format!("{}{}", indent, name.style(theme.label.clone()))
    };

    let mut lines = vec![
        field("", "ID:", &record.id.style(theme.id.clone()).to_string()),
        field("  ", "Date:", &record.date),
        field("  ", "Scene:", &record.scene),
        heading("  ", "Cameras:"),
    ];
    for camera in &record.cameras {
        lines.extend([
            field("    - ", "Name:", &camera.name),
            field("      ", "Model:", &camera.model),
            field("      ", "Serial Number:", &camera.serial_number),
            field("      ", "Position:", &camera.position),
            field("      ", "Distortion:", &flag(camera.distortion)),
            field("      ", "In Focus:", &flag(camera.in_focus)),
            field("      ", "FOV:", &camera.fov),
        ]);
    }
    lines.extend([
        field("  ", "Baseline:", &record.baseline),
        field("  ", "GStreamer Pipeline:", &record.gstreamer_pipeline),
        field("  ", "Resolution:", &record.resolution),
        heading("  ", "Calibration Program:"),
        field("    ", "Name:", &record.calibration_program.name),
        field("    ", "Version:", &record.calibration_program.version),
        heading("  ", "Platform:"),
        field("    ", "Recording:", &record.platform.recording),
        field("    ", "Calibration:", &record.platform.calibration),
        field("  ", "Notes:", &record.notes),
        "-".repeat(SEPARATOR_WIDTH).style(theme.muted.clone()).to_string(),
    ]);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn field_line(theme: &Theme, indent: &str, name: &str, value: &str) -> String {
    format!("{}{} {}", indent, name.style(theme.label.clone()), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CameraRecord;

    #[test]
    fn test_render_plain() {
        let mut record = CalibrationRecord::new("20240115-01", "2024-01-15")
            .with_scene("lab")
            .with_camera(CameraRecord::new("left").with_distortion(true))
            .with_notes("outdoors");
        record.platform.recording = "jetson".to_string();

        let text = render_calibration(&record, &Theme::plain());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID: 20240115-01");
        assert_eq!(lines[1], "  Date: 2024-01-15");
        assert_eq!(lines[4], "    - Name: left");
        assert_eq!(lines[8], "      Distortion: true");
        assert_eq!(lines[9], "      In Focus: false");
        assert!(lines.contains(&"    Recording: jetson"));
        assert_eq!(lines[lines.len() - 2], "  Notes: outdoors");
        assert_eq!(lines[lines.len() - 1], "-".repeat(20));
    }

    #[test]
    fn test_render_without_cameras() {
        let record = CalibrationRecord::new("A-01", "2024-01-15");
        let text = render_calibration(&record, &Theme::plain());
        assert!(text.contains("  Cameras:\n  Baseline: \n"));
    }
}

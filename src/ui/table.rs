use tabled::{settings::Style, Table, Tabled};

use crate::record::CalibrationRecord;

const SCENE_WIDTH: usize = 40;

#[derive(Tabled)]
pub struct CalibrationRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Scene")]
    pub scene: String,
    #[tabled(rename = "Cameras")]
    pub cameras: String,
}

impl From<&CalibrationRecord> for CalibrationRow {
    fn from(record: &CalibrationRecord) -> Self {
        let names: Vec<&str> = record.cameras.iter().map(|c| c.name.as_str()).collect();
        Self {
            id: record.id.clone(),
            date: record.date.clone(),
            scene: truncate(&record.scene, SCENE_WIDTH),
            cameras: names.join(", "),
        }
    }
}

/// One-line-per-record summary table; empty string for no records.
pub fn calibration_table(records: &[CalibrationRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows: Vec<CalibrationRow> = records.iter().map(CalibrationRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CameraRecord;

    #[test]
    fn test_table_rows() {
        let records = vec![
            CalibrationRecord::new("20240115-01", "2024-01-15")
                .with_scene("lab")
                .with_camera(CameraRecord::new("left"))
                .with_camera(CameraRecord::new("right")),
        ];
        let table = calibration_table(&records);
        assert!(table.contains("20240115-01"));
        assert!(table.contains("left, right"));
        assert!(table.contains("Cameras"));
    }

    #[test]
    fn test_empty_table() {
        assert!(calibration_table(&[]).is_empty());
    }

    #[test]
    fn test_truncate_scene() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long scene name", 10), "a very ...");
    }
}

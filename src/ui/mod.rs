pub mod icons;
pub mod output;
pub mod record;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{empty, error, header, info, muted, section, status, success, warn};
pub use record::{print_calibration, render_calibration};
pub use table::calibration_table;
pub use theme::{theme, Theme};

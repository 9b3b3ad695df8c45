pub struct Icons;

impl Icons {
    pub const CAMERA: &str = "📷";
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const EMPTY: &str = "∅";
    pub const FILE: &str = "📄";
}

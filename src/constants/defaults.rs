pub const LOG_LEVEL: &str = "warn";
pub const OUTPUT_FORMAT: &str = "text";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const OUTPUT_FORMAT: &str = "SINGDTO_OUTPUT_FORMAT";
pub const CONFIG_DIR: &str = "SINGDTO_CONFIG_DIR";

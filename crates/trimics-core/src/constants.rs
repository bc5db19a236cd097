/// Name reported in the PRODID of calendars written by trimics.
pub const PRODUCT_NAME: &str = "trimics";

/// Default PRODID for freshly initialized output calendars.
pub const DEFAULT_PRODID: &str = const_str::concat!("-//", PRODUCT_NAME, "//Trimmed Calendar//EN");

/// iCalendar format version written into output calendars.
pub const ICALENDAR_VERSION: &str = "2.0";

/// Prefix marking vendor-specific extension properties (RFC 5545 §3.8.8.2).
pub const EXTENSION_PREFIX: &str = "X-";

/// Default retention window in months.
pub const DEFAULT_MONTHS_BEFORE: u32 = 12;

/// Prefix for environment variables read by the settings loader.
pub const ENV_PREFIX: &str = "TRIMICS";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "trimics.toml";

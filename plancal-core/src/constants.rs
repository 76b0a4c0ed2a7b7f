/// Format of an event's `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound on the occurrences a single expansion may produce.
pub const MAX_OCCURRENCES: u16 = 5000;

/// Default horizon for open-ended recurring events, in months from the anchor.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

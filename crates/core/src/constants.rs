/// Key-value slot holding the serialized goal collection
pub const DEFAULT_GOALS_SLOT: &str = "goals";

/// Currency prefix used when labelling amounts for display
pub const DEFAULT_CURRENCY_PREFIX: &str = "Ksh.";

/// Goals due within this many days are flagged as a warning
pub const DEADLINE_WARNING_DAYS: i64 = 30;

/// Format used to display a deadline that is not yet urgent
pub const DEADLINE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

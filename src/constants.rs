/// Name of the cookie carrying the signed session
pub const SESSION_COOKIE: &str = "timetable_session";

/// Smallest number of periods the edit screen accepts for a day
pub const MIN_PERIODS: usize = 1;

/// Largest number of periods (including breaks) for a day
pub const MAX_PERIODS: usize = 12;

/// Subject value that marks a period as a break (compared case-insensitively)
pub const BREAK_SUBJECT: &str = "break";

// =============================================================================
// Home screen labels
// =============================================================================

/// Shown as the current class while a break is in progress
pub const LABEL_BREAK: &str = "🛑 Break";

/// Shown when no period contains the current time
pub const LABEL_NO_CLASS_NOW: &str = "No class now";

/// Shown when nothing starts later today
pub const LABEL_NO_MORE_CLASSES: &str = "No more classes today";

// =============================================================================
// User-facing messages
// =============================================================================

/// Confirmation after a successful registration
pub const MSG_REGISTERED: &str = "Registered successfully! Please login.";

/// Confirmation after a day's periods are stored
pub const MSG_TIMETABLE_SAVED: &str = "Timetable saved successfully!";

/// Home screen warning when today has no periods (always on Sunday)
pub const MSG_NO_TIMETABLE_TODAY: &str = "No timetable for today!";

/// Full-week view warning when the user has no periods at all
pub const MSG_NO_TIMETABLE_DATA: &str = "No timetable data available.";

/// Error message for registering a taken username
pub const ERR_USERNAME_EXISTS: &str = "Username already exists!";

/// Error message for a login that matches no user
pub const ERR_INCORRECT_CREDENTIALS: &str = "Incorrect username or password";

/// Warning for a registration with an empty username or password
pub const ERR_MISSING_CREDENTIALS: &str = "Enter username and password";

/// Warning for an edit-form row with only some of its fields filled
pub const ERR_INCOMPLETE_PERIOD: &str = "Fill in start, end and subject for every period";

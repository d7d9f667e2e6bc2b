use crate::constants::{LABEL_BREAK, LABEL_NO_CLASS_NOW, LABEL_NO_MORE_CLASSES};
use crate::models::Period;

/// What the home screen shows for today
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassStatus {
    pub current: String,
    pub next: String,
}

/// Find the current and next class for `now` (`HH:MM`)
///
/// Times are compared as strings, so only zero-padded `HH:MM` values order
/// correctly. Both ends of a period are inclusive and the first period
/// containing `now` wins.
pub fn class_status(periods: &[Period], now: &str) -> ClassStatus {
    let mut current = LABEL_NO_CLASS_NOW.to_string();
    let mut next = LABEL_NO_MORE_CLASSES.to_string();
    let mut next_found = false;

    for (i, period) in periods.iter().enumerate() {
        if period.start.as_str() <= now && now <= period.end.as_str() {
            current = if period.is_break() {
                LABEL_BREAK.to_string()
            } else {
                period.subject.clone()
            };
            if let Some(following) = periods.get(i + 1) {
                next = following.subject.clone();
            }
            break;
        }

        if period.start.as_str() > now && !next_found {
            next = period.subject.clone();
            next_found = true;
        }
    }

    ClassStatus { current, next }
}

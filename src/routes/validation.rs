use std::collections::HashMap;

use crate::constants::{MAX_PERIODS, MIN_PERIODS};
use crate::error::{AppError, Result};
use crate::models::{Day, Period};

/// Keep a requested period count within the range the edit form offers
pub fn clamp_periods(requested: usize) -> usize {
    requested.clamp(MIN_PERIODS, MAX_PERIODS)
}

/// Parse a period count field
///
/// A missing or empty value (a cleared number input) is `None`.
pub fn parse_period_count(raw: Option<&str>) -> Result<Option<usize>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| AppError::InvalidInput("Invalid number of periods".to_string())),
    }
}

/// A posted edit form, rows exactly as typed
#[derive(Debug, Clone)]
pub struct EditSubmission {
    pub day: Day,
    pub periods: usize,
    pub rows: Vec<Period>,
}

impl EditSubmission {
    /// Read `day`, `periods` and `start_N`/`end_N`/`subject_N` fields
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let day = fields
            .get("day")
            .ok_or_else(|| AppError::InvalidInput("Missing day".to_string()))?
            .parse::<Day>()?;

        let periods = parse_period_count(fields.get("periods").map(String::as_str))?
            .map(clamp_periods)
            .unwrap_or(MIN_PERIODS);

        let field = |name: &str, i: usize| -> String {
            fields
                .get(&format!("{name}_{i}"))
                .cloned()
                .unwrap_or_default()
        };

        let rows = (0..periods)
            .map(|i| Period::new(field("start", i), field("end", i), field("subject", i)))
            .collect();

        Ok(Self { day, periods, rows })
    }

    /// Rows to store
    ///
    /// Blank rows are dropped; a row with only some fields filled is an error.
    pub fn complete_periods(&self) -> Result<Vec<Period>> {
        let mut complete = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let filled = [&row.start, &row.end, &row.subject]
                .iter()
                .filter(|v| !v.is_empty())
                .count();
            match filled {
                0 => continue,
                3 => complete.push(row.clone()),
                _ => return Err(AppError::IncompletePeriod),
            }
        }
        Ok(complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_clamp_periods() {
        assert_eq!(clamp_periods(0), 1);
        assert_eq!(clamp_periods(5), 5);
        assert_eq!(clamp_periods(40), 12);
    }

    #[test]
    fn test_reads_rows_up_to_period_count() {
        let submission = EditSubmission::from_fields(&fields(&[
            ("day", "wednesday"),
            ("periods", "2"),
            ("start_0", "08:00"),
            ("end_0", "09:00"),
            ("subject_0", "Math"),
            ("start_1", "09:00"),
            ("end_1", "09:15"),
            ("subject_1", "Break"),
            ("start_2", "10:00"),
            ("end_2", "11:00"),
            ("subject_2", "Ignored"),
        ]))
        .unwrap();

        assert_eq!(submission.day, Day::Wednesday);
        assert_eq!(submission.periods, 2);
        assert_eq!(
            submission.complete_periods().unwrap(),
            vec![
                Period::new("08:00", "09:00", "Math"),
                Period::new("09:00", "09:15", "Break"),
            ]
        );
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let submission = EditSubmission::from_fields(&fields(&[
            ("day", "monday"),
            ("periods", "3"),
            ("start_1", "08:00"),
            ("end_1", "09:00"),
            ("subject_1", "Math"),
        ]))
        .unwrap();

        assert_eq!(
            submission.complete_periods().unwrap(),
            vec![Period::new("08:00", "09:00", "Math")]
        );
    }

    #[test]
    fn test_partial_row_is_rejected() {
        let submission = EditSubmission::from_fields(&fields(&[
            ("day", "monday"),
            ("periods", "1"),
            ("start_0", "08:00"),
            ("subject_0", "Math"),
        ]))
        .unwrap();

        assert!(matches!(
            submission.complete_periods(),
            Err(AppError::IncompletePeriod)
        ));
    }

    #[test]
    fn test_unknown_day_is_rejected() {
        let result = EditSubmission::from_fields(&fields(&[("day", "sunday")]));
        assert!(matches!(result, Err(AppError::InvalidDay(_))));

        let result = EditSubmission::from_fields(&fields(&[("periods", "1")]));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_period_count() {
        assert_eq!(parse_period_count(None).unwrap(), None);
        assert_eq!(parse_period_count(Some("")).unwrap(), None);
        assert_eq!(parse_period_count(Some(" 4 ")).unwrap(), Some(4));
        assert!(matches!(
            parse_period_count(Some("four")),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_period_count_defaults_to_one_row() {
        let submission =
            EditSubmission::from_fields(&fields(&[("day", "monday"), ("periods", "")])).unwrap();
        assert_eq!(submission.periods, 1);
    }

    #[test]
    fn test_bad_period_count_is_rejected() {
        let result = EditSubmission::from_fields(&fields(&[("day", "monday"), ("periods", "x")]));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}

//! Filter and cap applied when reading a user's exercise log.

use super::{ExerciseDate, ExerciseEntry, UserId};

/// Maximum number of entries returned by a log query.
///
/// Anything other than a positive whole number falls back to
/// [`LogLimit::DEFAULT`]. Values beyond `u32::MAX` are clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLimit(u32);

impl LogLimit {
    /// Ceiling applied when the client supplies no usable limit.
    pub const DEFAULT: Self = Self(500);

    /// Interpret the raw `limit` query parameter.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::LogLimit;
    ///
    /// assert_eq!(LogLimit::from_query(Some("3")).get(), 3);
    /// assert_eq!(LogLimit::from_query(Some("5.0")).get(), 5);
    /// assert_eq!(LogLimit::from_query(Some("0")), LogLimit::DEFAULT);
    /// assert_eq!(LogLimit::from_query(Some("many")), LogLimit::DEFAULT);
    /// assert_eq!(LogLimit::from_query(None), LogLimit::DEFAULT);
    /// ```
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| whole_number(value.trim()))
            .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
            .and_then(Self::new)
            .unwrap_or(Self::DEFAULT)
    }

    /// Build a limit from a positive count.
    pub fn new(count: u32) -> Option<Self> {
        (count > 0).then_some(Self(count))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Digits with an optional all-zero fraction, e.g. `5` or `5.00`. Overlong
/// digit runs saturate.
fn whole_number(raw: &str) -> Option<u64> {
    let (integer, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    let digits = integer.strip_prefix('+').unwrap_or(integer);
    let is_whole = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b == b'0');
    is_whole.then(|| digits.parse().unwrap_or(u64::MAX))
}

impl Default for LogLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Selection criteria for a user's exercise entries.
///
/// Both bounds are inclusive and independently optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogFilter {
    pub user_id: UserId,
    pub from: Option<ExerciseDate>,
    pub to: Option<ExerciseDate>,
    pub limit: LogLimit,
}

impl ExerciseLogFilter {
    /// Filter matching every entry of `user_id`, capped at the default limit.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: LogLimit::DEFAULT,
        }
    }

    /// Whether `entry` satisfies the owner and date bounds. The limit is not
    /// considered.
    pub fn matches(&self, entry: &ExerciseEntry) -> bool {
        let date = entry.date();
        entry.user_id() == &self.user_id
            && self.from.is_none_or(|from| date >= from)
            && self.to.is_none_or(|to| date <= to)
    }

    /// Cap as a collection length.
    pub fn max_entries(&self) -> usize {
        usize::try_from(self.limit.get()).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, DurationMinutes};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    fn day(d: u32) -> ExerciseDate {
        ExerciseDate::new(NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date"))
    }

    #[fixture]
    fn owner() -> UserId {
        UserId::random()
    }

    fn entry(user_id: UserId, d: u32) -> ExerciseEntry {
        ExerciseEntry::new(
            user_id,
            Description::new("swim"),
            DurationMinutes::new(20),
            day(d),
        )
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(Some(10), None, true)]
    #[case(Some(11), None, false)]
    #[case(None, Some(10), true)]
    #[case(None, Some(9), false)]
    #[case(Some(10), Some(10), true)]
    #[case(Some(11), Some(9), false)]
    fn bounds_are_inclusive(
        owner: UserId,
        #[case] from: Option<u32>,
        #[case] to: Option<u32>,
        #[case] expected: bool,
    ) {
        let filter = ExerciseLogFilter {
            from: from.map(day),
            to: to.map(day),
            ..ExerciseLogFilter::for_user(owner)
        };

        assert_eq!(filter.matches(&entry(owner, 10)), expected);
    }

    #[rstest]
    fn other_users_entries_never_match(owner: UserId) {
        let filter = ExerciseLogFilter::for_user(owner);
        assert!(!filter.matches(&entry(UserId::random(), 10)));
    }

    #[rstest]
    #[case(Some("7"), 7)]
    #[case(Some(" 12 "), 12)]
    #[case(Some("5.0"), 5)]
    #[case(Some("8."), 8)]
    #[case(Some("4294967296"), u32::MAX)]
    #[case(Some("99999999999999999999"), u32::MAX)]
    #[case(Some("-3"), 500)]
    #[case(Some("2.5"), 500)]
    #[case(Some(".0"), 500)]
    #[case(Some(""), 500)]
    fn limit_falls_back_to_default(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(LogLimit::from_query(raw).get(), expected);
    }
}

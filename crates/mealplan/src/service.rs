use time::{Date, Duration};

/// Inclusive calendar range covered by a meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: Date,
    pub end: Date,
}

impl Week {
    /// The week from `start` through six days later. Ranges that would run
    /// past the last representable date end at `Date::MAX`.
    pub fn starting(start: Date) -> Self {
        Self {
            start,
            end: start.checked_add(Duration::days(6)).unwrap_or(Date::MAX),
        }
    }

    /// The Monday to Sunday week containing `date`.
    pub fn containing(date: Date) -> Self {
        let days_since_monday = i64::from(date.weekday().number_days_from_monday());

        Self::starting(
            date.checked_sub(Duration::days(days_since_monday))
                .unwrap_or(Date::MIN),
        )
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> [Date; 7] {
        let mut days = [self.start; 7];
        for (offset, day) in days.iter_mut().enumerate() {
            *day = self
                .start
                .checked_add(Duration::days(offset as i64))
                .unwrap_or(self.end);
        }

        days
    }

    pub fn next(&self) -> Self {
        Self::starting(self.start.checked_add(Duration::weeks(1)).unwrap_or(Date::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_containing_from_monday() {
        let week = Week::containing(date!(2025 - 01 - 20));

        assert_eq!(
            week,
            Week {
                start: date!(2025 - 01 - 20),
                end: date!(2025 - 01 - 26),
            }
        );
    }

    #[test]
    fn test_containing_from_wednesday() {
        let week = Week::containing(date!(2025 - 01 - 22));

        assert_eq!(week.start, date!(2025 - 01 - 20));
        assert_eq!(week.end, date!(2025 - 01 - 26));
    }

    #[test]
    fn test_containing_from_sunday() {
        let week = Week::containing(date!(2025 - 01 - 26));

        assert_eq!(week.start, date!(2025 - 01 - 20));
    }

    #[test]
    fn test_across_year_boundary() {
        let week = Week::containing(date!(2024 - 12 - 31));

        assert_eq!(week.start, date!(2024 - 12 - 30));
        assert_eq!(week.end, date!(2025 - 01 - 05));
        assert_eq!(week.next().start, date!(2025 - 01 - 06));
    }

    #[test]
    fn test_starting_any_day() {
        let week = Week::starting(date!(2025 - 01 - 22));

        assert_eq!(week.end, date!(2025 - 01 - 28));
        assert!(week.contains(date!(2025 - 01 - 28)));
        assert!(!week.contains(date!(2025 - 01 - 29)));
        assert!(!week.contains(date!(2025 - 01 - 21)));
        assert_eq!(week.days()[6], week.end);
    }

    #[test]
    fn test_end_of_calendar_saturates() {
        let week = Week::starting(date!(9999 - 12 - 30));

        assert_eq!(week.end, Date::MAX);
        assert!(week.contains(date!(9999 - 12 - 31)));
        assert_eq!(week.days()[0], date!(9999 - 12 - 30));
        assert_eq!(week.days()[1], Date::MAX);
        assert_eq!(week.days()[6], Date::MAX);
        assert_eq!(week.next().start, Date::MAX);
        assert_eq!(week.next().end, Date::MAX);

        let week = Week::starting(date!(9999 - 12 - 25));
        assert_eq!(week.end, date!(9999 - 12 - 31));
    }
}

//! Single-day increments and decrements with month and year rollover.

use crate::consts::DECEMBER;
use crate::types::{Day, Month};
use crate::CalendarDate;

impl CalendarDate {
    /// The day after `self`.
    /// Returns `None` only for 9999-12-31, which has no four-digit successor.
    pub fn next_day(self) -> Option<Self> {
        let (year, month, day) = (self.year_typed(), self.month_typed(), self.day_typed());

        if day.get() < month.length_in(year) {
            let day = Day::new(day.get() + 1, year.get(), month.get()).ok()?;
            return Some(Self::from_parts(year, month, day));
        }

        // roll to first of next month, and into the next year after December
        match month.succ() {
            Some(next_month) => Some(Self::from_parts(year, next_month, Day::FIRST)),
            None => Some(Self::from_parts(year.succ()?, Month::JANUARY, Day::FIRST)),
        }
    }

    /// The day before `self`.
    /// Returns `None` only for 0001-01-01, which has no four-digit predecessor.
    pub fn previous_day(self) -> Option<Self> {
        let (year, month, day) = (self.year_typed(), self.month_typed(), self.day_typed());

        if day.get() > Day::FIRST.get() {
            let day = Day::new(day.get() - 1, year.get(), month.get()).ok()?;
            return Some(Self::from_parts(year, month, day));
        }

        // roll back to the last day of the previous month, which may be in the previous year
        let (year, month) = match month.pred() {
            Some(prev_month) => (year, prev_month),
            None => (year.pred()?, Month::new(DECEMBER).ok()?),
        };
        Some(Self::from_parts(year, month, Day::last_of(year, month)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::date;
    use crate::CalendarDate;

    #[test]
    fn test_next_day_cases() {
        struct TestCase {
            from:        &'static str,
            to:          &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        "2024-06-14",
                to:          "2024-06-15",
                description: "mid-month",
            },
            TestCase {
                from:        "2024-02-28",
                to:          "2024-02-29",
                description: "into leap day",
            },
            TestCase {
                from:        "2024-02-29",
                to:          "2024-03-01",
                description: "out of leap day",
            },
            TestCase {
                from:        "2023-02-28",
                to:          "2023-03-01",
                description: "end of February in a common year",
            },
            TestCase {
                from:        "1900-02-28",
                to:          "1900-03-01",
                description: "century year is not leap",
            },
            TestCase {
                from:        "2000-02-28",
                to:          "2000-02-29",
                description: "400-year century is leap",
            },
            TestCase {
                from:        "2024-04-30",
                to:          "2024-05-01",
                description: "end of a 30-day month",
            },
            TestCase {
                from:        "2024-12-31",
                to:          "2025-01-01",
                description: "end of year",
            },
        ];

        for case in &cases {
            assert_eq!(
                date(case.from).next_day(),
                Some(date(case.to)),
                "next_day({}) ({})",
                case.from,
                case.description
            );
        }
    }

    #[test]
    fn test_previous_day_cases() {
        struct TestCase {
            from:        &'static str,
            to:          &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        "2024-06-15",
                to:          "2024-06-14",
                description: "mid-month",
            },
            TestCase {
                from:        "2024-03-01",
                to:          "2024-02-29",
                description: "back into leap day",
            },
            TestCase {
                from:        "2023-03-01",
                to:          "2023-02-28",
                description: "back into common February",
            },
            TestCase {
                from:        "2024-05-01",
                to:          "2024-04-30",
                description: "back into a 30-day month",
            },
            TestCase {
                from:        "2025-01-01",
                to:          "2024-12-31",
                description: "start of year",
            },
        ];

        for case in &cases {
            assert_eq!(
                date(case.from).previous_day(),
                Some(date(case.to)),
                "previous_day({}) ({})",
                case.from,
                case.description
            );
        }
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(date("9999-12-31").next_day(), None);
        assert_eq!(CalendarDate::MIN.previous_day(), None);
        assert_eq!(date("9999-12-30").next_day(), Some(date("9999-12-31")));
        assert_eq!(date("0001-01-02").previous_day(), Some(CalendarDate::MIN));
    }

    #[test]
    fn test_round_trip_over_leap_cycle() {
        // Every day from 1999-12-01 through 2001-01-31 crosses both a leap
        // February and two year boundaries.
        let mut current = date("1999-12-01");
        let end = date("2001-01-31");
        let mut seen = 0;
        while current < end {
            let next = current.next_day().unwrap();
            assert!(next > current);
            assert_eq!(next.previous_day(), Some(current), "round trip at {current}");
            assert_eq!(
                current.previous_day().and_then(CalendarDate::next_day),
                Some(current),
                "reverse round trip at {current}"
            );
            current = next;
            seen += 1;
        }
        // 31 (Dec) + 366 (2000) + 30 (Jan 2001 up to the 31st)
        assert_eq!(seen, 427);
    }
}

//! Brazilian national holidays.
//!
//! Fixed-date holidays are constant; moveable ones are offsets from Easter
//! Sunday computed with the Meeus/Jones/Butcher Gregorian algorithm.

use crate::calendar::month::YearMonth;
use crate::model::holiday::{is_leap_year, Holiday, HolidayKind, MonthDay};
use chrono::{Datelike, NaiveDate};

const FIXED_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "Ano Novo"),
    (4, 21, "Tiradentes"),
    (5, 1, "Dia do Trabalho"),
    (9, 7, "Independência do Brasil"),
    (10, 12, "Nossa Senhora Aparecida"),
    (11, 2, "Finados"),
    (11, 15, "Proclamação da República"),
    (12, 25, "Natal"),
];

const GOOD_FRIDAY_OFFSET: i64 = -2;
const CARNIVAL_OFFSET: i64 = -47;
const CORPUS_CHRISTI_OFFSET: i64 = 60;

pub const GOOD_FRIDAY: &str = "Sexta-feira Santa";
pub const CARNIVAL: &str = "Carnaval";
pub const CORPUS_CHRISTI: &str = "Corpus Christi";
pub const EASTER: &str = "Páscoa";

/// Gregorian Easter Sunday for `year`.
///
/// Euclidean division keeps the computus total for every `i32`, although
/// only positive years are meaningful.
pub fn easter_sunday(year: i32) -> MonthDay {
    let year = i64::from(year);
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;

    // Always March or April.
    MonthDay {
        month: n.div_euclid(31) as u32,
        day: (n.rem_euclid(31) + 1) as u32,
    }
}

/// All national holidays of `year`: eight fixed, then the four moveable
/// ones (Good Friday, Carnival, Corpus Christi, Easter).
pub fn get_holidays(year: i32) -> Vec<Holiday> {
    let leap = is_leap_year(year);
    let easter = easter_sunday(year);

    let mut holidays: Vec<Holiday> = FIXED_HOLIDAYS
        .iter()
        .map(|&(month, day, name)| {
            Holiday::national(MonthDay { month, day }, name, HolidayKind::Fixed)
        })
        .collect();

    for (offset, name) in [
        (GOOD_FRIDAY_OFFSET, GOOD_FRIDAY),
        (CARNIVAL_OFFSET, CARNIVAL),
        (CORPUS_CHRISTI_OFFSET, CORPUS_CHRISTI),
        (0, EASTER),
    ] {
        holidays.push(Holiday::national(
            shift_within_year(easter, offset, leap),
            name,
            HolidayKind::Moveable,
        ));
    }

    holidays
}

/// First holiday whose anchor matches `date`'s month and day.
pub fn find_holiday(date: NaiveDate, holidays: &[Holiday]) -> Option<&Holiday> {
    let anchor = MonthDay::of(date);
    holidays.iter().find(|holiday| holiday.date == anchor)
}

/// Holidays falling in `month`, ordered by day.
pub fn holidays_in_month(month: YearMonth, holidays: &[Holiday]) -> Vec<&Holiday> {
    let mut found: Vec<&Holiday> = holidays
        .iter()
        .filter(|holiday| holiday.date.month == month.month())
        .collect();
    found.sort_by_key(|holiday| holiday.date);
    found
}

/// Next `limit` holidays on or after `from`, looking at `from`'s year and
/// the following one. Each year's set is computed for that year.
pub fn upcoming_holidays(from: NaiveDate, limit: usize) -> Vec<(NaiveDate, Holiday)> {
    let year = from.year();
    let mut upcoming: Vec<(NaiveDate, Holiday)> = std::iter::once(year)
        .chain(year.checked_add(1))
        .flat_map(|year| {
            get_holidays(year)
                .into_iter()
                .filter_map(move |holiday| holiday.date.in_year(year).map(|date| (date, holiday)))
        })
        .filter(|(date, _)| *date >= from)
        .collect();
    upcoming.sort_by_key(|(date, _)| *date);
    upcoming.truncate(limit);
    upcoming
}

// Easter offsets used here never leave the year (earliest Carnival is
// Feb 3, latest Corpus Christi is Jun 24).
fn shift_within_year(anchor: MonthDay, offset: i64, leap: bool) -> MonthDay {
    let year_len: i64 = if leap { 366 } else { 365 };
    let ordinal = (i64::from(anchor.ordinal(leap)) + offset).clamp(1, year_len);
    MonthDay::from_ordinal(ordinal as u32, leap)
}

#[cfg(test)]
mod tests {
    use super::{easter_sunday, shift_within_year};
    use crate::model::holiday::MonthDay;

    #[test]
    fn easter_extremes_stay_in_march_and_april() {
        // 1818 and 2285 hit the earliest possible date, 1943 and 2038 the latest.
        assert_eq!(easter_sunday(1818), MonthDay { month: 3, day: 22 });
        assert_eq!(easter_sunday(2285), MonthDay { month: 3, day: 22 });
        assert_eq!(easter_sunday(1943), MonthDay { month: 4, day: 25 });
        assert_eq!(easter_sunday(2038), MonthDay { month: 4, day: 25 });
    }

    #[test]
    fn shift_crosses_february_in_leap_years() {
        let easter = MonthDay { month: 3, day: 31 };
        assert_eq!(
            shift_within_year(easter, -47, true),
            MonthDay { month: 2, day: 13 }
        );
        assert_eq!(
            shift_within_year(easter, -47, false),
            MonthDay { month: 2, day: 12 }
        );
    }
}

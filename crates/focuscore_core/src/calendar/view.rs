//! Calendar screen state.
//!
//! # Invariants
//! - `holidays` always belongs to `displayed.year()`; moving to another year
//!   recomputes the set before any lookup.
//! - The selected date, when set, lies in the displayed month.

use crate::calendar::aggregator::{build_month_events, events_for_day, sort_day_events};
use crate::calendar::holidays::{find_holiday, get_holidays, holidays_in_month};
use crate::calendar::month::YearMonth;
use crate::model::event::CalendarEvent;
use crate::model::holiday::Holiday;
use crate::model::routine::Routine;
use crate::model::task::Task;
use chrono::NaiveDate;
use log::debug;

#[derive(Debug, Clone)]
pub struct CalendarView {
    displayed: YearMonth,
    holidays: Vec<Holiday>,
    holiday_year: i32,
    selected: Option<NaiveDate>,
}

impl CalendarView {
    /// Opens the calendar on the month containing `today`, nothing selected.
    pub fn new(today: NaiveDate) -> Self {
        let displayed = YearMonth::of(today);
        Self {
            displayed,
            holidays: get_holidays(displayed.year()),
            holiday_year: displayed.year(),
            selected: None,
        }
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.displayed
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Switches the displayed month; a selection outside it is cleared.
    pub fn show_month(&mut self, month: YearMonth) {
        self.displayed = month;
        self.refresh_holidays();
        if self.selected.is_some_and(|date| !month.contains(date)) {
            self.selected = None;
        }
    }

    pub fn next_month(&mut self) {
        self.show_month(self.displayed.next());
    }

    pub fn prev_month(&mut self) {
        self.show_month(self.displayed.prev());
    }

    /// Selects `date`, moving the display to its month when needed.
    pub fn select(&mut self, date: NaiveDate) {
        let month = YearMonth::of(date);
        if month != self.displayed {
            self.show_month(month);
        }
        self.selected = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Holiday on the selected date, if any.
    pub fn selected_holiday(&self) -> Option<&Holiday> {
        self.selected
            .and_then(|date| find_holiday(date, &self.holidays))
    }

    /// Holidays of the displayed month, ordered by day.
    pub fn month_holidays(&self) -> Vec<&Holiday> {
        holidays_in_month(self.displayed, &self.holidays)
    }

    /// All events of the displayed month, rebuilt from the given snapshots.
    pub fn month_events<'a>(
        &'a self,
        tasks: &'a [Task],
        routines: &'a [Routine],
    ) -> Vec<CalendarEvent<'a>> {
        build_month_events(self.displayed, tasks, routines, &self.holidays)
    }

    /// Sorted events of the selected day; empty without a selection.
    pub fn selected_day_events<'a>(
        &'a self,
        tasks: &'a [Task],
        routines: &'a [Routine],
    ) -> Vec<CalendarEvent<'a>> {
        let Some(date) = self.selected else {
            return Vec::new();
        };
        let month_events = self.month_events(tasks, routines);
        let mut day_events = events_for_day(&month_events, date);
        sort_day_events(&mut day_events);
        day_events
    }

    fn refresh_holidays(&mut self) {
        let year = self.displayed.year();
        if year == self.holiday_year {
            return;
        }
        self.holidays = get_holidays(year);
        self.holiday_year = year;
        debug!("event=holidays_refresh module=calendar status=ok year={year}");
    }
}

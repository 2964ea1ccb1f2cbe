//! Pomodoro focus timer.
//!
//! The timer is a plain state machine advanced one second per `tick`; the
//! host drives it from its own clock.
//!
//! # Invariants
//! - `time_left_secs` never exceeds the current mode's duration.
//! - Every fourth completed pomodoro is followed by a long break.

use log::info;

const POMODORO_SECS: u32 = 25 * 60;
const SHORT_BREAK_SECS: u32 = 5 * 60;
const LONG_BREAK_SECS: u32 = 15 * 60;
const ROUNDS_PER_LONG_BREAK: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub fn duration_secs(self) -> u32 {
        match self {
            Self::Pomodoro => POMODORO_SECS,
            Self::ShortBreak => SHORT_BREAK_SECS,
            Self::LongBreak => LONG_BREAK_SECS,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Pomodoro => "pomodoro",
            Self::ShortBreak => "short_break",
            Self::LongBreak => "long_break",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroTimer {
    pub mode: TimerMode,
    pub time_left_secs: u32,
    pub active: bool,
    /// Completed pomodoros.
    pub rounds: u32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self {
            mode: TimerMode::Pomodoro,
            time_left_secs: POMODORO_SECS,
            active: false,
            rounds: 0,
        }
    }
}

impl PomodoroTimer {
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Restores the full duration of the current mode and stops.
    pub fn reset(&mut self) {
        self.time_left_secs = self.mode.duration_secs();
        self.active = false;
    }

    /// Switches mode, keeping the round count; the timer stops.
    pub fn change_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// Advances one second. Returns the mode just finished, if any.
    pub fn tick(&mut self) -> Option<TimerMode> {
        if !self.active {
            return None;
        }
        if self.time_left_secs > 0 {
            self.time_left_secs -= 1;
        }
        if self.time_left_secs > 0 {
            return None;
        }

        let finished = self.mode;
        let next = match finished {
            TimerMode::Pomodoro => {
                self.rounds += 1;
                if self.rounds % ROUNDS_PER_LONG_BREAK == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Pomodoro,
        };
        self.mode = next;
        self.time_left_secs = next.duration_secs();
        info!(
            "event=pomodoro_phase module=pomodoro status=ok finished={} next={} rounds={}",
            finished.as_str(),
            next.as_str(),
            self.rounds
        );
        Some(finished)
    }

    /// Remaining time as `MM:SS`.
    pub fn format_time(&self) -> String {
        format_mm_ss(self.time_left_secs)
    }
}

pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_mm_ss, PomodoroTimer, TimerMode};

    fn run_until_phase_ends(timer: &mut PomodoroTimer) -> TimerMode {
        loop {
            if let Some(finished) = timer.tick() {
                return finished;
            }
        }
    }

    #[test]
    fn paused_timer_does_not_advance() {
        let mut timer = PomodoroTimer::default();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.time_left_secs, 25 * 60);
    }

    #[test]
    fn fourth_pomodoro_leads_to_long_break() {
        let mut timer = PomodoroTimer::default();
        timer.start();

        for round in 1..=3 {
            assert_eq!(run_until_phase_ends(&mut timer), TimerMode::Pomodoro);
            assert_eq!(timer.rounds, round);
            assert_eq!(timer.mode, TimerMode::ShortBreak);
            assert_eq!(run_until_phase_ends(&mut timer), TimerMode::ShortBreak);
            assert_eq!(timer.mode, TimerMode::Pomodoro);
        }

        assert_eq!(run_until_phase_ends(&mut timer), TimerMode::Pomodoro);
        assert_eq!(timer.rounds, 4);
        assert_eq!(timer.mode, TimerMode::LongBreak);
        assert_eq!(timer.time_left_secs, 15 * 60);
        assert!(timer.active);
    }

    #[test]
    fn change_mode_keeps_rounds_and_stops() {
        let mut timer = PomodoroTimer {
            rounds: 2,
            active: true,
            ..PomodoroTimer::default()
        };
        timer.change_mode(TimerMode::ShortBreak);
        assert_eq!(timer.rounds, 2);
        assert!(!timer.active);
        assert_eq!(timer.format_time(), "05:00");
    }

    #[test]
    fn reset_restores_current_mode_duration() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.time_left_secs, 25 * 60);
        assert!(!timer.active);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(61), "01:01");
        assert_eq!(format_mm_ss(25 * 60), "25:00");
    }
}

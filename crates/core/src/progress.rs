use std::time::Duration;

/// Derived classification of a single step, recomputed from the driver on
/// every render. Never stored per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

/// Lifecycle of a driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Constructed but not yet started.
    Idle,
    /// Ticking through the step sequence.
    Running,
    /// All steps consumed. Terminal until the next `start`.
    Complete,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor advanced by one and steps remain.
    Advanced,
    /// This tick consumed the final step. Reported exactly once per run.
    Finished,
    /// The driver was idle or already complete; nothing changed.
    Noop,
}

/// State machine that paces simulated multi-step work.
///
/// The driver owns a cursor over a fixed-length step sequence. A timer at
/// the UI layer calls [`tick`](Self::tick) at a fixed interval; everything
/// a screen renders (per-step status, progress fraction) is derived from
/// the cursor, never stored alongside it.
///
/// The cursor is monotone within a run and resets only through
/// [`start`](Self::start), so an open/close/reopen cycle always begins
/// from zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressDriver {
    total: usize,
    cursor: usize,
    state: DriverState,
}

impl ProgressDriver {
    /// A driver over `total` steps, idle until started.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            cursor: 0,
            state: DriverState::Idle,
        }
    }

    /// Begin (or restart) a run: cursor back to zero, state to `Running`.
    pub fn start(&mut self) {
        self.cursor = 0;
        self.state = DriverState::Running;
    }

    /// Advance the cursor by one step.
    ///
    /// Returns [`TickOutcome::Finished`] on the tick that consumes the last
    /// step and [`TickOutcome::Noop`] for every tick after that, so the
    /// caller can fire its completion callback exactly once.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            DriverState::Idle | DriverState::Complete => TickOutcome::Noop,
            DriverState::Running => {
                if self.cursor < self.total {
                    self.cursor += 1;
                }
                if self.cursor >= self.total {
                    self.state = DriverState::Complete;
                    TickOutcome::Finished
                } else {
                    TickOutcome::Advanced
                }
            }
        }
    }

    /// Status of the step at `index`.
    ///
    /// While running, exactly one index (the cursor) is active; once the
    /// run completes every index reports completed regardless of cursor.
    #[must_use]
    pub fn status_of(&self, index: usize) -> StepStatus {
        match self.state {
            DriverState::Idle => StepStatus::Pending,
            DriverState::Complete => StepStatus::Completed,
            DriverState::Running => {
                if index < self.cursor {
                    StepStatus::Completed
                } else if index == self.cursor {
                    StepStatus::Active
                } else {
                    StepStatus::Pending
                }
            }
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == DriverState::Complete
    }

    /// Completed share of the run as a whole percentage in `0..=100`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.is_complete() || self.total == 0 {
            return 100;
        }
        let percent = self.cursor * 100 / self.total;
        u8::try_from(percent).unwrap_or(100)
    }
}

/// Timing knobs for the simulated work.
///
/// The standard profile mirrors the cadence users see in the shipped app;
/// the fast profile exists for tests and `--fast` demo runs, where waiting
/// out wall-clock seconds is pointless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerProfile {
    evaluation_tick: Duration,
    loader_tick: Duration,
    reveal_tick: Duration,
    completion_delay: Duration,
    generate_delay: Duration,
    typing_debounce: Duration,
    refresh_delay: Duration,
}

impl TimerProfile {
    /// Production cadence: 1 s per evaluation metric, 100 ms per loader
    /// increment, 300 ms per overview reveal, 1 s linger on completion,
    /// 2 s simulated generation, 1 s typing debounce, 600 ms refresh spin.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            evaluation_tick: Duration::from_millis(1000),
            loader_tick: Duration::from_millis(100),
            reveal_tick: Duration::from_millis(300),
            completion_delay: Duration::from_millis(1000),
            generate_delay: Duration::from_millis(2000),
            typing_debounce: Duration::from_millis(1000),
            refresh_delay: Duration::from_millis(600),
        }
    }

    /// Millisecond-scale cadence for tests and demos.
    #[must_use]
    pub const fn fast() -> Self {
        Self {
            evaluation_tick: Duration::from_millis(5),
            loader_tick: Duration::from_millis(2),
            reveal_tick: Duration::from_millis(2),
            completion_delay: Duration::from_millis(5),
            generate_delay: Duration::from_millis(5),
            typing_debounce: Duration::from_millis(5),
            refresh_delay: Duration::from_millis(5),
        }
    }

    #[must_use]
    pub const fn evaluation_tick(&self) -> Duration {
        self.evaluation_tick
    }

    #[must_use]
    pub const fn loader_tick(&self) -> Duration {
        self.loader_tick
    }

    #[must_use]
    pub const fn reveal_tick(&self) -> Duration {
        self.reveal_tick
    }

    #[must_use]
    pub const fn completion_delay(&self) -> Duration {
        self.completion_delay
    }

    #[must_use]
    pub const fn generate_delay(&self) -> Duration {
        self.generate_delay
    }

    #[must_use]
    pub const fn typing_debounce(&self) -> Duration {
        self.typing_debounce
    }

    #[must_use]
    pub const fn refresh_delay(&self) -> Duration {
        self.refresh_delay
    }
}

impl Default for TimerProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_driver_is_idle_and_all_pending() {
        let driver = ProgressDriver::new(20);
        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(driver.cursor(), 0);
        for index in 0..20 {
            assert_eq!(driver.status_of(index), StepStatus::Pending);
        }
    }

    #[test]
    fn tick_before_start_is_noop() {
        let mut driver = ProgressDriver::new(3);
        assert_eq!(driver.tick(), TickOutcome::Noop);
        assert_eq!(driver.cursor(), 0);
    }

    #[test]
    fn run_finishes_exactly_once() {
        let mut driver = ProgressDriver::new(20);
        driver.start();

        let mut finishes = 0;
        for _ in 0..25 {
            if driver.tick() == TickOutcome::Finished {
                finishes += 1;
            }
        }

        assert_eq!(finishes, 1);
        assert!(driver.is_complete());
        assert_eq!(driver.cursor(), 20);
    }

    #[test]
    fn mid_run_statuses_partition_the_sequence() {
        // Five ticks into a 20-step run: 0..5 completed, 5 active, rest pending.
        let mut driver = ProgressDriver::new(20);
        driver.start();
        for _ in 0..5 {
            driver.tick();
        }

        assert_eq!(driver.cursor(), 5);
        let mut active = 0;
        for index in 0..20 {
            match driver.status_of(index) {
                StepStatus::Completed => assert!(index < 5),
                StepStatus::Active => {
                    assert_eq!(index, 5);
                    active += 1;
                }
                StepStatus::Pending => assert!(index > 5),
            }
        }
        assert_eq!(active, 1);
    }

    #[test]
    fn completion_marks_every_step_completed() {
        let mut driver = ProgressDriver::new(4);
        driver.start();
        while driver.tick() != TickOutcome::Finished {}

        for index in 0..4 {
            assert_eq!(driver.status_of(index), StepStatus::Completed);
        }
    }

    #[test]
    fn restart_resets_cursor_and_statuses() {
        let mut driver = ProgressDriver::new(10);
        driver.start();
        for _ in 0..3 {
            driver.tick();
        }
        assert_eq!(driver.cursor(), 3);

        driver.start();
        assert_eq!(driver.cursor(), 0);
        assert_eq!(driver.status_of(0), StepStatus::Active);
        for index in 1..10 {
            assert_eq!(driver.status_of(index), StepStatus::Pending);
        }
    }

    #[test]
    fn restart_after_completion_runs_again() {
        let mut driver = ProgressDriver::new(2);
        driver.start();
        driver.tick();
        driver.tick();
        assert!(driver.is_complete());

        driver.start();
        assert!(driver.is_running());
        driver.tick();
        assert_eq!(driver.tick(), TickOutcome::Finished);
    }

    #[test]
    fn single_step_run_finishes_on_first_tick() {
        let mut driver = ProgressDriver::new(1);
        driver.start();
        assert_eq!(driver.tick(), TickOutcome::Finished);
    }

    #[test]
    fn empty_run_finishes_immediately() {
        // No catalog produces a zero-length sequence; the driver still
        // terminates instead of ticking forever.
        let mut driver = ProgressDriver::new(0);
        driver.start();
        assert_eq!(driver.tick(), TickOutcome::Finished);
        assert_eq!(driver.percent(), 100);
    }

    #[test]
    fn percent_tracks_cursor_in_five_point_steps() {
        let mut driver = ProgressDriver::new(20);
        driver.start();
        assert_eq!(driver.percent(), 0);
        for expected in 1_u8..=19 {
            driver.tick();
            assert_eq!(driver.percent(), expected * 5);
        }
        driver.tick();
        assert_eq!(driver.percent(), 100);
    }
}

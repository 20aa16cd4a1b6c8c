//! Bounded counter.
//!
//! `CounterState` is an immutable snapshot; [`CounterState::reduce`] turns a
//! snapshot and an action into the next snapshot. Everything a screen needs
//! (display text, notices, disabled controls) is derived from a snapshot via
//! [`CounterView`]. [`CounterStore`] holds the current snapshot of one session
//! and publishes changes to subscribers.

use crate::utils::error::Result;
use crate::utils::validation::validate_bounds;
use tokio::sync::watch;

pub const MIN_REACHED_NOTICE: &str = "Minimum limit reached.";
pub const MAX_REACHED_NOTICE: &str = "Maximum limit reached.";

/// Construction parameters. Missing values fall back to `0`, `0` and unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterOptions {
    pub initial_value: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

impl CounterOptions {
    pub fn with_initial_value(mut self, value: i64) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn with_min_value(mut self, value: i64) -> Self {
        self.min_value = Some(value);
        self
    }

    pub fn with_max_value(mut self, value: i64) -> Self {
        self.max_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    value: i64,
    initial: i64,
    min: i64,
    max: i64,
}

impl CounterState {
    /// Fails when `min > max`. An out-of-range initial value is clamped, and the
    /// clamped value is what `Reset` returns to.
    pub fn new(options: CounterOptions) -> Result<Self> {
        let min = options.min_value.unwrap_or(0);
        let max = options.max_value.unwrap_or(i64::MAX);
        validate_bounds("counter.min_value..counter.max_value", min, max)?;

        let requested = options.initial_value.unwrap_or(0);
        let initial = requested.clamp(min, max);
        if initial != requested {
            tracing::debug!(
                "Counter initial value {} clamped to {} (range {}..={})",
                requested,
                initial,
                min,
                max
            );
        }

        Ok(Self {
            value: initial,
            initial,
            min,
            max,
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn initial(&self) -> i64 {
        self.initial
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn at_min(&self) -> bool {
        self.value == self.min
    }

    pub fn at_max(&self) -> bool {
        self.value == self.max
    }

    pub fn reduce(&self, action: CounterAction) -> Self {
        let value = match action {
            CounterAction::Increment if self.at_max() => self.value,
            CounterAction::Increment => self.value + 1,
            CounterAction::Decrement if self.at_min() => self.value,
            CounterAction::Decrement => self.value - 1,
            CounterAction::Reset => self.initial,
        };

        tracing::debug!("Counter {:?}: {} -> {}", action, self.value, value);

        Self { value, ..*self }
    }

    pub fn view(&self) -> CounterView {
        CounterView::from(self)
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            value: 0,
            initial: 0,
            min: 0,
            max: i64::MAX,
        }
    }
}

/// What the counter widget shows for a given snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub display: String,
    pub min_notice: Option<&'static str>,
    pub max_notice: Option<&'static str>,
    pub increment_disabled: bool,
    pub decrement_disabled: bool,
}

impl From<&CounterState> for CounterView {
    fn from(state: &CounterState) -> Self {
        Self {
            display: state.value.to_string(),
            min_notice: state.at_min().then_some(MIN_REACHED_NOTICE),
            max_notice: state.at_max().then_some(MAX_REACHED_NOTICE),
            increment_disabled: state.at_max(),
            decrement_disabled: state.at_min(),
        }
    }
}

/// Current snapshot of one counter session.
///
/// Subscribers are only woken when an action actually changes the value.
#[derive(Debug)]
pub struct CounterStore {
    tx: watch::Sender<CounterState>,
}

impl CounterStore {
    pub fn new(state: CounterState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    pub fn with_options(options: CounterOptions) -> Result<Self> {
        Ok(Self::new(CounterState::new(options)?))
    }

    pub fn send(&self, action: CounterAction) -> CounterView {
        self.tx.send_if_modified(|state| {
            let next = state.reduce(action);
            let changed = next != *state;
            *state = next;
            changed
        });
        self.view()
    }

    pub fn state(&self) -> CounterState {
        *self.tx.borrow()
    }

    pub fn view(&self) -> CounterView {
        self.tx.borrow().view()
    }

    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.tx.subscribe()
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new(CounterState::default())
    }
}

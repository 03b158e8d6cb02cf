//! Hold timer driver
//!
//! Owns the single timer a card instance is allowed. The timer is aborted on
//! every pointer-up, pointer-leave, and new pointer-down, so two timers can
//! never overlap.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use super::{transition, GestureAction, GestureInput, HoldState};

/// Receiver for gesture outcomes.
#[async_trait]
pub trait GestureSink: Send + Sync {
    async fn on_gesture(&self, action: GestureAction);
}

/// Timing state machine driver for one card instance.
pub struct HoldGesture {
    state: Arc<Mutex<HoldState>>,
    sink: Arc<dyn GestureSink>,
    timer: Option<JoinHandle<()>>,
}

impl HoldGesture {
    #[must_use]
    pub fn new(sink: Arc<dyn GestureSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(HoldState::Idle)),
            sink,
            timer: None,
        }
    }

    /// Pointer pressed: restart the cycle and arm the hold timer.
    pub async fn pointer_down(&mut self, hold_duration: Duration) {
        self.cancel_timer();
        Self::apply(&self.state, &self.sink, GestureInput::PressStart).await;

        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        // Fix the deadline now so the countdown starts at the press, not at
        // the timer task's first poll.
        let deadline = Instant::now() + hold_duration;
        self.timer = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            Self::apply(&state, &sink, GestureInput::TimerElapsed).await;
        }));
    }

    /// Pointer released: a tap if the timer had not yet elapsed.
    pub async fn pointer_up(&mut self) {
        self.cancel_timer();
        Self::apply(&self.state, &self.sink, GestureInput::Release).await;
    }

    /// Pointer left the widget: cancel without firing anything.
    pub async fn pointer_leave(&mut self) {
        self.cancel_timer();
        Self::apply(&self.state, &self.sink, GestureInput::PointerLeave).await;
    }

    /// Current machine state, for diagnostics.
    pub async fn state(&self) -> HoldState {
        *self.state.lock().await
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    async fn apply(state: &Mutex<HoldState>, sink: &Arc<dyn GestureSink>, input: GestureInput) {
        let action = {
            let mut guard = state.lock().await;
            let (next, action) = transition(*guard, input);
            *guard = next;
            action
        };
        if let Some(action) = action {
            sink.on_gesture(action).await;
        }
    }
}

impl Drop for HoldGesture {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

impl std::fmt::Debug for HoldGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoldGesture")
            .field("timer_armed", &self.timer.is_some())
            .finish_non_exhaustive()
    }
}

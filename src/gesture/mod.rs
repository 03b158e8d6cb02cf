//! Hold gesture
//!
//! Distinguishes a quick tap (toggle) from a sustained press (detail view).
//! The machine has three states and pure transitions; the timer itself lives
//! in [`driver`].

pub mod driver;

pub use driver::{GestureSink, HoldGesture};

/// Current position in the press-and-hold cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoldState {
    /// No pointer down.
    #[default]
    Idle,
    /// Pointer down, timer armed, not yet elapsed.
    Pending,
    /// Timer elapsed while the pointer stayed down.
    Held,
}

/// Events fed into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureInput {
    PressStart,
    TimerElapsed,
    Release,
    PointerLeave,
}

/// Outcome a transition asks the card to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    /// Quick tap: toggle the entity.
    Activate,
    /// Sustained press: show the detail view.
    RequestDetail,
}

/// Pure transition function.
///
/// A release in `Pending` is a tap; the elapsed timer fires the detail
/// request and moves to `Held`, which swallows the following release.
/// Pointer-leave cancels without firing either action, and a new press
/// always restarts the cycle.
#[must_use]
pub const fn transition(state: HoldState, input: GestureInput) -> (HoldState, Option<GestureAction>) {
    match (state, input) {
        (_, GestureInput::PressStart) => (HoldState::Pending, None),
        (HoldState::Pending, GestureInput::TimerElapsed) => {
            (HoldState::Held, Some(GestureAction::RequestDetail))
        }
        (HoldState::Pending, GestureInput::Release) => {
            (HoldState::Idle, Some(GestureAction::Activate))
        }
        (_, GestureInput::Release | GestureInput::PointerLeave) => (HoldState::Idle, None),
        // A timer that fires after cancellation is stale
        (state, GestureInput::TimerElapsed) => (state, None),
    }
}

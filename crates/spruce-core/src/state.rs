use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// What the user asked the particles to be.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MorphState {
    #[default]
    Scattered = 0,
    TreeShape = 1,
}

impl MorphState {
    /// Progress value this state pulls toward.
    pub fn target(self) -> f32 {
        match self {
            MorphState::Scattered => 0.0,
            MorphState::TreeShape => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MorphState::Scattered => MorphState::TreeShape,
            MorphState::TreeShape => MorphState::Scattered,
        }
    }

    /// Label for the control that flips this state.
    pub fn action_label(self) -> &'static str {
        match self {
            MorphState::Scattered => "Assemble",
            MorphState::TreeShape => "Disassemble",
        }
    }

    fn from_u8(raw: u8) -> Self {
        if raw == MorphState::TreeShape as u8 {
            MorphState::TreeShape
        } else {
            MorphState::Scattered
        }
    }
}

/// Shared handle to the requested state.
///
/// Input writes it whenever it likes; the engine takes one [`snapshot`]
/// per tick so every entity in a frame sees the same target.
///
/// [`snapshot`]: MorphSignal::snapshot
#[derive(Clone, Debug, Default)]
pub struct MorphSignal {
    state: Arc<AtomicU8>,
}

impl MorphSignal {
    pub fn new(initial: MorphState) -> Self {
        Self {
            state: Arc::new(AtomicU8::new(initial as u8)),
        }
    }

    pub fn set(&self, state: MorphState) {
        self.state.store(state as u8, Ordering::Release);
    }

    /// Flip the state and return the new value.
    pub fn toggle(&self) -> MorphState {
        let previous = self.state.fetch_xor(1, Ordering::AcqRel);
        MorphState::from_u8(previous).toggled()
    }

    pub fn snapshot(&self) -> MorphState {
        MorphState::from_u8(self.state.load(Ordering::Acquire))
    }
}

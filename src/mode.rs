use crate::error::SessionError;
use crate::nav::NavState;

/// Operating mode of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeState {
    #[default]
    Standard,
    Kids,
}

/// Visibility of the leave-kids-mode passcode prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasscodePrompt {
    #[default]
    Hidden,
    Shown,
}

/// External side effects applied around the kids-mode boundary, e.g.
/// OS-level restrictions. The engine invokes these; it never implements them.
pub trait ModeGate {
    fn enter_restricted(&mut self) -> anyhow::Result<()>;
    fn exit_restricted(&mut self) -> anyhow::Result<()>;
}

/// Standard/Kids state machine.
///
/// The mode only flips after the corresponding gate call succeeds, so
/// `is_kids_mode` never reports a mode whose side effects did not apply.
/// Leaving kids mode is additionally gated behind the credential prompt:
/// the switch request only opens the prompt, and the outcome callbacks
/// drive the rest of the transition.
#[derive(Debug, Default)]
pub struct ModeMachine {
    mode: ModeState,
    prompt: PasscodePrompt,
}

impl ModeMachine {
    pub fn mode(&self) -> ModeState {
        self.mode
    }

    pub fn is_kids_mode(&self) -> bool {
        self.mode == ModeState::Kids
    }

    pub fn prompt(&self) -> PasscodePrompt {
        self.prompt
    }

    pub fn prompt_shown(&self) -> bool {
        self.prompt == PasscodePrompt::Shown
    }

    /// Handle the mode-switch request. In standard mode this engages kids
    /// mode directly; in kids mode it only opens the passcode prompt.
    pub fn request_switch(
        &mut self,
        gate: &mut dyn ModeGate,
        nav: &mut NavState,
    ) -> Result<(), SessionError> {
        match self.mode {
            ModeState::Standard => self.enter_kids(gate, nav),
            ModeState::Kids => {
                self.prompt = PasscodePrompt::Shown;
                Ok(())
            }
        }
    }

    fn enter_kids(
        &mut self,
        gate: &mut dyn ModeGate,
        nav: &mut NavState,
    ) -> Result<(), SessionError> {
        gate.enter_restricted().map_err(|e| {
            tracing::warn!("entering kids mode failed: {e}");
            SessionError::ModeTransition(e)
        })?;
        self.mode = ModeState::Kids;
        // One-way cascade: engaging kids mode pins navigation to the
        // restricted tab. Navigation never drives mode.
        nav.force_restricted();
        tracing::debug!("kids mode engaged");
        Ok(())
    }

    /// The credential check succeeded: lift the restrictions and return to
    /// standard mode. If the gate fails the session stays in kids mode with
    /// the prompt hidden; retrying is an explicit user action.
    pub fn passcode_accepted(&mut self, gate: &mut dyn ModeGate) -> Result<(), SessionError> {
        if self.mode != ModeState::Kids {
            return Ok(());
        }
        self.prompt = PasscodePrompt::Hidden;
        gate.exit_restricted().map_err(|e| {
            tracing::warn!("leaving kids mode failed: {e}");
            SessionError::ModeTransition(e)
        })?;
        self.mode = ModeState::Standard;
        tracing::debug!("standard mode restored");
        Ok(())
    }

    /// The credential prompt was dismissed; kids mode stays engaged.
    pub fn passcode_cancelled(&mut self) {
        self.prompt = PasscodePrompt::Hidden;
    }
}

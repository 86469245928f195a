// src/host_lib/session.rs

use crate::host_lib::host_types::{CommandInputs, HostError, PatternHost};
use crate::host_lib::replay::{discard_bodies, replay_placements};
use crate::pattern_lib::SpiralPlacementGenerator;

#[derive(Clone, Debug)]
pub enum CommandEvent<B> {
    ExecutePreview(CommandInputs<B>),
    Execute(CommandInputs<B>),
    Destroy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Committed,
    Destroyed,
}

/// One run of the pattern command against a host. The session owns its event
/// handling for as long as it lives; dropping it discards any preview still
/// in the scene.
pub struct CommandSession<'h, H: PatternHost> {
    host: &'h mut H,
    preview: Vec<H::Body>,
    state: SessionState,
}

impl<'h, H: PatternHost> CommandSession<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        Self { host, preview: Vec::new(), state: SessionState::Open }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn preview_bodies(&self) -> &[H::Body] {
        &self.preview
    }

    /// Returns the bodies created by the event (empty for `Destroy`).
    pub fn handle(&mut self, event: CommandEvent<H::Body>) -> Result<Vec<H::Body>, HostError> {
        match event {
            CommandEvent::ExecutePreview(inputs) => self.preview(&inputs),
            CommandEvent::Execute(inputs) => self.execute(&inputs),
            CommandEvent::Destroy => self.destroy().map(|_| Vec::new()),
        }
    }

    pub fn preview(&mut self, inputs: &CommandInputs<H::Body>) -> Result<Vec<H::Body>, HostError> {
        self.ensure_open()?;
        self.discard_preview();
        let bodies = self.build(inputs)?;
        self.preview = bodies.clone();
        Ok(bodies)
    }

    pub fn execute(&mut self, inputs: &CommandInputs<H::Body>) -> Result<Vec<H::Body>, HostError> {
        self.ensure_open()?;
        self.discard_preview();
        let bodies = self.build(inputs)?;
        self.state = SessionState::Committed;
        log::info!("Committed spiral pattern of {} copies", bodies.len());
        Ok(bodies)
    }

    pub fn destroy(&mut self) -> Result<(), HostError> {
        if self.state == SessionState::Destroyed {
            return Err(HostError::SessionClosed);
        }
        self.discard_preview();
        self.state = SessionState::Destroyed;
        Ok(())
    }

    fn build(&mut self, inputs: &CommandInputs<H::Body>) -> Result<Vec<H::Body>, HostError> {
        let placements = SpiralPlacementGenerator::generate(&inputs.params);
        replay_placements(&mut *self.host, &inputs.source, &placements)
    }

    fn ensure_open(&self) -> Result<(), HostError> {
        match self.state {
            SessionState::Open => Ok(()),
            _ => Err(HostError::SessionClosed),
        }
    }

    fn discard_preview(&mut self) {
        if !self.preview.is_empty() {
            log::debug!("Discarding preview of {} copies", self.preview.len());
            let preview = std::mem::take(&mut self.preview);
            discard_bodies(&mut *self.host, &preview);
        }
    }
}

impl<'h, H: PatternHost> Drop for CommandSession<'h, H> {
    fn drop(&mut self) {
        self.discard_preview();
    }
}

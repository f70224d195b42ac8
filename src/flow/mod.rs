//! Forward-only phase state machine.
//!
//! Generic over a phase type and a caller-owned context: transitions are
//! declared in a table, each target phase may carry a guard predicate over
//! the context, and a `next` map supports linear advancement. Used for the
//! writing-assistant flow (`WritingPhase`) but independent of it.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// Why a transition was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("transition not allowed")]
    TransitionNotAllowed,

    #[error("guard denied transition: {reason}")]
    GuardDenied { reason: String },

    #[error("no next phase defined")]
    NextNotDefined,
}

type Guard<C> = Box<dyn Fn(&C) -> Result<(), String> + Send + Sync>;

/// Declarative description of a flow: allowed transitions, per-target
/// guards and the linear `next` chain.
pub struct FlowSpec<P, C> {
    transitions: HashMap<P, Vec<P>>,
    guards: HashMap<P, Guard<C>>,
    next: HashMap<P, P>,
}

impl<P: Copy + Eq + Hash, C> FlowSpec<P, C> {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
            guards: HashMap::new(),
            next: HashMap::new(),
        }
    }

    /// Allow `from -> to`.
    pub fn allow(mut self, from: P, to: P) -> Self {
        self.transitions.entry(from).or_default().push(to);
        self
    }

    /// Allow `from -> to` and make it the linear next step from `from`.
    pub fn step(mut self, from: P, to: P) -> Self {
        self.next.insert(from, to);
        self.allow(from, to)
    }

    /// Guard entry into `to`. The guard returns the denial reason.
    pub fn guard(
        mut self,
        to: P,
        predicate: impl Fn(&C) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.guards.insert(to, Box::new(predicate));
        self
    }
}

impl<P: Copy + Eq + Hash, C> Default for FlowSpec<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A flow instance: current phase plus its spec.
pub struct FlowState<P, C> {
    spec: FlowSpec<P, C>,
    phase: P,
}

impl<P: Copy + Eq + Hash, C> FlowState<P, C> {
    pub fn new(spec: FlowSpec<P, C>, initial: P) -> Self {
        Self {
            spec,
            phase: initial,
        }
    }

    pub fn phase(&self) -> P {
        self.phase
    }

    /// Check whether `to` is reachable from the current phase under `ctx`.
    pub fn can_transition(&self, to: P, ctx: &C) -> Result<(), FlowError> {
        let allowed = self
            .spec
            .transitions
            .get(&self.phase)
            .is_some_and(|targets| targets.contains(&to));
        if !allowed {
            return Err(FlowError::TransitionNotAllowed);
        }
        if let Some(guard) = self.spec.guards.get(&to) {
            guard(ctx).map_err(|reason| FlowError::GuardDenied { reason })?;
        }
        Ok(())
    }

    /// Move to `to` if the transition table and guard permit it.
    pub fn transition(&mut self, to: P, ctx: &C) -> Result<(), FlowError> {
        self.can_transition(to, ctx)?;
        self.phase = to;
        Ok(())
    }

    /// Check the linear next step.
    pub fn can_next(&self, ctx: &C) -> Result<(), FlowError> {
        let next = self
            .spec
            .next
            .get(&self.phase)
            .ok_or(FlowError::NextNotDefined)?;
        self.can_transition(*next, ctx)
    }

    /// Advance along the linear chain.
    pub fn next(&mut self, ctx: &C) -> Result<(), FlowError> {
        let next = *self
            .spec
            .next
            .get(&self.phase)
            .ok_or(FlowError::NextNotDefined)?;
        self.transition(next, ctx)
    }
}

/// Phases of the agent-guided writing flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WritingPhase {
    Type,
    Layout,
    Interview,
    Refine,
    Draft,
}

/// Context the writing-flow guards inspect.
#[derive(Debug, Default)]
pub struct WritingProject {
    /// Chosen blog type, required before layout
    pub blog_type: Option<String>,
    /// Section titles produced by the layout step
    pub sections: Vec<String>,
}

/// The writing flow: strictly forward, `Draft` terminal.
pub fn writing_flow() -> FlowState<WritingPhase, WritingProject> {
    let spec = FlowSpec::new()
        .step(WritingPhase::Type, WritingPhase::Layout)
        .step(WritingPhase::Layout, WritingPhase::Interview)
        .step(WritingPhase::Interview, WritingPhase::Refine)
        .step(WritingPhase::Refine, WritingPhase::Draft)
        .guard(WritingPhase::Layout, |project: &WritingProject| {
            if project.blog_type.is_some() {
                Ok(())
            } else {
                Err("type-required".to_string())
            }
        })
        .guard(WritingPhase::Interview, |project: &WritingProject| {
            if project.sections.is_empty() {
                Err("layout-required".to_string())
            } else {
                Ok(())
            }
        });
    FlowState::new(spec, WritingPhase::Type)
}

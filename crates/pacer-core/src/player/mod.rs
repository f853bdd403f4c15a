//! Active session player.
//!
//! The [`Player`] owns one compiled queue at a time and moves a single cursor
//! through it:
//!
//! ```text
//!            start                    cursor past end
//!   Idle ─────────────▶ Active ─────────────────────▶ Completed
//!    ▲                    │  ▲                            │
//!    │      abort         │  │ tick / complete_step /     │ start
//!    └────────────────────┘  │ skip / toggle_pause        │
//!                            └────────────────────────────┘
//! ```
//!
//! Every transition returns a [`PlayerEvent`]; calls that are not valid in
//! the current state return [`PlayerEvent::Ignored`] and change nothing. The
//! player does no I/O: a finished session is handed to a
//! [`CompletionSink`] supplied by the caller, and driving [`Player::tick`]
//! once per second is the caller's job.

use jiff::Timestamp;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::{PacerError, Result},
    models::{
        estimate_calories, CompletedExercise, LoggedSet, SessionStep, WorkStep, WorkoutSession,
        WorkoutSummary,
    },
    queue,
};

#[cfg(test)]
mod tests;

/// Lifecycle state of the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// No session loaded
    #[default]
    Idle,

    /// A session is running, one step is current
    Active,

    /// Every step was consumed or the session was finished
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}

/// Outcome of a player transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A session was loaded with this many steps
    Started { steps: usize },

    /// The clock advanced; `remaining` is the current countdown
    Ticked { remaining: u32 },

    /// The cursor moved to `index`
    Advanced { index: usize },

    /// The cursor moved past the last step
    Completed,

    Paused,
    Resumed,

    /// The session was discarded without recording anything
    Aborted,

    /// The call was not valid in the current state
    Ignored,
}

/// Receives the summary of a finished session.
pub trait CompletionSink {
    /// Stores or forwards one completed workout.
    fn record(&mut self, summary: &WorkoutSummary) -> Result<()>;
}

impl CompletionSink for Vec<WorkoutSummary> {
    fn record(&mut self, summary: &WorkoutSummary) -> Result<()> {
        self.push(summary.clone());
        Ok(())
    }
}

/// Single-cursor playback state machine over a compiled queue.
#[derive(Debug, Default)]
pub struct Player {
    status: SessionStatus,
    session: Option<WorkoutSession>,
    queue: Vec<SessionStep>,
    current_index: usize,
    countdown: u32,
    paused: bool,
    elapsed_seconds: u64,
    log: Vec<CompletedExercise>,
    recorded: bool,
}

impl Player {
    /// Creates an idle player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `session` and makes its first step current.
    ///
    /// # Errors
    ///
    /// * `PacerError::SessionInProgress` - another session is active
    /// * `PacerError::EmptySession` - the session compiles to no steps; the
    ///   player stays in its current state
    pub fn start(&mut self, session: WorkoutSession) -> Result<PlayerEvent> {
        if self.status == SessionStatus::Active {
            return Err(PacerError::SessionInProgress);
        }

        let queue = queue::compile(&session);
        let Some(first) = queue.first() else {
            return Err(PacerError::EmptySession {
                title: session.title,
            });
        };

        let countdown = first.initial_countdown();
        let steps = queue.len();
        info!("Starting session '{}' with {steps} steps", session.title);

        *self = Self {
            status: SessionStatus::Active,
            countdown,
            session: Some(session),
            queue,
            ..Self::default()
        };

        Ok(PlayerEvent::Started { steps })
    }

    /// Advances the session clock by one second.
    ///
    /// Timer-driven steps count down and complete themselves when the
    /// countdown reaches zero; rep-based steps keep their countdown.
    pub fn tick(&mut self) -> PlayerEvent {
        if self.status != SessionStatus::Active || self.paused {
            return PlayerEvent::Ignored;
        }

        self.elapsed_seconds += 1;

        let timed = match self.current_step() {
            Some(step) => step.is_timed(),
            None => return self.mark_completed(),
        };

        if !timed {
            return PlayerEvent::Ticked {
                remaining: self.countdown,
            };
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            debug!("Timer expired on step {}", self.current_index);
            self.complete_step()
        } else {
            PlayerEvent::Ticked {
                remaining: self.countdown,
            }
        }
    }

    /// Completes the current step and moves to the next one.
    ///
    /// A completed work step is added to the set log.
    pub fn complete_step(&mut self) -> PlayerEvent {
        if self.status != SessionStatus::Active {
            return PlayerEvent::Ignored;
        }

        if let Some(SessionStep::Work(step)) = self.queue.get(self.current_index) {
            let set = LoggedSet::from_step(step, Timestamp::now());
            log_set(&mut self.log, step, set);
        }

        self.current_index += 1;

        match self.queue.get(self.current_index) {
            Some(next) => {
                self.countdown = next.initial_countdown();
                self.paused = false;
                debug!("Advanced to step {}", self.current_index);
                PlayerEvent::Advanced {
                    index: self.current_index,
                }
            }
            None => self.mark_completed(),
        }
    }

    /// Advances immediately, whatever is left on the countdown.
    pub fn skip(&mut self) -> PlayerEvent {
        if self.status == SessionStatus::Active {
            debug!(
                "Skipping step {} with {}s left",
                self.current_index, self.countdown
            );
        }
        self.complete_step()
    }

    /// Pauses or resumes the countdown.
    pub fn toggle_pause(&mut self) -> PlayerEvent {
        if self.status != SessionStatus::Active {
            return PlayerEvent::Ignored;
        }

        self.paused = !self.paused;
        if self.paused {
            PlayerEvent::Paused
        } else {
            PlayerEvent::Resumed
        }
    }

    /// Discards the running session and returns to idle.
    pub fn abort(&mut self) -> PlayerEvent {
        if self.status != SessionStatus::Active {
            return PlayerEvent::Ignored;
        }

        if let Some(session) = &self.session {
            info!(
                "Aborting session '{}' at step {}",
                session.title, self.current_index
            );
        }
        *self = Self::default();
        PlayerEvent::Aborted
    }

    /// Ends the session from outside the timer loop.
    ///
    /// With `completed = true` in the active or completed state, the summary
    /// is handed to `sink` once and the player is left completed; the summary
    /// is returned. With `completed = false` this is [`Player::abort`].
    ///
    /// # Errors
    ///
    /// Propagates the sink's error; the player keeps its state so the call
    /// can be retried.
    pub fn finish(
        &mut self,
        completed: bool,
        sink: &mut dyn CompletionSink,
    ) -> Result<Option<WorkoutSummary>> {
        if !completed {
            self.abort();
            return Ok(None);
        }

        if self.status == SessionStatus::Idle || self.recorded {
            return Ok(None);
        }

        let summary = self.summary(Timestamp::now());
        sink.record(&summary)?;

        info!(
            "Recorded '{}': {} sets in {}s",
            summary.title,
            summary.sets_completed(),
            summary.duration_seconds
        );

        self.recorded = true;
        self.status = SessionStatus::Completed;
        self.countdown = 0;
        self.paused = false;
        Ok(Some(summary))
    }

    /// Builds the summary of the work done so far.
    pub fn summary(&self, completed_at: Timestamp) -> WorkoutSummary {
        let (session_id, title) = self
            .session
            .as_ref()
            .map(|s| (s.id.clone(), s.title.clone()))
            .unwrap_or_default();

        let done = self.current_index.min(self.queue.len());
        let active_seconds: u64 = self.queue[..done]
            .iter()
            .filter_map(SessionStep::as_work)
            .map(|step| u64::from(step.target.estimated_seconds()))
            .sum();

        WorkoutSummary {
            session_id,
            title,
            completed_at,
            duration_seconds: self.elapsed_seconds,
            exercises: self.log.clone(),
            estimated_calories: estimate_calories(active_seconds),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds left on the current step.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current step, or `None` once the cursor has passed the end.
    pub fn current_step(&self) -> Option<&SessionStep> {
        match self.status {
            SessionStatus::Active => self.queue.get(self.current_index),
            _ => None,
        }
    }

    pub fn queue(&self) -> &[SessionStep] {
        &self.queue
    }

    pub fn session(&self) -> Option<&WorkoutSession> {
        self.session.as_ref()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Sets logged so far, grouped by exercise in first-completion order.
    pub fn completed_exercises(&self) -> &[CompletedExercise] {
        &self.log
    }

    fn mark_completed(&mut self) -> PlayerEvent {
        self.status = SessionStatus::Completed;
        self.countdown = 0;
        self.paused = false;
        info!("Session complete after {}s", self.elapsed_seconds);
        PlayerEvent::Completed
    }
}

fn log_set(log: &mut Vec<CompletedExercise>, step: &WorkStep, set: LoggedSet) {
    // Ids alone can repeat across exercises; the name tells them apart.
    match log.iter_mut().find(|entry| {
        entry.exercise_id == step.exercise.id && entry.name == step.exercise.name
    }) {
        Some(entry) => entry.sets.push(set),
        None => log.push(CompletedExercise {
            exercise_id: step.exercise.id.clone(),
            name: step.exercise.name.clone(),
            sets: vec![set],
        }),
    }
}

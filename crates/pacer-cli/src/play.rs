//! Interactive playback loop
//!
//! Drives a [`Player`] from two sources: a `tokio` interval that stands in
//! for the session clock, and commands typed on stdin. When the session
//! completes, its summary is stored in the journal.
//!
//! Stdin is read on a plain OS thread and forwarded over a channel. A read
//! left pending when the session ends then dies with the process instead of
//! holding up runtime shutdown.

use std::{
    io::{self, BufRead},
    str::FromStr,
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use pacer_core::{
    display::{Clock, OperationStatus},
    Journal, Player, PlayerEvent, SessionStatus, WorkoutSession, WorkoutSummary,
};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedReceiver},
    time::{interval, MissedTickBehavior},
};

use crate::renderer::TerminalRenderer;

/// How the playback loop is clocked.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackOptions {
    /// Wall-clock length of one session second
    pub tick: Duration,
    /// Complete rep-based steps on the next tick instead of waiting for input
    pub auto_reps: bool,
}

/// A line typed during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Complete,
    Skip,
    TogglePause,
    Finish,
    Abort,
}

impl FromStr for PlayerCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "n" | "next" | "done" => Ok(PlayerCommand::Complete),
            "s" | "skip" => Ok(PlayerCommand::Skip),
            "p" | "pause" | "resume" => Ok(PlayerCommand::TogglePause),
            "f" | "finish" => Ok(PlayerCommand::Finish),
            "q" | "quit" | "abort" => Ok(PlayerCommand::Abort),
            other => Err(format!(
                "Unknown command '{other}' (enter/n: done, s: skip, p: pause, f: finish, q: quit)"
            )),
        }
    }
}

/// Plays `session` to the end and records it unless aborted.
pub async fn run(
    session: WorkoutSession,
    journal: &Journal,
    renderer: &TerminalRenderer,
    options: PlaybackOptions,
) -> Result<()> {
    let title = session.title.clone();
    let mut player = Player::new();
    let event = player
        .start(session)
        .with_context(|| format!("Failed to start '{title}'"))?;

    renderer.render(&format!("# {title}\n\n{}", OperationStatus::from(event)))?;
    show_current(&player, renderer)?;

    let mut finished: Vec<WorkoutSummary> = Vec::new();
    let mut lines = spawn_input_thread();
    let mut stdin_open = true;
    let mut auto_reps = options.auto_reps;

    let mut clock = interval(options.tick);
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    clock.tick().await;

    while player.status() == SessionStatus::Active {
        let event = tokio::select! {
            _ = clock.tick() => {
                let rep_step = player.current_step().is_some_and(|step| !step.is_timed());
                if auto_reps && rep_step && !player.is_paused() {
                    player.complete_step()
                } else {
                    player.tick()
                }
            }
            line = lines.recv(), if stdin_open => {
                match line.transpose().context("Failed to read from stdin")? {
                    Some(line) => match line.parse::<PlayerCommand>() {
                        Ok(PlayerCommand::Complete) => player.complete_step(),
                        Ok(PlayerCommand::Skip) => player.skip(),
                        Ok(PlayerCommand::TogglePause) => player.toggle_pause(),
                        Ok(PlayerCommand::Finish) => {
                            player
                                .finish(true, &mut finished)
                                .context("Failed to finish session")?;
                            PlayerEvent::Completed
                        }
                        Ok(PlayerCommand::Abort) => player.abort(),
                        Err(message) => {
                            renderer.render(&OperationStatus::failure(message).to_string())?;
                            PlayerEvent::Ignored
                        }
                    },
                    None => {
                        debug!("stdin closed");
                        stdin_open = false;
                        if !auto_reps {
                            info!("Input closed, completing rep steps automatically");
                            auto_reps = true;
                        }
                        PlayerEvent::Ignored
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, aborting session");
                player.abort()
            }
        };

        report(&player, event, renderer)?;
    }

    if player.status() == SessionStatus::Completed && finished.is_empty() {
        player
            .finish(true, &mut finished)
            .context("Failed to finish session")?;
    }

    for summary in &finished {
        let result = journal
            .record_workout_result(summary)
            .await
            .context("Failed to record workout")?;
        renderer.render(&format!("\n{result}"))?;
    }

    Ok(())
}

/// Forwards stdin lines until end of input or a read error.
///
/// The thread is detached and never joined.
fn spawn_input_thread() -> UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = unbounded_channel();

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });

    rx
}

fn report(player: &Player, event: PlayerEvent, renderer: &TerminalRenderer) -> Result<()> {
    match event {
        PlayerEvent::Advanced { .. } => show_current(player, renderer),
        PlayerEvent::Ticked { remaining } => {
            let timed = player.current_step().is_some_and(|step| step.is_timed());
            if timed && (remaining <= 3 || remaining % 10 == 0) {
                renderer.render(&format!("{}\n", Clock(remaining)))?;
            }
            Ok(())
        }
        PlayerEvent::Ignored => Ok(()),
        event => renderer.render(&OperationStatus::from(event).to_string()),
    }
}

fn show_current(player: &Player, renderer: &TerminalRenderer) -> Result<()> {
    let Some(step) = player.current_step() else {
        return Ok(());
    };

    let position = format!("{}/{}", player.current_index() + 1, player.queue().len());
    let countdown = if step.is_timed() {
        Clock(player.countdown()).to_string()
    } else {
        format!("~{}, press enter when done", Clock(player.countdown()))
    };

    renderer.render(&format!("\n## Step {position}\n\n{step}\n\n{countdown}\n"))
}

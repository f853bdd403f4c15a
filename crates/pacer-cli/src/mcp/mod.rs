//! MCP server implementation for Pacer
//!
//! Exposes session compilation and the workout journal over the Model
//! Context Protocol so AI assistants can inspect sessions, history and
//! personal records. Playback stays in the terminal.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use pacer_core::Journal;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{CompileSession, Id, ListHistory, McpResult, ShowRecord};

/// MCP server for Pacer
#[derive(Clone)]
pub struct PacerMcpServer {
    journal: Arc<Journal>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PacerMcpServer {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal: Arc::new(journal),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.journal.clone())
    }

    #[tool(
        name = "compile_session",
        description = "Compile a workout session JSON file into its ordered queue of work and rest steps. Takes the file path. Returns the session overview followed by the numbered step queue with targets, tempo and what comes next."
    )]
    async fn compile_session(&self, params: Parameters<CompileSession>) -> McpResult {
        self.handlers().compile_session(params).await
    }

    #[tool(
        name = "list_history",
        description = "List completed workouts, newest first. Optional limit caps the number returned. Each entry shows the workout ID, title, completion time, duration and sets."
    )]
    async fn list_history(&self, params: Parameters<ListHistory>) -> McpResult {
        self.handlers().list_history(params).await
    }

    #[tool(
        name = "show_workout",
        description = "Show one completed workout by ID, including every logged set with reps, weight or duration, and the estimated calories."
    )]
    async fn show_workout(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_workout(params).await
    }

    #[tool(
        name = "list_records",
        description = "List personal records for every weighted exercise: estimated one-rep max (Epley), best single-workout volume and when each was last improved."
    )]
    async fn list_records(&self) -> McpResult {
        self.handlers().list_records().await
    }

    #[tool(
        name = "show_record",
        description = "Show the personal record of one exercise by name (case-insensitive), with the history of every workout that contributed to it."
    )]
    async fn show_record(&self, params: Parameters<ShowRecord>) -> McpResult {
        self.handlers().show_record(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PacerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                r#"Pacer plays structured workout sessions in the terminal and keeps a journal of completed workouts and personal records.

## Core Concepts
- **Session**: a JSON file with blocks (warmup, strength, circuit, superset, cooldown, ...) of exercises
- **Queue**: the ordered work and rest steps a session compiles into; circuits and supersets interleave their exercises per round
- **Workout**: a completed session stored in the journal with every logged set
- **Personal record**: per exercise, the best estimated one-rep max and the best single-workout volume

## Typical Use
1. `compile_session` to check what a session file will play
2. `list_history` and `show_workout` to review past training
3. `list_records` or `show_record` to track progress on a lift"#
                    .to_string(),
            ),
        }
    }
}

/// Serves MCP over stdio until the client disconnects or a signal arrives.
pub async fn run_stdio_server(server: PacerMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Pacer MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

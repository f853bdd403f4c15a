//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use pacer_core::{
    display::{Queue, Records},
    params as core, queue, Journal, WorkoutSession,
};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes (de)serialization straight through to the
/// wrapped type, so the core parameter structs stay free of rmcp concerns
/// while the tool router still gets `Deserialize + JsonSchema`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CompileSession = McpParams<core::CompileSession>;
pub type ListHistory = McpParams<core::ListHistory>;
pub type ShowRecord = McpParams<core::ShowRecord>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    journal: Arc<Journal>,
}

impl McpHandlers {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self { journal }
    }

    pub async fn compile_session(
        &self,
        Parameters(params): Parameters<CompileSession>,
    ) -> McpResult {
        debug!("compile_session: {params:?}");

        let path = params.as_ref().path.clone();
        let session = tokio::task::spawn_blocking(move || WorkoutSession::load(path))
            .await
            .map_err(|e| ErrorData::internal_error(format!("Task join error: {e}"), None))?
            .map_err(|e| to_mcp_error("Failed to load session", &e))?;

        let steps = queue::compile(&session);
        text(format!("{session}\n## Queue\n\n{}", Queue(steps)))
    }

    pub async fn list_history(&self, Parameters(params): Parameters<ListHistory>) -> McpResult {
        debug!("list_history: {params:?}");

        let workouts = self
            .journal
            .history(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list workouts", &e))?;

        text(workouts)
    }

    pub async fn show_workout(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_workout: {params:?}");

        let workout = self
            .journal
            .show_workout(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show workout", &e))?;

        text(workout)
    }

    pub async fn list_records(&self) -> McpResult {
        debug!("list_records");

        let records: Records = self
            .journal
            .records()
            .await
            .map_err(|e| to_mcp_error("Failed to list records", &e))?;

        text(records)
    }

    pub async fn show_record(&self, Parameters(params): Parameters<ShowRecord>) -> McpResult {
        debug!("show_record: {params:?}");

        let record = self
            .journal
            .get_record(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to look up record", &e))?;

        match record {
            Some(record) => text(record),
            None => text(format!(
                "No personal record for '{}'",
                params.as_ref().exercise.trim()
            )),
        }
    }
}

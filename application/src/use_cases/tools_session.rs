//! Tools session use case.
//!
//! [`ToolsSession`] is what a tools screen talks to: it loads the catalog,
//! owns the [`FormController`] for the selected tool, turns a submit into a
//! [`PendingInvocation`] and keeps the outcomes that come back.
//!
//! # Flow
//!
//! ```text
//! list_tools ─▶ select_tool ─▶ update_field* ─▶ submit ─▶ PendingInvocation
//!                                                             │
//!                       InvokeToolUseCase::execute ◀──────────┘
//!                                   │
//!                 record_outcome ◀──┘ (keyed by the outcome's own tool name)
//! ```
//!
//! `submit` is synchronous and never suspends, so a new `select_tool` can
//! never interleave with coercion. Running the invocation is separate: the
//! caller may `await` it inline ([`ToolsSession::submit_and_run`]) or hand the
//! pending invocation to a background task and call
//! [`ToolsSession::record_outcome`] when it finishes.

use crate::config::{SessionConfig, UnknownFieldPolicy};
use crate::ports::invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger};
use crate::ports::progress::InvocationProgressNotifier;
use crate::ports::tool_catalog::{CatalogError, ToolCatalogPort};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::invoke_tool::{
    InvocationId, InvocationOutcome, InvokeToolUseCase, PendingInvocation,
};
use inspector_domain::{
    FieldView, FormController, FormError, SchemaResolver, SubmitError, ToolCatalog,
    ToolDescriptor,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by [`ToolsSession`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

pub struct ToolsSession {
    catalog_port: Arc<dyn ToolCatalogPort>,
    invoker: InvokeToolUseCase,
    invocation_logger: Arc<dyn InvocationLogger>,
    config: SessionConfig,

    catalog: ToolCatalog,
    next_cursor: Option<String>,
    form: FormController,

    last_id: u64,
    outcomes: HashMap<String, InvocationOutcome>,
    last_outcome_tool: Option<String>,
}

impl ToolsSession {
    pub fn new(
        catalog_port: Arc<dyn ToolCatalogPort>,
        executor: Arc<dyn ToolExecutorPort>,
    ) -> Self {
        Self {
            catalog_port,
            invoker: InvokeToolUseCase::new(executor),
            invocation_logger: Arc::new(NoInvocationLogger),
            config: SessionConfig::default(),
            catalog: ToolCatalog::new(),
            next_cursor: None,
            form: FormController::new(),
            last_id: 0,
            outcomes: HashMap::new(),
            last_outcome_tool: None,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a resolver with a customized boolean vocabulary. Any selected tool
    /// and its drafts are discarded.
    pub fn with_resolver(mut self, resolver: SchemaResolver) -> Self {
        self.form = FormController::with_resolver(resolver);
        self
    }

    pub fn with_invocation_logger(mut self, logger: Arc<dyn InvocationLogger>) -> Self {
        self.invoker = self.invoker.with_invocation_logger(logger.clone());
        self.invocation_logger = logger;
        self
    }

    // ==================== Catalog ====================

    /// Fetch the next catalog page (the first page if none is pending) and
    /// append it. Returns the number of tools received.
    pub async fn list_tools(&mut self) -> Result<usize, SessionError> {
        let page = self
            .catalog_port
            .list_tools(self.next_cursor.as_deref())
            .await?;
        let received = page.tools.len();
        self.catalog.extend(page.tools);
        self.next_cursor = page.next_cursor.filter(|c| !c.is_empty());
        debug!(
            "Loaded {} tools (total {}, more: {})",
            received,
            self.catalog.len(),
            self.next_cursor.is_some()
        );
        Ok(received)
    }

    /// Fetch pages until the catalog reports no further cursor, or until
    /// `max_pages` pages were fetched. Returns the catalog size.
    pub async fn list_all_tools(&mut self) -> Result<usize, SessionError> {
        let mut pages = 0;
        loop {
            self.list_tools().await?;
            pages += 1;
            if self.next_cursor.is_none() {
                break;
            }
            if pages >= self.config.max_pages {
                warn!(
                    "Stopped paging tool catalog after {} pages; more tools are available",
                    pages
                );
                break;
            }
        }
        Ok(self.catalog.len())
    }

    /// Forget all loaded tools and the pagination cursor.
    ///
    /// The selected tool and its drafts are left alone.
    pub fn clear_tools(&mut self) {
        self.catalog.clear();
        self.next_cursor = None;
    }

    pub fn tools(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Cursor of the next catalog page, if more tools are available
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    // ==================== Form ====================

    /// Select a tool from the loaded catalog by name.
    ///
    /// Returns `true` if the tool changed and all drafts were cleared.
    pub fn select_tool(&mut self, name: &str) -> Result<bool, SessionError> {
        let descriptor = self
            .catalog
            .get(name)
            .ok_or_else(|| SessionError::UnknownTool(name.to_string()))?;
        let reset = self.form.select_tool(descriptor);
        if reset {
            debug!("Selected tool '{}', drafts cleared", name);
        }
        Ok(reset)
    }

    /// Select a tool that is not (or not yet) part of the loaded catalog
    pub fn select_descriptor(&mut self, descriptor: &ToolDescriptor) -> bool {
        self.form.select_tool(descriptor)
    }

    pub fn selected_tool(&self) -> Option<&ToolDescriptor> {
        self.form.active_tool()
    }

    /// Route an edit to the form.
    ///
    /// Writes to undeclared parameters follow the configured
    /// [`UnknownFieldPolicy`]; they never reach the drafts.
    pub fn update_field(&mut self, name: &str, raw: impl Into<String>) -> Result<(), SessionError> {
        match self.form.update_field(name, raw) {
            Ok(()) => Ok(()),
            Err(FormError::UnknownParameter(e))
                if self.config.unknown_fields == UnknownFieldPolicy::Ignore =>
            {
                warn!("Ignoring write to undeclared parameter: {}", e);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn fields(&self) -> Vec<FieldView<'_>> {
        self.form.fields()
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Coerce the drafts of the selected tool into a pending invocation.
    ///
    /// On failure nothing is handed to the executor and every invalid
    /// parameter is reported at once.
    pub fn submit(&mut self) -> Result<PendingInvocation, SessionError> {
        match self.form.submit() {
            Ok(submission) => {
                self.last_id += 1;
                let pending = PendingInvocation {
                    id: InvocationId(self.last_id),
                    tool_name: submission.tool_name,
                    arguments: submission.arguments,
                };
                info!(
                    "Submitted '{}' ({}) with {} argument(s)",
                    pending.tool_name,
                    pending.id,
                    pending.arguments.len()
                );
                self.invocation_logger.log(InvocationEvent::new(
                    "submission",
                    serde_json::json!({
                        "id": pending.id.0,
                        "tool": pending.tool_name,
                        "arguments": pending.arguments,
                    }),
                ));
                Ok(pending)
            }
            Err(e) => {
                if let SubmitError::Invalid { tool_name, errors } = &e {
                    warn!("Submission of '{}' rejected: {}", tool_name, e);
                    let failures: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|err| {
                            serde_json::json!({
                                "parameter": err.parameter,
                                "declared_type": err.declared_type,
                                "raw": err.raw,
                                "reason": err.reason.to_string(),
                            })
                        })
                        .collect();
                    self.invocation_logger.log(InvocationEvent::new(
                        "coercion_failed",
                        serde_json::json!({ "tool": tool_name, "errors": failures }),
                    ));
                }
                Err(e.into())
            }
        }
    }

    /// Handle on the invoker, for running pending invocations off the
    /// session (e.g. in a spawned task).
    pub fn invoker(&self) -> InvokeToolUseCase {
        self.invoker.clone()
    }

    /// Submit and run the invocation inline, recording its outcome.
    pub async fn submit_and_run(
        &mut self,
        progress: &dyn InvocationProgressNotifier,
    ) -> Result<InvocationOutcome, SessionError> {
        let pending = self.submit()?;
        let outcome = self.invoker.execute(pending, progress).await;
        self.record_outcome(outcome.clone());
        Ok(outcome)
    }

    // ==================== Results ====================

    /// Store an outcome under the tool it was issued for.
    ///
    /// An outcome older than one already stored for the same tool is
    /// dropped, so out-of-order completions cannot replace a newer result.
    pub fn record_outcome(&mut self, outcome: InvocationOutcome) {
        if self.form.active_tool_name() != Some(outcome.tool_name.as_str()) {
            debug!(
                "Result {} arrived for '{}' which is no longer selected",
                outcome.id, outcome.tool_name
            );
        }
        if let Some(existing) = self.outcomes.get(&outcome.tool_name)
            && existing.id > outcome.id
        {
            debug!("Dropping stale result {} for '{}'", outcome.id, outcome.tool_name);
            return;
        }
        self.last_outcome_tool = Some(outcome.tool_name.clone());
        self.outcomes.insert(outcome.tool_name.clone(), outcome);
    }

    pub fn result_for(&self, tool_name: &str) -> Option<&InvocationOutcome> {
        self.outcomes.get(tool_name)
    }

    /// Outcome for the currently selected tool
    pub fn active_result(&self) -> Option<&InvocationOutcome> {
        self.form
            .active_tool_name()
            .and_then(|name| self.outcomes.get(name))
    }

    /// Most recently recorded outcome, whichever tool it belongs to
    pub fn last_outcome(&self) -> Option<&InvocationOutcome> {
        self.last_outcome_tool
            .as_deref()
            .and_then(|name| self.outcomes.get(name))
    }
}

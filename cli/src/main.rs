//! CLI entrypoint for tool-inspector
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use inspector_application::{
    InvocationProgressNotifier, NoProgress, SessionConfig, SessionError, ToolsSession,
};
use inspector_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, JsonFileToolCatalog, JsonlInvocationLogger,
    McpToolConverter, Severity, build_executor,
};
use inspector_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormat, ProgressReporter, TuiApp, formatter_for,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref(), cli.tui)?;

    info!("Starting tool-inspector");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue),
            Severity::Error => error!("Config: {}", issue),
        }
    }
    if FileConfig::has_errors(&issues) {
        let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    let output = OutputConfig {
        format: match config.output.format {
            Some(FileOutputFormat::Json) => OutputFormat::Json,
            Some(FileOutputFormat::Text) | None => OutputFormat::Text,
        },
        color: config.output.color,
    };
    output.apply_color();
    let format = output.effective_format(cli.output);

    // === Dependency Injection ===
    let catalog_path = cli
        .tools
        .clone()
        .or_else(|| config.catalog.path.clone())
        .context("No tool catalog given. Pass --tools <file> or set catalog.path")?;
    let catalog = Arc::new(JsonFileToolCatalog::new(
        catalog_path,
        config.catalog.page_size,
    ));
    let executor = build_executor(&config.executor).context("Failed to set up tool executor")?;

    let session_config =
        SessionConfig::default().with_unknown_fields(config.form.unknown_field_policy());
    let mut session = ToolsSession::new(catalog, executor)
        .with_config(session_config)
        .with_resolver(config.form.to_resolver());

    if let Some(path) = &config.logging.invocation_log
        && let Some(logger) = JsonlInvocationLogger::new(path)
    {
        info!("Recording invocations to {}", logger.path().display());
        session = session.with_invocation_logger(Arc::new(logger));
    }

    let loaded = session
        .list_all_tools()
        .await
        .context("Failed to load tool catalog")?;
    info!("Loaded {} tools", loaded);

    // TUI mode
    if cli.tui {
        TuiApp::new(session).run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // List mode
    if cli.list {
        print_tools(&session, format);
        return Ok(ExitCode::SUCCESS);
    }

    // Single invocation mode - tool is required
    let tool = match cli.tool.as_deref() {
        Some(t) => t,
        None => bail!("A tool name is required. Use --list to see tools or --tui for interactive mode."),
    };

    let progress: Box<dyn InvocationProgressNotifier> =
        if cli.quiet || format == OutputFormat::Json {
            Box::new(NoProgress)
        } else {
            Box::new(ProgressReporter::new())
        };

    run_tool(
        &mut session,
        tool,
        &cli.args,
        format,
        progress.as_ref(),
    )
    .await
}

/// Install the tracing subscriber.
///
/// Logs go to `logging.file` when configured. Without a file they go to
/// stderr, except in TUI mode where stderr would draw over the interface.
fn init_logging(verbose: u8, file: Option<&Path>, tui: bool) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = file else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false);
        if tui {
            subscriber.with_writer(std::io::sink).init();
        } else {
            subscriber.with_writer(std::io::stderr).init();
        }
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("logging.file has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn print_tools(session: &ToolsSession, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            print!(
                "{}",
                ConsoleFormatter::format_tools(session.tools(), session.next_cursor().is_some())
            );
        }
        OutputFormat::Json => {
            let converter = McpToolConverter;
            let tools: Vec<serde_json::Value> = session
                .tools()
                .all()
                .map(|t| converter.tool_to_schema(t))
                .collect();
            let mut listing = serde_json::json!({ "tools": tools });
            if let Some(cursor) = session.next_cursor() {
                listing["nextCursor"] = cursor.into();
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&listing).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

/// Select `tool`, route every assignment through the form, submit and print
/// the result. Exits with status 1 when coercion fails or the tool reports
/// an error.
async fn run_tool(
    session: &mut ToolsSession,
    tool: &str,
    assignments: &[(String, String)],
    format: OutputFormat,
    progress: &dyn InvocationProgressNotifier,
) -> Result<ExitCode> {
    session.select_tool(tool)?;
    for (name, value) in assignments {
        session
            .update_field(name, value.as_str())
            .with_context(|| format!("Cannot set '{}'", name))?;
    }

    let formatter = formatter_for(format);
    match session.submit_and_run(progress).await {
        Ok(outcome) => {
            println!("{}", formatter.format_outcome(&outcome).trim_end());
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(SessionError::Submit(e)) => {
            let fields = session.fields();
            println!("{}", formatter.format_submit_error(&e, &fields).trim_end());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

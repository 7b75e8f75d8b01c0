//! CLI entrypoint for studyhall
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use studyhall_application::{
    CompletionGateway, CompletionSession, GatewayError, GenerateGuideError, GenerateGuideUseCase,
    GenerationParams,
};
use studyhall_domain::config::validation::has_errors;
use studyhall_domain::{GuideTemplate, Model, OutputFormat, Severity};
use studyhall_infrastructure::{ConfigLoader, OllamaConfig, OllamaGateway};
use studyhall_presentation::{Cli, ConsoleFormatter, ConsoleSink, GenerationProgress, StudyRepl};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so streamed guide text on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting studyhall");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{} {}", "config error:".red().bold(), issue.message),
            Severity::Warning => eprintln!("{} {}", "config warning:".yellow(), issue.message),
        }
    }
    if has_errors(&issues) {
        bail!("configuration is invalid, fix the issues above");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Resolve effective settings: CLI flags override file values
    // Model::from_str is infallible; unknown names become Custom(...)
    let model: Model = cli
        .model
        .as_deref()
        .unwrap_or(&config.ollama.model)
        .parse()
        .unwrap();
    let template: GuideTemplate = match cli.template {
        Some(arg) => arg.into(),
        None => config.generation.parse_template().0,
    };
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(config.ollama.timeout_secs));
    let format: OutputFormat = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    // JSON output needs the whole text before printing anything
    let streaming = config.generation.streaming && !cli.no_stream && format != OutputFormat::Json;

    // === Dependency Injection ===
    // Connect to the Ollama server; this is the single startup probe and is
    // never retried.
    let ollama_config = {
        let mut c = OllamaConfig::default().with_base_url(&config.ollama.base_url);
        c.keep_alive = config.ollama.keep_alive.clone();
        c.temperature = config.ollama.temperature;
        c.num_predict = config.ollama.num_predict;
        c
    };

    let gateway = match OllamaGateway::connect(ollama_config).await {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Startup probe failed: {}", e);
            eprintln!(
                "Could not reach the Ollama server at {}.",
                config.ollama.base_url
            );
            eprintln!("Ensure the service is running:  ollama serve");
            std::process::exit(1);
        }
    };

    if cli.list_models {
        let models = gateway
            .available_models()
            .await
            .map_err(|e| anyhow::anyhow!("failed to list models: {}", e))?;
        if models.is_empty() {
            println!("No models installed. Download one with:  ollama pull llama3.2");
        } else {
            println!("Installed models:");
            for model in models {
                println!("  - {}", model);
            }
        }
        return Ok(());
    }

    let session: Arc<dyn CompletionSession> = match gateway.create_session(&model).await {
        Ok(session) => Arc::from(session),
        Err(GatewayError::ModelNotAvailable(name)) => {
            eprintln!("Model '{}' is not installed on the Ollama server.", name);
            eprintln!("Download it with:  ollama pull {}", name);
            if let Ok(models) = gateway.available_models().await {
                if !models.is_empty() {
                    let names: Vec<String> = models.iter().map(|m| m.to_string()).collect();
                    eprintln!("Installed models: {}", names.join(", "));
                }
            }
            std::process::exit(1);
        }
        Err(e) => {
            error!("Session creation failed: {}", e);
            eprintln!("Could not create a session with the Ollama server.");
            eprintln!("Ensure the service is running:  ollama serve");
            std::process::exit(1);
        }
    };

    let params = GenerationParams::default()
        .with_template(template)
        .with_timeout(timeout)
        .with_streaming(streaming);
    let use_case = GenerateGuideUseCase::new(session, params);

    match cli.topic {
        // One-shot mode: generate a single guide and exit
        Some(topic) => run_one_shot(use_case, &topic, format, cli.quiet).await,
        // Interactive mode
        None => {
            let history = config.repl.history_file.clone().map(PathBuf::from);
            let repl = StudyRepl::new(use_case)
                .with_progress(config.repl.show_progress && !cli.quiet)
                .with_quiet(cli.quiet)
                .with_history_file(history);
            repl.run().await?;
            Ok(())
        }
    }
}

async fn run_one_shot(
    use_case: GenerateGuideUseCase,
    topic: &str,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = match format {
        OutputFormat::Json => use_case.execute(topic).await.map(|guide| {
            println!("{}", ConsoleFormatter::format_json(&guide));
        }),
        OutputFormat::Text if use_case.params().streaming => {
            let sink = ConsoleSink::new();
            use_case.execute_streaming(topic, &sink).await.map(|guide| {
                println!();
                println!();
                println!("{}", ConsoleFormatter::format_footer(&guide));
            })
        }
        OutputFormat::Text => {
            let progress = (!quiet).then(GenerationProgress::start);
            let result = use_case.execute(topic).await;
            if let Some(progress) = progress {
                progress.finish();
            }
            result.map(|guide| {
                println!("{}", ConsoleFormatter::format(&guide));
            })
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(GenerateGuideError::InvalidTopic(e)) => bail!("{}", e),
        Err(e) => {
            error!("Generation failed: {}", e);
            bail!("generation failed, try again in a moment");
        }
    }
}

//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use studyhall_domain::{GuideTemplate, OutputFormat};

/// Output format for generated guides
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputArg {
    /// Human-readable console output
    Text,
    /// One JSON document per guide
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Template variant selectable from the command line
///
/// The `custom` variant needs wording and is only reachable through the
/// config file (`generation.custom_template`).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TemplateArg {
    /// Numbered sections: key concepts, important points, simple examples
    Structured,
    /// A short list of 3-5 key points
    Brief,
}

impl From<TemplateArg> for GuideTemplate {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Structured => GuideTemplate::Structured,
            TemplateArg::Brief => GuideTemplate::Brief,
        }
    }
}

/// CLI arguments for studyhall
#[derive(Parser, Debug)]
#[command(name = "studyhall")]
#[command(author, version, about = "Generate study guides for any topic with a local Ollama model")]
#[command(long_about = r#"
Studyhall turns a topic into a study guide using a locally running Ollama
server. With a topic argument it generates one guide and exits; without one
it starts an interactive loop that keeps prompting for topics until you
type 'quit'.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./studyhall.toml    Project-level config
3. ~/.config/studyhall/config.toml   Global config

Example:
  studyhall "Photosynthesis"
  studyhall -m phi4 --template brief "The French Revolution"
  studyhall --no-stream -o json "Ohm's law"
  studyhall
"#)]
pub struct Cli {
    /// Topic to generate a guide for (omit to start interactive mode)
    pub topic: Option<String>,

    /// Model to generate with (e.g. llama3.2, phi4, mistral)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Prompt template variant
    #[arg(short, long, value_enum, value_name = "TEMPLATE")]
    pub template: Option<TemplateArg>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Wait for the full guide instead of streaming it as it generates
    #[arg(long)]
    pub no_stream: bool,

    /// Output format
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banners and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the models installed on the Ollama server and exit
    #[arg(long)]
    pub list_models: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from(["studyhall", "Photosynthesis"]).unwrap();
        assert_eq!(cli.topic.as_deref(), Some("Photosynthesis"));
        assert!(!cli.no_stream);
        assert!(cli.model.is_none());
    }

    #[test]
    fn test_parse_no_topic_means_interactive() {
        let cli = Cli::try_parse_from(["studyhall"]).unwrap();
        assert!(cli.topic.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "studyhall",
            "-m",
            "phi4",
            "--template",
            "brief",
            "--timeout",
            "30",
            "--no-stream",
            "-o",
            "json",
            "-vv",
            "Ohm's law",
        ])
        .unwrap();

        assert_eq!(cli.model.as_deref(), Some("phi4"));
        assert!(matches!(cli.template, Some(TemplateArg::Brief)));
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.no_stream);
        assert!(matches!(cli.output, Some(OutputArg::Json)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_rejects_unknown_template() {
        assert!(Cli::try_parse_from(["studyhall", "--template", "flashcards"]).is_err());
    }

    #[test]
    fn test_template_arg_maps_to_domain() {
        assert_eq!(
            GuideTemplate::from(TemplateArg::Structured),
            GuideTemplate::Structured
        );
        assert_eq!(GuideTemplate::from(TemplateArg::Brief), GuideTemplate::Brief);
    }

    #[test]
    fn test_output_arg_maps_to_domain() {
        assert_eq!(OutputFormat::from(OutputArg::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(OutputArg::Json), OutputFormat::Json);
    }
}

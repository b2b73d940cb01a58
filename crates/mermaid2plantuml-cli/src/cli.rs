//! Command-line interface for the mmd2img utility
//!
//! Converts Mermaid.js class diagrams to PlantUML and renders them through
//! the external `plantuml` program.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::plantuml::{resolve_puml_path, OutputFormat, PlantUmlExecutor, DEFAULT_PROGRAM};
use mermaid2plantuml::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use mermaid2plantuml::plugins::class::{ClassDatabase, Stereotype};
use mermaid2plantuml::{parse, render};

/// Extension required for `render` input files
pub const MERMAID_EXTENSION: &str = "mmd";

/// mmd2img - Convert Mermaid.js class diagrams to PlantUML images
#[derive(Parser)]
#[command(name = "mmd2img")]
#[command(about = "Convert Mermaid.js class diagrams to PlantUML and render them as images")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a .mmd file to PlantUML and render it as an image
    Render {
        /// Mermaid class diagram file (must end in .mmd)
        input: PathBuf,

        /// Output file; its directory and stem name the .puml and image files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Image format produced by PlantUML
        #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
        format: OutputFormat,

        /// PlantUML program to run
        #[arg(long, default_value = DEFAULT_PROGRAM)]
        plantuml: String,
    },

    /// Convert a Mermaid class diagram to PlantUML text
    Convert {
        /// Input file containing a Mermaid class diagram (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for PlantUML text (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a Mermaid class diagram
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Summary of one class block
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClassSummary {
    pub name: String,
    pub kind: &'static str,
    pub members: usize,
}

/// Result of the `validate` command
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub classes: Vec<ClassSummary>,
    pub relationships: Vec<String>,
    pub undefined_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn from_database(database: &ClassDatabase) -> Self {
        let classes = database
            .classes()
            .map(|(name, definition)| ClassSummary {
                name: name.to_string(),
                kind: match definition.stereotype {
                    Some(Stereotype::Enumeration) => "enumeration",
                    Some(Stereotype::Interface) => "interface",
                    Some(Stereotype::Abstract) => "abstract",
                    None => "class",
                },
                members: definition.members.len(),
            })
            .collect();

        Self {
            valid: true,
            classes,
            relationships: database.relation_lines().to_vec(),
            undefined_classes: database.undefined_classes().map(str::to_string).collect(),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            classes: Vec::new(),
            relationships: Vec::new(),
            undefined_classes: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Human-readable form of the report
    pub fn to_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("✗ Invalid class diagram: {}", error);
        }

        let mut text = format!(
            "✓ Valid class diagram: {} classes, {} relationships",
            self.classes.len(),
            self.relationships.len()
        );
        for class in &self.classes {
            text.push_str(&format!(
                "\n  {} ({}, {} members)",
                class.name, class.kind, class.members
            ));
        }
        if !self.undefined_classes.is_empty() {
            text.push_str(&format!(
                "\n  referenced without a block: {}",
                self.undefined_classes.join(", ")
            ));
        }
        text
    }
}

/// Main CLI application
pub struct Mmd2ImgApp {
    executor: PlantUmlExecutor,
}

impl Mmd2ImgApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_executor(PlantUmlExecutor::new())
    }

    /// Create a new application instance with a PlantUML executor
    pub fn with_executor(executor: PlantUmlExecutor) -> Self {
        Self { executor }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over the flags
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("mmd2img v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output,
                format,
                plantuml,
            } => {
                self.executor.set_program(plantuml);
                self.render_command(&input, output.as_deref(), format, cli.verbose)
            }
            Commands::Convert { input, output } => {
                self.convert_command(input, output, cli.verbose)
            }
            Commands::Validate { input, json } => self.validate_command(input, json, cli.verbose),
        }
    }

    /// Handle the render command
    fn render_command(
        &self,
        input: &Path,
        output: Option<&Path>,
        format: OutputFormat,
        verbose: bool,
    ) -> Result<()> {
        if input.extension().and_then(|ext| ext.to_str()) != Some(MERMAID_EXTENSION) {
            return Err(anyhow!(
                "Input file must have the .{} extension: '{}'",
                MERMAID_EXTENSION,
                input.display()
            ));
        }

        let content = fs::read_to_string(input)
            .map_err(|e| anyhow!("Failed to read input file '{}': {}", input.display(), e))?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let database =
            parse(&content).map_err(|e| anyhow!("Failed to parse Mermaid diagram: {}", e))?;
        let puml = render(&database);

        let puml_path = resolve_puml_path(input, output);
        fs::write(&puml_path, &puml).map_err(|e| {
            anyhow!(
                "Failed to write PlantUML file '{}': {}",
                puml_path.display(),
                e
            )
        })?;

        if verbose {
            eprintln!("Wrote {}", puml_path.display());
        }

        let image = self
            .executor
            .generate_image(&puml_path, format.as_str())
            .map_err(|e| anyhow!("Failed to generate image: {}", e))?;

        println!("Conversion complete:");
        println!("- PlantUML file: {}", puml_path.display());
        println!("- Image file: {}", image.display());
        Ok(())
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let database =
            parse(&content).map_err(|e| anyhow!("Failed to parse Mermaid diagram: {}", e))?;

        if verbose {
            eprintln!(
                "Parsed {} classes and {} relationships",
                database.class_count(),
                database.relationship_count()
            );
        }

        self.write_output(output, &render(&database))
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let (report, result) = match parse(&content) {
            Ok(database) => (ValidationReport::from_database(&database), Ok(())),
            Err(e) => (
                ValidationReport::invalid(e.to_string()),
                Err(anyhow!("Invalid class diagram: {}", e)),
            ),
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.to_text());
        }
        result
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    ///
    /// Stdout gets a trailing newline; files get the text exactly.
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                if content.is_empty() || content.ends_with('\n') {
                    write!(stdout, "{}", content)?;
                } else {
                    writeln!(stdout, "{}", content)?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// The PlantUML executor (for testing)
    #[cfg(test)]
    pub fn executor(&self) -> &PlantUmlExecutor {
        &self.executor
    }
}

impl Default for Mmd2ImgApp {
    fn default() -> Self {
        Self::new()
    }
}

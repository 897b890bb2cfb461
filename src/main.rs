use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use codeboard::diagram::Scene;
use codeboard::fetch::{FetchConfig, FetchError, SourceRouter};
use codeboard::{DiagramError, ErrorCode, GenerateOptions, Point, generate};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),
    #[error("invalid fetch configuration: {0}")]
    Config(#[from] FetchError),
    #[error("failed to load .env: {0}")]
    Dotenv(String),
    #[error("failed to read scene {path}: {message}")]
    SceneRead { path: String, message: String },
    #[error("invalid scene {path}: {message}")]
    SceneParse { path: String, message: String },
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Diagram(err) => err.error_code(),
            Self::Config(err) => err.error_code(),
            Self::Dotenv(_) => "E_DOTENV",
            Self::SceneRead { .. } => "E_SCENE_READ",
            Self::SceneParse { .. } => "E_SCENE_PARSE",
            Self::Encode(_) => "E_ENCODE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Bare element array.
    Elements,
    /// Full scene document, loadable by the whiteboard.
    Scene,
}

#[derive(Parser, Debug)]
#[command(name = "codeboard", about = "Diagram a TypeScript module's exports as whiteboard elements")]
struct Cli {
    /// TypeScript file: local path, file:// path, http(s) URL, or a path
    /// relative to --base-url.
    path: String,

    /// Horizontal center of the diagram.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    origin_x: f64,

    /// Top edge of the diagram.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    origin_y: f64,

    /// Resolve relative paths against this URL instead of the filesystem.
    #[arg(long, env = "CODEBOARD_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Elements)]
    format: OutputFormat,

    /// Append the diagram to this scene file and print the merged scene.
    /// Implies `--format scene`. The file is not modified.
    #[arg(long, value_name = "SCENE.json")]
    merge: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    if let Err(err) = load_dotenv() {
        eprintln!("error[{}]: {err}", err.error_code());
        return ExitCode::FAILURE;
    }
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error[{}]: {err}", err.error_code());
            ExitCode::FAILURE
        }
    }
}

fn load_dotenv() -> Result<(), CliError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(CliError::Dotenv(err.to_string())),
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let mut config = FetchConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    let router = SourceRouter::new(&config)?;

    let options = GenerateOptions { origin: Point::new(cli.origin_x, cli.origin_y) };
    let diagram = generate(&router, &cli.path, options).await?;

    let scene = match (&cli.merge, cli.format) {
        (Some(path), _) => Some(read_scene(path).await?),
        (None, OutputFormat::Scene) => Some(Scene::new()),
        (None, OutputFormat::Elements) => None,
    };

    let output = match scene {
        Some(mut scene) => {
            let added = scene.append(&diagram.elements)?;
            tracing::info!(added, total = scene.elements.len(), "scene: elements appended");
            encode(&scene, cli.pretty)?
        }
        None => encode(&diagram.elements, cli.pretty)?,
    };
    Ok(output)
}

async fn read_scene(path: &Path) -> Result<Scene, CliError> {
    let display = path.display().to_string();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::SceneRead { path: display.clone(), message: e.to_string() })?;
    Scene::from_json(&text).map_err(|e| CliError::SceneParse { path: display, message: e.to_string() })
}

fn encode<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let text = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(text)
}

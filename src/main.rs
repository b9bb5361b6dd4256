// src/main.rs - Translates recorded frames (JSON or CSV) into FluentNao chains, one line per frame
use anyhow::{Context, Result};
use clap::Parser;
use fluentnao_translator::{FluentNaoTranslator, JointFrame, JointGroup, TranslatorConfig};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "fluentnao-translate")]
#[command(about = "Translate recorded NAO joint frames into FluentNao command chains")]
#[command(version)]
struct Cli {
    /// Recorded frames, JSON (one object or an array) or CSV (.csv)
    input: PathBuf,

    /// Translator config document (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Joint families to classify, in order
    #[arg(short, long, value_delimiter = ',')]
    groups: Vec<JointGroup>,

    /// Root prefix for every chain, e.g. `nao.`
    #[arg(long)]
    root: Option<String>,

    /// Append the blocking suffix to every non-empty chain
    #[arg(long)]
    blocking: bool,

    /// Duration parameter of every command with offsets
    #[arg(short, long)]
    duration: Option<f64>,
}

/// Command-line options override the config file, which overrides defaults.
fn load_config(cli: &Cli) -> Result<TranslatorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            TranslatorConfig::from_json_str(&text)?
        }
        None => TranslatorConfig::default(),
    };

    if !cli.groups.is_empty() {
        config.group_order = cli.groups.clone();
    }
    if let Some(root) = &cli.root {
        config.render.fluentnao = root.clone();
    }
    if let Some(duration) = cli.duration {
        config.duration = duration;
    }
    config.render.is_blocking |= cli.blocking;
    Ok(config)
}

fn load_frames(path: &Path) -> Result<Vec<JointFrame>> {
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    let frames = if is_csv {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        JointFrame::read_csv(file)?
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        JointFrame::many_from_json_str(&text)?
    };
    Ok(frames)
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the generated chains
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let translator = FluentNaoTranslator::with_config(config);
    let frames = load_frames(&cli.input)?;
    info!(frames = frames.len(), input = %cli.input.display(), "loaded recording");

    for (index, frame) in frames.iter().enumerate() {
        let text = translator.translate(frame);
        if text.is_empty() {
            warn!(frame = index, "no known joints in frame");
        }
        println!("{text}");
    }

    Ok(())
}

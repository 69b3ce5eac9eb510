use std::{
    fs,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use game_core::{
    geometry::{node_positions, Viewport},
    load_settings, svg, FlowSettings, GameFlow,
};
use tracing_subscriber::EnvFilter;

mod interactive;
mod script;

#[derive(Parser, Debug)]
#[command(name = "yut", about = "Yut nomination party game in the terminal")]
struct Cli {
    /// Settings file; defaults to ./yut.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively on stdin/stdout.
    Play {
        #[arg(long)]
        once: bool,
    },
    /// Apply a JSON game script and print the summary.
    Replay {
        script: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Also write the final board as an SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        #[arg(long, default_value_t = 800.0)]
        height: f32,
    },
    /// Print seat coordinates for a board of `count` participants.
    Layout {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=30))]
        count: u32,
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        #[arg(long, default_value_t = 800.0)]
        height: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    let flow_settings = FlowSettings::from(&settings);

    match cli.command {
        Command::Play { once } => {
            let stdin = io::stdin();
            let stdout = BufWriter::new(io::stdout());
            let mut flow = GameFlow::new(flow_settings);
            interactive::Session::new(stdin.lock(), stdout, &settings).run(&mut flow, once)?;
        }
        Command::Replay {
            script: script_path,
            format,
            svg: svg_path,
            width,
            height,
        } => {
            let parsed = script::load_script(&script_path)?;
            let report = script::replay(&parsed, flow_settings)?;
            if !report.complete {
                tracing::warn!(
                    edges = report.edges.len(),
                    "script ended before every participant was nominated"
                );
            }

            match format {
                OutputFormat::Text => print!("{}", report.summary.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }

            if let Some(path) = svg_path {
                let rendered = svg::render_board(
                    &report.participants,
                    &report.edges,
                    report.cursor,
                    &Viewport::new(width, height),
                );
                fs::write(&path, rendered)
                    .with_context(|| format!("failed to write svg '{}'", path.display()))?;
                tracing::info!(path = %path.display(), "board written");
            }
        }
        Command::Layout {
            count,
            width,
            height,
        } => {
            let viewport = Viewport::new(width, height);
            for (index, point) in node_positions(count as usize, &viewport).into_iter().enumerate() {
                println!("player-{index}\t{:.1}\t{:.1}", point.x, point.y);
            }
        }
    }

    Ok(())
}

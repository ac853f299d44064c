use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use collinear::sample::{draw_planted, PlantedCfg, ReplayToken};
use collinear::{CollinearPoints, DetectCfg};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Find maximal collinear segments in integer point sets")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Detect segments in a points JSON file and print them, one per line
    Detect {
        #[arg(long)]
        input: PathBuf,
        /// Also write segments JSON (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 4)]
        min_points: usize,
        /// Keep acceptance order instead of sorting by (start, end)
        #[arg(long)]
        unsorted: bool,
        /// Enumerate origins in parallel (needs the `parallel` feature)
        #[arg(long)]
        parallel: bool,
    },
    /// Write a reproducible point set with planted collinear runs
    Sample {
        #[arg(long, default_value_t = 4)]
        lines: usize,
        #[arg(long, default_value_t = 5)]
        per_line: usize,
        #[arg(long, default_value_t = 32)]
        noise: usize,
        #[arg(long, default_value_t = 32767)]
        extent: i32,
        #[arg(long, default_value_t = 1024)]
        max_step: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Detect {
            input,
            out,
            min_points,
            unsorted,
            parallel,
        } => {
            let cfg = DetectCfg {
                min_points,
                sort_output: !unsorted,
                parallel,
            };
            detect(input, out, cfg, cmd.tag)
        }
        Action::Sample {
            lines,
            per_line,
            noise,
            extent,
            max_step,
            seed,
            index,
            out,
        } => {
            let cfg = PlantedCfg {
                lines,
                points_per_line: per_line,
                noise,
                extent,
                max_step,
            };
            sample(cfg, ReplayToken { seed, index }, out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn detect(input: PathBuf, out: Option<PathBuf>, cfg: DetectCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = ?out,
        min_points = cfg.min_points,
        sorted = cfg.sort_output,
        parallel = cfg.parallel,
        tag = ?tag,
        "detect"
    );
    if cfg.parallel && !cfg!(feature = "parallel") {
        tracing::warn!("built without the `parallel` feature; enumerating serially");
    }
    let entries = io::read_points(&input)?;
    let found = CollinearPoints::from_optional(&entries, cfg)
        .with_context(|| format!("invalid input in {}", input.display()))?;
    tracing::info!(
        points = entries.len(),
        segments = found.number_of_segments(),
        "detected"
    );

    let mut stdout = std::io::stdout().lock();
    for segment in &found {
        writeln!(stdout, "{segment}")?;
    }

    if let Some(out) = out {
        io::write_segments(&out, &found)?;
        let params = json!({
            "input": input.to_string_lossy(),
            "points": entries.len(),
            "min_points": cfg.min_points,
            "sorted": cfg.sort_output,
            "parallel": cfg.parallel,
            "segments": found.number_of_segments()
        });
        let prov = write_sidecar(&out, Payload::new(params, tag))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote segments");
    }
    Ok(())
}

fn sample(cfg: PlantedCfg, tok: ReplayToken, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(?cfg, seed = tok.seed, index = tok.index, out = %out.display(), tag = ?tag, "sample");
    let drawn = draw_planted(cfg, tok).context("drawing planted point set")?;
    io::write_points(&out, &drawn.points)?;
    let params = json!({
        "lines": cfg.lines,
        "points_per_line": cfg.points_per_line,
        "noise": cfg.noise,
        "extent": cfg.extent,
        "max_step": cfg.max_step,
        "seed": tok.seed,
        "index": tok.index,
        "points": drawn.points.len(),
        "planted": drawn.planted.iter().map(ToString::to_string).collect::<Vec<_>>()
    });
    write_sidecar(&out, Payload::new(params, tag))?;
    tracing::info!(points = drawn.points.len(), "wrote points");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": collinear::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

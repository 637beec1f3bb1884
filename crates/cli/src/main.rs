use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use diagram::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Delaunay diagram runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a reproducible random site set and print a JSON summary
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Layout {
    Uniform,
    Grid,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Number of sites to draw
    #[arg(long, default_value_t = 64)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long, value_enum, default_value_t = Layout::Uniform)]
    layout: Layout,
    /// Grid jitter as a fraction of the cell size (grid layout only)
    #[arg(long, default_value_t = 0.25)]
    jitter: f64,
    #[arg(long, default_value_t = -100.0, allow_hyphen_values = true)]
    left: f64,
    #[arg(long, default_value_t = -100.0, allow_hyphen_values = true)]
    top: f64,
    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    right: f64,
    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    bottom: f64,
    /// Include every triangle in the summary
    #[arg(long)]
    mesh: bool,
    /// Write the summary here, plus a provenance sidecar next to it
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    index: u64,
    layout: Layout,
    sites: usize,
    triangles: usize,
    edges: usize,
    interior_edges: usize,
    hull: Vec<[f64; 2]>,
    elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    mesh: Option<Vec<[[f64; 2]; 3]>>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => {
            let summary = run(&args)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            if let Some(out) = &args.out {
                write_outputs(out, &args, &summary)?;
            }
            Ok(())
        }
        Action::Report => report(),
    }
}

fn xy(p: &Point) -> [f64; 2] {
    [p.x(), p.y()]
}

fn run(args: &RunArgs) -> Result<Summary> {
    let border = Rectangle::new(args.left, args.top, args.right, args.bottom);
    let cfg = SiteCfg {
        count: SiteCount::Fixed(args.count),
        layout: match args.layout {
            Layout::Uniform => SiteLayout::Uniform,
            Layout::Grid => SiteLayout::JitteredGrid {
                jitter_frac: args.jitter,
            },
        },
        ..SiteCfg::default()
    };
    let sites = draw_sites(cfg, border, ReplayToken::new(args.seed, args.index));
    tracing::info!(count = sites.len(), seed = args.seed, index = args.index, "run");

    let started = Instant::now();
    let tri = DelaunayDiagram::new(sites)
        .split(border)
        .with_context(|| format!("splitting {} sites (seed {}, index {})", args.count, args.seed, args.index))?;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        triangles = tri.triangles().len(),
        hull = tri.hull().len(),
        elapsed_ms,
        "split done"
    );

    Ok(Summary {
        seed: args.seed,
        index: args.index,
        layout: args.layout,
        sites: tri.sites().len(),
        triangles: tri.triangles().len(),
        edges: tri.edges().len(),
        interior_edges: tri.interior_edges().count(),
        hull: tri.hull().points().iter().map(xy).collect(),
        elapsed_ms,
        mesh: args.mesh.then(|| {
            tri.triangles()
                .iter()
                .map(|t| t.vertices().map(|v| xy(&v)))
                .collect()
        }),
    })
}

fn write_outputs(out: &Path, args: &RunArgs, summary: &Summary) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "count": args.count,
        "seed": args.seed,
        "index": args.index,
        "layout": args.layout,
        "jitter": args.jitter,
        "border": [args.left, args.top, args.right, args.bottom],
    });
    let sidecar = provenance::write_sidecar(out, provenance::Payload::new(params))?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "outputs written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": diagram::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

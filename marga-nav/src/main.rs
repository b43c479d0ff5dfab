//! MargaNav - waypoint navigation node
//!
//! Loads a mission file, replays the recorded planner path through the
//! collision oracle, down-samples it, moves it into the execution frame and
//! drives it open-loop. Velocity commands go to stdout as `linear,angular`
//! lines; logs go to stderr.

mod config;
mod error;
mod mission;
mod publisher;

use std::path::PathBuf;

use clap::Parser;
use marga::executor::{RealTimePacer, SimulatedClock};
use marga::viz::{NullSink, SvgSink, VisualizationSink};
use tracing::info;

use config::MissionConfig;
use error::Result;
use mission::Mission;
use publisher::StdoutPublisher;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mission configuration file
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: PathBuf,

    /// Run on a simulated clock instead of sleeping each control period
    #[arg(long)]
    simulate: bool,

    /// Write an SVG rendering here (overrides output.svg)
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marga_nav=info,marga=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("MargaNav v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading configuration from {:?}", args.config);
    let config = MissionConfig::load(&args.config)?;

    let svg_path = args.svg.clone().or_else(|| config.output.svg.clone());
    let mut svg_sink = svg_path.as_ref().map(|_| {
        let sink = SvgSink::new(config.mission.bounds());
        if config.output.show_fov {
            sink.with_fov(config.output.fov_angle_deg.to_radians(), config.output.fov_range)
        } else {
            sink
        }
    });
    let mut null_sink = NullSink;
    let sink: &mut dyn VisualizationSink = match svg_sink.as_mut() {
        Some(svg) => svg,
        None => &mut null_sink,
    };

    let mission = Mission::new(config)?;
    let publisher = StdoutPublisher::stdout();

    let report = if args.simulate {
        info!("Simulated clock: commands are not paced");
        mission.run(publisher, SimulatedClock::new(), sink)?
    } else {
        mission.run(publisher, RealTimePacer, sink)?
    };

    if let (Some(svg), Some(path)) = (svg_sink, svg_path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        svg.save(&path)?;
        info!("Saved rendering to {:?}", path);
    }

    let pose = report.execution.final_pose;
    info!(
        "Mission complete: {} waypoints, {} commands, {} blocked segments, final pose ({:.2}, {:.2}, {:.1}°)",
        report.waypoints,
        report.execution.commands_published,
        report.blocked_segments.len(),
        pose.x,
        pose.y,
        pose.theta.to_degrees()
    );

    Ok(())
}

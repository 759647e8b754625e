use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use rainbow_core::{LayoutModel, RainbowConfig};
use rainbow_graph::{
    build_graph, load_relationships, ForceLayoutSimulator, LayoutDriver, Viewport,
};

use crate::output::format::format_layout;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct LayoutArgs {
    /// Relationship list (JSON array); "-" reads stdin
    pub input: PathBuf,

    /// Number of ticks to run
    #[arg(long, default_value = "300")]
    pub ticks: u64,

    /// Run on the wall-clock timer for this many milliseconds instead of --ticks
    #[arg(long)]
    pub live_ms: Option<u64>,

    /// Force model: attraction or spring
    #[arg(long)]
    pub model: Option<String>,

    /// Viewport width (overrides config)
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height (overrides config)
    #[arg(long)]
    pub height: Option<f64>,

    /// Only lay out the neighbourhood of this node id
    #[arg(long)]
    pub center: Option<String>,

    /// Traversal depth from --center
    #[arg(long, default_value = "2")]
    pub depth: usize,

    /// Seed for the initial positions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output DOT format for Graphviz (render with `neato -n`)
    #[arg(long)]
    pub dot: bool,
}

pub fn run(args: &LayoutArgs, config: &RainbowConfig, format: OutputFormat) -> Result<()> {
    let mut layout = config.layout.clone();
    if let Some(model) = &args.model {
        layout.model = model.parse::<LayoutModel>()?;
    }
    if let Some(width) = args.width {
        layout.width = width;
    }
    if let Some(height) = args.height {
        layout.height = height;
    }
    let finite = layout.width.is_finite() && layout.height.is_finite();
    if !(finite && layout.width > 0.0 && layout.height > 0.0) {
        anyhow::bail!("Viewport must be positive and finite, got {}x{}", layout.width, layout.height);
    }

    let records = if args.input.as_os_str() == "-" {
        load_relationships(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(&args.input)
            .with_context(|| format!("Failed to open {}", args.input.display()))?;
        load_relationships(std::io::BufReader::new(file))
    }
    .context("Failed to load relationship list")?;

    let mut rng = super::make_rng(args.seed);
    let viewport = Viewport::new(layout.width, layout.height);
    let full_graph = build_graph(&records, &mut rng, viewport, layout.default_strength);
    let graph = match &args.center {
        Some(center) => {
            if full_graph.node(center).is_none() {
                anyhow::bail!("No node with id '{center}' in the relationship list");
            }
            full_graph.subgraph(center, args.depth)
        }
        None => full_graph,
    };

    let mut simulator = ForceLayoutSimulator::new(graph, &layout);
    if let Some(live_ms) = args.live_ms {
        let interval = Duration::from_millis(layout.tick_interval_ms);
        let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
        simulator = rt.block_on(async {
            let handle = LayoutDriver::spawn(simulator, interval);
            tokio::time::sleep(Duration::from_millis(live_ms)).await;
            handle.stop().await
        })?;
    } else {
        simulator.run(args.ticks);
    }
    tracing::info!(ticks = simulator.tick_count(), "Layout finished");

    let ticks = simulator.tick_count();
    let laid_out = simulator.into_graph();
    if args.dot {
        print!("{}", laid_out.to_dot());
        return Ok(());
    }
    println!("{}", format_layout(&laid_out, ticks, format));
    Ok(())
}

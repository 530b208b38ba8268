mod app;
mod flow;

use anyhow::anyhow;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the flow network log to visualize.
    #[arg(long, default_value = "input.txt")]
    input: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // The graph is loaded before the event loop starts; a bad log file is
    // fatal here rather than a broken window later.
    let graph = flow::load_flow_graph(&args.input)?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "flowviz",
        options,
        Box::new(move |cc| Ok(Box::new(app::FlowVizApp::new(cc, graph)))),
    )
    .map_err(|error| anyhow!("failed to start the flowviz window: {error}"))
}

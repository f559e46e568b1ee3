use anyhow::Result;

use rasterboard_engine::device::GpuInit;
use rasterboard_engine::logging::init_logging;
use rasterboard_engine::window::{Runtime, RuntimeConfig};

mod app;
mod batch;
mod palette;

use app::PadApp;

fn main() -> Result<()> {
    init_logging();

    log::info!("rasterboard — R: segments, T: triangles, 0-9: color, Esc: quit");

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), PadApp::new())
}

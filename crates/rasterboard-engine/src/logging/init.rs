use std::sync::Once;

use env_logger::Env;

static INIT: Once = Once::new();

/// Installs the global logger; later calls are no-ops.
///
/// `RUST_LOG` selects the filter when set (standard `env_logger` syntax,
/// e.g. "rasterboard_engine=debug,wgpu=warn"); otherwise everything at info
/// and above is shown. Call early in `main`, before the runtime starts.
pub fn init_logging() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    });
}

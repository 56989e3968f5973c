mod app;

use tessera_ui::EntryPoint;
use tracing_subscriber::EnvFilter;

use crate::app::app;

#[tessera_ui::entry]
pub fn run() -> EntryPoint {
    init_tracing();
    EntryPoint::new(app).package(tessera_components::ComponentsPackage)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("off,tessera_ui=info,chronopick=info"))
        .unwrap();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

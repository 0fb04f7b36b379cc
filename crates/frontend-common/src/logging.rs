//! Browser console logging

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events and `log` records to the browser console.
///
/// Later calls keep the first configuration.
pub fn init_logging(level: LevelFilter) {
    wasm_logger::init(wasm_logger::Config::default());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init();
}

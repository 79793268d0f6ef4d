//! Small spreadsheet tools: a weekly timesheet generator plus two cell
//! read/write demos, all backed by `umya-spreadsheet` and `calamine`.

pub mod cell_ref;
pub mod cells;
pub mod layout;
pub mod render;
pub mod styles;
pub mod timesheet;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the `fmt` subscriber, filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

//! Report adapters - Rendering and writing the cost-effectiveness table.

mod stream_writer;
mod text_table;

pub use stream_writer::{render_report, StreamReportWriter};
pub use text_table::render_text;

// PDF Layout: fixed-step line placement and PDF serialization for the rewritten resume.
// Layout is a pure function over text; writing the PDF is CPU-bound and runs
// inside tokio::task::spawn_blocking when called from handlers.

pub mod page_config;
pub mod paginator;
pub mod pdf_writer;

pub use page_config::{default_page_config, PageConfig};
pub use pdf_writer::render_resume_pdf_blocking;

// PDF fixtures for extraction tests.
#[cfg(test)]
pub use paginator::PlacedLine;
#[cfg(test)]
pub use pdf_writer::write_pdf;

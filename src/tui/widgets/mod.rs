//! TUI Widgets
//!
//! Custom widgets for the devscout terminal form.

mod results;
mod submit;

pub use results::{result_lines, wrap_text};
pub use submit::{button_label, render_submit};

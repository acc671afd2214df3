//! Output formatting.
//!
//! - [`format`] - canonical address strings (dotted quad, colon hex, binary)
//! - [`terminal`] - report rendering for the command-line front end

mod format;
mod terminal;

pub use format::{
    format_binary128, format_binary32, format_ipv4, format_ipv6_compressed, format_ipv6_expanded,
};
pub use terminal::{format_field, render_json, render_meta, render_result};

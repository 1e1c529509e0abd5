//! Text helpers: display formatting and locale-style ordering.

pub mod collate;
pub mod format;

pub use collate::{locale_compare, stable_sort_by_locale};
pub use format::{clean_flavor_text, format_dex_number, format_name, format_stat_label};

//! Text extraction for bank SMS alerts and the user's annotation line.

pub mod annotation;
pub mod extractor;

pub use annotation::split_annotation;
pub use extractor::{extract_notification, Direction};

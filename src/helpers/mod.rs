//! Helper functions shared by the page sections

mod html;

pub use html::*;

//! Serializers from rendered nodes to presentation formats.

pub mod html;

pub use html::to_html;

//! Shared components for the page.

pub mod pie_chart;
pub mod section;

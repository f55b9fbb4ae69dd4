//! Presentation layer for the commits analyser.
//!
//! Provides themes, the bar chart and summary views, the interactive menu
//! shell, and the full-screen chart renderer built on top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod menu;
pub mod summary_view;
pub mod themes;

pub use analyser_core as core;

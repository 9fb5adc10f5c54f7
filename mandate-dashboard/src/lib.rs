//! The Dual Mandate Monitor web dashboard.
//!
//! Overview
//! - Two tabs, Employment and Inflation, each split into sections of charts.
//! - Every section is fetched through a [`mandate::Mandate`] orchestrator,
//!   transformed with the `mandate_core` series helpers and returned as
//!   Plotly figure JSON.
//! - The page shell in `assets/` renders the figures client-side.
//!
//! Routes
//! - `GET /`: page shell.
//! - `GET /api/tabs`: tab and section tree.
//! - `GET /api/sections/{tab}/{section}`: rendered section.
//! - `GET /api/explorer/options` and `GET /api/explorer`: the data explorer.
//! - `GET /health`: liveness.

pub mod chart;
pub mod config;
pub mod error;
pub mod explorer;
pub mod layout;
pub mod sections;
pub mod server;
pub mod style;

pub use config::Args;
pub use error::ApiError;
pub use server::{AppState, create_router};

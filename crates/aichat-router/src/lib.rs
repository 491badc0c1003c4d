//! # aichat-router
//!
//! Route table and navigation model for the aichat single-page app.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Navigator                           │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────┐  │
//! │  │   History   │──│  RouteTable  │──│    AppRoute     │  │
//! │  │  (provider) │  │  (resolver)  │  │  (typed views)  │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Routes are a closed enum, so every consumer matches on `AppRoute`
//! exhaustively instead of looking views up by name. The table is a plain
//! value handed to whichever composition root needs it.

pub mod config;
pub mod error;
pub mod location;
pub mod navigation;
pub mod route;
pub mod table;

pub use config::RouterConfig;
pub use error::{Result, RouteError};
pub use location::{Base, Location};
pub use navigation::{ActiveRoute, History, MemoryHistory, Navigator, Ticket};
pub use route::{AppRoute, RouteEntry};
pub use table::{MatchOptions, RouteTable};

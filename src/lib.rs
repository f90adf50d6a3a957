//! League data normalized into one shape: teams, players, stats and game
//! logs, behind a per-league [`client::LeagueAdapter`].

pub mod client;
pub mod cmd;
pub mod config;
pub mod error;
pub mod format;
pub mod nhl_client;
pub mod nhl_mapping;
pub mod nhl_types;
pub mod registry;
pub mod summary;
pub mod types;
pub mod view;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::ReqwestClient;
pub use crate::core::counter::{CounterAction, CounterOptions, CounterState, CounterStore, CounterView};
pub use crate::core::discount::calculate_discount;
pub use crate::core::posts::{fetch_user_posts, UserPostsFetcher};
pub use crate::domain::model::{DiscountRequest, Post, PostsSummary};
pub use crate::domain::ports::{HttpClient, HttpResponse};
pub use crate::utils::error::{KitError, Result};

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::{HttpPeopleSource, StarwApiClient};
pub use config::ServiceConfig;
pub use crate::core::{failure::Failure, people::PeopleService};
pub use domain::model::{NormalizedPerson, RawPage, RawRecord};
pub use domain::ports::{ConfigProvider, PeopleSource};
pub use utils::error::{Result, StarwError};

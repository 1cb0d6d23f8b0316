// Library for tests to access modules

pub mod config;
pub mod models;
pub mod notifier;
pub mod render;
pub mod report;
pub mod reporter;
pub mod routes;
pub mod stats_repo;
pub mod supervisor;
pub mod version;

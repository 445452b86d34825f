//! API-layer shapes for every persisted CI entity.

pub mod build;
pub mod build_executable;
pub mod build_itinerary;
pub mod build_queue;
pub mod compiled;
pub mod dashboard;
pub mod deployment;
pub mod hook;
pub mod init;
pub mod init_step;
pub mod log;
pub mod pipeline;
pub mod repo;
pub mod schedule;
pub mod secret;
pub mod service;
pub mod step;
pub mod user;
pub mod worker;

pub use build::Build;
pub use build_executable::BuildExecutable;
pub use build_itinerary::BuildItinerary;
pub use build_queue::BuildQueue;
pub use compiled::Compiled;
pub use dashboard::{Dashboard, DashboardRepo};
pub use deployment::Deployment;
pub use hook::Hook;
pub use init::Init;
pub use init_step::InitStep;
pub use log::Log;
pub use pipeline::Pipeline;
pub use repo::Repo;
pub use schedule::Schedule;
pub use secret::Secret;
pub use service::Service;
pub use step::Step;
pub use user::User;
pub use worker::Worker;

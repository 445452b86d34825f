//! Centrix CI compiled pipelines.
//!
//! A compiled [`Build`] is the fully expanded description of a run. Before a
//! worker executes it, [`Build::purge`] drops the work whose rules do not
//! match the triggering event and [`Build::sanitize`] rewrites identifiers
//! for the container runtime. While running, [`Container::execute`] decides
//! per container whether it should still run given the build status.

pub mod build;
pub mod container;
pub mod context;
pub mod error;
pub mod port;
pub mod ruleset;
pub mod secret;
pub mod stage;
pub mod ulimit;
pub mod volume;

pub use build::{Build, Metadata, Worker};
pub use container::{Container, ContainerSlice};
pub use error::{PipelineError, Result};
pub use port::Port;
pub use ruleset::{Matcher, Operator, RuleData, Rules, Ruleset, Ruletype};
pub use secret::{Secret, StepSecret};
pub use stage::{Stage, StageSlice};
pub use ulimit::Ulimit;
pub use volume::Volume;

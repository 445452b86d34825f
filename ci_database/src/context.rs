//! Request-scoped carriers for persisted records.
//!
//! Each record type gets a private key, so only this module can bind or read
//! it. Handlers bind the record they loaded and downstream code retrieves it
//! without threading it through every call.
//!
//! ```
//! use ci_database::Repo;
//! use ci_library::Context;
//!
//! let repo = Repo { full_name: Some("github/octocat".into()), ..Default::default() };
//! let ctx = repo.clone().to_context(&Context::new());
//! assert_eq!(Repo::from_context(&ctx), Some(&repo));
//! ```

use ci_library::Context;

use crate::models::{Build, Log, Pipeline, Repo, Secret, Service, Step, User};

macro_rules! carrier {
    ($record:ty, $key:ident) => {
        struct $key;

        impl $record {
            /// Bind this record into a child of `ctx`.
            pub fn to_context(self, ctx: &Context) -> Context {
                ctx.with_value::<$key, Self>(self)
            }

            /// The record bound in `ctx`, if any.
            pub fn from_context(ctx: &Context) -> Option<&Self> {
                ctx.value::<$key, Self>()
            }
        }
    };
}

carrier!(Build, BuildKey);
carrier!(Log, LogKey);
carrier!(Pipeline, PipelineKey);
carrier!(Repo, RepoKey);
carrier!(Secret, SecretKey);
carrier!(Service, ServiceKey);
carrier!(Step, StepKey);
carrier!(User, UserKey);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_record_is_none() {
        let ctx = Context::new();
        assert!(Build::from_context(&ctx).is_none());
        assert!(User::from_context(&ctx).is_none());
    }

    #[test]
    fn records_do_not_collide() {
        let build = Build {
            id: Some(1),
            number: Some(7),
            ..Default::default()
        };
        let step = Step {
            id: Some(1),
            name: Some("clone".into()),
            ..Default::default()
        };

        let ctx = step.clone().to_context(&build.clone().to_context(&Context::new()));
        assert_eq!(Build::from_context(&ctx), Some(&build));
        assert_eq!(Step::from_context(&ctx), Some(&step));
        assert!(Service::from_context(&ctx).is_none());
    }

    #[test]
    fn rebinding_shadows_earlier_record() {
        let first = User {
            name: Some("octocat".into()),
            ..Default::default()
        };
        let second = User {
            name: Some("octokitty".into()),
            ..Default::default()
        };
        let ctx = second.clone().to_context(&first.to_context(&Context::new()));
        assert_eq!(User::from_context(&ctx), Some(&second));
    }
}

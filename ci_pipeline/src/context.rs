//! Request-scoped carriers for the compiled pipeline.
//!
//! Mirrors the record carriers in `ci_database`: one private key per type.

use ci_library::Context;

use crate::build::Build;
use crate::container::Container;
use crate::secret::Secret;
use crate::stage::Stage;

macro_rules! carrier {
    ($value:ty, $key:ident) => {
        struct $key;

        impl $value {
            pub fn to_context(self, ctx: &Context) -> Context {
                ctx.with_value::<$key, Self>(self)
            }

            pub fn from_context(ctx: &Context) -> Option<&Self> {
                ctx.value::<$key, Self>()
            }
        }
    };
}

carrier!(Build, BuildKey);
carrier!(Container, ContainerKey);
carrier!(Secret, SecretKey);
carrier!(Stage, StageKey);

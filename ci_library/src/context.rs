//! Request-scoped value passing.
//!
//! A [`Context`] is an immutable chain of values. Each binding is keyed by a
//! marker type that only the owning module can name, so two modules can never
//! read or clobber each other's values. Binding returns a new context and
//! leaves the parent untouched; clones share the chain.
//!
//! ```
//! use ci_library::Context;
//!
//! struct RepoKey;
//!
//! let ctx = Context::new().with_value::<RepoKey, _>(String::from("octocat/hello-world"));
//! assert_eq!(ctx.value::<RepoKey, String>().map(String::as_str), Some("octocat/hello-world"));
//! assert!(ctx.value::<RepoKey, i64>().is_none());
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Entry>>,
}

struct Entry {
    key: TypeId,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Entry>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` under the marker type `K`, shadowing any earlier binding.
    pub fn with_value<K: 'static, V: Any + Send + Sync>(&self, value: V) -> Self {
        Self {
            head: Some(Arc::new(Entry {
                key: TypeId::of::<K>(),
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up the most recent binding for `K`.
    ///
    /// Returns `None` when `K` is unbound or bound to something other than `V`.
    pub fn value<K: 'static, V: Any>(&self) -> Option<&V> {
        let key = TypeId::of::<K>();
        self.entries()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.value.downcast_ref::<V>())
    }

    /// Number of bindings in the chain, shadowed ones included.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        std::iter::successors(self.head.as_deref(), |entry| entry.parent.as_deref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("bindings", &self.len()).finish()
    }
}

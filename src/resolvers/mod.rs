//! Resolvers turn a [`PlacementObject`] into the model instances that represent it.
//!
//! Each resolver encodes one resolution pattern and claims a set of object types. The
//! [`registry::ResolverRegistry`] asks them in priority order until one gives a definite answer,
//! see there for the exact protocol.

use std::collections::HashSet;

use crate::context::{ResolutionContext, ResolveError};
use crate::placement::{PlacementObject, ResolveResult};

pub mod actor;
pub mod composite;
pub mod enemy;
pub mod non_visual;
pub mod package;
pub mod registry;
pub mod variant;

#[cfg(test)]
mod tests;

/// Log target for resolution diagnostics.
pub const LOG_TARGET: &str = "placer::resolve";

pub type SupportedTypes = HashSet<String>;

pub fn supported_types<'a>(types: impl IntoIterator<Item = &'a str>) -> SupportedTypes {
    types.into_iter().map(str::to_string).collect()
}

pub trait PlacementResolver {
    fn name(&self) -> &'static str;

    /// Higher priorities are asked first.
    fn priority(&self) -> i32 {
        0
    }

    /// The object types this resolver claims. Only consulted by the default [`can_resolve`], a
    /// resolver overriding that one (like the fallback) may return an empty set.
    ///
    /// [`can_resolve`]: PlacementResolver::can_resolve
    fn supported_types(&self) -> &SupportedTypes;

    /// Dispatch asks this, never [`supported_types`](PlacementResolver::supported_types) directly.
    fn can_resolve(&self, object_type: &str) -> bool {
        self.supported_types().contains(object_type)
    }

    fn resolve(&self, ctx: &ResolutionContext<'_>, object: &PlacementObject) -> ResolveResult;
}

impl From<ResolveError> for ResolveResult {
    fn from(err: ResolveError) -> Self {
        ResolveResult::Failure(err.to_string())
    }
}

use log::trace;

use crate::context::ResolutionContext;
use crate::placement::{PlacementObject, ResolveResult};
use crate::resolvers::actor::ActorParameterResolver;
use crate::resolvers::composite::CompositeResolver;
use crate::resolvers::enemy::EnemyResolver;
use crate::resolvers::non_visual::NonVisualResolver;
use crate::resolvers::package::PackageModelResolver;
use crate::resolvers::variant::VariantResolver;
use crate::resolvers::{LOG_TARGET, PlacementResolver};

/// Holds the resolvers sorted by descending priority, plus a fallback that claims every type.
///
/// Dispatch for one object:
/// - resolvers not claiming the object's type are passed over
/// - `Skip`, `Failure` and a non-empty `Success` end the dispatch and are returned as is
/// - an empty `Success` is inconclusive, the next resolver is asked
/// - when nobody gave a definite answer, the fallback's result is returned, whatever it is
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn PlacementResolver>>,
    fallback: Box<dyn PlacementResolver>,
}

impl ResolverRegistry {
    pub fn new(fallback: Box<dyn PlacementResolver>) -> Self {
        Self {
            resolvers: Vec::new(),
            fallback,
        }
    }

    /// The built-in resolvers on top of the package model fallback.
    pub fn with_default_resolvers() -> Self {
        let mut registry = ResolverRegistry::new(Box::new(PackageModelResolver::new()));
        registry.register(Box::new(NonVisualResolver::new()));
        registry.register(Box::new(ActorParameterResolver::new()));
        registry.register(Box::new(VariantResolver::new()));
        registry.register(Box::new(EnemyResolver::new()));
        registry.register(Box::new(CompositeResolver::new()));
        registry
    }

    /// Adds a resolver. Resolvers of equal priority keep their registration order.
    pub fn register(&mut self, resolver: Box<dyn PlacementResolver>) {
        trace!(
            target: LOG_TARGET,
            "Registering resolver {} (priority {})",
            resolver.name(),
            resolver.priority()
        );
        self.resolvers.push(resolver);
        // sort_by_key is stable
        self.resolvers
            .sort_by_key(|resolver| std::cmp::Reverse(resolver.priority()));
    }

    pub fn resolve(&self, ctx: &ResolutionContext<'_>, object: &PlacementObject) -> ResolveResult {
        for resolver in self
            .resolvers
            .iter()
            .filter(|resolver| resolver.can_resolve(&object.object_type))
        {
            let result = resolver.resolve(ctx, object);
            if result.is_terminal() {
                trace!(
                    target: LOG_TARGET,
                    "{} resolved by {}",
                    object.label(),
                    resolver.name()
                );
                return result;
            }

            trace!(
                target: LOG_TARGET,
                "{} had nothing for {}",
                resolver.name(),
                object.label()
            );
        }

        trace!(
            target: LOG_TARGET,
            "{} falls back to {}",
            object.label(),
            self.fallback.name()
        );
        self.fallback.resolve(ctx, object)
    }

    /// Resolver names in the order they're asked, fallback excluded.
    pub fn dispatch_order(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|resolver| resolver.name()).collect()
    }

    pub fn resolvers(&self) -> &[Box<dyn PlacementResolver>] {
        &self.resolvers
    }

    pub fn fallback(&self) -> &dyn PlacementResolver {
        self.fallback.as_ref()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::with_default_resolvers()
    }
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("resolvers", &self.dispatch_order())
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

//! Runs the registry over every placement object of a scene.

use log::{debug, warn};

use crate::context::ResolutionContext;
use crate::placement::{PlacementObject, ResolveResult, ResolvedInstance};
use crate::resolvers::LOG_TARGET;
use crate::resolvers::registry::ResolverRegistry;


#[derive(Debug, Clone, PartialEq)]
pub struct SceneFailure {
    pub object_type: String,
    pub name: Option<String>,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SceneResolution {
    /// In the order of the objects that produced them.
    pub instances: Vec<ResolvedInstance>,
    pub skipped: usize,
    pub failures: Vec<SceneFailure>,
}

impl SceneResolution {
    /// Objects that produced at least one instance, or nothing at all without failing.
    pub fn resolved_objects(&self, object_count: usize) -> usize {
        object_count.saturating_sub(self.skipped + self.failures.len())
    }
}

/// A failing object is reported and left out, it never aborts the scene.
pub fn resolve_scene<'o>(
    registry: &ResolverRegistry,
    ctx: &ResolutionContext<'_>,
    objects: impl IntoIterator<Item = &'o PlacementObject>,
) -> SceneResolution {
    let mut resolution = SceneResolution::default();

    for object in objects {
        match registry.resolve(ctx, object) {
            ResolveResult::Skip => resolution.skipped += 1,
            ResolveResult::Success(instances) => {
                if instances.is_empty() {
                    debug!(target: LOG_TARGET, "{} resolved to nothing", object.label());
                }
                resolution.instances.extend(instances);
            }
            ResolveResult::Failure(message) => {
                warn!(target: LOG_TARGET, "Can't place {}: {}", object.label(), message);
                resolution.failures.push(SceneFailure {
                    object_type: object.object_type.clone(),
                    name: object.name.clone(),
                    message,
                });
            }
        }
    }

    debug!(
        target: LOG_TARGET,
        "Scene resolved: {} instances, {} skipped, {} failed (cached: {:?})",
        resolution.instances.len(),
        resolution.skipped,
        resolution.failures.len(),
        ctx
    );
    resolution
}

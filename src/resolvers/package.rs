use log::debug;

use crate::context::{ResolutionContext, ResolveError};
use crate::placement::{PlacementObject, ResolveResult, ResolvedInstance};
use crate::resolvers::{LOG_TARGET, PlacementResolver, SupportedTypes};

pub const MODEL_CATEGORY: &str = "model";
pub const MODEL_FILE: &str = "model";

/// Fallback: looks up the object's package through the type map and places its `model` file.
/// Claims every type through `can_resolve`, so its supported type set stays empty.
pub struct PackageModelResolver {
    types: SupportedTypes,
}

impl PackageModelResolver {
    pub fn new() -> Self {
        Self {
            types: SupportedTypes::new(),
        }
    }
}

impl Default for PackageModelResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementResolver for PackageModelResolver {
    fn name(&self) -> &'static str {
        "package-model"
    }

    fn priority(&self) -> i32 {
        -20
    }

    fn supported_types(&self) -> &SupportedTypes {
        &self.types
    }

    fn can_resolve(&self, _object_type: &str) -> bool {
        true
    }

    fn resolve(&self, ctx: &ResolutionContext<'_>, object: &PlacementObject) -> ResolveResult {
        let package = match ctx.package_for_type(&object.object_type) {
            Ok(package) => package,
            Err(err) => return err.into(),
        };

        match ctx.file_location(&package, MODEL_CATEGORY, MODEL_FILE) {
            Ok(location) => {
                ResolveResult::single(ResolvedInstance::at_object(object, Some(package.archive.clone()), location))
            }
            Err(err @ (ResolveError::CategoryNotFound { .. } | ResolveError::FileNotFound { .. })) => {
                debug!(target: LOG_TARGET, "{}: {}", object.label(), err);
                ResolveResult::empty()
            }
            Err(err) => err.into(),
        }
    }
}

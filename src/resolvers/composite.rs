use glam::Vec3;
use log::warn;

use crate::context::{ResolutionContext, ResolveError};
use crate::placement::{PlacementObject, ResolveResult, ResolvedInstance};
use crate::resolvers::package::MODEL_CATEGORY;
use crate::resolvers::{LOG_TARGET, PlacementResolver, SupportedTypes};

/// A prop made of two models: the anchor sits at the placement, the attached part at the
/// anchor's attachment node.
#[derive(Debug, Clone)]
pub struct CompositeRule {
    pub object_type: String,
    pub anchor: String,
    pub attached: String,
    pub attachment_node: String,
}

impl CompositeRule {
    pub fn new(object_type: &str, anchor: &str, attached: &str, attachment_node: &str) -> Self {
        Self {
            object_type: object_type.to_string(),
            anchor: anchor.to_string(),
            attached: attached.to_string(),
            attachment_node: attachment_node.to_string(),
        }
    }
}

pub struct CompositeResolver {
    rules: Vec<CompositeRule>,
    types: SupportedTypes,
}

impl CompositeResolver {
    pub fn new() -> Self {
        Self::with_rules(vec![
            CompositeRule::new("wapnet", "body", "net", "netpoint"),
            CompositeRule::new("bungee", "pole", "rope", "ropepoint"),
        ])
    }

    pub fn with_rules(rules: Vec<CompositeRule>) -> Self {
        let types = rules.iter().map(|rule| rule.object_type.clone()).collect();
        Self { rules, types }
    }

    fn try_resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        object: &PlacementObject,
    ) -> Result<ResolveResult, ResolveError> {
        let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.object_type == object.object_type)
        else {
            return Ok(ResolveResult::empty());
        };

        let package = ctx.package_for_type(&object.object_type)?;
        let anchor_location = ctx.file_location(&package, MODEL_CATEGORY, &rule.anchor)?;
        let attached_location = ctx.file_location(&package, MODEL_CATEGORY, &rule.attached)?;

        // A broken anchor model only costs the attached part its offset.
        let offset = ctx
            .node_offset(anchor_location, &rule.attachment_node)
            .unwrap_or_else(|err| {
                warn!(
                    target: LOG_TARGET,
                    "{}: {}, placing {} without offset",
                    object.label(),
                    err,
                    rule.attached
                );
                Vec3::ZERO
            });

        let archive_hint = Some(package.archive.clone());
        let anchor = ResolvedInstance::at_object(object, archive_hint.clone(), anchor_location);
        let mut attached = ResolvedInstance::at_object(object, archive_hint, attached_location);
        attached.position += offset;

        Ok(ResolveResult::Success(vec![anchor, attached]))
    }
}

impl Default for CompositeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementResolver for CompositeResolver {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn supported_types(&self) -> &SupportedTypes {
        &self.types
    }

    fn resolve(&self, ctx: &ResolutionContext<'_>, object: &PlacementObject) -> ResolveResult {
        self.try_resolve(ctx, object)
            .unwrap_or_else(ResolveResult::from)
    }
}

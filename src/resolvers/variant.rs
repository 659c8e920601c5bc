use crate::context::{ResolutionContext, ResolveError};
use crate::placement::{PlacementObject, ResolveResult, ResolvedInstance};
use crate::resolvers::package::MODEL_CATEGORY;
use crate::resolvers::{PlacementResolver, SupportedTypes};

/// Props whose model depends on an integer parameter, e.g. how far a pillar has crumbled.
/// Variants are 1-based: variant 1 is the first candidate.
#[derive(Debug, Clone)]
pub struct VariantRule {
    pub object_type: String,
    pub parameter_index: usize,
    pub candidates: Vec<String>,
}

impl VariantRule {
    pub fn new(object_type: &str, candidates: &[&str]) -> Self {
        Self {
            object_type: object_type.to_string(),
            parameter_index: 0,
            candidates: candidates.iter().map(|name| name.to_string()).collect(),
        }
    }
}

const BUILTIN_RULES: &[(&str, &[&str])] = &[
    ("brokenpillar", &["pillar_full", "pillar_half", "pillar_base"]),
    ("crumblingwall", &["wall_stage1", "wall_stage2", "wall_stage3"]),
    ("lamp", &["lamp_a", "lamp_b"]),
];

pub struct VariantResolver {
    rules: Vec<VariantRule>,
    types: SupportedTypes,
}

impl VariantResolver {
    pub fn new() -> Self {
        Self::with_rules(
            BUILTIN_RULES
                .iter()
                .map(|(object_type, candidates)| VariantRule::new(object_type, candidates))
                .collect(),
        )
    }

    pub fn with_rules(rules: Vec<VariantRule>) -> Self {
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
        let variant = object.variant_parameter(rule.parameter_index)?;
        let location = ctx.variant_location(&package, MODEL_CATEGORY, rule.candidates.as_slice(), variant)?;

        Ok(ResolveResult::single(ResolvedInstance::at_object(
            object,
            Some(package.archive.clone()),
            location,
        )))
    }
}

impl Default for VariantResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementResolver for VariantResolver {
    fn name(&self) -> &'static str {
        "variant"
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

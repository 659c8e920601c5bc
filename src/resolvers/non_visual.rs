use crate::context::ResolutionContext;
use crate::placement::{PlacementObject, ResolveResult};
use crate::resolvers::{PlacementResolver, SupportedTypes, supported_types};

/// Types that only drive gameplay (triggers, cameras, sound, spawn points) and never render.
pub const NON_VISUAL_TYPES: &[&str] = &[
    "eventbox",
    "eventbox_once",
    "camerapan",
    "cameraparallel",
    "camerapoint",
    "cameracollision",
    "soundsource",
    "ambientsound",
    "particle",
    "player_start",
    "player_start2",
    "playernpc",
    "checkpoint",
    "windbox",
    "shadowbox",
    "searchlight_area",
    "timer",
    "enemy_spawn_area",
];

pub struct NonVisualResolver {
    types: SupportedTypes,
}

impl NonVisualResolver {
    pub fn new() -> Self {
        Self::with_types(NON_VISUAL_TYPES)
    }

    pub fn with_types(types: &[&str]) -> Self {
        Self {
            types: supported_types(types.iter().copied()),
        }
    }
}

impl Default for NonVisualResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementResolver for NonVisualResolver {
    fn name(&self) -> &'static str {
        "non-visual"
    }

    fn priority(&self) -> i32 {
        20
    }

    fn supported_types(&self) -> &SupportedTypes {
        &self.types
    }

    fn resolve(&self, _ctx: &ResolutionContext<'_>, _object: &PlacementObject) -> ResolveResult {
        ResolveResult::Skip
    }
}

use std::collections::HashMap;

use log::trace;

use crate::context::ResolutionContext;
use crate::placement::{PlacementObject, ResolveResult, ResolvedInstance};
use crate::resolvers::{LOG_TARGET, PlacementResolver, SupportedTypes, supported_types};

pub const ENEMY_ARCHIVE: &str = "enemy";
const ENEMY_TYPES: &[&str] = &["enemy", "enemyextra"];

/// Enemy kinds sharing the model folder of their base kind.
const FOLDER_ALIASES: &[(&str, &str)] = &[
    ("eGunnerTrooper", "gunner"),
    ("eGunnerFly", "gunner"),
    ("eGunnerLauncher", "gunner"),
    ("eStingerLancer", "stinger"),
    ("eStingerSaber", "stinger"),
    ("eBusterFly", "buster"),
    ("eSearcherHammer", "searcher"),
    ("eLinerCannon", "liner"),
    ("eCerberusAdult", "cerberus"),
    ("eFirstIblis", "iblis"),
];

/// Enemy kinds whose model file doesn't follow `en_<folder>`.
const FILE_ALIASES: &[(&str, &str)] = &[
    ("eGunnerTrooper", "en_gunner_trooper"),
    ("eGunnerFly", "en_gunner_fly"),
    ("eGunnerLauncher", "en_gunner_launcher"),
    ("eStingerLancer", "en_stinger_lancer"),
    ("eStingerSaber", "en_stinger_saber"),
    ("eBusterFly", "en_buster_fly"),
    ("eSearcherHammer", "en_searcher_hammer"),
    ("eLinerCannon", "en_liner_cannon"),
    ("eCerberusAdult", "en_cerberus_adult"),
    ("eFirstIblis", "boss_iblis1"),
];

fn alias_map(aliases: &[(&str, &str)]) -> HashMap<String, String> {
    aliases
        .iter()
        .map(|&(enemy, alias)| (enemy.to_string(), alias.to_string()))
        .collect()
}

/// Enemies are placed by a logical name (`eCerberus`) instead of through a package; the model
/// path is derived from the name by convention.
pub struct EnemyResolver {
    types: SupportedTypes,
    folder_aliases: HashMap<String, String>,
    file_aliases: HashMap<String, String>,
    /// index of the enemy name among the placement parameters
    name_parameter: usize,
}

impl EnemyResolver {
    pub fn new() -> Self {
        Self::with_rules(ENEMY_TYPES, FOLDER_ALIASES, FILE_ALIASES, 0)
    }

    pub fn with_rules(
        types: &[&str],
        folder_aliases: &[(&str, &str)],
        file_aliases: &[(&str, &str)],
        name_parameter: usize,
    ) -> Self {
        Self {
            types: supported_types(types.iter().copied()),
            folder_aliases: alias_map(folder_aliases),
            file_aliases: alias_map(file_aliases),
            name_parameter,
        }
    }

    /// `eCerberus` -> `cerberus`
    fn base_name(enemy: &str) -> String {
        let stripped = match enemy.strip_prefix('e') {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => rest,
            _ => enemy,
        };
        stripped.to_ascii_lowercase()
    }

    pub fn model_path(&self, enemy: &str) -> String {
        let folder = self
            .folder_aliases
            .get(enemy)
            .cloned()
            .unwrap_or_else(|| EnemyResolver::base_name(enemy));

        let file = self
            .file_aliases
            .get(enemy)
            .cloned()
            .unwrap_or_else(|| format!("en_{}", folder));

        format!("enemy/{}/{}.xno", folder, file)
    }
}

impl Default for EnemyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementResolver for EnemyResolver {
    fn name(&self) -> &'static str {
        "enemy"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn supported_types(&self) -> &SupportedTypes {
        &self.types
    }

    fn resolve(&self, _ctx: &ResolutionContext<'_>, object: &PlacementObject) -> ResolveResult {
        let enemy = match object.str_parameter(self.name_parameter) {
            Ok(enemy) if !enemy.is_empty() => enemy,
            Ok(_) => return ResolveResult::failure(format!("{}: empty enemy name", object.label())),
            Err(err) => return ResolveResult::failure(format!("{}: no enemy name: {}", object.label(), err)),
        };

        let path = self.model_path(enemy);
        trace!(target: LOG_TARGET, "Enemy {} -> {}", enemy, path);
        ResolveResult::single(ResolvedInstance::at_object(
            object,
            Some(ENEMY_ARCHIVE.to_string()),
            path,
        ))
    }
}

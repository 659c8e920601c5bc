use std::collections::HashMap;

use log::trace;

use crate::context::{ResolutionContext, ResolveError};
use crate::placement::{PlacementObject, ResolveResult, ResolvedInstance};
use crate::resolvers::{LOG_TARGET, PlacementResolver, SupportedTypes};

pub const OBJECT_NAME_PARAMETER: &str = "objectName";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterTable {
    Physics,
    Path,
}

impl ParameterTable {
    fn label(self) -> &'static str {
        match self {
            ParameterTable::Physics => "physics",
            ParameterTable::Path => "path",
        }
    }
}

const BUILTIN_TYPES: &[(&str, ParameterTable)] = &[
    ("objectphysics", ParameterTable::Physics),
    ("objectphysics_item", ParameterTable::Physics),
    ("pathobj", ParameterTable::Path),
    ("common_path_obj", ParameterTable::Path),
];

/// Generic objects that name their model indirectly: the actor definition of the type tells
/// which parameter holds the object name, and the name is a key into the physics or path
/// parameter table.
pub struct ActorParameterResolver {
    tables: HashMap<String, ParameterTable>,
    types: SupportedTypes,
}

impl ActorParameterResolver {
    pub fn new() -> Self {
        Self::with_types(BUILTIN_TYPES)
    }

    pub fn with_types(types: &[(&str, ParameterTable)]) -> Self {
        let tables: HashMap<String, ParameterTable> = types
            .iter()
            .map(|&(object_type, table)| (object_type.to_string(), table))
            .collect();
        let types = tables.keys().cloned().collect();
        Self { tables, types }
    }

    fn try_resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        object: &PlacementObject,
    ) -> Result<ResolveResult, ResolveError> {
        let Some(&table) = self.tables.get(&object.object_type) else {
            return Ok(ResolveResult::empty());
        };

        let Some(index) = ctx
            .tables()
            .actor_parameter_index(&object.object_type, OBJECT_NAME_PARAMETER)
        else {
            trace!(
                target: LOG_TARGET,
                "No {} in the actor definition of {}",
                OBJECT_NAME_PARAMETER,
                object.object_type
            );
            return Ok(ResolveResult::empty());
        };

        let name = object.str_parameter(index)?;
        let model = match table {
            ParameterTable::Physics => ctx.tables().physics_model(name),
            ParameterTable::Path => ctx.tables().path_model(name),
        }
        .ok_or_else(|| ResolveError::TableEntryNotFound {
            table: table.label(),
            name: name.to_string(),
        })?;

        Ok(ResolveResult::single(ResolvedInstance::at_object(object, None, model)))
    }
}

impl Default for ActorParameterResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementResolver for ActorParameterResolver {
    fn name(&self) -> &'static str {
        "actor-parameter"
    }

    fn priority(&self) -> i32 {
        20
    }

    fn supported_types(&self) -> &SupportedTypes {
        &self.types
    }

    fn resolve(&self, ctx: &ResolutionContext<'_>, object: &PlacementObject) -> ResolveResult {
        self.try_resolve(ctx, object)
            .unwrap_or_else(ResolveResult::from)
    }
}

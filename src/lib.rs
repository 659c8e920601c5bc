//! Resolves the objects placed in a game scene into the model instances that represent them.
//!
//! A [`scene::resolve_scene`] call runs the [`resolvers::registry::ResolverRegistry`] over every
//! [`placement::PlacementObject`]; resolvers consult the archives through the decode-once caches
//! of a [`context::ResolutionContext`] and the [`tables::ReferenceTables`].

pub mod asset_graph;
pub mod context;
pub mod io;
pub mod placement;
pub mod resolvers;
pub mod scene;
pub mod tables;

//! The data flowing through resolution: [`PlacementObject`]s come in (decoded from a set file),
//! [`ResolvedInstance`]s go out to the renderer, and every resolver invocation reports a
//! [`ResolveResult`].

use glam::{Quat, Vec3};
use placer_files::set::types::{SetObject, SetValue};
use thiserror::Error;


/// A single placement parameter value. Set files store values by position and with their own
/// type, so there's no implicit conversion between the variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i32),
    Float(f32),
    String(String),
}

impl ParamValue {
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::String(_) => "string",
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ParamValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            ParamValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<SetValue> for ParamValue {
    fn from(value: SetValue) -> Self {
        match value {
            SetValue::Int(value) => ParamValue::Int(value),
            SetValue::Float(value) => ParamValue::Float(value),
            SetValue::String(value) => ParamValue::String(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParamValue,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Missing parameter #{index}")]
    Missing { index: usize },

    #[error("Parameter #{index} is a {found}, expected a {expected}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// An object placed in a scene: its type tag, ordered parameters and world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementObject {
    pub object_type: String,
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub position: Vec3,
    pub rotation: Quat,
}

impl PlacementObject {
    pub fn new(object_type: impl Into<String>, position: Vec3, rotation: Quat) -> Self {
        Self {
            object_type: object_type.into(),
            name: None,
            parameters: Vec::new(),
            position,
            rotation,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            value,
        });
        self
    }

    pub fn parameter(&self, index: usize) -> Option<&ParamValue> {
        self.parameters.get(index).map(|param| &param.value)
    }

    pub fn int_parameter(&self, index: usize) -> Result<i32, ParameterError> {
        let value = self.parameter(index).ok_or(ParameterError::Missing { index })?;
        value.as_int().ok_or(ParameterError::TypeMismatch {
            index,
            expected: "int",
            found: value.kind(),
        })
    }

    pub fn float_parameter(&self, index: usize) -> Result<f32, ParameterError> {
        let value = self.parameter(index).ok_or(ParameterError::Missing { index })?;
        value.as_float().ok_or(ParameterError::TypeMismatch {
            index,
            expected: "float",
            found: value.kind(),
        })
    }

    pub fn str_parameter(&self, index: usize) -> Result<&str, ParameterError> {
        let value = self.parameter(index).ok_or(ParameterError::Missing { index })?;
        value.as_str().ok_or(ParameterError::TypeMismatch {
            index,
            expected: "string",
            found: value.kind(),
        })
    }

    /// Variant selectors are optional in set files; an absent one reads as variant 0 (which no
    /// variant table contains, variants count from 1).
    pub fn variant_parameter(&self, index: usize) -> Result<i32, ParameterError> {
        match self.int_parameter(index) {
            Err(ParameterError::Missing { .. }) => Ok(0),
            other => other,
        }
    }

    /// Human readable label for log messages.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", name, self.object_type),
            None => self.object_type.clone(),
        }
    }
}

impl From<SetObject> for PlacementObject {
    fn from(object: SetObject) -> Self {
        let position = Vec3::new(object.position.x, object.position.y, object.position.z);
        let rotation = Quat::from_xyzw(
            object.rotation.x,
            object.rotation.y,
            object.rotation.z,
            object.rotation.w,
        );

        Self {
            object_type: object.object_type,
            name: object.name,
            parameters: object
                .parameters
                .into_iter()
                .map(|param| Parameter {
                    name: param.name,
                    value: param.value.into(),
                })
                .collect(),
            position,
            // set files are hand edited at times
            rotation: if rotation.length_squared() > 0.0 {
                rotation.normalize()
            } else {
                Quat::IDENTITY
            },
        }
    }
}

/// One model to draw: which file, from which archive, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInstance {
    pub archive_hint: Option<String>,
    pub model_path: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub visible: bool,
}

impl ResolvedInstance {
    /// An instance of `model_path` at the object's own transform.
    pub fn at_object(object: &PlacementObject, archive_hint: Option<String>, model_path: impl Into<String>) -> Self {
        Self {
            archive_hint,
            model_path: model_path.into(),
            position: object.position,
            rotation: object.rotation,
            visible: true,
        }
    }
}

/// Outcome of a single resolver, or of the whole dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveResult {
    /// Known type that intentionally has nothing to draw.
    Skip,
    /// An empty instance list means "nothing to contribute" and lets dispatch continue.
    Success(Vec<ResolvedInstance>),
    Failure(String),
}

impl ResolveResult {
    pub fn empty() -> Self {
        ResolveResult::Success(Vec::new())
    }

    pub fn single(instance: ResolvedInstance) -> Self {
        ResolveResult::Success(vec![instance])
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ResolveResult::Failure(message.into())
    }

    /// Whether dispatch stops at this result.
    pub fn is_terminal(&self) -> bool {
        match self {
            ResolveResult::Skip | ResolveResult::Failure(_) => true,
            ResolveResult::Success(instances) => !instances.is_empty(),
        }
    }

    pub fn instances(&self) -> &[ResolvedInstance] {
        match self {
            ResolveResult::Success(instances) => instances,
            _ => &[],
        }
    }
}

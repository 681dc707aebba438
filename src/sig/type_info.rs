//! Type and callable descriptions supplied by the host.

use smol_str::SmolStr;

/// Minimal description of a type for display purposes.
///
/// The host resolves the display name before building a `TypeInfo`;
/// `name` is already the simplest form the host wants shown, and this
/// crate never looks a name up anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    name: SmolStr,
    component: Option<Box<TypeInfo>>,
}

impl TypeInfo {
    /// A plain (non-array) type with the given display name.
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            component: None,
        }
    }

    /// An array whose elements are `component`.
    pub fn array_of(component: TypeInfo) -> Self {
        Self {
            name: component.name.clone(),
            component: Some(Box::new(component)),
        }
    }

    /// The display name as supplied by the host.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_array(&self) -> bool {
        self.component.is_some()
    }

    /// The element type of an array, `None` for plain types.
    pub fn component(&self) -> Option<&TypeInfo> {
        self.component.as_deref()
    }

    /// The name rendering starts from: the element name for arrays,
    /// the type's own name otherwise.
    pub(crate) fn base_name(&self) -> &str {
        self.component
            .as_deref()
            .map_or(self.name.as_str(), |c| c.name.as_str())
    }
}

/// Description of a callable: name, return type, ordered parameter
/// types.
///
/// A `return_type` of `None` is the void marker and renders as the
/// literal `void`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub name: SmolStr,
    pub return_type: Option<TypeInfo>,
    pub parameters: Vec<TypeInfo>,
}

impl Callable {
    pub fn new(
        name: impl Into<SmolStr>,
        return_type: Option<TypeInfo>,
        parameters: Vec<TypeInfo>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters,
        }
    }
}

//! Field descriptors and the per-model-type schema registry.
//!
//! The reference design discovered member metadata by runtime reflection on
//! every use. Here a model declares its schema once through [`EdiModel`] and
//! a [`SchemaBuilder`]; the built [`Schema`] is memoized per type for the
//! process lifetime, so descriptors are constructed exactly once and are
//! immutable thereafter.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use crate::path::EdiPath;
use crate::picture::PictureSpec;
use crate::structure::Declaration;

/// Per-field conversion metadata, fixed at schema-load time.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    mandatory: bool,
    description: Option<String>,
    date_format: Option<String>,
    path: EdiPath,
    format: PictureSpec,
}

impl FieldDescriptor {
    pub fn new(path: EdiPath, format: PictureSpec) -> Self {
        FieldDescriptor {
            mandatory: false,
            description: None,
            date_format: None,
            path,
            format,
        }
    }

    /// Mark the field as required within its segment or element.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Attach a human-readable description. Reference/documentation only.
    pub fn described(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Date pattern for date/time fields, e.g. `yyyyMMdd`.
    pub fn date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    pub fn path(&self) -> &EdiPath {
        &self.path
    }

    pub fn format(&self) -> &PictureSpec {
        &self.format
    }
}

/// One model member and its ordered declaration set.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDescriptor {
    name: String,
    declarations: Vec<Declaration>,
}

impl MemberDescriptor {
    pub fn new(name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        MemberDescriptor {
            name: name.into(),
            declarations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declarations in their declared order; the order matters for
    /// structural role resolution.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

/// The harvested descriptor set for one model type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    members: Vec<MemberDescriptor>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name() == name)
    }
}

/// Explicit registration phase replacing the reference's reflection harvest.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    members: Vec<MemberDescriptor>,
}

impl SchemaBuilder {
    pub fn member(
        mut self,
        name: impl Into<String>,
        declarations: Vec<Declaration>,
    ) -> Self {
        self.members.push(MemberDescriptor::new(name, declarations));
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            members: self.members,
        }
    }
}

/// A model type with a declarable schema. `schema()` must be pure: racing
/// callers may each invoke it, and the registry keeps the first result to
/// land.
pub trait EdiModel: 'static {
    fn schema() -> Schema;
}

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, Arc<Schema>>>> =
    LazyLock::new(Default::default);

/// The memoized schema for `T`. Built at most once per type in the common
/// path; read-mostly afterwards, never evicted.
pub fn schema_of<T: EdiModel>() -> Arc<Schema> {
    let id = TypeId::of::<T>();
    {
        let map = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
        if let Some(schema) = map.get(&id) {
            return Arc::clone(schema);
        }
    }
    let built = Arc::new(T::schema());
    let mut map = REGISTRY.write().unwrap_or_else(|e| e.into_inner());
    Arc::clone(map.entry(id).or_insert(built))
}

//! Structural role resolution and child-role eligibility.

use crate::descriptor::FieldDescriptor;
use crate::path::EdiPath;

/// The structural role a model member plays within an interchange document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralRole {
    /// No structural declaration present.
    None,
    /// The document root; never declared on a member.
    Interchange,
    Group,
    Message,
    SegmentGroup,
    Segment,
    Element,
}

/// One declared metadata item on a model member. A member may carry any
/// number of declarations; at most one structural declaration determines its
/// role, and non-structural declarations (values, paths) coexist freely.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Group,
    Message,
    /// A repeating segment cluster, opened by any of the trigger segment
    /// codes in order of declaration.
    SegmentGroup { triggers: Vec<String> },
    Segment,
    Element,
    /// A scalar field with conversion metadata.
    Value(FieldDescriptor),
    /// A bare structural address without conversion metadata.
    Path(EdiPath),
}

impl Declaration {
    /// The structural role this declaration confers, if it is structural.
    pub fn structural_role(&self) -> Option<StructuralRole> {
        match self {
            Declaration::Group => Some(StructuralRole::Group),
            Declaration::Message => Some(StructuralRole::Message),
            Declaration::SegmentGroup { .. } => Some(StructuralRole::SegmentGroup),
            Declaration::Segment => Some(StructuralRole::Segment),
            Declaration::Element => Some(StructuralRole::Element),
            Declaration::Value(_) | Declaration::Path(_) => None,
        }
    }
}

/// Resolve a member's role from its ordered declaration set: the first
/// structural declaration wins, non-structural declarations are skipped, and
/// a member with no structural declaration has role
/// [`StructuralRole::None`].
pub fn resolve_role(declarations: &[Declaration]) -> StructuralRole {
    declarations
        .iter()
        .find_map(Declaration::structural_role)
        .unwrap_or(StructuralRole::None)
}

/// Declared child kinds that may legally appear in the nested collection of
/// a container with the given role.
pub fn eligible_child_roles(container: StructuralRole) -> &'static [StructuralRole] {
    match container {
        StructuralRole::None | StructuralRole::Interchange => &[],
        StructuralRole::Group => &[StructuralRole::Group],
        StructuralRole::Message => &[StructuralRole::Message],
        StructuralRole::SegmentGroup => &[StructuralRole::SegmentGroup],
        StructuralRole::Segment => &[StructuralRole::Segment, StructuralRole::SegmentGroup],
        StructuralRole::Element => &[StructuralRole::Element],
    }
}

/// Whether a member with the given declarations may nest under a container
/// of the given role. The check is over declared kinds, not the member's
/// resolved role: any eligible structural declaration qualifies it.
pub fn is_eligible_child(container: StructuralRole, declarations: &[Declaration]) -> bool {
    let allowed = eligible_child_roles(container);
    declarations
        .iter()
        .filter_map(Declaration::structural_role)
        .any(|role| allowed.contains(&role))
}

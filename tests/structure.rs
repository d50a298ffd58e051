//! Structural role resolution, child eligibility, paths, token predicates,
//! and the schema registry.

use edipict::{
    eligible_child_roles, is_eligible_child, resolve_role, schema_of, Declaration, EdiModel,
    EdiPath, FieldDescriptor, PictureSpec, Schema, StructuralRole, TokenKind,
};

fn value_declaration() -> Declaration {
    let descriptor = FieldDescriptor::new(
        "BGM/0/0".parse().expect("path"),
        PictureSpec::parse("X(3)").expect("spec"),
    )
    .described("Document name code");
    Declaration::Value(descriptor)
}

// ==================== Role resolution ====================

#[test]
fn first_structural_declaration_wins() {
    // Declared order: a value first, then SegmentGroup, then Segment. The
    // first *structural* declaration is the SegmentGroup, so that is the
    // role, regardless of the later Segment declaration.
    let declarations = vec![
        value_declaration(),
        Declaration::SegmentGroup {
            triggers: vec!["NAD".into(), "CTA".into()],
        },
        Declaration::Segment,
    ];
    assert_eq!(resolve_role(&declarations), StructuralRole::SegmentGroup);
}

#[test]
fn no_structural_declaration_resolves_to_none() {
    assert_eq!(resolve_role(&[]), StructuralRole::None);
    assert_eq!(resolve_role(&[value_declaration()]), StructuralRole::None);
}

#[test]
fn each_structural_kind_maps_to_its_role() {
    assert_eq!(resolve_role(&[Declaration::Group]), StructuralRole::Group);
    assert_eq!(resolve_role(&[Declaration::Message]), StructuralRole::Message);
    assert_eq!(resolve_role(&[Declaration::Segment]), StructuralRole::Segment);
    assert_eq!(resolve_role(&[Declaration::Element]), StructuralRole::Element);
}

// ==================== Child eligibility ====================

#[test]
fn segment_container_accepts_segments_and_groups() {
    assert!(is_eligible_child(StructuralRole::Segment, &[Declaration::Segment]));
    assert!(is_eligible_child(
        StructuralRole::Segment,
        &[Declaration::SegmentGroup { triggers: vec!["RFF".into()] }]
    ));
    assert!(!is_eligible_child(StructuralRole::Segment, &[Declaration::Element]));
    assert!(!is_eligible_child(StructuralRole::Segment, &[Declaration::Message]));
    assert!(!is_eligible_child(StructuralRole::Segment, &[Declaration::Group]));
}

#[test]
fn homogeneous_containers_accept_their_own_kind() {
    assert!(is_eligible_child(StructuralRole::Group, &[Declaration::Group]));
    assert!(is_eligible_child(StructuralRole::Message, &[Declaration::Message]));
    assert!(is_eligible_child(StructuralRole::Element, &[Declaration::Element]));
    assert!(!is_eligible_child(StructuralRole::Element, &[Declaration::Segment]));
}

#[test]
fn root_roles_accept_nothing() {
    assert!(eligible_child_roles(StructuralRole::None).is_empty());
    assert!(eligible_child_roles(StructuralRole::Interchange).is_empty());
    assert!(!is_eligible_child(StructuralRole::Interchange, &[Declaration::Group]));
}

#[test]
fn non_structural_declarations_never_qualify() {
    assert!(!is_eligible_child(StructuralRole::Segment, &[value_declaration()]));
}

#[test]
fn eligibility_table_shape() {
    assert_eq!(
        eligible_child_roles(StructuralRole::Segment),
        &[StructuralRole::Segment, StructuralRole::SegmentGroup]
    );
    assert_eq!(
        eligible_child_roles(StructuralRole::SegmentGroup),
        &[StructuralRole::SegmentGroup]
    );
}

// ==================== Paths ====================

#[test]
fn path_parse_full_form() {
    let path: EdiPath = "UNH/1/4".parse().expect("path");
    assert_eq!(path.segment(), "UNH");
    assert_eq!(path.element(), 1);
    assert_eq!(path.component(), 4);
    assert_eq!(path.to_string(), "UNH/1/4");
}

#[test]
fn path_missing_indices_default_to_zero() {
    let path: EdiPath = "BGM".parse().expect("path");
    assert_eq!(path, EdiPath::new("BGM", 0, 0));
    let path: EdiPath = "BGM/2".parse().expect("path");
    assert_eq!(path, EdiPath::new("BGM", 2, 0));
}

#[test]
fn path_rejects_malformed_text() {
    assert!("".parse::<EdiPath>().is_err());
    assert!("/1/2".parse::<EdiPath>().is_err());
    assert!("UNH/x/0".parse::<EdiPath>().is_err());
    assert!("UNH/1/2/3".parse::<EdiPath>().is_err());
    assert!("U N H".parse::<EdiPath>().is_err());
}

// ==================== Token predicates ====================

#[test]
fn start_tokens() {
    assert!(TokenKind::SegmentStart.is_start_token());
    assert!(TokenKind::ElementStart.is_start_token());
    assert!(TokenKind::ComponentStart.is_start_token());
    assert!(!TokenKind::SegmentName.is_start_token());
    assert!(!TokenKind::Integer.is_start_token());
    assert!(!TokenKind::None.is_start_token());
}

#[test]
fn primitive_tokens() {
    for kind in [
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Boolean,
        TokenKind::Null,
        TokenKind::Date,
    ] {
        assert!(kind.is_primitive_token(), "{kind:?} should be primitive");
        assert!(!kind.is_start_token(), "{kind:?} should not be a start");
    }
    assert!(!TokenKind::SegmentStart.is_primitive_token());
    assert!(!TokenKind::None.is_primitive_token());
}

// ==================== Schema registry ====================

struct Invoice;

impl EdiModel for Invoice {
    fn schema() -> Schema {
        Schema::builder()
            .member(
                "bgm",
                vec![
                    Declaration::Segment,
                    Declaration::Path("BGM".parse().expect("path")),
                ],
            )
            .member("parties", vec![Declaration::SegmentGroup {
                triggers: vec!["NAD".into()],
            }])
            .member("document_number", vec![value_declaration()])
            .build()
    }
}

#[test]
fn schema_is_memoized_per_type() {
    let first = schema_of::<Invoice>();
    let second = schema_of::<Invoice>();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(first.members().len(), 3);
}

#[test]
fn schema_members_resolve_roles() {
    let schema = schema_of::<Invoice>();
    let bgm = schema.member("bgm").expect("member");
    assert_eq!(resolve_role(bgm.declarations()), StructuralRole::Segment);
    let field = schema.member("document_number").expect("member");
    assert_eq!(resolve_role(field.declarations()), StructuralRole::None);
}

#[test]
fn descriptor_accessors() {
    let descriptor = FieldDescriptor::new(
        "DTM/0/1".parse().expect("path"),
        PictureSpec::parse("9(8)").expect("spec"),
    )
    .mandatory()
    .described("Message date")
    .date_pattern("yyyyMMdd");
    assert!(descriptor.is_mandatory());
    assert_eq!(descriptor.description(), Some("Message date"));
    assert_eq!(descriptor.date_format(), Some("yyyyMMdd"));
    assert_eq!(descriptor.path().segment(), "DTM");
    assert_eq!(descriptor.format().scale(), 8);
}

//! The three annotated types from the generator's example package.

use enumgen_core::{
    ArtifactKind, EnumConfig, EnumRepr, EnumSpec, GenerationPlan, SqlInput, SqlOutput, generate,
};

fn status() -> GenerationPlan {
    let spec = EnumSpec::from_comments(
        "AnnotationStatus",
        EnumRepr::String,
        [r#"// @marshal:true @sql:false @prefix:"My""#, "// ENUM(pending, running, completed, failed)"],
    );
    generate(&spec, &EnumConfig::default()).expect("status plans")
}

fn color() -> GenerationPlan {
    let spec = EnumSpec::from_comments(
        "AnnotationColor",
        EnumRepr::String,
        ["// @noprefix @nocase", "// ENUM(annotation_red, annotation_green, annotation_blue)"],
    );
    generate(&spec, &EnumConfig::default()).expect("color plans")
}

fn number() -> GenerationPlan {
    let spec = EnumSpec::from_comments(
        "AnnotationNumber",
        EnumRepr::Integer,
        ["// @marshal @sql @marshal", "// ENUM(one, two, three)"],
    );
    generate(&spec, &EnumConfig::default()).expect("number plans")
}

#[test]
fn status_uses_custom_prefix() {
    let plan = status();
    let names: Vec<_> = plan.value_names().collect();
    assert_eq!(
        names,
        vec![
            ("pending", "MyAnnotationStatusPending"),
            ("running", "MyAnnotationStatusRunning"),
            ("completed", "MyAnnotationStatusCompleted"),
            ("failed", "MyAnnotationStatusFailed"),
        ]
    );
}

#[test]
fn status_marshals_but_has_no_sql() {
    let plan = status();
    assert!(plan.has(ArtifactKind::MarshalText));
    assert!(plan.has(ArtifactKind::UnmarshalText));
    assert!(plan.has(ArtifactKind::AppendText));
    assert!(!plan.has(ArtifactKind::SqlScan));
    assert!(!plan.has(ArtifactKind::SqlValue));

    assert_eq!(plan.marshal(0), Some("pending"));
    assert_eq!(plan.unmarshal("pending").unwrap().unwrap().identifier, "MyAnnotationStatusPending");
    assert_eq!(plan.stringify(1), Some("running"));
}

#[test]
fn status_parse_errors_name_the_type() {
    let plan = status();
    assert!(plan.is_valid("pending"));
    assert!(!plan.is_valid("invalid"));
    assert_eq!(plan.parse("invalid").unwrap_err().to_string(), "invalid is not a valid AnnotationStatus");
}

#[test]
fn color_has_no_prefix_and_ignores_case() {
    let plan = color();
    assert_eq!(plan.identifier("annotation_red"), Some("AnnotationRed"));
    assert_eq!(plan.identifier("annotation_green"), Some("AnnotationGreen"));
    assert_eq!(plan.identifier("annotation_blue"), Some("AnnotationBlue"));

    for input in ["ANNOTATION_RED", "annotation_red", "AnNoTaTiOn_ReD"] {
        assert_eq!(plan.parse(input).unwrap().literal, "annotation_red", "{input}");
    }
    assert_eq!(plan.parse("invalid").unwrap_err().to_string(), "invalid is not a valid AnnotationColor");
    assert_eq!(plan.stringify(0), Some("annotation_red"));
    assert!(!plan.has(ArtifactKind::MarshalText));
}

#[test]
fn number_has_ordinals_and_sql() {
    let plan = number();
    let ordinals: Vec<_> = plan.values().iter().map(|v| (v.identifier.as_str(), v.ordinal)).collect();
    assert_eq!(
        ordinals,
        vec![("AnnotationNumberOne", 0), ("AnnotationNumberTwo", 1), ("AnnotationNumberThree", 2)]
    );

    assert_eq!(plan.scan(SqlInput::Text("two")).unwrap().unwrap().ordinal, 1);
    assert_eq!(plan.scan(SqlInput::Ordinal(1)).unwrap().unwrap().literal, "two");
    assert_eq!(plan.sql_value(0), Some(SqlOutput::Text("one")));
    assert_eq!(plan.marshal(2), Some("three"));
    assert!(!plan.is_valid("999"));
}

#[test]
fn every_literal_round_trips() {
    for plan in [status(), color(), number()] {
        for value in plan.values() {
            let text = plan.stringify(value.ordinal).unwrap();
            assert_eq!(plan.parse(text).unwrap(), value, "{}", plan.type_name());
        }
    }
}

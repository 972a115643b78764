use enumgen_core::{
    ArtifactKind, ConfigSlot, EnumConfig, EnumRepr, EnumSpec, GenerateError, PlanError, SqlInput,
    SqlOutput, WireKind, generate, resolve,
};

fn global(directives: &[&str]) -> EnumConfig {
    EnumConfig::from_annotations(directives).expect("valid global directives")
}

fn spec(directives: &[&str]) -> EnumSpec {
    EnumSpec::new("Shade", EnumRepr::Integer, ["light", "dark_grey"]).with_annotations(directives.iter().copied())
}

#[test]
fn explicit_false_overrides_global_true() {
    let defaults = global(&["@marshal"]);

    let overridden = generate(&spec(&["@marshal:false"]), &defaults).unwrap();
    assert!(!overridden.has(ArtifactKind::MarshalText));

    let inherited = generate(&spec(&[]), &defaults).unwrap();
    assert!(inherited.has(ArtifactKind::MarshalText));
}

#[test]
fn unset_everywhere_uses_builtin_default() {
    let resolved = resolve(&EnumConfig::default(), &EnumConfig::default());
    assert!(resolved.is_empty());

    let plan = generate(&spec(&[]), &EnumConfig::default()).unwrap();
    let kinds: Vec<_> = plan.artifacts().kinds().collect();
    assert_eq!(kinds, vec![ArtifactKind::Stringify, ArtifactKind::Parse, ArtifactKind::IsValid]);
}

#[test]
fn global_prefix_applies_until_overridden() {
    let defaults = global(&["@prefix:Acme"]);

    let plan = generate(&spec(&[]), &defaults).unwrap();
    assert_eq!(plan.identifier("dark_grey"), Some("AcmeShadeDarkGrey"));

    let plan = generate(&spec(&["@prefix:\"\""]), &defaults).unwrap();
    assert_eq!(plan.identifier("dark_grey"), Some("ShadeDarkGrey"));
}

#[test]
fn resolved_config_is_recorded_on_the_plan() {
    let defaults = global(&["@names", "@values:false"]);
    let plan = generate(&spec(&["@values"]), &defaults).unwrap();

    assert_eq!(plan.resolved().names, ConfigSlot::new(true));
    assert_eq!(plan.resolved().values, ConfigSlot::new(true));
    assert!(!plan.resolved().ptr.is_set());
    assert!(plan.has(ArtifactKind::Names) && plan.has(ArtifactKind::Values));
}

#[test]
fn deserialized_nocase_default_publishes_lower_lookup() {
    let defaults: EnumConfig = serde_json::from_str(r#"{ "nocase": true }"#).unwrap();
    let plan = generate(&spec(&[]), &defaults).unwrap();

    assert_eq!(plan.resolved().lowercase_lookup, ConfigSlot::new(true));
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["resolved"]["case_insensitive"], true);
    assert_eq!(json["resolved"]["lowercase_lookup"], true);

    let plan = generate(&spec(&["@nocase", "@lower:false"]), &EnumConfig::default()).unwrap();
    assert_eq!(plan.resolved().lowercase_lookup, ConfigSlot::new(true));
}

#[test]
fn naming_options_compose() {
    let cases: &[(&[&str], &str)] = &[
        (&[], "ShadeDarkGrey"),
        (&["@noprefix"], "DarkGrey"),
        (&["@nocamel"], "Shadedark_grey"),
        (&["@forceupper"], "ShadeDARKGREY"),
        (&["@forcelower", "@noprefix"], "darkgrey"),
        (&["@noprefix", "@prefix:Old"], "OldDarkGrey"),
    ];

    for (directives, expected) in cases {
        let plan = generate(&spec(directives), &EnumConfig::default()).unwrap();
        assert_eq!(plan.identifier("dark_grey"), Some(*expected), "{directives:?}");
    }
}

#[test]
fn acronyms_keep_their_case() {
    let spec = EnumSpec::new("Proto", EnumRepr::Integer, ["HTTP_code", "grpc"]).with_annotations(["@noprefix"]);
    let plan = generate(&spec, &EnumConfig::default()).unwrap();
    assert_eq!(plan.identifier("HTTP_code"), Some("HTTPCode"));
    assert_eq!(plan.identifier("grpc"), Some("Grpc"));
}

#[test]
fn forced_case_conflict_is_reported_with_type_name() {
    let err = generate(&spec(&["@forcelower", "@forceupper"]), &EnumConfig::default()).unwrap_err();
    assert_eq!(err.type_name(), "Shade");
    assert!(matches!(err, GenerateError::Plan { source: PlanError::ArtifactConflict { .. }, .. }));
}

#[test]
fn bad_directive_is_reported_with_type_name() {
    let err = generate(&spec(&["@marshal", "@wat"]), &EnumConfig::default()).unwrap_err();
    assert_eq!(err.type_name(), "Shade");
    assert!(err.to_string().starts_with("Failed to read directives for `Shade`"));
}

#[test]
fn sql_value_kinds() {
    let text = generate(&spec(&["@sql"]), &EnumConfig::default()).unwrap();
    assert_eq!(text.sql_rule().unwrap().value_kind, WireKind::String);
    assert_eq!(text.sql_value(1), Some(SqlOutput::Text("dark_grey")));

    let ordinal = generate(&spec(&["@sql", "@sqlint"]), &EnumConfig::default()).unwrap();
    assert_eq!(ordinal.sql_value(1), Some(SqlOutput::Ordinal(1)));
    assert_eq!(ordinal.scan(SqlInput::Text("light")).unwrap().unwrap().ordinal, 0);
    assert_eq!(ordinal.scan(SqlInput::Ordinal(1)).unwrap().unwrap().literal, "dark_grey");
}

#[test]
fn sqlint_on_string_backed_type_conflicts() {
    let spec = EnumSpec::new("Code", EnumRepr::String, ["a"]).with_annotations(["@sql", "@sqlint"]);
    let err = generate(&spec, &EnumConfig::default()).unwrap_err();
    assert!(err.to_string().contains("string-backed"));
}

#[test]
fn mustparse_and_flag_are_independent() {
    let plan = generate(&spec(&["@mustparse", "@flag", "@ptr"]), &EnumConfig::default()).unwrap();
    for kind in [ArtifactKind::MustParse, ArtifactKind::Flag, ArtifactKind::Ptr] {
        assert!(plan.has(kind), "{kind}");
    }
    assert!(!plan.has(ArtifactKind::MarshalText));
}

#[test]
fn case_insensitive_parse() {
    let plan = generate(&spec(&["@nocase"]), &EnumConfig::default()).unwrap();
    assert!(plan.is_valid("DARK_GREY"));
    assert!(plan.is_valid("Light"));
    assert_eq!(plan.parse("LIGHT").unwrap().identifier, "ShadeLight");
    assert!(plan.parse("darkgrey").is_err());
}

#[test]
fn plan_serializes_for_renderers() {
    let plan = generate(&spec(&["@marshal"]), &EnumConfig::default()).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["type_name"], "Shade");
    assert_eq!(json["repr"], "integer");
    assert_eq!(json["values"][1]["identifier"], "ShadeDarkGrey");
    assert_eq!(
        json["artifacts"],
        serde_json::json!(["stringify", "parse", "is_valid", "marshal_text", "unmarshal_text", "append_text"])
    );
    assert_eq!(json["resolved"]["marshal"], true);
    assert!(json["resolved"]["sql"].is_null());
}

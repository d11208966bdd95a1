use rulechain::{Error, ParamValue};

#[test]
fn describe_renders_code_only() {
    assert_eq!(Error::new("required").describe(), "required");
}

#[test]
fn describe_renders_field() {
    let err = Error::new("min").with_field("Age");
    assert_eq!(err.describe(), "min (field: Age)");
}

#[test]
fn describe_renders_params_sorted_by_key() {
    let err = Error::new("between")
        .with_param("min", 18)
        .with_param("max", 120)
        .with_param("actual", 15);
    assert_eq!(err.describe(), "between {actual: 15, max: 120, min: 18}");
}

#[test]
fn describe_renders_field_and_params() {
    let err = Error::new("length")
        .with_field("Name")
        .with_params([("min", 2), ("actual", 1)]);
    assert_eq!(err.to_string(), "length (field: Name) {actual: 1, min: 2}");
}

#[test]
fn fatal_flag_does_not_change_description() {
    let err = Error::new("invalid").with_field("Password").fatal();
    assert!(err.is_fatal());
    assert_eq!(err.describe(), "invalid (field: Password)");
}

#[test]
fn params_are_looked_up_by_name() {
    let err = Error::new("not_found").with_param("key", "lang");
    assert_eq!(err.param("key"), Some(&ParamValue::Str("lang".into())));
    assert_eq!(err.param("missing"), None);
}

#[test]
fn error_is_a_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::new("required"));
}

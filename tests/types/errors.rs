use rulechain::{Error, ErrorFormatConfig, Errors};

fn sample() -> Errors {
    vec![
        Error::new("required").with_field("Name"),
        Error::new("min")
            .with_field("Age")
            .with_param("min", 18)
            .with_param("actual", 15),
    ]
    .into()
}

#[test]
fn empty_errors_describe_as_empty_string() {
    let errors = Errors::new();
    assert_eq!(errors.describe("; "), "");
    assert_eq!(errors.to_string(), "");
    assert!(!errors.has_any());
    assert!(!errors.has_fatal());
}

#[test]
fn single_error_describes_without_separator() {
    let errors = Errors::from(Error::new("required").with_field("Name"));
    assert_eq!(errors.describe(" | "), "required (field: Name)");
}

#[test]
fn multiple_errors_join_with_separator() {
    assert_eq!(
        sample().to_string(),
        "required (field: Name); min (field: Age) {actual: 15, min: 18}"
    );
}

#[test]
fn format_uses_caller_supplied_renderer() {
    let out = sample().format(|e| format!("{}: {}", e.field(), e.code()), " | ");
    assert_eq!(out, "Name: required | Age: min");
}

#[test]
fn has_fatal_finds_any_fatal_error() {
    let mut errors = sample();
    assert!(!errors.has_fatal());
    errors.push(Error::new("invalid").fatal());
    assert!(errors.has_fatal());
}

#[test]
fn insertion_order_is_kept_without_deduplication() {
    let errors: Errors = (0..3).map(|_| Error::new("dup")).collect();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.code() == "dup"));
}

#[test]
fn into_result_distinguishes_valid_from_invalid() {
    assert!(Errors::new().into_result().is_ok());
    assert_eq!(sample().into_result().unwrap_err().len(), 2);
}

#[test]
fn format_with_config_controls_layout() {
    let errors = sample();
    assert_eq!(
        errors.format_with(&ErrorFormatConfig::default()),
        errors.to_string()
    );
    assert_eq!(
        errors.format_with(&ErrorFormatConfig::compact().without_params().without_field()),
        "required | min"
    );
    assert_eq!(
        errors.format_with(&ErrorFormatConfig::multiline()),
        "- required (field: Name)\n- min (field: Age) {actual: 15, min: 18}"
    );
}

#[test]
fn format_config_custom_separator_and_suffix() {
    let config = ErrorFormatConfig {
        item_suffix: Some(".".into()),
        ..ErrorFormatConfig::default().with_separator("\n").without_params()
    };
    assert_eq!(
        sample().format_with(&config),
        "required (field: Name).\nmin (field: Age)."
    );
}

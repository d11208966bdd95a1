use std::collections::HashMap;

use rulechain::prelude::*;

struct Address {
    street: String,
    zip: String,
}

struct Profile {
    name: String,
    age: i32,
    email: Option<String>,
    tags: Vec<String>,
    settings: HashMap<String, String>,
    address: Address,
}

fn profile() -> Profile {
    Profile {
        name: "Ada".into(),
        age: 36,
        email: Some("ada@example.com".into()),
        tags: vec!["math".into()],
        settings: HashMap::new(),
        address: Address {
            street: "12 Crescent".into(),
            zip: "12345".into(),
        },
    }
}

fn address_validator() -> StructValidator<Address> {
    StructValidator::new()
        .field("Street", |a: &Address| &a.street, [strings::not_empty()])
        .field("Zip", |a: &Address| &a.zip, [strings::pattern(r"^\d{5}$").unwrap()])
}

fn profile_validator() -> StructValidator<Profile> {
    StructValidator::new()
        .field("Name", |p: &Profile| &p.name, [
            strings::not_empty().stop_on_error(),
            strings::min_runes(2),
        ])
        .field("Age", |p: &Profile| &p.age, [numbers::between(0, 150)])
        .field("Email", |p: &Profile| &p.email, [common::required()])
        .slice_field("Tags", |p: &Profile| &p.tags, [
            slices::max_len(3),
            slices::for_each([strings::not_empty()]),
        ])
        .map_field("Settings", |p: &Profile| &p.settings, [maps::max_keys(2)])
        .nested("Address", |p: &Profile| &p.address, address_validator())
}

#[test]
fn valid_record_has_no_errors() {
    assert!(profile_validator().validate(&profile()).is_empty());
    assert!(profile_validator().check(&profile()).is_ok());
}

#[test]
fn every_field_is_evaluated_after_a_fatal_error() {
    let mut value = profile();
    value.name = String::new();
    value.age = 200;

    let errors = profile_validator().validate(&value);
    let summary: Vec<_> = errors.iter().map(|e| (e.field(), e.code(), e.is_fatal())).collect();
    assert_eq!(summary, [("Name", "not_empty", true), ("Age", "between", false)]);
}

#[test]
fn errors_follow_field_declaration_order() {
    let mut value = profile();
    value.address.zip = "abc".into();
    value.email = None;
    value.tags = vec!["ok".into(), String::new()];
    value.settings = [("a", "1"), ("b", "2"), ("c", "3")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let errors = profile_validator().validate(&value);
    let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, ["Email", "Tags.1", "Settings", "Address.Zip"]);
    assert_eq!(errors[3].param("pattern"), Some(&ParamValue::from(r"^\d{5}$")));
}

#[test]
fn prefix_is_prepended_to_every_field() {
    let mut value = profile();
    value.address.street = String::new();
    value.tags = vec![String::new()];

    let errors = profile_validator().validate_with_prefix(&value, "users.4");
    let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, ["users.4.Tags.0", "users.4.Address.Street"]);
}

#[test]
fn nested_validators_can_be_slices_of_records() {
    struct Team {
        members: Vec<Address>,
    }

    let members = SliceValidator::new([
        slices::min_len(1),
        SliceRule::new(|addresses: &[Address]| {
            let inner = address_validator();
            addresses
                .iter()
                .enumerate()
                .flat_map(|(i, a)| inner.validate_with_prefix(a, &i.to_string()))
                .collect()
        }),
    ]);
    let team = StructValidator::new().nested("Members", |t: &Team| &t.members, members);

    let value = Team {
        members: vec![
            Address { street: "x".into(), zip: "00000".into() },
            Address { street: String::new(), zip: "1".into() },
        ],
    };

    let errors = team.validate(&value);
    let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, ["Members.1.Street", "Members.1.Zip"]);

    let empty = Team { members: Vec::new() };
    assert_eq!(team.validate(&empty).describe("; "), "min (field: Members) {actual: 0, min: 1}");
}

#[test]
fn field_accessor_can_be_used_directly() {
    let age = Field::new("Age", |p: &Profile| &p.age, [numbers::min(18)]);
    let mut value = profile();
    value.age = 12;

    assert_eq!(age.name(), "Age");
    assert_eq!(age.validate(&value).describe("; "), "min (field: Age) {actual: 12, min: 18}");
    assert_eq!(
        age.validate_with_prefix(&value, "root").describe("; "),
        "min (field: root.Age) {actual: 12, min: 18}"
    );
}

#[test]
fn custom_accessors_plug_in_with_with() {
    struct NameMatchesEmail;

    impl Validator<Profile> for NameMatchesEmail {
        fn validate_with_prefix(&self, value: &Profile, prefix: &str) -> Errors {
            let matches = value
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().starts_with(&value.name.to_lowercase()));
            if matches {
                Errors::new()
            } else {
                Error::new("mismatch").with_field(join_field(prefix, "Email")).into()
            }
        }
    }

    let validator = StructValidator::<Profile>::new().with(NameMatchesEmail);
    assert_eq!(validator.len(), 1);
    assert!(validator.validate(&profile()).is_empty());

    let mut value = profile();
    value.name = "Grace".into();
    assert_eq!(validator.validate(&value)[0].field(), "Email");
}

#[test]
fn boxed_validators_are_validators() {
    let boxed: Box<dyn Validator<Address>> = Box::new(address_validator());
    let address = Address { street: String::new(), zip: "12345".into() };
    assert_eq!(boxed.validate(&address).len(), 1);
}

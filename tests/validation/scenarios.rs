use std::collections::{BTreeMap, HashMap};

use rulechain::prelude::*;

struct User {
    age: i32,
}

#[test]
fn age_below_minimum() {
    let users = StructValidator::new().field("Age", |u: &User| &u.age, [numbers::min(18)]);

    let errors = users.validate(&User { age: 15 });
    let expected: Errors = Error::new("min")
        .with_field("Age")
        .with_param("min", 18)
        .with_param("actual", 15)
        .into();
    assert_eq!(errors, expected);
}

#[test]
fn map_key_limit_at_root_and_under_a_field() {
    let value: HashMap<String, i32> = [("a", 1), ("b", 2), ("c", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let map = MapValidator::<String, i32>::new([maps::max_keys(2)]);
    let expected = Error::new("max").with_param("max", 2).with_param("actual", 3);
    assert_eq!(map.validate(&value).as_slice(), [expected.clone()]);

    struct Config {
        settings: HashMap<String, i32>,
    }

    let config = StructValidator::new().nested("Settings", |c: &Config| &c.settings, map);
    let errors = config.validate(&Config { settings: value });
    assert_eq!(errors.as_slice(), [expected.with_field("Settings")]);
}

#[test]
fn nested_employee_path() {
    struct Address {
        street: String,
    }
    struct Company {
        name: String,
        address: Address,
    }
    struct Employee {
        name: String,
        company: Company,
    }

    let employee = StructValidator::new()
        .field("Name", |e: &Employee| &e.name, [strings::not_empty()])
        .nested(
            "Company",
            |e: &Employee| &e.company,
            StructValidator::new()
                .field("Name", |c: &Company| &c.name, [strings::not_empty()])
                .nested(
                    "Address",
                    |c: &Company| &c.address,
                    StructValidator::new().field("Street", |a: &Address| &a.street, [strings::not_empty()]),
                ),
        );

    let value = Employee {
        name: "Lin".into(),
        company: Company {
            name: "Acme".into(),
            address: Address { street: String::new() },
        },
    };

    let errors = employee.validate(&value);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), "Company.Address.Street");
    assert_eq!(errors[0].code(), "not_empty");
}

#[test]
fn struct_fatal_does_not_skip_other_fields() {
    struct Login {
        user: String,
        password: String,
    }

    let login = StructValidator::new()
        .field("User", |l: &Login| &l.user, [common::required().stop_on_error(), strings::min_runes(3)])
        .field("Password", |l: &Login| &l.password, [Rule::new(|_: &String| Some(Error::new("weak")))]);

    let errors = login.validate(&Login {
        user: String::new(),
        password: "hunter2".into(),
    });
    let codes: Vec<_> = errors.iter().map(|e| (e.field(), e.code())).collect();
    assert_eq!(codes, [("User", "required"), ("Password", "weak")]);
}

#[test]
fn validate_matches_empty_prefix_for_every_kind() {
    let chain = RuleChain::new([numbers::min(10), numbers::max(5)]);
    assert_eq!(chain.validate(&7), chain.validate_with_prefix(&7, ""));

    let slice = SliceValidator::new([slices::min_len(3), slices::for_each([numbers::positive::<i32>()])]);
    let values = vec![-1, 4];
    assert_eq!(slice.validate(&values), slice.validate_with_prefix(&values, ""));

    let map = MapValidator::<&str, i32>::new([maps::key("x", [numbers::min(0)]), maps::max_keys(0)]);
    let entries: BTreeMap<&str, i32> = [("x", -4)].into();
    assert_eq!(map.validate(&entries), map.validate_with_prefix(&entries, ""));

    struct Pair {
        left: i32,
        right: Vec<i32>,
    }
    let record = StructValidator::new()
        .field("Left", |p: &Pair| &p.left, [numbers::max(0)])
        .slice_field("Right", |p: &Pair| &p.right, [slices::exact_len(1)]);
    let pair = Pair { left: 3, right: vec![] };
    assert_eq!(record.validate(&pair), record.validate_with_prefix(&pair, ""));
    assert_eq!(record.validate(&pair).len(), 2);
}

#[test]
fn batch_entries_embedded_under_index_prefix() {
    let ages = RuleChain::new([numbers::between(0, 130)]);
    let batch = [30, 140, -1];

    let errors: Errors = batch
        .iter()
        .enumerate()
        .flat_map(|(i, age)| ages.validate_with_prefix(age, &join_field("batch", &i.to_string())))
        .collect();
    let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, ["batch.1", "batch.2"]);
}

#[test]
fn one_validator_shared_across_threads() {
    use std::sync::Arc;

    let validator = Arc::new(SliceValidator::new([slices::max_len(2)]));
    let handles: Vec<_> = (0..4usize)
        .map(|n| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || validator.validate(&vec![0u8; n]).len())
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, [0, 0, 0, 1]);
}

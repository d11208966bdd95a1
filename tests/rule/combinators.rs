use rulechain::prelude::*;

fn fails(code: &'static str) -> Rule<i32> {
    Rule::new(move |_: &i32| Some(Error::new(code).with_param("source", code)))
}

fn passes() -> Rule<i32> {
    Rule::new(|_: &i32| None)
}

#[test]
fn not_inverts_pass_and_fail() {
    let rule = not(fails("min"));
    assert!(rule.check(&1).is_none());

    let err = not(passes()).check(&1).unwrap();
    assert_eq!(err.code(), "not");
    assert!(err.params().is_empty());
    assert_eq!(err.field(), "");
    assert!(!err.is_fatal());
}

#[test]
fn double_negation_loses_wrapped_error() {
    let err = not(not(fails("min"))).check(&1).unwrap();
    assert_eq!(err.code(), "not");
}

#[test]
fn negate_method_matches_free_function() {
    let rule = numbers::min(10).negate();
    assert!(rule.check(&3).is_none());
    assert_eq!(rule.check(&10).unwrap().code(), "not");
}

#[test]
fn stop_on_error_marks_error_fatal_and_keeps_details() {
    let err = stop_on_error(numbers::min(18)).check(&15).unwrap();
    assert!(err.is_fatal());
    assert_eq!(err.code(), "min");
    assert_eq!(err.param("min"), Some(&ParamValue::Int(18)));
    assert_eq!(err.param("actual"), Some(&ParamValue::Int(15)));
}

#[test]
fn stop_on_error_passes_valid_values() {
    assert!(numbers::min(18).stop_on_error().check(&30).is_none());
}

#[test]
fn or_returns_the_last_error_not_the_first() {
    let rule = or([fails("first_error"), fails("second_error"), fails("third_error")]);
    let err = rule.check(&0).unwrap();
    assert_eq!(err.code(), "third_error");
    assert_eq!(err.param("source"), Some(&ParamValue::from("third_error")));
}

#[test]
fn or_passes_when_any_rule_passes() {
    assert!(or([passes(), fails("a")]).check(&0).is_none());
    assert!(or([fails("a"), passes()]).check(&0).is_none());
}

#[test]
fn or_stops_at_first_success() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counted = {
        let calls = Arc::clone(&calls);
        Rule::new(move |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            None
        })
    };
    let never = {
        let calls = Arc::clone(&calls);
        Rule::new(move |_: &i32| {
            calls.fetch_add(100, Ordering::SeqCst);
            None
        })
    };

    assert!(or([counted, never]).check(&0).is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn or_of_string_rules() {
    let rule = or([strings::min_runes::<str>(5), strings::contains("@")]);
    assert!(rule.check("hello").is_none());
    assert!(rule.check("a@b").is_none());

    let err = rule.check("abc").unwrap();
    assert_eq!(err.code(), "contains");
    assert_eq!(err.param("substring"), Some(&ParamValue::from("@")));
}

#[test]
fn when_applies_rule_only_if_predicate_holds() {
    let rule = when(|n: &i32| *n > 100, fails("big"));
    assert!(rule.check(&5).is_none());
    assert_eq!(rule.check(&500).unwrap().code(), "big");
}

#[test]
fn unless_applies_rule_only_if_predicate_fails() {
    let rule = unless(|n: &i32| *n > 100, fails("small"));
    assert!(rule.check(&500).is_none());
    assert_eq!(rule.check(&5).unwrap().code(), "small");
}

#[test]
fn when_and_unless_methods() {
    let admin_password = strings::min_runes::<String>(12).when(|s: &String| s.starts_with("admin:"));
    assert!(admin_password.check(&"admin:short".to_string()).is_some());
    assert!(admin_password.check(&"user:short".to_string()).is_none());

    let non_guest = strings::not_empty::<String>().unless(|s: &String| s == "guest");
    assert!(non_guest.check(&String::new()).is_some());
}

#[test]
fn combinators_nest() {
    let rule = stop_on_error(or([not(passes()), fails("fallback")]));
    let err = rule.check(&0).unwrap();
    assert_eq!(err.code(), "fallback");
    assert!(err.is_fatal());
}

#[test]
fn rules_are_shareable_across_threads() {
    let rule = numbers::between(1, 10);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rule = rule.clone();
            std::thread::spawn(move || rule.check(&(i * 5)).is_none())
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [false, true, true, false]);
}

#[test]
fn common_rules() {
    assert_eq!(common::required::<str>().check("").unwrap().code(), "required");
    assert_eq!(common::required::<Option<i32>>().check(&None).unwrap().code(), "required");
    assert!(common::required::<Vec<i32>>().check(&vec![1]).is_none());

    assert_eq!(common::not_zero::<i64>().check(&0).unwrap().code(), "zero");
    assert!(common::not_zero::<i64>().check(&-3).is_none());

    let lang = common::one_of(["en", "fr"]);
    assert!(lang.check(&"en").is_none());
    assert_eq!(lang.check(&"de").unwrap().describe(), "one_of {value: de}");

    let reserved = common::not_one_of(["root".to_string()]);
    assert_eq!(reserved.check(&"root".to_string()).unwrap().code(), "not_one_of");
}

#[test]
fn numeric_sign_rules() {
    assert_eq!(numbers::positive::<i32>().check(&0).unwrap().code(), "positive");
    assert!(numbers::positive::<i32>().check(&-1).is_some());
    assert!(numbers::positive::<i32>().check(&1).is_none());
    assert_eq!(numbers::negative::<i32>().check(&0).unwrap().code(), "negative");
    assert!(numbers::negative::<i32>().check(&1).is_some());
    assert!(numbers::negative::<i32>().check(&-1).is_none());
    assert!(numbers::non_negative::<i32>().check(&0).is_none());
    assert!(numbers::non_positive::<i32>().check(&0).is_none());
    assert!(numbers::non_negative::<f64>().check(&-0.5).is_some());
    assert!(numbers::non_positive::<f64>().check(&0.5).is_some());
}

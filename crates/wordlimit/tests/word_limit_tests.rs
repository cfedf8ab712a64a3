//! Integration tests for wordlimit
//!
//! Drive a full submit/redisplay cycle through the in-memory host:
//! - word and character limits at their boundaries
//! - required fields and empty submissions
//! - inverted limits
//! - rendered attributes, defaults, placeholders and hangover values

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use wordlimit::*;

fn words(n: usize) -> String {
    (1..=n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

fn installed_host() -> HookRegistry {
    let config = Config::default();
    let mut host = HookRegistry::with_builtin_textarea(&config);
    assert!(WordLimit::new(&config).install(&mut host));
    host
}

fn submit(host: &HookRegistry, tag: &FormTag, value: &str) -> (ValidationResult, FormContext) {
    let values = HashMap::from([(tag.name.clone(), value.to_string())]);
    let result = host.validate_form(std::slice::from_ref(tag), &FormContext::new(values.clone()));
    let ctx = FormContext::from_result(values, &result);
    (result, ctx)
}

fn scenario_tag() -> FormTag {
    FormTag::parse("[textarea* message maxlength:10 minlength:2 maxlengthwords:true]").unwrap()
}

#[test]
fn test_scenario_too_many_words() {
    let host = installed_host();
    let tag = scenario_tag();
    let (result, ctx) = submit(&host, &tag, &words(11));

    let errors = result.get_errors("message").unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("too long"));
    assert!(errors[0].contains("11/10"));

    let field = WordLimit::default().renderer().field(&tag, &ctx).unwrap();
    assert!(!field.attrs.contains("maxlength"));
    assert!(!field.attrs.contains("minlength"));
    assert_eq!(field.attrs.get("aria-invalid"), Some("true"));
    assert_eq!(field.value, words(11));
}

#[test]
fn test_scenario_empty_required() {
    let host = installed_host();
    let (result, _) = submit(&host, &scenario_tag(), "");
    assert_eq!(
        result.get_errors("message").unwrap(),
        &vec!["The field is required.".to_string()]
    );
}

#[rstest]
#[case("textarea msg minlength:5")]
#[case("textarea msg maxlength:3 minlength:2 minlengthwords:true")]
#[case("textarea msg maxlength:3 maxlengthwords:true")]
fn test_empty_optional_never_fails(#[case] definition: &str) {
    let host = installed_host();
    let tag = FormTag::parse(definition).unwrap();
    assert!(submit(&host, &tag, "").0.is_valid());
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(100)]
fn test_word_max_boundary(#[case] max: usize) {
    let host = installed_host();
    let tag = FormTag::parse(&format!("textarea msg maxlength:{} maxlengthwords:true", max)).unwrap();

    assert!(submit(&host, &tag, &words(max)).0.is_valid());

    let (result, _) = submit(&host, &tag, &words(max + 1));
    let message = result.get_error("msg").unwrap();
    assert!(message.contains(&(max + 1).to_string()));
    assert!(message.contains(&max.to_string()));
}

#[rstest]
#[case(1)]
#[case(40)]
fn test_character_max_boundary(#[case] max: usize) {
    let host = installed_host();
    let tag = FormTag::parse(&format!("textarea msg maxlength:{}", max)).unwrap();

    assert!(submit(&host, &tag, &"x".repeat(max)).0.is_valid());
    assert_eq!(
        submit(&host, &tag, &"x".repeat(max + 1)).0.get_error("msg").unwrap(),
        "The field is too long."
    );
}

#[test]
fn test_inverted_limits_behave_as_unset() {
    let host = installed_host();
    let inverted = FormTag::parse("textarea msg maxlength:3 minlength:8").unwrap();
    let unset = FormTag::parse("textarea msg").unwrap();

    let many = words(20);
    for value in ["a", "abcdefghijklmnop", many.as_str()] {
        let (a, ctx_a) = submit(&host, &inverted, value);
        let (b, ctx_b) = submit(&host, &unset, value);
        assert_eq!(a, b);
        assert_eq!(host.render_field(&inverted, &ctx_a), host.render_field(&unset, &ctx_b));
    }
}

#[test]
fn test_renderer_never_emits_maxlength_in_word_mode() {
    let host = installed_host();
    for definition in [
        "textarea msg maxlength:5 maxlengthwords:true",
        "textarea* msg maxlength:500 minlength:1 MAXLENGTHWORDS:TRUE",
        "textarea msg 40x4/200 maxlengthwords:true",
    ] {
        let tag = FormTag::parse(definition).unwrap();
        let markup = host.render_field(&tag, &FormContext::default()).unwrap();
        assert!(!markup.contains("maxlength="), "{}", markup);
    }
}

#[test]
fn test_default_value_and_placeholder() {
    let host = installed_host();

    let tag = FormTag::parse(r#"textarea msg "hello""#).unwrap();
    let field = TextareaRenderer::default().field(&tag, &FormContext::default()).unwrap();
    assert_eq!(field.value, "hello");

    let tag = FormTag::parse(r#"textarea msg placeholder "hello""#).unwrap();
    let markup = host.render_field(&tag, &FormContext::default()).unwrap();
    assert!(markup.contains(r#"placeholder="hello""#));
    assert!(markup.contains("></textarea>"));
}

#[test]
fn test_redisplay_keeps_submitted_text() {
    let host = installed_host();
    let tag = FormTag::parse(r#"textarea* msg maxlength:2 maxlengthwords:true "default text""#).unwrap();
    let (_, ctx) = submit(&host, &tag, "one two three");

    let markup = host.render_field(&tag, &ctx).unwrap();
    assert!(markup.contains(">one two three</textarea>"));
    assert!(markup.contains("wpcf7-not-valid"));
    assert!(markup.contains("Your input is too long (3/2 maximum words)"));
}

#[test]
fn test_without_extension_host_counts_characters() {
    let host = HookRegistry::with_builtin_textarea(&Config::default());
    let tag = scenario_tag();
    let (result, ctx) = submit(&host, &tag, "three small words");

    assert_eq!(result.get_error("message").unwrap(), "The field is too long.");
    let markup = host.render_field(&tag, &ctx).unwrap();
    assert!(markup.contains(r#"maxlength="10""#));
}

#[test]
fn test_configured_messages_reach_the_host() {
    let config: Config = toml::from_str(
        r#"
        [messages]
        too_many_words = "{count} words is over the {limit} word limit"
        "#,
    )
    .unwrap();
    let mut host = HookRegistry::with_builtin_textarea(&config);
    WordLimit::new(&config).install(&mut host);

    let tag = FormTag::parse("textarea msg maxlength:1 maxlengthwords:true").unwrap();
    let (result, _) = submit(&host, &tag, "two words");
    assert_eq!(result.get_error("msg").unwrap(), "2 words is over the 1 word limit");
}

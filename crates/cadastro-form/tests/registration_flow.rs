//! End-to-end registration flows through the host event surface
//!
//! Covers both rule presets, the phone mask as seen from the host, and the
//! submit lifecycle (reject keeps values, accept resets everything).

use cadastro_form::{
    messages, validate, Field, FormState, RegistrationForm, SubmitOutcome, ValidationConfig,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn valid_state() -> FormState {
    FormState {
        name: "Maria".to_string(),
        email: "maria@empresa.com.br".to_string(),
        phone: "(21) 91234-5678".to_string(),
        password: "Segura1".to_string(),
        confirm_password: "Segura1".to_string(),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[rstest]
#[case::strict(ValidationConfig::strict())]
#[case::loose(ValidationConfig::loose())]
fn valid_state_passes(#[case] config: ValidationConfig) {
    assert!(validate(&config, &valid_state()).is_empty());
}

#[rstest]
#[case(Field::Name, messages::NAME_REQUIRED)]
#[case(Field::Email, messages::EMAIL_REQUIRED)]
#[case(Field::Phone, messages::PHONE_REQUIRED)]
#[case(Field::Password, messages::PASSWORD_REQUIRED)]
#[case(Field::ConfirmPassword, messages::CONFIRM_PASSWORD_REQUIRED)]
fn missing_field_is_reported(#[case] field: Field, #[case] message: &str) {
    for config in [ValidationConfig::strict(), ValidationConfig::loose()] {
        let state = valid_state().with(field, "");
        let errors = validate(&config, &state);

        assert_eq!(errors.get(field), Some(message));
        // Other fields are unaffected, except the confirmation which follows password
        let others = errors.iter().filter(|(f, _)| *f != field).count();
        let expected = if field == Field::Password { 1 } else { 0 };
        assert_eq!(others, expected);
    }
}

#[rstest]
#[case("Jo", Some("Nome deve ter pelo menos 3 caracteres"))]
#[case("Joao", None)]
#[case("Zé", Some("Nome deve ter pelo menos 3 caracteres"))]
#[case("Zoé", None)]
fn strict_name_length(#[case] name: &str, #[case] expected: Option<&str>) {
    let errors = validate(&ValidationConfig::strict(), &valid_state().with(Field::Name, name));
    assert_eq!(errors.get(Field::Name), expected);
}

#[rstest]
#[case(ValidationConfig::loose(), "abc12", Some(messages::PASSWORD_TOO_SHORT))]
#[case(ValidationConfig::strict(), "abc12", Some(messages::PASSWORD_TOO_SHORT))]
#[case(ValidationConfig::loose(), "abcdef", None)]
#[case(ValidationConfig::strict(), "abcdef", Some(messages::PASSWORD_COMPLEXITY))]
#[case(ValidationConfig::strict(), "Abc123", None)]
fn password_rules(
    #[case] config: ValidationConfig,
    #[case] password: &str,
    #[case] expected: Option<&str>,
) {
    let state = valid_state()
        .with(Field::Password, password)
        .with(Field::ConfirmPassword, password);
    let errors = validate(&config, &state);

    assert_eq!(errors.get(Field::Password), expected);
    assert!(!errors.has_error(Field::ConfirmPassword));
}

#[rstest]
#[case("Segura1", "Segura1", false)]
#[case("Segura1", "segura1", true)]
#[case("Segura1", "Segura1 ", true)]
#[case("x", "x", false)]
#[case("x", "y", true)]
fn confirmation_matches_exactly(
    #[case] password: &str,
    #[case] confirm: &str,
    #[case] mismatch: bool,
) {
    let state = valid_state()
        .with(Field::Password, password)
        .with(Field::ConfirmPassword, confirm);
    let errors = validate(&ValidationConfig::strict(), &state);

    assert_eq!(errors.has_error(Field::ConfirmPassword), mismatch);
}

#[rstest]
#[case::strict(ValidationConfig::strict(), true)]
#[case::loose(ValidationConfig::loose(), false)]
fn unmasked_phone(#[case] config: ValidationConfig, #[case] rejected: bool) {
    let errors = validate(&config, &valid_state().with(Field::Phone, "2191234"));
    assert_eq!(errors.has_error(Field::Phone), rejected);
}

#[rstest]
#[case::strict(ValidationConfig::strict())]
#[case::loose(ValidationConfig::loose())]
fn email_syntax_matches_original_form(#[case] config: ValidationConfig) {
    for email in ["joao@example", ".joao@example.com", "jo..ao@example.com"] {
        let errors = validate(&config, &valid_state().with(Field::Email, email));
        assert_eq!(errors.get(Field::Email), None, "{}", email);
    }

    let errors = validate(&config, &valid_state().with(Field::Email, "joao@example..com"));
    assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_INVALID));
}

#[test]
fn loose_phone_accepts_any_non_empty_value() {
    let errors = validate(&ValidationConfig::loose(), &valid_state().with(Field::Phone, "   "));
    assert!(!errors.has_error(Field::Phone));
}

#[test]
fn typing_a_phone_number() {
    let mut form = RegistrationForm::default();
    let mut typed = String::new();

    for digit in "11987654321".chars() {
        typed.push(digit);
        form.on_field_change(Field::Phone, &typed);
        if typed.len() < 11 {
            assert_eq!(form.value(Field::Phone), typed);
        }
    }

    assert_eq!(form.value(Field::Phone), "(11) 98765-4321");

    // A twelfth keystroke lands on the masked value and is dropped
    form.on_field_change(Field::Phone, "(11) 98765-43219");
    assert_eq!(form.value(Field::Phone), "(11) 98765-4321");
}

#[test]
fn full_registration_session() {
    init_tracing();
    let mut form = RegistrationForm::new(ValidationConfig::strict());

    form.on_field_change(Field::Name, "Jo");
    form.on_field_blur(Field::Name);
    form.on_field_change(Field::Email, "jo@example.com");

    let visible = form.visible_errors();
    assert_eq!(visible.len(), 1);
    assert_eq!(
        visible.get(Field::Name),
        Some("Nome deve ter pelo menos 3 caracteres")
    );

    // First attempt fails and reveals everything still wrong
    let outcome = form.on_submit();
    let SubmitOutcome::Rejected { errors } = outcome else {
        panic!("submit with missing fields must be rejected");
    };
    assert_eq!(
        errors.iter().map(|(field, _)| field).collect::<Vec<_>>(),
        vec![Field::Name, Field::Phone, Field::Password, Field::ConfirmPassword]
    );
    assert_eq!(form.visible_errors(), errors);
    assert_eq!(form.value(Field::Email), "jo@example.com");

    form.on_field_change(Field::Name, "Joao");
    form.on_field_change(Field::Phone, "11987654321");
    form.on_field_change(Field::Password, "Abc123");
    form.on_field_change(Field::ConfirmPassword, "Abc123");
    assert!(form.visible_errors().is_empty());

    let outcome = form.on_submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted {
            values: FormState {
                name: "Joao".to_string(),
                email: "jo@example.com".to_string(),
                phone: "(11) 98765-4321".to_string(),
                password: "Abc123".to_string(),
                confirm_password: "Abc123".to_string(),
            }
        }
    );

    assert_eq!(form.values(), &FormState::new());
    assert!(form.touched().is_empty());
    assert!(form.show_confirmation());

    form.on_dismiss_confirmation();
    assert!(!form.show_confirmation());

    // Fresh form behaves like a new one
    assert!(form.visible_errors().is_empty());
    assert_eq!(form.errors().len(), 5);
}

#[test]
fn loose_form_accepts_original_inputs() {
    let mut form = RegistrationForm::new(ValidationConfig::loose());

    form.on_field_change(Field::Name, "Jo");
    form.on_field_change(Field::Email, "jo@example.com");
    form.on_field_change(Field::Phone, "9999");
    form.on_field_change(Field::Password, "abcdef");
    form.on_field_change(Field::ConfirmPassword, "abcdef");

    assert!(form.on_submit().is_accepted());
}

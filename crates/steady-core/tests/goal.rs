use steady_core::error::CoreError;
use steady_core::models::goal::{validate_new, MAX_OBJECTIVE};

#[test]
fn accepts_reasonable_goal_fields() {
    assert!(validate_new("30 dias sem cigarro", "cigarro", 30).is_ok());
    assert!(validate_new("limite", "álcool", MAX_OBJECTIVE).is_ok());
}

#[test]
fn rejects_blank_title_and_addiction() {
    assert!(matches!(
        validate_new("   ", "cigarro", 30),
        Err(CoreError::MissingField(f)) if f == "title"
    ));
    assert!(matches!(
        validate_new("meta", "", 30),
        Err(CoreError::MissingField(f)) if f == "addiction"
    ));
}

#[test]
fn rejects_out_of_range_objectives() {
    assert!(matches!(
        validate_new("meta", "cigarro", 0),
        Err(CoreError::InvalidObjective(0))
    ));
    assert!(matches!(
        validate_new("meta", "cigarro", -5),
        Err(CoreError::InvalidObjective(-5))
    ));
    assert!(matches!(
        validate_new("meta", "cigarro", MAX_OBJECTIVE + 1),
        Err(CoreError::InvalidObjective(_))
    ));
}

use super::*;

#[test]
fn password_type_is_hidden() {
    assert_eq!(Visibility::from_input_type("password"), Visibility::Hidden);
    assert_eq!(Visibility::from_input_type("PASSWORD"), Visibility::Hidden);
    assert_eq!(Visibility::from_input_type("text"), Visibility::Shown);
}

#[test]
fn toggling_swaps_input_type() {
    let next = Visibility::from_input_type("password").toggled();
    assert_eq!(next.input_type(), "text");
    assert_eq!(next.pressed(), "true");
    assert_eq!(next.toggled().input_type(), "password");
    assert_eq!(next.toggled().pressed(), "false");
}

use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn stored_literals_parse() {
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
}

#[test]
fn unrecognized_stored_values_read_as_absent() {
    for raw in ["", "Dark", " dark", "true", "auto", "null"] {
        assert_eq!(Theme::from_stored(raw), None, "{raw:?} should be ignored");
    }
}

#[test]
fn from_str_reports_the_rejected_value() {
    let err = "blue".parse::<Theme>().unwrap_err();
    assert_eq!(err, UnknownTheme("blue".to_owned()));
    assert_eq!(err.to_string(), "unknown theme: \"blue\"");
}

#[test]
fn display_matches_persisted_form() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_covers_every_input_combination() {
    let cases = [
        (None, false, Theme::Light),
        (None, true, Theme::Dark),
        (Some(Theme::Dark), false, Theme::Dark),
        (Some(Theme::Dark), true, Theme::Dark),
        (Some(Theme::Light), false, Theme::Light),
        (Some(Theme::Light), true, Theme::Light),
    ];
    for (stored, system, expected) in cases {
        assert_eq!(resolve(stored, system), expected, "stored={stored:?} system={system}");
    }
}

#[test]
fn toggled_flips_and_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert!(Theme::from_dark(true).is_dark());
    assert!(!Theme::from_dark(false).is_dark());
}

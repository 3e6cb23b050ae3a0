use pdf_translate::lang::LanguageCode;

#[test]
fn wire_codes_round_trip() {
    for (code, lang) in [
        ("en", LanguageCode::En),
        ("ja", LanguageCode::Ja),
        ("zh", LanguageCode::Zh),
    ] {
        assert_eq!(LanguageCode::from_code(code).unwrap(), lang);
        assert_eq!(lang.as_code(), code);
    }
}

#[test]
fn unknown_wire_code_is_rejected() {
    let err = LanguageCode::from_code("fr").unwrap_err();
    assert!(err.to_string().contains("unsupported target language"));
}

#[test]
fn display_names_fall_back_to_japanese() {
    assert_eq!(LanguageCode::from_display_name("English"), LanguageCode::En);
    assert_eq!(LanguageCode::from_display_name("Chinese"), LanguageCode::Zh);
    assert_eq!(LanguageCode::from_display_name("Klingon"), LanguageCode::Ja);
}

#[test]
fn default_is_japanese() {
    assert_eq!(LanguageCode::default(), LanguageCode::Ja);
}

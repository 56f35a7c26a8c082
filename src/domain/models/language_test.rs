use super::Language;

#[test]
fn it_parses_known_codes() {
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse("zh"), Some(Language::Zh));
    assert_eq!(Language::parse("fr"), Some(Language::Fr));
}

#[test]
fn it_rejects_unknown_codes() {
    assert_eq!(Language::parse("de"), None);
    assert_eq!(Language::parse("EN"), None);
    assert_eq!(Language::parse(""), None);
}

#[test]
fn it_cycles_through_every_language() {
    assert_eq!(Language::En.cycle(), Language::Zh);
    assert_eq!(Language::Zh.cycle(), Language::Fr);
    assert_eq!(Language::Fr.cycle(), Language::En);
}

#[test]
fn it_labels_for_the_switcher() {
    assert_eq!(Language::Zh.label(), "ZH");
}

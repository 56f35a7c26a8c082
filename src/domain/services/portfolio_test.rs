use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

use super::PortfolioView;
use crate::domain::models::Language;

fn rendered_at(language: Language, width: u16) -> Vec<String> {
    return PortfolioView::lines(language, width)
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect();
}

fn rendered(language: Language) -> Vec<String> {
    return rendered_at(language, 80);
}

fn position(lines: &[String], needle: &str) -> usize {
    return lines
        .iter()
        .position(|line| {
            return line.contains(needle);
        })
        .unwrap_or_else(|| panic!("{needle} not rendered"));
}

#[test]
fn it_splits_the_hero_title_across_two_lines() {
    let lines = rendered(Language::En);

    let title = position(&lines, "Bridging Research");
    assert_eq!(lines[title + 1], "& Innovation");
}

#[test]
fn it_renders_sections_in_page_order() {
    let lines = rendered(Language::En);

    let hero = position(&lines, "Bridging Research");
    let experience = position(&lines, "Work Experiences");
    let honors = position(&lines, "Honors & Achievements");
    let education = position(&lines, "Education Experiences");
    let contact = position(&lines, "Let's Connect.");
    let footer = position(&lines, "© Shuo Pang. All rights reserved.");

    assert!(hero < experience);
    assert!(experience < honors);
    assert!(honors < education);
    assert!(education < contact);
    assert!(contact < footer);
}

#[test]
fn it_joins_the_intro_with_a_comma_for_latin_scripts() {
    let lines = rendered(Language::En);

    assert!(lines[position(&lines, "I am Shuo Pang, ")].contains("Senior Technical Strategist"));
}

#[test]
fn it_joins_the_intro_with_an_ideographic_comma_for_zh() {
    let lines = rendered(Language::Zh);

    position(&lines, "我是 庞硕，");
}

#[test]
fn it_renders_every_experience_entry() {
    let lines = rendered(Language::Fr);

    let roles = lines
        .iter()
        .filter(|line| {
            return line.starts_with("● ");
        })
        .count();
    assert_eq!(roles, 7);
    position(&lines, "Chercheur en Stratégie Technique");
}

#[test]
fn it_renders_honors_with_their_years() {
    let lines = rendered(Language::En);

    let patent = position(&lines, "US Patent: Natural Finger Pointing Interaction");
    assert!(lines[patent].starts_with("2025  "));
}

#[test]
fn it_prints_the_contact_details() {
    for language in Language::iter() {
        let lines = rendered(language);
        position(&lines, "pangshuo1981(at)gmail.com");
        position(&lines, "in/pangshuo1981");
        position(&lines, "https://www.linkedin.com/in/");
    }
}

#[test]
fn it_wraps_to_the_requested_width() {
    for language in Language::iter() {
        for line in rendered_at(language, 40) {
            assert!(
                UnicodeWidthStr::width(line.as_str()) <= 40,
                "line too wide: {line}"
            );
        }
    }
}

#[test]
fn it_localizes_the_footer() {
    let lines = rendered(Language::Zh);

    position(&lines, "© 庞硕. 版权所有。");
    position(&lines, "学术诚信 · 技术前沿");
}

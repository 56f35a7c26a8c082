#[cfg(test)]
#[path = "portfolio_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use super::content::ContentStore;
use crate::domain::models::wrap;
use crate::domain::models::Language;

pub const CONTACT_EMAIL: &str = "pangshuo1981(at)gmail.com";
pub const CONTACT_LINKEDIN: &str = "in/pangshuo1981";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/pangshuo1981/";

const EMAIL_LABEL: &str = "E-Mail Address";
const LINKEDIN_LABEL: &str = "Connect via LinkedIn";
const QUOTE: &str =
    "\"Research is to see what everybody else has seen, and to think what nobody else has thought.\"";
const QUOTE_ATTRIBUTION: &str = "— Albert Szent-Györgyi";

// The page's blue-600 accent.
const ACCENT: Color = Color::Rgb(37, 99, 235);

fn accent() -> Style {
    return Style {
        fg: Some(ACCENT),
        ..Style::default()
    };
}

fn dim() -> Style {
    return Style {
        fg: Some(Color::DarkGray),
        ..Style::default()
    };
}

fn bold() -> Style {
    return Style {
        add_modifier: Modifier::BOLD,
        ..Style::default()
    };
}

fn blank() -> Line<'static> {
    return Line::from("");
}

fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    return wrap(text, width)
        .iter()
        .map(|line| {
            return Line::from(Span::styled(line.to_string(), style));
        })
        .collect();
}

/// Wraps `text` behind a styled prefix, indenting continuation rows to the
/// prefix width so columns stay aligned.
fn labeled(
    prefix: &str,
    prefix_style: Style,
    text: &str,
    style: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let indent = UnicodeWidthStr::width(prefix);

    return wrap(text, width.saturating_sub(indent).max(1))
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                return Line::from(vec![
                    Span::styled(prefix.to_string(), prefix_style),
                    Span::styled(line.to_string(), style),
                ]);
            }
            return Line::from(Span::styled(
                format!("{}{line}", [" "].repeat(indent).join("")),
                style,
            ));
        })
        .collect();
}

fn heading(subtitle: &str, title: &str, width: usize) -> Vec<Line<'static>> {
    return vec![
        Line::from(Span::styled(subtitle.to_uppercase(), accent())),
        Line::from(Span::styled(title.to_string(), bold())),
        Line::from(Span::styled(["─"].repeat(width.min(20)).join(""), accent())),
    ];
}

/// Renders the active language's resume document as plain scrollable lines,
/// section for section in the page's order. Styling stays in the spans so the
/// CLI printer can carry the same lines to stdout.
pub struct PortfolioView {}

impl PortfolioView {
    pub fn lines(language: Language, width: u16) -> Vec<Line<'static>> {
        let document = ContentStore::get(language);
        let width = usize::from(width).max(10);
        let mut lines: Vec<Line> = vec![];

        // Hero.
        lines.push(blank());
        lines.push(Line::from(Span::styled(document.hero.title.clone(), bold())));
        lines.push(Line::from(vec![
            Span::styled(
                "& ".to_string(),
                Style {
                    fg: Some(Color::DarkGray),
                    add_modifier: Modifier::ITALIC,
                    ..Style::default()
                },
            ),
            Span::styled(document.hero.subtitle.clone(), bold()),
        ]));
        lines.push(blank());

        let mut separator = ", ";
        if language == Language::Zh {
            separator = "，";
        }
        let intro = format!(
            "{} {}{separator}{}",
            document.hero.intro_prefix, document.hero.name, document.hero.intro_body
        );
        lines.extend(paragraph(&intro, width, Style::default()));
        lines.push(blank());

        let chips = document
            .interests
            .iter()
            .map(|interest| {
                return format!("[ {interest} ]");
            })
            .collect::<Vec<String>>()
            .join("  ");
        lines.extend(paragraph(&chips, width, dim()));

        // Experience timeline.
        lines.push(blank());
        lines.extend(heading(
            &document.nav.research,
            &document.sections.research,
            width,
        ));
        for experience in &document.experiences {
            lines.push(blank());
            lines.extend(labeled("● ", accent(), &experience.role, bold(), width));
            lines.extend(labeled(
                "  ",
                Style::default(),
                &experience.company,
                Style::default(),
                width,
            ));
            lines.extend(labeled(
                "  ",
                dim(),
                &format!("{} · {}", experience.period, experience.location),
                dim(),
                width,
            ));
            for description in &experience.description {
                lines.extend(labeled(
                    "  ↗ ",
                    accent(),
                    description,
                    Style::default(),
                    width,
                ));
            }
        }

        // Honors.
        lines.push(blank());
        lines.extend(heading(
            &document.nav.honors,
            &document.sections.recognition,
            width,
        ));
        lines.push(blank());
        for honor in &document.honors {
            lines.extend(labeled(
                &format!("{}  ", honor.year),
                accent(),
                &honor.title,
                Style::default(),
                width,
            ));
        }

        // Education.
        lines.push(blank());
        lines.extend(heading(
            &document.sections.academia_subtitle,
            &document.sections.education,
            width,
        ));
        for education in &document.education {
            lines.push(blank());
            lines.extend(paragraph(&education.degree, width, bold()));
            lines.extend(paragraph(&education.institution, width, accent()));
            lines.extend(paragraph(
                &format!("{} · {}", education.period, education.location),
                width,
                dim(),
            ));
        }

        lines.push(blank());
        lines.extend(paragraph(
            QUOTE,
            width,
            Style {
                fg: Some(Color::DarkGray),
                add_modifier: Modifier::ITALIC,
                ..Style::default()
            },
        ));
        lines.extend(paragraph(QUOTE_ATTRIBUTION, width, dim()));

        // Contact.
        lines.push(blank());
        lines.extend(heading(
            &document.nav.contact,
            &document.sections.contact,
            width,
        ));
        lines.extend(paragraph(&document.sections.contact_sub, width, dim()));
        lines.push(blank());
        lines.extend(paragraph(&EMAIL_LABEL.to_uppercase(), width, dim()));
        lines.extend(paragraph(CONTACT_EMAIL, width, bold()));
        lines.push(blank());
        lines.extend(paragraph(&LINKEDIN_LABEL.to_uppercase(), width, dim()));
        lines.extend(paragraph(CONTACT_LINKEDIN, width, bold()));
        lines.extend(paragraph(LINKEDIN_URL, width, dim()));

        // Footer.
        lines.push(blank());
        lines.extend(paragraph(
            &format!("© {}. {}", document.hero.name, document.footer.rights),
            width,
            dim(),
        ));
        lines.extend(paragraph(
            &format!(
                "{} · {}",
                document.footer.integrity, document.footer.frontier
            ),
            width,
            dim(),
        ));

        return lines;
    }
}

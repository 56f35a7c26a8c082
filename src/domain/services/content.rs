#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use strum::IntoEnumIterator;

use crate::domain::models::ContentDocument;
use crate::domain::models::Language;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Assets;

struct LocalizedContent {
    document: ContentDocument,
    grounding: String,
}

// Every language parses once on first access and lives for the rest of the
// process.
static CONTENT: Lazy<HashMap<Language, LocalizedContent>> = Lazy::new(|| {
    return Language::iter()
        .map(|language| {
            let file = Assets::get(&format!("{language}.json")).unwrap();
            let document: ContentDocument = serde_json::from_slice(&file.data).unwrap();
            let grounding = serde_json::to_string(&document).unwrap();
            return (
                language,
                LocalizedContent {
                    document,
                    grounding,
                },
            );
        })
        .collect();
});

/// Read side of the embedded resume documents. Each supported language ships
/// with a full document, there is no fallback chain between languages.
#[derive(Default)]
pub struct ContentStore {}

impl ContentStore {
    pub fn get(language: Language) -> &'static ContentDocument {
        return &CONTENT.get(&language).unwrap().document;
    }

    /// Compact JSON rendition of the document, ready to drop into a model
    /// prompt without serializing on every request.
    pub fn grounding(language: Language) -> &'static str {
        return &CONTENT.get(&language).unwrap().grounding;
    }
}

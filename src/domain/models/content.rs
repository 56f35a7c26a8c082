use serde_derive::Deserialize;
use serde_derive::Serialize;

/// One language's portfolio document. Fields serialize in camelCase so the
/// grounding snapshot handed to the assistant matches the site's published
/// JSON shape.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub nav: Navigation,
    pub hero: Hero,
    pub sections: SectionTitles,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub honors: Vec<Honor>,
    pub interests: Vec<String>,
    pub footer: Footer,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub about: String,
    pub research: String,
    pub honors: String,
    pub contact: String,
    pub tag: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub name: String,
    pub intro_prefix: String,
    pub intro_body: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTitles {
    pub research: String,
    pub recognition: String,
    pub education: String,
    pub contact: String,
    pub contact_sub: String,
    pub projects: String,
    pub academia_subtitle: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Honor {
    pub year: String,
    pub title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub rights: String,
    pub integrity: String,
    pub frontier: String,
}

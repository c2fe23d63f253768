//! Merged translation bundle and dotted-key lookup.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;

use super::source::Section;
use super::PageName;

/// All sections of one language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    sections: BTreeMap<PageName, Section>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, page: PageName, section: Section) {
        self.sections.insert(page, section);
    }

    pub fn section(&self, page: PageName) -> Option<&Section> {
        self.sections.get(&page)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look `key` up in `page`, then in `common`. Falls back to the key
    /// itself so untranslated text stays readable.
    pub fn resolve(&self, key: &str, page: PageName) -> String {
        self.find(key, page)
            .map(Cow::into_owned)
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`Bundle::resolve`] but reports a miss as `None`.
    pub fn find(&self, key: &str, page: PageName) -> Option<Cow<'_, str>> {
        self.section(page)
            .and_then(|section| lookup(section, key))
            .or_else(|| {
                if page == PageName::Common {
                    return None;
                }
                self.section(PageName::Common)
                    .and_then(|section| lookup(section, key))
            })
    }
}

impl FromIterator<(PageName, Section)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (PageName, Section)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

/// Walk a dotted path through nested objects.
///
/// Stops as soon as a segment is missing or the value reached so far is not
/// an object. Leaves must be strings; numbers and booleans are rendered with
/// their JSON text, anything else counts as a miss.
pub fn lookup<'a>(section: &'a Section, key: &str) -> Option<Cow<'a, str>> {
    let mut segments = key.split('.');
    let first = segments.next()?;
    let mut current = section.get(first)?;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    match current {
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(value: Value) -> Section {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn sample() -> Bundle {
        [
            (
                PageName::Home,
                section(json!({
                    "hero": { "title": "Welcome", "cta": "Start" },
                    "stats": { "matches": 12000 }
                })),
            ),
            (
                PageName::Common,
                section(json!({
                    "hero": { "cta": "Common start", "subtitle": "Shared subtitle" },
                    "nav": { "home": "Home" }
                })),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn page_section_wins() {
        let bundle = sample();
        assert_eq!(bundle.resolve("hero.title", PageName::Home), "Welcome");
        assert_eq!(bundle.resolve("hero.cta", PageName::Home), "Start");
    }

    #[test]
    fn common_fills_page_misses() {
        let bundle = sample();
        assert_eq!(bundle.resolve("hero.subtitle", PageName::Home), "Shared subtitle");
        assert_eq!(bundle.resolve("nav.home", PageName::Pricing), "Home");
    }

    #[test]
    fn unknown_keys_echo_back() {
        let bundle = sample();
        assert_eq!(bundle.resolve("missing.key", PageName::Home), "missing.key");
        assert_eq!(Bundle::new().resolve("hero.title", PageName::Home), "hero.title");
    }

    #[test]
    fn lookup_stops_at_non_objects() {
        let bundle = sample();
        // "hero.title" is a string, so there is nothing below it.
        assert_eq!(bundle.find("hero.title.extra", PageName::Home), None);
        // A path ending on an object is not text.
        assert_eq!(bundle.find("hero", PageName::Home), None);
        assert_eq!(bundle.find("", PageName::Home), None);
    }

    #[test]
    fn scalar_leaves_render_as_text() {
        let bundle = sample();
        assert_eq!(bundle.resolve("stats.matches", PageName::Home), "12000");
    }
}

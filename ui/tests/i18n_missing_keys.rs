//! Translation completeness.
//!
//! - Every language ships every page section, and each section defines the
//!   same key paths as English.
//! - Every literal key passed to `.text("...")` / `.text_in("...", ..)` in
//!   `src/` resolves in at least one English section.
//!
//! Keys assembled with `format!` are not seen by the source scan; the
//! per-language comparison still covers them as long as English has them.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use ui::core::config::{BUNDLE_RESOURCES, SUPPORTED_LANGUAGES};
use ui::i18n::{lookup, EmbeddedSource, Language, PageName};

/// Dotted paths of all leaves in a section.
fn leaf_paths(section: &Map<String, Value>) -> BTreeSet<String> {
    fn walk(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    walk(&path, child, out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }

    let mut out = BTreeSet::new();
    for (key, value) in section {
        walk(key, value, &mut out);
    }
    out
}

/// First string-literal argument of every `.text("` / `.text_in("` call under
/// `src_root`.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for needle in [".text(\"", ".text_in(\""] {
            let mut rest = content.as_str();
            while let Some(pos) = rest.find(needle) {
                rest = &rest[pos + needle.len()..];
                if let Some(end) = rest.find('"') {
                    let key = &rest[..end];
                    if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_') {
                        found.insert(key.to_string());
                    }
                }
            }
        }
    }

    found
}

#[test]
fn every_language_has_every_key_of_english() {
    let mut failures = Vec::new();

    for page in BUNDLE_RESOURCES.iter().copied() {
        let english = EmbeddedSource::load(Language::En, page).expect("english section");
        let expected = leaf_paths(&english);
        assert!(!expected.is_empty(), "en/{page}.json has no keys");

        for lang in SUPPORTED_LANGUAGES.iter().copied() {
            let section = EmbeddedSource::load(lang, page)
                .unwrap_or_else(|err| panic!("{lang}/{page}.json failed to load: {err}"));
            let keys = leaf_paths(&section);

            let missing: Vec<_> = expected.difference(&keys).cloned().collect();
            let extra: Vec<_> = keys.difference(&expected).cloned().collect();
            if !missing.is_empty() {
                failures.push(format!("{lang}/{page}.json is missing:\n  {}", missing.join("\n  ")));
            }
            if !extra.is_empty() {
                failures.push(format!("{lang}/{page}.json has keys English lacks:\n  {}", extra.join("\n  ")));
            }
        }
    }

    if !failures.is_empty() {
        panic!("Translation completeness check failed:\n\n{}", failures.join("\n\n"));
    }
}

#[test]
fn referenced_keys_exist_in_english() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_keys(&src_root);
    assert!(!referenced.is_empty(), "source scan found no translation keys");

    let sections: Vec<_> = BUNDLE_RESOURCES
        .iter()
        .map(|page| EmbeddedSource::load(Language::En, *page).expect("english section"))
        .collect();

    let missing: Vec<_> = referenced
        .iter()
        .filter(|key| sections.iter().all(|section| lookup(section, key).is_none()))
        .cloned()
        .collect();

    assert!(
        missing.is_empty(),
        "Referenced translation keys missing from every English section ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn every_page_has_a_hero() {
    for page in BUNDLE_RESOURCES.iter().copied().filter(|p| *p != PageName::Common) {
        let section = EmbeddedSource::load(Language::En, page).expect("english section");
        for key in ["hero.title", "hero.subtitle"] {
            assert!(lookup(&section, key).is_some(), "en/{page}.json lacks {key}");
        }
    }
}

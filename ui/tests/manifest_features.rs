//! Manifest lint for the `ui` crate, in the same substring style as the
//! desktop theme lint.
//!
//! - Every `i18n-embed` entry enables `rust-embed`; the requesters do not
//!   build without it.
//! - The `web-sys` feature list only carries bindings the crate calls.

const MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));

fn web_sys_features() -> Vec<&'static str> {
    let Some(start) = MANIFEST.find("dependencies.web-sys]") else {
        return Vec::new();
    };
    let section = &MANIFEST[start..];
    let Some(open) = section.find("features = [") else {
        return Vec::new();
    };
    let list = &section[open..];
    let close = list.find(']').unwrap_or(list.len());
    list[..close]
        .split('"')
        .skip(1)
        .step_by(2)
        .collect()
}

#[test]
fn every_i18n_embed_entry_enables_rust_embed() {
    let entries: Vec<_> = MANIFEST
        .lines()
        .filter(|line| line.trim_start().starts_with("i18n-embed ="))
        .collect();
    assert!(!entries.is_empty(), "no i18n-embed dependency found");
    for entry in entries {
        assert!(entry.contains("\"rust-embed\""), "i18n-embed entry lacks rust-embed: {entry}");
    }
}

#[test]
fn web_sys_features_are_the_ones_in_use() {
    let features = web_sys_features();
    for needed in ["Window", "Storage", "Response", "CustomEvent", "CanvasRenderingContext2d"] {
        assert!(features.contains(&needed), "web-sys feature `{needed}` missing");
    }
    for unused in ["Request", "RequestInit"] {
        assert!(!features.contains(&unused), "web-sys feature `{unused}` is enabled but unused");
    }
}

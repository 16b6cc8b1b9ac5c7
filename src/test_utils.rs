//! Shared fixtures for unit and integration tests

use std::{env, fs, path::PathBuf};

use crate::structure::Structure;

pub const NESTED_DOCUMENT: &str = "<root>\n  <child>hello</child>\n</root>\n";

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("linexml_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// A tree touching every feature the writer emits
pub fn sample_tree() -> Structure {
    Structure::new("library")
        .with_attribute("name", "city")
        .with_attribute("open", "true")
        .with_child(
            Structure::new("book")
                .with_attribute("isbn", "978-0")
                .with_child(Structure::new("title").with_content("The Rust Book"))
                .with_child(Structure::new("note").with_content("first line\nsecond line")),
        )
        .with_child(Structure::new("shelf"))
        .with_child(
            Structure::new("section")
                .with_content("intro text")
                .with_child(Structure::new("item").with_content("a = b > c")),
        )
}

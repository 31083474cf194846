// crates/batarong_game/src/config.rs
//! Character definitions loaded from a markdown-ish config file.
//!
//! Format:
//!
//! ```text
//! ## Batarong
//! image = "images/batarong.bmp"
//! ```
//!
//! A `## Name` header opens a character section; `key = value` lines inside it
//! set fields. Unknown keys and everything outside a section are ignored.

use std::io;
use std::path::Path;

use tracing::warn;

pub const MAX_CHARACTERS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDef {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Default)]
pub struct CharacterBook {
    characters: Vec<CharacterDef>,
}

impl CharacterBook {
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        let mut book = CharacterBook::default();

        for line in text.lines() {
            let line = line.trim();

            if let Some(name) = line.strip_prefix("##") {
                // Exactly two hashes open a section; `#` and `###` headings
                // are plain document structure.
                if name.starts_with('#') {
                    continue;
                }
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                book.open_section(name);
            } else if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = strip_quotes(value.trim());
                if let Some(def) = book.characters.last_mut() {
                    match key {
                        "image" => def.image = Some(value.to_string()),
                        _ => {}
                    }
                }
            }
        }

        book
    }

    /// Opens a section for `name`, reusing an existing entry so later sections
    /// with the same name override earlier ones.
    fn open_section(&mut self, name: &str) {
        if let Some(pos) = self.characters.iter().position(|c| c.name == name) {
            let def = self.characters.remove(pos);
            self.characters.push(def);
            return;
        }
        if self.characters.len() >= MAX_CHARACTERS {
            warn!(name, "character limit reached, ignoring definition");
            return;
        }
        self.characters.push(CharacterDef {
            name: name.to_string(),
            image: None,
        });
    }

    pub fn get(&self, name: &str) -> Option<&CharacterDef> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Image path for `name`, or `fallback` when the character is unknown or
    /// has no image configured.
    pub fn image_path<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name)
            .and_then(|def| def.image.as_deref())
            .unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_images() {
        let book = CharacterBook::parse(
            "## Batarong\nimage = \"images/batarong.bmp\"\n\n## Ray\nimage = \"images/ray.bmp\"\n",
        );
        assert_eq!(book.len(), 2);
        assert_eq!(
            book.image_path("Ray", "images/fallback.bmp"),
            "images/ray.bmp"
        );
    }

    #[test]
    fn unknown_character_uses_the_fallback() {
        let book = CharacterBook::parse("## Batarong\nimage = \"images/batarong.bmp\"\n");
        assert_eq!(book.image_path("Nobody", "images/fallback.bmp"), "images/fallback.bmp");
    }

    #[test]
    fn section_without_an_image_uses_the_fallback() {
        let book = CharacterBook::parse("## Ghost\n");
        assert!(book.get("Ghost").is_some());
        assert_eq!(book.image_path("Ghost", "images/fallback.bmp"), "images/fallback.bmp");
    }

    #[test]
    fn later_sections_override_earlier_ones() {
        let book = CharacterBook::parse(
            "## Ray\nimage = \"images/old.bmp\"\n## Ray\nimage = \"images/new.bmp\"\n",
        );
        assert_eq!(book.len(), 1);
        assert_eq!(book.image_path("Ray", "x"), "images/new.bmp");
    }

    #[test]
    fn unquoted_values_and_junk_lines_are_tolerated() {
        let book = CharacterBook::parse(
            "random text\n## Ray\nimage = images/ray.bmp\ncolor = blue\n",
        );
        assert_eq!(book.image_path("Ray", "x"), "images/ray.bmp");
    }

    #[test]
    fn definitions_past_the_cap_are_dropped() {
        let mut text = String::new();
        for i in 0..20 {
            text.push_str(&format!("## Char{i}\n"));
        }
        let book = CharacterBook::parse(&text);
        assert_eq!(book.len(), MAX_CHARACTERS);
        assert!(book.get("Char19").is_none());
    }

    #[test]
    fn only_double_hash_headings_open_sections() {
        let book = CharacterBook::parse(
            "# Characters\n## Ray\n### note\nimage = images/ray.bmp\n#### deeper\n",
        );
        assert_eq!(book.len(), 1);
        assert_eq!(book.image_path("Ray", "fallback.bmp"), "images/ray.bmp");
    }

    #[test]
    fn assignments_before_any_section_are_ignored() {
        let book = CharacterBook::parse("image = \"orphan.bmp\"\n## Ray\n");
        assert_eq!(book.image_path("Ray", "x"), "x");
    }
}

// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line based editing of Java properties files.
//!
//! Weblate and XWiki do not agree on a few details of the properties
//! format: XWiki doubles single quotes in messages with parameters
//! (`{0}`), keeps deprecated keys in marked sections and puts internal
//! keys after a `notranslationsmarker` line. The filters here convert
//! between the two flavors while keeping the layout of the XWiki files.

use crate::error::{self, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Prefix added to the keys found in a deprecated section on import.
pub const DEPRECATED_PREFIX: &str = "#@deprecated#";
const DEPRECATED_START: &str = "#@deprecatedstart";
const DEPRECATED_END: &str = "#@deprecatedend";
/// Keys following this marker are never translated.
pub const NO_TRANSLATIONS_MARKER: &str = "notranslationsmarker";

/// Matches any `key=value` or `key: value` line.
fn any_property_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^#][^\s]*?)\s*[=:](.*)").expect("well-formed regex"))
}

/// Matches the line defining `key` in a whole document.
fn key_regex(key: &str) -> Regex {
    Regex::new(&format!(r"(?m)^({})\s*[=:](.*)", regex::escape(key)))
        .expect("escaped key forms a valid regex")
}

fn parameter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{[0-9]+\}").expect("well-formed regex"))
}

fn continuation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\\n\s*").expect("well-formed regex"))
}

/// Split a property line into its trimmed key and value.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let captures = any_property_regex().captures(line)?;
    let key = captures.get(1)?.as_str().trim();
    let value = captures.get(2)?.as_str().trim();
    Some((key, value))
}

fn is_no_translations_marker(line: &str) -> bool {
    line.trim().starts_with(NO_TRANSLATIONS_MARKER)
}

/// Escape the newlines of a value.
pub fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Unescape the newlines of a value.
pub fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// A Java properties document together with its parsed values.
#[derive(Debug, Clone, Default)]
pub struct PropertiesFile {
    pub document: String,
    properties: HashMap<String, String>,
}

impl PropertiesFile {
    /// Parse a properties document.
    ///
    /// # Examples
    ///
    /// ```
    /// use xwiki_weblate_helpers::properties::PropertiesFile;
    ///
    /// let properties = PropertiesFile::parse("# Comment\ngreeting = Hello\\nWorld\n");
    /// assert_eq!(properties.get_value("greeting"), "Hello\nWorld");
    /// assert_eq!(properties.get_value("missing"), "");
    /// ```
    pub fn parse(document: impl Into<String>) -> Self {
        let mut properties = Self::default();
        properties.load(document);
        properties
    }

    pub fn read(path: &Path) -> Result<Self> {
        Ok(Self::parse(error::read_to_string(path)?))
    }

    /// Replace the document and map its properties.
    pub fn load(&mut self, document: impl Into<String>) {
        self.document = document.into();
        self.map_properties();
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        error::write(path, &self.document)
    }

    /// Get the unescaped value of `key`, or an empty string.
    pub fn get_value(&self, key: &str) -> &str {
        self.properties.get(key).map_or("", String::as_str)
    }

    /// Set the value of `key`, adding the key at the end of the
    /// document if it is not defined yet.
    pub fn set_value(&mut self, key: &str, value: &str) {
        let key = key.trim();
        let value = escape(value.trim());
        let line = format!("{key}={value}");
        match key_regex(key).find(&self.document).map(|found| found.range()) {
            Some(range) => self.document.replace_range(range, &line),
            None => {
                if !self.document.is_empty() && !self.document.ends_with('\n') {
                    self.document.push('\n');
                }
                self.document.push_str(&line);
            }
        }
        self.properties.insert(key.to_owned(), unescape(&value));
    }

    /// Remove the line defining `key`, if any.
    pub fn remove_key(&mut self, key: &str) {
        let key = key.trim();
        if let Some(found) = key_regex(key).find(&self.document).map(|found| found.range()) {
            let mut end = found.end;
            if self.document[end..].starts_with('\n') {
                end += 1;
            }
            self.document.replace_range(found.start..end, "");
            self.properties.remove(key);
        }
    }

    /// Replace `old` with `new` on the lines using message parameters.
    pub fn replace_values(&self, old: &str, new: &str) -> String {
        self.document
            .split_inclusive('\n')
            .map(|line| {
                if parameter_regex().is_match(line) {
                    line.replace(old, new)
                } else {
                    line.to_owned()
                }
            })
            .collect()
    }

    /// Convert an XWiki properties document to the Weblate flavor.
    ///
    /// Only the translatable `key=value` lines are kept. Keys of
    /// deprecated sections are prefixed with [`DEPRECATED_PREFIX`] so
    /// that Weblate shows them as comments.
    pub fn filter_import(&mut self) {
        let document = self.replace_values("''", "'").replace("\\ ", " ");

        let mut filtered = String::new();
        let mut is_deprecated = false;
        for line in document.split_inclusive('\n') {
            if is_deprecated && line.starts_with(DEPRECATED_END) {
                is_deprecated = false;
                filtered.push_str(DEPRECATED_END);
                filtered.push_str("\n\n");
            } else if line.starts_with(DEPRECATED_START) {
                is_deprecated = true;
                filtered.push_str(DEPRECATED_START);
                filtered.push('\n');
            } else if is_no_translations_marker(line) {
                break;
            }

            let line = line.strip_prefix(DEPRECATED_PREFIX).unwrap_or(line);
            if let Some((key, value)) = parse_line(line) {
                if value.is_empty() {
                    continue;
                }
                if is_deprecated {
                    filtered.push_str(DEPRECATED_PREFIX);
                }
                filtered.push_str(&format!("{key}={value}\n"));
            }
        }

        self.load(filtered);
    }

    /// Convert a Weblate properties document back to the XWiki flavor.
    pub fn filter_export(&mut self) {
        self.document = self.replace_values("''", "'");
        self.document = self.replace_values("'", "''");
    }

    /// Keep the structure of this document and take the values from
    /// `translation`.
    ///
    /// Keys without translation are kept as a `### Missing:` comment
    /// holding the value of this document. Nothing is replaced after
    /// the no-translations marker.
    pub fn replace_with(&mut self, translation: &PropertiesFile) {
        // Weblate drops the line continuations, so join them on both
        // sides before comparing.
        let template = continuation_regex()
            .replace_all(&self.document, "")
            .into_owned();
        let translation =
            PropertiesFile::parse(continuation_regex().replace_all(&translation.document, ""));

        let mut document = String::new();
        let mut has_no_translations_marker = false;
        for line in template.split_inclusive('\n') {
            if is_no_translations_marker(line) {
                has_no_translations_marker = true;
            }
            match parse_line(line) {
                Some((key, value)) if !value.is_empty() && !has_no_translations_marker => {
                    let new_value = escape(translation.get_value(key));
                    if new_value.is_empty() {
                        document.push_str(&format!("### Missing: {key}={value}\n"));
                    } else {
                        document.push_str(&format!("{key}={new_value}\n"));
                    }
                }
                _ => document.push_str(line),
            }
        }

        self.load(document);
    }

    /// Rebuild the key to value mapping from the document.
    pub fn map_properties(&mut self) {
        self.properties.clear();
        let document = self.document.replace(DEPRECATED_PREFIX, "");
        for line in document.lines() {
            if let Some((key, value)) = parse_line(line) {
                if self.properties.contains_key(key) {
                    tracing::warn!(key, "property already exists, keeping the last value");
                }
                self.properties.insert(key.to_owned(), unescape(value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse() {
        let properties = PropertiesFile::parse(
            "# A comment\n\
             !bang=not a comment here\n\
             equals=value\n\
             colon: other value\n\
             spaced  =  padded  \n\
             multi=line\\nvalue\n\
             split=a=b\n",
        );
        assert_eq!(properties.get_value("equals"), "value");
        assert_eq!(properties.get_value("colon"), "other value");
        assert_eq!(properties.get_value("spaced"), "padded");
        assert_eq!(properties.get_value("multi"), "line\nvalue");
        assert_eq!(properties.get_value("split"), "a=b");
        assert_eq!(properties.get_value("!bang"), "not a comment here");
        assert_eq!(properties.get_value("# A comment"), "");
    }

    #[test]
    fn test_parse_duplicated_key() {
        let properties = PropertiesFile::parse("key=first\nkey=second\n");
        assert_eq!(properties.get_value("key"), "second");
    }

    #[test]
    fn test_parse_deprecated_key() {
        let properties = PropertiesFile::parse("#@deprecated#old=Old\n");
        assert_eq!(properties.get_value("old"), "Old");
    }

    #[test]
    fn test_set_value_existing() {
        let mut properties = PropertiesFile::parse("a=1\nb : 2\nc=3\n");
        properties.set_value("b", "  two ");
        assert_eq!(properties.document, "a=1\nb=two\nc=3\n");
        assert_eq!(properties.get_value("b"), "two");
    }

    #[test]
    fn test_set_value_new() {
        let mut properties = PropertiesFile::parse("a=1");
        properties.set_value("b", "2");
        properties.set_value("c", "3");
        assert_eq!(properties.document, "a=1\nb=2\nc=3");

        let mut properties = PropertiesFile::default();
        properties.set_value("a", "1");
        assert_eq!(properties.document, "a=1");
    }

    #[test]
    fn test_set_value_escapes_newlines() {
        let mut properties = PropertiesFile::default();
        properties.set_value("Main.content", "first\nsecond");
        assert_eq!(properties.document, "Main.content=first\\nsecond");
        assert_eq!(properties.get_value("Main.content"), "first\nsecond");
    }

    #[test]
    fn test_set_value_matches_key_literally() {
        let mut properties = PropertiesFile::parse("aXb=1\n");
        properties.set_value("a.b", "2");
        assert_eq!(properties.document, "aXb=1\na.b=2");
    }

    #[test]
    fn test_remove_key() {
        let mut properties = PropertiesFile::parse("a=1\nb=2\nc=3");
        properties.remove_key("b");
        assert_eq!(properties.document, "a=1\nc=3");
        assert_eq!(properties.get_value("b"), "");
        properties.remove_key("c");
        assert_eq!(properties.document, "a=1\n");
        properties.remove_key("missing");
        assert_eq!(properties.document, "a=1\n");
    }

    #[test]
    fn test_replace_values() {
        let properties = PropertiesFile::parse("a=It''s {0}\nb=It''s\n");
        assert_eq!(
            properties.replace_values("''", "'"),
            "a=It's {0}\nb=It''s\n"
        );
    }

    #[test]
    fn test_filter_import() {
        let mut properties = PropertiesFile::parse(
            "# Comment\n\
             \n\
             core.title=Welcome\n\
             core.empty=\n\
             core.quote=It''s {0}\n\
             core.plain=It''s\n\
             core.space=Hello\\ world\n\
             #@deprecatedstart\n\
             old.key=Old value\n\
             #@deprecatedend\n\
             \n\
             notranslationsmarker\n\
             internal.key=Internal\n",
        );
        properties.filter_import();
        assert_eq!(
            properties.document,
            "core.title=Welcome\n\
             core.quote=It's {0}\n\
             core.plain=It''s\n\
             core.space=Hello world\n\
             #@deprecatedstart\n\
             #@deprecated#old.key=Old value\n\
             #@deprecatedend\n\
             \n"
        );
        assert_eq!(properties.get_value("old.key"), "Old value");
        assert_eq!(properties.get_value("internal.key"), "");
    }

    #[test]
    fn test_filter_import_is_idempotent() {
        let mut properties = PropertiesFile::parse(
            "a=It''s {0}\n\
             #@deprecatedstart\n\
             old=Old\n\
             #@deprecatedend\n\
             b=B\n",
        );
        properties.filter_import();
        let once = properties.document.clone();
        properties.filter_import();
        assert_eq!(properties.document, once);
    }

    #[test]
    fn test_filter_export() {
        let mut properties = PropertiesFile::parse("a=It's {0}\nb=It''s {1}\nc=It's\n");
        properties.filter_export();
        assert_eq!(properties.document, "a=It''s {0}\nb=It''s {1}\nc=It's\n");
        properties.filter_export();
        assert_eq!(properties.document, "a=It''s {0}\nb=It''s {1}\nc=It's\n");
    }

    #[test]
    fn test_import_export_round_trip() {
        let source = "greeting=Hello {0}, it''s me\nfarewell=Bye\n";
        let mut properties = PropertiesFile::parse(source);
        properties.filter_import();
        assert_eq!(properties.get_value("greeting"), "Hello {0}, it's me");
        properties.filter_export();
        assert_eq!(properties.document, source);
    }

    #[test]
    fn test_replace_with() {
        let mut template = PropertiesFile::parse(
            "# Translations for the core\n\
             \n\
             core.title=Welcome\n\
             core.long=First part \\\n    second part\n\
             core.missing=Not translated\n\
             core.empty=\n\
             notranslationsmarker\n\
             internal.key=Internal\n",
        );
        let translation = PropertiesFile::parse(
            "core.title=Bienvenue\n\
             core.long=Première partie \\\n  seconde partie\n\
             core.empty=Vide\n\
             internal.key=Interne\n",
        );
        template.replace_with(&translation);
        assert_eq!(
            template.document,
            "# Translations for the core\n\
             \n\
             core.title=Bienvenue\n\
             core.long=Première partie seconde partie\n\
             ### Missing: core.missing=Not translated\n\
             core.empty=\n\
             notranslationsmarker\n\
             internal.key=Internal\n"
        );
        assert_eq!(template.get_value("core.title"), "Bienvenue");
    }

    #[test]
    fn test_replace_with_escapes_newlines() {
        let mut template = PropertiesFile::parse("Main.content=Content\n");
        let mut translation = PropertiesFile::default();
        translation.set_value("Main.content", "Ligne 1\nLigne 2");
        template.replace_with(&translation);
        assert_eq!(template.document, "Main.content=Ligne 1\\nLigne 2\n");
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".translation/a/b/Resources_fr.properties");
        let properties = PropertiesFile::parse("a=1\n");
        properties.write(&path).unwrap();
        assert_eq!(PropertiesFile::read(&path).unwrap().get_value("a"), "1");
    }
}

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

//! Regex based editing of XWiki XML documents.
//!
//! XWiki stores wiki pages as XML documents where each field of the page
//! (`title`, `content`, `language`, ...) is a top level tag. The exported
//! documents are stable enough that we can work on them as text, which
//! keeps the untouched parts of the file byte for byte identical.

use crate::error::{self, Result};
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

/// Matches `<tag>` and the whitespace following it.
const START_PATTERN: &str = r"<\s*{}\s*>\s*";
/// Matches `<tag/>`.
const SELF_CLOSE_PATTERN: &str = r"<\s*{}\s*/\s*>";
/// Matches `</tag>` and the whitespace preceding it.
const END_PATTERN: &str = r"\s*<\s*/\s*{}\s*>";

fn tag_regex(pattern: &str, tag: &str) -> Regex {
    Regex::new(&pattern.replace("{}", &regex::escape(tag))).expect("escaped tag forms a valid regex")
}

fn find_range(regex: &Regex, text: &str) -> Option<Range<usize>> {
    regex.find(text).map(|found| found.range())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"&(amp|lt|gt);").expect("well-formed regex"));
    re.replace_all(text, |caps: &regex::Captures| match &caps[1] {
        "lt" => "<",
        "gt" => ">",
        _ => "&",
    })
    .into_owned()
}

/// An XWiki XML document kept as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlFile {
    pub document: String,
}

impl XmlFile {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(error::read_to_string(path)?))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        error::write(path, &self.document)
    }

    /// Get the unescaped content of the first `tag` in the document.
    ///
    /// Leading and trailing whitespace is not part of the content. An
    /// empty string is returned when the tag cannot be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use xwiki_weblate_helpers::xml::XmlFile;
    ///
    /// let xml = XmlFile::new("<title>\n  Fish &amp; Chips\n</title>");
    /// assert_eq!(xml.get_tag_content("title"), "Fish & Chips");
    /// assert_eq!(xml.get_tag_content("content"), "");
    /// ```
    pub fn get_tag_content(&self, tag: &str) -> String {
        match self.find_element(tag) {
            Some((start, Some(end))) => unescape(&self.document[start.end..end.start]),
            _ => String::new(),
        }
    }

    /// Find the ranges of the opening and closing `tag`.
    fn find_element(&self, tag: &str) -> Option<(Range<usize>, Option<Range<usize>>)> {
        let start = tag_regex(START_PATTERN, tag).find(&self.document)?.range();
        let end = tag_regex(END_PATTERN, tag)
            .find_at(&self.document, start.end)
            .map(|end| end.range());
        Some((start, end))
    }

    /// Set the content of `tag`, creating the tag if needed.
    ///
    /// The content is trimmed and escaped. A self-closing `<tag/>` is
    /// expanded in place and a missing tag is appended to the document.
    pub fn set_tag_content(&mut self, tag: &str, content: &str) {
        let content = escape(content.trim());
        match self.find_element(tag) {
            Some((start, Some(end))) => {
                self.document.replace_range(start.end..end.start, &content);
                return;
            }
            Some((start, None)) => {
                self.document
                    .insert_str(start.end, &format!("{content}</{tag}>"));
                return;
            }
            None => {}
        }

        let element = format!("<{tag}>{content}</{tag}>");
        match find_range(&tag_regex(SELF_CLOSE_PATTERN, tag), &self.document) {
            Some(self_closed) => self.document.replace_range(self_closed, &element),
            None => self.document.push_str(&element),
        }
    }

    /// Remove the first `tag` from the document, together with its
    /// indentation and the whitespace following it.
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let start_pattern = format!("[ \t]*{START_PATTERN}");
        if let Some(start) = find_range(&tag_regex(&start_pattern, tag), &self.document) {
            let end_pattern = format!(r"{END_PATTERN}\s*");
            let end = tag_regex(&end_pattern, tag)
                .find_at(&self.document, start.end)
                .map_or(start.end, |end| end.end());
            self.document.replace_range(start.start..end, "");
            return true;
        }

        let self_close_pattern = format!(r"[ \t]*{SELF_CLOSE_PATTERN}\s*");
        match find_range(&tag_regex(&self_close_pattern, tag), &self.document) {
            Some(self_closed) => {
                self.document.replace_range(self_closed, "");
                true
            }
            None => false,
        }
    }

    /// Remove every occurrence of `tag` from the document.
    pub fn remove_all_tags(&mut self, tag: &str) {
        while self.remove_tag(tag) {}
    }

    /// Create the default translation document for `lang` based on
    /// the `base` document.
    ///
    /// The translation keeps the page metadata of the base document,
    /// with an empty content and without objects or attachments, since
    /// those belong to the base document only.
    pub fn create_translation(base: &XmlFile, lang: &str) -> XmlFile {
        let mut xml = XmlFile::new(
            base.document
                .replace(r#"locale="""#, &format!(r#"locale="{lang}""#)),
        );
        xml.set_tag_content("language", lang);
        xml.set_tag_content("translation", "1");
        xml.set_tag_content("content", "");
        xml.remove_all_tags("object");
        xml.remove_all_tags("attachment");
        xml
    }
}

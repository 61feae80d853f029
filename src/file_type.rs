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

use crate::error::{self, Result};
use std::path::Path;

/// Marker of the XWiki documents holding translations as properties.
pub const TRANSLATION_DOCUMENT_CLASS: &str =
    "<className>XWiki.TranslationDocumentClass</className>";

/// The kinds of XWiki translation sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// A Java properties file, one file per language.
    Properties,
    /// An XWiki page translated through its `title` and `content`.
    Xml,
    /// An XWiki page whose `content` is a properties document.
    XmlProperties,
}

impl FileType {
    /// Detect the type of the file at `path`.
    ///
    /// Returns `None` when the file does not exist or when its
    /// extension is not supported.
    pub fn detect(path: &Path) -> Result<Option<FileType>> {
        if !path.is_file() {
            return Ok(None);
        }
        let file_type = match path.extension().and_then(|ext| ext.to_str()) {
            Some("properties") => Some(FileType::Properties),
            Some("xml") => Some(Self::for_xml_document(&error::read_to_string(path)?)),
            _ => None,
        };
        Ok(file_type)
    }

    /// The type of an XWiki XML document with the given content.
    pub fn for_xml_document(document: &str) -> FileType {
        if document.contains(TRANSLATION_DOCUMENT_CLASS) {
            FileType::XmlProperties
        } else {
            FileType::Xml
        }
    }

    /// Whether the translations are stored as properties.
    pub fn has_properties(self) -> bool {
        matches!(self, FileType::Properties | FileType::XmlProperties)
    }
}

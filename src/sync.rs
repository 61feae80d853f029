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

//! Synchronization between the XWiki sources and the Weblate files.
//!
//! The import runs after Weblate pulled the repository and converts
//! the XWiki sources to the `.translation/` files. The export runs
//! before Weblate commits and writes the translations back into the
//! XWiki sources.

use crate::error::Result;
use crate::file_type::FileType;
use crate::layout::{ComponentLayout, BASE_LANGUAGE};
use crate::properties::PropertiesFile;
use crate::xml::XmlFile;
use std::path::PathBuf;

/// The files written while synchronizing a component.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Paths relative to the repository root.
    pub written: Vec<PathBuf>,
}

fn title_key(name: &str) -> String {
    format!("{name}.title")
}

fn content_key(name: &str) -> String {
    format!("{name}.content")
}

/// Convert every XWiki source of the component to its Weblate file.
pub fn import_component(layout: &ComponentLayout) -> Result<SyncReport> {
    let mut report = SyncReport::default();
    for lang in layout.source_languages()? {
        let source = layout.root().join(layout.source_path(&lang));
        let properties = match layout.file_type() {
            FileType::Properties => {
                let mut properties = PropertiesFile::read(&source)?;
                properties.filter_import();
                properties
            }
            FileType::XmlProperties => {
                let xml = XmlFile::load(&source)?;
                let mut properties = PropertiesFile::parse(xml.get_tag_content("content"));
                properties.filter_import();
                properties
            }
            FileType::Xml => {
                let xml = XmlFile::load(&source)?;
                let name = layout.name();
                let mut properties = PropertiesFile::default();
                properties.set_value(&title_key(&name), &xml.get_tag_content("title"));
                properties.set_value(&content_key(&name), &xml.get_tag_content("content"));
                properties
            }
        };

        let target = layout.translation_path(&lang);
        properties.write(&layout.root().join(&target))?;
        tracing::debug!(lang = lang.as_str(), path = %target.display(), "imported translation");
        report.written.push(target);
    }
    Ok(report)
}

/// Write every Weblate file of the component back to its XWiki source.
///
/// Missing XWiki translations are created from the base file.
pub fn export_component(layout: &ComponentLayout) -> Result<SyncReport> {
    let mut report = SyncReport::default();
    let base_path = layout.root().join(layout.base_file());
    for lang in layout.translation_languages()? {
        let translation =
            PropertiesFile::read(&layout.root().join(layout.translation_path(&lang)))?;
        let target = layout.source_path(&lang);
        let target_path = layout.root().join(&target);

        match layout.file_type() {
            FileType::Properties => {
                let mut properties = PropertiesFile::read(&base_path)?;
                properties.replace_with(&translation);
                properties.filter_export();
                properties.write(&target_path)?;
            }
            FileType::XmlProperties => {
                let base = XmlFile::load(&base_path)?;
                let mut xml = open_or_create(&base, &target_path, &lang)?;
                let mut properties = PropertiesFile::parse(base.get_tag_content("content"));
                properties.replace_with(&translation);
                properties.filter_export();
                xml.set_tag_content("content", &properties.document);
                xml.write(&target_path)?;
            }
            FileType::Xml => {
                let base = XmlFile::load(&base_path)?;
                let mut xml = open_or_create(&base, &target_path, &lang)?;
                let name = layout.name();
                xml.set_tag_content("title", translation.get_value(&title_key(&name)));
                xml.set_tag_content("content", translation.get_value(&content_key(&name)));
                xml.write(&target_path)?;
            }
        }

        tracing::debug!(lang = lang.as_str(), path = %target.display(), "exported translation");
        report.written.push(target);
    }
    Ok(report)
}

fn open_or_create(base: &XmlFile, path: &std::path::Path, lang: &str) -> Result<XmlFile> {
    if lang == BASE_LANGUAGE {
        return Ok(base.clone());
    }
    if path.is_file() {
        XmlFile::load(path)
    } else {
        tracing::info!(lang, path = %path.display(), "creating new translation document");
        Ok(XmlFile::create_translation(base, lang))
    }
}

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

//! Move translation keys from one base translation file to another,
//! together with all their translations.

use crate::error::{Error, Result};
use crate::file_type::FileType;
use crate::layout::{find_languages, language_path, BASE_LANGUAGE};
use crate::properties::PropertiesFile;
use crate::xml::XmlFile;
use std::path::{Path, PathBuf};

/// A key to migrate, possibly renamed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMove {
    pub old: String,
    pub new: String,
}

impl KeyMove {
    /// Parse a key list entry: `key` or `old.key=new.key`.
    pub fn parse(entry: &str) -> Option<KeyMove> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }
        let (old, new) = entry.split_once('=').unwrap_or((entry, entry));
        Some(KeyMove {
            old: old.trim().to_owned(),
            new: new.trim().to_owned(),
        })
    }
}

/// Parse a key list, one entry per line.
pub fn parse_key_list(text: &str) -> Vec<KeyMove> {
    text.lines().filter_map(KeyMove::parse).collect()
}

/// The number of values moved for each language.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub moved: Vec<(String, usize)>,
}

/// A translation file holding properties, either directly or in the
/// content of an XWiki document.
struct Translation {
    path: PathBuf,
    properties: PropertiesFile,
    xml: Option<XmlFile>,
}

impl Translation {
    fn open_or_create(base: &Path, file_type: FileType, lang: Option<&str>) -> Result<Self> {
        let path = match lang {
            Some(lang) => language_path(base, file_type, lang),
            None => base.to_path_buf(),
        };
        match file_type {
            FileType::Properties if path.is_file() => Ok(Self {
                properties: PropertiesFile::read(&path)?,
                path,
                xml: None,
            }),
            FileType::Properties => Ok(Self {
                path,
                properties: PropertiesFile::default(),
                xml: None,
            }),
            FileType::XmlProperties => {
                let xml = if path.is_file() {
                    XmlFile::load(&path)?
                } else {
                    let lang = lang.unwrap_or(BASE_LANGUAGE);
                    XmlFile::create_translation(&XmlFile::load(base)?, lang)
                };
                Ok(Self {
                    properties: PropertiesFile::parse(xml.get_tag_content("content")),
                    path,
                    xml: Some(xml),
                })
            }
            FileType::Xml => Err(Error::UnsupportedFile(path)),
        }
    }

    fn save(mut self) -> Result<()> {
        match &mut self.xml {
            Some(xml) => {
                xml.set_tag_content("content", &self.properties.document);
                xml.write(&self.path)
            }
            None => self.properties.write(&self.path),
        }
    }
}

fn properties_file_type(path: &Path) -> Result<FileType> {
    match FileType::detect(path)? {
        Some(file_type) if file_type.has_properties() => Ok(file_type),
        _ => Err(Error::UnsupportedFile(path.to_path_buf())),
    }
}

/// Move `keys` from the `source` base translation file and its
/// translations to the `destination` base translation file and the
/// matching translations.
///
/// Both files must hold properties. Destination translations which do
/// not exist yet are created.
pub fn migrate_keys(source: &Path, destination: &Path, keys: &[KeyMove]) -> Result<MigrationReport> {
    let source_type = properties_file_type(source)?;
    let destination_type = properties_file_type(destination)?;

    let mut languages = vec![None];
    languages.extend(find_languages(source, source_type)?.into_iter().map(Some));

    let mut report = MigrationReport::default();
    for lang in languages {
        let mut translation = Translation::open_or_create(source, source_type, lang.as_deref())?;
        let mut values = Vec::new();
        for key in keys {
            let value = translation.properties.get_value(&key.old).to_owned();
            if !value.is_empty() {
                translation.properties.remove_key(&key.old);
                values.push((key.new.as_str(), value));
            }
        }
        if values.is_empty() {
            continue;
        }

        // The source keeps the values until the destination is saved.
        let mut target =
            Translation::open_or_create(destination, destination_type, lang.as_deref())?;
        for (key, value) in &values {
            target.properties.set_value(key, value);
        }
        target.save()?;
        translation.save()?;

        let label = lang.unwrap_or_else(|| BASE_LANGUAGE.to_owned());
        tracing::info!(lang = label.as_str(), count = values.len(), "migrated keys");
        report.moved.push((label, values.len()));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_type::TRANSLATION_DOCUMENT_CLASS;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_parse_key_list() {
        assert_eq!(
            parse_key_list("a.key\n\n  old.key = new.key \n"),
            vec![
                KeyMove {
                    old: "a.key".into(),
                    new: "a.key".into(),
                },
                KeyMove {
                    old: "old.key".into(),
                    new: "new.key".into(),
                },
            ]
        );
    }

    #[test]
    fn test_migrate_properties_to_xml_properties() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let source = root.join("Resources.properties");
        let destination = root.join("Translations.xml");
        fs::write(&source, "keep=Keep\nmove=Move\nrename=Rename\n").unwrap();
        fs::write(root.join("Resources_fr.properties"), "keep=Garder\nmove=Bouger\n").unwrap();
        fs::write(root.join("Resources_de.properties"), "keep=Behalten\n").unwrap();
        fs::write(
            &destination,
            format!(
                "<xwikidoc locale=\"\">\n<language/>\n<content>existing=Existing</content>\n\
                 <object>{TRANSLATION_DOCUMENT_CLASS}</object>\n</xwikidoc>\n"
            ),
        )
        .unwrap();

        let keys = parse_key_list("move\nrename=renamed\n");
        let report = migrate_keys(&source, &destination, &keys).unwrap();
        assert_eq!(
            report.moved,
            vec![("en".to_owned(), 2), ("fr".to_owned(), 1)]
        );

        assert_eq!(fs::read_to_string(&source).unwrap(), "keep=Keep\n");
        assert_eq!(
            fs::read_to_string(root.join("Resources_fr.properties")).unwrap(),
            "keep=Garder\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("Resources_de.properties")).unwrap(),
            "keep=Behalten\n"
        );
        assert_eq!(
            XmlFile::load(&destination).unwrap().get_tag_content("content"),
            "existing=Existing\nmove=Move\nrenamed=Rename"
        );
        let french = XmlFile::load(&root.join("Translations.fr.xml")).unwrap();
        assert_eq!(french.get_tag_content("language"), "fr");
        assert_eq!(french.get_tag_content("content"), "move=Bouger");
        assert!(!root.join("Translations.de.xml").exists());
    }

    #[test]
    fn test_migrate_rejects_xml_pages() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Resources.properties");
        let destination = dir.path().join("Help.xml");
        fs::write(&source, "a=1\n").unwrap();
        fs::write(&destination, "<xwikidoc><content/></xwikidoc>").unwrap();
        let err = migrate_keys(&source, &destination, &parse_key_list("a")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFile(_)));
    }

    #[test]
    fn test_migrate_keeps_source_when_destination_fails() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let source = root.join("Src.properties");
        let destination = root.join("Dst.properties");
        fs::write(&source, "k=K\n").unwrap();
        fs::write(root.join("Src_fr.properties"), "k=Kfr\n").unwrap();
        fs::write(&destination, "").unwrap();
        fs::create_dir(root.join("Dst_fr.properties")).unwrap();

        let err = migrate_keys(&source, &destination, &parse_key_list("k")).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(
            fs::read_to_string(root.join("Src_fr.properties")).unwrap(),
            "k=Kfr\n"
        );
    }
}

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

//! Where the translation files of a component live.
//!
//! Weblate works on a `.translation/` directory at the root of the
//! repository, holding one properties file per language. The XWiki
//! sources sit next to it, as properties files (`Resources_fr.properties`)
//! or as XML documents (`Resources.fr.xml`). The base file, without a
//! language suffix, holds the English text.

use crate::error::{self, Error, Result};
use crate::file_type::FileType;
use std::path::{Path, PathBuf};

/// Directory holding the files exposed to Weblate.
pub const TRANSLATION_DIR: &str = ".translation";
/// The language of the base files.
pub const BASE_LANGUAGE: &str = "en";
const FILE_MASK_SUFFIX: &str = "_*.properties";

fn language_parts(file_type: FileType) -> (&'static str, &'static str) {
    match file_type {
        FileType::Properties => ("_", ".properties"),
        FileType::Xml | FileType::XmlProperties => (".", ".xml"),
    }
}

fn file_stem(base: &Path) -> String {
    base.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Path of the `lang` translation of the `base` file.
///
/// ```
/// use std::path::Path;
/// use xwiki_weblate_helpers::file_type::FileType;
/// use xwiki_weblate_helpers::layout::language_path;
///
/// let base = Path::new("src/main/resources/ApplicationResources.properties");
/// assert_eq!(
///     language_path(base, FileType::Properties, "fr"),
///     Path::new("src/main/resources/ApplicationResources_fr.properties")
/// );
/// let base = Path::new("src/main/resources/Main/Help.xml");
/// assert_eq!(
///     language_path(base, FileType::Xml, "fr"),
///     Path::new("src/main/resources/Main/Help.fr.xml")
/// );
/// ```
pub fn language_path(base: &Path, file_type: FileType, lang: &str) -> PathBuf {
    let (separator, extension) = language_parts(file_type);
    base.with_file_name(format!("{}{separator}{lang}{extension}", file_stem(base)))
}

/// Find the languages for which a translation of `base` exists.
///
/// The languages are sorted.
pub fn find_languages(base: &Path, file_type: FileType) -> Result<Vec<String>> {
    let (separator, extension) = language_parts(file_type);
    let file_prefix = format!("{}{separator}", file_stem(base));
    let pattern = format!(
        "{}*{extension}",
        glob::Pattern::escape(&base.with_file_name(&file_prefix).to_string_lossy())
    );

    let mut languages = Vec::new();
    for path in glob::glob(&pattern)? {
        let path = path?;
        let lang = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(&file_prefix))
            .and_then(|name| name.strip_suffix(extension));
        match lang {
            Some(lang) if !lang.is_empty() => languages.push(lang.to_owned()),
            _ => tracing::debug!(path = %path.display(), "ignoring file without language"),
        }
    }
    languages.sort();
    Ok(languages)
}

/// The translation files of one Weblate component.
#[derive(Debug, Clone)]
pub struct ComponentLayout {
    root: PathBuf,
    base_file: PathBuf,
    file_type: FileType,
}

impl ComponentLayout {
    /// Resolve the layout of the component in the repository `root`
    /// from its Weblate `file_mask`, such as
    /// `.translation/path/to/Resources_*.properties`.
    pub fn new(root: &Path, file_mask: &str) -> Result<Self> {
        let mask = file_mask
            .strip_prefix(TRANSLATION_DIR)
            .and_then(|mask| mask.strip_prefix('/'))
            .unwrap_or(file_mask);
        let stem = mask
            .strip_suffix(FILE_MASK_SUFFIX)
            .ok_or_else(|| Error::InvalidFileMask(file_mask.to_owned()))?;

        let base_properties = PathBuf::from(format!("{stem}.properties"));
        let base_xml = PathBuf::from(format!("{stem}.xml"));
        let (base_file, file_type) = if root.join(&base_properties).is_file() {
            (base_properties, FileType::Properties)
        } else if root.join(&base_xml).is_file() {
            let document = error::read_to_string(&root.join(&base_xml))?;
            (base_xml, FileType::for_xml_document(&document))
        } else {
            return Err(Error::MissingBaseFile(file_mask.to_owned()));
        };

        Ok(Self {
            root: root.to_path_buf(),
            base_file,
            file_type,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// The base file, relative to the repository root.
    pub fn base_file(&self) -> &Path {
        &self.base_file
    }

    /// Name of the base file without extension, e.g. `Resources`.
    pub fn name(&self) -> String {
        file_stem(&self.base_file)
    }

    /// Relative path of the XWiki source for `lang`.
    pub fn source_path(&self, lang: &str) -> PathBuf {
        if lang == BASE_LANGUAGE {
            self.base_file.clone()
        } else {
            language_path(&self.base_file, self.file_type, lang)
        }
    }

    /// Relative path of the Weblate file for `lang`.
    pub fn translation_path(&self, lang: &str) -> PathBuf {
        language_path(&self.translation_base(), FileType::Properties, lang)
    }

    fn translation_base(&self) -> PathBuf {
        Path::new(TRANSLATION_DIR).join(self.base_file.with_extension("properties"))
    }

    /// Languages of the XWiki sources, starting with the base language.
    pub fn source_languages(&self) -> Result<Vec<String>> {
        let mut languages = vec![BASE_LANGUAGE.to_owned()];
        for lang in find_languages(&self.root.join(&self.base_file), self.file_type)? {
            if lang == BASE_LANGUAGE {
                tracing::warn!(
                    path = %self.source_path(&lang).display(),
                    "ignoring explicit base language file"
                );
                continue;
            }
            languages.push(lang);
        }
        Ok(languages)
    }

    /// Languages of the Weblate files.
    pub fn translation_languages(&self) -> Result<Vec<String>> {
        find_languages(&self.root.join(self.translation_base()), FileType::Properties)
    }
}

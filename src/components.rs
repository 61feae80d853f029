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

//! The `translation_list_<project>.txt` files.
//!
//! Each Weblate project has a list of components, one per line:
//!
//! ```text
//! # Name; path to the base translation file; repository URL
//! XWiki Core Resources; xwiki-platform-core/xwiki-platform-oldcore/src/main/resources/ApplicationResources.properties; https://github.com/xwiki/xwiki-platform
//! ```
//!
//! Some lists carry a fourth column with the license of the component.

use crate::error::{self, Error, Result};
use crate::layout::{BASE_LANGUAGE, TRANSLATION_DIR};
use std::fs::read_dir;
use std::path::{Path, PathBuf};

const LIST_PREFIX: &str = "translation_list_";
const LIST_SUFFIX: &str = ".txt";

/// Turn a component name into its Weblate slug.
///
/// ```
/// use xwiki_weblate_helpers::components::slugify;
///
/// assert_eq!(slugify("XWiki Core Resources 2.0"), "xwiki-core-resources-2-0");
/// ```
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace([' ', '.'], "-")
}

fn is_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// A translation component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    /// Path of the base translation file in the repository.
    pub path: String,
    /// URL of the repository.
    pub url: String,
    pub license: Option<String>,
}

impl Component {
    /// Parse a line of a translation list.
    ///
    /// Returns `Ok(None)` for comments and blank lines.
    pub fn parse(line: &str) -> Result<Option<Component>> {
        if is_comment(line) {
            return Ok(None);
        }
        let invalid = |reason: &str| Error::InvalidComponent {
            line: line.to_owned(),
            reason: reason.to_owned(),
        };
        let fields = line.split(';').map(str::trim).collect::<Vec<_>>();
        let (name, path, url, license) = match fields.as_slice() {
            [name, path, url] => (name, path, url, None),
            [name, path, url, license] => (name, path, url, Some(license.to_string())),
            _ => return Err(invalid("expected 3 or 4 fields separated by ';'")),
        };
        if name.is_empty() || path.is_empty() || url.is_empty() {
            return Err(invalid("name, path and URL must not be empty"));
        }
        Ok(Some(Component {
            name: name.to_string(),
            path: path.to_string(),
            url: url.to_string(),
            license,
        }))
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// The path of the base translation file without its extension.
    pub fn base_name(&self) -> &str {
        self.path
            .rsplit_once('.')
            .map_or(self.path.as_str(), |(base, _)| base)
    }

    /// The Weblate file mask, e.g. `.translation/path/Resources_*.properties`.
    pub fn filemask(&self) -> String {
        format!("{TRANSLATION_DIR}/{}_*.properties", self.base_name())
    }

    /// The Weblate template, i.e. the file of the base language.
    pub fn template(&self) -> String {
        format!("{TRANSLATION_DIR}/{}_{BASE_LANGUAGE}.properties", self.base_name())
    }

    /// Format the component as a translation list line.
    pub fn to_line(&self) -> String {
        let mut line = format!("{}; {}; {}", self.name, self.path, self.url);
        if let Some(license) = &self.license {
            line.push_str("; ");
            line.push_str(license);
        }
        line
    }
}

/// A `translation_list_<project>.txt` file.
#[derive(Debug, Clone)]
pub struct TranslationList {
    path: PathBuf,
    project: String,
    components: Vec<Component>,
}

impl TranslationList {
    /// Extract the project name from a translation list file name.
    pub fn project_name(file_name: &str) -> Option<&str> {
        file_name
            .strip_prefix(LIST_PREFIX)?
            .strip_suffix(LIST_SUFFIX)
            .filter(|project| !project.is_empty())
    }

    /// Path of the list of `project` in `directory`.
    pub fn path_for(directory: &Path, project: &str) -> PathBuf {
        directory.join(format!("{LIST_PREFIX}{project}{LIST_SUFFIX}"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let project = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::project_name)
            .ok_or_else(|| Error::UnsupportedFile(path.to_path_buf()))?
            .to_owned();
        let mut components = Vec::new();
        for line in error::read_to_string(path)?.lines() {
            if let Some(component) = Component::parse(line)? {
                components.push(component);
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            project,
            components,
        })
    }

    /// Load every translation list found in `directory`, sorted by
    /// project name.
    pub fn find_all(directory: &Path) -> Result<Vec<Self>> {
        let mut lists = read_dir(directory)?
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(e.into())),
                };
                let path = entry.path();
                let file_name = path.file_name()?.to_str()?;
                Self::project_name(file_name)?;
                Some(Self::load(&path))
            })
            .collect::<Result<Vec<_>>>()?;
        lists.sort_by(|a, b| a.project.cmp(&b.project));
        Ok(lists)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Add `component` at the end of the list file.
    ///
    /// Components must have a unique name, and a base translation file
    /// can only be part of one component per repository.
    pub fn add(&mut self, component: Component) -> Result<()> {
        let line = component.to_line();
        if Component::parse(&line)?.as_ref() != Some(&component) {
            return Err(Error::InvalidComponent {
                line,
                reason: "fields must be trimmed and must not contain ';'".to_owned(),
            });
        }
        if self.components.iter().any(|c| c.name == component.name) {
            return Err(Error::DuplicateComponentName(component.name));
        }
        if let Some(existing) = self
            .components
            .iter()
            .find(|c| c.path == component.path && c.url == component.url)
        {
            return Err(Error::DuplicateComponent(existing.name.clone()));
        }

        let mut content = error::read_to_string(&self.path)?;
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&line);
        content.push('\n');
        error::write(&self.path, &content)?;

        self.components.push(component);
        Ok(())
    }

    /// Append a column holding `value` to every component line.
    ///
    /// The list only has room for one extra column: lists whose
    /// components already have a license are left untouched.
    pub fn append_column(&mut self, value: &str) -> Result<()> {
        let mut content = String::new();
        let mut components = Vec::new();
        for line in error::read_to_string(&self.path)?.lines() {
            content.push_str(line);
            if let Some(component) = Component::parse(line)? {
                if component.license.is_some() {
                    return Err(Error::InvalidComponent {
                        line: line.to_owned(),
                        reason: "the component already has a license column".to_owned(),
                    });
                }
                content.push_str("; ");
                content.push_str(value);
                let updated = Component::parse(&format!("{line}; {value}"))?;
                components.extend(updated);
            }
            content.push('\n');
        }
        error::write(&self.path, &content)?;
        self.components = components;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const LIST: &str = "\
        # Platform components\n\
        \n\
        XWiki Core Resources; core/src/main/resources/ApplicationResources.properties; https://github.com/xwiki/xwiki-platform\n\
        Help Center;  help/src/main/resources/Help/WebHome.xml ;https://github.com/xwiki/xwiki-platform\n";

    fn core() -> Component {
        Component {
            name: "XWiki Core Resources".into(),
            path: "core/src/main/resources/ApplicationResources.properties".into(),
            url: "https://github.com/xwiki/xwiki-platform".into(),
            license: None,
        }
    }

    #[test]
    fn test_parse_component() {
        assert_eq!(Component::parse("# comment").unwrap(), None);
        assert_eq!(Component::parse("   ").unwrap(), None);
        assert_eq!(
            Component::parse(
                "XWiki Core Resources ;core/src/main/resources/ApplicationResources.properties; https://github.com/xwiki/xwiki-platform"
            )
            .unwrap(),
            Some(core())
        );
        assert_eq!(
            Component::parse("Name; a/b.properties; https://example.com; LGPL-2.1")
                .unwrap()
                .unwrap()
                .license
                .as_deref(),
            Some("LGPL-2.1")
        );
        assert!(Component::parse("Name; path").is_err());
        assert!(Component::parse("Name; ; https://example.com").is_err());
    }

    #[test]
    fn test_component_paths() {
        let component = core();
        assert_eq!(component.slug(), "xwiki-core-resources");
        assert_eq!(
            component.filemask(),
            ".translation/core/src/main/resources/ApplicationResources_*.properties"
        );
        assert_eq!(
            component.template(),
            ".translation/core/src/main/resources/ApplicationResources_en.properties"
        );
        assert_eq!(
            component.to_line(),
            "XWiki Core Resources; core/src/main/resources/ApplicationResources.properties; https://github.com/xwiki/xwiki-platform"
        );
    }

    #[test]
    fn test_project_name() {
        assert_eq!(
            TranslationList::project_name("translation_list_xwiki-platform.txt"),
            Some("xwiki-platform")
        );
        assert_eq!(TranslationList::project_name("translation_list_.txt"), None);
        assert_eq!(TranslationList::project_name("components.json"), None);
    }

    #[test]
    fn test_load_and_find_all() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(TranslationList::path_for(dir.path(), "platform"), LIST).unwrap();
        fs::write(TranslationList::path_for(dir.path(), "contrib"), "").unwrap();
        fs::write(dir.path().join("README.md"), "# Readme").unwrap();

        let lists = TranslationList::find_all(dir.path()).unwrap();
        let projects = lists.iter().map(|l| l.project()).collect::<Vec<_>>();
        assert_eq!(projects, vec!["contrib", "platform"]);
        let platform = &lists[1];
        assert_eq!(platform.components().len(), 2);
        assert_eq!(platform.components()[0], core());
        assert_eq!(
            platform.components()[1].path,
            "help/src/main/resources/Help/WebHome.xml"
        );
        assert_eq!(platform.components()[1].slug(), "help-center");
    }

    #[test]
    fn test_add() {
        let dir = tempfile::tempdir().unwrap();
        let path = TranslationList::path_for(dir.path(), "platform");
        fs::write(&path, LIST.trim_end()).unwrap();
        let mut list = TranslationList::load(&path).unwrap();

        let duplicated_name = Component {
            path: "other.properties".into(),
            ..core()
        };
        assert!(matches!(
            list.add(duplicated_name),
            Err(Error::DuplicateComponentName(_))
        ));
        let duplicated_path = Component {
            name: "Another Name".into(),
            ..core()
        };
        assert!(matches!(
            list.add(duplicated_path),
            Err(Error::DuplicateComponent(name)) if name == "XWiki Core Resources"
        ));

        let invalid = Component {
            name: "Semi; colon".into(),
            ..core()
        };
        assert!(matches!(
            list.add(invalid),
            Err(Error::InvalidComponent { .. })
        ));

        let component = Component {
            name: "Dashboard".into(),
            path: "dashboard/Resources.properties".into(),
            url: "https://github.com/xwiki/xwiki-platform".into(),
            license: None,
        };
        list.add(component.clone()).unwrap();
        assert_eq!(list.components().last(), Some(&component));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{}\n{}\n", LIST.trim_end(), component.to_line())
        );
    }

    #[test]
    fn test_append_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = TranslationList::path_for(dir.path(), "contrib");
        fs::write(&path, "# Contrib\nA; a/A.properties; https://example.com/a\n").unwrap();
        let mut list = TranslationList::load(&path).unwrap();
        list.append_column("LGPL-2.1").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Contrib\nA; a/A.properties; https://example.com/a; LGPL-2.1\n"
        );
        assert_eq!(list.components()[0].license.as_deref(), Some("LGPL-2.1"));
    }

    #[test]
    fn test_append_column_twice() {
        let dir = tempfile::tempdir().unwrap();
        let path = TranslationList::path_for(dir.path(), "contrib");
        let content = "A; a/A.properties; https://example.com/a\n";
        fs::write(&path, content).unwrap();
        let mut list = TranslationList::load(&path).unwrap();
        list.append_column("LGPL-2.1").unwrap();

        let err = list.append_column("MIT").unwrap_err();
        assert!(matches!(err, Error::InvalidComponent { .. }));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "A; a/A.properties; https://example.com/a; LGPL-2.1\n"
        );
        let reloaded = TranslationList::load(&path).unwrap();
        assert_eq!(reloaded.components(), list.components());
    }

    #[test]
    fn test_append_column_rejects_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = TranslationList::path_for(dir.path(), "contrib");
        let content = "A; a/A.properties; https://example.com/a\n";
        fs::write(&path, content).unwrap();
        let mut list = TranslationList::load(&path).unwrap();
        assert!(list.append_column("MIT; GPL").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }
}

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

//! Run the import and export of every component of a project.
//!
//! Weblate keeps a clone of each repository in its VCS directory, at
//! `<vcs>/<project>/<slug>`. Components sharing a repository URL use
//! the clone of the first component with that URL.

use crate::components::{Component, TranslationList};
use crate::error::{Error, Result};
use crate::layout::ComponentLayout;
use crate::sync::{export_component, import_component};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable holding the repository path of a component.
pub const PATH_VARIABLE: &str = "WL_PATH";
/// Environment variable holding the Weblate file mask of a component.
pub const FILE_MASK_VARIABLE: &str = "WL_FILEMASK";

/// What happened while updating a project.
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Slugs of the updated components.
    pub updated: Vec<String>,
    /// Slugs of the components which could not be updated.
    pub failed: Vec<(String, Error)>,
    /// Repositories on which the post-commit command ran.
    pub committed: Vec<PathBuf>,
    /// Repositories on which the post-commit command failed.
    pub commit_failed: Vec<(PathBuf, Error)>,
}

/// Update every component of `list` found in the Weblate `vcs_path`.
///
/// When `component_url` is set, only the components of that repository
/// are updated. The `post_commit` command runs once per repository,
/// with [`PATH_VARIABLE`] pointing to it.
pub fn update_project(
    vcs_path: &Path,
    list: &TranslationList,
    component_url: Option<&str>,
    post_commit: Option<&Path>,
) -> Result<UpdateReport> {
    let mut report = UpdateReport::default();
    let project_path = vcs_path.join(list.project());
    if !project_path.is_dir() {
        tracing::warn!(path = %project_path.display(), "project directory does not exist");
        return Ok(report);
    }

    let mut repositories: Vec<(&str, PathBuf)> = Vec::new();
    for component in list.components() {
        if component_url.is_some_and(|url| url != component.url) {
            continue;
        }
        let repository = match repositories.iter().find(|(url, _)| *url == component.url) {
            Some((_, path)) => path.clone(),
            None => {
                let path = project_path.join(component.slug());
                repositories.push((component.url.as_str(), path.clone()));
                path
            }
        };
        if !repository.is_dir() {
            tracing::warn!(path = %repository.display(), "repository does not exist");
            continue;
        }

        let slug = component.slug();
        tracing::info!(project = list.project(), component = slug.as_str(), "updating");
        match update_component(&repository, component) {
            Ok(()) => report.updated.push(slug),
            Err(err) => {
                tracing::warn!(component = slug.as_str(), %err, "update failed");
                report.failed.push((slug, err));
            }
        }
    }

    if let Some(command) = post_commit {
        for (_, repository) in repositories {
            if !repository.is_dir() {
                continue;
            }
            tracing::info!(path = %repository.display(), "running post commit command");
            match run_post_commit(command, &repository) {
                Ok(()) => report.committed.push(repository),
                Err(err) => {
                    tracing::warn!(path = %repository.display(), %err, "post commit failed");
                    report.commit_failed.push((repository, err));
                }
            }
        }
    }

    Ok(report)
}

fn run_post_commit(command: &Path, repository: &Path) -> Result<()> {
    let status = Command::new(command)
        .env(PATH_VARIABLE, repository)
        .status()?;
    if !status.success() {
        return Err(Error::Command {
            command: command.display().to_string(),
            status,
        });
    }
    Ok(())
}

fn update_component(repository: &Path, component: &Component) -> Result<()> {
    let layout = ComponentLayout::new(repository, &component.filemask())?;
    let imported = import_component(&layout)?;
    let exported = export_component(&layout)?;
    tracing::debug!(
        imported = imported.written.len(),
        exported = exported.written.len(),
        "component synchronized"
    );
    Ok(())
}

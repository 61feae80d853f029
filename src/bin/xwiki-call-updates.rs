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

//! Run the Weblate update scripts for every component of a project.
//!
//! The components come from the `translation_list_<project>.txt` files
//! of the current directory. For each component, the XWiki sources
//! are imported and the translations exported again, which brings the
//! clones in the Weblate VCS directory up to date. An optional
//! post-commit command then runs once per repository.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use xwiki_weblate_helpers::components::TranslationList;
use xwiki_weblate_helpers::updates::update_project;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Call the post update and pre commit scripts.")]
struct Args {
    /// Path to the Weblate VCS folder.
    vcs_path: PathBuf,
    /// Only update this project.
    #[arg(long)]
    project: Option<String>,
    /// Only update the components of this repository URL.
    #[arg(long = "component", value_name = "COMPONENT_URL")]
    component_url: Option<String>,
    /// Command to run on each repository after the update.
    #[arg(long)]
    post_commit: Option<PathBuf>,
    /// Directory holding the translation lists.
    #[arg(long, default_value = ".")]
    lists: PathBuf,
}

fn main() -> anyhow::Result<()> {
    xwiki_weblate_helpers::init_logging();
    let args = Args::parse();

    if !args.vcs_path.is_dir() {
        bail!("Path {} doesn't exist", args.vcs_path.display());
    }

    let lists = match &args.project {
        Some(project) => {
            let path = TranslationList::path_for(&args.lists, project);
            vec![TranslationList::load(&path)
                .with_context(|| format!("Could not load {}", path.display()))?]
        }
        None => TranslationList::find_all(&args.lists)
            .with_context(|| format!("Could not list {}", args.lists.display()))?,
    };

    let mut failures = 0;
    for list in &lists {
        let report = update_project(
            &args.vcs_path,
            list,
            args.component_url.as_deref(),
            args.post_commit.as_deref(),
        )
        .with_context(|| format!("Updating project {}", list.project()))?;
        tracing::info!(
            project = list.project(),
            updated = report.updated.len(),
            failed = report.failed.len(),
            commit_failed = report.commit_failed.len(),
            "project updated"
        );
        failures += report.failed.len() + report.commit_failed.len();
    }

    if failures > 0 {
        bail!("{failures} components or repositories could not be updated");
    }
    Ok(())
}

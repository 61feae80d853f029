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

//! Manage the Weblate components of the XWiki projects.
//!
//! The components of each project are listed in the
//! `translation_list_<project>.txt` files. This program lists them,
//! adds new ones, applies bulk changes and queries the components
//! known by the Weblate instance.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use xwiki_weblate_helpers::components::{Component, TranslationList};
use xwiki_weblate_helpers::weblate::{ComponentsClient, DEFAULT_API_URL};

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Manage the Weblate components of the XWiki projects.")]
struct Cli {
    /// Directory holding the translation lists.
    #[arg(long, global = true, default_value = ".")]
    lists: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
    /// Print the components of the translation lists.
    List {
        /// Only list the components of this project.
        project: Option<String>,
    },
    /// Add a new component to the list of a project.
    Add {
        project: String,
        /// Name of the component, e.g. `XWiki Core Resources`.
        #[arg(long)]
        name: String,
        /// Relative path to the base translation file.
        #[arg(long)]
        path: String,
        /// Repository URL, e.g. `https://github.com/xwiki/xwiki-platform`.
        #[arg(long)]
        url: String,
        #[arg(long)]
        license: Option<String>,
    },
    /// Append a column to every component of the given projects.
    AppendColumn {
        /// Value of the new column, e.g. `LGPL-2.1`.
        value: String,
        #[arg(required = true)]
        projects: Vec<String>,
    },
    /// Print the template files of the components of a Weblate project.
    Templates {
        project: String,
        /// Base URL of the Weblate REST API.
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },
}

fn load(directory: &Path, project: &str) -> anyhow::Result<TranslationList> {
    let path = TranslationList::path_for(directory, project);
    TranslationList::load(&path).with_context(|| format!("Could not load {}", path.display()))
}

#[allow(clippy::print_stdout)]
fn list(directory: &Path, project: Option<&str>) -> anyhow::Result<()> {
    let lists = match project {
        Some(project) => vec![load(directory, project)?],
        None => TranslationList::find_all(directory)?,
    };
    if lists.is_empty() {
        bail!(
            "Could not find any project: the translation_list_*.txt files are expected in {}",
            directory.display()
        );
    }
    for list in &lists {
        println!("{}:", list.project());
        for component in list.components() {
            println!("  {} ({})", component.name, component.slug());
            println!("    {}", component.filemask());
            println!("    {}", component.url);
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn add(directory: &Path, project: &str, component: Component) -> anyhow::Result<()> {
    let mut list = load(directory, project)?;
    let slug = component.slug();
    list.add(component)?;
    println!("The component has been saved, please commit the file");
    println!("{:?} when you are done.", list.path());
    println!();
    println!("You can then install the XWiki scripts on the new component:");
    for script in ["post_update", "pre_commit", "post_commit"] {
        println!("$ weblate install_addon --addon xwiki.{script} {project}/{slug}");
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn templates(project: &str, api_url: &str) -> anyhow::Result<()> {
    let client = ComponentsClient::new(api_url)?;
    let templates = client
        .templates(project)
        .with_context(|| format!("Could not list the components of {project}"))?;
    for template in templates {
        println!("{template}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    xwiki_weblate_helpers::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::List { project } => list(&cli.lists, project.as_deref())?,
        Command::Add {
            project,
            name,
            path,
            url,
            license,
        } => {
            let component = Component {
                name,
                path,
                url,
                license,
            };
            add(&cli.lists, &project, component)?;
        }
        Command::AppendColumn { value, projects } => {
            for project in projects {
                load(&cli.lists, &project)?.append_column(&value)?;
                tracing::info!(project = project.as_str(), "column appended");
            }
        }
        Command::Templates { project, api_url } => templates(&project, &api_url)?,
    }

    Ok(())
}

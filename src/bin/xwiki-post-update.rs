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

//! Post update script for Weblate.
//!
//! This program runs after Weblate updated its clone of a repository.
//! It converts the XWiki translation sources of the component into the
//! `.translation/` properties files which Weblate translates.
//!
//! The component is given by the `WL_PATH` and `WL_FILEMASK`
//! environment variables set by Weblate.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use xwiki_weblate_helpers::layout::ComponentLayout;
use xwiki_weblate_helpers::sync::import_component;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Convert XWiki translation sources to Weblate files.")]
struct Args {
    /// Path to the repository of the component.
    #[arg(long, env = "WL_PATH")]
    path: PathBuf,
    /// Weblate file mask, e.g. `.translation/path/Resources_*.properties`.
    #[arg(long, env = "WL_FILEMASK")]
    filemask: String,
}

fn main() -> anyhow::Result<()> {
    xwiki_weblate_helpers::init_logging();
    let args = Args::parse();

    let layout = ComponentLayout::new(&args.path, &args.filemask)
        .with_context(|| format!("Could not resolve {} in {}", args.filemask, args.path.display()))?;
    let report = import_component(&layout).context("Importing translations")?;
    tracing::info!(files = report.written.len(), "translations imported");

    Ok(())
}

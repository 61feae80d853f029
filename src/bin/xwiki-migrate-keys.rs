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

//! Migrate translation keys between two base translation files.
//!
//! The keys are read from a file with one key per line. A line of the
//! form `old.key=new.key` renames the key while moving it. Both the
//! base files and all their translations are updated.

use anyhow::{bail, Context};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use xwiki_weblate_helpers::migrate::{migrate_keys, parse_key_list};

#[derive(Clone, Debug, Parser)]
#[command(
    version,
    about = "Migrate translation keys between two base translation files (and the available languages)."
)]
struct Args {
    /// Source base translation file.
    source_file: PathBuf,
    /// Destination base translation file.
    destination_file: PathBuf,
    /// File listing the keys to migrate.
    key_list: PathBuf,
}

fn main() -> anyhow::Result<()> {
    xwiki_weblate_helpers::init_logging();
    let args = Args::parse();

    if !args.key_list.is_file() {
        bail!("The specified key list {} is not a file", args.key_list.display());
    }
    let keys = parse_key_list(
        &fs::read_to_string(&args.key_list)
            .with_context(|| format!("Could not read {}", args.key_list.display()))?,
    );

    let report = migrate_keys(&args.source_file, &args.destination_file, &keys)
        .context("Migrating keys")?;
    let moved = report.moved.iter().map(|(_, count)| count).sum::<usize>();
    tracing::info!(
        moved,
        languages = report.moved.len(),
        "migrated {} keys",
        keys.len()
    );

    Ok(())
}

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

//! Helpers for translating XWiki projects with Weblate.
//!
//! XWiki keeps its translations in Java properties files and in XWiki
//! XML documents, while Weblate expects one properties file per
//! language. The functions here convert between the two worlds without
//! losing the layout of the XWiki files:
//!
//! - [`sync::import_component`] converts the XWiki sources of a
//!   component into the `.translation/` files used by Weblate,
//! - [`sync::export_component`] writes the Weblate translations back
//!   into the XWiki sources, using the base file as a template,
//! - [`migrate::migrate_keys`] moves keys between translation files,
//! - [`components`] and [`updates`] manage the component lists of the
//!   Weblate projects.
//!
//! See <https://github.com/xwiki/xwiki-dev-tools> for details on how the
//! supplied binaries are plugged into Weblate.

pub mod components;
pub mod error;
pub mod file_type;
pub mod layout;
pub mod migrate;
pub mod properties;
pub mod sync;
pub mod updates;
pub mod weblate;
pub mod xml;

pub use error::{Error, Result};
pub use file_type::FileType;
pub use properties::PropertiesFile;
pub use xml::XmlFile;

use tracing_subscriber::EnvFilter;

/// Install the logger used by the binaries.
///
/// Logs go to stderr. The verbosity is controlled with `RUST_LOG` and
/// defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

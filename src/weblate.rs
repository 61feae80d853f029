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

//! Client for the components endpoint of the Weblate REST API.

use crate::error::Result;
use serde::Deserialize;

/// The API of the XWiki Weblate instance.
pub const DEFAULT_API_URL: &str = "https://l10n.xwiki.org/api";

/// A component as described by the Weblate API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteComponent {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub filemask: String,
    /// The template file, `None` for monolingual components.
    #[serde(default)]
    pub template: Option<String>,
}

/// One page of a paginated API answer.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub next: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Follow the `next` links from `first_url`, collecting all results.
pub fn collect_pages<T>(
    first_url: &str,
    mut fetch: impl FnMut(&str) -> Result<Page<T>>,
) -> Result<Vec<T>> {
    let mut results = Vec::new();
    let mut url = Some(first_url.to_owned());
    while let Some(current) = url {
        tracing::debug!(url = current.as_str(), "fetching page");
        let page = fetch(&current)?;
        results.extend(page.results);
        url = page.next.filter(|next| !next.is_empty());
    }
    Ok(results)
}

#[derive(Debug)]
pub struct ComponentsClient {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl ComponentsClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn components_url(&self, project: &str) -> String {
        format!("{}/projects/{project}/components/?format=json", self.api_url)
    }

    /// List all the components of `project`.
    pub fn components(&self, project: &str) -> Result<Vec<RemoteComponent>> {
        collect_pages(&self.components_url(project), |url| {
            let body = self.client.get(url).send()?.error_for_status()?.text()?;
            Ok(serde_json::from_str(&body)?)
        })
    }

    /// The template files of all the components of `project`.
    pub fn templates(&self, project: &str) -> Result<Vec<String>> {
        Ok(self
            .components(project)?
            .into_iter()
            .filter_map(|component| component.template)
            .filter(|template| !template.is_empty())
            .collect())
    }
}

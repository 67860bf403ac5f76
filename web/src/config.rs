// Copyright 2023 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use tracing::{debug, warn};

use crate::js_lib;

pub const BACKEND_URL_META: &'static str = "recipe-hub:backend-url";
pub const APP_ID_META: &'static str = "recipe-hub:app-id";

pub const DEFAULT_BACKEND_URL: &'static str = "http://localhost:1111";
pub const DEFAULT_APP_ID: &'static str = "recipe-hub";

const BUILD_BACKEND_URL: Option<&'static str> = option_env!("RECIPE_HUB_BACKEND_URL");
const BUILD_APP_ID: Option<&'static str> = option_env!("RECIPE_HUB_APP_ID");

/// Where the backend lives and which application we are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    backend_url: String,
    app_id: String,
}

// First non blank candidate wins.
fn pick<'a, I>(candidates: I, default: &'a str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(default)
        .to_owned()
}

impl Config {
    pub fn new<U: AsRef<str>, A: Into<String>>(backend_url: U, app_id: A) -> Self {
        Self {
            backend_url: backend_url.as_ref().trim().trim_end_matches('/').to_owned(),
            app_id: app_id.into(),
        }
    }

    /// Resolve the config from the host page meta tags falling back to the
    /// values baked in at build time.
    pub fn from_document() -> Self {
        let meta = |name: &str| match js_lib::get_meta_content(name) {
            Ok(value) => value,
            Err(err) => {
                warn!(?err, name, "Unable to read config meta tag");
                None
            }
        };
        let page_url = meta(BACKEND_URL_META);
        let page_app_id = meta(APP_ID_META);
        debug!(?page_url, ?page_app_id, "Read config from document");
        Self::resolve(page_url.as_deref(), page_app_id.as_deref())
    }

    pub fn resolve(page_url: Option<&str>, page_app_id: Option<&str>) -> Self {
        Self::new(
            pick([page_url, BUILD_BACKEND_URL], DEFAULT_BACKEND_URL),
            pick([page_app_id, BUILD_APP_ID], DEFAULT_APP_ID),
        )
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn api_root(&self) -> String {
        format!("{}{}", self.backend_url, client_api::API_PREFIX)
    }

    pub fn admin_url(&self) -> String {
        format!("{}{}", self.backend_url, client_api::ADMIN_PATH)
    }
}

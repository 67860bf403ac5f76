// Copyright 2022 Jeremy Wall
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
use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use tracing::{debug, error, info, instrument, warn};

use client_api::*;
use recipes::{sort_newest_first, NewRecipe, Recipe, User};

use crate::config::Config;

fn unavailable(err: gloo_net::Error) -> Error {
    Error::unavailable(format!("{}", err))
}

async fn failed(call: Call, resp: Response) -> Error {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message(),
        Err(_) => format!("Status: {}", status),
    };
    error_for_status(call, status, message)
}

/// [Backend] over the Manifest REST api.
#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
    app_id: String,
    // The session lives only as long as this store does.
    token: Rc<RefCell<Option<String>>>,
}

impl HttpStore {
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.api_root(),
            app_id: config.app_id().to_owned(),
            token: Rc::new(RefCell::new(None)),
        }
    }

    fn path(&self, suffix: &str) -> String {
        let mut path = self.root.clone();
        path.push_str(suffix);
        path
    }

    fn with_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if !self.app_id.is_empty() {
            builder = builder.header("X-App-Id", &self.app_id);
        }
        if let Some(token) = self.token.borrow().as_ref() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        builder
    }

    fn has_session(&self) -> bool {
        self.token.borrow().is_some()
    }

    #[instrument(skip(self))]
    async fn fetch_recipe_page(&self, page: u32) -> Result<Paginator<Recipe>, Error> {
        let mut path = self.path(&collection_path(RECIPE_COLLECTION));
        path.push('?');
        path.push_str(&FindQuery::recipes_newest_first().page(page).to_query_string());
        let resp = self
            .with_headers(Request::get(&path))
            .send()
            .await
            .map_err(unavailable)?;
        if is_success(resp.status()) {
            debug!("We got a valid response back!");
            resp.json::<Paginator<Recipe>>().await.map_err(unavailable)
        } else {
            Err(failed(Call::ListRecipes, resp).await)
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpStore {
    #[instrument(skip(self))]
    async fn test_connection(&self) -> ConnectionStatus {
        let path = self.path(HEALTH_PATH);
        match self.with_headers(Request::get(&path)).send().await {
            Ok(resp) if resp.ok() => ConnectionStatus::connected(),
            Ok(resp) => {
                warn!(status = resp.status(), "Health check was unsuccessful");
                ConnectionStatus::failed(format!("Status: {}", resp.status()))
            }
            Err(err) => {
                error!(path, ?err, "Error hitting api");
                ConnectionStatus::failed(format!("{}", err))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_current_user(&self) -> Result<User, Error> {
        if !self.has_session() {
            debug!("No session token so there is no current user");
            return Err(Error::NotAuthenticated);
        }
        let path = self.path(&me_path(USER_ENTITY));
        let resp = self
            .with_headers(Request::get(&path))
            .send()
            .await
            .map_err(unavailable)?;
        if is_success(resp.status()) {
            resp.json::<User>().await.map_err(unavailable)
        } else {
            Err(failed(Call::CurrentUser, resp).await)
        }
    }

    // NOTE(jwall): We do **not** want to record the password in our logs.
    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<(), Error> {
        debug!("attempting login request against api.");
        let path = self.path(&login_path(USER_ENTITY));
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = self
            .with_headers(Request::post(&path))
            .json(&body)
            .map_err(unavailable)?
            .send()
            .await
            .map_err(unavailable)?;
        if is_success(resp.status()) {
            let TokenResponse { token } = resp.json().await.map_err(unavailable)?;
            *self.token.borrow_mut() = Some(token);
            info!("Login was successful");
            Ok(())
        } else {
            error!(status = resp.status(), "Login was unsuccessful");
            Err(failed(Call::Login, resp).await)
        }
    }

    async fn logout(&self) {
        debug!("Dropping session token");
        self.token.borrow_mut().take();
    }

    #[instrument(skip(self))]
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        let mut recipes = Vec::new();
        let mut page = 1;
        loop {
            let paginator = self.fetch_recipe_page(page).await?;
            let next = paginator.next_page(page);
            recipes.extend(paginator.data);
            match next {
                Some(n) => page = n,
                None => break,
            }
        }
        sort_newest_first(&mut recipes);
        debug!(count = recipes.len(), "Fetched recipes");
        Ok(recipes)
    }

    #[instrument(skip_all, fields(title = %recipe.title))]
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, Error> {
        let path = self.path(&collection_path(RECIPE_COLLECTION));
        let resp = self
            .with_headers(Request::post(&path))
            .json(recipe)
            .map_err(unavailable)?
            .send()
            .await
            .map_err(unavailable)?;
        if is_success(resp.status()) {
            debug!("We got a valid response back!");
            resp.json::<Recipe>().await.map_err(unavailable)
        } else {
            Err(failed(Call::CreateRecipe, resp).await)
        }
    }
}

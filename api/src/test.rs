// Copyright 2023 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use crate::memory::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::*;

use futures::executor::block_on;
use recipes::{is_newest_first, RecipeDraft};
use serde_json::from_str;

fn lasagna() -> NewRecipe {
    RecipeDraft {
        title: "Lasagna".to_owned(),
        ..RecipeDraft::default()
    }
    .to_new_recipe()
    .unwrap()
}

#[test]
fn test_paths() {
    assert_eq!(login_path(USER_ENTITY), "/auth/users/login");
    assert_eq!(me_path(USER_ENTITY), "/auth/users/me");
    assert_eq!(collection_path(RECIPE_COLLECTION), "/collections/recipes");
}

#[test]
fn test_recipe_listing_query() {
    assert_eq!(
        FindQuery::recipes_newest_first().to_query_string(),
        "relations=owner&orderBy=createdAt&order=DESC"
    );
    assert_eq!(
        FindQuery::recipes_newest_first()
            .page(3)
            .per_page(50)
            .to_query_string(),
        "relations=owner&orderBy=createdAt&order=DESC&page=3&perPage=50"
    );
    assert_eq!(FindQuery::new().to_query_string(), "");
}

#[test]
fn test_paginator() {
    let page: Paginator<serde_json::Value> = from_str(
        r#"{"data": [{"id": 1}], "currentPage": 1, "lastPage": 2, "from": 1, "to": 1, "total": 2, "perPage": 1}"#,
    )
    .unwrap();
    assert_eq!(page.next_page(1), Some(2));
    assert_eq!(page.next_page(2), None);
    let empty: Paginator<serde_json::Value> =
        from_str(r#"{"data": [], "currentPage": 1, "lastPage": 3}"#).unwrap();
    assert_eq!(empty.next_page(1), None);
}

#[test]
fn test_page_walk_ends_when_backend_ignores_page() {
    // Always answers with the first page no matter what was asked for.
    let stuck: Paginator<serde_json::Value> = from_str(
        r#"{"data": [{"id": 1}], "currentPage": 1, "lastPage": 3}"#,
    )
    .unwrap();
    let mut requested = 1;
    let mut fetched = 1;
    while let Some(next) = stuck.next_page(requested) {
        requested = next;
        fetched += 1;
        assert!(fetched <= 3, "walked past the last page");
    }
    assert_eq!(fetched, 3);
}

#[test]
fn test_success_statuses() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(!is_success(302));
    assert!(!is_success(400));
}

#[test]
fn test_login_status_mapping() {
    for status in [400, 401, 403] {
        assert_eq!(
            error_for_status(Call::Login, status, "nope".to_owned()),
            Error::InvalidCredentials
        );
    }
    assert_eq!(
        error_for_status(Call::Login, 500, "boom".to_owned()),
        Error::BackendUnavailable("boom".to_owned())
    );
}

#[test]
fn test_create_status_mapping() {
    let body: ErrorBody = from_str(
        r#"[{"property": "title", "constraints": {"isNotEmpty": "title should not be empty"}},
            {"property": "cookTime", "constraints": {"isInt": "cookTime must be an integer"}}]"#,
    )
    .unwrap();
    assert_eq!(
        error_for_status(Call::CreateRecipe, 400, body.message()),
        Error::Validation(
            "title should not be empty, cookTime must be an integer".to_owned()
        )
    );
    for status in [401, 403] {
        assert_eq!(
            error_for_status(Call::CreateRecipe, status, String::new()),
            Error::NotAuthenticated
        );
    }
    assert_eq!(
        error_for_status(Call::CreateRecipe, 502, "Status: 502".to_owned()),
        Error::BackendUnavailable("Status: 502".to_owned())
    );
}

#[test]
fn test_read_status_mapping() {
    for call in [Call::CurrentUser, Call::ListRecipes] {
        assert_eq!(
            error_for_status(call, 401, String::new()),
            Error::NotAuthenticated
        );
        assert_eq!(
            error_for_status(call, 403, String::new()),
            Error::NotAuthenticated
        );
        assert_eq!(
            error_for_status(call, 400, "bad".to_owned()),
            Error::BackendUnavailable("bad".to_owned())
        );
    }
}

#[test]
fn test_error_body_messages() {
    let validation: ErrorBody = from_str(
        r#"[{"property": "title", "constraints": {"isNotEmpty": "title should not be empty"}},
            {"property": "prepTime", "constraints": {}}]"#,
    )
    .unwrap();
    assert_eq!(
        validation.message(),
        "title should not be empty, prepTime is invalid"
    );
    let single: ErrorBody = from_str(r#"{"message": "Forbidden", "statusCode": 403}"#).unwrap();
    assert_eq!(single.message(), "Forbidden");
    let many: ErrorBody = from_str(r#"{"message": ["a", "b"]}"#).unwrap();
    assert_eq!(many.message(), "a, b");
}

#[test]
fn test_draft_error_is_validation() {
    let err: Error = RecipeDraft::default().to_new_recipe().unwrap_err().into();
    assert_eq!(err, Error::Validation("title should not be empty".to_owned()));
}

#[test]
fn test_memory_login_then_me_matches_email() {
    let backend = MemoryBackend::demo();
    block_on(async {
        assert_eq!(
            backend.get_current_user().await,
            Err(Error::NotAuthenticated)
        );
        backend.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        let user = backend.get_current_user().await.unwrap();
        assert_eq!(user.email, DEMO_EMAIL);
        assert_eq!(user.name, "Admin");
        backend.logout().await;
        assert_eq!(
            backend.get_current_user().await,
            Err(Error::NotAuthenticated)
        );
    });
}

#[test]
fn test_memory_rejects_bad_credentials() {
    let backend = MemoryBackend::demo();
    block_on(async {
        assert_eq!(
            backend.login(DEMO_EMAIL, "wrong").await,
            Err(Error::InvalidCredentials)
        );
        assert_eq!(
            backend.login("nobody@example.com", DEMO_PASSWORD).await,
            Err(Error::InvalidCredentials)
        );
    });
}

#[test]
fn test_memory_create_adds_one_owned_recipe() {
    let backend = MemoryBackend::demo().with_user("Cook", "cook@example.com", "pw");
    block_on(async {
        backend.login("cook@example.com", "pw").await.unwrap();
        let cook = backend.get_current_user().await.unwrap();
        let before = backend.list_recipes().await.unwrap().len();
        let created = backend.create_recipe(&lasagna()).await.unwrap();
        assert_eq!(created.owner.as_ref(), Some(&cook));
        let after = backend.list_recipes().await.unwrap();
        assert_eq!(after.len(), before + 1);
        assert_eq!(after[0].title, "Lasagna");
        assert_eq!(after[0].owner.as_ref(), Some(&cook));
        assert_eq!(after[0].prep_time, 30);
        assert_eq!(after[0].cook_time, 60);
    });
}

#[test]
fn test_memory_list_is_newest_first() {
    let backend = MemoryBackend::demo();
    block_on(async {
        backend.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        for title in ["first", "second", "third"] {
            backend.create_recipe(&NewRecipe::new(title)).await.unwrap();
        }
        let list = backend.list_recipes().await.unwrap();
        assert!(is_newest_first(&list));
        let titles: Vec<&str> = list.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    });
}

#[test]
fn test_memory_create_validation_and_session() {
    let backend = MemoryBackend::demo();
    block_on(async {
        assert_eq!(
            backend.create_recipe(&lasagna()).await,
            Err(Error::NotAuthenticated)
        );
        backend.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(
            backend.create_recipe(&NewRecipe::new("")).await,
            Err(Error::Validation("title should not be empty".to_owned()))
        );
        assert_eq!(backend.recipe_count(), 0);
    });
}

#[test]
fn test_memory_unavailable() {
    let backend = MemoryBackend::demo();
    backend.set_available(false);
    block_on(async {
        let status = backend.test_connection().await;
        assert!(!status.success);
        assert!(status.error.is_some());
        assert!(matches!(
            backend.list_recipes().await,
            Err(Error::BackendUnavailable(_))
        ));
        assert!(matches!(
            backend.login(DEMO_EMAIL, DEMO_PASSWORD).await,
            Err(Error::BackendUnavailable(_))
        ));
    });
    backend.set_available(true);
    assert_eq!(
        block_on(backend.test_connection()),
        ConnectionStatus::connected()
    );
}

#[test]
fn test_rc_backend_delegates() {
    let backend = std::rc::Rc::new(MemoryBackend::demo());
    block_on(async {
        backend.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(backend.get_current_user().await.unwrap().email, DEMO_EMAIL);
    });
}

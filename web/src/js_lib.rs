// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys::{window, Document};

pub fn get_document() -> Result<Document> {
    window()
        .ok_or_else(|| anyhow!("No window present"))?
        .document()
        .ok_or_else(|| anyhow!("No document in window"))
}

pub fn get_element_by_id<E>(id: &str) -> Result<Option<E>>
where
    E: JsCast,
{
    match get_document()?.get_element_by_id(id) {
        Some(e) => e
            .dyn_into::<E>()
            .map(Some)
            .map_err(|_| anyhow!("Element {} is not of the expected type", id)),
        None => Ok(None),
    }
}

/// The content attribute of the `<meta name=...>` tag in the host page.
pub fn get_meta_content(name: &str) -> Result<Option<String>> {
    let selector = format!("meta[name=\"{}\"]", name);
    let element = get_document()?
        .query_selector(&selector)
        .map_err(|e| anyhow!("Bad selector {}: {:?}", selector, e))?;
    Ok(element.and_then(|e| e.get_attribute("content")))
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser search box.
//!
//! The page loads the post documents once, builds a [`FolioSearch`], and calls
//! `search` from its own debounce timer. Results come back with the title and
//! an excerpt already highlighted as HTML.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::{HighlightOptions, SearchOptions};
use crate::highlight::{excerpt, highlight, to_html};
use crate::index::{build_index, SearchIndex};
use crate::search::search_with_limit;
use crate::types::{corpus, Field, SearchableDocument};

const DEFAULT_LIMIT: usize = 10;

/// One hit, shaped for the search dropdown.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultOutput<'a> {
    id: &'a str,
    title: &'a str,
    url: &'a str,
    image: Option<&'a str>,
    score: f64,
    /// Escaped title with matches wrapped in `<span class=...>`
    title_html: String,
    /// Escaped excerpt around the first body match, empty if the body did not match
    excerpt_html: String,
}

#[wasm_bindgen]
pub struct FolioSearch {
    index: SearchIndex,
    highlight: HighlightOptions,
}

#[wasm_bindgen]
impl FolioSearch {
    /// Build from an array of `{id, title, content, url, image}` documents.
    ///
    /// `options` may carry `search` and `highlight` objects in the same shape
    /// as `folio.json`.
    #[wasm_bindgen(constructor)]
    pub fn new(documents: JsValue, options: Option<JsValue>) -> Result<FolioSearch, JsValue> {
        let documents: Vec<SearchableDocument> = from_value(documents).map_err(|e| e.to_string())?;
        let options: BrowserOptions = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(|e| e.to_string())?
            }
            _ => BrowserOptions::default(),
        };
        options.search.validate().map_err(|e| e.to_string())?;

        Ok(FolioSearch {
            index: build_index(corpus(documents), options.search),
            highlight: options.highlight,
        })
    }

    #[wasm_bindgen]
    pub fn doc_count(&self) -> usize {
        self.index.corpus().len()
    }

    /// Ranked results for `term`, best first. Blank terms return `[]`.
    #[wasm_bindgen]
    pub fn search(&self, term: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let results = search_with_limit(&self.index, term, limit.unwrap_or(DEFAULT_LIMIT));
        let class_name = &self.highlight.class_name;

        let output: Vec<ResultOutput> = results
            .iter()
            .map(|result| {
                let doc = &result.item;
                let title = highlight(&doc.title, result.regions(Field::Title), self.highlight.min_match_length);
                let content_regions = result.regions(Field::Content);
                let excerpt_html = if content_regions.is_empty() {
                    String::new()
                } else {
                    excerpt(
                        &doc.content,
                        content_regions,
                        result.best(Field::Content),
                        self.highlight.excerpt_options(),
                    )
                    .to_html(class_name)
                };
                ResultOutput {
                    id: &doc.id,
                    title: &doc.title,
                    url: &doc.url,
                    image: doc.image.as_deref(),
                    score: result.score,
                    title_html: to_html(&title, class_name),
                    excerpt_html,
                }
            })
            .collect();

        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct BrowserOptions {
    search: SearchOptions,
    highlight: HighlightOptions,
}

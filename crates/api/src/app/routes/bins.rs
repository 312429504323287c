use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use stockroom_core::{Entity, PropValue};
use stockroom_inventory::{Bin, ToDocument, encode};
use stockroom_store::{DocumentStore, Filter, Page, StoreError, collections};

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/bins", get(bins_list).post(bins_create))
        .route("/bin/:id", get(bin_get))
}

/// Pagination parameters, kept as raw strings so a malformed value produces
/// the documented 400 message rather than a generic rejection.
#[derive(Debug, Deserialize)]
pub struct BinsListQuery {
    limit: Option<String>,
    #[serde(rename = "startingFrom")]
    starting_from: Option<String>,
}

const MALFORMED_PAGINATION: &str =
    "Malformed Request. Possible pagination query parameter constraint violation.";

fn parse_page(query: &BinsListQuery) -> Result<Page, axum::response::Response> {
    let limit = match &query.limit {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| errors::bad_request(MALFORMED_PAGINATION))?,
        None => Page::DEFAULT_LIMIT,
    };
    let skip = match &query.starting_from {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| errors::bad_request(MALFORMED_PAGINATION))?,
        None => 0,
    };
    Ok(Page::new(limit, skip))
}

pub async fn bins_list(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
    Query(query): Query<BinsListQuery>,
) -> axum::response::Response {
    let page = match parse_page(&query) {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    let docs = match store.find(collections::BINS, &Filter::all(), page) {
        Ok(docs) => docs,
        Err(e) => return errors::store_error_to_response(e),
    };

    let mut bins = Vec::with_capacity(docs.len());
    for doc in &docs {
        match Bin::try_from(doc) {
            Ok(bin) => bins.push(bin),
            Err(e) => {
                tracing::error!(error = %e, "stored bin is malformed");
                return errors::internal();
            }
        }
    }

    let body = match encode::encode_document_array(&bins) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "bin list rendering failed");
            return errors::internal();
        }
    };
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub async fn bins_create(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
    Json(body): Json<PropValue>,
) -> axum::response::Response {
    let bin = match Bin::from_wire(&body) {
        Ok(bin) => bin,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    let location = format!("/api/bin/{}", bin.id());
    match store.insert_unique(collections::BINS, "id", bin.to_document()) {
        Ok(_) => {
            tracing::info!(id = %bin.id(), "bin created");
            (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
        }
        // Strict create-only: the existing document is left untouched.
        Err(StoreError::Duplicate { .. }) => {
            (StatusCode::CONFLICT, [(header::LOCATION, location)]).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn bin_get(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let found = match store.find_one(collections::BINS, &Filter::by_id(id)) {
        Ok(found) => found,
        Err(e) => return errors::store_error_to_response(e),
    };

    match Bin::from_document(found) {
        Ok(Some(bin)) => (
            [(header::CONTENT_TYPE, "application/json")],
            bin.to_wire().to_string(),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "The bin does not exist").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "stored bin is malformed");
            errors::internal()
        }
    }
}

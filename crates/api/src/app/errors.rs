use axum::http::StatusCode;
use axum::response::IntoResponse;

use stockroom_store::StoreError;

/// Map a store failure to a client-safe response.
///
/// Backend detail goes to the log; clients only see a generic 503 (or 409
/// for a uniqueness conflict reached outside the create path).
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Duplicate { .. } => {
            (StatusCode::CONFLICT, "Resource already exists.").into_response()
        }
        StoreError::Unavailable(detail) => {
            tracing::error!(%detail, "document store unavailable");
            service_unavailable()
        }
        StoreError::Backend(detail) => {
            tracing::error!(%detail, "document store backend failure");
            service_unavailable()
        }
    }
}

pub fn bad_request(message: impl Into<String>) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, message.into()).into_response()
}

pub fn internal() -> axum::response::Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error.").into_response()
}

fn service_unavailable() -> axum::response::Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "Inventory storage is temporarily unavailable.",
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_failures_map_to_503_without_detail() {
        let resp = store_error_to_response(StoreError::Unavailable("docstore:27017 refused".into()));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn backend_failures_map_to_503() {
        let resp = store_error_to_response(StoreError::Backend("lock poisoned".into()));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn duplicates_map_to_409() {
        let resp = store_error_to_response(StoreError::Duplicate {
            collection: "bins".into(),
            field: "id".into(),
            value: "BIN000009".into(),
        });
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}

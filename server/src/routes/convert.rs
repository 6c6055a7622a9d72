//! SVG to JSX conversion route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The converter page posts the current input, toggles and committed
//! component name here on every change. The handler runs the transform and
//! format steps of the shared [`Pipeline`] on the blocking pool and answers
//! with exactly one of `{jsx}` or `{message}`.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use wire::{ConversionRequest, ConversionResult};

use crate::state::AppState;
use crate::svgr::{ConvertError, Pipeline};

/// `POST /api/svg-to-jsx`: convert SVG markup into a formatted component.
pub async fn svg_to_jsx(
    State(state): State<AppState>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> (StatusCode, Json<ConversionResult>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "svg-to-jsx: rejected request body");
            let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            return (status, Json(ConversionResult::Failure { message: rejection.body_text() }));
        }
    };

    let svg_len = request.svg.len();
    let pipeline = Arc::clone(&state.pipeline);
    match tokio::task::spawn_blocking(move || convert(pipeline.as_ref(), &request)).await {
        Ok(Ok(jsx)) => (StatusCode::OK, Json(ConversionResult::Success { jsx })),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, svg_len, "svg-to-jsx: conversion failed");
            (convert_error_to_status(&e), Json(ConversionResult::Failure { message: e.to_string() }))
        }
        Err(e) => {
            tracing::error!(error = %e, svg_len, "svg-to-jsx: conversion task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConversionResult::Failure { message: "conversion task failed".to_owned() }),
            )
        }
    }
}

/// Transform then format, stopping at the first failure.
pub(crate) fn convert(pipeline: &dyn Pipeline, request: &ConversionRequest) -> Result<String, ConvertError> {
    let code = pipeline.transform(&request.svg, &request.config, &request.state)?;
    pipeline.format(&code)
}

pub(crate) fn convert_error_to_status(err: &ConvertError) -> StatusCode {
    match err {
        ConvertError::Parse(_)
        | ConvertError::NotSvg(_)
        | ConvertError::TooDeep(_)
        | ConvertError::UnknownPlugin(_)
        | ConvertError::InvalidComponentName(_)
        | ConvertError::Format(_) => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;

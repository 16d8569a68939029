use crate::form::{Field, FormState, FormView, ValidationErrors};
use axum::response::Json;
use serde::Deserialize;

/// A field edit together with the form it happened in.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(flatten)]
    pub state: FormState,
    #[serde(default)]
    pub submitted: bool,
    pub field: Field,
    pub value: String,
}

/// Live re-validation for the login page. Answers `{}` until the form has
/// been submitted once.
pub async fn validate_form(Json(req): Json<ValidateRequest>) -> Json<ValidationErrors> {
    let mut view = FormView::restore(req.state, req.submitted);
    view.on_change(req.field, req.value);

    if !view.errors().is_empty() {
        tracing::debug!("Live validation errors: {:?}", view.errors().fields());
    }

    Json(view.errors().clone())
}

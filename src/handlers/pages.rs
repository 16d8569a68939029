use crate::{
    form::{Field, FormState, FormView, Submission},
    templates,
};
use axum::{response::Html, Form};

pub async fn login_page() -> Html<String> {
    render(&FormView::new(), false)
}

/// Form submit. Missing fields are treated as empty.
pub async fn login(Form(state): Form<FormState>) -> Html<String> {
    let mut view = FormView::new();
    for field in Field::ALL {
        view.on_change(field, state.value(field));
    }

    match view.on_submit() {
        Submission::Accepted => {
            // Placeholder for real authentication
            tracing::info!("Login accepted for {}", view.state().email.trim());
            render(&view, true)
        }
        Submission::Rejected(errors) => {
            tracing::debug!("Login rejected, invalid fields: {:?}", errors.fields());
            render(&view, false)
        }
    }
}

fn render(view: &FormView, acknowledged: bool) -> Html<String> {
    let content = templates::login(view, acknowledged);
    let page = templates::base("Login", content);
    Html(page.into_string())
}

use crate::form::{Field, FormView};
use maud::{html, Markup, PreEscaped};

pub const SUCCESS_MESSAGE: &str = "Successfully authenticated.";

/// Shown in an empty error region so it keeps its height.
const NBSP: &str = "\u{a0}";

pub fn login(view: &FormView, acknowledged: bool) -> Markup {
    html! {
        main class="page-shell" aria-labelledby="login-heading" {
            div class="ambient-overlay" aria-hidden="true" {}

            section class="login-card" role="form" {
                header class="card-header" {
                    h1 id="login-heading" { "Welcome Back" }
                    p class="card-subtitle" {
                        "Enter your credentials to continue your journey."
                    }
                }

                @if acknowledged {
                    div class="success-text" role="status" aria-live="polite" {
                        (SUCCESS_MESSAGE)
                    }
                }

                form id="login-form" class="login-form" action="/login" method="post"
                    data-submitted=(flag(view.submitted())) novalidate {

                    @for field in Field::ALL {
                        (input_field(view, field))
                    }

                    div class="form-footer" {
                        a class="forgot-link" href="#forgot-password" {
                            "Forgot Password?"
                        }
                        button type="submit" class="primary-button" {
                            "Login"
                        }
                    }
                }
            }

            footer class="page-footer" aria-label="Inspirational quote" {
                div class="calligraphy" aria-hidden="true" {}
                p {
                    "\u{201c}Seek knowledge from the cradle to the grave.\u{201d}"
                }
            }
        }

        (live_validation_script())
    }
}

fn input_field(view: &FormView, field: Field) -> Markup {
    let error = view.errors().get(field);
    let described_by = error.map(|_| field.error_id());
    // Passwords are never written back into the page.
    let value = (field != Field::Password).then(|| view.state().value(field));

    html! {
        div class="input-field" {
            label for=(field.input_id()) { (field.label()) }
            input id=(field.input_id())
                type=(field.input_type())
                name=(field.name())
                autocomplete=(field.autocomplete())
                aria-describedby=[described_by]
                aria-invalid=(flag(error.is_some()))
                value=[value];
            span id=(field.error_id()) class="error-text" role="alert" aria-live="assertive" {
                @match error {
                    Some(error) => (error.to_string()),
                    None => (NBSP),
                }
            }
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// Once the page has been rendered for a submit, every edit asks the server
// for fresh errors and rewrites the error regions. Only the reply to the
// latest edit is applied.
fn live_validation_script() -> Markup {
    html! {
        script {
            (PreEscaped(r#"
            (function() {
                const form = document.getElementById('login-form');
                const fields = ['email', 'password'];
                const nbsp = '\u00a0';
                let latest = 0;

                form.addEventListener('input', async function(e) {
                    if (form.dataset.submitted !== 'true') return;
                    const field = e.target.name;
                    if (!fields.includes(field)) return;
                    const seq = ++latest;

                    const body = {
                        email: form.elements.email.value,
                        password: form.elements.password.value,
                        submitted: true,
                        field: field,
                        value: e.target.value,
                    };

                    try {
                        const response = await fetch('/api/validate', {
                            method: 'POST',
                            headers: { 'Content-Type': 'application/json' },
                            body: JSON.stringify(body),
                        });
                        if (!response.ok) return;
                        const errors = await response.json();
                        if (seq !== latest) return;

                        for (const name of fields) {
                            const input = form.elements[name];
                            const region = document.getElementById(input.id + '-error');
                            const message = errors[name];
                            region.textContent = message || nbsp;
                            input.setAttribute('aria-invalid', message ? 'true' : 'false');
                            if (message) {
                                input.setAttribute('aria-describedby', region.id);
                            } else {
                                input.removeAttribute('aria-describedby');
                            }
                        }
                    } catch (err) {
                        console.error('Live validation failed:', err);
                    }
                });
            })();
            "#))
        }
    }
}

use dioxus::prelude::*;

/// Email and password sign-in. The form posts to the server, which sets the session
/// cookie and sends the browser on to the dashboard.
#[component]
pub fn Login(error: Option<String>) -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "PathFinder" }
                    p { class: "login-subtitle", "Career guidance for students, parents and mentors" }
                }
                if let Some(error) = error {
                    p { class: "login-error", "{error}" }
                }
                form { class: "login-form", action: "/auth/login", method: "post",
                    label { class: "field",
                        span { class: "field-label", "Email" }
                        input {
                            class: "input",
                            r#type: "email",
                            name: "email",
                            autocomplete: "email",
                            required: true,
                        }
                    }
                    label { class: "field",
                        span { class: "field-label", "Password" }
                        input {
                            class: "input",
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            required: true,
                        }
                    }
                    button { r#type: "submit", class: "btn btn-primary login-btn", "Sign in" }
                }
            }
        }
    }
}

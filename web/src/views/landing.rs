use crate::Route;
use dioxus::prelude::*;

struct Feature {
    class: &'static str,
    title: &'static str,
    tagline: &'static str,
    points: [&'static str; 3],
}

static FEATURES: [Feature; 3] = [
    Feature {
        class: "student",
        title: "For Students",
        tagline: "Personalized career guidance and roadmaps",
        points: [
            "Interactive career roadmaps",
            "Personalized recommendations",
            "Progress tracking & analytics",
        ],
    },
    Feature {
        class: "parent",
        title: "For Parents",
        tagline: "Financial planning and child progress tracking",
        points: [
            "Child's progress monitoring",
            "Scholarship & loan suggestions",
            "Financial planning tools",
        ],
    },
    Feature {
        class: "mentor",
        title: "For Mentors",
        tagline: "Guide students and track their success",
        points: [
            "Student portfolio management",
            "Performance analytics",
            "Impact measurement",
        ],
    },
];

#[component]
pub fn Landing() -> Element {
    let session = use_server_future(api::get_current_user)?;

    match &*session.read() {
        Some(Ok(Some(_))) => {
            navigator().replace(Route::Dashboard {});
            rsx! {
                div { class: "loading", "Loading your dashboard..." }
            }
        }
        Some(_) => rsx! { Marketing {} },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}

#[component]
fn Marketing() -> Element {
    rsx! {
        div { class: "landing",
            section { class: "hero",
                h1 { class: "hero-title", "PathFinder" }
                p { class: "hero-subtitle",
                    "Your comprehensive career guidance platform connecting Students, Parents, and Mentors for personalized educational journeys and financial planning."
                }
                div { class: "hero-actions",
                    Link { to: Route::login(), class: "btn btn-light btn-lg", "Get Started" }
                    a { href: "#features", class: "btn btn-outline-light btn-lg", "Learn More" }
                }
            }

            section { id: "features", class: "feature-grid",
                for feature in FEATURES.iter() {
                    div { key: "{feature.class}", class: "card feature-card feature-{feature.class}",
                        div { class: "card-header",
                            h2 { class: "card-title", "{feature.title}" }
                            p { class: "card-desc", "{feature.tagline}" }
                        }
                        ul { class: "feature-points",
                            for point in feature.points {
                                li { key: "{point}", "{point}" }
                            }
                        }
                    }
                }
            }

            section { class: "card call-to-action",
                h2 { "Ready to Start Your Journey?" }
                p { class: "text-muted",
                    "Join thousands of students, parents, and mentors already using PathFinder to achieve their educational and career goals."
                }
                Link { to: Route::login(), class: "btn btn-primary btn-lg", "Create Your Account" }
            }
        }
    }
}

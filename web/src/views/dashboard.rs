use crate::Route;
use dioxus::prelude::*;
use types::{DashboardState, dashboard::RoleDashboard};

use super::{
    components::{DashboardSkeleton, Fallback},
    mentor::MentorDashboard,
    parent::ParentDashboard,
    student::StudentDashboard,
};

#[component]
pub fn Dashboard() -> Element {
    let session = use_server_future(api::get_current_user)?;

    let viewer = match &*session.read() {
        Some(Ok(viewer)) => Some(viewer.clone()),
        Some(Err(_)) => Some(None),
        None => None,
    };
    let signed_in = matches!(viewer, Some(Some(_)));

    let profile = use_resource(move || async move {
        if !signed_in {
            return None;
        }
        match api::get_profile().await {
            Ok(profile) => profile,
            Err(error) => {
                tracing::warn!(%error, "profile lookup failed");
                None
            }
        }
    });

    let state = DashboardState::resolve(
        viewer.as_ref().map(Option::as_ref),
        profile.read().clone(),
    );

    let body = match &state {
        DashboardState::Loading | DashboardState::ProfileLoading => rsx! { DashboardSkeleton {} },
        DashboardState::Unauthenticated => {
            navigator().replace(Route::login());
            rsx! {
                div { class: "loading", "Redirecting to sign in..." }
            }
        }
        DashboardState::ProfileMissing => rsx! {
            Fallback { title: "Profile not found", message: "Please contact support." }
        },
        DashboardState::RoleUnknown(_) => rsx! {
            Fallback { title: "Unknown role", message: "Please contact support." }
        },
        DashboardState::Rendering(RoleDashboard::Student(profile)) => rsx! {
            StudentDashboard { profile_id: profile.id }
        },
        DashboardState::Rendering(RoleDashboard::Parent(profile)) => rsx! {
            ParentDashboard { profile_id: profile.id }
        },
        DashboardState::Rendering(RoleDashboard::Mentor(profile)) => rsx! {
            MentorDashboard { profile_id: profile.id }
        },
    };

    let first_name = state
        .profile()
        .map(|p| p.first_name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "app-layout",
            header { class: "app-header",
                div { class: "app-brand",
                    span { class: "app-logo", "PathFinder" }
                    if !first_name.is_empty() {
                        span { class: "app-welcome", "Welcome back, {first_name}!" }
                    }
                }
                if signed_in {
                    a { href: "/auth/logout", rel: "external", class: "btn btn-secondary", "Sign Out" }
                }
            }
            main { class: "main-content", {body} }
        }
    }
}

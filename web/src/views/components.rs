use std::future::Future;

use dioxus::prelude::*;
use types::LoadSlot;
use uuid::Uuid;

/// Run `load` whenever `profile_id` changes, keeping only the newest result.
///
/// A failed load shows the view model's empty state rather than an error page.
pub fn use_profile_load<V, F, Fut>(profile_id: ReadSignal<Uuid>, load: F) -> Signal<LoadSlot<Uuid, V>>
where
    V: Default + 'static,
    F: Fn(Uuid) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<V, ServerFnError>> + 'static,
{
    let mut slot = use_signal(LoadSlot::<Uuid, V>::default);

    use_effect(move || {
        let id = profile_id();
        if slot.peek().is_loading() {
            tracing::debug!(profile = %id, "superseding an in-flight load");
        }
        let ticket = slot.write().begin(id);

        spawn(async move {
            let id = ticket.key();
            let view = load(id).await.unwrap_or_else(|error| {
                tracing::warn!(%error, profile = %id, "dashboard load failed");
                V::default()
            });
            if !slot.write().complete(ticket, view) {
                tracing::debug!(profile = %id, "dropped result of a superseded load");
            }
        });
    });

    slot
}

#[component]
pub fn StatCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(into)] caption: String,
    #[props(default)] progress: Option<u8>,
) -> Element {
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            p { class: "stat-caption", "{caption}" }
            if let Some(value) = progress {
                ProgressBar { value }
            }
        }
    }
}

#[component]
pub fn ProgressBar(value: u8) -> Element {
    let width = value.min(100);
    rsx! {
        div { class: "progress",
            div { class: "progress-fill", style: "width: {width}%" }
        }
    }
}

/// One labelled value inside a profile card.
#[component]
pub fn Field(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    rsx! {
        div { class: "field",
            p { class: "field-label", "{label}" }
            p { class: "field-value", "{value}" }
        }
    }
}

#[component]
pub fn Panel(
    #[props(into)] title: String,
    #[props(into, default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
                if !description.is_empty() {
                    p { class: "card-desc", "{description}" }
                }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// What a section shows when it has nothing to display yet.
#[component]
pub fn EmptyState(#[props(into)] message: String, #[props(into)] action: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "text-muted", "{message}" }
            button { class: "btn btn-primary", "{action}" }
        }
    }
}

#[component]
pub fn QuickActions(actions: Vec<&'static str>) -> Element {
    rsx! {
        Panel { title: "Quick Actions",
            div { class: "quick-actions",
                for action in actions {
                    button { key: "{action}", class: "btn btn-secondary btn-block", "{action}" }
                }
            }
        }
    }
}

/// Full-page message for states the router cannot dispatch past.
#[component]
pub fn Fallback(#[props(into)] title: String, #[props(into)] message: String) -> Element {
    rsx! {
        div { class: "fallback",
            h2 { class: "fallback-title", "{title}" }
            p { class: "text-muted", "{message}" }
        }
    }
}

#[component]
pub fn DashboardSkeleton() -> Element {
    rsx! {
        div { class: "dashboard loading-skeleton",
            div { class: "skeleton skeleton-title" }
            div { class: "stat-grid",
                for i in 0..4 {
                    div { key: "{i}", class: "skeleton skeleton-card" }
                }
            }
        }
    }
}

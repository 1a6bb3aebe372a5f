use dioxus::prelude::*;
use types::{
    format::money,
    records::{LinkedStudent, ParentProfile},
};
use uuid::Uuid;

use super::components::{
    DashboardSkeleton, EmptyState, Field, Panel, ProgressBar, QuickActions, StatCard, use_profile_load,
};

const PROGRESS_SCORE: u8 = 78;
const CHILD_PROGRESS: u8 = 75;

/// Static advice cards; there is no scholarship or loan feed behind them yet.
const FINANCIAL_ALERTS: [(&str, &str, &str); 3] = [
    (
        "Merit Scholarship Available",
        "Based on your child's performance, they qualify for a ₹50,000 scholarship",
        "Apply Now",
    ),
    (
        "Education Loan Options",
        "Low interest education loans available from partner banks",
        "Explore Loans",
    ),
    (
        "Savings Tip",
        "Start a SIP of ₹5,000/month to build your education fund",
        "Learn More",
    ),
];

const EDUCATION_BUDGET: [(&str, &str); 3] = [
    ("Tuition", "₹15,000"),
    ("Books & Materials", "₹3,000"),
    ("Online Courses", "₹2,000"),
];

#[component]
pub fn ParentDashboard(profile_id: ReadSignal<Uuid>) -> Element {
    let slot = use_profile_load(profile_id, api::load_parent_dashboard);

    let Some(view) = slot.read().value().cloned() else {
        return rsx! { DashboardSkeleton {} };
    };

    let income = view.parent.as_ref().and_then(|p| money(p.annual_income));
    let savings = view.parent.as_ref().and_then(|p| money(p.savings_amount));

    rsx! {
        div { class: "dashboard",
            div { class: "stat-grid",
                StatCard {
                    title: "Annual Income",
                    value: income.unwrap_or_else(|| "Not set".into()),
                    caption: "Yearly household income",
                }
                StatCard {
                    title: "Education Savings",
                    value: savings.unwrap_or_else(|| "Not set".into()),
                    caption: "Saved for education",
                }
                StatCard {
                    title: "Children Tracked",
                    value: "{view.children_tracked()}",
                    caption: "Student profiles linked",
                }
                StatCard {
                    title: "Progress Score",
                    value: "{PROGRESS_SCORE}%",
                    caption: "Overall child progress",
                    progress: Some(PROGRESS_SCORE),
                }
            }

            div { class: "dashboard-columns",
                div { class: "dashboard-main",
                    Panel {
                        title: "Financial Overview",
                        description: "Manage your child's education financing",
                        match &view.parent {
                            Some(parent) => rsx! { FinancialOverview { parent: parent.clone() } },
                            None => rsx! {
                                EmptyState {
                                    message: "Complete your financial profile to get personalized loan and scholarship recommendations",
                                    action: "Setup Financial Profile",
                                }
                            },
                        }
                    }
                    Panel {
                        title: "Child's Progress",
                        description: "Track your child's academic and career development",
                        match &view.child {
                            Some(child) => rsx! { ChildProgress { child: child.clone() } },
                            None => rsx! {
                                EmptyState { message: "No child profiles linked yet", action: "Link Child Profile" }
                            },
                        }
                    }
                }

                div { class: "dashboard-side",
                    Panel { title: "Financial Alerts", description: "Scholarships and loan opportunities",
                        for (title, body, action) in FINANCIAL_ALERTS {
                            div { key: "{title}", class: "alert-item",
                                h4 { "{title}" }
                                p { class: "text-muted", "{body}" }
                                button { class: "btn btn-secondary", "{action}" }
                            }
                        }
                    }
                    QuickActions {
                        actions: vec!["View Child's Roadmap", "Schedule Mentor Session", "Financial Planning"],
                    }
                    Panel { title: "Education Budget",
                        for (item, amount) in EDUCATION_BUDGET {
                            div { key: "{item}", class: "budget-row",
                                span { "{item}" }
                                span { "{amount}" }
                            }
                        }
                        div { class: "budget-row budget-total",
                            span { "Total Monthly" }
                            span { "₹20,000" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FinancialOverview(parent: ParentProfile) -> Element {
    let income = money(parent.annual_income).unwrap_or_else(|| "Not specified".into());
    let savings = money(parent.savings_amount).unwrap_or_else(|| "Not specified".into());
    let occupation = parent.occupation.unwrap_or_else(|| "Not specified".into());
    let education = parent.education.unwrap_or_else(|| "Not specified".into());

    rsx! {
        div { class: "field-grid",
            Field { label: "Annual Income", value: income }
            Field { label: "Education Savings", value: savings }
            Field { label: "Occupation", value: occupation }
            Field { label: "Education", value: education }
        }
        div { class: "button-row",
            button { class: "btn btn-primary", "Update Financial Info" }
            button { class: "btn btn-secondary", "Explore Scholarships" }
        }
    }
}

#[component]
fn ChildProgress(child: LinkedStudent) -> Element {
    let name = child.contact.full_name();
    let email = child.contact.email.unwrap_or_default();
    let grade = child.student.grade.unwrap_or_else(|| "Not Set".into());
    let stream = child.student.stream.unwrap_or_else(|| "Not specified".into());
    let goals = child.student.career_goals.unwrap_or_else(|| "Not set".into());

    rsx! {
        div { class: "child",
            div { class: "child-header",
                div {
                    h3 { class: "child-name", "{name}" }
                    p { class: "text-muted", "{email}" }
                }
                span { class: "badge", "Grade {grade}" }
            }
            div { class: "field-grid",
                Field { label: "Stream", value: stream }
                Field { label: "Career Goals", value: goals }
                div { class: "field",
                    p { class: "field-label", "Progress" }
                    ProgressBar { value: CHILD_PROGRESS }
                    span { class: "text-muted", "{CHILD_PROGRESS}%" }
                }
            }
        }
    }
}

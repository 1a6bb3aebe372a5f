use dioxus::prelude::*;
use types::{
    StudentView,
    format::short_date,
    records::{Recommendation, Roadmap, StudentProfile},
};
use uuid::Uuid;

use super::components::{
    DashboardSkeleton, EmptyState, Field, Panel, ProgressBar, QuickActions, StatCard, use_profile_load,
};

// Display constants until these widgets have a data source.
const CAREER_SCORE: u8 = 85;
const ROADMAP_PROGRESS: u8 = 67;
const SKILLS_ACQUIRED: u32 = 12;

#[component]
pub fn StudentDashboard(profile_id: ReadSignal<Uuid>) -> Element {
    let slot = use_profile_load(profile_id, api::load_student_dashboard);

    let Some(view) = slot.read().value().cloned() else {
        return rsx! { DashboardSkeleton {} };
    };
    let StudentView {
        student,
        recommendations,
        ..
    } = &view;

    rsx! {
        div { class: "dashboard",
            div { class: "stat-grid",
                StatCard {
                    title: "Career Score",
                    value: "{CAREER_SCORE}%",
                    caption: "+12% from last month",
                    progress: Some(CAREER_SCORE),
                }
                StatCard {
                    title: "Roadmap Progress",
                    value: "{ROADMAP_PROGRESS}%",
                    caption: "3 of 5 milestones",
                    progress: Some(ROADMAP_PROGRESS),
                }
                StatCard {
                    title: "Skills Acquired",
                    value: "{SKILLS_ACQUIRED}",
                    caption: "+3 this quarter",
                }
                StatCard {
                    title: "Recommendations",
                    value: "{recommendations.len()}",
                    caption: "New suggestions available",
                }
            }

            div { class: "dashboard-columns",
                div { class: "dashboard-main",
                    Panel {
                        title: "Your Profile",
                        description: "Complete your profile to get personalized recommendations",
                        match student {
                            Some(student) => rsx! { StudentDetails { student: student.clone() } },
                            None => rsx! {
                                EmptyState {
                                    message: "Complete your student profile to unlock personalized features",
                                    action: "Complete Profile",
                                }
                            },
                        }
                    }
                    Panel {
                        title: "Your Roadmap",
                        description: "Track your progress towards your career goals",
                        match view.active_roadmap() {
                            Some(roadmap) => rsx! { ActiveRoadmap { roadmap: roadmap.clone() } },
                            None => rsx! {
                                EmptyState { message: "No roadmap created yet", action: "Create Your Roadmap" }
                            },
                        }
                    }
                }

                div { class: "dashboard-side",
                    Panel { title: "Recommendations", description: "Personalized suggestions for you",
                        if recommendations.is_empty() {
                            p { class: "empty-state text-muted", "Complete your profile to get recommendations" }
                        }
                        for rec in recommendations.iter() {
                            RecommendationItem { key: "{rec.id}", recommendation: rec.clone() }
                        }
                    }
                    QuickActions { actions: vec!["Update Profile", "Set New Goal", "Explore Courses"] }
                }
            }
        }
    }
}

#[component]
fn StudentDetails(student: StudentProfile) -> Element {
    let grade = student.grade.unwrap_or_else(|| "Not specified".into());
    let stream = student.stream.unwrap_or_else(|| "Not specified".into());
    let goals = student
        .career_goals
        .unwrap_or_else(|| "No goals specified yet".into());

    rsx! {
        div { class: "field-grid",
            Field { label: "Grade", value: grade }
            Field { label: "Stream", value: stream }
            div { class: "field-wide",
                Field { label: "Career Goals", value: goals }
            }
        }
    }
}

#[component]
fn ActiveRoadmap(roadmap: Roadmap) -> Element {
    let progress = roadmap.progress_percent();
    let created = short_date(roadmap.created_at);

    rsx! {
        div { class: "roadmap",
            div { class: "roadmap-header",
                h3 { class: "roadmap-title", "{roadmap.title}" }
                span { class: "badge", "{progress}% Complete" }
            }
            ProgressBar { value: progress }
            p { class: "text-muted", "{roadmap.description}" }
            p { class: "roadmap-date", "Created {created}" }
            button { class: "btn btn-secondary btn-block", "View Full Roadmap" }
        }
    }
}

#[component]
fn RecommendationItem(recommendation: Recommendation) -> Element {
    let kind = recommendation.kind.as_str();
    let score = recommendation.match_percent();

    rsx! {
        div { class: "recommendation",
            div { class: "recommendation-header",
                h4 { class: "recommendation-title", "{recommendation.title}" }
                span { class: "badge badge-{kind}", "{kind}" }
            }
            p { class: "text-muted", "{recommendation.description}" }
            span { class: "recommendation-score", "{score}% match" }
        }
    }
}

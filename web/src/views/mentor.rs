use dioxus::prelude::*;
use types::{
    format::initials,
    records::{LinkedStudent, MentorProfile},
};
use uuid::Uuid;

use super::components::{
    DashboardSkeleton, EmptyState, Field, Panel, ProgressBar, QuickActions, StatCard, use_profile_load,
};

const ACTIVE_STUDENTS: u32 = 24;
const SESSIONS_TODAY: u32 = 5;
const STUDENT_PROGRESS: u8 = 60;

struct Session {
    title: &'static str,
    time: &'static str,
    with: &'static str,
    minutes: u32,
}

/// Sample schedule until sessions are stored.
static TODAY: [Session; 3] = [
    Session {
        title: "Career Guidance Session",
        time: "10:00 AM",
        with: "Priya Sharma",
        minutes: 45,
    },
    Session {
        title: "College Selection",
        time: "2:00 PM",
        with: "Rahul Kumar",
        minutes: 30,
    },
    Session {
        title: "Mock Interview",
        time: "4:30 PM",
        with: "Anjali Patel",
        minutes: 60,
    },
];

const MONTH_STATS: [(&str, &str); 4] = [
    ("Sessions Completed", "47"),
    ("Avg. Session Rating", "4.8"),
    ("Response Time", "< 2 hours"),
    ("Student Success Rate", "94%"),
];

#[component]
pub fn MentorDashboard(profile_id: ReadSignal<Uuid>) -> Element {
    let slot = use_profile_load(profile_id, api::load_mentor_dashboard);

    let Some(view) = slot.read().value().cloned() else {
        return rsx! { DashboardSkeleton {} };
    };

    let rating = view
        .mentor
        .as_ref()
        .map(MentorProfile::rating_label)
        .unwrap_or_else(|| "0.0".into());
    let experience = view
        .mentor
        .as_ref()
        .and_then(|m| m.experience_years)
        .unwrap_or(0);

    rsx! {
        div { class: "dashboard",
            div { class: "stat-grid",
                StatCard { title: "Active Students", value: "{ACTIVE_STUDENTS}", caption: "+3 this month" }
                StatCard { title: "Mentor Rating", value: "{rating} ★", caption: "Average rating" }
                StatCard { title: "Experience", value: "{experience}", caption: "Years of experience" }
                StatCard { title: "Sessions Today", value: "{SESSIONS_TODAY}", caption: "2 upcoming" }
            }

            div { class: "dashboard-columns",
                div { class: "dashboard-main",
                    Panel {
                        title: "Your Mentor Profile",
                        description: "Manage your expertise and availability",
                        match &view.mentor {
                            Some(mentor) => rsx! { MentorDetails { mentor: mentor.clone() } },
                            None => rsx! {
                                EmptyState {
                                    message: "Complete your mentor profile to start helping students",
                                    action: "Setup Mentor Profile",
                                }
                            },
                        }
                    }
                    Panel {
                        title: "Your Students",
                        description: "Recent student interactions and progress",
                        if view.students.is_empty() {
                            EmptyState { message: "No students assigned yet", action: "Browse Available Students" }
                        } else {
                            for student in view.students.iter() {
                                StudentRow { key: "{student.student.user_id}", student: student.clone() }
                            }
                            button { class: "btn btn-secondary btn-block", "View All Students" }
                        }
                    }
                }

                div { class: "dashboard-side",
                    Panel { title: "Today's Schedule", description: "Your upcoming sessions",
                        for session in TODAY.iter() {
                            div { key: "{session.time}", class: "session",
                                div { class: "session-header",
                                    h4 { "{session.title}" }
                                    span { class: "badge", "{session.time}" }
                                }
                                p { class: "text-muted", "with {session.with}" }
                                span { class: "session-length", "{session.minutes} minutes" }
                            }
                        }
                    }
                    QuickActions {
                        actions: vec!["Schedule Session", "Message Student", "Update Roadmap", "Add Resources"],
                    }
                    Panel { title: "This Month",
                        for (label, value) in MONTH_STATS {
                            div { key: "{label}", class: "budget-row",
                                span { "{label}" }
                                span { "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MentorDetails(mentor: MentorProfile) -> Element {
    let years = mentor.experience_years.unwrap_or(0);
    let qualification = mentor
        .qualification
        .unwrap_or_else(|| "Not specified".into());
    let bio = mentor.bio.unwrap_or_else(|| "No bio added yet".into());

    rsx! {
        div { class: "field-grid",
            Field { label: "Experience", value: "{years} years" }
            Field { label: "Qualification", value: qualification }
        }
        div { class: "field",
            p { class: "field-label", "Expertise Areas" }
            div { class: "badge-row",
                if mentor.expertise_areas.is_empty() {
                    span { class: "badge badge-outline", "No expertise areas set" }
                }
                for area in mentor.expertise_areas.iter() {
                    span { key: "{area}", class: "badge", "{area}" }
                }
            }
        }
        Field { label: "Bio", value: bio }
        button { class: "btn btn-primary", "Update Profile" }
    }
}

#[component]
fn StudentRow(student: LinkedStudent) -> Element {
    let contact = &student.contact;
    let avatar = initials(&contact.first_name, &contact.last_name);
    let name = contact.full_name();
    let grade = student.student.grade.as_deref().unwrap_or("Not Set");
    let stream = student.student.stream.as_deref().unwrap_or("Stream not set");

    rsx! {
        div { class: "student-row",
            div { class: "avatar", "{avatar}" }
            div { class: "student-info",
                h4 { "{name}" }
                p { class: "text-muted", "Grade {grade} • {stream}" }
            }
            div { class: "student-progress",
                p { class: "field-label", "Progress" }
                ProgressBar { value: STUDENT_PROGRESS }
                span { class: "text-muted", "{STUDENT_PROGRESS}%" }
            }
        }
    }
}

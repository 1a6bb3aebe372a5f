//! Profile resolution and per-role dashboard loads.
//!
//! Nothing here returns an error. A failed read is logged and its section comes back
//! empty, so a dashboard always renders with whatever did load.

use types::{
    MentorView, ParentView, Profile, Result, StudentView,
    records::{LinkedStudent, MentorProfile, ParentProfile, Recommendation, Roadmap, StudentProfile},
    view::{MENTOR_STUDENT_LIMIT, RECOMMENDATION_LIMIT, newest_first, rank_recommendations},
};
use uuid::Uuid;

use crate::store::{DataStore, Query};

const CONTACT_COLUMNS: &[&str] = &["first_name", "last_name", "email"];

/// Look up the profile of a signed-in user.
pub async fn resolve_profile(store: &impl DataStore, user_id: Uuid) -> Option<Profile> {
    let query = Query::table("profiles").eq("user_id", user_id);
    settle("profile", store.fetch_one::<Profile>(&query).await).flatten()
}

pub async fn load_student(store: &impl DataStore, profile_id: Uuid) -> StudentView {
    let student = Query::table("student_profiles").eq("user_id", profile_id);
    let recommendations = Query::table("recommendations")
        .eq("student_id", profile_id)
        .order_desc("relevance_score")
        .limit(RECOMMENDATION_LIMIT);
    let roadmaps = Query::table("roadmaps")
        .eq("student_id", profile_id)
        .order_desc("created_at");

    let (student, recommendations, roadmaps) = tokio::join!(
        store.fetch_one::<StudentProfile>(&student),
        store.fetch_many::<Recommendation>(&recommendations),
        store.fetch_many::<Roadmap>(&roadmaps),
    );

    StudentView {
        student: settle("student profile", student).flatten(),
        recommendations: rank_recommendations(
            settle("recommendations", recommendations).unwrap_or_default(),
            RECOMMENDATION_LIMIT,
        ),
        roadmaps: newest_first(settle("roadmaps", roadmaps).unwrap_or_default()),
    }
}

/// The child read depends on the parent record, so the two run in sequence.
pub async fn load_parent(store: &impl DataStore, profile_id: Uuid) -> ParentView {
    let query = Query::table("parent_profiles").eq("user_id", profile_id);
    let parent = settle("parent profile", store.fetch_one::<ParentProfile>(&query).await).flatten();

    let child = match parent.as_ref().and_then(|p| p.child_id) {
        Some(child_id) => {
            let query = Query::table("student_profiles")
                .eq("user_id", child_id)
                .join("profiles", CONTACT_COLUMNS);
            settle("linked child", store.fetch_one::<LinkedStudent>(&query).await).flatten()
        }
        None => None,
    };

    ParentView { parent, child }
}

pub async fn load_mentor(store: &impl DataStore, profile_id: Uuid) -> MentorView {
    let mentor = Query::table("mentor_profiles").eq("user_id", profile_id);
    // Not scoped to this mentor's students; there is no assignment table yet.
    let students = Query::table("student_profiles")
        .join("profiles", CONTACT_COLUMNS)
        .limit(MENTOR_STUDENT_LIMIT);

    let (mentor, students) = tokio::join!(
        store.fetch_one::<MentorProfile>(&mentor),
        store.fetch_many::<LinkedStudent>(&students),
    );

    MentorView {
        mentor: settle("mentor profile", mentor).flatten(),
        students: settle("students", students).unwrap_or_default(),
    }
}

fn settle<T>(section: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(section, %error, "read failed; showing section as empty");
            None
        }
    }
}

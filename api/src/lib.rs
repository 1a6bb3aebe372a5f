use dioxus::prelude::*;
use types::{MentorView, ParentView, Profile, StudentView, Viewer};
use uuid::Uuid;

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<Viewer>> {
    match server::current_session().await {
        Ok(session) => Ok(session.map(|s| s.viewer())),
        Err(error) => {
            tracing::warn!(%error, "could not resolve session");
            Ok(None)
        }
    }
}

/// The signed-in user's profile. `None` when there is no session or no profile row.
#[post("/api/profile")]
pub async fn get_profile() -> ServerFnResult<Option<Profile>> {
    let Some(session) = server::current_session().await? else {
        return Ok(None);
    };
    let store = server::session_store().await?;
    Ok(server::dashboard::resolve_profile(&store, session.user_id).await)
}

#[post("/api/dashboard/student")]
pub async fn load_student_dashboard(profile_id: Uuid) -> ServerFnResult<StudentView> {
    let store = server::session_store().await?;
    Ok(server::dashboard::load_student(&store, profile_id).await)
}

#[post("/api/dashboard/parent")]
pub async fn load_parent_dashboard(profile_id: Uuid) -> ServerFnResult<ParentView> {
    let store = server::session_store().await?;
    Ok(server::dashboard::load_parent(&store, profile_id).await)
}

#[post("/api/dashboard/mentor")]
pub async fn load_mentor_dashboard(profile_id: Uuid) -> ServerFnResult<MentorView> {
    let store = server::session_store().await?;
    Ok(server::dashboard::load_mentor(&store, profile_id).await)
}

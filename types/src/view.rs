//! Render-ready results of a dashboard load.
//!
//! Every section is independently optional: a view model is always complete, and a
//! section the store could not answer is simply empty.

use serde::{Deserialize, Serialize};

use crate::records::{LinkedStudent, MentorProfile, ParentProfile, Recommendation, Roadmap, StudentProfile};

/// Most recommendations a student dashboard shows.
pub const RECOMMENDATION_LIMIT: usize = 6;

/// Size of the mentor's student listing.
pub const MENTOR_STUDENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentView {
    pub student: Option<StudentProfile>,
    /// Highest relevance first.
    pub recommendations: Vec<Recommendation>,
    /// Newest first.
    pub roadmaps: Vec<Roadmap>,
}

impl StudentView {
    /// The roadmap the dashboard features.
    pub fn active_roadmap(&self) -> Option<&Roadmap> {
        self.roadmaps.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentView {
    pub parent: Option<ParentProfile>,
    pub child: Option<LinkedStudent>,
}

impl ParentView {
    pub fn children_tracked(&self) -> usize {
        usize::from(self.child.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorView {
    pub mentor: Option<MentorProfile>,
    pub students: Vec<LinkedStudent>,
}

/// Order by relevance, highest first, and keep at most `limit`.
///
/// The sort is stable, so equal scores keep the order the store returned them in.
pub fn rank_recommendations(mut recommendations: Vec<Recommendation>, limit: usize) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    recommendations.truncate(limit);
    recommendations
}

/// Newest first.
pub fn newest_first(mut roadmaps: Vec<Roadmap>) -> Vec<Roadmap> {
    roadmaps.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    roadmaps
}

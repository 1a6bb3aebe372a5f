//! Rows the dashboards read from the data store.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::de::{null_as_default, opt_text};

/// A row of `student_profiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub user_id: Uuid,
    #[serde(default, deserialize_with = "opt_text")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub stream: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub career_goals: Option<String>,
}

/// A row of `parent_profiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentProfile {
    pub user_id: Uuid,
    #[serde(default)]
    pub annual_income: Option<f64>,
    #[serde(default)]
    pub savings_amount: Option<f64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub education: Option<String>,
    #[serde(default)]
    pub child_id: Option<Uuid>,
}

/// A row of `mentor_profiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub user_id: Uuid,
    #[serde(default)]
    pub experience_years: Option<i32>,
    #[serde(default, deserialize_with = "opt_text")]
    pub qualification: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expertise_areas: Vec<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub bio: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl MentorProfile {
    /// Unrated mentors show "0.0".
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) if rating != 0.0 => rating.to_string(),
            _ => "0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Career,
    College,
    Course,
    Scholarship,
    #[serde(other)]
    Other,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Career => "career",
            RecommendationKind::College => "college",
            RecommendationKind::Course => "course",
            RecommendationKind::Scholarship => "scholarship",
            RecommendationKind::Other => "other",
        }
    }
}

/// A row of `recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Uuid,
    pub student_id: Uuid,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevance_score: f64,
}

impl Recommendation {
    pub fn match_percent(&self) -> u8 {
        percent(self.relevance_score)
    }
}

/// A row of `roadmaps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: Uuid,
    pub student_id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: f64,
    pub created_at: Timestamp,
}

impl Roadmap {
    pub fn progress_percent(&self) -> u8 {
        percent(self.progress)
    }
}

/// The `profiles` columns pulled in by a joined student listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactCard {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A student extension record joined with its owner's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedStudent {
    #[serde(flatten)]
    pub student: StudentProfile,
    #[serde(rename = "profiles")]
    pub contact: ContactCard,
}

fn percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

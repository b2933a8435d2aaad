//! Career analysis document returned by `POST /analyze-resume`.
//!
//! Numeric fields are `f64` so model output with either integer or decimal
//! scores deserializes. Cross-field rules (probabilities summing to 100) are
//! prompt instructions only and are never checked here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub skills: Vec<Skill>,
    pub experience: Experience,
    pub education: Education,
    pub career_predictions: Vec<CareerPrediction>,
    pub skill_gaps: Vec<SkillGap>,
    pub readiness_score: f64,
    pub explanation: Explanation,
    pub roadmap: Roadmap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    /// 0 – 100
    pub proficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Fresher,
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub level: ExperienceLevel,
    pub years: f64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPrediction {
    pub domain: String,
    pub probability: f64,
    pub description: String,
    pub top_roles: Vec<String>,
}

/// Shared by skill-gap importance and roadmap goal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub importance: Priority,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub top_contributing_factors: Vec<ContributingFactor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    pub factor: String,
    pub impact: Impact,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub short_term: Vec<RoadmapGoal>,
    pub mid_term: Vec<RoadmapGoal>,
    pub long_term: Vec<RoadmapGoal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapGoal {
    pub goal: String,
    pub duration: String,
    pub priority: Priority,
}

//! Fixed illustrative analysis served by `StaticAnalysisProvider`.

use crate::analysis::models::{
    AnalysisResult, CareerPrediction, ContributingFactor, Education, Experience,
    ExperienceLevel, Explanation, Impact, Priority, Roadmap, RoadmapGoal, Skill, SkillCategory,
    SkillGap,
};

fn skill(name: &str, category: SkillCategory, proficiency: f64) -> Skill {
    Skill {
        name: name.to_string(),
        category,
        proficiency,
    }
}

fn goal(goal: &str, duration: &str, priority: Priority) -> RoadmapGoal {
    RoadmapGoal {
        goal: goal.to_string(),
        duration: duration.to_string(),
        priority,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A mid-level backend engineer profile.
pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        skills: vec![
            skill("Java", SkillCategory::Technical, 85.0),
            skill("Spring Boot", SkillCategory::Technical, 80.0),
            skill("SQL", SkillCategory::Technical, 75.0),
            skill("REST API Design", SkillCategory::Technical, 78.0),
            skill("Docker", SkillCategory::Technical, 60.0),
            skill("Communication", SkillCategory::Soft, 70.0),
            skill("Problem Solving", SkillCategory::Soft, 82.0),
            skill("Teamwork", SkillCategory::Soft, 75.0),
        ],
        experience: Experience {
            level: ExperienceLevel::Mid,
            years: 4.0,
            summary: "Backend engineer building and maintaining Java microservices, \
                      relational data models and REST APIs for production systems."
                .to_string(),
        },
        education: Education {
            degree: "Bachelor of Technology".to_string(),
            field: "Computer Science".to_string(),
            institution: "State Institute of Technology".to_string(),
        },
        career_predictions: vec![
            CareerPrediction {
                domain: "Backend Engineering".to_string(),
                probability: 55.0,
                description: "Strong server-side Java and API experience maps directly \
                              to backend roles."
                    .to_string(),
                top_roles: strings(&[
                    "Senior Backend Engineer",
                    "Java Developer",
                    "API Engineer",
                ]),
            },
            CareerPrediction {
                domain: "Cloud & DevOps".to_string(),
                probability: 25.0,
                description: "Container experience is a foundation for platform and \
                              infrastructure work."
                    .to_string(),
                top_roles: strings(&["DevOps Engineer", "Platform Engineer"]),
            },
            CareerPrediction {
                domain: "Data Engineering".to_string(),
                probability: 20.0,
                description: "SQL and service design skills transfer to data pipeline \
                              development."
                    .to_string(),
                top_roles: strings(&["Data Engineer", "ETL Developer"]),
            },
        ],
        skill_gaps: vec![
            SkillGap {
                skill: "Kubernetes".to_string(),
                importance: Priority::High,
                reason: "Most backend teams deploy services on Kubernetes.".to_string(),
            },
            SkillGap {
                skill: "System Design".to_string(),
                importance: Priority::High,
                reason: "Required for senior-level interviews and ownership of services."
                    .to_string(),
            },
            SkillGap {
                skill: "Cloud Platforms (AWS/GCP)".to_string(),
                importance: Priority::Medium,
                reason: "Managed cloud services are common in modern backends.".to_string(),
            },
            SkillGap {
                skill: "Message Queues".to_string(),
                importance: Priority::Low,
                reason: "Useful for event-driven architectures.".to_string(),
            },
        ],
        readiness_score: 72.0,
        explanation: Explanation {
            summary: "Solid mid-level backend profile with production Java experience; \
                      cloud-native and design depth would unlock senior roles."
                .to_string(),
            strengths: strings(&[
                "Production experience with Java and Spring Boot",
                "Good grasp of relational databases",
                "Consistent delivery of REST APIs",
            ]),
            improvements: strings(&[
                "Gain hands-on Kubernetes experience",
                "Practice large-scale system design",
                "Earn a cloud certification",
            ]),
            top_contributing_factors: vec![
                ContributingFactor {
                    factor: "Years of backend experience".to_string(),
                    impact: Impact::Positive,
                    weight: 0.35,
                },
                ContributingFactor {
                    factor: "Core Java ecosystem proficiency".to_string(),
                    impact: Impact::Positive,
                    weight: 0.3,
                },
                ContributingFactor {
                    factor: "Limited cloud-native exposure".to_string(),
                    impact: Impact::Negative,
                    weight: 0.2,
                },
                ContributingFactor {
                    factor: "No system design ownership".to_string(),
                    impact: Impact::Negative,
                    weight: 0.15,
                },
            ],
        },
        roadmap: Roadmap {
            short_term: vec![
                goal("Complete a Kubernetes fundamentals course", "1 month", Priority::High),
                goal("Containerize an existing service end to end", "1 month", Priority::Medium),
            ],
            mid_term: vec![
                goal("Obtain an AWS associate certification", "3-4 months", Priority::High),
                goal("Lead the design of a new microservice", "6 months", Priority::Medium),
            ],
            long_term: vec![
                goal("Move into a senior backend engineer role", "1-2 years", Priority::High),
                goal("Mentor junior engineers", "2 years", Priority::Low),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(sample_analysis(), sample_analysis());
    }

    #[test]
    fn test_sample_probabilities_sum_to_100() {
        let total: f64 = sample_analysis()
            .career_predictions
            .iter()
            .map(|p| p.probability)
            .sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sample_scores_are_within_range() {
        let analysis = sample_analysis();
        assert!(analysis
            .skills
            .iter()
            .all(|s| (0.0..=100.0).contains(&s.proficiency)));
        assert!((0.0..=100.0).contains(&analysis.readiness_score));
    }
}

// Prompt constants for resume analysis.

/// Instruction block sent ahead of the resume text. Describes the exact JSON
/// document the model must return.
pub const ANALYSIS_PROMPT: &str = r#"
You are an expert career counselor and resume analyst.

Analyze the given resume text carefully and respond ONLY with valid JSON
in the exact schema below. Do not add explanations outside JSON.

Rules:
- Use resume content to determine skills, domain, scores
- Different resumes MUST produce different results
- Probabilities must sum to 100
- Be realistic (no exaggeration)

JSON schema:
{
  "skills": [
    {"name": "Skill", "category": "technical|soft", "proficiency": number}
  ],
  "experience": {
    "level": "fresher|junior|mid|senior",
    "years": number,
    "summary": "string"
  },
  "education": {
    "degree": "string",
    "field": "string",
    "institution": "string"
  },
  "careerPredictions": [
    {
      "domain": "string",
      "probability": number,
      "description": "string",
      "topRoles": ["string"]
    }
  ],
  "skillGaps": [
    {"skill": "string", "importance": "low|medium|high", "reason": "string"}
  ],
  "readinessScore": number,
  "explanation": {
    "summary": "string",
    "strengths": ["string"],
    "improvements": ["string"],
    "topContributingFactors": [
      {"factor": "string", "impact": "positive|negative", "weight": number}
    ]
  },
  "roadmap": {
    "shortTerm": [{"goal": "string", "duration": "string", "priority": "high|medium|low"}],
    "midTerm": [{"goal": "string", "duration": "string", "priority": "high|medium|low"}],
    "longTerm": [{"goal": "string", "duration": "string", "priority": "high|medium|low"}]
  }
}
"#;

/// Appends the resume text to the analysis instructions.
pub fn build_analysis_prompt(resume_text: &str) -> String {
    format!("{ANALYSIS_PROMPT}\n\nRESUME:\n{resume_text}")
}

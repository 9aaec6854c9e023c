// Resume analysis prompt template.
// The report is free text; nothing downstream parses these sections back out.

const ANALYSIS_PREAMBLE: &str =
    "You are an experienced HR professional. Analyze the resume and provide:";

/// Instructions always sent, in order. `true` marks items that only make
/// sense against a job description.
const ANALYSIS_ITEMS: [(&str, bool); 10] = [
    ("Strengths and weaknesses.", false),
    ("Missing key skills for the role.", false),
    ("Suggested certifications or courses with source links.", false),
    ("Alternative career paths.", false),
    ("ATS compatibility check.", false),
    ("ATS Score (x/100).", false),
    ("Job match percentage.", true),
    ("Job description match score (x/100).", true),
    ("Resume score (x/100).", false),
    ("Mock interview questions based on the given job description.", true),
];

/// Builds the analysis prompt. A blank job description counts as absent and
/// drops the job-specific items and the job description section.
pub fn compose_analysis_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let job_description = job_description.filter(|jd| !jd.trim().is_empty());

    let mut prompt = String::from(ANALYSIS_PREAMBLE);
    prompt.push('\n');

    let items = ANALYSIS_ITEMS
        .iter()
        .filter(|(_, needs_jd)| !needs_jd || job_description.is_some())
        .map(|(item, _)| item);
    for (n, item) in items.enumerate() {
        prompt.push_str(&format!("{}. {item}\n", n + 1));
    }

    prompt.push_str("Resume:\n");
    prompt.push_str(resume_text);
    prompt.push('\n');

    if let Some(jd) = job_description {
        prompt.push_str("Job Description:\n");
        prompt.push_str(jd);
        prompt.push('\n');
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\nSenior Rust Engineer, 6 years";

    #[test]
    fn test_prompt_is_deterministic() {
        let a = compose_analysis_prompt(RESUME, Some("Backend role, Rust + Postgres"));
        let b = compose_analysis_prompt(RESUME, Some("Backend role, Rust + Postgres"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_prompt_lists_ten_sections_in_order() {
        let prompt = compose_analysis_prompt(RESUME, Some("Backend role"));
        let positions: Vec<usize> = [
            "1. Strengths and weaknesses.",
            "2. Missing key skills",
            "3. Suggested certifications or courses with source links.",
            "4. Alternative career paths.",
            "5. ATS compatibility check.",
            "6. ATS Score (x/100).",
            "7. Job match percentage.",
            "8. Job description match score (x/100).",
            "9. Resume score (x/100).",
            "10. Mock interview questions",
        ]
        .iter()
        .map(|s| prompt.find(s).unwrap_or_else(|| panic!("missing {s}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.contains("Job Description:\nBackend role\n"));
        assert!(prompt.contains(&format!("Resume:\n{RESUME}\n")));
    }

    #[test]
    fn test_without_job_description_drops_job_specific_items() {
        let prompt = compose_analysis_prompt(RESUME, None);

        assert!(!prompt.contains("Job match percentage"));
        assert!(!prompt.contains("Job description match score"));
        assert!(!prompt.contains("Mock interview questions"));
        assert!(!prompt.contains("Job Description:"));
        assert!(prompt.contains("6. ATS Score (x/100).\n7. Resume score (x/100).\nResume:"));
    }

    #[test]
    fn test_blank_job_description_is_treated_as_absent() {
        assert_eq!(
            compose_analysis_prompt(RESUME, Some("  \n ")),
            compose_analysis_prompt(RESUME, None)
        );
    }
}

// Prompt template for the keyword-match analysis.

use crate::generation::markup::strip_markup;
use crate::llm_client::prompts::fill_template;

/// Analysis prompt template. Replace: {resume_text}, {job_description}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Input Tasks:
You have been assigned to evaluate a candidate's resume to assess alignment with a job description. Here's the breakdown of your tasks:

1. Review the provided resume against the job description.
2. Share a professional evaluation on whether the candidate's profile aligns with the role.
3. Extract and highlight essential skills and requirements from the job description.
4. Focus on keywords representing core responsibilities, qualifications, must-have, and desirable skills.
5. Analyze the resume content and compare it to the extracted keywords.
6. Calculate a percentage matching score indicating how well the applicant's skills align with the job requirements.

Output Task:
Please demonstrate professionalism and creativity in your findings.

Candidate Matching Score: percentage_match 0-100%
- Job Title:
- Resume Analysis:

Highlighted Keywords Table:
Organize extracted keywords from the job description and compare them with the resume in a table with columns:
| Category          | Job Keyword   | Missing Keyword | Resume Keyword | Percentage Match |
|-------------------|---------------|-----------------|----------------|------------------|
| Responsibilities  | keyword       | Missing Keyword | Resume Keyword | percentage_match |
| Qualifications    | keyword       | Missing Keyword | Resume Keyword | percentage_match |
| Must-Have Skills  | keyword       | Missing Keyword | Resume Keyword | percentage_match |
| Desirable Skills  | keyword       | Missing Keyword | Resume Keyword | percentage_match |
| Top Skills        | keyword       | Missing Keyword | Resume Keyword | percentage_match |

Missing Keywords:
Identify missing keywords from the job description:
- Missing Keyword 1
- Missing Keyword 2
- Missing Keyword 3

Educational Links:
For each missing keyword, provide relevant educational resources (websites or online courses) to help the candidate develop that skill:
Missing Keyword: Python Programming
- Resource 1: Link
- Resource 2: Link
- Resource 3: Link

Suggestions for Optimization:
Provide clear and precise suggestions for the candidate to optimize their resume to better match the job description and improve their chances of securing an interview.

Notes:
- Focus on identifying impactful keywords reflecting core responsibilities, qualifications, and must-have/desirable skills.
- Ensure accuracy in detecting missing keywords for comprehensive feedback.
- Format the table clearly and precisely for accurate presentation.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

/// Builds the analysis prompt. Markup is stripped from the resume first.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    let cleaned = strip_markup(resume_text);
    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[("resume_text", cleaned.as_str()), ("job_description", job_description)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_resume_then_job_description() {
        let prompt = build_analysis_prompt("*Jane* Doe", "Senior Go engineer");
        assert!(prompt.contains("RESUME:\nJane Doe\n\nJOB DESCRIPTION:\nSenior Go engineer"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_analysis_prompt_requests_report_schema() {
        let prompt = build_analysis_prompt("r", "j");
        for column in ["Category", "Job Keyword", "Missing Keyword", "Resume Keyword", "Percentage Match"] {
            assert!(prompt.contains(column), "{column}");
        }
        assert!(prompt.contains("Candidate Matching Score"));
        assert!(prompt.contains("Educational Links"));
        assert!(prompt.contains("Suggestions for Optimization"));
    }
}

// All LLM prompt templates for the rewrite chain.
// Placeholders are filled with llm_client::prompts::fill_template.

use crate::llm_client::prompts::fill_template;

/// Stage 1: rewrite experience entries using the keyword report.
/// Replace: {keyword_report}, {job_description}, {resume_text}
pub const REWRITE_DRAFT_PROMPT_TEMPLATE: &str = r#"Task:
Optimize the candidate's job experiences by incorporating the missing keywords identified in the KEYWORD REPORT below. Modify each job experience so it aligns with the job requirements and is more competitive.

Instructions:
- Review the job description to identify the key skills, responsibilities, and qualifications required for the role.
- Evaluate each job experience listed in the candidate's resume.
- Enhance every role on the resume by incorporating relevant missing keywords from the keyword report.
- Integrate keywords related to core responsibilities, qualifications, must-have skills, and desirable skills into each role.
- Integrate keywords naturally so the revised experience demonstrates a strong match with the job requirements.
- Use language that resonates with the job description.
- Use bullet points: a maximum of 4 bullet points per past experience.
- Follow the Resume Format sections: Contact Information, Education, Key Strengths, Skills, Experience.

KEYWORD REPORT:
{keyword_report}

JOB DESCRIPTION:
{job_description}

CANDIDATE RESUME:
{resume_text}"#;

/// Stage 2: reformat the stage-1 draft into the fixed resume layout.
/// Replace: {draft_resume}, {resume_text}
pub const REWRITE_FORMAT_PROMPT_TEMPLATE: &str = r#"Output:
Missing Keywords: identify the missing keywords from the job description:
- Missing Keyword 1
- Missing Keyword 2
- Missing Keyword 3

- Provide revised job experience descriptions for each role on the candidate's resume, enriched with appropriate keywords from the job description.
- Use a maximum of 4 bullet points per experience for readability and impact.

Note:
- Be creative and precise.
- Use the Resume Format below to produce the final resume.

Resume Format:
    - Contact Information:
    - Education:

    - Key Strengths:
        • use missing keywords to generate sentences
        •
        •

    - Skills:
        •
        •
        •

    - Experience:
    Position | Company | Date:
        • use missing keywords to generate sentences
        •
        •
        •
    Position | Company | Date:
        • use missing keywords to generate sentences
        •
        •
        •
    Position | Company | Date:
        • use missing keywords to generate sentences
        •
        •
        •

REVISED RESUME DRAFT:
{draft_resume}

ORIGINAL RESUME:
{resume_text}"#;

/// Builds the stage-1 prompt. `cleaned_resume` must already be markup-free.
pub fn build_draft_prompt(job_description: &str, keyword_report: &str, cleaned_resume: &str) -> String {
    fill_template(
        REWRITE_DRAFT_PROMPT_TEMPLATE,
        &[
            ("keyword_report", keyword_report),
            ("job_description", job_description),
            ("resume_text", cleaned_resume),
        ],
    )
}

/// Builds the stage-2 prompt from the stage-1 draft.
pub fn build_format_prompt(draft: &str, cleaned_resume: &str) -> String {
    fill_template(
        REWRITE_FORMAT_PROMPT_TEMPLATE,
        &[("draft_resume", draft), ("resume_text", cleaned_resume)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_prompt_embeds_all_inputs() {
        let prompt = build_draft_prompt("Need Kafka", "Missing: Kafka", "Jane Doe");
        assert!(prompt.contains("KEYWORD REPORT:\nMissing: Kafka"));
        assert!(prompt.contains("JOB DESCRIPTION:\nNeed Kafka"));
        assert!(prompt.ends_with("CANDIDATE RESUME:\nJane Doe"));
        assert!(prompt.contains("maximum of 4 bullet points"));
        assert!(!prompt.contains("{keyword_report}"));
    }

    #[test]
    fn test_format_prompt_embeds_draft_and_original() {
        let prompt = build_format_prompt("Draft body", "Original body");
        assert!(prompt.contains("REVISED RESUME DRAFT:\nDraft body"));
        assert!(prompt.ends_with("ORIGINAL RESUME:\nOriginal body"));
        for section in ["Contact Information:", "Education:", "Key Strengths:", "Skills:", "Experience:"] {
            assert!(prompt.contains(section), "{section}");
        }
    }
}

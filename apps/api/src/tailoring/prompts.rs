// Prompt text for the tailoring call.
// Whole-document and section-scoped rewrites use different system prompts.

use crate::tailoring::section::Section;

/// System prompt for a whole-document rewrite.
pub const TAILOR_ALL_SYSTEM: &str = "\
You are an expert resume writer with deep knowledge of various industries. \
Your job is to enhance resumes by making them highly relevant to job descriptions \
while keeping the candidate's real experience intact.

Instructions:
1. Analyze the resume and job description: identify key skills, technologies and expectations.
2. Match the job description to the candidate's experience: enhance points based on past projects that align with it.
3. Integrate job description points naturally, by modifying existing points or adding relevant ones.
4. When adding points, reference specific projects, technologies or achievements from the resume.
5. Keep the structure, number of pages and bullet points consistent. Never remove a section.
6. Use the language professionals in the industry would use for the same experience.
7. Do not duplicate points; refine existing descriptions instead.
8. Add quantifiable achievements wherever the resume supports them.";

/// System prompt for a single-section rewrite. Replace `{section}` before sending.
pub const TAILOR_SECTION_SYSTEM_TEMPLATE: &str = "\
You are an expert resume writer. Your job is to improve only the \"{section}\" section \
of this resume based on the job description while keeping the existing format.

Instructions for the {section} section:
1. Extract the skills and qualifications from the job description that are relevant to it.
2. Refine and enhance existing descriptions rather than only adding new points.
3. Any new addition must reference past projects that match the job description.
4. Keep the bullet point count the same or higher, never lower.
5. Keep bullet styles and spacing consistent.
6. Highlight quantifiable achievements whenever possible.
7. Return ONLY the body of the {section} section, without its heading.";

/// User prompt. Replace `{resume}`, `{job_description}`, `{instruction}` and `{format_note}`.
pub const TAILOR_PROMPT_TEMPLATE: &str = "\
Resume:
{resume}

Job Description:
{job_description}

Enhancement Instructions:
{instruction}
{format_note}";

const ALL_INSTRUCTION: &str = "Modify and optimize this resume to fully align with the job \
description while keeping the candidate's actual experience intact. Ensure all job description \
points are reflected through relevant project-based updates.";

const PRESERVE_FORMAT_NOTE: &str =
    "Ensure the formatting, structure, and page count remain unchanged.";

pub fn system_prompt(section: Section) -> String {
    match section.header() {
        None => TAILOR_ALL_SYSTEM.to_string(),
        Some(name) => TAILOR_SECTION_SYSTEM_TEMPLATE.replace("{section}", name),
    }
}

pub fn user_prompt(
    resume: &str,
    job_description: &str,
    section: Section,
    preserve_format: bool,
) -> String {
    let instruction = match section.header() {
        None => ALL_INSTRUCTION.to_string(),
        Some(name) => format!(
            "Only modify the \"{name}\" section. Keep other sections unchanged while making \
             the necessary updates based on the job description."
        ),
    };
    let format_note = if preserve_format {
        PRESERVE_FORMAT_NOTE
    } else {
        ""
    };

    TAILOR_PROMPT_TEMPLATE
        .replace("{instruction}", &instruction)
        .replace("{format_note}", format_note)
        .replace("{job_description}", job_description)
        .replace("{resume}", resume)
}

pub const WRITING_SUGGESTION_INSTRUCTION: &str =
    "Provide a concise writing suggestion to improve the following text:\n\n";

pub const REPORT_INSTRUCTION: &str =
    "Generate a professional report based on the following context:\n\n";

#[must_use]
pub fn writing_suggestion(prompt: &str) -> String {
    format!("{WRITING_SUGGESTION_INSTRUCTION}{prompt}")
}

#[must_use]
pub fn report(context: &str) -> String {
    format!("{REPORT_INSTRUCTION}{context}")
}

use crate::context::truncate_chars;

/// Characters of the requirements text embedded in the build prompt.
pub const SUMMARY_LIMIT: usize = 400;

/// Third stage: generate the complete single-file HTML application.
///
/// This stage does not use the shared agent template; the whole prompt is
/// rendered here, and the response is expected to be the document only.
pub fn prompt(request: &str, requirements: &str) -> String {
    format!(
        "Build a SIMPLE, COMPLETE app for: {request}\n\n\
         Keep it under 250 lines total!\n\n\
         Requirements summary: {}\n\n\
         CRITICAL INSTRUCTIONS:\n\
         1. Single HTML file with embedded CSS and JavaScript\n\
         2. Use addEventListener for ALL events (NO inline onclick)\n\
         3. Wrap ALL JS in DOMContentLoaded\n\
         4. Make it FULLY FUNCTIONAL\n\
         5. Clean, modern design\n\
         6. MUST be COMPLETE with all closing tags\n\
         7. Simple but working\n\n\
         Return ONLY the complete HTML code. No explanations.",
        truncate_chars(requirements, SUMMARY_LIMIT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_request_and_truncated_requirements() {
        let reqs = "q".repeat(500);
        let p = prompt("Countdown timer", &reqs);
        assert!(p.contains("Build a SIMPLE, COMPLETE app for: Countdown timer"));
        assert!(p.contains(&format!("Requirements summary: {}", &reqs[..400])));
        assert!(!p.contains(&reqs[..401]));
    }

    #[test]
    fn prompt_demands_document_only_output() {
        let p = prompt("x", "y");
        assert!(p.contains("Return ONLY the complete HTML code. No explanations."));
        assert!(p.contains("addEventListener"));
        assert!(p.contains("DOMContentLoaded"));
        assert!(p.contains("under 250 lines"));
    }
}

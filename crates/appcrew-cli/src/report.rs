use std::path::Path;

use appcrew_core::{BuildSession, StageOutputs};
use owo_colors::OwoColorize;

/// How many lines of the generated source the preview panel shows.
const PREVIEW_LINES: usize = 20;

fn panel(title: &str, body: &str) {
    println!();
    println!("{}", format!("── {title} ").bold().cyan());
    println!("{body}");
}

/// Print the four result panels and the document metrics.
pub fn print_session(session: &BuildSession, saved_to: Option<&Path>) {
    panel("Requirements", &session.requirements);
    panel("Architecture", &session.architecture);

    let preview: Vec<&str> = session.document.content.lines().take(PREVIEW_LINES).collect();
    let mut preview = preview.join("\n");
    if session.document.line_count() > PREVIEW_LINES {
        preview.push_str("\n…");
    }
    panel("Source preview", &preview);
    panel("QA report", &session.qa_report);

    println!();
    println!(
        "{}  {} lines, {} characters",
        "✓".green().bold(),
        session.document.line_count(),
        session.document.char_count()
    );
    match saved_to {
        Some(path) => println!(
            "{}  saved to {} — open it in your browser",
            "✓".green().bold(),
            path.display()
        ),
        None => println!("{}  not saved (--no-save)", "·".dimmed()),
    }
}

/// Print whatever panels a failed build still produced.
/// Partial outputs stay visible; no document is published as ready.
pub fn print_partial(partial: &StageOutputs) {
    if let Some(ref requirements) = partial.requirements {
        panel("Requirements", requirements);
    }
    if let Some(ref architecture) = partial.architecture {
        panel("Architecture", architecture);
    }
    if let Some(ref document) = partial.document {
        panel("Source preview (unpublished)", &document.content);
    }
    if let Some(ref qa_report) = partial.qa_report {
        panel("QA report", qa_report);
    }
}

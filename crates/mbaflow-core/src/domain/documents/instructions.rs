//! `01-planning/instructions.md`.

use crate::domain::entities::ProjectConfiguration;

use super::list::BulletList;

/// Render the assignment instructions document.
///
/// Values are substituted verbatim; nothing is escaped.
pub fn render_instructions(config: &ProjectConfiguration) -> String {
    let info = BulletList::new()
        .item(format!("**Assignment Number**: {}", config.assignment_number()))
        .item(format!("**Assignment Name**: {}", config.assignment_name()))
        .item(format!("**Assignment Type**: {}", config.assignment_type()))
        .item(format!("**Due Date**: {}", config.due_date()))
        .item(format!("**Page Count**: {}", config.page_count()))
        .item(format!("**Minimum Sources**: {}", config.min_sources()))
        .item(format!("**Frameworks Required**: {}", config.frameworks_text()));

    let deliverables = BulletList::new()
        .item(format!(
            "[ ] Complete {} using required frameworks",
            config.assignment_type().to_lowercase()
        ))
        .item("[ ] APA 7th Edition formatted paper")
        .item("[ ] Executive summary")
        .item("[ ] Supporting evidence and citations")
        .item(format!("[ ] Minimum {} credible sources", config.min_sources()));

    let submission = BulletList::new()
        .item(format!("**Due Date**: {}", config.due_date()))
        .item("**Format**: Academic paper")
        .item(format!("**Length**: {} pages", config.page_count()))
        .item("**Citation Style**: APA 7th Edition")
        .item(format!("**Type**: {}", config.assignment_type()));

    format!(
        "# Assignment Instructions\n\
         \n\
         ## Assignment Information\n\
         {info}\n\
         \n\
         ## Assignment Requirements\n\
         [Add specific assignment requirements here]\n\
         \n\
         ## Deliverables\n\
         {deliverables}\n\
         \n\
         ## Submission Details\n\
         {submission}\n",
        info = info.render(),
        deliverables = deliverables.render(),
        submission = submission.render(),
    )
}

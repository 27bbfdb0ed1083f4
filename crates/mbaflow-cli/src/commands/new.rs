//! Implementation of the `mbaflow new` command.
//!
//! Responsibility: run the interactive collector, hand the configuration to
//! the core materialize service, and report the result. No layout or
//! document logic lives here.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use mbaflow_adapters::{LocalFilesystem, ProcessEditor};
use mbaflow_core::{
    application::{EditorOutcome, MaterializeService, open_project},
    domain::{FsEntry, ProjectConfiguration, ProjectStructure, documents::NumberedList, layout},
};

use crate::{
    cli::NewArgs,
    collector::{self, Collected, Collection},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt::Prompter,
};

/// Execute the `mbaflow new` command.
///
/// Dispatch sequence:
/// 1. Greet and list candidate folders
/// 2. Collect answers (an empty name ends the run with exit 0)
/// 3. Early-exit with the planned layout if `--dry-run`
/// 4. Materialize via `MaterializeService`
/// 5. Report, optionally open the editor, print next steps
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: NewArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "failed to read current directory")?;
    let editor = ProcessEditor::new(
        args.editor
            .clone()
            .unwrap_or_else(|| config.editor.command.clone()),
    );

    // Prompts stay off stdout when it carries JSON.
    let prompt_out: Box<dyn Write> = if output.is_json() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompter = Prompter::new(io::stdin().lock(), prompt_out);

    greet(&mut prompter, &config)?;

    let filesystem = LocalFilesystem::new();
    let candidates = collector::candidate_directories(&cwd, &config.workspace, &filesystem);

    let Collected {
        config: project,
        open_in_editor,
    } = match collector::collect(&mut prompter, &cwd, &candidates, editor.program())? {
        Collection::Ready(collected) => collected,
        // In JSON mode this lands on stderr with the prompts.
        Collection::Aborted => {
            output.error("Assignment name is required!")?;
            return Ok(());
        }
    };

    let service = MaterializeService::new(Box::new(filesystem));

    if args.dry_run {
        let structure = service.plan(&project, &cwd)?;
        return if output.is_json() {
            output.json(&DryRunSummary::new(&structure))
        } else {
            show_plan(&structure, &output)
        };
    }

    info!(project = %project.project_dir_name(), "Materialize started");
    let root = service.materialize(&project, &cwd)?;
    info!(root = %root.display(), "Materialize completed");

    if output.is_json() {
        let outcome = open_in_editor.then(|| open_project(&editor, &root));
        return output.json(&ProjectSummary::new(&project, &root, outcome.as_ref()));
    }

    show_summary(&project, &root, &output)?;

    let opened = if open_in_editor {
        report_editor(open_project(&editor, &root), editor.program(), &output)?
    } else {
        false
    };

    show_next_steps(opened, &output)
}

// ── Console sections ──────────────────────────────────────────────────────────

fn greet<R: io::BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &AppConfig,
) -> CliResult<()> {
    prompter.say("\u{1f393} MBA Assignment Workflow Setup")?;
    prompter.say(&"=".repeat(40))?;
    prompter.say(&config.workspace.university_name)?;

    if config.workspace.courses_dir.is_none() {
        prompter.say("\u{26a0}\u{fe0f}  No MBA_COURSES_DIR configured in .env file")?;
        prompter.say("   Create .env file from .env.example for personalized setup")?;
        prompter.say("")?;
    }
    Ok(())
}

fn show_plan(structure: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would create {}",
        structure.root().display()
    ))?;
    for entry in structure.entries() {
        match entry {
            FsEntry::Directory(dir) => output.print(&format!("  {}/", dir.path))?,
            FsEntry::File(file) => {
                output.print(&format!("  {} ({} bytes)", file.path, file.size()))?
            }
        }
    }
    Ok(())
}

fn show_summary(project: &ProjectConfiguration, root: &Path, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success("Project created in MBA Assignment Workflow System:")?;
    output.field("\u{1f4c1}", "Location", &root.display().to_string())?;
    output.field("\u{1f4c1}", "Type", project.assignment_type())?;
    output.field("\u{1f4c1}", "Frameworks", &project.frameworks_text())?;
    output.field("\u{1f4c5}", "Due", project.due_date())?;

    if project.charts_required() {
        output.field("\u{1f4ca}", "Charts/graphs", "Enabled")?;
    }
    if project.tables_required() {
        output.field("\u{1f4cb}", "Data tables", "Enabled")?;
    }
    Ok(())
}

/// Returns whether the editor opened.
fn report_editor(outcome: EditorOutcome, program: &str, output: &OutputManager) -> CliResult<bool> {
    output.print("")?;
    output.info(&format!("Opening project in {program}..."))?;

    match outcome {
        EditorOutcome::Opened => {
            output.success(&format!("Project opened in {program}"))?;
            Ok(true)
        }
        EditorOutcome::Failed { manual_command, .. } => {
            output.warning(&format!("Could not open {program} automatically"))?;
            output.print(&format!("Manual command: {manual_command}"))?;
            Ok(false)
        }
    }
}

fn next_steps(opened: bool) -> NumberedList {
    NumberedList::new()
        .item_if(!opened, format!("Navigate to your {} folder", layout::CONTAINER_DIR))
        .item_if(!opened, "Open project folder in your editor")
        .item(format!("Edit {} with assignment details", layout::INSTRUCTIONS_FILE))
        .item(format!("Open {} for agent prompts", layout::WORKFLOW_FILE))
        .item("Run AGENT 1 in Claude Code")
}

fn show_next_steps(opened: bool, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("\u{1f4cb} Next steps:")?;
    output.print(&next_steps(opened).render())?;
    Ok(())
}

// ── JSON views ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ProjectSummary<'a> {
    location: &'a Path,
    project: &'a ProjectConfiguration,
    folders: Vec<&'static str>,
    files: [&'static str; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    editor: Option<EditorReport<'a>>,
}

impl<'a> ProjectSummary<'a> {
    fn new(
        project: &'a ProjectConfiguration,
        location: &'a Path,
        outcome: Option<&'a EditorOutcome>,
    ) -> Self {
        Self {
            location,
            project,
            folders: layout::folders(project),
            files: [layout::INSTRUCTIONS_FILE, layout::WORKFLOW_FILE],
            editor: outcome.map(EditorReport::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum EditorReport<'a> {
    Opened,
    Failed {
        reason: &'a str,
        manual_command: &'a str,
    },
}

impl<'a> From<&'a EditorOutcome> for EditorReport<'a> {
    fn from(outcome: &'a EditorOutcome) -> Self {
        match outcome {
            EditorOutcome::Opened => Self::Opened,
            EditorOutcome::Failed {
                reason,
                manual_command,
            } => Self::Failed {
                reason,
                manual_command,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct DryRunSummary<'a> {
    dry_run: bool,
    location: &'a Path,
    directories: Vec<String>,
    files: Vec<String>,
}

impl<'a> DryRunSummary<'a> {
    fn new(structure: &'a ProjectStructure) -> Self {
        Self {
            dry_run: true,
            location: structure.root(),
            directories: structure
                .directories()
                .map(|d| d.path.to_string())
                .collect(),
            files: structure.files().map(|f| f.path.to_string()).collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

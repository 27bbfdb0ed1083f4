//! Interactive collection of a [`ProjectConfiguration`].
//!
//! Asks the questions in a fixed order. Every answer except the assignment
//! name has a fallback; an empty name ends the run before anything is
//! written.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use mbaflow_adapters::LocalFilesystem;
use mbaflow_core::{
    domain::{Framework, MenuChoice, parse_flag, parse_framework_selection, parse_menu_choice},
    prelude::{Filesystem, MbaflowError, ProjectConfiguration},
};
use tracing::{debug, instrument};

use crate::{config::WorkspaceConfig, error::CliResult, prompt::Prompter};

/// Answers gathered from one session.
#[derive(Debug)]
pub struct Collected {
    pub config: ProjectConfiguration,
    pub open_in_editor: bool,
}

/// Outcome of the question sequence.
#[derive(Debug)]
pub enum Collection {
    Ready(Collected),
    /// The assignment name was left empty.
    Aborted,
}

/// Folders offered in the target-folder menu, in display order.
///
/// The current directory comes first, then the courses folder and its
/// visible subfolders (when it exists), then the default work folder when it
/// exists and is not already listed.
pub fn candidate_directories(
    cwd: &Path,
    workspace: &WorkspaceConfig,
    fs: &LocalFilesystem,
) -> Vec<PathBuf> {
    let mut dirs = vec![cwd.to_path_buf()];

    if let Some(courses) = workspace.courses_dir.as_deref().filter(|p| fs.is_dir(p)) {
        dirs.push(courses.to_path_buf());
        dirs.extend(fs.list_subdirectories(courses));
    }

    if let Some(work) = workspace.default_work_dir.as_deref() {
        if fs.is_dir(work) && !dirs.iter().any(|d| d == work) {
            dirs.push(work.to_path_buf());
        }
    }

    debug!(count = dirs.len(), "Candidate folders");
    dirs
}

/// Run every prompt and build the configuration.
#[instrument(skip_all)]
pub fn collect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cwd: &Path,
    candidates: &[PathBuf],
    editor: &str,
) -> CliResult<Collection> {
    let target_folder = choose_target_folder(prompter, cwd, candidates)?;
    debug!(target = %target_folder.display(), "Target folder chosen");

    let number = prompter.ask("Assignment number: ")?;
    let name = prompter.ask("Assignment name: ")?;
    if name.is_empty() {
        return Ok(Collection::Aborted);
    }
    let due_date = prompter.ask("Due date: ")?;
    let page_count = prompter.ask("Page count: ")?;
    let min_sources = prompter.ask("Min sources: ")?;
    let assignment_type = prompter.ask("Assignment type: ")?;

    let charts = parse_flag(&prompter.ask("Charts/graphs required? (y/n): ")?);
    let tables = parse_flag(&prompter.ask("Data tables required? (y/n): ")?);
    let open_in_editor = parse_flag(&prompter.ask(&format!("Open project in {editor}? (y/n): "))?);

    let frameworks = choose_frameworks(prompter)?;

    let config = ProjectConfiguration::builder()
        .assignment_number(number)
        .assignment_name(name)
        .due_date(due_date)
        .page_count(page_count)
        .min_sources(min_sources)
        .assignment_type(assignment_type)
        .charts_required(charts)
        .tables_required(tables)
        .frameworks(frameworks)
        .target_folder(target_folder)
        .build()
        .map_err(MbaflowError::from)?;

    Ok(Collection::Ready(Collected {
        config,
        open_in_editor,
    }))
}

fn choose_target_folder<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cwd: &Path,
    candidates: &[PathBuf],
) -> CliResult<PathBuf> {
    prompter.say("")?;
    prompter.say("Select existing folder:")?;

    if candidates.is_empty() {
        let answer = prompter.ask("Enter folder path (or press Enter for current directory): ")?;
        return Ok(path_or_cwd(answer, cwd));
    }

    for (i, dir) in candidates.iter().enumerate() {
        prompter.say(&format!("{}. {}", i + 1, dir.display()))?;
    }
    let custom = candidates.len() + 1;
    prompter.say(&format!("{custom}. Enter custom path"))?;

    prompter.say("")?;
    let answer = prompter.ask(&format!("Select folder (1-{custom}): "))?;
    Ok(match parse_menu_choice(&answer, candidates.len()) {
        MenuChoice::Listed(i) => candidates[i].clone(),
        MenuChoice::Custom => path_or_cwd(prompter.ask("Enter custom path: ")?, cwd),
        MenuChoice::Fallback => cwd.to_path_buf(),
    })
}

fn choose_frameworks<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> CliResult<Vec<Framework>> {
    prompter.say("")?;
    prompter.say("Available frameworks:")?;
    for framework in Framework::ALL {
        prompter.say(&format!("{}. {}", framework.menu_index(), framework))?;
    }
    prompter.say("")?;
    prompter.say("Select frameworks (enter numbers separated by commas, e.g., 1,2,3):")?;

    let selection = prompter.ask("Frameworks: ")?;
    Ok(parse_framework_selection(&selection))
}

fn path_or_cwd(answer: String, cwd: &Path) -> PathBuf {
    if answer.is_empty() {
        cwd.to_path_buf()
    } else {
        PathBuf::from(answer)
    }
}

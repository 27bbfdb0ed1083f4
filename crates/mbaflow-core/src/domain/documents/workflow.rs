//! `01-planning/CLAUDE.md`: the six-stage agent workflow.
//!
//! The document is a fixed header, a sequence of [`Stage`]s, and two static
//! appendices. Only the framework list and the Writing Coordinator's
//! visual-material items depend on the configuration.

use crate::domain::{entities::ProjectConfiguration, value_objects::Framework};

use super::list::{BulletList, NumberedList};

const STAGE_SEPARATOR: &str = "\n\n---\n\n";

/// One agent in the sequential workflow.
#[derive(Debug, Clone)]
pub struct Stage {
    pub title: &'static str,
    pub role: &'static str,
    pub instructions: &'static str,
    pub prerequisites: Option<&'static str>,
    /// Comma-joined frameworks, when the stage names them.
    pub frameworks: Option<FrameworkLine>,
    pub tasks: NumberedList,
    pub important: Option<&'static str>,
    pub outputs: BulletList,
    pub completion: &'static str,
}

/// How a stage presents the selected frameworks.
#[derive(Debug, Clone)]
pub enum FrameworkLine {
    /// `**Required Frameworks**: a, b` on one line.
    Inline(String),
    /// Labelled heading with the list on the following line.
    Assignment(String),
}

impl FrameworkLine {
    fn render(&self) -> String {
        match self {
            Self::Inline(fw) => format!("**Required Frameworks**: {fw}\n\n"),
            Self::Assignment(fw) => {
                format!("**Required Frameworks for this assignment**:\n{fw}\n\n")
            }
        }
    }
}

impl Stage {
    /// Render the stage under `## AGENT {number}: {title}`.
    pub fn render(&self, number: usize) -> String {
        let mut out = format!(
            "## AGENT {number}: {}\n\n**Role**: {}\n\n**Instructions**:\n{}\n\n",
            self.title, self.role, self.instructions
        );
        if let Some(pre) = self.prerequisites {
            out.push_str(&format!("**Prerequisites**: {pre}\n\n"));
        }
        if let Some(fw) = &self.frameworks {
            out.push_str(&fw.render());
        }
        out.push_str(&format!("**Tasks**:\n{}\n\n", self.tasks.render()));
        if let Some(note) = self.important {
            out.push_str(&format!("**IMPORTANT**: {note}\n\n"));
        }
        out.push_str(&format!(
            "**Output Files**:\n{}\n\n**Completion Signal**: \"{}\"",
            self.outputs.render(),
            self.completion
        ));
        out
    }
}

/// Render the complete agent-workflow document.
pub fn render_agent_workflow(config: &ProjectConfiguration) -> String {
    let frameworks = config.frameworks_text();
    let stages = stages(config);

    let body = stages
        .iter()
        .enumerate()
        .map(|(i, stage)| stage.render(i + 1))
        .collect::<Vec<_>>()
        .join(STAGE_SEPARATOR);

    format!(
        "# MBA Assignment Agent Workflow\n\
         \n\
         ## Project Configuration\n\
         - **Required Frameworks**: {frameworks}\n\
         - **Output Standard**: MBA-level academic writing with APA 7th Edition\n\
         - **Workflow**: Sequential {count}-agent process\
         {STAGE_SEPARATOR}\
         {body}\
         {STAGE_SEPARATOR}\
         {usage}\n\
         \n\
         {definitions}",
        count = stages.len(),
        usage = usage_instructions(),
        definitions = framework_definitions(),
    )
}

/// The six stages, in execution order.
pub fn stages(config: &ProjectConfiguration) -> Vec<Stage> {
    let frameworks = config.frameworks_text();

    vec![
        Stage {
            title: "Research Director",
            role: "Strategic research planning and framework mapping",
            instructions: "You are the Research Director for this MBA assignment. Your role is \
                to create a comprehensive research strategy that maps the required frameworks \
                to specific evidence needs.",
            prerequisites: None,
            frameworks: Some(FrameworkLine::Assignment(frameworks.clone())),
            tasks: NumberedList::new()
                .item("Read the assignment instructions in `01-planning/instructions.md` thoroughly")
                .item_with(
                    "For each required framework, identify:",
                    [
                        "Key theoretical components that need evidence",
                        "Types of data/information required",
                        "Specific questions the framework should answer",
                    ],
                )
                .item_with(
                    "Create a source collection strategy specifying:",
                    [
                        "Academic sources needed (peer-reviewed papers, case studies)",
                        "Industry sources needed (reports, company documents)",
                        "Minimum number of sources per category",
                    ],
                )
                .item_with(
                    "Generate automated search links for:",
                    [
                        "Google Scholar searches with specific queries",
                        "Industry database searches",
                        "Company report repositories",
                        "Academic database searches",
                        "Backup Google search links for industry sources (fallback options)",
                    ],
                )
                .item_with(
                    "Create comprehensive planning summary for user review covering:",
                    [
                        "Assignment interpretation and understanding",
                        "Framework application approach",
                        "Research strategy and rationale",
                        "Expected outcomes and deliverables",
                    ],
                )
                .item("Generate clear guidance for subsequent agents"),
            important: None,
            outputs: BulletList::new()
                .item("`01-planning/research-strategy.md` - Comprehensive approach summary for USER REVIEW")
                .item("`02-sources/search-links.md` - Ready-to-click search URLs for automatic source discovery"),
            completion: "Research Director Complete. REVIEW research-strategy.md and approve \
                before collecting sources. Then run AGENT 2.",
        },
        Stage {
            title: "Academic Scout",
            role: "Source analysis and template creation",
            instructions: "You are the Academic Scout. Your role is to analyze collected sources \
                and create structured templates for evidence extraction.",
            prerequisites: Some(
                "User has reviewed and approved `01-planning/research-strategy.md`",
            ),
            frameworks: None,
            tasks: NumberedList::new()
                .item("Use LS tool to scan `02-sources/academic/files/` for academic PDFs")
                .item("Use LS tool to scan `02-sources/industry/files/` for industry reports")
                .item("For each source found, create analysis templates based on filename analysis")
                .item("Generate overall source quality assessment"),
            important: Some(
                "Do NOT attempt to read PDF files directly. Use filename information only to \
                 create templates.",
            ),
            outputs: BulletList::new()
                .item("Analysis templates in `02-sources/*/analysis/` folders")
                .item("`02-sources/source-inventory.md` - Overall quality assessment"),
            completion: "Academic Scout Complete. Run AGENT 3 to extract evidence.",
        },
        Stage {
            title: "Research Analyst",
            role: "Evidence extraction and synthesis",
            instructions: "You are the Research Analyst. Your role is to systematically extract \
                evidence from all sources and organize it for framework application.",
            prerequisites: None,
            frameworks: Some(FrameworkLine::Inline(frameworks.clone())),
            tasks: NumberedList::new()
                .item("Use Read tool to analyze ALL PDFs/documents in `02-sources/*/files/` folders")
                .item("For each source, create detailed analysis in `02-sources/*/analysis/` folders")
                .item("Extract evidence relevant to each required framework")
                .item("Generate research synthesis integrating all findings"),
            important: Some(
                "Use the Read tool for PDF files - it can handle binary files including PDFs.",
            ),
            outputs: BulletList::new()
                .item("Individual source analyses in `02-sources/*/analysis/` folders")
                .item("`03-frameworks/evidence-synthesis.md` - Integrated research findings"),
            completion: "Research Analyst Complete. Run AGENT 4 for framework analysis.",
        },
        Stage {
            title: "Framework Specialist",
            role: "Strategic framework application",
            instructions: "You are the Framework Specialist. Your role is to apply each required \
                framework systematically using the extracted evidence.",
            prerequisites: None,
            frameworks: Some(FrameworkLine::Inline(frameworks)),
            tasks: NumberedList::new()
                .item_with(
                    "For each framework, create comprehensive analysis:",
                    [
                        "Apply framework methodology correctly",
                        "Use extracted evidence to support all components",
                        "Generate framework-specific insights and conclusions",
                    ],
                )
                .item("Create individual framework analysis files")
                .item("Synthesize insights across all frameworks")
                .item("Develop integrated strategic recommendations"),
            important: None,
            outputs: BulletList::new()
                .item("Individual framework files in `03-frameworks/individual/`")
                .item("`03-frameworks/synthesis.md` - Integrated strategic analysis"),
            completion: "Framework Specialist Complete. Run AGENT 5 for writing.",
        },
        Stage {
            title: "Writing Coordinator",
            role: "Academic writing and document creation",
            instructions: "You are the Writing Coordinator. Your role is to create the complete \
                academic draft integrating all framework analyses.",
            prerequisites: None,
            frameworks: None,
            tasks: writing_tasks(config),
            important: None,
            outputs: writing_outputs(config),
            completion: "Writing Coordinator Complete. Run AGENT 6 for final review.",
        },
        Stage {
            title: "Quality Controller",
            role: "Final review and submission preparation",
            instructions: "You are the Quality Controller. Your role is to ensure the assignment \
                meets all academic standards and requirements.",
            prerequisites: None,
            frameworks: None,
            tasks: NumberedList::new()
                .item_with(
                    "Comprehensive quality review:",
                    [
                        "Verify all framework applications are complete and accurate",
                        "Check APA citation compliance throughout",
                        "Assess academic writing standards",
                        "Ensure assignment requirements are fully addressed",
                    ],
                )
                .item("Create final submission package")
                .item("Generate quality assurance documentation"),
            important: None,
            outputs: BulletList::new()
                .item("`05-final/submission.md` - Final submission-ready assignment"),
            completion: "Quality Controller Complete. Assignment ready in 05-final/submission.md",
        },
    ]
}

/// Writing Coordinator tasks, with visual-material items appended when
/// the configuration asks for them.
pub fn writing_tasks(config: &ProjectConfiguration) -> NumberedList {
    NumberedList::new()
        .item("Create detailed section-by-section outline")
        .item_with(
            "Write complete first draft with:",
            [
                "Professional academic tone",
                "Clear integration of all framework analyses",
                "Proper APA 7th Edition citations throughout",
                "Logical flow and strong arguments",
            ],
        )
        .item("Generate comprehensive reference list")
        .item("Create executive summary")
        .item_if(
            config.charts_required(),
            "Create charts/graphs in `04-writing/visuals/`",
        )
        .item_if(
            config.tables_required(),
            "Create data tables in `04-writing/visuals/`",
        )
}

/// Writing Coordinator output files.
pub fn writing_outputs(config: &ProjectConfiguration) -> BulletList {
    BulletList::new()
        .item("`04-writing/draft.md` - Complete assignment")
        .item("`04-writing/references.md` - APA citations")
        .item("`04-writing/presentation.md` - Executive summary")
        .item_if(
            config.needs_visuals(),
            "Visual materials in `04-writing/visuals/`",
        )
}

fn usage_instructions() -> String {
    let steps = NumberedList::new()
        .item("**Copy each agent prompt** sequentially to Claude Code")
        .item("**Wait for completion message** before proceeding to next agent")
        .item_with(
            "**Collect sources** between Agent 1 and Agent 2:",
            [
                "Place academic PDFs in `02-sources/academic/files/`",
                "Place industry reports in `02-sources/industry/files/`",
            ],
        )
        .item("**Final assignment** will be in `05-final/submission.md`");

    format!("## Usage Instructions\n\n{}", steps.render())
}

/// Appendix describing every known framework, selected or not.
pub fn framework_definitions() -> String {
    let mut out = String::from("## Framework Definitions\n");
    for fw in Framework::ALL {
        out.push_str(&format!("\n### {}\n{}\n", fw.as_str(), fw.definition()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(charts: bool, tables: bool) -> ProjectConfiguration {
        ProjectConfiguration::builder()
            .assignment_name("Apple")
            .frameworks([Framework::Swot, Framework::McKinsey7S])
            .charts_required(charts)
            .tables_required(tables)
            .build()
            .unwrap()
    }

    #[test]
    fn six_stages_in_order() {
        let titles: Vec<_> = stages(&config(false, false))
            .iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            [
                "Research Director",
                "Academic Scout",
                "Research Analyst",
                "Framework Specialist",
                "Writing Coordinator",
                "Quality Controller",
            ]
        );
    }

    #[test]
    fn stage_headings_are_numbered_by_position() {
        let doc = render_agent_workflow(&config(false, false));
        for (n, title) in [(1, "Research Director"), (6, "Quality Controller")] {
            assert!(doc.contains(&format!("## AGENT {n}: {title}\n")));
        }
        assert!(doc.contains("- **Workflow**: Sequential 6-agent process"));
    }

    #[test]
    fn frameworks_are_referenced_verbatim() {
        let doc = render_agent_workflow(&config(false, false));
        // header + two stages that name the frameworks inline
        assert_eq!(
            doc.matches("**Required Frameworks**: SWOT Analysis, McKinsey 7S")
                .count(),
            3
        );
    }

    #[test]
    fn research_director_lists_frameworks_below_label() {
        let doc = render_agent_workflow(&config(false, false));
        assert!(doc.contains(
            "**Required Frameworks for this assignment**:\nSWOT Analysis, McKinsey 7S\n\n**Tasks**:"
        ));
    }

    #[test]
    fn no_visual_items_without_flags() {
        let doc = render_agent_workflow(&config(false, false));
        assert!(!doc.contains("Create charts/graphs"));
        assert!(!doc.contains("Create data tables"));
        assert!(!doc.contains("Visual materials in"));
    }

    #[test]
    fn charts_only_is_item_five() {
        let doc = render_agent_workflow(&config(true, false));
        assert!(doc.contains("\n5. Create charts/graphs in `04-writing/visuals/`"));
        assert!(!doc.contains("Create data tables"));
        assert!(doc.contains("- Visual materials in `04-writing/visuals/`"));
    }

    #[test]
    fn tables_only_is_item_five() {
        let doc = render_agent_workflow(&config(false, true));
        assert!(doc.contains("\n5. Create data tables in `04-writing/visuals/`"));
        assert!(!doc.contains("Create charts/graphs"));
        assert!(doc.contains("- Visual materials in `04-writing/visuals/`"));
    }

    #[test]
    fn both_flags_number_charts_then_tables() {
        let doc = render_agent_workflow(&config(true, true));
        assert!(doc.contains(
            "\n5. Create charts/graphs in `04-writing/visuals/`\n\
             6. Create data tables in `04-writing/visuals/`"
        ));
    }

    #[test]
    fn writing_tasks_grow_with_flags() {
        assert_eq!(writing_tasks(&config(false, false)).len(), 4);
        assert_eq!(writing_tasks(&config(true, false)).len(), 5);
        assert_eq!(writing_tasks(&config(true, true)).len(), 6);
    }

    #[test]
    fn appendix_lists_all_frameworks() {
        let appendix = framework_definitions();
        for fw in Framework::ALL {
            assert!(appendix.contains(&format!("### {}\n", fw.as_str())));
        }
    }

    #[test]
    fn document_sections_are_separated() {
        let doc = render_agent_workflow(&config(false, false));
        assert!(doc.starts_with("# MBA Assignment Agent Workflow\n"));
        assert!(doc.contains("\n---\n\n## AGENT 1: Research Director"));
        assert!(doc.contains("\n---\n\n## Usage Instructions"));
        assert!(doc.ends_with("Skills.\n"));
    }
}

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use libgqlslice::file_reader;
use libgqlslice::selection_text::ObjectRegistry;
use libgqlslice::selection_text::SelectionTree;
use libgqlslice::selection_text::parse_selection_text;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SelectionCmd {
    #[arg(
        help="Print the selection trees as JSON instead of indented text.",
        long,
    )]
    json: bool,

    #[arg(
        help="File containing selection text, optionally wrapped in a query \
             or mutation.",
        name="FILE",
    )]
    file_path: PathBuf,
}
impl SelectionCmd {
    fn render(&self) -> anyhow::Result<String> {
        let content = file_reader::read_content(self.file_path.as_path())
            .with_context(|| format!("Failed to read {:#?}", self.file_path))?;

        let mut registry = ObjectRegistry::new();
        let roots = parse_selection_text(&mut registry, content.as_str());
        let trees: Vec<SelectionTree> = roots.into_iter()
            .filter_map(|root| SelectionTree::from_registry(&registry, root))
            .collect();
        log::info!(
            "{} Read {} top-level blocks ({} distinct named blocks).",
            output_utils::GREEN_CHECK,
            trees.len(),
            registry.named().count(),
        );

        if self.json {
            return serde_json::to_string_pretty(&trees)
                .context("Failed to serialize selection trees");
        }
        Ok(trees.iter()
            .map(SelectionTree::to_string)
            .collect::<Vec<_>>()
            .join(""))
    }
}

#[inherent::inherent]
impl RunnableCommand for SelectionCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.render() {
            Ok(rendered) => CommandResult::stdout(format_args!("{}", rendered.trim_end())),
            Err(err) => CommandResult::error(err),
        }
    }
}

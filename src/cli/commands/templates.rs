//! `templates`: print the server's template catalog.

use gamesmith_core::{TemplateCatalog, Transport};
use gamesmith_domain::TemplateSummary;

use crate::cli::commands::CliContext;
use crate::cli::error::CommandError;
use crate::cli::output;

pub fn run_command(ctx: &CliContext) -> Result<(), CommandError> {
    let mut transport = ctx.transport()?;
    let rows = list_rows(&mut transport)?;
    if rows.is_empty() {
        output::info("No templates yet.");
        return Ok(());
    }
    output::section("Templates");
    for row in rows {
        println!("{row}");
    }
    Ok(())
}

/// Catalog entries formatted as aligned `id  title  genre` lines.
pub fn list_rows<T>(transport: &mut T) -> Result<Vec<String>, CommandError>
where
    T: Transport + ?Sized,
{
    let templates = TemplateCatalog::list(transport)?;
    Ok(format_rows(&templates))
}

fn format_rows(templates: &[TemplateSummary]) -> Vec<String> {
    let id_width = templates
        .iter()
        .map(|template| template.id.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let title_width = templates
        .iter()
        .map(|template| template.title.chars().count())
        .max()
        .unwrap_or(0);

    templates
        .iter()
        .map(|template| {
            let line = format!(
                "{:<id_width$}  {:<title_width$}  {}",
                template.id.as_str(),
                template.title,
                template.genre.as_deref().unwrap_or("-"),
            );
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use gamesmith_domain::TemplateId;
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn rows_are_aligned() {
        let templates = vec![
            TemplateSummary {
                id: TemplateId::new("7"),
                title: "World Capitals".into(),
                genre: Some("QUIZ".into()),
            },
            TemplateSummary {
                id: TemplateId::new("12"),
                title: "Dungeon".into(),
                genre: None,
            },
        ];
        assert_snapshot!(format_rows(&templates).join("\n"), @r"
        7   World Capitals  QUIZ
        12  Dungeon         -
        ");
    }
}

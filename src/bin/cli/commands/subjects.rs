use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let mut rows = Vec::new();
    for subject in &app.config.subjects {
        let count = app.store.count_problems(&subject.name, subject.chapters)?;
        rows.push((subject.name.clone(), subject.chapters, count));
    }

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|(name, chapters, count)| {
                    serde_json::json!({
                        "name": name,
                        "chapters": chapters,
                        "problems": count,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if rows.is_empty() {
                println!("No subjects configured. Run `gnosis init` first.");
                return Ok(());
            }

            let name_width = rows.iter().map(|(n, _, _)| n.len()).max().unwrap_or(7).max(7);

            println!("{:<width$} Chapters Problems", "Subject", width = name_width + 1);
            println!(
                "{} {} {}",
                "\u{2500}".repeat(name_width + 1),
                "\u{2500}".repeat(8),
                "\u{2500}".repeat(8)
            );

            for (name, chapters, count) in &rows {
                println!(
                    "{:<width$} {:>8} {:>8}",
                    name,
                    chapters,
                    count,
                    width = name_width + 1
                );
            }
        }
    }

    Ok(())
}

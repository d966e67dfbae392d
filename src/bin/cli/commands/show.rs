use anyhow::{bail, Result};

use gnosis::problems::grade_for;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    subject_name: &str,
    chapter: u32,
    number: u32,
    format: &OutputFormat,
) -> Result<()> {
    let subject = app.find_subject(subject_name)?;

    let records = app.store.scan_chapter(&subject.name, chapter)?;
    let Some(record) = records.get(&number) else {
        bail!(
            "{} chapter {} problem {} not found",
            subject.name,
            chapter,
            number
        );
    };

    let understanding = record.average_understanding();
    let grade = grade_for(record.review_count, understanding);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "record": record,
                "averageUnderstanding": understanding,
                "grade": grade,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}. {}", record.number, record.title);
            println!(
                "{} chapter {} | difficulty {}/5",
                record.subject, record.chapter, record.difficulty
            );
            println!(
                "Grade: {} {} ({})",
                grade.emoji(),
                grade.letter(),
                grade.display_name()
            );
            println!("Reviews: {}", record.review_count);
            println!(
                "Understanding: {}% average over {} entries",
                understanding,
                record.understanding_scores.len()
            );
            if !record.times.is_empty() {
                println!("Times: {}", record.times.join(", "));
            }
            if let Some(created) = record.created {
                println!("Created: {}", created);
            }
        }
    }

    Ok(())
}

use anyhow::Result;

use gnosis::problems::Grade;
use gnosis::progress::ProgressTracker;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, subject_name: &str, format: &OutputFormat) -> Result<()> {
    let subject = app.find_subject(subject_name)?;
    let tracker = ProgressTracker::new(&app.store, &app.config);
    let overview = tracker.subject_overview(&subject)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        OutputFormat::Plain => {
            println!(
                "{}: {} problems across {} chapters, {} mastered\n",
                overview.subject,
                overview.total_problems,
                overview.chapters.len(),
                overview.mastered
            );

            println!("Chapter  Filled  S  A  B  C  D  E  F  Avg%");
            println!("{}", "\u{2500}".repeat(44));
            for summary in &overview.chapters {
                println!(
                    "{:>7}  {:>3}/{:<3} {:>2} {:>2} {:>2} {:>2} {:>2} {:>2} {:>2} {:>4}",
                    summary.chapter,
                    summary.occupied,
                    summary.capacity,
                    summary.histogram.s,
                    summary.histogram.a,
                    summary.histogram.b,
                    summary.histogram.c,
                    summary.histogram.d,
                    summary.histogram.e,
                    summary.histogram.f,
                    summary.average_understanding,
                );
            }

            println!();
            for grade in Grade::DESCENDING {
                let count = overview.histogram.count(grade);
                if count > 0 {
                    println!(
                        "{} {} {}: {}",
                        grade.letter(),
                        grade.emoji(),
                        grade.display_name(),
                        count
                    );
                }
            }
        }
    }

    Ok(())
}

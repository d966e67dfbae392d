use anyhow::Result;

use crate::app::App;

pub fn run(
    app: &App,
    subject_name: &str,
    chapter: u32,
    number: u32,
    score: u32,
    time: Option<&str>,
) -> Result<()> {
    let subject = app.find_subject(subject_name)?;
    app.store
        .record_understanding(&subject.name, chapter, number, score, time)?;

    match time {
        Some(time) => println!(
            "Recorded understanding {}% and time {} for {} chapter {} problem {}",
            score, time, subject.name, chapter, number
        ),
        None => println!(
            "Recorded understanding {}% for {} chapter {} problem {}",
            score, subject.name, chapter, number
        ),
    }
    Ok(())
}

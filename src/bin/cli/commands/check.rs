use anyhow::Result;

use gnosis::markdown::REVIEW_STEPS;

use crate::app::App;

pub fn run(app: &App, subject_name: &str, chapter: u32, number: u32) -> Result<()> {
    let subject = app.find_subject(subject_name)?;
    let count = app.store.check_review(&subject.name, chapter, number)?;

    println!(
        "{} chapter {} problem {}: review {}/{} checked",
        subject.name, chapter, number, count, REVIEW_STEPS
    );
    Ok(())
}

use anyhow::{bail, Result};

use crate::app::App;

pub fn run(app: &App, subject_name: &str, chapter: u32, start: u32, end: u32) -> Result<()> {
    if start == 0 || end < start {
        bail!("Invalid slot range {}-{}", start, end);
    }

    let subject = app.find_subject(subject_name)?;
    let outcome = app.store.bulk_create(&subject.name, chapter, start, end)?;

    println!(
        "{} chapter {}: {} created, {} skipped",
        subject.name, chapter, outcome.created, outcome.skipped
    );
    Ok(())
}

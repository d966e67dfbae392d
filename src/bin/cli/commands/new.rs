use anyhow::Result;

use gnosis::problems::NewProblem;

use crate::app::App;

pub fn run(
    app: &App,
    subject_name: &str,
    chapter: u32,
    number: u32,
    title: Option<&str>,
    difficulty: u8,
) -> Result<()> {
    let subject = app.find_subject(subject_name)?;

    let fallback = format!("Problem {}", number);
    let title = title.unwrap_or(&fallback);

    let new = NewProblem::new(&subject.name, chapter, number, title)
        .with_difficulty(difficulty);
    let path = app.store.create_problem(&new)?;

    println!(
        "Created {} chapter {} problem {}: {:?}",
        subject.name, chapter, number, path
    );
    Ok(())
}

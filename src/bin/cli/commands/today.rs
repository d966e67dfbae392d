use anyhow::Result;
use chrono::Local;

use gnosis::progress::ProgressTracker;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let tracker = ProgressTracker::new(&app.store, &app.config);
    let progress = tracker.today_progress(Local::now().date_naive())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        OutputFormat::Plain => {
            let goal = if progress.goal_met {
                "goal met"
            } else {
                "goal not met"
            };
            println!(
                "{}: {}/{} problems added ({})",
                progress.date, progress.created_today, progress.daily_goal, goal
            );

            match progress.days_until_target {
                Some(days) if days >= 0 => println!("D-{} until the target date", days),
                Some(days) => println!("Target date passed {} day(s) ago", -days),
                None => {}
            }
        }
    }

    Ok(())
}

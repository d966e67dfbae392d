use anyhow::Result;

use gnosis::problems::{ChapterGrid, Grade, SlotState};

use crate::app::App;
use crate::OutputFormat;

/// Cells per row in the plain-text grid.
const ROW_WIDTH: u32 = 10;

pub fn run(
    app: &App,
    subject_name: &str,
    chapter: u32,
    capacity: Option<u32>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let subject = app.find_subject(subject_name)?;
    let capacity = app.capacity(capacity);

    let records = app.store.scan_chapter(&subject.name, chapter)?;
    let grid = ChapterGrid::build(&subject.name, chapter, &records, capacity);

    if grid.beyond_capacity > 0 {
        eprintln!(
            "warning: {} problem(s) numbered beyond capacity {} are not shown",
            grid.beyond_capacity, capacity
        );
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} chapter {} ({} / {} slots filled)\n",
                grid.subject,
                grid.chapter,
                grid.histogram.occupied(),
                grid.capacity
            );

            for row in grid.slots.chunks(ROW_WIDTH as usize) {
                let mut line = String::new();
                for slot in row {
                    let mark = match slot.state {
                        SlotState::Occupied { grade, .. } => colored_letter(grade, use_color),
                        SlotState::Empty => "\u{00B7}".to_string(),
                    };
                    line.push_str(&format!("{:>4} {}  ", slot.number, mark));
                }
                println!("{}", line.trim_end());
            }

            println!();
            for grade in Grade::DESCENDING {
                println!(
                    "{} {} {:<10} {:>4}",
                    grade.letter(),
                    grade.emoji(),
                    grade.display_name(),
                    grid.histogram.count(grade)
                );
            }
            println!("{:<15} {:>4}", "Empty", grid.histogram.empty);
        }
    }

    Ok(())
}

fn colored_letter(grade: Grade, use_color: bool) -> String {
    if !use_color {
        return grade.letter().to_string();
    }
    let code = match grade {
        Grade::S => "35;1", // magenta
        Grade::A => "33;1", // yellow
        Grade::B => "31;1", // red
        Grade::C => "36",   // cyan
        Grade::D => "32",   // green
        Grade::E => "34",   // blue
        Grade::F => "90",   // dim gray
    };
    format!("\u{1b}[{}m{}\u{1b}[0m", code, grade.letter())
}

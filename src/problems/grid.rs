//! Chapter grid aggregation
//!
//! A chapter is displayed as a fixed-capacity grid of numbered slots. The
//! grid is a pure projection of a scan result: slot `i` is occupied when a
//! record with `number == i` exists, empty otherwise. Occupied and empty
//! slots always partition the full capacity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::algorithm::{grade_for, Grade};
use super::models::ProblemRecord;

/// State of one grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SlotState {
    Occupied {
        grade: Grade,
        review_count: u32,
        understanding: u32,
    },
    Empty,
}

/// One slot in the chapter grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSlot {
    pub number: u32,
    #[serde(flatten)]
    pub state: SlotState,
}

impl GridSlot {
    pub fn is_occupied(&self) -> bool {
        matches!(self.state, SlotState::Occupied { .. })
    }
}

/// Occupied-slot counts per grade plus the empty count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeHistogram {
    pub s: u32,
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub empty: u32,
}

impl GradeHistogram {
    fn bump(&mut self, grade: Grade) {
        match grade {
            Grade::S => self.s += 1,
            Grade::A => self.a += 1,
            Grade::B => self.b += 1,
            Grade::C => self.c += 1,
            Grade::D => self.d += 1,
            Grade::E => self.e += 1,
            Grade::F => self.f += 1,
        }
    }

    pub fn count(&self, grade: Grade) -> u32 {
        match grade {
            Grade::S => self.s,
            Grade::A => self.a,
            Grade::B => self.b,
            Grade::C => self.c,
            Grade::D => self.d,
            Grade::E => self.e,
            Grade::F => self.f,
        }
    }

    pub fn occupied(&self) -> u32 {
        Grade::DESCENDING.iter().map(|&g| self.count(g)).sum()
    }

    /// Accumulate another histogram into this one.
    pub fn absorb(&mut self, other: &GradeHistogram) {
        for grade in Grade::DESCENDING {
            let count = other.count(grade);
            match grade {
                Grade::S => self.s += count,
                Grade::A => self.a += count,
                Grade::B => self.b += count,
                Grade::C => self.c += count,
                Grade::D => self.d += count,
                Grade::E => self.e += count,
                Grade::F => self.f += count,
            }
        }
        self.empty += other.empty;
    }
}

/// Display-ready projection of one chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterGrid {
    pub subject: String,
    pub chapter: u32,
    pub capacity: u32,
    pub slots: Vec<GridSlot>,
    pub histogram: GradeHistogram,
    /// Records whose slot number exceeds the capacity; they are not rendered,
    /// but callers are expected to surface the count instead of dropping them
    /// silently.
    pub beyond_capacity: u32,
}

impl ChapterGrid {
    /// Project a scan result onto a grid of `capacity` slots.
    pub fn build(
        subject: &str,
        chapter: u32,
        records: &BTreeMap<u32, ProblemRecord>,
        capacity: u32,
    ) -> Self {
        let mut slots = Vec::with_capacity(capacity as usize);
        let mut histogram = GradeHistogram::default();

        for number in 1..=capacity {
            let state = match records.get(&number) {
                Some(record) => {
                    let understanding = record.average_understanding();
                    let grade = grade_for(record.review_count, understanding);
                    histogram.bump(grade);
                    SlotState::Occupied {
                        grade,
                        review_count: record.review_count,
                        understanding,
                    }
                }
                None => {
                    histogram.empty += 1;
                    SlotState::Empty
                }
            };
            slots.push(GridSlot { number, state });
        }

        let beyond_capacity = records.keys().filter(|&&n| n > capacity).count() as u32;

        Self {
            subject: subject.to_string(),
            chapter,
            capacity,
            slots,
            histogram,
            beyond_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::models::DEFAULT_DIFFICULTY;

    fn record(number: u32, review_count: u32, scores: Vec<u32>) -> ProblemRecord {
        ProblemRecord {
            subject: "Math".to_string(),
            chapter: 1,
            number,
            title: format!("Problem {}", number),
            difficulty: DEFAULT_DIFFICULTY,
            review_count,
            understanding_scores: scores,
            times: Vec::new(),
            created: None,
        }
    }

    fn records(entries: Vec<ProblemRecord>) -> BTreeMap<u32, ProblemRecord> {
        entries.into_iter().map(|r| (r.number, r)).collect()
    }

    #[test]
    fn test_partition_is_exhaustive() {
        let map = records(vec![
            record(1, 10, vec![80]),
            record(3, 2, vec![40]),
            record(7, 0, vec![]),
        ]);

        for capacity in [1, 5, 10, 50] {
            let grid = ChapterGrid::build("Math", 1, &map, capacity);
            assert_eq!(grid.slots.len(), capacity as usize);
            assert_eq!(grid.histogram.occupied() + grid.histogram.empty, capacity);
        }
    }

    #[test]
    fn test_occupied_grades_match_classifier() {
        let map = records(vec![record(1, 10, vec![80]), record(2, 5, vec![60])]);
        let grid = ChapterGrid::build("Math", 1, &map, 10);

        for slot in &grid.slots {
            if let SlotState::Occupied { grade, review_count, understanding } = slot.state {
                assert_eq!(grade, grade_for(review_count, understanding));
            }
        }
        assert_eq!(grid.histogram.s, 1);
        assert_eq!(grid.histogram.b, 1);
        assert_eq!(grid.histogram.empty, 8);
    }

    #[test]
    fn test_slots_beyond_capacity_are_counted_not_rendered() {
        let map = records(vec![record(1, 1, vec![50]), record(12, 1, vec![50])]);
        let grid = ChapterGrid::build("Math", 1, &map, 10);

        assert_eq!(grid.slots.len(), 10);
        assert_eq!(grid.beyond_capacity, 1);
        assert_eq!(grid.histogram.occupied(), 1);
    }

    #[test]
    fn test_empty_chapter() {
        let grid = ChapterGrid::build("Math", 1, &BTreeMap::new(), 5);
        assert_eq!(grid.histogram.empty, 5);
        assert!(grid.slots.iter().all(|s| !s.is_occupied()));
    }
}

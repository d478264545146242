use crate::model::{SkillEntry, SkillsRecord};

const DRIVER: i64 = 0;
const PROGRAMMING: i64 = 1;
const TOTAL: i64 = 2;

/// Splits season-ranked skills entries into driver, programming and combined scores.
/// Missing kinds stay at zero; a repeated kind keeps the last score seen.
pub fn classify_skills(team: &str, entries: &[SkillEntry]) -> SkillsRecord {
    entries.iter().fold(
        SkillsRecord {
            team: team.to_string(),
            driver_skills: 0,
            prog_skills: 0,
            total_skills: 0,
        },
        |mut acc, entry| {
            match entry.kind {
                DRIVER => acc.driver_skills = entry.score,
                PROGRAMMING => acc.prog_skills = entry.score,
                TOTAL => acc.total_skills = entry.score,
                _ => {}
            }
            acc
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: i64, score: i64) -> SkillEntry {
        SkillEntry { kind, score }
    }

    #[test]
    fn classifies_by_type() {
        let record = classify_skills("100A", &[entry(2, 95), entry(0, 60), entry(1, 35)]);
        assert_eq!(
            record,
            SkillsRecord {
                team: "100A".into(),
                driver_skills: 60,
                prog_skills: 35,
                total_skills: 95,
            }
        );
    }

    #[test]
    fn absent_kinds_default_to_zero() {
        let record = classify_skills("100A", &[entry(0, 12), entry(7, 500)]);
        assert_eq!(record.driver_skills, 12);
        assert_eq!(record.prog_skills, 0);
        assert_eq!(record.total_skills, 0);

        let empty = classify_skills("200B", &[]);
        assert_eq!((empty.driver_skills, empty.prog_skills, empty.total_skills), (0, 0, 0));
    }
}

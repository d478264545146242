use crate::model::{AwardEntry, AwardsRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AwardCategory {
    Champion,
    Skills,
    Excellence,
    Design,
    Judges,
}

/// Award names counted, in their VRC/VEXU and High School spellings.
const AWARD_NAMES: &[(&str, AwardCategory)] = &[
    ("Tournament Champions (VRC/VEXU)", AwardCategory::Champion),
    ("Tournament Champions (High School)", AwardCategory::Champion),
    ("Robot Skills Champion (VRC/VEXU)", AwardCategory::Skills),
    ("Robot Skills Champion (High School)", AwardCategory::Skills),
    ("Excellence Award (VRC/VEXU)", AwardCategory::Excellence),
    ("Excellence Award (High School)", AwardCategory::Excellence),
    ("Design Award (VRC/VEXU)", AwardCategory::Design),
    ("Design Award (High School)", AwardCategory::Design),
    ("Judges Award (VRC/VEXU)", AwardCategory::Judges),
    ("Judges Award (High School)", AwardCategory::Judges),
];

fn categorize(name: &str) -> Option<AwardCategory> {
    AWARD_NAMES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, category)| category)
}

/// Counts recognized awards per category. Unlisted award names are skipped entirely.
pub fn tally_awards(team: &str, awards: &[AwardEntry]) -> AwardsRecord {
    let mut record = AwardsRecord {
        team: team.to_string(),
        ..Default::default()
    };

    for category in awards.iter().filter_map(|a| categorize(&a.name)) {
        record.total_awards += 1;
        match category {
            AwardCategory::Champion => record.award_champ += 1,
            AwardCategory::Skills => record.award_skills += 1,
            AwardCategory::Excellence => record.award_excel += 1,
            AwardCategory::Design => record.award_design += 1,
            AwardCategory::Judges => record.award_judge += 1,
        }
    }

    record
}

use super::{Source, CARD, NAME, SKY_600, SLATE_500, SLATE_700};
use crate::extract::CardLayout;
use crate::normalize::{keep, Column, Schema};

pub const URL: &str = "https://cse.sds.bracu.ac.bd/faculty_list";

pub const SOURCE: Source = Source {
    entity: "faculty",
    url: URL,
    layout: CardLayout {
        card: CARD,
        name: NAME,
        // designation, position, email
        fields: [SKY_600, SLATE_700, SLATE_500],
    },
    schema: Schema {
        name: "Name",
        columns: [
            Column { header: "Designation", cleanup: keep },
            Column { header: "Position", cleanup: keep },
            Column { header: "Email", cleanup: clean_email },
        ],
    },
};

/// Lower-case and trim. Applies to the N/A marker too.
pub fn clean_email(value: String) -> Option<String> {
    Some(value.trim().to_lowercase())
}

use std::sync::LazyLock;

use regex::Regex;

use super::{Source, CARD, NAME, SKY_600, SLATE_500, SLATE_700};
use crate::extract::CardLayout;
use crate::normalize::{keep, Column, Schema};

pub const URL: &str = "https://cse.sds.bracu.ac.bd/alumni_list";

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

pub const SOURCE: Source = Source {
    entity: "alumni",
    url: URL,
    layout: CardLayout {
        card: CARD,
        name: NAME,
        // graduation year, current position, employer
        fields: [SLATE_500, SKY_600, SLATE_700],
    },
    schema: Schema {
        name: "Name",
        columns: [
            Column { header: "Graduation_Year", cleanup: graduation_year },
            Column { header: "Current_Position", cleanup: keep },
            Column { header: "Employer", cleanup: keep },
        ],
    },
};

/// First run of four digits anywhere in the text. No range check.
pub fn graduation_year(value: String) -> Option<String> {
    YEAR_RE.find(&value).map(|m| m.as_str().to_string())
}

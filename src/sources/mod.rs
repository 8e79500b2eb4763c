pub mod alumni;
pub mod faculty;

use crate::extract::CardLayout;
use crate::normalize::Schema;

/// Card wrapper shared by both listing pages.
pub const CARD: &str = "div.relative.fac-card";
/// Name paragraph shared by both listing pages.
pub const NAME: &str = r"p.text-sm.font-semibold.text-center.text-black.normal-case.md\:text-\[1rem\]";

const SKY_600: &str = r"p.text-xs.font-semibold.text-center.md\:text-base.text-sky-600";
const SLATE_700: &str = r"p.text-xs.font-medium.text-center.md\:text-sm.text-slate-700";
const SLATE_500: &str = r"p.text-xs.text-center.md\:text-sm.text-slate-500";

/// Everything that distinguishes one listing pipeline from another.
#[derive(Debug, Clone, Copy)]
pub struct Source {
    pub entity: &'static str,
    pub url: &'static str,
    pub layout: CardLayout,
    pub schema: Schema,
}

impl Source {
    /// "faculty" -> "Faculty"
    pub fn label(&self) -> String {
        let mut chars = self.entity.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// `<entity>_data_<YYYYMMDD>.csv`
    pub fn file_name(&self, date: chrono::NaiveDate) -> String {
        format!("{}_data_{}.csv", self.entity, date.format("%Y%m%d"))
    }
}

pub fn by_name(entity: &str) -> Option<Source> {
    match entity {
        "faculty" => Some(faculty::SOURCE),
        "alumni" => Some(alumni::SOURCE),
        _ => None,
    }
}

//! Weekday-based theme classification

use crate::error::ArchiveError;
use std::fmt;
use std::str::FromStr;

/// Topical bucket an issue belongs to, decided by its delivery weekday.
///
/// Sunday has no theme; issues sent on a Sunday (or with an unrecognised
/// weekday label) are left out of any theme grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Theme {
    /// 月曜日
    Geography,
    /// 火曜日
    SixYears,
    /// 水曜日
    CareerPaths,
    /// 木曜日
    SchoolEvents,
    /// 金曜日
    Admissions,
    /// 土曜日
    Story,
}

impl Theme {
    /// All themes in weekday order (Monday first)
    pub const ALL: [Theme; 6] = [
        Theme::Geography,
        Theme::SixYears,
        Theme::CareerPaths,
        Theme::SchoolEvents,
        Theme::Admissions,
        Theme::Story,
    ];

    /// Classify a weekday label. Only the first character is looked at, so
    /// both `火` and `火曜日` map to the same theme.
    pub fn from_weekday(label: &str) -> Option<Theme> {
        match label.trim().chars().next()? {
            '月' => Some(Theme::Geography),
            '火' => Some(Theme::SixYears),
            '水' => Some(Theme::CareerPaths),
            '木' => Some(Theme::SchoolEvents),
            '金' => Some(Theme::Admissions),
            '土' => Some(Theme::Story),
            _ => None,
        }
    }

    /// Display name of the theme
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Geography => "日大一の地理情報",
            Theme::SixYears => "日大一の6年間",
            Theme::CareerPaths => "日大一の進路",
            Theme::SchoolEvents => "学校行事",
            Theme::Admissions => "日大一の入試",
            Theme::Story => "日大一ストーリー",
        }
    }

    /// Weekday key this theme is delivered on
    pub fn weekday(&self) -> char {
        match self {
            Theme::Geography => '月',
            Theme::SixYears => '火',
            Theme::CareerPaths => '水',
            Theme::SchoolEvents => '木',
            Theme::Admissions => '金',
            Theme::Story => '土',
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ArchiveError;

    /// Accepts either the theme name or its weekday key (`金`, `金曜日`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Theme::ALL
            .iter()
            .copied()
            .find(|theme| theme.name() == s)
            .or_else(|| {
                let rest: String = s.chars().skip(1).collect();
                if rest.is_empty() || rest == "曜日" || rest == "曜" {
                    Theme::from_weekday(s)
                } else {
                    None
                }
            })
            .ok_or_else(|| ArchiveError::InvalidTheme(s.to_string()))
    }
}

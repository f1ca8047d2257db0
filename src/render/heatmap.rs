use crate::models::ContributionWeek;
use crate::render::palette::Palette;
use crate::render::INDENT;

pub const HEATMAP_TITLE: &str = "GitHub Contributions (Past Year):";

const GAP: &str = "  ";

/// Formats the calendar as 7 weekday rows with one column per week.
pub fn format_heatmap(weeks: &[ContributionWeek], palette: &Palette) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(INDENT);
    output.push_str(HEATMAP_TITLE);
    output.push('\n');

    for row in 0..ContributionWeek::DAYS {
        output.push_str(INDENT);
        for week in weeks {
            match week.day(row) {
                Some(level) => output.push_str(&palette.block(level)),
                None => output.push_str(GAP),
            }
        }
        output.push('\n');
    }

    output
}

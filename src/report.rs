//! Human-readable report rendering
//!
//! The aggregate distribution is rendered as a header naming the requested
//! cluster count followed by one line per representative color, sorted by
//! descending percentage. Colors print as BGR tuples.

use crate::ColorDistribution;

/// Printed when no distribution could be computed
pub const NO_RESULT_MESSAGE: &str = "No valid PNG images found in the specified folder.";

/// Render the aggregate report.
///
/// Lines are sorted by descending percentage (ties broken by color value);
/// an empty distribution renders as [`NO_RESULT_MESSAGE`].
pub fn render_report(distribution: &ColorDistribution, cluster_count: usize) -> String {
    if distribution.is_empty() {
        return NO_RESULT_MESSAGE.to_string();
    }

    let mut lines = Vec::with_capacity(distribution.len() + 1);
    lines.push(format!(
        "Total Color Percentages (Grouped into {cluster_count} colors) Across All Images:"
    ));
    for share in distribution.sorted_shares() {
        lines.push(format!(
            "BGR Group: {}, Percentage: {:.4}%",
            share.color, share.percentage
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GroupColor;
    use std::collections::HashMap;

    #[test]
    fn test_empty_distribution_renders_no_result() {
        let report = render_report(&ColorDistribution::default(), 5);
        assert_eq!(report, NO_RESULT_MESSAGE);
    }

    #[test]
    fn test_report_lines_sorted_descending() {
        let mut shares = HashMap::new();
        shares.insert(GroupColor::new(255, 0, 0), 25.0);
        shares.insert(GroupColor::new(0, 0, 255), 75.0);
        let distribution = ColorDistribution::from_shares(shares);

        let report = render_report(&distribution, 2);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines[0],
            "Total Color Percentages (Grouped into 2 colors) Across All Images:"
        );
        // (0, 0, 255) in RGB prints as BGR tuple (255, 0, 0)
        assert_eq!(lines[1], "BGR Group: (255, 0, 0), Percentage: 75.0000%");
        assert_eq!(lines[2], "BGR Group: (0, 0, 255), Percentage: 25.0000%");
    }

    #[test]
    fn test_percentages_use_four_decimals() {
        let mut shares = HashMap::new();
        shares.insert(GroupColor::new(1, 2, 3), 100.0 / 3.0);
        let distribution = ColorDistribution::from_shares(shares);

        let report = render_report(&distribution, 1);
        assert!(report.ends_with("BGR Group: (3, 2, 1), Percentage: 33.3333%"));
    }
}

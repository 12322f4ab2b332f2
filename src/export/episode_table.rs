use crate::data::episode_length::{bucket_label, find_group, EpisodeGroup};

const PERCENT_MULTIPLIER: f64 = 100.0;
const TABLE_HEADER: &str = "|Episode length|Shows|Share|";
const TABLE_SEPARATOR: &str = "|---|---|---|";

pub fn format_share(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 / total as f64 * PERCENT_MULTIPLIER)
}

/// Markdown table of one cohort, rows in bucket order. `None` for a group
/// that is not in the dataset.
pub fn generate_episode_table(group: &str, data: &[EpisodeGroup], order: &[&str]) -> Option<String> {
    let group = find_group(data, group)?;
    let total = group.total(order);

    let mut lines = vec![TABLE_HEADER.to_string(), TABLE_SEPARATOR.to_string()];
    for bucket in order {
        let shows = group.count(bucket);
        lines.push(format!("|{}|{}|{}|", bucket_label(bucket), shows, format_share(shows, total)));
    }

    Some(lines.join("\n"))
}

// Display helpers shared by the board views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Human label for a kebab-case status or category value.
///
/// `"in-progress"` becomes `"In Progress"`, `"mise-en-place"` becomes
/// `"Mise En Place"`.
pub fn status_label(value: &str) -> String {
    value
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Relative age of a timestamp ("Just now", "5 min ago", "2 hours ago", "1 day ago").
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" });
    }

    let days = hours / 24;
    format!("{} day{} ago", days, if days > 1 { "s" } else { "" })
}

/// Completion percentage, 0 when there is nothing to complete
pub fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}

/// Round to a fixed number of decimals (table presentation)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Count of records sharing a label (chart series entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub label: String,
    pub count: usize,
}

/// Count occurrences per label, keeping first-appearance order.
pub fn tally<I, S>(labels: I) -> Vec<Tally>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<Tally> = Vec::new();
    for label in labels {
        let label = label.as_ref();
        match counts.iter_mut().find(|t| t.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(Tally {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("in-progress"), "In Progress");
        assert_eq!(status_label("mise-en-place"), "Mise En Place");
        assert_eq!(status_label("pending"), "Pending");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(20), now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5 min ago");
        assert_eq!(time_ago(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(time_ago(now - Duration::hours(49), now), "2 days ago");
    }

    #[test]
    fn test_percent_empty_is_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }

    #[test]
    fn test_tally_first_appearance() {
        let counts = tally(["pending", "completed", "pending"]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0], Tally { label: "pending".to_string(), count: 2 });
        assert_eq!(counts[1].count, 1);
    }
}

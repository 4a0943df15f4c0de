/// Relative "time ago" label for a report date, counted in whole days.
/// - 0 days: "Today"
/// - 1 day: "1 day ago"
/// - 2..=29 days: "<n> days ago"
/// - 30..=59 days: "1 month ago"
/// - 60+ days: "<n / 30> months ago"
///
/// Dates after `today` are labelled "Today".
pub fn time_ago(reported: chrono::NaiveDate, today: chrono::NaiveDate) -> String {
    let days = (today - reported).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=29 => format!("{days} days ago"),
        30..=59 => "1 month ago".to_string(),
        _ => format!("{} months ago", days / 30),
    }
}

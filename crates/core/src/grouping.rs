//! Group comments into a per-day timeline.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::comment::Comment;
use crate::types::parse_date;

/// All comments that share one calendar-date key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    pub date: String,
    pub comments: Vec<Comment>,
}

/// Partition comments by their `date` field.
///
/// Groups come back most recent first. Within a group, comments are
/// ordered earliest first by timestamp; the sort is stable, so equal
/// timestamps keep their input order and unparseable timestamps go last.
///
/// The key is the authored `date`, not the day of `timestamp`, so a
/// comment whose two fields disagree still lands under its `date`.
pub fn group_by_date(comments: &[Comment]) -> Vec<DateGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DateGroup> = Vec::new();

    for comment in comments {
        let slot = *index.entry(comment.date.as_str()).or_insert_with(|| {
            groups.push(DateGroup {
                date: comment.date.clone(),
                comments: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].comments.push(comment.clone());
    }

    groups.sort_by(|a, b| compare_date_keys_desc(&a.date, &b.date));
    for group in &mut groups {
        group
            .comments
            .sort_by_key(|c| (c.parsed_timestamp().is_none(), c.parsed_timestamp()));
    }
    groups
}

/// Most recent valid date first; keys that do not parse sort after all
/// valid keys, in descending string order.
fn compare_date_keys_desc(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

/// Heading for a date group, e.g. `"Monday, March 10, 2025"`.
///
/// Keys that do not parse are shown verbatim.
pub fn format_group_label(date_key: &str) -> String {
    match parse_date(date_key) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => date_key.to_string(),
    }
}

/// `"1 comment"` or `"N comments"`.
pub fn comment_count_label(count: usize) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{count} comments")
    }
}

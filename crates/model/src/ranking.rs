//! Ranking of the most used applications in the usage window.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AppMetadata, TopAppEntry, UsageRecord};

/// System UI package that never appears in the top apps.
pub const SYSTEM_UI_PACKAGE: &str = "com.android.systemui";

const MS_PER_MINUTE: u64 = 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedUsage {
    pub package_name: String,
    pub foreground_ms: u64,
}

/// Sum duplicate packages and sort them by foreground time, most used first.
///
/// Rows with no foreground time are dropped. Ties keep the order in which the
/// package first appeared. Any package listed in `excluded` is removed after
/// aggregation.
pub fn rank_usage(records: &[UsageRecord], excluded: &[&str]) -> Vec<RankedUsage> {
    let mut ranked: Vec<RankedUsage> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if record.total_foreground_ms == 0 {
            continue;
        }
        match index.get(record.package_name.as_str()) {
            Some(&i) => ranked[i].foreground_ms += record.total_foreground_ms,
            None => {
                index.insert(record.package_name.as_str(), ranked.len());
                ranked.push(RankedUsage {
                    package_name: record.package_name.clone(),
                    foreground_ms: record.total_foreground_ms,
                });
            }
        }
    }

    // sort_by is stable, so equal times stay in first-seen order
    ranked.sort_by(|a, b| b.foreground_ms.cmp(&a.foreground_ms));
    ranked.retain(|r| !excluded.contains(&r.package_name.as_str()));
    ranked
}

/// Resolve metadata for ranked packages until `limit` entries are collected.
///
/// Packages whose lookup returns `None` are skipped.
pub fn select_top_apps<F>(ranked: &[RankedUsage], limit: usize, mut lookup: F) -> Vec<TopAppEntry>
where
    F: FnMut(&str) -> Option<AppMetadata>,
{
    ranked
        .iter()
        .filter_map(|usage| {
            lookup(&usage.package_name).map(|meta| TopAppEntry {
                package_name: usage.package_name.clone(),
                display_name: meta.display_name,
                icon: meta.icon,
                foreground_minutes: usage.foreground_ms / MS_PER_MINUTE,
            })
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> Option<AppMetadata> {
        Some(AppMetadata {
            display_name: name.to_uppercase(),
            icon: None,
        })
    }

    fn names(ranked: &[RankedUsage]) -> Vec<&str> {
        ranked.iter().map(|r| r.package_name.as_str()).collect()
    }

    #[test]
    fn test_duplicates_are_summed_before_ranking() {
        let records = vec![
            UsageRecord::new("mail", 10_000),
            UsageRecord::new("browser", 25_000),
            UsageRecord::new("mail", 20_000),
        ];

        let ranked = rank_usage(&records, &[]);

        assert_eq!(names(&ranked), vec!["mail", "browser"]);
        assert_eq!(ranked[0].foreground_ms, 30_000);
    }

    #[test]
    fn test_self_and_system_ui_never_ranked() {
        let records = vec![
            UsageRecord::new("drainwatch", 9_000_000),
            UsageRecord::new(SYSTEM_UI_PACKAGE, 8_000_000),
            UsageRecord::new("music", 1_000),
        ];

        let ranked = rank_usage(&records, &["drainwatch", SYSTEM_UI_PACKAGE]);

        assert_eq!(names(&ranked), vec!["music"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let records = vec![
            UsageRecord::new("b", 5_000),
            UsageRecord::new("a", 5_000),
            UsageRecord::new("c", 5_000),
        ];
        assert_eq!(names(&rank_usage(&records, &[])), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_zero_time_rows_dropped() {
        let records = vec![UsageRecord::new("idle", 0), UsageRecord::new("busy", 1)];
        assert_eq!(names(&rank_usage(&records, &[])), vec!["busy"]);
    }

    #[test]
    fn test_top_three_after_exclusion() {
        let records = vec![
            UsageRecord::new(SYSTEM_UI_PACKAGE, 100 * MS_PER_MINUTE),
            UsageRecord::new("one", 90 * MS_PER_MINUTE),
            UsageRecord::new("two", 80 * MS_PER_MINUTE),
            UsageRecord::new("three", 70 * MS_PER_MINUTE),
            UsageRecord::new("four", 60 * MS_PER_MINUTE),
        ];
        let ranked = rank_usage(&records, &[SYSTEM_UI_PACKAGE]);
        let top = select_top_apps(&ranked, 3, meta);

        let packages: Vec<_> = top.iter().map(|t| t.package_name.as_str()).collect();
        assert_eq!(packages, vec!["one", "two", "three"]);
        assert_eq!(top[0].display_name, "ONE");
        assert_eq!(top[0].foreground_minutes, 90);
    }

    #[test]
    fn test_failed_lookup_is_skipped() {
        let records = vec![
            UsageRecord::new("ghost", 50_000_000),
            UsageRecord::new("one", 40_000_000),
            UsageRecord::new("two", 30_000_000),
            UsageRecord::new("three", 20_000_000),
            UsageRecord::new("four", 10_000_000),
        ];
        let ranked = rank_usage(&records, &[]);
        let top = select_top_apps(&ranked, 3, |pkg| if pkg == "ghost" { None } else { meta(pkg) });

        let packages: Vec<_> = top.iter().map(|t| t.package_name.as_str()).collect();
        assert_eq!(packages, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_fewer_than_limit() {
        let ranked = rank_usage(&[UsageRecord::new("solo", 61 * MS_PER_MINUTE)], &[]);
        let top = select_top_apps(&ranked, 3, meta);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].foreground_minutes, 61);
    }
}

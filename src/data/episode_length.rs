//! Episode length distribution of the top 1,000 podcasts, grouped by release
//! cadence. The post charts and the markdown export both read these numbers.

/// Bucket counts of one cohort, as `(bucket id, number of shows)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeGroup<'a> {
    pub name: &'a str,
    pub counts: &'a [(&'a str, u64)],
}

impl<'a> EpisodeGroup<'a> {
    /// A bucket the group has no entry for counts as zero.
    pub fn count(&self, bucket: &str) -> u64 {
        self.counts.iter()
            .find(|(id, _)| *id == bucket)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self, order: &[&str]) -> u64 {
        order.iter().map(|bucket| self.count(bucket)).sum()
    }
}

pub fn find_group<'a>(groups: &[EpisodeGroup<'a>], name: &str) -> Option<EpisodeGroup<'a>> {
    groups.iter().find(|group| group.name == name).copied()
}

pub fn bucket_label(bucket: &str) -> &str {
    match bucket {
        "under10" => "<10 minutes",
        "tenToTwenty" => "10–20 minutes",
        "twentyToForty" => "20–40 minutes",
        "fortyToSixty" => "40–60 minutes",
        "sixtyToNinety" => "60–90 minutes",
        "ninetyPlus" => "90+ minutes",
        other => other,
    }
}

pub const EPISODE_BUCKET_ORDER: &[&str] = &[
    "under10",
    "tenToTwenty",
    "twentyToForty",
    "fortyToSixty",
    "sixtyToNinety",
    "ninetyPlus",
];

pub const EPISODE_LENGTH_DATA: &[EpisodeGroup<'static>] = &[
    EpisodeGroup {
        name: "overall",
        counts: &[
            ("under10", 5),
            ("tenToTwenty", 38),
            ("twentyToForty", 232),
            ("fortyToSixty", 330),
            ("sixtyToNinety", 287),
            ("ninetyPlus", 108),
        ],
    },
    EpisodeGroup {
        name: "daily",
        counts: &[
            ("under10", 3),
            ("tenToTwenty", 20),
            ("twentyToForty", 57),
            ("fortyToSixty", 57),
            ("sixtyToNinety", 28),
            ("ninetyPlus", 15),
        ],
    },
    EpisodeGroup {
        name: "nearDaily",
        counts: &[
            ("under10", 0),
            ("tenToTwenty", 2),
            ("twentyToForty", 21),
            ("fortyToSixty", 44),
            ("sixtyToNinety", 50),
            ("ninetyPlus", 15),
        ],
    },
    EpisodeGroup {
        name: "weekly",
        counts: &[
            ("under10", 2),
            ("tenToTwenty", 10),
            ("twentyToForty", 119),
            ("fortyToSixty", 207),
            ("sixtyToNinety", 183),
            ("ninetyPlus", 67),
        ],
    },
    EpisodeGroup {
        name: "monthly",
        counts: &[
            ("under10", 0),
            ("tenToTwenty", 1),
            ("twentyToForty", 29),
            ("fortyToSixty", 21),
            ("sixtyToNinety", 20),
            ("ninetyPlus", 9),
        ],
    },
    EpisodeGroup {
        name: "other",
        counts: &[
            ("under10", 0),
            ("tenToTwenty", 5),
            ("twentyToForty", 5),
            ("fortyToSixty", 4),
            ("sixtyToNinety", 5),
            ("ninetyPlus", 1),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_totals() {
        let overall = find_group(EPISODE_LENGTH_DATA, "overall").unwrap();
        assert_eq!(overall.total(EPISODE_BUCKET_ORDER), 1000);
        assert_eq!(overall.count("fortyToSixty"), 330);
        assert_eq!(overall.count("unknown"), 0);
    }

    #[test]
    fn test_every_group_has_every_bucket() {
        for group in EPISODE_LENGTH_DATA {
            for bucket in EPISODE_BUCKET_ORDER {
                assert!(group.counts.iter().any(|(id, _)| id == bucket), "{} misses {}", group.name, bucket);
            }
        }
        assert!(find_group(EPISODE_LENGTH_DATA, "yearly").is_none());
    }

    #[test]
    fn test_bucket_label() {
        assert_eq!(bucket_label("under10"), "<10 minutes");
        assert_eq!(bucket_label("ninetyPlus"), "90+ minutes");
        assert_eq!(bucket_label("twoHours"), "twoHours");
    }
}

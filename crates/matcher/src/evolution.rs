//! Style-quiz history turned into a timeline, plus wardrobe insights.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wardrobe_common::{StyleHistoryEntry, WardrobeItem};

use crate::analyzer::{WardrobeAnalysis, WardrobeAnalyzer};

pub const DEFAULT_PROGRESS: i64 = 50;
pub const UNKNOWN_PERIOD: &str = "Unknown";
const PERIOD_FORMAT: &str = "%b %d";
const MAX_COLOR_PREFERENCES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimelineEntry {
    /// e.g. "Mar 04"
    pub period: String,
    pub stage: String,
    pub style: String,
    pub color: String,
    pub mood: String,
    pub progress: i64,
    pub items: usize,
    pub key_item: String,
    /// Only the first (most recent) entry is current
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleInsights {
    pub dominant_style: String,
    pub style_change: String,
    pub color_preferences: Vec<String>,
    pub style_confidence: u32,
    pub wardrobe_size: usize,
    pub recommendations: Vec<String>,
}

impl From<WardrobeAnalysis> for StyleInsights {
    fn from(analysis: WardrobeAnalysis) -> Self {
        Self {
            style_change: format!("{}%", analysis.health_score),
            color_preferences: analysis
                .color_preferences
                .keys()
                .take(MAX_COLOR_PREFERENCES)
                .cloned()
                .collect(),
            style_confidence: analysis.health_score,
            wardrobe_size: analysis.total_items,
            dominant_style: analysis.dominant_style,
            recommendations: analysis.recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvolutionReport {
    pub timeline: Vec<TimelineEntry>,
    pub insights: StyleInsights,
}

/// Build the evolution report; `history` is expected newest first.
pub fn evolution(items: &[WardrobeItem], history: &[StyleHistoryEntry]) -> EvolutionReport {
    let analysis = WardrobeAnalyzer.analyze(items);

    let timeline: Vec<TimelineEntry> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| timeline_entry(entry, items.len(), i == 0))
        .collect();

    debug!(entries = timeline.len(), wardrobe_size = items.len(), "Built style timeline");

    EvolutionReport {
        timeline,
        insights: analysis.into(),
    }
}

fn timeline_entry(entry: &StyleHistoryEntry, wardrobe_size: usize, is_current: bool) -> TimelineEntry {
    let styles = entry.style_list();
    let stage = styles
        .first()
        .cloned()
        .or_else(|| entry.archetype.clone())
        .unwrap_or_else(|| "Mapped".to_string());

    TimelineEntry {
        period: entry
            .created_at
            .as_deref()
            .and_then(format_period)
            .unwrap_or_else(|| UNKNOWN_PERIOD.to_string()),
        style: styles.iter().take(2).cloned().collect::<Vec<_>>().join(" & "),
        color: "Personalized".to_string(),
        mood: mood_for(&stage).to_string(),
        stage,
        progress: entry.comfort_level.unwrap_or(DEFAULT_PROGRESS),
        items: wardrobe_size,
        key_item: "DNA Profile".to_string(),
        is_current,
    }
}

fn mood_for(stage: &str) -> &'static str {
    if stage.contains("Minimalist") {
        "Clean & Sharp"
    } else if stage.contains("Streetwear") {
        "Bold & Expressive"
    } else if stage.contains("Vintage") {
        "Nostalgic"
    } else {
        "Exploring"
    }
}

/// "%b %d" rendering of an ISO-8601 date or datetime
pub fn format_period(raw: &str) -> Option<String> {
    let raw = raw.trim();

    let naive = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN)))
        .ok()?;

    Some(naive.format(PERIOD_FORMAT).to_string())
}

/// Headline archetype from a stored style list (JSON array of tags).
///
/// `None` means no profile yet; a list that cannot be decoded still counts as mapped.
pub fn style_archetype(styles: Option<&str>) -> String {
    let Some(raw) = styles else {
        return "Pending".to_string();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => list.first().map(|first| capitalize(first)).unwrap_or_else(|| "Pending".to_string()),
        Err(_) => "Mapped".to_string(),
    }
}

/// First letter upper-cased, the rest lower-cased
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_common::{Category, Fabric};

    fn entry(styles: &str, created_at: &str) -> StyleHistoryEntry {
        StyleHistoryEntry {
            styles: Some(styles.to_string()),
            created_at: Some(created_at.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_timeline_from_history() {
        let items = vec![WardrobeItem::new("White Tee", Category::Top, "White", Fabric::Cotton)];
        let history = vec![
            StyleHistoryEntry {
                comfort_level: Some(80),
                ..entry(r#"["Minimalist", "Classic", "Boho"]"#, "2024-03-04T10:15:00")
            },
            entry(r#"["Streetwear"]"#, "2024-01-20T08:00:00.123456"),
            StyleHistoryEntry {
                archetype: Some("Vintage Soul".to_string()),
                ..entry("not json", "yesterday")
            },
        ];

        let report = evolution(&items, &history);
        let timeline = &report.timeline;
        assert_eq!(timeline.len(), 3);

        assert_eq!(timeline[0].period, "Mar 04");
        assert_eq!(timeline[0].stage, "Minimalist");
        assert_eq!(timeline[0].style, "Minimalist & Classic");
        assert_eq!(timeline[0].mood, "Clean & Sharp");
        assert_eq!(timeline[0].progress, 80);
        assert!(timeline[0].is_current);

        assert_eq!(timeline[1].period, "Jan 20");
        assert_eq!(timeline[1].mood, "Bold & Expressive");
        assert_eq!(timeline[1].progress, DEFAULT_PROGRESS);
        assert!(!timeline[1].is_current);

        assert_eq!(timeline[2].period, "Unknown");
        assert_eq!(timeline[2].stage, "Vintage Soul");
        assert_eq!(timeline[2].style, "");
        assert_eq!(timeline[2].mood, "Nostalgic");
        assert_eq!(timeline[2].items, 1);
        assert_eq!(timeline[2].key_item, "DNA Profile");
    }

    #[test]
    fn test_insights_mirror_analysis() {
        let items: Vec<_> = ["Black", "White", "Navy", "Red", "Olive", "Camel"]
            .iter()
            .map(|color| WardrobeItem::new("Plain Top", Category::Top, *color, Fabric::Cotton))
            .collect();
        let insights = evolution(&items, &[]).insights;

        assert_eq!(insights.color_preferences, vec!["Black", "White", "Navy", "Red", "Olive"]);
        assert_eq!(insights.wardrobe_size, 6);
        assert_eq!(insights.style_confidence, 60);
        assert_eq!(insights.style_change, "60%");
        assert_eq!(insights.dominant_style, "Versatile");
    }

    #[test]
    fn test_missing_stage_is_mapped() {
        let report = evolution(&[], &[StyleHistoryEntry::default()]);
        assert_eq!(report.timeline[0].stage, "Mapped");
        assert_eq!(report.timeline[0].mood, "Exploring");
        assert_eq!(report.insights.dominant_style, "Newcomer");
    }

    #[test]
    fn test_period_formats() {
        assert_eq!(format_period("2024-12-25").as_deref(), Some("Dec 25"));
        assert_eq!(format_period("2024-07-01T12:00:00+02:00").as_deref(), Some("Jul 01"));
        assert_eq!(format_period("2024-07-01 09:30:00").as_deref(), Some("Jul 01"));
        assert_eq!(format_period(""), None);
    }

    #[test]
    fn test_style_archetype() {
        assert_eq!(style_archetype(None), "Pending");
        assert_eq!(style_archetype(Some("[]")), "Pending");
        assert_eq!(style_archetype(Some(r#"["minimalist","boho"]"#)), "Minimalist");
        assert_eq!(style_archetype(Some(r#"["STREETWEAR"]"#)), "Streetwear");
        assert_eq!(style_archetype(Some("{broken")), "Mapped");
    }
}

//! Terminal rendering for plans.

use owo_colors::OwoColorize;
use tripmatch_core::PlanRecord;

/// Extension trait for colored terminal output.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for PlanRecord {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} {}", self.name.bold(), format!("[{}]", self.city).cyan())];

        let mut dates = format!("   {}", render_dates(self));
        if self.want_play {
            dates.push_str(&format!("  {}", "wants to play".green()));
        }
        lines.push(dates);

        if let Some(contact) = &self.contact {
            lines.push(format!("   {}", contact));
        }
        if let Some(note) = &self.note {
            lines.push(format!("   {}", note.dimmed()));
        }
        lines.join("\n")
    }
}

fn render_dates(plan: &PlanRecord) -> String {
    let days = plan.range().days();
    format!(
        "{} → {} ({} {})",
        plan.start_date.format("%a %b %-d"),
        plan.end_date.format("%a %b %-d, %Y"),
        days,
        pluralize("day", days)
    )
}

pub fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else if word.ends_with("ch") || word.ends_with('s') {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripmatch_core::PlanDraft;

    fn record() -> PlanRecord {
        PlanDraft {
            name: Some("Mei".to_string()),
            city: Some("Xiamen".to_string()),
            start_date: Some("2026-02-14".to_string()),
            end_date: Some("2026-02-16".to_string()),
            note: Some("mornings only".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .into_record()
    }

    #[test]
    fn test_render_includes_plan_details() {
        let out = record().render();
        assert!(out.contains("Mei"));
        assert!(out.contains("Xiamen"));
        assert!(out.contains("3 days"));
        assert!(out.contains("mornings only"));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("day", 1), "day");
        assert_eq!(pluralize("day", 2), "days");
        assert_eq!(pluralize("match", 0), "matches");
    }
}

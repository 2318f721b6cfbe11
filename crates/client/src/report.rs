//! Shortage report rendering.

use std::fmt::Write;

use anyhow::Result;
use planner_core::{AggregateReport, EntityId, MaterialId, Roster};

use crate::config::ReportFormat;

pub fn render(report: &AggregateReport, roster: &Roster, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Text => Ok(render_text(report, roster)?),
    }
}

fn material_name(report: &AggregateReport, id: MaterialId) -> String {
    report
        .consolidated
        .binary_search_by_key(&id, |entry| entry.id())
        .map(|index| report.consolidated[index].material.name.clone())
        .unwrap_or_else(|_| format!("Unknown ({id})"))
}

fn entity_name(roster: &Roster, id: EntityId) -> String {
    roster
        .get(id)
        .map_or_else(|| id.to_string(), |entry| format!("{} ({id})", entry.profile.name))
}

fn render_text(report: &AggregateReport, roster: &Roster) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    if report.shortages.is_empty() {
        writeln!(out, "No shortages across {} entities.", roster.len())?;
    } else {
        writeln!(out, "Shortages ({}):", report.shortages.len())?;
    }
    for balance in &report.shortages {
        writeln!(
            out,
            "  {} ({}): owned {}, needed {}, short {}",
            material_name(report, balance.material),
            balance.material,
            balance.owned,
            balance.needed,
            balance.remaining.unsigned_abs(),
        )?;
        for row in report.attribution.usage_for(balance.material) {
            writeln!(
                out,
                "    - {} {}: {}",
                entity_name(roster, row.entity),
                row.axis,
                row.quantity
            )?;
        }
    }

    writeln!(out, "Credits needed: {}", report.credits.total)?;
    for (&entity, credits) in &report.credits.per_entity {
        writeln!(out, "  {}: {}", entity_name(roster, entity), credits)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{
        Axis, ConsolidatedEntry, EntityProfile, EntityProgress, EquipmentCategory, MaterialBalance,
        MaterialRecord, RosterEntry,
    };

    fn report() -> AggregateReport {
        let blueprint = MaterialId(3001);
        let mut report = AggregateReport {
            consolidated: vec![ConsolidatedEntry {
                material: MaterialRecord::new(blueprint, "Hat Blueprint"),
                total_quantity: 20,
            }],
            summary: vec![MaterialBalance::new(blueprint, 2, 20)],
            shortages: vec![MaterialBalance::new(blueprint, 2, 20)],
            ..AggregateReport::default()
        };
        report
            .attribution
            .record(blueprint, EntityId(1), Axis::Equipment(EquipmentCategory::Hat), 20);
        report.credits.add(EntityId(1), 3_400);
        report
    }

    fn roster() -> Roster {
        [RosterEntry::new(
            EntityProfile::new(EntityId(1), "Shiroko"),
            EntityProgress::default(),
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn text_lists_shortages_with_contributors() {
        let text = render(&report(), &roster(), ReportFormat::Text).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Shortages (1):");
        assert_eq!(lines[1], "  Hat Blueprint (3001): owned 2, needed 20, short 18");
        assert!(lines[2].starts_with("    - Shiroko (#1) "));
        assert!(lines[2].ends_with(": 20"));
        assert_eq!(lines[3], "Credits needed: 3400");
        assert_eq!(lines[4], "  Shiroko (#1): 3400");
    }

    #[test]
    fn json_is_the_serialized_report() {
        let json = render(&report(), &roster(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["shortages"][0]["remaining"], -18);
        assert_eq!(value["credits"]["total"], 3_400);
    }
}

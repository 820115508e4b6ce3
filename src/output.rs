use crate::dashboard::DashboardView;
use crate::error::Result;
use crate::impact::format_share;
use std::fmt::Write;
use std::path::Path;

// ═══════════════════════════════════════════════════════════════════════
// Number formatting
// ═══════════════════════════════════════════════════════════════════════

/// Integer with comma thousands separators.
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped integer part, up to three fraction digits with trailing zeros dropped.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = group_digits(int_part);
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Console views
// ═══════════════════════════════════════════════════════════════════════

/// Headline numbers, category cards and equivalences as plain text.
pub fn format_summary(view: &DashboardView) -> String {
    let t = &view.totals;
    let mut out = String::new();

    let _ = writeln!(out, "ESG impact score: {} ({})", view.average_score, view.grade.label());
    let _ = writeln!(out, "  {}", view.grade.description());
    let _ = writeln!(out);
    let _ = writeln!(out, "  Companies        {}", view.company_count);
    let _ = writeln!(out, "  Participants     {}", format_count(t.participants));
    let _ = writeln!(out, "  Collected        {} kg", format_amount(t.collection));
    let _ = writeln!(out, "  CO₂ reduction    {:.1} t", t.co2);
    let _ = writeln!(out);

    let _ = writeln!(out, "Waste types:");
    for c in &view.categories {
        let _ = writeln!(
            out,
            "  {:<8} {:>10} kg ({:>4} of collection)  {:>8.2} t CO₂ ({:>4} of CO₂)",
            c.category.short_label(),
            format_amount(c.collection_kg),
            format_share(c.collection_share),
            c.co2_tonnes,
            format_share(c.co2_share),
        );
    }
    let _ = writeln!(out);

    let eq = &view.equivalences;
    let _ = writeln!(out, "Equivalent to:");
    let _ = writeln!(out, "  {} pine trees absorbing CO₂ for a year", format_count(eq.trees));
    let _ = writeln!(out, "  {} cars off the road for a year", eq.car_years_display());
    let _ = writeln!(out, "  {} m² of arctic ice preserved", format_count(eq.ice_area_m2));

    out
}

/// The ranking table as aligned plain text.
pub fn format_ranking(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Ranking by {}:", view.sort_key.label());
    let _ = writeln!(
        out,
        "{:>4}  {:<28} {:>10} {:>10} {:>10} {:>10} {:>8} {:>5}",
        "#", "Company", "Plastic kg", "Toys kg", "Total kg", "CO₂ t", "People", "ESG"
    );
    for row in &view.ranked {
        let c = &row.company;
        let p = &c.performance;
        let _ = writeln!(
            out,
            "{:>4}  {:<28} {:>10} {:>10} {:>10} {:>10.2} {:>8} {:>5}",
            row.rank_label,
            format!("{} {}", c.logo, c.name),
            format_amount(p.waste_breakdown.plastic),
            format_amount(p.waste_breakdown.toys),
            format_amount(p.collection_amount),
            p.co2_reduction,
            format_count(p.participants),
            c.esg_score,
        );
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════
// File output
// ═══════════════════════════════════════════════════════════════════════

pub fn snapshot_json(view: &DashboardView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// Save the view model to JSON.
pub fn save_snapshot_json(view: &DashboardView, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, snapshot_json(view)?)?;
    Ok(())
}

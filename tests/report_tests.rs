use chrono::NaiveDate;
use esg_dashboard::config::DashboardConfig;
use esg_dashboard::dashboard::DashboardView;
use esg_dashboard::rank::SortKey;
use esg_dashboard::report::*;
use esg_dashboard::store::MetricsStore;

fn builtin_html(key: SortKey) -> String {
    let store = MetricsStore::builtin().unwrap();
    let view = DashboardView::build(&store, key).unwrap();
    generate_report(&view, &ReportOptions::default())
}

// ═══════════════════════════════════════════════════════════════════════
// HTML Report Generation Tests
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_generate_report_html() {
    let html = builtin_html(SortKey::Co2);

    assert!(html.starts_with("<!DOCTYPE html>"), "Should be valid HTML");
    assert!(html.contains("chart.js"), "Should include Chart.js");
    assert!(html.contains("ESG Impact Score"), "Should have score section");
    assert!(html.contains("Performance by Waste Type"), "Should have waste cards");
    assert!(html.contains("Company Ranking"), "Should have ranking table");
    assert!(html.contains("Waste Composition by Company"), "Should have comparison chart");
    assert!(html.contains("Quarterly Trends"), "Should have time series");
    assert!(html.contains("Environmental Impact Equivalents"), "Should have equivalents");
}

#[test]
fn test_report_headline_values() {
    let html = builtin_html(SortKey::Co2);

    assert!(html.contains(">79<"), "Should show the average score");
    assert!(html.contains("A (Advanced)"), "Should show the grade");
    assert!(html.contains("#3B82F6"), "Grade badge should use the A colour");
    assert!(html.contains("3,680"), "Should show participants");
    assert!(html.contains("13,800kg"), "Should show total collection");
    assert!(html.contains("35.0t"), "Should show CO2 with one decimal");
    assert!(html.contains("1,589 trees"));
    assert!(html.contains("7.6 cars"));
    assert!(html.contains("260m²"));
}

#[test]
fn test_report_category_cards() {
    let html = builtin_html(SortKey::Co2);
    assert!(html.contains("62% of all collection"));
    assert!(html.contains("38% of all collection"));
    assert!(html.contains("55% of all CO₂"));
    assert!(html.contains("19.36 tonnes"));
    assert!(html.contains("UF coefficient 2.5 applied"));
    assert!(html.contains("Reuse (RBF 3.0)"));
}

#[test]
fn test_report_ranking_order() {
    let html = builtin_html(SortKey::Participants);
    assert!(html.contains("Company Ranking: Participants"));

    let gold = html.find("<td>🥇</td><td class=\"name\">🌱 GreenTech Solutions").unwrap();
    let silver = html.find("<td>🥈</td><td class=\"name\">💳 Nuri Financial").unwrap();
    let fourth = html.find("<td>4</td><td class=\"name\">🏭 Hanbit Manufacturing").unwrap();
    assert!(gold < silver && silver < fourth);
    assert!(html.contains("badge-success"));
    assert!(html.contains("badge-warning"));
}

#[test]
fn test_report_series_charts() {
    let html = builtin_html(SortKey::Co2);
    assert!(html.contains("id=\"ts0\""));
    assert!(html.contains("id=\"ts2\""));
    assert!(!html.contains("id=\"ts3\""), "Unmatched series should not get a chart");
    assert!(html.contains("\"2024 Q1\""));
    assert!(html.contains("12 participations"));
}

#[test]
fn test_report_export_buttons_are_demo_only() {
    let html = builtin_html(SortKey::Co2);
    assert!(html.contains("PDF report download"));
    assert!(html.contains("Excel data export"));
    assert!(html.contains("Save as image"));
    assert!(html.contains("onclick=\"alert("));
    assert!(!html.contains("downloadBlob"), "Exports must not produce files");

    assert!(html.contains("🔍 Industry filter"));
    for label in ["All", "IT/Tech", "Energy", "Manufacturing", "Finance"] {
        assert!(
            html.contains(&format!(">{}</button>", label)),
            "missing industry button {}",
            label
        );
    }
    assert!(html.contains("class=\"industry active\" type=\"button\">All</button>"));
    assert!(html.contains(
        "(demo feature: a real implementation would compare performance by industry)"
    ));
    assert!(!html.contains("data-industry"), "Industry buttons must not filter anything");
}

#[test]
fn test_report_escapes_company_names() {
    let json = r#"{
      "companies": [ { "id": "x", "name": "<script>Evil & Co</script>", "logo": "x", "esgScore": 50, "totalParticipations": 1 } ],
      "performance": {
        "x": { "companyId": "x", "participants": 1, "collectionAmount": 2, "co2Reduction": 1,
               "wasteBreakdown": { "plastic": 1, "toys": 1 }, "co2Detail": { "plastic": 0.5, "toys": 0.5 } }
      }
    }"#;
    let store = MetricsStore::from_json_str(json).unwrap();
    let view = DashboardView::build(&store, SortKey::Co2).unwrap();
    let html = generate_report(&view, &ReportOptions::default());

    assert!(html.contains("&lt;script&gt;Evil &amp; Co&lt;/script&gt;"));
    assert!(!html.contains("<script>Evil"), "Raw name must not reach the page");
    assert!(html.contains("No time-series data available."));
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html("a < b & c > \"d\" 'e'"),
        "a &lt; b &amp; c &gt; &quot;d&quot; &#39;e&#39;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn test_report_footer_timestamp() {
    let store = MetricsStore::builtin().unwrap();
    let view = DashboardView::build(&store, SortKey::Co2).unwrap();

    let ts = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap();
    let mut config = DashboardConfig::default();
    config.title = "Q4 Board Pack".to_string();
    let options = ReportOptions::from_config(&config, Some(ts));
    let html = generate_report(&view, &options);

    assert!(html.contains("<title>Q4 Board Pack</title>"));
    assert!(html.contains("Generated 2024-12-31 18:30 by esg-dashboard"));

    let plain = generate_report(&view, &ReportOptions::default());
    assert!(plain.contains("Generated by esg-dashboard"));
}

#[test]
fn test_save_report_file() {
    let html = builtin_html(SortKey::Co2);
    let path = std::env::temp_dir().join("esg_dashboard_test_report.html");
    save_report(&html, &path).expect("save_report should succeed");

    assert!(path.exists(), "HTML file should be created");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.len() > 1000, "HTML should have substantial content");
    assert!(content.starts_with("<!DOCTYPE html>"));

    let _ = std::fs::remove_file(&path);
}

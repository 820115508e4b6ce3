use crate::config::{DashboardConfig, DEFAULT_CHART_JS_URL};
use crate::dashboard::{CompanySeries, DashboardView, RankedCompany};
use crate::error::Result;
use crate::export::{ExportFormat, IndustryFilter};
use crate::impact::{format_share, CategoryShare};
use crate::output::{format_amount, format_count};
use chrono::NaiveDateTime;
use std::path::Path;

/// Page-level settings that are not part of the data.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub chart_js_url: String,
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            title: "ESG Impact Dashboard".to_string(),
            chart_js_url: DEFAULT_CHART_JS_URL.to_string(),
            generated_at: None,
        }
    }
}

impl ReportOptions {
    pub fn from_config(config: &DashboardConfig, generated_at: Option<NaiveDateTime>) -> Self {
        ReportOptions {
            title: config.title.clone(),
            chart_js_url: config.chart_js_url.clone(),
            generated_at,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// HTML helpers
// ═══════════════════════════════════════════════════════════════════════

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn js_array_f64(data: &[f64]) -> String {
    let items: Vec<String> = data.iter().map(|v| format!("{:.4}", v)).collect();
    format!("[{}]", items.join(","))
}

fn js_array_u64(data: &[u64]) -> String {
    let items: Vec<String> = data.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(","))
}

/// JSON string literal, with `<` escaped so it cannot close a script tag.
fn js_string(text: &str) -> String {
    let quoted = serde_json::Value::String(text.to_string()).to_string();
    quoted.replace('<', "\\u003c")
}

fn js_array_str<'a>(data: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<String> = data.map(js_string).collect();
    format!("[{}]", items.join(","))
}

// ═══════════════════════════════════════════════════════════════════════
// Sections
// ═══════════════════════════════════════════════════════════════════════

fn export_buttons_html() -> String {
    let mut html = String::new();
    for (format, color) in ExportFormat::all()
        .into_iter()
        .zip(["#EF4444", "#10B981", "#3B82F6"])
    {
        html.push_str(&format!(
            "<button class=\"export\" style=\"background:{color}\" onclick=\"alert({notice})\">{title}</button>\n",
            color = color,
            notice = escape_html(&js_string(&format.notice())),
            title = format.title(),
        ));
    }
    html
}

fn industry_filter_html() -> String {
    let buttons: String = IndustryFilter::all()
        .iter()
        .map(|industry| {
            let class = if industry.is_default() { "industry active" } else { "industry" };
            format!("<button class=\"{}\" type=\"button\">{}</button>", class, industry.label())
        })
        .collect();
    format!(
        r#"<div class="industry-filter">
 <div><strong>🔍 Industry filter</strong><span class="muted caption">(demo feature: a real implementation would compare performance by industry)</span></div>
 <div class="industry-buttons">{buttons}</div>
 <p class="hint">💡 Selecting an industry compares results against that industry's average</p>
</div>"#,
        buttons = buttons,
    )
}

fn category_card_html(share: &CategoryShare) -> String {
    let c = share.category;
    let notes: String = c
        .notes()
        .iter()
        .map(|n| format!("<div>✓ {}</div>", n))
        .collect();
    format!(
        r#"<div class="card category" style="border-left:4px solid {color}">
 <div class="category-head"><span class="icon">{icon}</span><div><h4>{label}</h4><div class="muted">{subtitle}</div></div></div>
 <div class="muted">Total collected</div>
 <div class="big" style="color:{color}">{kg}kg</div>
 <div class="muted">{coll_share} of all collection</div>
 <div class="inset">
  <div class="muted">CO₂ reduction contribution</div>
  <div class="big" style="color:{color}">{co2:.2} tonnes</div>
  <div class="muted">{co2_share} of all CO₂</div>
 </div>
 <div class="notes">{notes}</div>
</div>"#,
        color = c.color(),
        icon = c.icon(),
        label = c.label(),
        subtitle = c.subtitle(),
        kg = format_amount(share.collection_kg),
        coll_share = format_share(share.collection_share),
        co2 = share.co2_tonnes,
        co2_share = format_share(share.co2_share),
        notes = notes,
    )
}

fn ranking_rows_html(ranked: &[RankedCompany]) -> String {
    let mut rows = String::new();
    for row in ranked {
        let c = &row.company;
        let p = &c.performance;
        rows.push_str(&format!(
            "<tr><td>{rank}</td><td class=\"name\">{logo} {name}</td><td>{plastic}</td><td>{toys}</td>\
             <td class=\"strong\">{total}</td><td class=\"co2\">{co2:.2}</td><td>{people}</td>\
             <td><span class=\"badge badge-{badge}\">{score}</span></td></tr>\n",
            rank = row.rank_label,
            logo = escape_html(&c.logo),
            name = escape_html(&c.name),
            plastic = format_amount(p.waste_breakdown.plastic),
            toys = format_amount(p.waste_breakdown.toys),
            total = format_amount(p.collection_amount),
            co2 = p.co2_reduction,
            people = format_count(p.participants),
            badge = row.badge_class,
            score = c.esg_score,
        ));
    }
    rows
}

fn series_section_html(series: &[CompanySeries]) -> (String, String) {
    let mut blocks = String::new();
    let mut scripts = String::new();
    for (i, s) in series.iter().enumerate() {
        blocks.push_str(&format!(
            "<div class=\"series\"><h4>{logo} {name} <span class=\"badge badge-info\">{times} participations</span></h4>\
             <div class=\"chart-box\"><canvas id=\"ts{i}\"></canvas></div></div>\n",
            logo = escape_html(&s.logo),
            name = escape_html(&s.name),
            times = s.total_participations,
            i = i,
        ));
        let quarters = js_array_str(s.points.iter().map(|p| p.quarter.as_str()));
        let collection: Vec<f64> = s.points.iter().map(|p| p.collection).collect();
        let co2: Vec<f64> = s.points.iter().map(|p| p.co2).collect();
        let people: Vec<u64> = s.points.iter().map(|p| p.participants).collect();
        scripts.push_str(&format!(
            "new Chart(document.getElementById('ts{i}'),{{type:'line',data:{{labels:{q},datasets:[\n\
             mkDs('Collection (kg)','#10B981',{c}),\n\
             mkDs('CO₂ (tonnes)','#F59E0B',{co2},{{yAxisID:'y2'}}),\n\
             mkDs('Participants','#3B82F6',{p})\n\
             ]}},options:dualAxis('Quarter','kg / people','CO₂ (tonnes)')}});\n",
            i = i,
            q = quarters,
            c = js_array_f64(&collection),
            co2 = js_array_f64(&co2),
            p = js_array_u64(&people),
        ));
    }
    if series.is_empty() {
        blocks.push_str("<p class=\"muted\">No time-series data available.</p>\n");
    }
    (blocks, scripts)
}

// ═══════════════════════════════════════════════════════════════════════
// Main report generation
// ═══════════════════════════════════════════════════════════════════════

pub fn generate_report(view: &DashboardView, options: &ReportOptions) -> String {
    let t = &view.totals;
    let eq = &view.equivalences;

    let category_cards: String = view.categories.iter().map(category_card_html).collect();
    let (series_blocks, series_scripts) = series_section_html(&view.series);

    let waste_labels = js_array_str(view.waste_chart.iter().map(|b| b.category.short_label()));
    let waste_kg: Vec<f64> = view.waste_chart.iter().map(|b| b.collection_kg).collect();
    let waste_co2: Vec<f64> = view.waste_chart.iter().map(|b| b.co2_tonnes).collect();

    let cmp_labels = js_array_str(view.comparison.iter().map(|r| r.name.as_str()));
    let cmp_plastic: Vec<f64> = view.comparison.iter().map(|r| r.plastic_kg).collect();
    let cmp_toys: Vec<f64> = view.comparison.iter().map(|r| r.toys_kg).collect();
    let cmp_co2: Vec<f64> = view.comparison.iter().map(|r| r.co2_tonnes).collect();

    let generated = match options.generated_at {
        Some(ts) => format!("Generated {} by esg-dashboard", ts.format("%Y-%m-%d %H:%M")),
        None => "Generated by esg-dashboard".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{chart_js}"></script>
<style>
*{{margin:0;padding:0;box-sizing:border-box}}
body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#f5f5f5;color:#333}}
header{{background:#1a1a2e;color:#fff;padding:24px 32px;display:flex;justify-content:space-between;align-items:flex-start;flex-wrap:wrap;gap:16px}}
header h1{{font-size:1.4em;font-weight:500}}
header p{{font-size:0.95em;opacity:0.8;margin-top:4px}}
button.export{{padding:10px 20px;color:#fff;border:none;border-radius:6px;font-weight:600;cursor:pointer;margin-left:8px}}
main{{max-width:1400px;margin:0 auto;padding:24px}}
.industry-filter{{padding:20px 24px;background:#F9FAFB;border:2px solid #E5E7EB;border-radius:8px;margin-bottom:20px}}
.industry-filter .caption{{margin-left:12px}}
.industry-buttons{{display:flex;gap:12px;flex-wrap:wrap;margin-top:12px}}
button.industry{{padding:8px 16px;background:#fff;color:#6B7280;border:1px solid #D1D5DB;border-radius:6px;font-size:0.875em;font-weight:500;cursor:pointer}}
button.industry.active{{background:#10B981;color:#fff;border-color:#10B981;font-weight:600}}
.industry-filter .hint{{font-size:0.8em;color:#9CA3AF;margin-top:12px}}
section{{background:#fff;border-radius:8px;box-shadow:0 1px 3px rgba(0,0,0,0.1);padding:24px;margin-bottom:20px}}
section h3{{font-size:1.1em;margin-bottom:16px;color:#1a1a2e;border-bottom:2px solid #e0e0e0;padding-bottom:8px}}
.score{{background:linear-gradient(135deg,#10B981 0%,#3B82F6 100%);color:#fff;text-align:center}}
.score h3{{color:#fff;border-color:rgba(255,255,255,0.4)}}
.score .value{{font-size:4em;font-weight:700}}
.grade{{display:inline-block;background:#fff;font-size:1.5em;font-weight:700;padding:8px 24px;border-radius:6px;margin:8px 0}}
.metrics-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:16px;margin-top:24px;padding:24px;background:rgba(255,255,255,0.15);border-radius:8px}}
.metric .label{{display:block;font-size:0.85em;opacity:0.9}}
.metric .value{{display:block;font-size:2.2em;font-weight:700}}
.card-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:20px}}
.card{{background:#f8f9fa;border-radius:8px;padding:20px}}
.category-head{{display:flex;align-items:center;gap:16px;margin-bottom:16px}}
.category-head .icon{{font-size:2.5em}}
.big{{font-size:2em;font-weight:700}}
.muted{{font-size:0.85em;color:#6B7280}}
.inset{{background:#fff;border-radius:6px;padding:12px;margin:12px 0}}
.notes{{font-size:0.85em;color:#374151}}
table{{width:100%;border-collapse:collapse;font-size:0.9em}}
th,td{{padding:8px 12px;text-align:left;border-bottom:1px solid #e0e0e0}}
th{{background:#f8f9fa;font-weight:600}}
td.name,td.strong,td.co2{{font-weight:600}}
td.co2{{color:#10B981}}
.badge{{padding:3px 10px;border-radius:3px;font-weight:700;font-size:0.8em;color:#fff}}
.badge-success{{background:#10B981}}
.badge-info{{background:#3B82F6}}
.badge-warning{{background:#F59E0B}}
.chart-box{{padding:8px}}
.series{{margin-bottom:32px}}
.series h4{{margin-bottom:8px}}
canvas{{width:100%!important;height:300px!important}}
.equivalences{{display:grid;grid-template-columns:repeat(auto-fit,minmax(250px,1fr));gap:24px;text-align:center}}
.equivalences .icon{{font-size:3em}}
.equivalences .big{{color:#10B981}}
footer{{text-align:center;padding:16px;color:#999;font-size:0.8em}}
</style>
</head>
<body>
<header>
 <div>
  <h1>📊 {title}</h1>
  <p>ESG performance of all participating companies and each waste type's contribution</p>
 </div>
 <div>
{export_buttons} </div>
</header>
<main>

{industry_filter}

<section class="score">
<h3>🎯 ESG Impact Score</h3>
<div>Average ESG score across all companies</div>
<div class="value">{avg_score}</div>
<div class="grade" style="color:{grade_color}">{grade_label}</div>
<div>{grade_desc}</div>
<div class="metrics-grid">
 <div class="metric"><span class="label">Companies</span><span class="value">{company_count}</span></div>
 <div class="metric"><span class="label">Total participants</span><span class="value">{participants}</span></div>
 <div class="metric"><span class="label">Total collected</span><span class="value">{collection}kg</span></div>
 <div class="metric"><span class="label">Total CO₂ reduction</span><span class="value">{co2:.1}t</span></div>
</div>
</section>

<section>
<h3>🗑️ Performance by Waste Type</h3>
<div class="card-grid">
{category_cards}
</div>
<div class="chart-box"><canvas id="wasteChart"></canvas></div>
</section>

<section>
<h3>🏆 Company Ranking: {sort_label}</h3>
<table>
<tr><th>Rank</th><th>Company</th><th>Plastic (kg)</th><th>Toys (kg)</th><th>Total (kg)</th><th>CO₂ (tonnes)</th><th>Participants</th><th>ESG score</th></tr>
{ranking_rows}</table>
</section>

<section>
<h3>📊 Waste Composition by Company</h3>
<div class="chart-box"><canvas id="compareChart"></canvas></div>
</section>

<section>
<h3>📈 Quarterly Trends</h3>
{series_blocks}</section>

<section>
<h3>🌍 Environmental Impact Equivalents</h3>
<div class="equivalences">
 <div><div class="icon">🌲</div><div class="big">{trees} trees</div><div class="muted">CO₂ absorbed by pine trees in one year</div></div>
 <div><div class="icon">🚗</div><div class="big">{cars} cars</div><div class="muted">Passenger cars off the road for one year</div></div>
 <div><div class="icon">🧊</div><div class="big">{ice}m²</div><div class="muted">Arctic sea ice preserved</div></div>
</div>
</section>

</main>
<footer>{generated}</footer>

<script>
const mkDs=(l,c,d,o)=>{{let s={{label:l,data:d,borderColor:c,backgroundColor:c,borderWidth:2,tension:0.3}};if(o)Object.assign(s,o);return s}};
const dualAxis=(xLabel,yLabel,y2Label,stacked)=>({{responsive:true,maintainAspectRatio:false,plugins:{{legend:{{position:'bottom'}}}},scales:{{x:{{stacked:!!stacked,title:{{display:true,text:xLabel}}}},y:{{stacked:!!stacked,title:{{display:true,text:yLabel}}}},y2:{{position:'right',grid:{{drawOnChartArea:false}},title:{{display:true,text:y2Label}}}}}}}});

new Chart(document.getElementById('wasteChart'),{{type:'bar',data:{{labels:{waste_labels},datasets:[
 mkDs('Collected (kg)','#10B981',{waste_kg}),
 mkDs('CO₂ reduction (tonnes)','#F59E0B',{waste_co2},{{yAxisID:'y2'}})
]}},options:dualAxis('Waste type','Collected (kg)','CO₂ reduction (tonnes)')}});

new Chart(document.getElementById('compareChart'),{{type:'bar',data:{{labels:{cmp_labels},datasets:[
 mkDs('Plastic','#10B981',{cmp_plastic},{{stack:'a'}}),
 mkDs('Toys','#F59E0B',{cmp_toys},{{stack:'a'}}),
 mkDs('CO₂','#3B82F6',{cmp_co2},{{yAxisID:'y2',stack:'b'}})
]}},options:dualAxis('Company','Collected (kg)','CO₂ (tonnes)',true)}});

{series_scripts}</script>
</body>
</html>"#,
        title = escape_html(&options.title),
        chart_js = escape_html(&options.chart_js_url),
        export_buttons = export_buttons_html(),
        industry_filter = industry_filter_html(),
        avg_score = view.average_score,
        grade_color = view.grade.color(),
        grade_label = view.grade.label(),
        grade_desc = view.grade.description(),
        company_count = view.company_count,
        participants = format_count(t.participants),
        collection = format_amount(t.collection),
        co2 = t.co2,
        category_cards = category_cards,
        sort_label = view.sort_key.label(),
        ranking_rows = ranking_rows_html(&view.ranked),
        series_blocks = series_blocks,
        trees = format_count(eq.trees),
        cars = eq.car_years_display(),
        ice = format_count(eq.ice_area_m2),
        generated = generated,
        waste_labels = waste_labels,
        waste_kg = js_array_f64(&waste_kg),
        waste_co2 = js_array_f64(&waste_co2),
        cmp_labels = cmp_labels,
        cmp_plastic = js_array_f64(&cmp_plastic),
        cmp_toys = js_array_f64(&cmp_toys),
        cmp_co2 = js_array_f64(&cmp_co2),
        series_scripts = series_scripts,
    )
}

// ═══════════════════════════════════════════════════════════════════════
// File I/O
// ═══════════════════════════════════════════════════════════════════════

pub fn save_report(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

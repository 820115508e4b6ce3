use esg_dashboard::model::{CompanyPerformance, CompanySummary, WasteSplit};
use esg_dashboard::rank::*;

fn company(id: &str, participants: u64, collection: f64, co2: f64) -> CompanySummary {
    CompanySummary {
        id: id.to_string(),
        name: id.to_uppercase(),
        logo: "🏢".to_string(),
        esg_score: 70,
        total_participations: 3,
        performance: CompanyPerformance {
            company_id: id.to_string(),
            participants,
            collection_amount: collection,
            co2_reduction: co2,
            waste_breakdown: WasteSplit::new(collection / 2.0, collection / 2.0),
            co2_detail: WasteSplit::new(co2 / 2.0, co2 / 2.0),
        },
    }
}

fn sample() -> Vec<CompanySummary> {
    vec![
        company("alpha", 100, 1000.0, 50.0),
        company("bravo", 300, 500.0, 25.0),
        company("charlie", 200, 2000.0, 10.0),
        company("delta", 200, 750.0, 40.0),
    ]
}

fn key_of(c: &CompanySummary, key: SortKey) -> f64 {
    match key {
        SortKey::Co2 => c.performance.co2_reduction,
        SortKey::Collection => c.performance.collection_amount,
        SortKey::Participants => c.performance.participants as f64,
    }
}

fn ids(ranked: &[CompanySummary]) -> Vec<&str> {
    ranked.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_rank_by_participants_example() {
    let companies = vec![company("A", 100, 1000.0, 50.0), company("B", 50, 500.0, 25.0)];
    let ranked = rank_companies(&companies, SortKey::Participants);
    assert_eq!(ids(&ranked), vec!["A", "B"]);
}

#[test]
fn test_rank_orders_descending() {
    for key in SortKey::all() {
        let ranked = rank_companies(&sample(), key);
        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(
                key_of(&pair[0], key) >= key_of(&pair[1], key),
                "{} not descending: {} before {}",
                key,
                pair[0].id,
                pair[1].id
            );
        }
    }
}

#[test]
fn test_rank_each_key() {
    assert_eq!(
        ids(&rank_companies(&sample(), SortKey::Co2)),
        vec!["alpha", "delta", "bravo", "charlie"]
    );
    assert_eq!(
        ids(&rank_companies(&sample(), SortKey::Collection)),
        vec!["charlie", "alpha", "delta", "bravo"]
    );
}

#[test]
fn test_rank_ties_break_by_id() {
    // charlie and delta both have 200 participants
    let ranked = rank_companies(&sample(), SortKey::Participants);
    assert_eq!(ids(&ranked), vec!["bravo", "charlie", "delta", "alpha"]);

    let mut reversed = sample();
    reversed.reverse();
    let ranked_rev = rank_companies(&reversed, SortKey::Participants);
    assert_eq!(ids(&ranked), ids(&ranked_rev), "Tie order should not depend on input order");
}

#[test]
fn test_rank_is_permutation_and_pure() {
    let companies = sample();
    let before = companies.clone();
    let ranked = rank_companies(&companies, SortKey::Co2);

    assert_eq!(companies, before, "Input should not be mutated");
    let mut a = ids(&ranked);
    let mut b = ids(&companies);
    a.sort();
    b.sort();
    assert_eq!(a, b);

    assert_eq!(ranked, rank_companies(&companies, SortKey::Co2));
}

#[test]
fn test_rank_empty() {
    assert!(rank_companies(&[], SortKey::Co2).is_empty());
}

#[test]
fn test_sort_key_parse() {
    assert_eq!("co2".parse::<SortKey>().unwrap(), SortKey::Co2);
    assert_eq!("Collection".parse::<SortKey>().unwrap(), SortKey::Collection);
    assert_eq!(" participants ".parse::<SortKey>().unwrap(), SortKey::Participants);
    assert!("esg".parse::<SortKey>().is_err());
    assert_eq!(SortKey::default(), SortKey::Co2);
    assert_eq!(SortKey::Collection.to_string(), "collection");
}

#[test]
fn test_rank_labels() {
    assert_eq!(rank_label(0), "🥇");
    assert_eq!(rank_label(1), "🥈");
    assert_eq!(rank_label(2), "🥉");
    assert_eq!(rank_label(3), "4");
    assert_eq!(rank_label(9), "10");
}

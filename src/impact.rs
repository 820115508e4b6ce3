use crate::aggregate::Totals;
use serde::Serialize;

/// kg of CO₂ a pine tree absorbs in one year.
pub const KG_CO2_PER_TREE_YEAR: f64 = 22.0;
/// Tonnes of CO₂ a passenger car emits in one year of driving.
pub const TONNES_CO2_PER_CAR_YEAR: f64 = 4.6;
/// m² of arctic sea ice preserved per kg of avoided CO₂.
pub const ICE_M2_PER_KG_CO2: f64 = 0.00744;

/// `round(part / total * 100)`, or `None` when the total cannot divide.
pub fn share_percent(part: f64, total: f64) -> Option<u32> {
    if total == 0.0 || !total.is_finite() || !part.is_finite() {
        return None;
    }
    Some((part / total * 100.0).round() as u32)
}

/// Render an optional percentage, "N/A" when absent.
pub fn format_share(share: Option<u32>) -> String {
    match share {
        Some(pct) => format!("{}%", pct),
        None => "N/A".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Plastic,
    Toys,
}

impl WasteCategory {
    pub fn all() -> [WasteCategory; 2] {
        [WasteCategory::Plastic, WasteCategory::Toys]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Plastic => "Plastic fibre upcycling",
            Self::Toys => "Toy circulation",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Plastic => "Plastic",
            Self::Toys => "Toys",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Plastic => "🧶",
            Self::Toys => "🧸",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Plastic => "Vests, gloves, eco bags and more",
            Self::Toys => "Reuse, upcycling, recycling",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Plastic => "#10B981",
            Self::Toys => "#F59E0B",
        }
    }

    pub fn notes(&self) -> &'static [&'static str] {
        match self {
            Self::Plastic => &["UF coefficient 2.5 applied", "PET bottles, HDPE containers"],
            Self::Toys => &[
                "Reuse (RBF 3.0)",
                "Upcycling (UF 2.5)",
                "Recycling (base 1.0)",
            ],
        }
    }

    fn amounts(&self, totals: &Totals) -> (f64, f64) {
        match self {
            Self::Plastic => (totals.plastic_total, totals.plastic_co2),
            Self::Toys => (totals.toys_total, totals.toys_co2),
        }
    }
}

/// One waste-type card: amounts and their share of the grand totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: WasteCategory,
    pub collection_kg: f64,
    pub collection_share: Option<u32>,
    pub co2_tonnes: f64,
    pub co2_share: Option<u32>,
}

pub fn category_share(category: WasteCategory, totals: &Totals) -> CategoryShare {
    let (kg, co2) = category.amounts(totals);
    CategoryShare {
        category,
        collection_kg: kg,
        collection_share: share_percent(kg, totals.collection),
        co2_tonnes: co2,
        co2_share: share_percent(co2, totals.co2),
    }
}

pub fn category_shares(totals: &Totals) -> Vec<CategoryShare> {
    WasteCategory::all()
        .iter()
        .map(|c| category_share(*c, totals))
        .collect()
}

/// Everyday equivalents of the total avoided CO₂.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Equivalences {
    pub trees: u64,
    pub car_years: f64,
    pub ice_area_m2: u64,
}

impl Equivalences {
    pub fn from_co2_tonnes(co2_tonnes: f64) -> Self {
        let co2_kg = co2_tonnes * 1000.0;
        Equivalences {
            trees: (co2_kg / KG_CO2_PER_TREE_YEAR).round() as u64,
            car_years: co2_tonnes / TONNES_CO2_PER_CAR_YEAR,
            ice_area_m2: (co2_kg * ICE_M2_PER_KG_CO2).round() as u64,
        }
    }

    /// Car-years with one decimal place.
    pub fn car_years_display(&self) -> String {
        format!("{:.1}", self.car_years)
    }
}

/// Round to `places` decimals, matching how chart values are prepared.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

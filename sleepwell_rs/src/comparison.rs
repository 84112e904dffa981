//! Side-by-side comparison data.
//!
//! Two fixed product lists defined at build time. A view toggle selects
//! which list is shown; nothing here is ever mutated.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

const IMAGE_BASE: &str = "https://ptgmltivisbtvmoxwnhd.supabase.co/storage/v1/object/public/product-images/f8d239eb-4cb8-4b33-91ab-5219c8ee33b4";

/// Feature summary for a comparison card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Features {
    pub support: &'static str,
    pub cooling: &'static str,
    pub material: &'static str,
    pub best_for: &'static str,
}

/// Static descriptive record used only for side-by-side display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonProduct {
    pub name: &'static str,
    /// File name inside the product image bucket
    pub image_file: &'static str,
    pub price: &'static str,
    pub features: Features,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    /// Detail page path
    pub link: &'static str,
}

impl ComparisonProduct {
    pub fn image_url(&self) -> String {
        format!("{}/{}", IMAGE_BASE, self.image_file)
    }
}

pub const PILLOWS: &[ComparisonProduct] = &[
    ComparisonProduct {
        name: "Cloud Memory Foam",
        image_file: "memory-foam-pillow.jpg",
        price: "$79.99",
        features: Features {
            support: "High",
            cooling: "Medium",
            material: "Memory Foam",
            best_for: "All sleepers",
        },
        pros: &["Adaptive support", "Pressure relief", "Hypoallergenic"],
        cons: &["May retain heat", "Heavier"],
        link: "/products/cloud-memory-foam-pillow",
    },
    ComparisonProduct {
        name: "CoolBreeze Gel",
        image_file: "cooling-gel-pillow.jpg",
        price: "$89.99",
        features: Features {
            support: "High",
            cooling: "Excellent",
            material: "Gel-infused",
            best_for: "Hot sleepers",
        },
        pros: &["Stays cool", "Great support", "Temperature regulation"],
        cons: &["Higher price", "Firmer feel"],
        link: "/products/coolbreeze-gel-pillow",
    },
    ComparisonProduct {
        name: "Cervical Support",
        image_file: "cervical-pillow.jpg",
        price: "$94.99",
        features: Features {
            support: "Maximum",
            cooling: "Medium",
            material: "Ergonomic foam",
            best_for: "Neck pain",
        },
        pros: &["Medical-grade", "Perfect alignment", "Pain relief"],
        cons: &["Takes adjustment", "Specific shape"],
        link: "/products/cervical-support-pillow",
    },
];

pub const TOPPERS: &[ComparisonProduct] = &[
    ComparisonProduct {
        name: "Memory Foam Topper",
        image_file: "memory-foam-topper.jpg",
        price: "From $129.99",
        features: Features {
            support: "High",
            cooling: "Medium",
            material: "3\" Memory Foam",
            best_for: "Pressure relief",
        },
        pros: &["Transforms mattress", "Pressure relief", "Affordable"],
        cons: &["Break-in period", "May retain warmth"],
        link: "/products/premium-memory-foam-topper",
    },
    ComparisonProduct {
        name: "Cooling Gel Topper",
        image_file: "cooling-topper.jpg",
        price: "From $159.99",
        features: Features {
            support: "High",
            cooling: "Excellent",
            material: "2\" Gel Layer",
            best_for: "Hot sleepers",
        },
        pros: &["Temperature control", "Breathable", "Great support"],
        cons: &["Higher cost", "Thinner profile"],
        link: "/products/cooling-gel-mattress-topper",
    },
];

/// Which comparison list is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonView {
    #[default]
    Pillows,
    Toppers,
}

impl ComparisonView {
    pub const ALL: [ComparisonView; 2] = [ComparisonView::Pillows, ComparisonView::Toppers];

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonView::Pillows => "pillows",
            ComparisonView::Toppers => "toppers",
        }
    }

    /// Tab button label.
    pub fn label(self) -> &'static str {
        match self {
            ComparisonView::Pillows => "Pillows",
            ComparisonView::Toppers => "Mattress Toppers",
        }
    }

    pub fn other(self) -> Self {
        match self {
            ComparisonView::Pillows => ComparisonView::Toppers,
            ComparisonView::Toppers => ComparisonView::Pillows,
        }
    }
}

impl FromStr for ComparisonView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pillows" => Ok(ComparisonView::Pillows),
            "toppers" => Ok(ComparisonView::Toppers),
            other => Err(format!("unknown comparison view {other:?} (expected pillows or toppers)")),
        }
    }
}

impl fmt::Display for ComparisonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed list for `view`.
pub fn comparison_products(view: ComparisonView) -> &'static [ComparisonProduct] {
    match view {
        ComparisonView::Pillows => PILLOWS,
        ComparisonView::Toppers => TOPPERS,
    }
}

/// Tab state of the comparison tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComparisonTable {
    active: ComparisonView,
}

impl ComparisonTable {
    pub fn new(active: ComparisonView) -> Self {
        Self { active }
    }

    pub fn active(&self) -> ComparisonView {
        self.active
    }

    pub fn select(&mut self, view: ComparisonView) {
        self.active = view;
    }

    /// Switch to the other tab and return it.
    pub fn toggle(&mut self) -> ComparisonView {
        self.active = self.active.other();
        self.active
    }

    /// Products of the active tab.
    pub fn products(&self) -> &'static [ComparisonProduct] {
        comparison_products(self.active)
    }
}

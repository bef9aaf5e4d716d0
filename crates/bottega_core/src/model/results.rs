//! P&L results and the views derived from them
//!
//! `PnlResult` is the engine output. The statement and cost breakdown are
//! reshapings of the same numbers for display; they never recompute anything.

use serde::{Deserialize, Serialize};

/// Monthly profit-and-loss for one parameter set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PnlResult {
    /// Trading days per month, not rounded
    pub open_days_per_month: f64,

    pub rev_menu: f64,
    pub rev_cafe: f64,
    pub rev_shop: f64,
    pub total_revenue: f64,

    pub food_menu: f64,
    pub food_cafe: f64,
    pub food_shop: f64,
    pub total_food_cost: f64,

    pub labor_total: f64,
    pub fixed_cost_total: f64,

    /// Revenue minus food cost, before labor and fixed costs
    pub gross_profit: f64,
    /// Gross profit as a fraction of revenue; 0.0 when there is no revenue
    pub gross_margin_pct: f64,
    pub ebitda: f64,

    /// Revenue at which EBITDA is zero; `None` when the margin is not positive
    pub break_even_sales: Option<f64>,
    /// Revenue over break-even; `None` unless break-even is strictly positive
    pub safety_ratio: Option<f64>,
}

/// A row of the P&L statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    RevenueMenu,
    RevenueCafe,
    RevenueShop,
    TotalRevenue,
    FoodCostMenu,
    FoodCostCafe,
    FoodCostShop,
    TotalFoodCost,
    GrossMargin,
    Labor,
    FixedCosts,
    Ebitda,
}

impl LineItem {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RevenueMenu => "Revenue - Menu",
            Self::RevenueCafe => "Revenue - Café/Bakery",
            Self::RevenueShop => "Revenue - Shop",
            Self::TotalRevenue => "TOTAL REVENUE",
            Self::FoodCostMenu => "Food cost - Menu",
            Self::FoodCostCafe => "Food cost - Café/Bakery",
            Self::FoodCostShop => "Food cost - Shop",
            Self::TotalFoodCost => "TOTAL FOOD COST",
            Self::GrossMargin => "GROSS MARGIN (Revenue - Food)",
            Self::Labor => "Total labor cost",
            Self::FixedCosts => "Fixed costs",
            Self::Ebitda => "EBITDA",
        }
    }

    /// Whether the row is a subtotal or total
    #[must_use]
    pub fn is_total(self) -> bool {
        matches!(
            self,
            Self::TotalRevenue | Self::TotalFoodCost | Self::GrossMargin | Self::Ebitda
        )
    }
}

/// One statement row: revenues positive, costs negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub item: LineItem,
    pub amount: f64,
}

/// Totals of the three cost families
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub food: f64,
    pub labor: f64,
    pub fixed: f64,
}

impl CostBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.food + self.labor + self.fixed
    }
}

impl PnlResult {
    /// Labor plus fixed costs: what the gross margin has to cover
    #[must_use]
    pub fn operating_costs(&self) -> f64 {
        self.labor_total + self.fixed_cost_total
    }

    /// EBITDA is zero or better
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.ebitda >= 0.0
    }

    /// Revenue minus break-even sales, in currency.
    ///
    /// Positive above break-even, negative below it. This is an amount, not
    /// the dimensionless `safety_ratio`.
    #[must_use]
    pub fn revenue_above_break_even(&self) -> Option<f64> {
        self.break_even_sales.map(|be| self.total_revenue - be)
    }

    /// The P&L statement in display order, with costs as negative amounts
    #[must_use]
    pub fn statement(&self) -> Vec<StatementLine> {
        let line = |item, amount| StatementLine { item, amount };
        vec![
            line(LineItem::RevenueMenu, self.rev_menu),
            line(LineItem::RevenueCafe, self.rev_cafe),
            line(LineItem::RevenueShop, self.rev_shop),
            line(LineItem::TotalRevenue, self.total_revenue),
            line(LineItem::FoodCostMenu, -self.food_menu),
            line(LineItem::FoodCostCafe, -self.food_cafe),
            line(LineItem::FoodCostShop, -self.food_shop),
            line(LineItem::TotalFoodCost, -self.total_food_cost),
            line(LineItem::GrossMargin, self.gross_profit),
            line(LineItem::Labor, -self.labor_total),
            line(LineItem::FixedCosts, -self.fixed_cost_total),
            line(LineItem::Ebitda, self.ebitda),
        ]
    }

    #[must_use]
    pub fn cost_breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            food: self.total_food_cost,
            labor: self.labor_total,
            fixed: self.fixed_cost_total,
        }
    }
}

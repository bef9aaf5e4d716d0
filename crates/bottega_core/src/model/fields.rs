//! Field identifiers for the parameter set.
//!
//! `ParamField` names every numeric input so that sweeps, validation and the
//! builder can address fields as data instead of hard-coding struct members.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Every numeric input of a [`ParameterSet`](super::ParameterSet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    // Operating cadence
    DaysOpenPerWeek,
    WeeksPerMonth,
    // Daily volumes
    MenusPerDay,
    CafeTicketsPerDay,
    ShopTicketsPerDay,
    // Prices
    MenuPrice,
    CafeTicketAvg,
    ShopTicketAvg,
    // Food cost
    MenuFoodCostPerUnit,
    CafeFoodCostPct,
    ShopFoodCostPct,
    // Labor
    CookGrossSalary,
    PartnerGrossSalary,
    PartnerCashExtra,
    OtherLaborCost,
    SsFactor,
    // Fixed costs
    Rent,
    Utilities,
    Insurance,
    Accounting,
    PosAndBookingSaas,
    OtherFixedOverheads,
}

/// Admissible range for a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Whole number of days, 0 through 7
    Weekdays,
    /// Strictly greater than zero
    Positive,
    /// Zero or greater
    NonNegative,
    /// Ratio in [0, 1]
    Fraction,
    /// Multiplier of at least 1.0
    AtLeastOne,
}

impl Domain {
    /// Returns the reason `value` falls outside this domain, if it does.
    #[must_use]
    pub fn check(self, value: f64) -> Option<&'static str> {
        if !value.is_finite() {
            return Some("must be a finite number");
        }
        match self {
            Domain::Weekdays if !(0.0..=7.0).contains(&value) || value.fract() != 0.0 => {
                Some("must be a whole number of days between 0 and 7")
            }
            Domain::Positive if value <= 0.0 => Some("must be greater than zero"),
            Domain::NonNegative if value < 0.0 => Some("must not be negative"),
            Domain::Fraction if !(0.0..=1.0).contains(&value) => {
                Some("must be a fraction between 0 and 1")
            }
            Domain::AtLeastOne if value < 1.0 => Some("must be at least 1.0"),
            _ => None,
        }
    }
}

impl ParamField {
    pub const COUNT: usize = 22;

    /// All fields in declaration order
    pub const ALL: [ParamField; Self::COUNT] = [
        ParamField::DaysOpenPerWeek,
        ParamField::WeeksPerMonth,
        ParamField::MenusPerDay,
        ParamField::CafeTicketsPerDay,
        ParamField::ShopTicketsPerDay,
        ParamField::MenuPrice,
        ParamField::CafeTicketAvg,
        ParamField::ShopTicketAvg,
        ParamField::MenuFoodCostPerUnit,
        ParamField::CafeFoodCostPct,
        ParamField::ShopFoodCostPct,
        ParamField::CookGrossSalary,
        ParamField::PartnerGrossSalary,
        ParamField::PartnerCashExtra,
        ParamField::OtherLaborCost,
        ParamField::SsFactor,
        ParamField::Rent,
        ParamField::Utilities,
        ParamField::Insurance,
        ParamField::Accounting,
        ParamField::PosAndBookingSaas,
        ParamField::OtherFixedOverheads,
    ];

    /// Position of this field in [`ParamField::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case identifier, as used in scenario files
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DaysOpenPerWeek => "days_open_per_week",
            Self::WeeksPerMonth => "weeks_per_month",
            Self::MenusPerDay => "menus_per_day",
            Self::CafeTicketsPerDay => "cafe_tickets_per_day",
            Self::ShopTicketsPerDay => "shop_tickets_per_day",
            Self::MenuPrice => "menu_price",
            Self::CafeTicketAvg => "cafe_ticket_avg",
            Self::ShopTicketAvg => "shop_ticket_avg",
            Self::MenuFoodCostPerUnit => "menu_food_cost_per_unit",
            Self::CafeFoodCostPct => "cafe_food_cost_pct",
            Self::ShopFoodCostPct => "shop_food_cost_pct",
            Self::CookGrossSalary => "cook_gross_salary",
            Self::PartnerGrossSalary => "partner_gross_salary",
            Self::PartnerCashExtra => "partner_cash_extra",
            Self::OtherLaborCost => "other_labor_cost",
            Self::SsFactor => "ss_factor",
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::Insurance => "insurance",
            Self::Accounting => "accounting",
            Self::PosAndBookingSaas => "pos_and_booking_saas",
            Self::OtherFixedOverheads => "other_fixed_overheads",
        }
    }

    /// Human-readable label for tables
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DaysOpenPerWeek => "Days open / week",
            Self::WeeksPerMonth => "Weeks / month",
            Self::MenusPerDay => "Menus / day",
            Self::CafeTicketsPerDay => "Café tickets / day",
            Self::ShopTicketsPerDay => "Shop tickets / day",
            Self::MenuPrice => "Menu price",
            Self::CafeTicketAvg => "Café avg ticket",
            Self::ShopTicketAvg => "Shop avg ticket",
            Self::MenuFoodCostPerUnit => "Menu food cost / unit",
            Self::CafeFoodCostPct => "Café food cost %",
            Self::ShopFoodCostPct => "Shop food cost %",
            Self::CookGrossSalary => "Cook gross salary",
            Self::PartnerGrossSalary => "Partner gross salary",
            Self::PartnerCashExtra => "Partner cash extra",
            Self::OtherLaborCost => "Other labor",
            Self::SsFactor => "Employer cost factor",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Accounting => "Accounting",
            Self::PosAndBookingSaas => "POS + booking SaaS",
            Self::OtherFixedOverheads => "Other fixed overheads",
        }
    }

    /// Admissible range for this field
    #[must_use]
    pub fn domain(self) -> Domain {
        match self {
            Self::DaysOpenPerWeek => Domain::Weekdays,
            Self::WeeksPerMonth => Domain::Positive,
            Self::CafeFoodCostPct | Self::ShopFoodCostPct => Domain::Fraction,
            Self::SsFactor => Domain::AtLeastOne,
            _ => Domain::NonNegative,
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamField {
    type Err = ParamError;

    /// Accepts the snake-case name or its kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| ParamError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, field) in ParamField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i, "{field} out of order");
        }
    }

    #[test]
    fn test_parse_accepts_kebab_case() {
        assert_eq!(
            "shop-tickets-per-day".parse::<ParamField>().unwrap(),
            ParamField::ShopTicketsPerDay
        );
        assert_eq!("SS_FACTOR".parse::<ParamField>().unwrap(), ParamField::SsFactor);
        assert!("menus".parse::<ParamField>().is_err());
    }

    #[test]
    fn test_serde_name_matches_name() {
        for field in ParamField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.name()));
        }
    }

    #[test]
    fn test_domain_checks() {
        assert!(Domain::Weekdays.check(5.0).is_none());
        assert!(Domain::Weekdays.check(5.5).is_some());
        assert!(Domain::Weekdays.check(8.0).is_some());
        assert!(Domain::Positive.check(0.0).is_some());
        assert!(Domain::NonNegative.check(0.0).is_none());
        assert!(Domain::NonNegative.check(-0.01).is_some());
        assert!(Domain::Fraction.check(1.0).is_none());
        assert!(Domain::Fraction.check(1.01).is_some());
        assert!(Domain::AtLeastOne.check(0.99).is_some());
        assert!(Domain::NonNegative.check(f64::NAN).is_some());
    }
}

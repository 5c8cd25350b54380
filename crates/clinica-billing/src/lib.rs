//! # Clinica Billing
//!
//! Tiered daily-rate pricing for hospital stays.
//!
//! ## Pricing Formula
//!
//! ```text
//! Total = Daily × Days
//! Daily = tier value if a tier contains Days, else base value
//! ```
//!
//! The breakdown compares against pure base pricing:
//! - Base cost: base value × days
//! - Tier adjustment: total − base cost
//! - Tier percentage: adjustment / base cost × 100 (0 when base cost is 0)

pub mod config;
pub mod format;
pub mod pricing;
pub mod rates;

use clinica_common::{BedType, CalculationResult, PaymentType, Result, StayLength};
use format::{format_currency, format_percentage, CurrencyFormat};
use pricing::Comparison;
use rates::RateTable;
use serde::Serialize;
use tracing::{debug, instrument};

pub use config::BillingConfig;

/// Calculation result with display strings in the configured locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub result: CalculationResult,
    pub total: String,
    pub daily: String,
    pub base: String,
    pub adjustment: String,
    pub percentage: String,
}

impl Quote {
    pub fn new(result: CalculationResult, format: &CurrencyFormat) -> Self {
        Self {
            total: format_currency(result.total_cost, format),
            daily: format_currency(result.daily_value, format),
            base: format_currency(result.breakdown.base_cost, format),
            adjustment: format_currency(result.breakdown.tier_adjustment, format),
            percentage: format_percentage(result.breakdown.tier_percentage, format),
            result,
        }
    }
}

/// Daily-rate calculator service
pub struct DailyRateCalculator {
    config: BillingConfig,
    table: RateTable,
    currency: CurrencyFormat,
}

impl DailyRateCalculator {
    pub fn new(config: BillingConfig, table: RateTable) -> Self {
        let currency = config.locale.currency_format();
        Self {
            config,
            table,
            currency,
        }
    }

    /// Load the rate table named by `config`
    pub fn from_config(config: BillingConfig) -> Result<Self> {
        let table = RateTable::from_json_file(&config.rates_file, config.tier_overlap)?;
        Ok(Self::new(config, table))
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Price a stay; `Ok(None)` when the pair is not configured
    #[instrument(skip(self))]
    pub fn calculate(
        &self,
        payment_type: PaymentType,
        bed_type: BedType,
        days: u32,
    ) -> Result<Option<CalculationResult>> {
        let stay = self.stay_length(days)?;
        let result = pricing::resolve(self.table.configs(), payment_type, bed_type, stay.days())?;
        if result.is_none() {
            debug!("Rate not configured");
        }
        Ok(result)
    }

    /// Price a stay under every payment type
    #[instrument(skip(self))]
    pub fn compare(&self, bed_type: BedType, days: u32) -> Result<Comparison> {
        let stay = self.stay_length(days)?;
        let comparison = pricing::compare(self.table.configs(), bed_type, stay.days())?;
        debug!(
            configured = comparison.len(),
            missing = ?comparison.missing(),
            "Comparison computed"
        );
        Ok(comparison)
    }

    /// Price a stay and format it for display
    pub fn quote(
        &self,
        payment_type: PaymentType,
        bed_type: BedType,
        days: u32,
    ) -> Result<Option<Quote>> {
        Ok(self
            .calculate(payment_type, bed_type, days)?
            .map(|r| Quote::new(r, &self.currency)))
    }

    fn stay_length(&self, days: u32) -> Result<StayLength> {
        StayLength::new(days, self.config.max_stay_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinica_common::{ClinicaError, DailyRateConfig};
    use rates::TierOverlapPolicy;
    use rust_decimal_macros::dec;

    fn calculator(config: BillingConfig) -> DailyRateCalculator {
        let table = RateTable::new(
            vec![
                DailyRateConfig::new(PaymentType::Private, BedType::Standard, dec!(200))
                    .with_tier(1, 3, dec!(200))
                    .with_tier(4, 10, dec!(180)),
                DailyRateConfig::new(PaymentType::Sus, BedType::Standard, dec!(0)),
            ],
            TierOverlapPolicy::Reject,
        )
        .unwrap();
        DailyRateCalculator::new(config, table)
    }

    #[test]
    fn test_calculate() {
        let calc = calculator(BillingConfig::default());
        let result = calc
            .calculate(PaymentType::Private, BedType::Standard, 5)
            .unwrap()
            .unwrap();
        assert_eq!(result.total_cost, dec!(900));

        assert!(calc
            .calculate(PaymentType::Insurance, BedType::Isolation, 5)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_rejects_out_of_range_days() {
        let calc = calculator(BillingConfig {
            max_stay_days: 30,
            ..BillingConfig::default()
        });

        assert!(matches!(
            calc.calculate(PaymentType::Private, BedType::Standard, 0),
            Err(ClinicaError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.compare(BedType::Standard, 31),
            Err(ClinicaError::InvalidArgument(_))
        ));
        assert!(calc.compare(BedType::Standard, 30).is_ok());
    }

    #[test]
    fn test_compare() {
        let calc = calculator(BillingConfig::default());
        let comparison = calc.compare(BedType::Standard, 5).unwrap();

        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison.missing(), vec![PaymentType::Insurance]);
        assert_eq!(comparison.cheapest().unwrap().0, PaymentType::Sus);
    }

    #[test]
    fn test_quote_pt_br() {
        let calc = calculator(BillingConfig::default());
        let quote = calc
            .quote(PaymentType::Private, BedType::Standard, 5)
            .unwrap()
            .unwrap();

        assert_eq!(quote.total, "R$\u{a0}900,00");
        assert_eq!(quote.daily, "R$\u{a0}180,00");
        assert_eq!(quote.base, "R$\u{a0}1.000,00");
        assert_eq!(quote.adjustment, "-R$\u{a0}100,00");
        assert_eq!(quote.percentage, "-10,0%");
    }

    #[test]
    fn test_quote_en_us() {
        let calc = calculator(BillingConfig {
            locale: format::Locale::EnUs,
            ..BillingConfig::default()
        });
        let quote = calc
            .quote(PaymentType::Sus, BedType::Standard, 10)
            .unwrap()
            .unwrap();

        assert_eq!(quote.total, "$0.00");
        assert_eq!(quote.percentage, "0.0%");
    }

    #[test]
    fn test_overflowing_rate_is_an_error() {
        let json = r#"[
            {"payment_type": "PRIVATE", "bed_type": "ICU", "base_value": "79228162514264337593543950335"}
        ]"#;
        let table = RateTable::from_json_str(json, TierOverlapPolicy::Reject).unwrap();
        let calc = DailyRateCalculator::new(BillingConfig::default(), table);

        assert!(matches!(
            calc.calculate(PaymentType::Private, BedType::Icu, 2),
            Err(ClinicaError::Pricing(_))
        ));
        assert!(matches!(
            calc.quote(PaymentType::Private, BedType::Icu, 2),
            Err(ClinicaError::Pricing(_))
        ));
        assert!(matches!(
            calc.compare(BedType::Icu, 2),
            Err(ClinicaError::Pricing(_))
        ));
        assert!(calc.calculate(PaymentType::Private, BedType::Icu, 1).is_ok());
    }

    #[test]
    fn test_out_of_range_percentage_is_an_error() {
        let json = r#"[
            {
                "payment_type": "SUS",
                "bed_type": "ICU",
                "base_value": "0.0000000000000000000000000001",
                "tiers": [{"min_days": 1, "max_days": 1, "value": "10000000000000000000000000000"}]
            }
        ]"#;
        let table = RateTable::from_json_str(json, TierOverlapPolicy::Reject).unwrap();
        let calc = DailyRateCalculator::new(BillingConfig::default(), table);

        assert!(matches!(
            calc.calculate(PaymentType::Sus, BedType::Icu, 1),
            Err(ClinicaError::Pricing(_))
        ));
    }

    #[test]
    fn test_from_config_missing_file() {
        let err = DailyRateCalculator::from_config(BillingConfig {
            rates_file: "/nonexistent/clinica/rates.json".to_string(),
            ..BillingConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, ClinicaError::Storage(_)));
    }
}

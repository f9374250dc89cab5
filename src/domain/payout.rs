//! Financial valuation of generated slips.
//!
//! A slip is valued from the odds of its chosen outcomes, a flat stake and a
//! leg-count bonus schedule:
//!
//! ```text
//! gross_profit   = total_odds * stake - stake
//! win_bonus      = max(0, gross_profit * bonus_percent / 100)
//! gross_winnings = gross_profit + win_bonus
//! tax            = gross_winnings * tax_rate   (only when gross_winnings > 0)
//! payout         = gross_winnings - tax + stake
//! ```
//!
//! No rounding is applied. The bonus schedule and tax rate are configuration
//! data ([`PayoutRules`]) and never reach the sampling code.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{Amount, Odds, Stake};
use super::slip::Slip;

/// Withholding tax on positive gross winnings.
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.12);

/// Smallest accumulator that earns a bonus.
pub const DEFAULT_BONUS_FIRST_LEG: u32 = 3;

/// Bonus for accumulators longer than the table.
pub const DEFAULT_BONUS_CAP: u32 = 1000;

/// Bonus percent for 3, 4, ..., 40 legs.
pub const DEFAULT_BONUS_PERCENTS: [u32; 38] = [
    3, 5, 10, 15, 20, 25, 30, 35, 40, 45, // 3-12
    50, 60, 70, 80, 90, 100, 110, 120, 130, 140, // 13-22
    150, 160, 170, 180, 190, 200, 215, 230, 245, 260, // 23-32
    280, 300, 325, 350, 375, 400, 450, 500, // 33-40
];

/// Accumulator bonus by leg count.
///
/// Slips shorter than `first_leg` earn nothing, `percents[i]` applies to
/// `first_leg + i` legs and anything longer than the table earns `cap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusSchedule {
    pub first_leg: u32,
    pub percents: Vec<u32>,
    pub cap: u32,
}

impl BonusSchedule {
    /// Check the schedule never decreases, including the step to `cap`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonMonotonicBonus`] naming the first leg count
    /// whose percent is lower than the one before it.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut previous = 0;
        for (offset, percent) in self.percents.iter().chain(std::iter::once(&self.cap)).enumerate() {
            if *percent < previous {
                return Err(DomainError::NonMonotonicBonus {
                    legs: self.first_leg + offset as u32,
                });
            }
            previous = *percent;
        }
        Ok(())
    }

    /// Last leg count covered by the table.
    #[must_use]
    pub fn last_leg(&self) -> Option<u32> {
        let len = u32::try_from(self.percents.len()).ok()?;
        len.checked_sub(1).map(|last| self.first_leg + last)
    }

    /// Bonus percent for a slip with `legs` outcomes.
    #[must_use]
    pub fn percent_for(&self, legs: usize) -> u32 {
        let first = self.first_leg as usize;
        if legs < first {
            return 0;
        }
        self.percents.get(legs - first).copied().unwrap_or(self.cap)
    }
}

impl Default for BonusSchedule {
    fn default() -> Self {
        Self {
            first_leg: DEFAULT_BONUS_FIRST_LEG,
            percents: DEFAULT_BONUS_PERCENTS.to_vec(),
            cap: DEFAULT_BONUS_CAP,
        }
    }
}

/// Business rules applied during valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutRules {
    pub tax_rate: Decimal,
    pub bonus: BonusSchedule,
}

impl PayoutRules {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTaxRate`] for rates outside `[0, 1]` and
    /// [`DomainError::NonMonotonicBonus`] for a decreasing schedule.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(DomainError::InvalidTaxRate {
                rate: self.tax_rate,
            });
        }
        self.bonus.validate()
    }
}

impl Default for PayoutRules {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            bonus: BonusSchedule::default(),
        }
    }
}

/// Financial breakdown of one slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    pub total_odds: Odds,
    pub stake: Amount,
    pub legs: usize,
    pub bonus_percent: u32,
    pub win_bonus: Amount,
    pub tax: Amount,
    pub payout: Amount,
}

impl Valuation {
    /// Profit before bonus and tax.
    #[must_use]
    pub fn gross_profit(&self) -> Amount {
        self.total_odds.saturating_mul(self.stake) - self.stake
    }

    /// Profit plus bonus, before tax.
    #[must_use]
    pub fn gross_winnings(&self) -> Amount {
        self.gross_profit().saturating_add(self.win_bonus)
    }
}

/// Values slips against a set of [`PayoutRules`].
#[derive(Debug, Clone, Default)]
pub struct PayoutCalculator {
    rules: PayoutRules,
}

impl PayoutCalculator {
    /// Create a calculator.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `rules` fail validation.
    pub fn new(rules: PayoutRules) -> Result<Self, DomainError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    #[must_use]
    pub const fn rules(&self) -> &PayoutRules {
        &self.rules
    }

    /// Bonus percent for `legs` under the configured schedule.
    #[must_use]
    pub fn bonus_percent(&self, legs: usize) -> u32 {
        self.rules.bonus.percent_for(legs)
    }

    /// Value one slip. Pure: the same slip and stake always give the same result.
    #[must_use]
    pub fn valuate(&self, slip: &Slip, stake: Stake) -> Valuation {
        let stake = stake.amount();
        let total_odds = slip
            .outcomes()
            .iter()
            .map(|o| o.fixture().odds_for(&o.code()))
            .fold(Decimal::ONE, Decimal::saturating_mul);
        let legs = slip.legs();
        let bonus_percent = self.bonus_percent(legs);

        let gross_profit = total_odds.saturating_mul(stake) - stake;
        let win_bonus = (gross_profit.saturating_mul(Decimal::from(bonus_percent)) / dec!(100))
            .max(Decimal::ZERO);
        let gross_winnings = gross_profit.saturating_add(win_bonus);
        let tax = if gross_winnings > Decimal::ZERO {
            gross_winnings * self.rules.tax_rate
        } else {
            Decimal::ZERO
        };
        let payout = (gross_winnings - tax).saturating_add(stake);

        Valuation {
            total_odds,
            stake,
            legs,
            bonus_percent,
            win_bonus,
            tax,
            payout,
        }
    }

    /// Value every slip in place.
    pub fn valuate_all(&self, slips: &mut [Slip], stake: Stake) {
        for slip in slips.iter_mut() {
            let valuation = self.valuate(slip, stake);
            slip.apply_valuation(valuation);
        }
    }
}

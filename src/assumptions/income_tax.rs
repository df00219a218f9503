//! Progressive income tax and one-fifth averaging for lump sums
//!
//! The schedule is a fixed approximation of the German tariff: five brackets,
//! each a closed-form function of the taxable income.

/// Closed-form tax formula applied within one bracket
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BracketFormula {
    /// Tax-free allowance
    Zero,
    /// `(a * t + b) * t + c` with `t = (income - offset) / 10_000`
    Quadratic { offset: f64, a: f64, b: f64, c: f64 },
    /// `rate * income - deduction`
    Linear { rate: f64, deduction: f64 },
}

impl BracketFormula {
    fn apply(&self, income: f64) -> f64 {
        match *self {
            BracketFormula::Zero => 0.0,
            BracketFormula::Quadratic { offset, a, b, c } => {
                let t = (income - offset) / 10_000.0;
                (a * t + b) * t + c
            }
            BracketFormula::Linear { rate, deduction } => rate * income - deduction,
        }
    }
}

/// One bracket of the tariff. `upper_bound` is inclusive; `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub upper_bound: Option<f64>,
    pub formula: BracketFormula,
}

/// Ordered bracket table
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeTaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl IncomeTaxSchedule {
    /// Build a schedule from brackets ordered by ascending upper bound.
    /// The last bracket should be unbounded.
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    /// Tariff used for every simulated year
    pub fn german_2025() -> Self {
        Self::new(vec![
            TaxBracket {
                upper_bound: Some(11_784.0),
                formula: BracketFormula::Zero,
            },
            TaxBracket {
                upper_bound: Some(17_005.0),
                formula: BracketFormula::Quadratic {
                    offset: 11_784.0,
                    a: 954.8,
                    b: 1_400.0,
                    c: 0.0,
                },
            },
            TaxBracket {
                upper_bound: Some(66_760.0),
                formula: BracketFormula::Quadratic {
                    offset: 17_005.0,
                    a: 181.19,
                    b: 2_397.0,
                    c: 991.21,
                },
            },
            TaxBracket {
                upper_bound: Some(277_825.0),
                formula: BracketFormula::Linear {
                    rate: 0.42,
                    deduction: 10_636.31,
                },
            },
            TaxBracket {
                upper_bound: None,
                formula: BracketFormula::Linear {
                    rate: 0.45,
                    deduction: 18_971.06,
                },
            },
        ])
    }

    /// Upper bounds of all bounded brackets, in order
    pub fn boundaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.brackets.iter().filter_map(|b| b.upper_bound)
    }

    /// Income tax owed on `income`
    pub fn progressive_income_tax(&self, income: f64) -> f64 {
        let bracket = self
            .brackets
            .iter()
            .find(|b| b.upper_bound.map_or(true, |upper| income <= upper));

        match bracket {
            Some(b) => b.formula.apply(income),
            // Table without an unbounded top bracket: extend the last formula
            None => self.brackets.last().map_or(0.0, |b| b.formula.apply(income)),
        }
    }

    /// Tax on a one-time payment under one-fifth averaging.
    ///
    /// A fifth of the lump sum is stacked on top of `base_income`; the
    /// incremental tax on that fifth is multiplied by five. The whole amount
    /// is still due at once, only the marginal rate is dampened.
    pub fn lump_sum_reduced_tax(&self, lump_sum: f64, base_income: f64) -> f64 {
        let base_tax = self.progressive_income_tax(base_income);
        let tax_with_fifth = self.progressive_income_tax(base_income + lump_sum / 5.0);
        5.0 * (tax_with_fifth - base_tax)
    }

    /// Incremental tax caused by adding `increment` on top of `base_income`
    pub fn incremental_tax(&self, base_income: f64, increment: f64) -> f64 {
        self.progressive_income_tax(base_income + increment) - self.progressive_income_tax(base_income)
    }
}

impl Default for IncomeTaxSchedule {
    fn default() -> Self {
        Self::german_2025()
    }
}

/// Income tax under the default tariff
pub fn progressive_income_tax(income: f64) -> f64 {
    IncomeTaxSchedule::german_2025().progressive_income_tax(income)
}

/// One-fifth averaged lump-sum tax under the default tariff
pub fn lump_sum_reduced_tax(lump_sum: f64, base_income: f64) -> f64 {
    IncomeTaxSchedule::german_2025().lump_sum_reduced_tax(lump_sum, base_income)
}

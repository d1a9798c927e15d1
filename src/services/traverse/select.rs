//! Validation of raw strategy identifiers.
//!
//! Callers may name a strategy by enum value, numeric id (1 to 4) or label.
//! Everything funnels through [`IntoStrategy`] so assignment, per-call
//! overrides and CLI parsing reject unknown values the same way.

use super::StrategyKind;
use crate::{Error, Result};

/// A value that can be validated into a [`StrategyKind`].
pub trait IntoStrategy {
    /// # Errors
    /// `Error::InvalidStrategy` if the value names none of the four strategies.
    fn into_strategy(self) -> Result<StrategyKind>;
}

impl IntoStrategy for StrategyKind {
    fn into_strategy(self) -> Result<StrategyKind> {
        Ok(self)
    }
}

impl IntoStrategy for &StrategyKind {
    fn into_strategy(self) -> Result<StrategyKind> {
        Ok(*self)
    }
}

impl IntoStrategy for &str {
    fn into_strategy(self) -> Result<StrategyKind> {
        self.parse()
    }
}

impl IntoStrategy for String {
    fn into_strategy(self) -> Result<StrategyKind> {
        self.as_str().into_strategy()
    }
}

impl IntoStrategy for &String {
    fn into_strategy(self) -> Result<StrategyKind> {
        self.as_str().into_strategy()
    }
}

macro_rules! impl_numeric_strategy_id {
    ($($ty:ty),*) => {
        $(
            impl IntoStrategy for $ty {
                fn into_strategy(self) -> Result<StrategyKind> {
                    i64::try_from(self)
                        .ok()
                        .and_then(StrategyKind::from_id)
                        .ok_or_else(|| Error::InvalidStrategy(format!("id {self}")))
                }
            }
        )*
    };
}

impl_numeric_strategy_id!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

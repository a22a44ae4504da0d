//! Moving average calculation implementations
//!
//! Contains the Exponential Moving Average (EMA) in two shapes:
//! - [`ExponentialMovingAverage`], a streaming accumulator fed one value at a time
//! - [`ema_series`], the whole-series form used over a column of closes
//!
//! Both are seeded with the first observed value and carry no warm-up period,
//! so the output has exactly one value per input.

use crate::{MathError, Result};

/// Exponential Moving Average (EMA) implementation
///
/// `value[0] = x[0]`, then `value[i] = alpha * x[i] + (1 - alpha) * value[i - 1]`
/// with `alpha = 2 / (span + 1)`.
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    span: usize,
    alpha: f64,
    current_ema: Option<f64>,
}

impl ExponentialMovingAverage {
    /// Create a new Exponential Moving Average with the specified span
    pub fn new(span: usize) -> Result<Self> {
        if span == 0 {
            return Err(MathError::InvalidInput(
                "Span must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            span,
            alpha: 2.0 / (span as f64 + 1.0),
            current_ema: None,
        })
    }

    /// Update the EMA with a new value and return the updated average
    pub fn update(&mut self, value: f64) -> f64 {
        let next = match self.current_ema {
            None => value,
            Some(previous) => self.alpha * value + (1.0 - self.alpha) * previous,
        };
        self.current_ema = Some(next);
        next
    }

    /// Get the current EMA value
    pub fn value(&self) -> Result<f64> {
        self.current_ema.ok_or_else(|| {
            MathError::InsufficientData(format!(
                "EMA({}) has not seen any values yet",
                self.span
            ))
        })
    }

    /// Get the span
    pub fn span(&self) -> usize {
        self.span
    }

    /// Smoothing factor derived from the span
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Reset the EMA, clearing all values
    pub fn reset(&mut self) {
        self.current_ema = None;
    }
}

/// Compute the EMA of every prefix of `values`.
///
/// Returns an empty vector for empty input.
pub fn ema_series(values: &[f64], span: usize) -> Result<Vec<f64>> {
    let mut ema = ExponentialMovingAverage::new(span)?;
    Ok(values.iter().map(|&value| ema.update(value)).collect())
}

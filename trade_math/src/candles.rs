//! Single-candle geometry
//!
//! Measurements that depend only on one bar's open, high, low and close.

/// Shape of a single OHLC candle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleShape {
    /// High minus low
    pub range: f64,
    /// Absolute distance between open and close
    pub body: f64,
    /// High minus the top of the body
    pub upper_wick: f64,
    /// Bottom of the body minus low
    pub lower_wick: f64,
    /// Midpoint of the range
    pub mid: f64,
}

impl CandleShape {
    pub fn from_ohlc(open: f64, high: f64, low: f64, close: f64) -> Self {
        let body_top = open.max(close);
        let body_bottom = open.min(close);

        Self {
            range: high - low,
            body: (close - open).abs(),
            upper_wick: high - body_top,
            lower_wick: body_bottom - low,
            mid: (high + low) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullish_candle_shape() {
        let shape = CandleShape::from_ohlc(10.0, 15.0, 8.0, 12.0);
        assert_eq!(shape.range, 7.0);
        assert_eq!(shape.body, 2.0);
        assert_eq!(shape.upper_wick, 3.0);
        assert_eq!(shape.lower_wick, 2.0);
        assert_eq!(shape.mid, 11.5);
    }

    #[test]
    fn test_bearish_candle_shape() {
        let shape = CandleShape::from_ohlc(12.0, 13.0, 9.0, 10.0);
        assert_eq!(shape.body, 2.0);
        assert_eq!(shape.upper_wick, 1.0);
        assert_eq!(shape.lower_wick, 1.0);
    }

    #[test]
    fn test_flat_candle_has_no_body() {
        let shape = CandleShape::from_ohlc(1.0, 1.0, 1.0, 1.0);
        assert_eq!(shape.range, 0.0);
        assert_eq!(shape.body, 0.0);
        assert_eq!(shape.upper_wick, 0.0);
        assert_eq!(shape.lower_wick, 0.0);
    }
}

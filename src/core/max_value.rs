use ordered_float::OrderedFloat;

use crate::core::BarDatum;

/// Headroom applied above the tallest stack.
pub const MAX_VALUE_PADDING: f64 = 1.1;

/// Largest stacked total across rows, counting only `keys`.
///
/// Returns zero for no rows.
#[must_use]
pub fn calc_max_value(rows: &[BarDatum], keys: &[String]) -> f64 {
    rows.iter()
        .map(|row| OrderedFloat(stack_total(row, keys)))
        .max()
        .map_or(0.0, |max| max.0)
}

/// Ceiling of the value axis.
#[must_use]
pub fn padded_max_value(rows: &[BarDatum], keys: &[String]) -> f64 {
    calc_max_value(rows, keys) * MAX_VALUE_PADDING
}

/// Height of the stack drawn for `row`: the sum of its values at `keys`.
///
/// Segments grow upward from zero, so negative values count as zero here,
/// matching the geometry.
#[must_use]
pub fn stack_total(row: &BarDatum, keys: &[String]) -> f64 {
    keys.iter().map(|key| row.value(key).max(0.0)).sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{calc_max_value, padded_max_value, stack_total};
    use crate::core::BarDatum;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn empty_rows_have_zero_max() {
        assert_eq!(calc_max_value(&[], &keys(&["High"])), 0.0);
    }

    #[test]
    fn fields_outside_keys_are_ignored() {
        let rows = vec![
            BarDatum::new("Mon")
                .with_value("High", 2.0)
                .with_value("Low", 3.0)
                .with_value("total", 100.0),
            BarDatum::new("Tue").with_value("High", 4.0),
        ];
        assert_eq!(calc_max_value(&rows, &keys(&["High", "Low"])), 5.0);
        assert_eq!(stack_total(&rows[0], &keys(&["Low"])), 3.0);
    }

    #[test]
    fn negative_values_stack_as_zero() {
        let rows = vec![
            BarDatum::new("Mon")
                .with_value("High", 2.0)
                .with_value("Low", -2.0),
            BarDatum::new("Tue").with_value("High", -5.0),
        ];
        let keys = keys(&["High", "Low"]);
        assert_eq!(stack_total(&rows[0], &keys), 2.0);
        assert_eq!(stack_total(&rows[1], &keys), 0.0);
        assert_eq!(calc_max_value(&rows, &keys), 2.0);
    }

    #[test]
    fn padding_adds_ten_percent() {
        let rows = vec![BarDatum::new("Mon").with_value("High", 10.0)];
        assert_relative_eq!(padded_max_value(&rows, &keys(&["High"])), 11.0);
    }
}

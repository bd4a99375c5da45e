//! Descriptive statistics over any [`NumericRow`] slice.
//!
//! Every function returns `None` for empty input. Values that exist but are
//! mathematically undefined (std of one row, correlation of a constant
//! column) come back as `NaN`.

use super::model::NumericRow;

fn column<R: NumericRow>(rows: &[R], field: R::Field) -> Vec<f64> {
    rows.iter().map(|r| r.value(field)).collect()
}

pub fn sum<R: NumericRow>(rows: &[R], field: R::Field) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|r| r.value(field)).sum())
}

pub fn mean<R: NumericRow>(rows: &[R], field: R::Field) -> Option<f64> {
    sum(rows, field).map(|s| s / rows.len() as f64)
}

pub fn max<R: NumericRow>(rows: &[R], field: R::Field) -> Option<f64> {
    rows.iter().map(|r| r.value(field)).reduce(f64::max)
}

pub fn min<R: NumericRow>(rows: &[R], field: R::Field) -> Option<f64> {
    rows.iter().map(|r| r.value(field)).reduce(f64::min)
}

pub fn median<R: NumericRow>(rows: &[R], field: R::Field) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let mut values = column(rows, field);
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Sample standard deviation (divides by n - 1).
pub fn std_dev<R: NumericRow>(rows: &[R], field: R::Field) -> Option<f64> {
    let mean = mean(rows, field)?;
    let n = rows.len();
    if n < 2 {
        return Some(f64::NAN);
    }
    let ss: f64 = rows.iter().map(|r| (r.value(field) - mean).powi(2)).sum();
    Some((ss / (n - 1) as f64).sqrt())
}

/// Every row holds the same value of `field`.
fn is_constant<R: NumericRow>(rows: &[R], field: R::Field) -> bool {
    match rows.first() {
        Some(first) => {
            let v = first.value(field);
            rows.iter().all(|r| r.value(field) == v)
        }
        None => true,
    }
}

/// Pearson correlation between two columns.
pub fn correlation<R: NumericRow>(rows: &[R], a: R::Field, b: R::Field) -> Option<f64> {
    let mean_a = mean(rows, a)?;
    let mean_b = mean(rows, b)?;
    // A fractional mean leaves rounding residue in the deviations, so a
    // constant column must be detected on the raw values.
    if is_constant(rows, a) || is_constant(rows, b) {
        return Some(f64::NAN);
    }

    let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
    for r in rows {
        let da = r.value(a) - mean_a;
        let db = r.value(b) - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return Some(f64::NAN);
    }
    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}

/// First row holding the largest value of `field`.
pub fn argmax_row<R: NumericRow>(rows: &[R], field: R::Field) -> Option<&R> {
    extreme_row(rows, field, |candidate, best| candidate > best)
}

/// First row holding the smallest value of `field`.
pub fn argmin_row<R: NumericRow>(rows: &[R], field: R::Field) -> Option<&R> {
    extreme_row(rows, field, |candidate, best| candidate < best)
}

fn extreme_row<R, F>(rows: &[R], field: R::Field, better: F) -> Option<&R>
where
    R: NumericRow,
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<(&R, f64)> = None;
    for row in rows {
        let v = row.value(field);
        if v.is_nan() {
            continue;
        }
        let replace = match best {
            Some((_, b)) => better(v, b),
            None => true,
        };
        if replace {
            best = Some((row, v));
        }
    }
    best.map(|(row, _)| row)
}

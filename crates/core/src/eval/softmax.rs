use super::MetricsError;

/// Numerically stable softmax over a logit vector.
#[must_use]
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exp: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let z = exp.iter().sum::<f32>().max(f32::MIN_POSITIVE);
    exp.into_iter().map(|e| e / z).collect()
}

/// Index of the largest value; ties resolve to the first occurrence.
#[must_use]
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &value) in values.iter().enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ if value.is_nan() => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Row-wise argmax over a batch of score vectors.
///
/// # Errors
///
/// Returns `MetricsError::EmptyRow` if any row has no finite maximum.
pub fn argmax_rows(rows: &[Vec<f32>]) -> Result<Vec<usize>, MetricsError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| argmax(row).ok_or(MetricsError::EmptyRow { index }))
        .collect()
}

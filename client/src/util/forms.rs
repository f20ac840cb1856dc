//! Form input normalization shared by the create/edit pages.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use super::format::parse_date;

/// Trimmed value, or an error naming the missing field.
///
/// # Errors
///
/// Returns a user-facing message when the value is blank.
pub fn required(value: &str, field: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("El campo «{field}» es obligatorio."));
    }
    Ok(trimmed.to_owned())
}

/// Trimmed value, `None` when blank.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Parse a money amount typed in es-CO (`1.500.000,50`) or plain (`1500000.5`) form.
///
/// A comma is always the decimal separator. Without a comma, a single dot
/// followed by one or two digits is read as a decimal point; any other dots
/// are thousands separators.
#[must_use]
pub fn parse_money(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '$').collect();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replacen(',', ".", 1)
    } else {
        match cleaned.split_once('.') {
            Some((_, tail)) if !tail.contains('.') && (1..=2).contains(&tail.len()) => cleaned,
            _ => cleaned.replace('.', ""),
        }
    };
    let value = normalized.parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Optional money field: blank is `None`, garbage is an error.
///
/// # Errors
///
/// Returns a user-facing message when the value is not a valid amount.
pub fn optional_money(raw: &str, field: &str) -> Result<Option<f64>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_money(raw)
        .map(Some)
        .ok_or_else(|| format!("El campo «{field}» debe ser un valor válido."))
}

/// Required ISO date (`YYYY-MM-DD`), as produced by `<input type="date">`.
///
/// # Errors
///
/// Returns a user-facing message when blank or malformed.
pub fn required_date(raw: &str, field: &str) -> Result<String, String> {
    let value = required(raw, field)?;
    parse_date(&value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok_or_else(|| format!("El campo «{field}» debe ser una fecha válida."))
}

/// A return date may not precede the issue date.
///
/// # Errors
///
/// Returns a user-facing message when the order is wrong or a date is invalid.
pub fn ensure_not_before(earlier: &str, later: &str) -> Result<(), String> {
    match (parse_date(earlier), parse_date(later)) {
        (Some(a), Some(b)) if b >= a => Ok(()),
        (Some(_), Some(_)) => Err("La fecha de devolución no puede ser anterior a la de entrega.".to_owned()),
        _ => Err("Fecha inválida.".to_owned()),
    }
}

/// Text to show in an input for an optional money value.
///
/// Uses a comma as the decimal separator and no grouping, so `parse_money`
/// reads it back unchanged whatever the number of decimals.
#[must_use]
pub fn money_input_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string().replacen('.', ",", 1)).unwrap_or_default()
}

//! Path parameter format rules.
//!
//! Each rule is checked before any network call. Rules only look at the
//! shape of the parameter; whether the value exists is the upstream's call.

use thiserror::Error;

/// Lowest holiday year accepted.
pub const MIN_YEAR: i64 = 1900;
/// Highest holiday year accepted.
pub const MAX_YEAR: i64 = 2100;

/// A path parameter that does not match its resource's format.
///
/// The display text is returned verbatim to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("CEP deve ter 8 dígitos numéricos")]
    PostalCode,

    #[error("CNPJ deve ter 14 dígitos numéricos")]
    CompanyTaxId,

    #[error("DDD deve ter 2 dígitos numéricos")]
    AreaCode,

    #[error("Ano deve estar entre 1900 e 2100")]
    HolidayYear,

    #[error("Código FIPE deve ter o formato XXXXXX-Y (ex.: 038003-1)")]
    VehiclePriceCode,

    #[error("ISBN deve ter 10 ou 13 dígitos numéricos")]
    BookNumber,

    #[error("Código NCM deve ter o formato XXXX.XX.XX (ex.: 0101.21.00)")]
    TariffCode,

    #[error("Domínio deve conter pelo menos um ponto (ex.: exemplo.com.br)")]
    Domain,
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// True when `value` is `len` characters long with `marker` at every index in `at`.
fn has_markers(value: &str, len: usize, marker: char, at: &[usize]) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.len() == len && at.iter().all(|&i| chars[i] == marker)
}

pub fn postal_code(value: &str) -> Result<(), ValidationError> {
    is_digits(value, 8)
        .then_some(())
        .ok_or(ValidationError::PostalCode)
}

pub fn company_tax_id(value: &str) -> Result<(), ValidationError> {
    is_digits(value, 14)
        .then_some(())
        .ok_or(ValidationError::CompanyTaxId)
}

pub fn area_code(value: &str) -> Result<(), ValidationError> {
    is_digits(value, 2)
        .then_some(())
        .ok_or(ValidationError::AreaCode)
}

/// Accepts a decimal integer in `MIN_YEAR..=MAX_YEAR`.
///
/// The key is forwarded as written, so only the canonical four-digit form
/// passes: signs, leading zeros and non-digits get the same error.
pub fn holiday_year(value: &str) -> Result<(), ValidationError> {
    if !is_digits(value, 4) {
        return Err(ValidationError::HolidayYear);
    }
    match value.parse::<i64>() {
        Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(()),
        _ => Err(ValidationError::HolidayYear),
    }
}

/// `XXXXXX-Y`: eight characters with a dash at index 6.
pub fn vehicle_price_code(value: &str) -> Result<(), ValidationError> {
    has_markers(value, 8, '-', &[6])
        .then_some(())
        .ok_or(ValidationError::VehiclePriceCode)
}

pub fn book_number(value: &str) -> Result<(), ValidationError> {
    (is_digits(value, 10) || is_digits(value, 13))
        .then_some(())
        .ok_or(ValidationError::BookNumber)
}

/// `XXXX.XX.XX`: ten characters with dots at indices 4 and 7.
pub fn tariff_code(value: &str) -> Result<(), ValidationError> {
    has_markers(value, 10, '.', &[4, 7])
        .then_some(())
        .ok_or(ValidationError::TariffCode)
}

pub fn domain(value: &str) -> Result<(), ValidationError> {
    value
        .contains('.')
        .then_some(())
        .ok_or(ValidationError::Domain)
}

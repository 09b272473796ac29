//! Utilidades de validación
//!
//! Funciones helper usadas por los DTOs (`#[validate(custom = ...)]`)
//! y por los repositorios para armar búsquedas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Límite por defecto de las búsquedas
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Límite máximo aceptado en las búsquedas
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5
        || clean_plate.len() > 10
        || !clean_plate.chars().all(|c| c.is_ascii_alphanumeric())
    {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que una fecha esté en el futuro
pub fn validate_future_date(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *value <= Utc::now() {
        let mut error = ValidationError::new("future_date");
        error.add_param("value".into(), &value.to_rfc3339());
        return Err(error);
    }
    Ok(())
}

/// Normaliza una matrícula: sin espacios extremos y en mayúsculas
pub fn normalize_license_plate(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Límite efectivo de una búsqueda (el rango ya fue validado en el DTO)
pub fn effective_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT)
}

/// Patrón `LIKE` de subcadena con `%`, `_` y `\` escapados.
/// Se usa junto con `ESCAPE '\'` en el SQL.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Filtro opcional: `None` cuando no hay término o está vacío
pub fn optional_like(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(like_pattern)
}

/// Deserializa un término de búsqueda recortado; vacío o solo espacios es `None`.
/// Las reglas `length` del DTO se aplican sobre el valor ya recortado.
pub fn trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// Distingue campo ausente (`None`) de `null` explícito (`Some(None)`).
/// Se usa con `#[serde(default)]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Juan").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("ABC123").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
        assert!(validate_license_plate("AB#12$CD").is_err());
    }

    #[test]
    fn test_validate_future_date() {
        assert!(validate_future_date(&(Utc::now() + Duration::days(1))).is_ok());
        assert!(validate_future_date(&(Utc::now() - Duration::days(1))).is_err());
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(None), 20);
        assert_eq!(effective_limit(Some(5)), 5);
        assert_eq!(effective_limit(Some(500)), 100);
        assert_eq!(effective_limit(Some(0)), 1);
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ana"), "%ana%");
        assert_eq!(like_pattern(" 50%_off "), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_optional_like() {
        assert_eq!(optional_like(None), None);
        assert_eq!(optional_like(Some("  ")), None);
        assert_eq!(optional_like(Some("Ford")), Some("%Ford%".to_string()));
    }

    #[derive(Debug, serde::Deserialize)]
    struct Term {
        #[serde(default, deserialize_with = "trimmed_option")]
        q: Option<String>,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        finish: Option<Option<i64>>,
    }

    #[test]
    fn test_trimmed_option() {
        let term: Term = serde_json::from_str(r#"{"q": "  ana  "}"#).unwrap();
        assert_eq!(term.q.as_deref(), Some("ana"));
        let term: Term = serde_json::from_str(r#"{"q": "   "}"#).unwrap();
        assert_eq!(term.q, None);
        let term: Term = serde_json::from_str("{}").unwrap();
        assert_eq!(term.q, None);
    }

    #[test]
    fn test_nullable_distinguishes_null_from_absent() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.finish, None);
        let patch: Patch = serde_json::from_str(r#"{"finish": null}"#).unwrap();
        assert_eq!(patch.finish, Some(None));
        let patch: Patch = serde_json::from_str(r#"{"finish": 5}"#).unwrap();
        assert_eq!(patch.finish, Some(Some(5)));
    }
}

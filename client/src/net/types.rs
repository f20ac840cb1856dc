//! Wire DTOs for the asset-tracking REST backend.
//!
//! DESIGN
//! ======
//! The backend owns every entity; these types are render-only copies. Field
//! shapes are normalized at deserialization time (ids to strings, money to
//! `f64`) so pages never branch on representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A client company: the top of the organizational hierarchy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Tax identifier (NIT).
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A physical site belonging to a company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub company_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// An area inside a site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub site_id: String,
    pub name: String,
}

/// An asset category scoped to a company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub company_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub company_id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub area_id: Option<String>,
    pub name: String,
    /// Job title, free text.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Lifecycle status of an asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    #[default]
    Active,
    #[serde(alias = "under_maintenance")]
    UnderMaintenance,
    Retired,
    Lost,
}

impl AssetStatus {
    pub const ALL: [Self; 4] = [Self::Active, Self::UnderMaintenance, Self::Retired, Self::Lost];

    /// Wire value, also used as `<select>` option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::UnderMaintenance => "under-maintenance",
            Self::Retired => "retired",
            Self::Lost => "lost",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::UnderMaintenance => "En mantenimiento",
            Self::Retired => "Dado de baja",
            Self::Lost => "Perdido",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "active" => Some(Self::Active),
            "under-maintenance" | "under_maintenance" => Some(Self::UnderMaintenance),
            "retired" => Some(Self::Retired),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub company_id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub status: AssetStatus,
    #[serde(default, deserialize_with = "deserialize_opt_money")]
    pub purchase_value: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_money")]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub site_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub area_id: Option<String>,
    /// Employee responsible for the asset, if any.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A loan of an asset to an employee. `return_date == None` means active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub asset_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub issued_by_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub received_by_id: Option<String>,
    pub issue_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Assignment {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.return_date.as_deref().is_none_or(|d| d.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceType {
    #[default]
    Preventive,
    Corrective,
}

impl MaintenanceType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Corrective => "corrective",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Preventive => "Preventivo",
            Self::Corrective => "Correctivo",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "preventive" => Some(Self::Preventive),
            "corrective" => Some(Self::Corrective),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub asset_id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub technician_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_opt_money")]
    pub cost: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload to render as a QR code for an asset label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQr {
    #[serde(deserialize_with = "deserialize_id")]
    pub asset_id: String,
    pub code: String,
    pub payload: String,
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInput {
    pub company_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaInput {
    pub site_id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub company_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub company_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
    pub company_id: String,
    pub code: String,
    pub name: String,
    pub status: AssetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInput {
    pub asset_id: String,
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by_id: Option<String>,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReturn {
    pub return_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_by_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceInput {
    pub asset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// SHAPE NORMALIZATION
// =============================================================================

/// Some endpoints wrap payloads as `{ "data": ... }`; others return them bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(serde_json::Number),
}

impl IdRepr {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = IdRepr::deserialize(deserializer)?.into_string();
    if id.is_empty() {
        return Err(D::Error::custom("empty id"));
    }
    Ok(id)
}

pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<IdRepr>::deserialize(deserializer)?.map(IdRepr::into_string);
    Ok(id.filter(|s| !s.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Number(f64),
    Text(String),
}

fn deserialize_opt_money<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<MoneyRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(MoneyRepr::Number(n)) => Ok(Some(n)),
        Some(MoneyRepr::Text(raw)) if raw.trim().is_empty() => Ok(None),
        Some(MoneyRepr::Text(raw)) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid decimal value: {raw}"))),
    }
}

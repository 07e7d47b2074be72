use std::fmt;
use std::str::FromStr;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::access::application::domain::entities::UserRole;
use crate::modules::access::application::domain::policies::Owned;

/// Which role a profile belongs to. Carries the wording each role uses for
/// its Info fields and ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Company,
    Professional,
}

impl ProfileKind {
    pub fn role(&self) -> UserRole {
        match self {
            ProfileKind::Company => UserRole::Company,
            ProfileKind::Professional => UserRole::Professional,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            ProfileKind::Company => "company",
            ProfileKind::Professional => "professional",
        }
    }

    /// Name of the free-text Info field as the role sees it.
    pub fn description_field(&self) -> &'static str {
        match self {
            ProfileKind::Company => "description",
            ProfileKind::Professional => "summary",
        }
    }

    pub fn ad_label(&self) -> &'static str {
        match self {
            ProfileKind::Company => "Job ad",
            ProfileKind::Professional => "Resume",
        }
    }

    pub fn not_logged_in(&self) -> String {
        format!("You are not logged as {}", self.noun())
    }

    pub fn deletion_restricted(&self) -> String {
        format!(
            "Deletion of the {0} is restricted to administrators or the {0} owner.",
            self.noun()
        )
    }

    pub fn missing_info_fields(&self) -> String {
        format!(
            "Fields should be valid: '{}' and 'location'!",
            self.description_field()
        )
    }

    pub fn ad_not_found(&self) -> String {
        format!("{} not found", self.ad_label())
    }

    pub fn main_ad_changed(&self) -> String {
        format!("Main {} changed successfully", self.ad_label().to_lowercase())
    }

    pub fn ad_deleted(&self) -> String {
        format!("{} deleted successfully", self.ad_label())
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// A role profile that may own one Info record.
pub trait ProfileWithInfo: Owned + Send + Sync {
    fn id(&self) -> Uuid;
    fn info_id(&self) -> Option<Uuid>;
    fn kind(&self) -> ProfileKind;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub picture: Option<Vec<u8>>,
    pub main_ad: Option<Uuid>,
}

/// Info values supplied by a caller. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InfoFields {
    pub description: Option<String>,
    pub location: Option<String>,
    pub picture: Option<Vec<u8>>,
}

impl InfoFields {
    /// Drops blank strings so they count as not supplied.
    pub fn normalized(self) -> Self {
        Self {
            description: non_blank(self.description),
            location: non_blank(self.location),
            picture: self.picture.filter(|p| !p.is_empty()),
        }
    }

    pub fn has_required(&self) -> bool {
        self.description.is_some() || self.location.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.location.is_none() && self.picture.is_none()
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    Active,
    Hidden,
    Private,
    Matched,
    Archived,
}

impl AdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdStatus::Active => "active",
            AdStatus::Hidden => "hidden",
            AdStatus::Private => "private",
            AdStatus::Matched => "matched",
            AdStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown ad status: {0}")]
pub struct UnknownAdStatus(pub String);

impl FromStr for AdStatus {
    type Err = UnknownAdStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AdStatus::Active),
            "hidden" => Ok(AdStatus::Hidden),
            "private" => Ok(AdStatus::Private),
            "matched" => Ok(AdStatus::Matched),
            "archived" => Ok(AdStatus::Archived),
            other => Err(UnknownAdStatus(other.to_string())),
        }
    }
}

/// Projection of an ad as listed under its owner's Info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdSummary {
    pub id: Uuid,
    pub description: String,
    pub location: String,
    pub status: AdStatus,
    pub min_salary: i32,
    pub max_salary: i32,
}

/// Result of selecting a main ad. A missing ad is an outcome, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAdOutcome {
    Changed,
    NotFound,
}

impl MainAdOutcome {
    pub fn message(&self, kind: ProfileKind) -> String {
        match self {
            MainAdOutcome::Changed => kind.main_ad_changed(),
            MainAdOutcome::NotFound => kind.ad_not_found(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdDeletion {
    Deleted,
    /// The deleted ad was the main ad; the selection was cleared with it.
    DeletedAndMainCleared,
}

impl AdDeletion {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdDeletion::Deleted => StatusCode::OK,
            AdDeletion::DeletedAndMainCleared => StatusCode::NO_CONTENT,
        }
    }

    pub fn message(&self, kind: ProfileKind) -> String {
        match self {
            AdDeletion::Deleted => kind.ad_deleted(),
            AdDeletion::DeletedAndMainCleared => kind.main_ad_changed(),
        }
    }
}

/// 1-indexed page request. Page `0` is read as the first page and page sizes
/// are capped at [`PageRequest::MAX_PER_PAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: u64 = 10;
    pub const MAX_PER_PAGE: u64 = 100;

    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .filter(|size| *size > 0)
                .unwrap_or(Self::DEFAULT_PER_PAGE)
                .min(Self::MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> u64 {
        // Postgres OFFSET is a signed bigint
        (self.page.max(1) - 1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

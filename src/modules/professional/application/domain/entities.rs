use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::access::application::domain::entities::UserId;
use crate::modules::access::application::domain::policies::Owned;
use crate::modules::profile::application::domain::entities::{
    non_blank, Info, ProfileKind, ProfileWithInfo,
};
use crate::modules::profile::application::services::InfoCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionalStatus {
    Active,
    Busy,
}

impl ProfessionalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfessionalStatus::Active => "active",
            ProfessionalStatus::Busy => "busy",
        }
    }
}

impl fmt::Display for ProfessionalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown professional status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ProfessionalStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProfessionalStatus::Active),
            "busy" => Ok(ProfessionalStatus::Busy),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Professional {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub status: ProfessionalStatus,
    pub owner: UserId,
    pub info_id: Option<Uuid>,
}

impl Owned for Professional {
    fn owner(&self) -> UserId {
        self.owner
    }
}

impl ProfileWithInfo for Professional {
    fn id(&self) -> Uuid {
        self.id
    }

    fn info_id(&self) -> Option<Uuid> {
        self.info_id
    }

    fn kind(&self) -> ProfileKind {
        ProfileKind::Professional
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfessionalPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<ProfessionalStatus>,
}

impl ProfessionalPatch {
    pub fn normalized(self) -> Self {
        Self {
            first_name: non_blank(self.first_name),
            last_name: non_blank(self.last_name),
            status: self.status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.status.is_none()
    }
}

/// Search criteria for the directory of approved professionals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfessionalFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<ProfessionalStatus>,
    pub location: Option<String>,
}

impl ProfessionalFilter {
    pub fn normalized(self) -> Self {
        Self {
            first_name: non_blank(self.first_name),
            last_name: non_blank(self.last_name),
            status: self.status,
            location: non_blank(self.location),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionalInfoDisplay {
    pub first_name: String,
    pub last_name: String,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub status: ProfessionalStatus,
    pub picture: Option<Vec<u8>>,
    pub main_ad: Option<Uuid>,
    pub active_resumes: u64,
    pub number_of_matches: u64,
}

impl ProfessionalInfoDisplay {
    pub fn new(professional: Professional, info: Info, counts: InfoCounts) -> Self {
        Self {
            first_name: professional.first_name,
            last_name: professional.last_name,
            summary: info.description,
            location: info.location,
            status: professional.status,
            picture: info.picture,
            main_ad: info.main_ad,
            active_resumes: counts.active_ads,
            number_of_matches: counts.matches,
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::access::application::domain::entities::UserId;
use crate::modules::access::application::domain::policies::Owned;
use crate::modules::profile::application::domain::entities::{
    non_blank, Info, ProfileKind, ProfileWithInfo,
};
use crate::modules::profile::application::services::InfoCounts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub contacts: Option<String>,
    pub owner: UserId,
    pub info_id: Option<Uuid>,
}

impl Owned for Company {
    fn owner(&self) -> UserId {
        self.owner
    }
}

impl ProfileWithInfo for Company {
    fn id(&self) -> Uuid {
        self.id
    }

    fn info_id(&self) -> Option<Uuid> {
        self.info_id
    }

    fn kind(&self) -> ProfileKind {
        ProfileKind::Company
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub contacts: Option<String>,
}

impl CompanyPatch {
    pub fn normalized(self) -> Self {
        Self {
            name: non_blank(self.name),
            contacts: non_blank(self.contacts),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contacts.is_none()
    }
}

/// A company's Info record as shown to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfoDisplay {
    pub name: String,
    pub contacts: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub picture: Option<Vec<u8>>,
    pub main_ad: Option<Uuid>,
    pub active_job_ads: u64,
    pub number_of_matches: u64,
}

impl CompanyInfoDisplay {
    pub fn new(company: Company, info: Info, counts: InfoCounts) -> Self {
        Self {
            name: company.name,
            contacts: company.contacts,
            description: info.description,
            location: info.location,
            picture: info.picture,
            main_ad: info.main_ad,
            active_job_ads: counts.active_ads,
            number_of_matches: counts.matches,
        }
    }
}

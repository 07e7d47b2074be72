//! In-memory implementation of every outgoing port, shared by service tests.
//!
//! Clones share state, so one store can back a user query, a role
//! repository and the info repository at once.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::modules::access::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::company::application::domain::entities::{Company, CompanyPatch};
use crate::modules::company::application::ports::outgoing::{
    CompanyRepository, CompanyRepositoryError,
};
use crate::modules::professional::application::domain::entities::{
    Professional, ProfessionalFilter, ProfessionalPatch, ProfessionalStatus,
};
use crate::modules::professional::application::ports::outgoing::{
    ProfessionalRepository, ProfessionalRepositoryError,
};
use crate::modules::profile::application::domain::entities::{
    AdDeletion, AdStatus, AdSummary, Info, InfoFields, PageRequest, ProfileKind,
};
use crate::modules::profile::application::ports::outgoing::{InfoRepository, InfoRepositoryError};

#[derive(Default)]
struct State {
    users: HashMap<UserId, User>,
    companies: HashMap<Uuid, Company>,
    professionals: HashMap<Uuid, Professional>,
    info: HashMap<Uuid, Info>,
    // insertion order doubles as creation order
    ads: Vec<(Uuid, AdSummary)>,
    matches: Vec<(Uuid, Uuid, Uuid)>,
    seeded: u64,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn seed_user(&self, role: UserRole, is_verified: bool) -> User {
        let mut state = self.lock();
        state.seeded += 1;
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            username: format!("user{}", state.seeded),
            email: format!("user{}@example.com", state.seeded),
            role,
            is_verified,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        user
    }

    pub fn seed_company(&self, name: &str, is_verified: bool) -> (User, Company) {
        let user = self.seed_user(UserRole::Company, is_verified);
        let company = Company {
            id: Uuid::new_v4(),
            name: name.to_string(),
            contacts: None,
            owner: user.id,
            info_id: None,
        };
        self.lock().companies.insert(company.id, company.clone());
        (user, company)
    }

    pub fn seed_professional(&self, role: UserRole, is_verified: bool) -> (User, Professional) {
        let user = self.seed_user(role, is_verified);
        let mut state = self.lock();
        let professional = Professional {
            id: Uuid::new_v4(),
            first_name: "Elena".to_string(),
            last_name: format!("Petrova{}", state.seeded),
            status: ProfessionalStatus::Active,
            owner: user.id,
            info_id: None,
        };
        state
            .professionals
            .insert(professional.id, professional.clone());
        (user, professional)
    }

    fn seed_info(&self, description: &str, location: &str) -> Uuid {
        let info = Info {
            id: Uuid::new_v4(),
            description: Some(description.to_string()),
            location: Some(location.to_string()),
            picture: None,
            main_ad: None,
        };
        let id = info.id;
        self.lock().info.insert(id, info);
        id
    }

    pub fn attach_info(
        &self,
        mut professional: Professional,
        description: &str,
        location: &str,
    ) -> Professional {
        let info_id = self.seed_info(description, location);
        professional.info_id = Some(info_id);
        self.lock()
            .professionals
            .insert(professional.id, professional.clone());
        professional
    }

    pub fn attach_company_info(
        &self,
        mut company: Company,
        description: &str,
        location: &str,
    ) -> Company {
        let info_id = self.seed_info(description, location);
        company.info_id = Some(info_id);
        self.lock().companies.insert(company.id, company.clone());
        company
    }

    pub fn seed_ad(&self, info_id: Uuid, status: AdStatus) -> Uuid {
        let ad = AdSummary {
            id: Uuid::new_v4(),
            description: "Backend engineer".to_string(),
            location: "Remote".to_string(),
            status,
            min_salary: 2000,
            max_salary: 4000,
        };
        let id = ad.id;
        self.lock().ads.push((info_id, ad));
        id
    }

    pub fn seed_match(&self, ad_id: Uuid, company_id: Uuid, professional_id: Uuid) {
        self.lock()
            .matches
            .push((ad_id, company_id, professional_id));
    }

    pub fn user(&self, id: UserId) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    pub fn company(&self, id: Uuid) -> Option<Company> {
        self.lock().companies.get(&id).cloned()
    }

    pub fn professional(&self, id: Uuid) -> Option<Professional> {
        self.lock().professionals.get(&id).cloned()
    }

    pub fn info(&self, id: Uuid) -> Option<Info> {
        self.lock().info.get(&id).cloned()
    }

    pub fn main_ad(&self, info_id: Uuid) -> Option<Uuid> {
        self.lock().info.get(&info_id).and_then(|info| info.main_ad)
    }

    pub fn ad_count(&self, info_id: Uuid) -> usize {
        self.lock()
            .ads
            .iter()
            .filter(|(owner, _)| *owner == info_id)
            .count()
    }
}

impl State {
    fn is_verified(&self, owner: UserId) -> bool {
        self.users.get(&owner).is_some_and(|u| u.is_verified)
    }

    fn remove_info(&mut self, info_id: Uuid) {
        let removed: Vec<Uuid> = self
            .ads
            .iter()
            .filter(|(owner, _)| *owner == info_id)
            .map(|(_, ad)| ad.id)
            .collect();
        self.ads.retain(|(owner, _)| *owner != info_id);
        self.matches.retain(|(ad, _, _)| !removed.contains(ad));
        self.info.remove(&info_id);
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.per_page as usize)
        .collect()
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.user(user_id))
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn list_verified(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let state = self.lock();
        let mut companies: Vec<Company> = state
            .companies
            .values()
            .filter(|c| state.is_verified(c.owner))
            .filter(|c| name.as_deref().map_or(true, |n| contains_ci(&c.name, n)))
            .cloned()
            .collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(paginate(companies, page))
    }

    async fn find_by_id(&self, company_id: Uuid) -> Result<Option<Company>, CompanyRepositoryError> {
        Ok(self.company(company_id))
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Option<Company>, CompanyRepositoryError> {
        Ok(self
            .lock()
            .companies
            .values()
            .find(|c| c.owner == owner)
            .cloned())
    }

    async fn update(
        &self,
        company_id: Uuid,
        patch: CompanyPatch,
    ) -> Result<Company, CompanyRepositoryError> {
        let mut state = self.lock();
        let company = state
            .companies
            .get_mut(&company_id)
            .ok_or(CompanyRepositoryError::NotFound)?;

        if let Some(name) = patch.name {
            company.name = name;
        }
        if let Some(contacts) = patch.contacts {
            company.contacts = Some(contacts);
        }

        Ok(company.clone())
    }

    async fn delete_with_info(
        &self,
        company_id: Uuid,
        info_id: Option<Uuid>,
    ) -> Result<(), CompanyRepositoryError> {
        let mut state = self.lock();
        state
            .companies
            .remove(&company_id)
            .ok_or(CompanyRepositoryError::NotFound)?;
        state.matches.retain(|(_, company, _)| *company != company_id);
        if let Some(info_id) = info_id {
            state.remove_info(info_id);
        }
        Ok(())
    }
}

#[async_trait]
impl ProfessionalRepository for InMemoryStore {
    async fn list_approved(
        &self,
        filter: ProfessionalFilter,
        page: PageRequest,
    ) -> Result<Vec<Professional>, ProfessionalRepositoryError> {
        let state = self.lock();
        let location_of = |p: &Professional| {
            p.info_id
                .and_then(|id| state.info.get(&id))
                .and_then(|info| info.location.clone())
        };

        let mut professionals: Vec<Professional> = state
            .professionals
            .values()
            .filter(|p| state.is_verified(p.owner))
            .filter(|p| {
                filter
                    .first_name
                    .as_deref()
                    .map_or(true, |n| contains_ci(&p.first_name, n))
            })
            .filter(|p| {
                filter
                    .last_name
                    .as_deref()
                    .map_or(true, |n| contains_ci(&p.last_name, n))
            })
            .filter(|p| filter.status.map_or(true, |s| p.status == s))
            .filter(|p| {
                filter.location.as_deref().map_or(true, |wanted| {
                    location_of(p).is_some_and(|l| contains_ci(&l, wanted))
                })
            })
            .cloned()
            .collect();
        professionals.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then(a.first_name.cmp(&b.first_name))
                .then(a.id.cmp(&b.id))
        });

        Ok(paginate(professionals, page))
    }

    async fn find_by_id(
        &self,
        professional_id: Uuid,
    ) -> Result<Option<Professional>, ProfessionalRepositoryError> {
        Ok(self.professional(professional_id))
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<Professional>, ProfessionalRepositoryError> {
        Ok(self
            .lock()
            .professionals
            .values()
            .find(|p| p.owner == owner)
            .cloned())
    }

    async fn update(
        &self,
        professional_id: Uuid,
        patch: ProfessionalPatch,
    ) -> Result<Professional, ProfessionalRepositoryError> {
        let mut state = self.lock();
        let professional = state
            .professionals
            .get_mut(&professional_id)
            .ok_or(ProfessionalRepositoryError::NotFound)?;

        if let Some(first_name) = patch.first_name {
            professional.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            professional.last_name = last_name;
        }
        if let Some(status) = patch.status {
            professional.status = status;
        }

        Ok(professional.clone())
    }

    async fn delete_with_account(
        &self,
        professional: &Professional,
    ) -> Result<(), ProfessionalRepositoryError> {
        let mut state = self.lock();
        state
            .professionals
            .remove(&professional.id)
            .ok_or(ProfessionalRepositoryError::NotFound)?;
        state.users.remove(&professional.owner);
        state
            .matches
            .retain(|(_, _, matched)| *matched != professional.id);
        if let Some(info_id) = professional.info_id {
            state.remove_info(info_id);
        }
        Ok(())
    }
}

#[async_trait]
impl InfoRepository for InMemoryStore {
    async fn find_by_id(&self, info_id: Uuid) -> Result<Option<Info>, InfoRepositoryError> {
        Ok(self.info(info_id))
    }

    async fn create_for_profile(
        &self,
        kind: ProfileKind,
        profile_id: Uuid,
        fields: InfoFields,
    ) -> Result<Info, InfoRepositoryError> {
        let mut state = self.lock();
        let info = Info {
            id: Uuid::new_v4(),
            description: fields.description,
            location: fields.location,
            picture: fields.picture,
            main_ad: None,
        };

        let slot = match kind {
            ProfileKind::Company => state.companies.get_mut(&profile_id).map(|c| &mut c.info_id),
            ProfileKind::Professional => state
                .professionals
                .get_mut(&profile_id)
                .map(|p| &mut p.info_id),
        };
        match slot {
            Some(slot) if slot.is_none() => *slot = Some(info.id),
            _ => return Err(InfoRepositoryError::ProfileUnavailable),
        }

        state.info.insert(info.id, info.clone());
        Ok(info)
    }

    async fn update(&self, info_id: Uuid, fields: InfoFields) -> Result<Info, InfoRepositoryError> {
        let mut state = self.lock();
        let info = state
            .info
            .get_mut(&info_id)
            .ok_or(InfoRepositoryError::NotFound)?;

        if let Some(description) = fields.description {
            info.description = Some(description);
        }
        if let Some(location) = fields.location {
            info.location = Some(location);
        }
        if let Some(picture) = fields.picture {
            info.picture = Some(picture);
        }

        Ok(info.clone())
    }

    async fn count_active_ads(&self, info_id: Uuid) -> Result<u64, InfoRepositoryError> {
        Ok(self
            .lock()
            .ads
            .iter()
            .filter(|(owner, ad)| *owner == info_id && ad.status == AdStatus::Active)
            .count() as u64)
    }

    async fn count_matches(
        &self,
        kind: ProfileKind,
        profile_id: Uuid,
    ) -> Result<u64, InfoRepositoryError> {
        Ok(self
            .lock()
            .matches
            .iter()
            .filter(|(_, company, professional)| match kind {
                ProfileKind::Company => *company == profile_id,
                ProfileKind::Professional => *professional == profile_id,
            })
            .count() as u64)
    }

    async fn list_ads(&self, info_id: Uuid) -> Result<Vec<AdSummary>, InfoRepositoryError> {
        Ok(self
            .lock()
            .ads
            .iter()
            .filter(|(owner, _)| *owner == info_id)
            .map(|(_, ad)| ad.clone())
            .collect())
    }

    async fn set_main_ad(&self, info_id: Uuid, ad_id: Uuid) -> Result<bool, InfoRepositoryError> {
        let mut state = self.lock();
        let owned = state
            .ads
            .iter()
            .any(|(owner, ad)| *owner == info_id && ad.id == ad_id);
        if !owned {
            return Ok(false);
        }

        match state.info.get_mut(&info_id) {
            Some(info) => {
                info.main_ad = Some(ad_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_ad(
        &self,
        info_id: Uuid,
        ad_id: Uuid,
    ) -> Result<AdDeletion, InfoRepositoryError> {
        let mut state = self.lock();
        let position = state
            .ads
            .iter()
            .position(|(owner, ad)| *owner == info_id && ad.id == ad_id)
            .ok_or(InfoRepositoryError::AdNotFound)?;
        state.ads.remove(position);
        state.matches.retain(|(ad, _, _)| *ad != ad_id);

        let cleared = match state.info.get_mut(&info_id) {
            Some(info) if info.main_ad == Some(ad_id) => {
                info.main_ad = None;
                true
            }
            _ => false,
        };

        Ok(if cleared {
            AdDeletion::DeletedAndMainCleared
        } else {
            AdDeletion::Deleted
        })
    }
}

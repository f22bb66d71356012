//! The settings service and its injected collaborators.

use std::sync::Arc;

use register_core::{
    ConfigStore, GroupDirectory, OrganisationDirectory, SearchStatsProvider, UserDirectory,
};

/// Facade over every settings domain.
///
/// Only the configuration store is required. The identity directories and
/// the search statistics provider are optional; operations that need a
/// missing collaborator fail with `CollaboratorUnavailable` (or degrade,
/// where the operation documents that).
#[derive(Clone)]
pub struct SettingsService {
    pub(crate) store: Arc<dyn ConfigStore>,
    pub(crate) groups: Option<Arc<dyn GroupDirectory>>,
    pub(crate) users: Option<Arc<dyn UserDirectory>>,
    pub(crate) organisations: Option<Arc<dyn OrganisationDirectory>>,
    pub(crate) stats: Option<Arc<dyn SearchStatsProvider>>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self {
            store,
            groups: None,
            users: None,
            organisations: None,
            stats: None,
        }
    }

    /// Attach a group directory for RBAC group search.
    pub fn with_groups(mut self, groups: Arc<dyn GroupDirectory>) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Attach a user directory for RBAC user search.
    pub fn with_users(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = Some(users);
        self
    }

    /// Attach an organisation directory for tenancy listings.
    pub fn with_organisations(mut self, organisations: Arc<dyn OrganisationDirectory>) -> Self {
        self.organisations = Some(organisations);
        self
    }

    /// Attach a fixed statistics provider for the dashboard.
    ///
    /// When absent, the dashboard builds a SOLR client from the stored SOLR
    /// configuration on each request.
    pub fn with_stats_provider(mut self, stats: Arc<dyn SearchStatsProvider>) -> Self {
        self.stats = Some(stats);
        self
    }
}

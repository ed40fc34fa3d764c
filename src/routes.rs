#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::services::Service;

/// Page identifiers. Navigation lives in an in-memory history, so the
/// paths never reach the address bar and nothing survives a reload.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Accueil,
    #[at("/fonctionnalites")]
    Fonctionnalites,
    #[at("/contact")]
    Contact,
    #[at("/apropos")]
    APropos,
    #[at("/assistant-vocal")]
    AssistantVocal,
    #[at("/emails-automatises")]
    EmailsAutomatises,
    #[at("/agents-conversationnels")]
    AgentsConversationnels,
    #[at("/creation-sites-web")]
    CreationSitesWeb,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What the shell renders below the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Features,
    About,
    Contact,
    Service(Service),
}

impl Route {
    /// Resolves a bare page tag such as `"apropos"`. Unknown tags give
    /// [`Route::NotFound`], which renders the landing page.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().trim_start_matches('/');
        if tag == "accueil" {
            return Route::Accueil;
        }
        Self::recognize(&format!("/{}", tag)).unwrap_or(Route::NotFound)
    }

    pub fn page(self) -> Page {
        match self {
            Route::Fonctionnalites => Page::Features,
            Route::APropos => Page::About,
            Route::Contact => Page::Contact,
            Route::AssistantVocal => Page::Service(Service::AssistantVocal),
            Route::EmailsAutomatises => Page::Service(Service::EmailsAutomatises),
            Route::AgentsConversationnels => Page::Service(Service::AgentsConversationnels),
            Route::CreationSitesWeb => Page::Service(Service::CreationSitesWeb),
            Route::Accueil | Route::NotFound => Page::Landing,
        }
    }
}

impl From<Service> for Route {
    fn from(service: Service) -> Self {
        match service {
            Service::AssistantVocal => Route::AssistantVocal,
            Service::EmailsAutomatises => Route::EmailsAutomatises,
            Service::AgentsConversationnels => Route::AgentsConversationnels,
            Service::CreationSitesWeb => Route::CreationSitesWeb,
        }
    }
}

/// Navbar entries in display order.
pub const NAV_ENTRIES: [(&str, Route); 4] = [
    ("Accueil", Route::Accueil),
    ("Services", Route::Fonctionnalites),
    ("Nous Contacter", Route::Contact),
    ("À propos", Route::APropos),
];

/// The entry highlighted for the current route. The landing page counts
/// as "Accueil" even when reached through an unknown identifier.
pub fn active_entry(current: Route) -> Option<Route> {
    match current {
        Route::NotFound => Some(Route::Accueil),
        route => NAV_ENTRIES
            .iter()
            .map(|(_, target)| *target)
            .find(|target| *target == route),
    }
}

/// Callbacks every page body receives from the shell.
#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub on_navigate: Callback<Route>,
    pub on_open_consultation: Callback<()>,
}

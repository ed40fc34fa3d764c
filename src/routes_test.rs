use super::*;

// =============================================================
// Tag resolution
// =============================================================

#[test]
fn known_tags_resolve_to_their_route() {
    assert_eq!(Route::from_tag("accueil"), Route::Accueil);
    assert_eq!(Route::from_tag("fonctionnalites"), Route::Fonctionnalites);
    assert_eq!(Route::from_tag("apropos"), Route::APropos);
    assert_eq!(Route::from_tag("contact"), Route::Contact);
    assert_eq!(Route::from_tag("assistant-vocal"), Route::AssistantVocal);
    assert_eq!(Route::from_tag("emails-automatises"), Route::EmailsAutomatises);
    assert_eq!(Route::from_tag("agents-conversationnels"), Route::AgentsConversationnels);
    assert_eq!(Route::from_tag("creation-sites-web"), Route::CreationSitesWeb);
}

#[test]
fn empty_tag_is_the_landing_route() {
    assert_eq!(Route::from_tag(""), Route::Accueil);
}

#[test]
fn unknown_tags_render_the_landing_page() {
    for tag in ["inconnu", "tarifs", "FONCTIONNALITES", "apropos/equipe", "🤖"] {
        assert_eq!(Route::from_tag(tag).page(), Page::Landing, "tag {tag:?}");
    }
}

#[test]
fn every_route_has_a_page() {
    assert_eq!(Route::Accueil.page(), Page::Landing);
    assert_eq!(Route::NotFound.page(), Page::Landing);
    assert_eq!(Route::Fonctionnalites.page(), Page::Features);
    assert_eq!(Route::AssistantVocal.page(), Page::Service(Service::AssistantVocal));
}

#[test]
fn service_routes_round_trip_through_page() {
    for service in Service::ALL {
        assert_eq!(Route::from(service).page(), Page::Service(service));
    }
}

// =============================================================
// Navbar highlighting
// =============================================================

#[test]
fn nav_targets_are_the_four_entries() {
    let labels: Vec<&str> = NAV_ENTRIES.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["Accueil", "Services", "Nous Contacter", "À propos"]);
}

#[test]
fn active_entry_matches_current_route() {
    assert_eq!(active_entry(Route::APropos), Some(Route::APropos));
    assert_eq!(active_entry(Route::NotFound), Some(Route::Accueil));
    assert_eq!(active_entry(Route::AssistantVocal), None);
}

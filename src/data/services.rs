use crate::components::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    AssistantVocal,
    EmailsAutomatises,
    AgentsConversationnels,
    CreationSitesWeb,
}

#[derive(Debug, PartialEq)]
pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

/// Copy for one service page.
#[derive(Debug, PartialEq)]
pub struct ServiceDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub intro: &'static str,
    pub benefits: &'static [Benefit],
    pub steps: &'static [&'static str],
    pub use_cases: &'static [&'static str],
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::AssistantVocal,
        Service::EmailsAutomatises,
        Service::AgentsConversationnels,
        Service::CreationSitesWeb,
    ];

    pub fn descriptor(self) -> &'static ServiceDescriptor {
        match self {
            Service::AssistantVocal => &ASSISTANT_VOCAL,
            Service::EmailsAutomatises => &EMAILS_AUTOMATISES,
            Service::AgentsConversationnels => &AGENTS_CONVERSATIONNELS,
            Service::CreationSitesWeb => &CREATION_SITES_WEB,
        }
    }
}

static ASSISTANT_VOCAL: ServiceDescriptor = ServiceDescriptor {
    icon: Icon::Phone,
    title: "Assistant Vocal IA",
    tagline: "Ne manquez plus jamais un appel.",
    summary: "Un agent vocal qui répond, qualifie et planifie 24/7.",
    intro: "Notre assistant vocal répond à vos clients avec une voix naturelle, comprend leurs demandes, \
            prend des rendez-vous directement dans votre agenda et consigne chaque échange dans votre CRM.",
    benefits: &[
        Benefit {
            icon: Icon::Clock,
            title: "Disponible 24/7",
            text: "Chaque appel reçoit une réponse, même le soir, la fin de semaine et les jours fériés.",
        },
        Benefit {
            icon: Icon::Calendar,
            title: "Rendez-vous instantanés",
            text: "Les créneaux libres sont proposés et réservés pendant l'appel.",
        },
        Benefit {
            icon: Icon::Database,
            title: "CRM toujours à jour",
            text: "Coordonnées, motif de l'appel et résumé sont enregistrés automatiquement.",
        },
    ],
    steps: &[
        "Analyse de vos appels entrants et de vos scénarios fréquents",
        "Conception du script et de la voix de votre agent",
        "Connexion à votre agenda, votre CRM et votre téléphonie",
        "Mise en service et amélioration continue à partir des appels réels",
    ],
    use_cases: &[
        "Concessions automobiles",
        "Cliniques et cabinets",
        "Services à domicile",
        "Restaurants",
    ],
};

static EMAILS_AUTOMATISES: ServiceDescriptor = ServiceDescriptor {
    icon: Icon::Mail,
    title: "Emails Automatisés",
    tagline: "Une boîte de réception qui se gère seule.",
    summary: "Tri, réponses et relances générés par l'IA, au ton de votre marque.",
    intro: "Nos agents courriel lisent, classent et répondent à vos messages, routent les demandes vers \
            la bonne personne et envoient des campagnes personnalisées à partir de votre base clients.",
    benefits: &[
        Benefit {
            icon: Icon::Zap,
            title: "Réponses en minutes",
            text: "Les questions courantes reçoivent une réponse précise sans intervention humaine.",
        },
        Benefit {
            icon: Icon::Target,
            title: "Segmentation automatique",
            text: "Chaque envoi est adapté au profil et à l'historique du destinataire.",
        },
        Benefit {
            icon: Icon::Shield,
            title: "Contrôle total",
            text: "Les messages sensibles sont soumis à votre approbation avant l'envoi.",
        },
    ],
    steps: &[
        "Cartographie de vos flux courriel actuels",
        "Rédaction des modèles et des règles de routage",
        "Intégration à votre messagerie et à votre CRM",
        "Suivi des performances et ajustements mensuels",
    ],
    use_cases: &["Hôtels", "Commerce en ligne", "Services professionnels"],
};

static AGENTS_CONVERSATIONNELS: ServiceDescriptor = ServiceDescriptor {
    icon: Icon::Bot,
    title: "Agents Conversationnels",
    tagline: "Vos clients servis à la seconde, sur tous les canaux.",
    summary: "Chatbots qui qualifient, répondent et prennent rendez-vous.",
    intro: "Déployés sur votre site, WhatsApp ou Messenger, nos agents conversationnels répondent aux \
            questions, qualifient les prospects et alimentent une base de données toujours à jour.",
    benefits: &[
        Benefit {
            icon: Icon::Users,
            title: "Qualification rapide",
            text: "Les bonnes questions sont posées avant de transférer le prospect à votre équipe.",
        },
        Benefit {
            icon: Icon::Brain,
            title: "Formés sur vos contenus",
            text: "L'agent s'appuie sur vos documents, vos tarifs et vos politiques internes.",
        },
        Benefit {
            icon: Icon::Globe,
            title: "Multicanal",
            text: "Une seule intelligence pour le site web, la messagerie instantanée et le SMS.",
        },
    ],
    steps: &[
        "Collecte de vos questions fréquentes et de vos documents",
        "Entraînement et validation des réponses",
        "Déploiement sur vos canaux",
        "Analyse des conversations et enrichissement continu",
    ],
    use_cases: &["Cabinets juridiques", "Agences immobilières", "Soutien technique"],
};

static CREATION_SITES_WEB: ServiceDescriptor = ServiceDescriptor {
    icon: Icon::Code,
    title: "Création de Sites Web",
    tagline: "Un site rapide, moderne et prêt pour l'IA.",
    summary: "Des sites performants qui intègrent vos agents dès le premier jour.",
    intro: "Nous concevons des sites vitrines et des portails clients rapides, optimisés pour le \
            référencement et connectés à vos outils d'automatisation.",
    benefits: &[
        Benefit {
            icon: Icon::Rocket,
            title: "Performance",
            text: "Pages légères et chargement instantané sur mobile comme sur ordinateur.",
        },
        Benefit {
            icon: Icon::Search,
            title: "Référencement",
            text: "Structure et contenu pensés pour être trouvés par vos clients.",
        },
        Benefit {
            icon: Icon::Bot,
            title: "IA intégrée",
            text: "Chatbot, formulaires intelligents et prise de rendez-vous connectés dès la mise en ligne.",
        },
    ],
    steps: &[
        "Atelier de découverte et maquettes",
        "Design et rédaction",
        "Développement et intégrations",
        "Mise en ligne, formation et maintenance",
    ],
    use_cases: &["PME", "Professionnels indépendants", "Organismes"],
};

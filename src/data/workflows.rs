use crate::components::icon::Icon;

#[derive(Debug, PartialEq)]
pub struct WorkflowStep {
    pub icon: Icon,
    pub label: &'static str,
    pub description: &'static str,
}

/// One showcase card: an input feeding an AI agent that produces outputs.
#[derive(Debug, PartialEq)]
pub struct Workflow {
    pub id: &'static str,
    pub title: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
    pub input_icon: Icon,
    pub input_label: &'static str,
    pub ai_icon: Icon,
    pub ai_label: &'static str,
    pub outputs: &'static [WorkflowStep],
    pub keywords: &'static [&'static str],
    pub gradient: &'static str,
    pub accent: &'static str,
}

const BRAND_GRADIENT: &str = "linear-gradient(135deg, #007AFF, #00D9F5)";
const BRAND_ACCENT: &str = "#007AFF";

pub static WORKFLOWS: &[Workflow] = &[
    Workflow {
        id: "car-dealership",
        title: "Agent Vocal IA",
        industry: "Concessions automobiles",
        description: "Transformez les appels clients en rendez-vous instantanés et mises à jour CRM",
        input_icon: Icon::Phone,
        input_label: "Appel Client",
        ai_icon: Icon::Phone,
        ai_label: "Agent Vocal IA",
        outputs: &[
            WorkflowStep {
                icon: Icon::Calendar,
                label: "Rendez-vous Planifié",
                description: "Réservation instantanée",
            },
            WorkflowStep {
                icon: Icon::Database,
                label: "CRM Mis à jour",
                description: "Données client enregistrées",
            },
        ],
        keywords: &["Appels 24/7", "Rendez-vous instantanés", "CRM mis à jour"],
        gradient: BRAND_GRADIENT,
        accent: BRAND_ACCENT,
    },
    Workflow {
        id: "law-firms",
        title: "Chatbot IA",
        industry: "Cabinets juridiques",
        description: "Qualification rapide des clients et collecte intelligente vers une base de données toujours à jour",
        input_icon: Icon::MessageCircle,
        input_label: "Client",
        ai_icon: Icon::Bot,
        ai_label: "Chatbot IA",
        outputs: &[
            WorkflowStep {
                icon: Icon::Calendar,
                label: "Prise de rendez-vous",
                description: "Clients pré-qualifiés instantanément",
            },
            WorkflowStep {
                icon: Icon::Database,
                label: "Base de Données",
                description: "Collecte intelligente et mise à jour continue",
            },
        ],
        keywords: &["Qualification rapide", "Collecte intelligente", "base de données toujours à jour"],
        gradient: BRAND_GRADIENT,
        accent: BRAND_ACCENT,
    },
    Workflow {
        id: "hotels",
        title: "Agent Email IA Complexe",
        industry: "Hôtels",
        description: "Gestion avancée des emails clients avec routage vers CRM et envois intelligents personnalisés",
        input_icon: Icon::Database,
        input_label: "Base Clients",
        ai_icon: Icon::Mail,
        ai_label: "Agent Email IA",
        outputs: &[
            WorkflowStep {
                icon: Icon::Building,
                label: "CRM Mis à Jour",
                description: "Réservations et enregistrements actualisés",
            },
            WorkflowStep {
                icon: Icon::Mail,
                label: "Envoi Intelligent",
                description: "Personnalisation et segmentation automatique",
            },
        ],
        keywords: &["Segmentation automatique", "Réservations directes", "envois intelligents"],
        gradient: BRAND_GRADIENT,
        accent: BRAND_ACCENT,
    },
    Workflow {
        id: "accountants",
        title: "Analyse de Données & Rapports IA",
        industry: "Cabinets comptables",
        description: "Analyse financière automatisée et génération de rapports",
        input_icon: Icon::Spreadsheet,
        input_label: "Données Financières",
        ai_icon: Icon::Cpu,
        ai_label: "Moteur d'Analyse IA",
        outputs: &[
            WorkflowStep {
                icon: Icon::BarChart,
                label: "Rapports Automatisés",
                description: "Génération instantanée",
            },
            WorkflowStep {
                icon: Icon::Presentation,
                label: "Diapositives Créées",
                description: "Présentations prêtes",
            },
            WorkflowStep {
                icon: Icon::Search,
                label: "Recherche Effectuée",
                description: "Intelligence en ligne",
            },
        ],
        keywords: &["Analyses automatiques", "Rapports instantanés", "Recherche intelligente"],
        gradient: BRAND_GRADIENT,
        accent: BRAND_ACCENT,
    },
];

//! The static project catalog shown in the gallery.
//!
//! DESIGN
//! ======
//! Records are ordered, `'static`, and deliberately irregular: project "01"
//! ships without stats and without a repository link, so every consumer must
//! treat those fields as optional rather than assume the richest record shape.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Image shown when a project's own asset fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A technology tag, mapped to a fixed label, decorative glyph, and accent class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tech {
    WordPress,
    WooCommerce,
    Elementor,
    Acf,
    CustomTheme,
    CustomPlugin,
    Php,
    JavaScript,
}

impl Tech {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WordPress => "WordPress",
            Self::WooCommerce => "WooCommerce",
            Self::Elementor => "Elementor",
            Self::Acf => "ACF",
            Self::CustomTheme => "Custom Theme",
            Self::CustomPlugin => "Custom Plugin",
            Self::Php => "PHP",
            Self::JavaScript => "JavaScript",
        }
    }

    /// Decorative glyph rendered next to the label in tech chips.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::WordPress | Self::CustomTheme | Self::Php | Self::JavaScript => "</>",
            Self::WooCommerce | Self::CustomPlugin => "⛭",
            Self::Elementor => "▤",
            Self::Acf => "▣",
        }
    }

    /// CSS accent class for the chip glyph.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::WordPress => "tech-chip--blue",
            Self::WooCommerce => "tech-chip--green",
            Self::Elementor => "tech-chip--purple",
            Self::Acf => "tech-chip--orange",
            Self::CustomTheme => "tech-chip--white",
            Self::CustomPlugin => "tech-chip--yellow",
            Self::Php => "tech-chip--indigo",
            Self::JavaScript => "tech-chip--yellow",
        }
    }
}

/// Headline numbers shown in the overlay's stats strip.
///
/// Values are display strings ("3k+", "40+"), not parsed quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub years: &'static str,
    pub team_size: &'static str,
    pub users: &'static str,
    pub features: &'static str,
}

/// Outbound links for a project. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

/// One project record in the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub tech: &'static [Tech],
    pub image: &'static str,
    pub stats: Option<ProjectStats>,
    pub links: ProjectLinks,
}

/// All projects, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: "01",
        title: "Bio et Bien-Être",
        badge: "FEATURED 2024",
        description: "Site e-commerce WordPress pour la vente d'huiles essentielles avec une expérience \
                      utilisateur fluide et engageante. Intégration complète de WooCommerce avec des \
                      fonctionnalités personnalisées pour la présentation des produits.",
        tech: &[Tech::WordPress, Tech::WooCommerce, Tech::Elementor, Tech::CustomPlugin],
        image: "/images/project1.jpg",
        // Early engagement: no public stats tracked and no repository access.
        stats: None,
        links: ProjectLinks { github: None, live: Some("https://www.mimarruecostours.com") },
    },
    Project {
        id: "02",
        title: "Marrakech Immobilier",
        badge: "NEW",
        description: "Site WordPress pour une agence immobilière à Marrakech avec système de recherche \
                      avancée de propriétés, intégration de carte interactive et formulaires de contact \
                      personnalisés.",
        tech: &[Tech::WordPress, Tech::CustomTheme, Tech::Acf, Tech::JavaScript],
        image: "/images/project2.jpg",
        stats: Some(ProjectStats { years: "4", team_size: "3", users: "3k+", features: "40+" }),
        links: ProjectLinks {
            github: Some("https://github.com/username/marrakech-immobilier"),
            live: Some("https://marrakech-immobilier.com"),
        },
    },
    Project {
        id: "03",
        title: "Centre Kech",
        badge: "TRENDING",
        description: "Site WordPress pour un centre de soutien et d'accompagnement scolaire à Marrakech. \
                      Système de réservation de cours, espace membre et blog éducatif intégrés.",
        tech: &[Tech::WordPress, Tech::Elementor, Tech::CustomPlugin, Tech::Php],
        image: "/images/project3.jpg",
        stats: Some(ProjectStats { years: "3", team_size: "2", users: "2k+", features: "30+" }),
        links: ProjectLinks {
            github: Some("https://github.com/username/centrekech"),
            live: Some("https://centerkech.vercel.app/"),
        },
    },
    Project {
        id: "04",
        title: "Artisanat Marocain",
        badge: "E-COMMERCE",
        description: "Boutique en ligne WordPress pour la vente d'artisanat marocain avec expédition \
                      internationale. Intégration multi-devises et système de paiement sécurisé.",
        tech: &[Tech::WordPress, Tech::WooCommerce, Tech::CustomTheme, Tech::JavaScript],
        image: "/images/project4.jpg",
        stats: Some(ProjectStats { years: "4", team_size: "3", users: "7k+", features: "60+" }),
        links: ProjectLinks {
            github: Some("https://github.com/username/artisanat-marocain"),
            live: Some("https://artisanat-marocain.com"),
        },
    },
    Project {
        id: "05",
        title: "Restaurant Tajine",
        badge: "FOOD & BEVERAGE",
        description: "Site WordPress pour un restaurant marocain avec système de réservation en ligne, \
                      menu interactif et galerie photo professionnelle.",
        tech: &[Tech::WordPress, Tech::Elementor, Tech::CustomPlugin, Tech::Acf],
        image: "/images/project5.jpg",
        stats: Some(ProjectStats { years: "3", team_size: "2", users: "4k+", features: "25+" }),
        links: ProjectLinks {
            github: Some("https://github.com/username/restaurant-tajine"),
            live: Some("https://restaurant-tajine.com"),
        },
    },
    Project {
        id: "06",
        title: "Atlas Trekking",
        badge: "TOURISM",
        description: "Site WordPress pour une agence de trekking dans l'Atlas avec réservation \
                      d'excursions, blog de voyage et témoignages clients. Optimisé pour le \
                      référencement local.",
        tech: &[Tech::WordPress, Tech::CustomTheme, Tech::WooCommerce, Tech::Php],
        image: "/images/project6.jpg",
        stats: Some(ProjectStats { years: "5", team_size: "3", users: "6k+", features: "45+" }),
        links: ProjectLinks {
            github: Some("https://github.com/username/atlas-trekking"),
            live: Some("https://atlas-trekking.com"),
        },
    },
];

/// Look up a project by its display id ("01".."06").
#[must_use]
pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

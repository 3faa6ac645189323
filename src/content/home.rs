use super::{ PageProfile, ProjectCard, DEFAULT_VERDICT_COLORS };

pub(super) const PROFILE: PageProfile = PageProfile {
    slug: "home",
    title: "Projets de sensibilisation",
    subtitle: "Deux mini-sites pour comprendre le cancer et les effets du tabac",
    theme_key: "home_theme",
    toast_ms: 1400,
    counter_ms: 0,
    found_label: "",
    verdict_colors: DEFAULT_VERDICT_COLORS,
    sections: &[],
    modals: &[],
    cheat_sheet: None,
    quiz: &[],
    projects: &[
        ProjectCard {
            id: "cardCancer",
            title: "Cancer 🧬",
            text: "ADN, mutations, cycle cellulaire, traitements et quiz.",
            hover_toast: "Ouvrir le projet : Cancer 🧬",
            slug: "cancer",
        },
        ProjectCard {
            id: "cardTabac",
            title: "Tabac 🚬",
            text: "Composition, dommages à l’ADN, organes touchés et quiz.",
            hover_toast: "Ouvrir le projet : Tabac 🚬",
            slug: "tabac",
        },
    ],
};

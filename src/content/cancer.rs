use super::{
    BlockSpec,
    CardSpec,
    ModalEntry,
    PageProfile,
    Run,
    SectionSpec,
    StatSpec,
    TopicSpec,
    DEFAULT_VERDICT_COLORS,
};
use crate::quiz::Question;

pub(super) const PROFILE: PageProfile = PageProfile {
    slug: "cancer",
    title: "Le cancer, comprendre pour mieux agir",
    subtitle: "ADN, mutations, cycle cellulaire et traitements",
    theme_key: "theme",
    toast_ms: 1600,
    counter_ms: 600,
    found_label: "Trouvé:",
    verdict_colors: DEFAULT_VERDICT_COLORS,
    sections: SECTIONS,
    modals: MODALS,
    cheat_sheet: Some("schema"),
    quiz: QUIZ,
    projects: &[],
};

const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "definition",
        title: "Qu’est-ce que le cancer ?",
        toc_label: Some("Définition"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("Le cancer est une "),
                Run::strong("multiplication incontrôlée de cellules"),
                Run::plain(
                    ". Normalement, chaque cellule se divise seulement quand l’organisme en a besoin, puis s’arrête."
                ),
            ]),
            BlockSpec::Para(&[
                Run::plain("Quand ce contrôle est perdu, les cellules s’accumulent et forment une "),
                Run::strong("tumeur"),
                Run::plain("."),
            ]),
            BlockSpec::Stats(&[
                StatSpec { label: "types de cancers connus", count: 200, suffix: "+" },
                StatSpec { label: "des cancers liés à des facteurs évitables", count: 40, suffix: "%" },
                StatSpec { label: "mutations peuvent suffire", count: 3, suffix: "" },
            ]),
        ],
    },
    SectionSpec {
        id: "adn",
        title: "ADN et mutations",
        toc_label: Some("ADN"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("L’"),
                Run::strong("ADN"),
                Run::plain(" contient l’information génétique : il porte les "),
                Run::strong("gènes"),
                Run::plain(", qui servent à fabriquer les "),
                Run::strong("protéines"),
                Run::plain("."),
            ]),
            BlockSpec::Para(&[
                Run::plain("Une "),
                Run::em("mutation"),
                Run::plain(
                    " est un changement dans l’ADN. La plupart sont réparées ou sans effet, mais certaines touchent des gènes qui contrôlent la division cellulaire."
                ),
            ]),
            BlockSpec::Bullets(&[
                &[Run::plain("Erreurs de copie lors de la division.")],
                &[Run::plain("Agents mutagènes : tabac, UV, certains produits chimiques.")],
                &[Run::plain("Prédispositions héréditaires, plus rares.")],
            ]),
        ],
    },
    SectionSpec {
        id: "cycle",
        title: "Le cycle cellulaire",
        toc_label: Some("Cycle cellulaire"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("Le cycle cellulaire possède des "),
                Run::strong("freins"),
                Run::plain(" (gènes suppresseurs de tumeur) et des "),
                Run::strong("accélérateurs"),
                Run::plain(" (proto-oncogènes)."),
            ]),
            BlockSpec::Cards(&[
                CardSpec {
                    title: "Frein cassé",
                    text: "Un gène suppresseur muté ne stoppe plus la division.",
                    toast: Some("Exemple : le gène TP53, gardien du génome 🛡️"),
                },
                CardSpec {
                    title: "Accélérateur bloqué",
                    text: "Un oncogène activé pousse la cellule à se diviser sans arrêt.",
                    toast: Some("Exemple : le gène RAS, souvent muté 🚀"),
                },
                CardSpec {
                    title: "Renouvellement normal",
                    text: "La peau, le sang et l’intestin se renouvellent en permanence.",
                    toast: Some("On ne peut pas stopper toutes les divisions du corps !"),
                },
            ]),
        ],
    },
    SectionSpec {
        id: "metastases",
        title: "Métastases",
        toc_label: Some("Métastases"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("Les "),
                Run::strong("métastases"),
                Run::plain(
                    " correspondent à la propagation des cellules cancéreuses vers d’autres organes, par le sang ou la lymphe."
                ),
            ]),
            BlockSpec::Para(&[
                Run::plain("C’est pourquoi un dépistage précoce, quand la tumeur est encore localisée, change beaucoup le pronostic."),
            ]),
        ],
    },
    SectionSpec {
        id: "traitements",
        title: "Traitements",
        toc_label: Some("Traitements"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("Les traitements sont souvent combinés. Cliquez sur un traitement pour en savoir plus."),
            ]),
            BlockSpec::Topics(&[
                TopicSpec { key: "chirurgie", label: "🔪 Chirurgie" },
                TopicSpec { key: "radio", label: "☢️ Radiothérapie" },
                TopicSpec { key: "chimio", label: "💊 Chimiothérapie" },
                TopicSpec { key: "ciblee", label: "🎯 Thérapies ciblées" },
                TopicSpec { key: "immuno", label: "🛡️ Immunothérapie" },
            ]),
        ],
    },
    SectionSpec {
        id: "prevention",
        title: "Prévention",
        toc_label: Some("Prévention"),
        blocks: &[
            BlockSpec::Bullets(&[
                &[Run::plain("Ne pas fumer, limiter l’alcool.")],
                &[Run::plain("Se protéger du soleil et des UV.")],
                &[Run::plain("Bouger et manger varié.")],
                &[Run::plain("Participer aux dépistages recommandés.")],
            ]),
        ],
    },
];

const MODALS: &[(&str, ModalEntry)] = &[
    (
        "chirurgie",
        ModalEntry {
            title: "Chirurgie (🔪)",
            body: r#"
      <p><strong>But :</strong> retirer la tumeur.</p>
      <ul>
        <li>Très efficace si la tumeur est localisée.</li>
        <li>Souvent combinée à chimio/radiothérapie.</li>
      </ul>
    "#,
        },
    ),
    (
        "radio",
        ModalEntry {
            title: "Radiothérapie (☢️)",
            body: r#"
      <p><strong>Principe :</strong> des rayons endommagent l’ADN des cellules tumorales.</p>
      <ul>
        <li>Agit localement sur une zone.</li>
        <li>Peut aussi toucher des tissus voisins.</li>
      </ul>
    "#,
        },
    ),
    (
        "chimio",
        ModalEntry {
            title: "Chimiothérapie (💊)",
            body: r#"
      <p><strong>Principe :</strong> médicaments qui ciblent surtout les cellules qui se divisent vite.</p>
      <ul>
        <li>Peut expliquer la chute de cheveux / fatigue.</li>
        <li>Objectif : tuer plus de cellules tumorales que saines.</li>
      </ul>
    "#,
        },
    ),
    (
        "ciblee",
        ModalEntry {
            title: "Thérapies ciblées (🎯)",
            body: r#"
      <p><strong>Principe :</strong> viser une protéine ou mutation spécifique de la tumeur.</p>
      <ul>
        <li>Souvent moins toxique que certaines chimios.</li>
        <li>Nécessite de connaître le profil de la tumeur.</li>
      </ul>
    "#,
        },
    ),
    (
        "immuno",
        ModalEntry {
            title: "Immunothérapie (🛡️)",
            body: r#"
      <p><strong>Principe :</strong> aider le système immunitaire à reconnaître/attaquer la tumeur.</p>
      <ul>
        <li>Très efficace pour certains cancers.</li>
        <li>Pas identique pour tous : dépend du type de tumeur.</li>
      </ul>
    "#,
        },
    ),
    (
        "schema",
        ModalEntry {
            title: "Mini schéma : ADN → Cancer",
            body: r#"
      <div style="display:grid; gap:10px;">
        <div style="padding:12px;border:1px solid var(--border);border-radius:16px;background:var(--card)">
          <strong>ADN</strong> (information génétique) → <strong>gènes</strong> → <strong>protéines</strong>
        </div>
        <div style="padding:12px;border:1px solid var(--border);border-radius:16px;background:var(--card)">
          Si mutation sur gènes du <strong>cycle cellulaire</strong> :
          frein cassé / accélérateur bloqué → <strong>division incontrôlée</strong>
        </div>
        <div style="padding:12px;border:1px solid var(--border);border-radius:16px;background:var(--card)">
          → <strong>tumeur</strong> → parfois <strong>métastases</strong>
        </div>
      </div>
    "#,
        },
    ),
];

const QUIZ: &[Question] = &[
    Question::new(
        "Le cancer est surtout…",
        &[
            "Une infection due à une bactérie",
            "Une multiplication incontrôlée de cellules",
            "Une maladie qui touche uniquement le sang",
            "Un problème de digestion",
        ],
        1,
    ),
    Question::new(
        "Une mutation est…",
        &["Un sport", "Un changement dans l’ADN", "Une vitamine", "Un organe"],
        1,
    ),
    Question::new(
        "Les métastases correspondent à…",
        &[
            "Une guérison complète",
            "La propagation des cellules cancéreuses vers d’autres organes",
            "La réparation de l’ADN",
            "La production d’hormones",
        ],
        1,
    ),
    Question::new(
        "Pourquoi ne peut-on pas stopper toutes les divisions cellulaires dans le corps ?",
        &[
            "Parce que la peau, le sang et l’intestin doivent se renouveler",
            "Parce que l’ADN disparaît",
            "Parce que les cellules deviennent invisibles",
            "Parce que les virus l’empêchent",
        ],
        0,
    ),
    Question::new(
        "L’immunothérapie vise à…",
        &[
            "Remplacer le sang",
            "Aider le système immunitaire à attaquer la tumeur",
            "Augmenter les UV",
            "Arrêter le cœur",
        ],
        1,
    ),
];

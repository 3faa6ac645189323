use super::{
    BlockSpec,
    CardSpec,
    ModalEntry,
    PageProfile,
    Run,
    SectionSpec,
    StatSpec,
    TopicSpec,
    VerdictColors,
};
use crate::quiz::Question;

pub(super) const PROFILE: PageProfile = PageProfile {
    slug: "tabac",
    title: "Tabac et cancer",
    subtitle: "Comment la fumée abîme l’ADN, et pourquoi arrêter vaut toujours le coup",
    theme_key: "tabac_theme",
    toast_ms: 1600,
    counter_ms: 650,
    found_label: "Trouvé :",
    verdict_colors: VerdictColors {
        neutral: "var(--border)",
        correct: "rgba(46,246,164,0.65)",
        incorrect: "rgba(255,77,77,0.70)",
    },
    sections: SECTIONS,
    modals: MODALS,
    cheat_sheet: Some("danger"),
    quiz: QUIZ,
    projects: &[],
};

const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "chiffres",
        title: "Quelques chiffres",
        toc_label: Some("Chiffres"),
        blocks: &[
            BlockSpec::Stats(&[
                StatSpec { label: "substances chimiques dans la fumée", count: 7000, suffix: "+" },
                StatSpec { label: "cancérigènes avérés", count: 70, suffix: "" },
                StatSpec { label: "des cancers du poumon liés au tabac", count: 85, suffix: "%" },
            ]),
            BlockSpec::Para(&[
                Run::plain("Le tabac reste la première cause de cancer évitable."),
            ]),
        ],
    },
    SectionSpec {
        id: "composition",
        title: "Que contient une cigarette ?",
        toc_label: Some("Composition"),
        blocks: &[
            BlockSpec::Bullets(&[
                &[
                    Run::strong("Nicotine"),
                    Run::plain(" : responsable de la dépendance, formule "),
                    Run::code("C10H14N2"),
                    Run::plain("."),
                ],
                &[Run::strong("Goudrons"), Run::plain(" : ils contiennent la plupart des substances cancérigènes.")],
                &[Run::strong("Monoxyde de carbone"), Run::plain(" : il prend la place de l’oxygène dans le sang.")],
            ]),
            BlockSpec::Cards(&[
                CardSpec {
                    title: "Dépendance",
                    text: "La nicotine agit sur le cerveau en quelques secondes.",
                    toast: Some("La nicotine n’est pas le principal cancérigène 💡"),
                },
                CardSpec {
                    title: "Fumée passive",
                    text: "L’entourage respire aussi les substances toxiques.",
                    toast: Some("Aucune dose de fumée n’est sans risque ⚠️"),
                },
            ]),
        ],
    },
    SectionSpec {
        id: "mutations",
        title: "Tabac et ADN",
        toc_label: Some("ADN"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("Le tabac apporte des substances "),
                Run::strong("mutagènes"),
                Run::plain(" : elles augmentent le nombre de mutations dans l’ADN."),
            ]),
            BlockSpec::Bullets(&[
                &[Run::em("Adduits"), Run::plain(" : des molécules se fixent sur l’ADN.")],
                &[Run::em("Stress oxydatif"), Run::plain(" : des radicaux libres cassent l’ADN.")],
                &[Run::plain("Erreurs de copie, puis dérèglement du cycle cellulaire.")],
            ]),
        ],
    },
    SectionSpec {
        id: "organes",
        title: "Organes touchés",
        toc_label: Some("Organes"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("Cliquez sur un organe pour voir comment le tabac l’affecte."),
            ]),
            BlockSpec::Topics(&[
                TopicSpec { key: "poumon", label: "🫁 Poumons" },
                TopicSpec { key: "gorge", label: "👄 Bouche / Gorge" },
                TopicSpec { key: "coeur", label: "❤️ Cœur / Vaisseaux" },
            ]),
        ],
    },
    SectionSpec {
        id: "arret",
        title: "Arrêter de fumer",
        toc_label: Some("Arrêter"),
        blocks: &[
            BlockSpec::Para(&[
                Run::plain("Arrêter de fumer "),
                Run::strong("réduit progressivement les risques"),
                Run::plain(", quel que soit l’âge."),
            ]),
            BlockSpec::Bullets(&[
                &[Run::plain("Quelques jours : le monoxyde de carbone est éliminé.")],
                &[Run::plain("Quelques mois : le souffle s’améliore.")],
                &[Run::plain("Dix ans : le risque de cancer du poumon est divisé par deux.")],
            ]),
        ],
    },
];

const MODALS: &[(&str, ModalEntry)] = &[
    (
        "poumon",
        ModalEntry {
            title: "Poumons (🫁)",
            body: r#"
      <p>La fumée arrive directement dans les poumons.</p>
      <ul>
        <li>Mutagènes + inflammation → mutations.</li>
        <li>Risque augmenté de cancer du poumon.</li>
      </ul>
    "#,
        },
    ),
    (
        "gorge",
        ModalEntry {
            title: "Bouche / Gorge (👄)",
            body: r#"
      <p>Les muqueuses sont en contact avec la fumée.</p>
      <ul>
        <li>Irritation chronique.</li>
        <li>Substances cancérigènes → dommages ADN.</li>
      </ul>
    "#,
        },
    ),
    (
        "coeur",
        ModalEntry {
            title: "Cœur / Vaisseaux (❤️)",
            body: r#"
      <p>Le tabac n'affecte pas seulement l’ADN : il augmente aussi les risques cardio-vasculaires.</p>
      <ul>
        <li>Monoxyde de carbone : moins d’oxygène dans le sang.</li>
        <li>Inflammation + effet sur les vaisseaux.</li>
      </ul>
    "#,
        },
    ),
    (
        "danger",
        ModalEntry {
            title: "Pourquoi c’est dangereux ? (🧯)",
            body: r#"
      <div style="display:grid; gap:10px;">
        <div style="padding:12px;border:1px solid var(--border);border-radius:16px;background:var(--card)">
          <strong>Tabac</strong> → substances <strong>mutagènes</strong>
        </div>
        <div style="padding:12px;border:1px solid var(--border);border-radius:16px;background:var(--card)">
          Mutagènes → <strong>dommages à l’ADN</strong> (adduits, cassures, stress oxydatif)
        </div>
        <div style="padding:12px;border:1px solid var(--border);border-radius:16px;background:var(--card)">
          Dommages → erreurs de copie → <strong>mutations</strong> → risque de <strong>cancer</strong>
        </div>
      </div>
    "#,
        },
    ),
];

const QUIZ: &[Question] = &[
    Question::new(
        "La nicotine est surtout…",
        &["Une substance cancérigène principale", "Responsable de la dépendance", "Un type de goudron", "Une vitamine"],
        1,
    ),
    Question::new(
        "Un mutagène est…",
        &["Une substance qui augmente les mutations", "Une cellule du sang", "Un organe", "Un vaccin"],
        0,
    ),
    Question::new(
        "Le tabac peut endommager l’ADN par…",
        &[
            "Adduits à l’ADN et stress oxydatif",
            "Augmentation de la taille des chromosomes",
            "Réparation parfaite",
            "Aucune action",
        ],
        0,
    ),
    Question::new(
        "Pourquoi le tabac augmente le risque de cancer ?",
        &[
            "Il diminue la température du corps",
            "Il favorise mutations + dérèglement du cycle cellulaire",
            "Il augmente la vitamine C",
            "Il empêche les divisions",
        ],
        1,
    ),
    Question::new(
        "Arrêter de fumer…",
        &["Ne change rien", "Réduit progressivement les risques", "Augmente les mutations", "Crée des métastases"],
        1,
    ),
];

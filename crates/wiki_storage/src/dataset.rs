use std::collections::HashSet;
use std::sync::Arc;
use wiki_core::{Article, Error, Result, SENTENCE_COUNT};

struct Entry {
    slug: &'static str,
    title: &'static str,
    intro: &'static str,
    sentences: [&'static str; SENTENCE_COUNT],
    categories: &'static [&'static str],
}

const ENTRIES: &[Entry] = &[
    Entry {
        slug: "startseite",
        title: "Startseite",
        intro: "Willkommen bei der freien Enzyklopädie in deutscher Sprache.",
        sentences: [
            "Hier findest du kompakte, neutrale Artikel in genau fünf Sätzen.",
            "Nutze die Suche oben, stöbere über die Kategorien oder wähle einen Zufallsartikel.",
            "Interne Verweise helfen dir, schnell zwischen verwandten Themen zu navigieren.",
            "Aktiviere den Dark Mode für eine angenehme Darstellung in dunkler Umgebung.",
            "Diese Seite ist optimiert für Barrierefreiheit und schnelle Ladezeiten.",
        ],
        categories: &["Portal"],
    },
    Entry {
        slug: "computer",
        title: "Computer",
        intro: "Ein Computer ist eine programmierbare Maschine zur Verarbeitung von Informationen.",
        sentences: [
            "Er empfängt Eingaben, verarbeitet Daten nach definierten Regeln und liefert Ausgaben.",
            "Seine Architektur umfasst typischerweise Prozessor, Arbeitsspeicher, Massenspeicher und Schnittstellen.",
            "Computer sind Grundlage moderner Informationsgesellschaften und industrieller Produktion.",
            "Sie existieren in vielfältigen Formen von eingebetteten Systemen bis zu Hochleistungsrechnern.",
            "Software legt fest, welche Aufgaben ein Computer konkret ausführt.",
        ],
        categories: &["Technologie", "Informatik"],
    },
    Entry {
        slug: "demokratie",
        title: "Demokratie",
        intro: "Demokratie ist eine Regierungsform, in der politische Macht von den Bürgerinnen und Bürgern ausgeht.",
        sentences: [
            "Sie beruht auf freien Wahlen, Rechtsstaatlichkeit und dem Schutz von Grundrechten.",
            "Gewaltenteilung und unabhängige Institutionen begrenzen staatliche Macht.",
            "In repräsentativen Systemen übertragen Wählerinnen und Wähler Mandate an Abgeordnete.",
            "Direkte Elemente wie Volksentscheide ergänzen mancherorts die Repräsentation.",
            "Pluralismus und öffentliche Debatten sind zentrale Voraussetzungen funktionierender Demokratie.",
        ],
        categories: &["Politik", "Gesellschaft"],
    },
    Entry {
        slug: "photosynthese",
        title: "Photosynthese",
        intro: "Photosynthese ist der biologische Prozess, bei dem Lichtenergie in chemische Energie umgewandelt wird.",
        sentences: [
            "Pflanzen, Algen und bestimmte Bakterien nutzen Chlorophyll, um Licht zu absorbieren.",
            "Aus Kohlendioxid und Wasser entstehen energiereiche Verbindungen und Sauerstoff.",
            "Der Prozess gliedert sich in lichtabhängige Reaktionen und den Calvin-Zyklus.",
            "Photosynthese bildet die Grundlage fast aller Nahrungsketten auf der Erde.",
            "Ihre Effizienz hängt von Faktoren wie Lichtintensität, Temperatur und Nährstoffen ab.",
        ],
        categories: &["Biologie", "Chemie"],
    },
    Entry {
        slug: "kunstliche-intelligenz",
        title: "Künstliche Intelligenz",
        intro: "Künstliche Intelligenz befasst sich mit Systemen, die Aufgaben mit intelligentem Verhalten lösen.",
        sentences: [
            "Methoden reichen von symbolischen Verfahren bis zu statistischem Lernen und neuronalen Netzen.",
            "Anwendungen finden sich in Sprache, Bildverarbeitung, Medizin und Industrie.",
            "Machine Learning lernt Muster aus Daten und verbessert Modelle iterativ.",
            "Fragen nach Transparenz, Fairness und Sicherheit begleiten die Verbreitung.",
            "Regulatorische Rahmen sollen verantwortungsvolle Entwicklung und Nutzung gewährleisten.",
        ],
        categories: &["Technologie", "Informatik"],
    },
    Entry {
        slug: "ozean",
        title: "Ozean",
        intro: "Ozeane bedecken den größten Teil der Erdoberfläche und prägen Klima sowie Biodiversität.",
        sentences: [
            "Meeresströmungen verteilen Wärme und beeinflussen Wetterphänomene weltweit.",
            "Ökosysteme reichen von küstennahen Zonen bis zu lichtlosen Tiefseegebieten.",
            "Verschmutzung und Übernutzung gefährden Lebensräume und Ressourcen.",
            "Schutzgebiete und nachhaltige Nutzung sollen maritime Vielfalt bewahren.",
            "Forschung liefert Daten für Klimamodelle und Meeresmanagement.",
        ],
        categories: &["Geographie", "Umwelt"],
    },
    Entry {
        slug: "algorithmus",
        title: "Algorithmus",
        intro: "Ein Algorithmus ist eine endliche, eindeutige Vorschrift zur Lösung eines Problems.",
        sentences: [
            "Er beschreibt Schritte, die von Menschen oder Maschinen ausgeführt werden können.",
            "Korrektheit, Effizienz und Verständlichkeit sind wichtige Qualitätsmerkmale.",
            "Datenstrukturen beeinflussen Aufwand und Implementierung.",
            "Algorithmen werden in Pseudocode, Flussdiagrammen oder Programmiersprachen formuliert.",
            "Komplexitätstheorie untersucht systematisch Ressourcenbedarf und Grenzen der Berechenbarkeit.",
        ],
        categories: &["Informatik"],
    },
    Entry {
        slug: "energie",
        title: "Energie",
        intro: "Energie ist die Fähigkeit eines Systems, Arbeit zu verrichten oder Wärme abzugeben.",
        sentences: [
            "Sie tritt in Formen wie mechanischer, thermischer, elektrischer und chemischer Energie auf.",
            "Erhaltungssätze beschreiben, wie Energie in abgeschlossenen Systemen konstant bleibt.",
            "Umwandlungen sind mit Verlusten verbunden, die als Entropiezunahme erscheinen.",
            "Erneuerbare Quellen sollen fossile Energieträger schrittweise ersetzen.",
            "Effizienzmaßnahmen reduzieren Bedarf und Emissionen in allen Sektoren.",
        ],
        categories: &["Physik", "Umwelt"],
    },
    Entry {
        slug: "gravitation",
        title: "Gravitation",
        intro: "Gravitation ist die universelle Anziehung zwischen Massen.",
        sentences: [
            "Sie hält Planeten in Umlaufbahnen und strukturiert Galaxien.",
            "Newtons Theorie beschreibt sie als Kraft, Einsteins Allgemeine Relativität als Krümmung der Raumzeit.",
            "Messungen und Beobachtungen bestätigen ihre Wirkung im Großen und Kleinen.",
            "Gravitationswellen liefern Einblicke in energiereiche kosmische Ereignisse.",
            "Präzisionsmessungen testen die Gültigkeit physikalischer Modelle.",
        ],
        categories: &["Physik", "Astronomie"],
    },
    Entry {
        slug: "internet",
        title: "Internet",
        intro: "Das Internet ist ein globales Netzwerk miteinander verbundener Rechnernetze.",
        sentences: [
            "Es basiert auf Protokollen wie TCP/IP und ermöglicht den Austausch von Datenpaketen.",
            "Dienste wie das Web, E-Mail und Streaming bauen auf dieser Infrastruktur auf.",
            "Skalierung und Redundanz sichern Verfügbarkeit trotz hoher Lasten.",
            "Sicherheitsfragen betreffen Datenschutz, Angriffe und Resilienz.",
            "Standards werden von Gremien wie der IETF weiterentwickelt.",
        ],
        categories: &["Technologie", "Kommunikation"],
    },
    Entry {
        slug: "musik",
        title: "Musik",
        intro: "Musik ist eine Kunstform, die Klänge in Struktur und Zeit ordnet.",
        sentences: [
            "Rhythmus, Melodie, Harmonik und Klangfarbe bilden zentrale Gestaltungsmittel.",
            "Stile variieren kulturell und historisch von klassisch bis elektronisch.",
            "Aufführungspraxis und Aufnahmeverfahren prägen das Hörerlebnis.",
            "Musik kann Emotionen ausdrücken, Kommunikation fördern und Gemeinschaft stiften.",
            "Forschung untersucht Wirkung, Wahrnehmung und kognitive Grundlagen musikalischen Erlebens.",
        ],
        categories: &["Kultur", "Kunst"],
    },
    Entry {
        slug: "sprache",
        title: "Sprache",
        intro: "Sprache ist ein System von Zeichen, mit dem Menschen Bedeutungen austauschen.",
        sentences: [
            "Sie beruht auf Lauten oder Schrift und folgt grammatischen Regeln.",
            "Sprachen verändern sich durch Gebrauch, Kontakt und Innovation.",
            "Linguistik analysiert Struktur, Erwerb und Variation von Sprache.",
            "Mehrsprachigkeit ist weltweit verbreitet und gesellschaftlich relevant.",
            "Digitale Medien beeinflussen Register, Normen und Verbreitung.",
        ],
        categories: &["Linguistik", "Kultur"],
    },
    Entry {
        slug: "stadt",
        title: "Stadt",
        intro: "Eine Stadt ist eine dicht bebaute Siedlung mit vielfältigen Funktionen.",
        sentences: [
            "Sie bündelt Wohnen, Arbeit, Bildung, Kultur und Verkehr.",
            "Stadtentwicklung balanciert Wachstum, Lebensqualität und Nachhaltigkeit.",
            "Infrastruktur und Planung prägen Mobilität und Flächennutzung.",
            "Soziale Mischung und Teilhabe fördern Integration und Resilienz.",
            "Digitale Technologien unterstützen Verwaltung und beteiligungsorientierte Prozesse.",
        ],
        categories: &["Geographie", "Gesellschaft"],
    },
];

impl Entry {
    fn to_article(&self) -> Article {
        Article {
            slug: self.slug.to_string(),
            title: self.title.to_string(),
            intro: self.intro.to_string(),
            sentences: self.sentences.map(str::to_string),
            categories: self.categories.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The immutable article collection. Built once at startup and shared
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    articles: Arc<[Article]>,
}

impl Dataset {
    /// Build the dataset from the embedded article table.
    pub fn load() -> Result<Self> {
        let dataset = Self::from_articles(ENTRIES.iter().map(Entry::to_article).collect())?;
        tracing::debug!("Loaded {} articles", dataset.len());
        Ok(dataset)
    }

    /// Build a dataset from arbitrary records, rejecting any that break the
    /// slug or sentence invariants.
    pub fn from_articles(articles: Vec<Article>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            validate(article)?;
            if !seen.insert(article.slug.as_str()) {
                return Err(Error::Dataset(format!("duplicate slug '{}'", article.slug)));
            }
        }
        Ok(Self {
            articles: articles.into(),
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }
}

fn validate(article: &Article) -> Result<()> {
    let slug_ok = !article.slug.is_empty()
        && article
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !slug_ok {
        return Err(Error::Dataset(format!("slug '{}' is not URL-safe", article.slug)));
    }
    if let Some(i) = article.sentences.iter().position(|s| s.trim().is_empty()) {
        return Err(Error::Dataset(format!(
            "article '{}' is missing sentence {} of {}",
            article.slug,
            i + 1,
            SENTENCE_COUNT
        )));
    }
    Ok(())
}

//! Runtime language switching. The active language lives in a Yew context
//! provided by the landing page; `translate` does a static key-path lookup
//! that falls back to English for keys a language has not translated yet.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    It,
    Ar,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Fr, Language::It, Language::Ar]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Ar => "ar",
        }
    }

    /// Short label shown in the header language switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
            Language::It => "IT",
            Language::Ar => "AR",
        }
    }

    /// Parses a BCP 47 tag by its primary subtag, so "fr-FR" and "fr" both
    /// resolve to `Fr`. Unsupported languages yield `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "it" => Some(Language::It),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn direction(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Picks the initial language from the browser locale, restricted to the
    /// supported set. Falls back to English when undetectable or unsupported.
    pub fn detect() -> Language {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .and_then(|tag| Language::from_code(&tag))
            .unwrap_or_default()
    }
}

/// Sets the document layout direction to match the language. Must run
/// synchronously with every language change and once on startup.
pub fn apply_direction(lang: Language) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("dir", lang.direction());
        }
    }
}

pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    match lang {
        Language::En => en(key),
        Language::Fr => fr(key),
        Language::It => it(key),
        Language::Ar => ar(key),
    }
}

/// Resolves a key in the given language, falling back to English and finally
/// to the key itself so a typo shows up on the page instead of vanishing.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(Language::En, key))
        .unwrap_or(key)
}

/// Context value handed down from the landing page. `set` swaps the active
/// language; every consumer re-renders through context propagation.
#[derive(Clone, PartialEq)]
pub struct I18n {
    pub lang: Language,
    pub set: Callback<Language>,
}

impl I18n {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.lang, key)
    }

    pub fn t_with_year(&self, key: &str, year: i32) -> String {
        self.t(key).replace("{year}", &year.to_string())
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context missing; Landing provides it")
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "company" => "Aurum Studio",
        "nav.services" => "Services",
        "nav.contact" => "Contact",
        "hero.headline" => "We build software that lasts",
        "hero.headline_custom" => "Custom web applications, end to end",
        "hero.headline_cloud" => "Cloud infrastructure without the drama",
        "hero.headline_payment" => "Payments and billing, done right",
        "hero.headline_ai" => "Practical AI for real products",
        "hero.headline_digital" => "Your partner in digital craft",
        "hero.description" => "A small studio of senior engineers designing, building and running software for companies that care about quality.",
        "hero.contact_us" => "Contact us",
        "hero.our_work" => "Our work",
        "features.custom_web_apps" => "Custom web apps",
        "features.custom_web_apps_desc" => "Modern, server-driven applications focused on performance.",
        "features.cloud_devops" => "Cloud & DevOps",
        "features.cloud_devops_desc" => "CI/CD, infrastructure automation and reliable deployments.",
        "features.support" => "Support",
        "features.consulting" => "Consulting",
        "services_title" => "What we do",
        "services.frontend" => "Front-end",
        "services.frontend_desc" => "Fast, accessible interfaces your users will actually enjoy.",
        "services.backend" => "Back-end",
        "services.backend_desc" => "APIs, integrations and services that scale with you.",
        "services.support_desc" => "On-call, maintenance and continuous improvement.",
        "services.consulting_desc" => "Architecture reviews and hands-on team training.",
        "contact_title" => "Get in touch",
        "contact_subtitle" => "Let's create something exceptional together",
        "footer" => "© {year} Aurum Studio. All rights reserved.",
        "modal.title" => "Send us a message",
        "modal.name" => "Name",
        "modal.email" => "Email",
        "modal.subject" => "Subject",
        "modal.message" => "Message",
        "modal.send" => "Send",
        "modal.sending" => "Sending...",
        "modal.close" => "Close",
        "modal.errors.name_required" => "Please enter your name",
        "modal.errors.email_required" => "Please enter your email address",
        "modal.errors.email_invalid" => "That doesn't look like a valid email address",
        "modal.errors.subject_required" => "Please enter a subject",
        "modal.errors.message_required" => "Please write a message",
        "start_project.title" => "Start a project",
        "start_project.desc" => "Tell us what you want to build and we'll get back to you within one business day.",
        "start_project.request_quote" => "Request a quote",
        "start_project.secure" => "No commitment, no spam.",
        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    Some(match key {
        "company" => "Aurum Studio",
        "nav.services" => "Services",
        "nav.contact" => "Contact",
        "hero.headline" => "Des logiciels faits pour durer",
        "hero.headline_custom" => "Applications web sur mesure, de bout en bout",
        "hero.headline_cloud" => "Une infrastructure cloud sans drame",
        "hero.headline_payment" => "Paiements et facturation, bien faits",
        "hero.headline_ai" => "De l'IA pratique pour de vrais produits",
        "hero.headline_digital" => "Votre partenaire du numérique",
        "hero.description" => "Un petit studio d'ingénieurs seniors qui conçoit, construit et opère des logiciels pour des entreprises exigeantes.",
        "hero.contact_us" => "Contactez-nous",
        "hero.our_work" => "Nos réalisations",
        "features.custom_web_apps" => "Applications web sur mesure",
        "features.custom_web_apps_desc" => "Des applications modernes, axées sur la performance.",
        "features.cloud_devops" => "Cloud & DevOps",
        "features.cloud_devops_desc" => "CI/CD, automatisation d'infrastructure et déploiements fiables.",
        "features.support" => "Support",
        "features.consulting" => "Conseil",
        "services_title" => "Ce que nous faisons",
        "services.frontend" => "Front-end",
        "services.frontend_desc" => "Des interfaces rapides et accessibles.",
        "services.backend" => "Back-end",
        "services.backend_desc" => "APIs, intégrations et services qui évoluent avec vous.",
        "services.support_desc" => "Astreinte, maintenance et amélioration continue.",
        "services.consulting_desc" => "Revues d'architecture et formation des équipes.",
        "contact_title" => "Contactez-nous",
        "contact_subtitle" => "Créons ensemble quelque chose d'exceptionnel",
        "footer" => "© {year} Aurum Studio. Tous droits réservés.",
        "modal.title" => "Envoyez-nous un message",
        "modal.name" => "Nom",
        "modal.email" => "E-mail",
        "modal.subject" => "Objet",
        "modal.message" => "Message",
        "modal.send" => "Envoyer",
        "modal.sending" => "Envoi...",
        "modal.close" => "Fermer",
        "modal.errors.name_required" => "Veuillez saisir votre nom",
        "modal.errors.email_required" => "Veuillez saisir votre adresse e-mail",
        "modal.errors.email_invalid" => "Cette adresse e-mail ne semble pas valide",
        "modal.errors.subject_required" => "Veuillez saisir un objet",
        "modal.errors.message_required" => "Veuillez écrire un message",
        "start_project.title" => "Démarrer un projet",
        "start_project.desc" => "Dites-nous ce que vous voulez construire et nous vous répondrons sous un jour ouvré.",
        "start_project.request_quote" => "Demander un devis",
        "start_project.secure" => "Sans engagement, sans spam.",
        _ => return None,
    })
}

fn it(key: &str) -> Option<&'static str> {
    Some(match key {
        "company" => "Aurum Studio",
        "nav.services" => "Servizi",
        "nav.contact" => "Contatti",
        "hero.headline" => "Software costruito per durare",
        "hero.headline_custom" => "Applicazioni web su misura, da cima a fondo",
        "hero.headline_cloud" => "Infrastruttura cloud senza drammi",
        "hero.headline_payment" => "Pagamenti e fatturazione, fatti bene",
        "hero.headline_ai" => "IA pratica per prodotti reali",
        "hero.headline_digital" => "Il vostro partner digitale",
        "hero.description" => "Un piccolo studio di ingegneri senior che progetta, costruisce e gestisce software per aziende che tengono alla qualità.",
        "hero.contact_us" => "Contattaci",
        "hero.our_work" => "I nostri lavori",
        "features.custom_web_apps" => "App web su misura",
        "features.custom_web_apps_desc" => "Applicazioni moderne, orientate alle prestazioni.",
        "features.cloud_devops" => "Cloud & DevOps",
        "features.cloud_devops_desc" => "CI/CD, automazione dell'infrastruttura e deployment affidabili.",
        "features.support" => "Supporto",
        "features.consulting" => "Consulenza",
        "services_title" => "Cosa facciamo",
        "services.frontend" => "Front-end",
        "services.frontend_desc" => "Interfacce veloci e accessibili.",
        "services.backend" => "Back-end",
        "services.backend_desc" => "API, integrazioni e servizi che crescono con voi.",
        "services.support_desc" => "Reperibilità, manutenzione e miglioramento continuo.",
        "services.consulting_desc" => "Revisioni di architettura e formazione dei team.",
        "contact_title" => "Mettiti in contatto",
        "contact_subtitle" => "Creiamo insieme qualcosa di eccezionale",
        "footer" => "© {year} Aurum Studio. Tutti i diritti riservati.",
        "modal.title" => "Inviaci un messaggio",
        "modal.name" => "Nome",
        "modal.email" => "Email",
        "modal.subject" => "Oggetto",
        "modal.message" => "Messaggio",
        "modal.send" => "Invia",
        "modal.sending" => "Invio...",
        "modal.close" => "Chiudi",
        "modal.errors.name_required" => "Inserisci il tuo nome",
        "modal.errors.email_required" => "Inserisci il tuo indirizzo email",
        "modal.errors.email_invalid" => "Questo indirizzo email non sembra valido",
        "modal.errors.subject_required" => "Inserisci un oggetto",
        "modal.errors.message_required" => "Scrivi un messaggio",
        "start_project.title" => "Avvia un progetto",
        "start_project.desc" => "Raccontaci cosa vuoi costruire e ti risponderemo entro un giorno lavorativo.",
        "start_project.request_quote" => "Richiedi un preventivo",
        "start_project.secure" => "Nessun impegno, niente spam.",
        _ => return None,
    })
}

// Partial on purpose; untranslated keys fall back to English.
fn ar(key: &str) -> Option<&'static str> {
    Some(match key {
        "company" => "استوديو أوروم",
        "nav.services" => "الخدمات",
        "nav.contact" => "اتصل بنا",
        "hero.headline" => "نبني برمجيات تدوم",
        "hero.headline_custom" => "تطبيقات ويب مخصّصة من البداية إلى النهاية",
        "hero.headline_cloud" => "بنية سحابية بلا تعقيد",
        "hero.headline_payment" => "مدفوعات وفوترة بإتقان",
        "hero.headline_ai" => "ذكاء اصطناعي عملي لمنتجات حقيقية",
        "hero.headline_digital" => "شريككم في الحِرفة الرقمية",
        "hero.description" => "استوديو صغير من مهندسين خبراء يصمّم ويبني ويشغّل برمجيات لشركات تهتم بالجودة.",
        "hero.contact_us" => "تواصل معنا",
        "hero.our_work" => "أعمالنا",
        "features.custom_web_apps" => "تطبيقات ويب مخصّصة",
        "features.custom_web_apps_desc" => "تطبيقات حديثة تركّز على الأداء.",
        "features.cloud_devops" => "السحابة و DevOps",
        "features.cloud_devops_desc" => "تكامل مستمر وأتمتة بنية تحتية ونشر موثوق.",
        "features.support" => "الدعم",
        "features.consulting" => "الاستشارات",
        "services_title" => "ماذا نفعل",
        "services.frontend" => "الواجهة الأمامية",
        "services.frontend_desc" => "واجهات سريعة وسهلة الوصول.",
        "services.backend" => "الواجهة الخلفية",
        "services.backend_desc" => "واجهات برمجية وتكاملات وخدمات تنمو معكم.",
        "services.support_desc" => "مناوبة وصيانة وتحسين مستمر.",
        "services.consulting_desc" => "مراجعات معمارية وتدريب الفرق.",
        "contact_title" => "تواصل معنا",
        "contact_subtitle" => "لنصنع معاً شيئاً استثنائياً",
        "footer" => "© {year} استوديو أوروم. جميع الحقوق محفوظة.",
        "modal.title" => "أرسل لنا رسالة",
        "modal.name" => "الاسم",
        "modal.email" => "البريد الإلكتروني",
        "modal.subject" => "الموضوع",
        "modal.message" => "الرسالة",
        "modal.send" => "إرسال",
        "modal.sending" => "جارٍ الإرسال...",
        "modal.close" => "إغلاق",
        "start_project.title" => "ابدأ مشروعاً",
        "start_project.desc" => "أخبرنا بما تريد بناءه وسنعاود التواصل خلال يوم عمل واحد.",
        "start_project.request_quote" => "اطلب عرض سعر",
        "start_project.secure" => "بلا التزام، بلا رسائل مزعجة.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bcp47_tags_by_primary_subtag() {
        assert_eq!(Language::from_code("fr-FR"), Some(Language::Fr));
        assert_eq!(Language::from_code("en_US"), Some(Language::En));
        assert_eq!(Language::from_code("it"), Some(Language::It));
        assert_eq!(Language::from_code("AR"), Some(Language::Ar));
        assert_eq!(Language::from_code("de-DE"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert!(Language::Ar.is_rtl());
        assert_eq!(Language::Ar.direction(), "rtl");
        for lang in [Language::En, Language::Fr, Language::It] {
            assert!(!lang.is_rtl());
            assert_eq!(lang.direction(), "ltr");
        }
    }

    #[test]
    fn missing_keys_fall_back_to_english() {
        // The Arabic table deliberately omits the error strings.
        assert_eq!(lookup(Language::Ar, "modal.errors.name_required"), None);
        assert_eq!(
            translate(Language::Ar, "modal.errors.name_required"),
            "Please enter your name"
        );
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        assert_eq!(translate(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn every_language_translates_the_navigation() {
        for &lang in Language::all() {
            assert!(lookup(lang, "nav.services").is_some());
            assert!(lookup(lang, "nav.contact").is_some());
            assert!(lookup(lang, "company").is_some());
        }
    }

    #[test]
    fn footer_year_is_interpolated() {
        let i18n = I18n {
            lang: Language::En,
            set: Callback::noop(),
        };
        let line = i18n.t_with_year("footer", 2026);
        assert!(line.contains("2026"));
        assert!(!line.contains("{year}"));
    }
}

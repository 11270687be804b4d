//! Translation tables: every user-facing string of the site, per language.
//!
//! Each language is a `LanguageStrings` constant. Because it is a struct
//! literal, a language that forgets a key fails to compile. Runtime lookups go
//! through `LanguageStrings::lookup` with the symbolic camelCase key the
//! presentation layer uses (e.g. `"getInvolved"`).

use crate::i18n::Language;

macro_rules! language_strings {
    ($( $(#[$doc:meta])* $field:ident => $key:literal, )*) => {
        /// All localized user-facing strings for a language
        #[derive(Debug, Clone)]
        pub struct LanguageStrings {
            $( $(#[$doc])* pub $field: &'static str, )*
        }

        impl LanguageStrings {
            /// Every symbolic key, in declaration order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// Resolve a symbolic key. `None` when the key is not part of the table.
            pub fn lookup(&self, key: &str) -> Option<&'static str> {
                match key {
                    $( $key => Some(self.$field), )*
                    _ => None,
                }
            }
        }
    };
}

language_strings! {
    // ==================== Navigation ====================
    home => "home",
    about => "about",
    projects => "projects",
    events => "events",
    get_involved => "getInvolved",
    login => "login",
    logout => "logout",
    dashboard => "dashboard",

    // ==================== Hero ====================
    hero_title => "heroTitle",
    hero_subtitle => "heroSubtitle",
    donate => "donate",
    join_us => "joinUs",

    // ==================== Stats ====================
    families_helped => "familiesHelped",
    volunteers => "volunteers",
    projects_completed => "projectsCompleted",

    // ==================== About ====================
    our_story => "ourStory",
    mission => "mission",
    vision => "vision",
    core_values => "coreValues",
    compassion => "compassion",
    integrity => "integrity",
    transparency => "transparency",
    community => "community",

    // ==================== Projects & Events ====================
    ramadan_basket => "ramadanBasket",
    project_description => "projectDescription",
    learn_more => "learnMore",
    upcoming_events => "upcomingEvents",
    past_events => "pastEvents",

    // ==================== Get Involved ====================
    volunteer_form => "volunteerForm",
    donation_section => "donationSection",
    partnership_section => "partnershipSection",
    contact_form => "contactForm",
    name => "name",
    email => "email",
    message => "message",
    submit => "submit",

    // ==================== Admin ====================
    user_management => "userManagement",
    project_management => "projectManagement",
    event_management => "eventManagement",
    analytics => "analytics",
    add_new => "addNew",
    edit => "edit",
    delete => "delete",
    save => "save",
    cancel => "cancel",

    // ==================== Footer ====================
    quick_links => "quickLinks",
    follow_us => "followUs",
    contact_us => "contactUs",
    all_rights_reserved => "allRightsReserved",
}

impl LanguageStrings {
    /// The table for a language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language {
            Language::Arabic => &ARABIC_STRINGS,
            Language::French => &FRENCH_STRINGS,
            Language::English => &ENGLISH_STRINGS,
        }
    }
}

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    home: "الرئيسية",
    about: "من نحن",
    projects: "المشاريع",
    events: "الفعاليات",
    get_involved: "انضم إلينا",
    login: "تسجيل الدخول",
    logout: "تسجيل الخروج",
    dashboard: "لوحة التحكم",

    hero_title: "نخدم مجتمعنا بهدف",
    hero_subtitle: "نادي تقني وخيري يقوده الشباب لإحداث تأثير إيجابي من خلال الخدمة والابتكار",
    donate: "تبرع الآن",
    join_us: "انضم إلينا",

    families_helped: "عائلة ساعدناها",
    volunteers: "متطوع",
    projects_completed: "مشروع مكتمل",

    our_story: "قصتنا",
    mission: "المهمة",
    vision: "الرؤية",
    core_values: "قيمنا الأساسية",
    compassion: "الرحمة",
    integrity: "النزاهة",
    transparency: "الشفافية",
    community: "المجتمع",

    ramadan_basket: "سلة رمضان الغذائية",
    project_description: "وصف المشروع",
    learn_more: "اعرف المزيد",
    upcoming_events: "الفعاليات القادمة",
    past_events: "الفعاليات السابقة",

    volunteer_form: "نموذج التطوع",
    donation_section: "قسم التبرعات",
    partnership_section: "قسم الشراكة",
    contact_form: "نموذج الاتصال",
    name: "الاسم",
    email: "البريد الإلكتروني",
    message: "الرسالة",
    submit: "إرسال",

    user_management: "إدارة المستخدمين",
    project_management: "إدارة المشاريع",
    event_management: "إدارة الفعاليات",
    analytics: "التحليلات",
    add_new: "إضافة جديد",
    edit: "تعديل",
    delete: "حذف",
    save: "حفظ",
    cancel: "إلغاء",

    quick_links: "روابط سريعة",
    follow_us: "تابعنا",
    contact_us: "اتصل بنا",
    all_rights_reserved: "جميع الحقوق محفوظة",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    home: "Accueil",
    about: "À propos",
    projects: "Projets",
    events: "Événements",
    get_involved: "Participez",
    login: "Connexion",
    logout: "Déconnexion",
    dashboard: "Tableau de bord",

    hero_title: "Servir notre communauté avec un but",
    hero_subtitle: "Un club caritatif et technologique dirigé par des jeunes pour avoir un impact positif par le service et l'innovation",
    donate: "Faire un don",
    join_us: "Rejoignez-nous",

    families_helped: "Familles aidées",
    volunteers: "Bénévoles",
    projects_completed: "Projets réalisés",

    our_story: "Notre histoire",
    mission: "Mission",
    vision: "Vision",
    core_values: "Valeurs fondamentales",
    compassion: "Compassion",
    integrity: "Intégrité",
    transparency: "Transparence",
    community: "Communauté",

    ramadan_basket: "Panier alimentaire du Ramadan",
    project_description: "Description du projet",
    learn_more: "En savoir plus",
    upcoming_events: "Événements à venir",
    past_events: "Événements passés",

    volunteer_form: "Formulaire de bénévolat",
    donation_section: "Section de dons",
    partnership_section: "Section de partenariat",
    contact_form: "Formulaire de contact",
    name: "Nom",
    email: "Email",
    message: "Message",
    submit: "Soumettre",

    user_management: "Gestion des utilisateurs",
    project_management: "Gestion des projets",
    event_management: "Gestion des événements",
    analytics: "Analytique",
    add_new: "Ajouter nouveau",
    edit: "Modifier",
    delete: "Supprimer",
    save: "Enregistrer",
    cancel: "Annuler",

    quick_links: "Liens rapides",
    follow_us: "Suivez-nous",
    contact_us: "Contactez-nous",
    all_rights_reserved: "Tous droits réservés",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    home: "Home",
    about: "About",
    projects: "Projects",
    events: "Events",
    get_involved: "Get Involved",
    login: "Login",
    logout: "Logout",
    dashboard: "Dashboard",

    hero_title: "Serving Our Community With Purpose",
    hero_subtitle: "A youth-led community charity and tech club making a positive impact through service and innovation",
    donate: "Donate Now",
    join_us: "Join Us",

    families_helped: "Families Helped",
    volunteers: "Volunteers",
    projects_completed: "Projects Completed",

    our_story: "Our Story",
    mission: "Mission",
    vision: "Vision",
    core_values: "Core Values",
    compassion: "Compassion",
    integrity: "Integrity",
    transparency: "Transparency",
    community: "Community",

    ramadan_basket: "Ramadan Food Basket",
    project_description: "Project Description",
    learn_more: "Learn More",
    upcoming_events: "Upcoming Events",
    past_events: "Past Events",

    volunteer_form: "Volunteer Form",
    donation_section: "Donation Section",
    partnership_section: "Partnership Section",
    contact_form: "Contact Form",
    name: "Name",
    email: "Email",
    message: "Message",
    submit: "Submit",

    user_management: "User Management",
    project_management: "Project Management",
    event_management: "Event Management",
    analytics: "Analytics",
    add_new: "Add New",
    edit: "Edit",
    delete: "Delete",
    save: "Save",
    cancel: "Cancel",

    quick_links: "Quick Links",
    follow_us: "Follow Us",
    contact_us: "Contact Us",
    all_rights_reserved: "All Rights Reserved",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Completeness Tests ====================

    #[test]
    fn test_table_has_49_keys() {
        assert_eq!(LanguageStrings::KEYS.len(), 49);
    }

    #[test]
    fn test_every_key_resolves_in_every_language() {
        for language in Language::ALL {
            let table = LanguageStrings::for_language(language);
            for key in LanguageStrings::KEYS {
                let value = table.lookup(key);
                assert!(value.is_some(), "{} missing in {}", key, language);
                assert!(!value.unwrap().is_empty(), "{} blank in {}", key, language);
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys = LanguageStrings::KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), LanguageStrings::KEYS.len());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_home() {
        assert_eq!(ARABIC_STRINGS.lookup("home"), Some("الرئيسية"));
        assert_eq!(FRENCH_STRINGS.lookup("home"), Some("Accueil"));
        assert_eq!(ENGLISH_STRINGS.lookup("home"), Some("Home"));
    }

    #[test]
    fn test_lookup_uses_camel_case_keys() {
        assert_eq!(ENGLISH_STRINGS.lookup("getInvolved"), Some("Get Involved"));
        assert_eq!(ENGLISH_STRINGS.lookup("get_involved"), None);
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert_eq!(FRENCH_STRINGS.lookup("notARealKey"), None);
        assert_eq!(FRENCH_STRINGS.lookup(""), None);
    }

    #[test]
    fn test_for_language() {
        assert_eq!(LanguageStrings::for_language(Language::French).dashboard, "Tableau de bord");
        assert_eq!(LanguageStrings::for_language(Language::Arabic).logout, "تسجيل الخروج");
    }
}

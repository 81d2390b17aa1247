//! Fixed UI strings for both languages.
//!
//! Lookups fall back to the Arabic entry and then to the key itself, so a
//! template never receives a missing label.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

use super::Language;

const AR: &[(&str, &str)] = &[
    ("home", "الرئيسية"),
    ("about", "من نحن"),
    ("services", "خدماتنا"),
    ("partners", "شركاؤنا"),
    ("contact", "تواصل معنا"),
    ("getQuote", "احصل على عرض"),
    ("learnMore", "المزيد من التفاصيل"),
    ("yearsExperience", "سنة خبرة"),
    ("happyClients", "عميل سعيد"),
    ("completedProjects", "مشروع منجز"),
    ("discoverMore", "اكتشف المزيد"),
    ("exploreServices", "استكشف خدماتنا"),
    ("contactUs", "تواصل معنا"),
    ("whoWeAre", "من نحن؟"),
    ("ourVision", "رؤيتنا"),
    ("ourMission", "رسالتنا"),
    ("visionMission", "رؤيتنا ورسالتنا"),
    ("whyChooseUs", "لماذا تختار"),
    ("clickToShowVision", "اضغط لعرض الرؤية والرسالة"),
    ("integratedSolutions", "حلول إعلانية متكاملة"),
    (
        "serviceDescription",
        "نقدم مجموعة شاملة من الخدمات الإعلانية والتسويقية لتلبية جميع احتياجاتك",
    ),
    ("whatWeOffer", "ما نقدمه في هذه الخدمة:"),
    ("whatsappContact", "تواصل عبر واتساب"),
    ("close", "إغلاق"),
    ("previous", "السابق"),
    ("next", "التالي"),
    ("targetAudience", "عملاؤنا المستهدفون"),
    ("businessOwners", "أصحاب المشاريع التجارية"),
    ("businessDesc", "مطاعم - مقاهي - محلات - عيادات"),
    ("educational", "المؤسسات التعليمية"),
    ("educationalDesc", "مدارس - جامعات"),
    ("companies", "الشركات والجهات الحكومية"),
    ("companiesDesc", "قطاع خاص وحكومي"),
    ("individuals", "الأفراد"),
    ("individualsDesc", "المناسبات والاحتفالات"),
    ("successPartners", "شركاء النجاح"),
    ("proudClients", "عملاء نفتخر بهم"),
    (
        "partnersDescription",
        "نفخر بثقة عملائنا من مختلف القطاعات الحكومية والخاصة",
    ),
    ("clients", "عميل"),
    ("projects", "مشروع"),
    ("satisfaction", "رضا العملاء"),
    ("previousWork", "من سابقة أعمالنا"),
    ("testimonials", "آراء عملائنا"),
    ("sendMessage", "أرسل لنا رسالة"),
    ("messageSent", "تم إرسال رسالتك بنجاح!"),
    ("willContactYou", "سنتواصل معك في أقرب وقت"),
    ("fullName", "الاسم الكامل"),
    ("enterName", "أدخل اسمك"),
    ("phone", "رقم الجوال"),
    ("email", "البريد الإلكتروني"),
    ("serviceRequired", "الخدمة المطلوبة"),
    ("selectService", "اختر الخدمة"),
    ("requestDetails", "تفاصيل الطلب"),
    ("writeDetails", "اكتب تفاصيل مشروعك هنا..."),
    ("sending", "جاري الإرسال..."),
    ("sendRequest", "إرسال الطلب"),
    ("fieldRequired", "هذا الحقل مطلوب"),
    ("invalidEmail", "البريد الإلكتروني غير صحيح"),
    ("contactInfo", "معلومات التواصل"),
    ("location", "الموقع"),
    ("emailWebsite", "البريد والموقع"),
    ("whatsappMessage", "تواصل معنا عبر واتساب"),
    ("quickResponse", "رد سريع ومباشر"),
    ("followUs", "تابعنا على"),
    ("quickLinks", "روابط سريعة"),
    ("allRightsReserved", "جميع الحقوق محفوظة"),
    ("madeWith", "صُنع بـ"),
    ("inSaudi", "في المملكة العربية السعودية"),
    ("addFromDashboard", "يرجى إضافة المحتوى من لوحة التحكم"),
    ("diverseServices", "تنوع خدماتنا"),
    ("integratedSolutionsShort", "حلول متكاملة"),
    ("highQuality", "جودة عالية"),
    ("premiumMaterials", "خامات مميزة"),
    ("fastExecution", "سرعة التنفيذ"),
    ("highPrecision", "دقة عالية"),
    ("localExpertise", "خبرة محلية"),
    ("understandMarket", "نفهم السوق"),
    ("since20Years", "منذ عشرين عاماً من الإبداع"),
    (
        "oneStopShop",
        "البيت الواحد الذي يجمع كل ما يحتاجه العميل لإبراز نشاطه التجاري بشكل احترافي",
    ),
    ("other", "أخرى"),
    ("advertising", "للدعاية والإعلان"),
    ("happyToServe", "نسعد بخدمتكم"),
    ("switchLanguage", "English"),
    ("backToServices", "العودة للخدمات"),
    ("backToHome", "العودة للرئيسية"),
    (
        "serviceUnderConstruction",
        "صفحة الخدمة قيد الإنشاء. يمكنك التواصل معنا للحصول على مزيد من المعلومات.",
    ),
    ("postNotFound", "المقال غير موجود"),
    ("postNotFoundDetails", "عذراً، لم نتمكن من العثور على المقال المطلوب."),
    ("blog", "المدونة"),
    ("needHelp", "هل تحتاج مساعدة في مشروعك؟"),
    ("freeConsultation", "تواصل معنا الآن للحصول على استشارة مجانية"),
    ("errorTitle", "عذراً!"),
    ("errorDetails", "حدث خطأ غير متوقع."),
    ("errorHeading", "خطأ"),
    ("notFoundDetails", "الصفحة المطلوبة غير موجودة."),
];

const EN: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About Us"),
    ("services", "Services"),
    ("partners", "Partners"),
    ("contact", "Contact Us"),
    ("getQuote", "Get a Quote"),
    ("learnMore", "Learn More"),
    ("yearsExperience", "Years Experience"),
    ("happyClients", "Happy Clients"),
    ("completedProjects", "Completed Projects"),
    ("discoverMore", "Discover More"),
    ("exploreServices", "Explore Services"),
    ("contactUs", "Contact Us"),
    ("whoWeAre", "Who We Are?"),
    ("ourVision", "Our Vision"),
    ("ourMission", "Our Mission"),
    ("visionMission", "Vision & Mission"),
    ("whyChooseUs", "Why Choose"),
    ("clickToShowVision", "Click to show vision & mission"),
    ("integratedSolutions", "Integrated Advertising Solutions"),
    (
        "serviceDescription",
        "We offer a comprehensive range of advertising and marketing services to meet all your needs",
    ),
    ("whatWeOffer", "What we offer in this service:"),
    ("whatsappContact", "Contact via WhatsApp"),
    ("close", "Close"),
    ("previous", "Previous"),
    ("next", "Next"),
    ("targetAudience", "Our Target Audience"),
    ("businessOwners", "Business Owners"),
    ("businessDesc", "Restaurants - Cafes - Shops - Clinics"),
    ("educational", "Educational Institutions"),
    ("educationalDesc", "Schools - Universities"),
    ("companies", "Companies & Government"),
    ("companiesDesc", "Private & Public Sector"),
    ("individuals", "Individuals"),
    ("individualsDesc", "Events & Celebrations"),
    ("successPartners", "Success Partners"),
    ("proudClients", "Clients We're Proud Of"),
    (
        "partnersDescription",
        "We are proud of our clients' trust from various governmental and private sectors",
    ),
    ("clients", "Clients"),
    ("projects", "Projects"),
    ("satisfaction", "Client Satisfaction"),
    ("previousWork", "Our Previous Work"),
    ("testimonials", "Testimonials"),
    ("sendMessage", "Send us a message"),
    ("messageSent", "Message sent successfully!"),
    ("willContactYou", "We will contact you soon"),
    ("fullName", "Full Name"),
    ("enterName", "Enter your name"),
    ("phone", "Phone Number"),
    ("email", "Email"),
    ("serviceRequired", "Required Service"),
    ("selectService", "Select Service"),
    ("requestDetails", "Request Details"),
    ("writeDetails", "Write your project details here..."),
    ("sending", "Sending..."),
    ("sendRequest", "Send Request"),
    ("fieldRequired", "This field is required"),
    ("invalidEmail", "Please enter a valid email"),
    ("contactInfo", "Contact Information"),
    ("location", "Location"),
    ("emailWebsite", "Email & Website"),
    ("whatsappMessage", "Contact us via WhatsApp"),
    ("quickResponse", "Quick & Direct Response"),
    ("followUs", "Follow Us"),
    ("quickLinks", "Quick Links"),
    ("allRightsReserved", "All Rights Reserved"),
    ("madeWith", "Made with"),
    ("inSaudi", "in Saudi Arabia"),
    ("addFromDashboard", "Please add content from the dashboard"),
    ("diverseServices", "Diverse Services"),
    ("integratedSolutionsShort", "Integrated Solutions"),
    ("highQuality", "High Quality"),
    ("premiumMaterials", "Premium Materials"),
    ("fastExecution", "Fast Execution"),
    ("highPrecision", "High Precision"),
    ("localExpertise", "Local Expertise"),
    ("understandMarket", "We Understand the Market"),
    ("since20Years", "20 Years of Creativity"),
    (
        "oneStopShop",
        "The one-stop-shop that provides everything a client needs to highlight their business professionally",
    ),
    ("other", "Other"),
    ("advertising", "Advertising"),
    ("happyToServe", "We're Happy to Serve You"),
    ("switchLanguage", "العربية"),
    ("backToServices", "Back to Services"),
    ("backToHome", "Back to Home"),
    (
        "serviceUnderConstruction",
        "This service page is under construction. Contact us for more information.",
    ),
    ("postNotFound", "Article not found"),
    ("postNotFoundDetails", "Sorry, we couldn't find the requested article."),
    ("blog", "Blog"),
    ("needHelp", "Need help with your project?"),
    ("freeConsultation", "Contact us now for a free consultation"),
    ("errorTitle", "Sorry!"),
    ("errorDetails", "An unexpected error occurred."),
    ("errorHeading", "Error"),
    ("notFoundDetails", "The requested page could not be found."),
];

static TABLES: Lazy<HashMap<Language, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert(Language::Ar, AR.iter().copied().collect());
    tables.insert(Language::En, EN.iter().copied().collect());
    tables
});

fn entry(language: Language, key: &str) -> Option<&'static str> {
    TABLES.get(&language).and_then(|t| t.get(key)).copied()
}

/// Label for `key` in `language`, falling back to Arabic, then to the key.
pub fn lookup<'k>(language: Language, key: &'k str) -> Cow<'k, str> {
    entry(language, key)
        .or_else(|| entry(Language::Ar, key))
        .map(Cow::Borrowed)
        .unwrap_or(Cow::Borrowed(key))
}

/// Every label resolved for `language`, keyed by the Arabic table's keys.
pub fn labels(language: Language) -> BTreeMap<&'static str, String> {
    AR.iter()
        .map(|(key, _)| (*key, lookup(language, key).into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_active_language() {
        assert_eq!(lookup(Language::Ar, "home"), "الرئيسية");
        assert_eq!(lookup(Language::En, "home"), "Home");
    }

    #[test]
    fn unknown_key_echoes_the_key() {
        assert_eq!(lookup(Language::En, "noSuchLabel"), "noSuchLabel");
        assert_eq!(lookup(Language::Ar, "noSuchLabel"), "noSuchLabel");
    }

    #[test]
    fn tables_cover_the_same_keys() {
        let ar: Vec<_> = AR.iter().map(|(k, _)| *k).collect();
        let en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        for key in &ar {
            assert!(en.contains(key), "missing English label for {key}");
        }
        for key in &en {
            assert!(ar.contains(key), "missing Arabic label for {key}");
        }
    }

    #[test]
    fn no_duplicate_keys() {
        assert_eq!(TABLES[&Language::Ar].len(), AR.len());
        assert_eq!(TABLES[&Language::En].len(), EN.len());
    }

    #[test]
    fn labels_resolve_every_key() {
        let en = labels(Language::En);
        assert_eq!(en.len(), AR.len());
        assert_eq!(en["close"], "Close");
        assert!(en.values().all(|v| !v.is_empty()));
    }
}

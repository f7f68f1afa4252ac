//! Interface strings in French and Arabic.
//!
//! Templates receive a `&'static Translations` for the visitor's locale.
//! Product content is localized separately (see `Product::localized_name`).

use decors_core::{InquiryStatus, Locale};

/// Every interface string shown by the templates.
#[derive(Debug)]
pub struct Translations {
    // Navigation and shared chrome
    pub brand: &'static str,
    pub home: &'static str,
    pub gallery: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
    pub admin: &'static str,
    pub switch_language: &'static str,
    pub all_rights_reserved: &'static str,
    pub chat_on_whatsapp: &'static str,
    pub view_details: &'static str,
    pub view_all_products: &'static str,
    pub read_more: &'static str,
    pub back_to_gallery: &'static str,
    pub back_to_home: &'static str,

    // Home
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub story_title: &'static str,
    pub story_text: &'static str,
    pub featured_title: &'static str,
    pub cta_title: &'static str,
    pub cta_button: &'static str,

    // Gallery
    pub gallery_title: &'static str,
    pub gallery_subtitle: &'static str,
    pub filter_by: &'static str,
    pub all_categories: &'static str,
    pub no_products: &'static str,

    // Product
    pub details: &'static str,
    pub category: &'static str,
    pub material: &'static str,
    pub dimensions: &'static str,
    pub description: &'static str,
    pub price_estimate: &'static str,
    pub contact_for_price: &'static str,
    pub inquire: &'static str,
    pub inquire_by_form: &'static str,
    pub no_images: &'static str,
    pub related_products: &'static str,

    // About
    pub about_title: &'static str,
    pub about_subtitle: &'static str,
    pub craft_title: &'static str,
    pub craft_text: &'static str,
    pub artisans_title: &'static str,
    pub artisans_text: &'static str,
    pub sustainability_title: &'static str,
    pub sustainability_text: &'static str,

    // Contact
    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub get_in_touch: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub name_required: &'static str,
    pub email_required: &'static str,
    pub invalid_email: &'static str,
    pub phone_required: &'static str,
    pub message_required: &'static str,
    pub success_message: &'static str,
    pub error_message: &'static str,
    pub about_product: &'static str,
    pub address_label: &'static str,
    pub working_hours: &'static str,
    pub monday_friday: &'static str,
    pub saturday: &'static str,
    pub sunday: &'static str,
    pub closed: &'static str,
    pub prefer_whatsapp: &'static str,

    // Not found
    pub not_found_title: &'static str,
    pub not_found_message: &'static str,

    // Admin
    pub login_title: &'static str,
    pub login_subtitle: &'static str,
    pub password: &'static str,
    pub login: &'static str,
    pub login_error: &'static str,
    pub logout: &'static str,
    pub view_site: &'static str,
    pub products: &'static str,
    pub inquiries: &'static str,
    pub add_product: &'static str,
    pub edit_product: &'static str,
    pub new_product: &'static str,
    pub search_products: &'static str,
    pub search: &'static str,
    pub no_products_admin: &'static str,
    pub no_price: &'static str,
    pub uncategorized: &'static str,
    pub actions: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub delete_product_confirmation: &'static str,
    pub delete_inquiry_confirmation: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub product_name: &'static str,
    pub product_name_ar: &'static str,
    pub slug: &'static str,
    pub slug_hint: &'static str,
    pub short_desc: &'static str,
    pub short_desc_ar: &'static str,
    pub long_desc: &'static str,
    pub long_desc_ar: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub depth: &'static str,
    pub tags: &'static str,
    pub tags_hint: &'static str,
    pub images: &'static str,
    pub add_images: &'static str,
    pub remove_image: &'static str,
    pub upload_warning: &'static str,
    pub product_saved: &'static str,
    pub product_deleted: &'static str,
    pub slug_taken: &'static str,
    pub name_too_short: &'static str,
    pub slug_too_short: &'static str,
    pub short_desc_too_short: &'static str,
    pub long_desc_too_short: &'static str,
    pub invalid_number: &'static str,
    pub filter_by_status: &'static str,
    pub all_inquiries: &'static str,
    pub no_inquiries: &'static str,
    pub inquiry_date: &'static str,
    pub inquiry_from: &'static str,
    pub product: &'static str,
    pub status: &'static str,
    pub update_status: &'static str,
    pub reply_email: &'static str,
    pub reply_whatsapp: &'static str,
    pub status_new: &'static str,
    pub status_in_progress: &'static str,
    pub status_completed: &'static str,
    pub status_archived: &'static str,
}

impl Translations {
    /// Strings for a locale.
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::Fr => &FR,
            Locale::Ar => &AR,
        }
    }

    /// Label for an inquiry status.
    #[must_use]
    pub const fn status_label(&self, status: InquiryStatus) -> &'static str {
        match status {
            InquiryStatus::New => self.status_new,
            InquiryStatus::InProgress => self.status_in_progress,
            InquiryStatus::Completed => self.status_completed,
            InquiryStatus::Archived => self.status_archived,
        }
    }
}

/// Contact details shown in the footer and on the contact page.
pub mod contact_details {
    pub const ADDRESS: &str = "123 Rue des Artisans, Marrakech, Morocco";
    pub const PHONE: &str = "+212 123 456 789";
    pub const EMAIL: &str = "contact@1000decors.com";
}

pub static FR: Translations = Translations {
    brand: "1000 Décors",
    home: "Accueil",
    gallery: "Galerie",
    about: "À propos",
    contact: "Contact",
    admin: "Administration",
    switch_language: "العربية",
    all_rights_reserved: "Tous droits réservés.",
    chat_on_whatsapp: "Discuter sur WhatsApp",
    view_details: "Voir les détails",
    view_all_products: "Voir tous les produits",
    read_more: "En savoir plus",
    back_to_gallery: "Retour à la galerie",
    back_to_home: "Retour à l'accueil",

    hero_title: "L'artisanat marocain, pièce par pièce",
    hero_subtitle: "Meubles et objets de décoration façonnés à la main dans nos ateliers de Marrakech.",
    story_title: "Notre histoire",
    story_text: "Depuis trois générations, nos artisans travaillent le cèdre, le noyer et le thuya selon des gestes transmis de maître à apprenti.",
    featured_title: "Pièces à la une",
    cta_title: "Un projet sur mesure ?",
    cta_button: "Contactez-nous",

    gallery_title: "Galerie",
    gallery_subtitle: "Découvrez nos créations, chacune fabriquée à la main.",
    filter_by: "Filtrer par",
    all_categories: "Toutes les catégories",
    no_products: "Aucun produit dans cette catégorie pour le moment.",

    details: "Détails",
    category: "Catégorie",
    material: "Matériau",
    dimensions: "Dimensions",
    description: "Description",
    price_estimate: "Prix estimé",
    contact_for_price: "Contactez-nous pour le prix",
    inquire: "Demander sur WhatsApp",
    inquire_by_form: "Envoyer une demande",
    no_images: "Aucune image disponible",
    related_products: "Produits similaires",

    about_title: "À propos de 1000 Décors",
    about_subtitle: "Un atelier familial au cœur de la médina.",
    craft_title: "Notre savoir-faire",
    craft_text: "Sculpture, marqueterie et peinture sur bois : chaque pièce passe entre les mains de plusieurs maîtres artisans.",
    artisans_title: "Nos artisans",
    artisans_text: "Une vingtaine d'artisans, menuisiers, sculpteurs et peintres, travaillent dans nos ateliers.",
    sustainability_title: "Durabilité",
    sustainability_text: "Bois issus de forêts gérées, finitions naturelles et fabrication à la commande pour éviter le gaspillage.",

    contact_title: "Contactez-nous",
    contact_subtitle: "Une question, un projet ? Écrivez-nous.",
    get_in_touch: "Nous joindre",
    name: "Nom",
    email: "E-mail",
    phone: "Téléphone",
    message: "Message",
    submit: "Envoyer",
    name_required: "Le nom est obligatoire",
    email_required: "L'e-mail est obligatoire",
    invalid_email: "Adresse e-mail invalide",
    phone_required: "Le téléphone est obligatoire",
    message_required: "Le message est obligatoire",
    success_message: "Merci ! Votre message a bien été envoyé. Nous vous répondrons rapidement.",
    error_message: "Une erreur est survenue. Veuillez réessayer plus tard.",
    about_product: "À propos de",
    address_label: "Adresse",
    working_hours: "Horaires",
    monday_friday: "Lundi - Vendredi : 9h - 18h",
    saturday: "Samedi : 10h - 16h",
    sunday: "Dimanche",
    closed: "Fermé",
    prefer_whatsapp: "Vous préférez WhatsApp ?",

    not_found_title: "Page introuvable",
    not_found_message: "La page que vous cherchez n'existe pas ou a été déplacée.",

    login_title: "Administration",
    login_subtitle: "Saisissez le mot de passe pour accéder au panneau.",
    password: "Mot de passe",
    login: "Se connecter",
    login_error: "Mot de passe incorrect",
    logout: "Se déconnecter",
    view_site: "Voir le site",
    products: "Produits",
    inquiries: "Demandes",
    add_product: "Ajouter un produit",
    edit_product: "Modifier le produit",
    new_product: "Nouveau produit",
    search_products: "Rechercher un produit",
    search: "Rechercher",
    no_products_admin: "Aucun produit. Commencez par en ajouter un.",
    no_price: "Sans prix",
    uncategorized: "Sans catégorie",
    actions: "Actions",
    edit: "Modifier",
    delete: "Supprimer",
    delete_product_confirmation: "Supprimer ce produit et ses images ?",
    delete_inquiry_confirmation: "Supprimer cette demande ?",
    save: "Enregistrer",
    cancel: "Annuler",
    product_name: "Nom",
    product_name_ar: "Nom (arabe)",
    slug: "Identifiant d'URL",
    slug_hint: "Laissez vide pour le générer à partir du nom.",
    short_desc: "Description courte",
    short_desc_ar: "Description courte (arabe)",
    long_desc: "Description longue",
    long_desc_ar: "Description longue (arabe)",
    width: "Largeur (cm)",
    height: "Hauteur (cm)",
    depth: "Profondeur (cm)",
    tags: "Mots-clés",
    tags_hint: "Séparés par des virgules",
    images: "Images",
    add_images: "Ajouter des images",
    remove_image: "Retirer",
    upload_warning: "Certaines images n'ont pas pu être envoyées :",
    product_saved: "Produit enregistré.",
    product_deleted: "Produit supprimé.",
    slug_taken: "Cet identifiant est déjà utilisé",
    name_too_short: "Le nom doit contenir au moins 3 caractères",
    slug_too_short: "L'identifiant doit contenir au moins 3 caractères",
    short_desc_too_short: "La description courte doit contenir au moins 10 caractères",
    long_desc_too_short: "La description longue doit contenir au moins 20 caractères",
    invalid_number: "Nombre positif attendu",
    filter_by_status: "Filtrer par statut",
    all_inquiries: "Toutes les demandes",
    no_inquiries: "Aucune demande pour le moment.",
    inquiry_date: "Date",
    inquiry_from: "De",
    product: "Produit",
    status: "Statut",
    update_status: "Mettre à jour",
    reply_email: "Répondre par e-mail",
    reply_whatsapp: "Répondre sur WhatsApp",
    status_new: "Nouvelle",
    status_in_progress: "En cours",
    status_completed: "Terminée",
    status_archived: "Archivée",
};

pub static AR: Translations = Translations {
    brand: "1000 ديكور",
    home: "الرئيسية",
    gallery: "المعرض",
    about: "من نحن",
    contact: "اتصل بنا",
    admin: "الإدارة",
    switch_language: "Français",
    all_rights_reserved: "جميع الحقوق محفوظة.",
    chat_on_whatsapp: "تحدث معنا على واتساب",
    view_details: "عرض التفاصيل",
    view_all_products: "عرض جميع المنتجات",
    read_more: "اقرأ المزيد",
    back_to_gallery: "العودة إلى المعرض",
    back_to_home: "العودة إلى الرئيسية",

    hero_title: "الحرفة المغربية، قطعة بقطعة",
    hero_subtitle: "أثاث وقطع ديكور مصنوعة يدويا في ورشاتنا بمراكش.",
    story_title: "قصتنا",
    story_text: "منذ ثلاثة أجيال، يشتغل حرفيونا على خشب الأرز والجوز والعرعار بتقنيات متوارثة من المعلم إلى المتعلم.",
    featured_title: "قطع مختارة",
    cta_title: "مشروع حسب الطلب؟",
    cta_button: "اتصل بنا",

    gallery_title: "المعرض",
    gallery_subtitle: "اكتشف إبداعاتنا، كل قطعة مصنوعة يدويا.",
    filter_by: "تصفية حسب",
    all_categories: "جميع الفئات",
    no_products: "لا توجد منتجات في هذه الفئة حاليا.",

    details: "التفاصيل",
    category: "الفئة",
    material: "المادة",
    dimensions: "الأبعاد",
    description: "الوصف",
    price_estimate: "السعر التقديري",
    contact_for_price: "اتصل بنا لمعرفة السعر",
    inquire: "استفسر عبر واتساب",
    inquire_by_form: "أرسل طلبا",
    no_images: "لا توجد صور",
    related_products: "منتجات مشابهة",

    about_title: "عن 1000 ديكور",
    about_subtitle: "ورشة عائلية في قلب المدينة العتيقة.",
    craft_title: "حرفتنا",
    craft_text: "النحت والترصيع والرسم على الخشب: تمر كل قطعة بين أيدي عدة معلمين حرفيين.",
    artisans_title: "حرفيونا",
    artisans_text: "حوالي عشرين حرفيا من نجارين ونحاتين ورسامين يعملون في ورشاتنا.",
    sustainability_title: "الاستدامة",
    sustainability_text: "أخشاب من غابات مُدارة، وتشطيبات طبيعية، وتصنيع حسب الطلب لتفادي الهدر.",

    contact_title: "اتصل بنا",
    contact_subtitle: "سؤال أو مشروع؟ راسلنا.",
    get_in_touch: "تواصل معنا",
    name: "الاسم",
    email: "البريد الإلكتروني",
    phone: "الهاتف",
    message: "الرسالة",
    submit: "إرسال",
    name_required: "الاسم مطلوب",
    email_required: "البريد الإلكتروني مطلوب",
    invalid_email: "البريد الإلكتروني غير صالح",
    phone_required: "الهاتف مطلوب",
    message_required: "الرسالة مطلوبة",
    success_message: "شكرا! تم إرسال رسالتك بنجاح. سنرد عليك قريبا.",
    error_message: "حدث خطأ. يرجى المحاولة لاحقا.",
    about_product: "بخصوص",
    address_label: "العنوان",
    working_hours: "ساعات العمل",
    monday_friday: "الإثنين - الجمعة: 9 - 18",
    saturday: "السبت: 10 - 16",
    sunday: "الأحد",
    closed: "مغلق",
    prefer_whatsapp: "تفضل واتساب؟",

    not_found_title: "الصفحة غير موجودة",
    not_found_message: "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",

    login_title: "الإدارة",
    login_subtitle: "أدخل كلمة المرور للوصول إلى لوحة التحكم.",
    password: "كلمة المرور",
    login: "تسجيل الدخول",
    login_error: "كلمة المرور غير صحيحة",
    logout: "تسجيل الخروج",
    view_site: "عرض الموقع",
    products: "المنتجات",
    inquiries: "الطلبات",
    add_product: "إضافة منتج",
    edit_product: "تعديل المنتج",
    new_product: "منتج جديد",
    search_products: "البحث عن منتج",
    search: "بحث",
    no_products_admin: "لا توجد منتجات. ابدأ بإضافة منتج.",
    no_price: "بدون سعر",
    uncategorized: "بدون فئة",
    actions: "الإجراءات",
    edit: "تعديل",
    delete: "حذف",
    delete_product_confirmation: "حذف هذا المنتج وصوره؟",
    delete_inquiry_confirmation: "حذف هذا الطلب؟",
    save: "حفظ",
    cancel: "إلغاء",
    product_name: "الاسم",
    product_name_ar: "الاسم (بالعربية)",
    slug: "معرف الرابط",
    slug_hint: "اتركه فارغا لتوليده من الاسم.",
    short_desc: "وصف قصير",
    short_desc_ar: "وصف قصير (بالعربية)",
    long_desc: "وصف مفصل",
    long_desc_ar: "وصف مفصل (بالعربية)",
    width: "العرض (سم)",
    height: "الارتفاع (سم)",
    depth: "العمق (سم)",
    tags: "الكلمات المفتاحية",
    tags_hint: "مفصولة بفواصل",
    images: "الصور",
    add_images: "إضافة صور",
    remove_image: "إزالة",
    upload_warning: "تعذر رفع بعض الصور:",
    product_saved: "تم حفظ المنتج.",
    product_deleted: "تم حذف المنتج.",
    slug_taken: "هذا المعرف مستخدم بالفعل",
    name_too_short: "يجب أن يحتوي الاسم على 3 أحرف على الأقل",
    slug_too_short: "يجب أن يحتوي المعرف على 3 أحرف على الأقل",
    short_desc_too_short: "يجب أن يحتوي الوصف القصير على 10 أحرف على الأقل",
    long_desc_too_short: "يجب أن يحتوي الوصف المفصل على 20 حرفا على الأقل",
    invalid_number: "يجب إدخال رقم موجب",
    filter_by_status: "تصفية حسب الحالة",
    all_inquiries: "جميع الطلبات",
    no_inquiries: "لا توجد طلبات حاليا.",
    inquiry_date: "التاريخ",
    inquiry_from: "من",
    product: "المنتج",
    status: "الحالة",
    update_status: "تحديث",
    reply_email: "الرد عبر البريد",
    reply_whatsapp: "الرد عبر واتساب",
    status_new: "جديد",
    status_in_progress: "قيد المعالجة",
    status_completed: "مكتمل",
    status_archived: "مؤرشف",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale() {
        assert_eq!(Translations::for_locale(Locale::Fr).home, "Accueil");
        assert_eq!(Translations::for_locale(Locale::Ar).home, "الرئيسية");
    }

    #[test]
    fn test_status_labels() {
        let t = Translations::for_locale(Locale::Fr);
        assert_eq!(t.status_label(InquiryStatus::InProgress), "En cours");
        assert_eq!(t.status_label(InquiryStatus::Archived), "Archivée");
    }
}

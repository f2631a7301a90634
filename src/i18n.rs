use once_cell::sync::Lazy;
use std::collections::HashMap;

type Table = HashMap<&'static str, &'static str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Es,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Accepts bare language codes and region-qualified tags (`es-SV`).
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let language = tag.trim().split(['-', '_']).next()?.to_lowercase();
        match language.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// An explicit `lang` choice wins, then the first supported
    /// `Accept-Language` entry, then the default locale.
    pub fn negotiate(requested: Option<&str>, accept_language: Option<&str>) -> Locale {
        if let Some(locale) = requested.and_then(Locale::from_tag) {
            return locale;
        }
        accept_language
            .into_iter()
            .flat_map(|header| header.split(','))
            .filter_map(|entry| entry.split(';').next())
            .find_map(Locale::from_tag)
            .unwrap_or(DEFAULT_LOCALE)
    }

    fn table(&self) -> &'static Table {
        match self {
            Locale::En => &*EN,
            Locale::Es => &*ES,
        }
    }

    /// Falls back to the default locale, then to the key itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match self
            .table()
            .get(key)
            .or_else(|| DEFAULT_LOCALE.table().get(key))
        {
            Some(value) => *value,
            None => key,
        }
    }
}

static EN: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("brand.name", "Rapid Jobs"),
        ("brand.tagline", "Small gigs. Fast pay. Work on your schedule."),
        ("nav.home", "Home"),
        ("nav.how", "How it works"),
        ("nav.about", "About"),
        ("nav.help", "Help"),
        ("nav.getApp", "Get the app"),
        ("hero.beta", "Beta waitlist"),
        ("hero.title", "Find local help in minutes. Post & hire without resumes"),
        (
            "hero.subtitle",
            "Rapid Jobs is mobile-first: sign up quickly with your phone number (no password), \
             post or claim gigs from the app, and use real-time in-app chat to ask questions \
             and confirm details.",
        ),
        ("hero.placeholder", "you@domain.com"),
        ("hero.join", "Join waitlist"),
        ("hero.joining", "Joining…"),
        ("form.invalid", "Please enter a valid email."),
        ("form.success", "You're on the waitlist. Thanks!"),
        ("form.error", "Server error"),
        ("how.title", "How it works"),
        (
            "how.subtitle",
            "Mobile-first flow: join with your phone, share or claim gigs, chat to confirm, \
             and get paid fast.",
        ),
        ("about.title", "A faster, safer way to match local help"),
        ("about.launch", "Launching soon in El Salvador. Join the waitlist"),
        (
            "about.p1",
            "Rapid Jobs connects neighbors who need help with vetted workers ready to earn. \
             Post small gigs, chat inside the app, and track payouts without juggling \
             spreadsheets or paperwork.",
        ),
        ("footer.getApp", "Get the app"),
        ("download.appstore", "Download on the App Store"),
        ("download.playstore", "Get it on Google Play"),
    ])
});

// `brand.name` is intentionally absent: it is shared with English.
static ES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("brand.tagline", "Trabajos pequeños. Pago rápido. Trabaja a tu ritmo."),
        ("nav.home", "Inicio"),
        ("nav.how", "Cómo funciona"),
        ("nav.about", "Acerca"),
        ("nav.help", "Ayuda"),
        ("nav.getApp", "Obtener la app"),
        ("hero.beta", "Lista de espera Beta"),
        ("hero.title", "Encuentra ayuda local en minutos. Publica y contrata sin currículum"),
        (
            "hero.subtitle",
            "Rapid Jobs es móvil: regístrate con tu número, publica o acepta trabajos y usa \
             chat en la app para confirmar detalles.",
        ),
        ("hero.placeholder", "tu@dominio.com"),
        ("hero.join", "Unirse a la lista"),
        ("hero.joining", "Enviando…"),
        ("form.invalid", "Por favor ingresa un correo válido."),
        ("form.success", "¡Ya estás en la lista de espera, gracias!"),
        ("form.error", "Error del servidor"),
        ("how.title", "Cómo funciona"),
        (
            "how.subtitle",
            "Flujo móvil: regístrate con tu teléfono, publica o acepta trabajos, chatea para \
             confirmar y recibe el pago rápido.",
        ),
        ("about.title", "Una forma más rápida y segura de conseguir ayuda local"),
        ("about.launch", "Próximamente en El Salvador. Únete a la lista de espera"),
        (
            "about.p1",
            "Rapid Jobs conecta a vecinos que necesitan ayuda con trabajadores verificados \
             listos para ganar. Publica trabajos cortos, chatea en la app y controla pagos \
             sin papeleo.",
        ),
        ("footer.getApp", "Obtener la app"),
        ("download.appstore", "Descargar en App Store"),
        ("download.playstore", "Obtener en Google Play"),
    ])
});

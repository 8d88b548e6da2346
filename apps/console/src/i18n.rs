//! User-facing label tables for the four supported display languages, plus
//! the per-language sample sentence datasets.
//!
//! Labels are a struct of `&'static str` rather than a keyed map so a
//! missing translation is a compile error, not a runtime fallback.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Fr,
    En,
    Es,
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 4] = [Lang::Fr, Lang::En, Lang::Es, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Ar => "ar",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Fr => "Français",
            Lang::En => "English",
            Lang::Es => "Español",
            Lang::Ar => "العربية",
        }
    }
}

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" => Ok(Lang::Fr),
            "en" => Ok(Lang::En),
            "es" => Ok(Lang::Es),
            "ar" => Ok(Lang::Ar),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct UnknownLang(pub String);

impl fmt::Display for UnknownLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language '{}' (expected fr, en, es or ar)", self.0)
    }
}

impl std::error::Error for UnknownLang {}

pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub warning_empty: &'static str,
    pub analyzing: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
    pub confidence: &'static str,
    pub sentiment: &'static str,
    pub words_analyzed: &'static str,
    pub error_server: &'static str,
    pub error_timeout: &'static str,
    pub error_connection: &'static str,
    pub examples: &'static str,
    pub history: &'static str,
    pub history_cleared: &'static str,
    pub no_history: &'static str,
    pub language: &'static str,
    pub dashboard: &'static str,
    pub analysis: &'static str,
    pub total_analyses: &'static str,
    pub positive_count: &'static str,
    pub negative_count: &'static str,
    pub avg_confidence: &'static str,
    pub sentiment_distribution: &'static str,
    pub confidence_evolution: &'static str,
    pub word_count_distribution: &'static str,
    pub recent_analyses: &'static str,
    pub sentiment_by_time: &'static str,
    pub no_data: &'static str,
}

pub fn labels(lang: Lang) -> &'static Labels {
    match lang {
        Lang::Fr => &FR,
        Lang::En => &EN,
        Lang::Es => &ES,
        Lang::Ar => &AR,
    }
}

pub fn examples(lang: Lang) -> &'static [&'static str; 6] {
    match lang {
        Lang::Fr => &EXAMPLES_FR,
        Lang::En => &EXAMPLES_EN,
        Lang::Es => &EXAMPLES_ES,
        Lang::Ar => &EXAMPLES_AR,
    }
}

static FR: Labels = Labels {
    title: "Analyseur de Sentiment IA",
    subtitle: "Analyse instantanée alimentée par l'Intelligence Artificielle",
    warning_empty: "Veuillez entrer du texte pour l'analyser.",
    analyzing: "L'IA analyse votre texte en profondeur...",
    positive: "Sentiment Positif",
    negative: "Sentiment Négatif",
    confidence: "Confiance de l'IA",
    sentiment: "Sentiment",
    words_analyzed: "Mots analysés",
    error_server: "Le serveur a répondu avec une erreur. Veuillez réessayer.",
    error_timeout: "Délai d'attente dépassé. Le serveur met trop de temps à répondre.",
    error_connection: "Impossible de contacter l'API. Patientez quelques secondes...",
    examples: "Exemples de phrases",
    history: "Historique",
    history_cleared: "Historique effacé.",
    no_history: "Aucune analyse effectuée pour le moment.",
    language: "Langue",
    dashboard: "Tableau de Bord",
    analysis: "Analyse",
    total_analyses: "Total Analyses",
    positive_count: "Analyses Positives",
    negative_count: "Analyses Négatives",
    avg_confidence: "Confiance Moyenne",
    sentiment_distribution: "Distribution des Sentiments",
    confidence_evolution: "Évolution de la Confiance",
    word_count_distribution: "Distribution du Nombre de Mots",
    recent_analyses: "Analyses Récentes",
    sentiment_by_time: "Sentiments par Heure",
    no_data: "Aucune donnée disponible. Effectuez des analyses pour voir les statistiques.",
};

static EN: Labels = Labels {
    title: "AI Sentiment Analyzer",
    subtitle: "Instant Analysis Powered by Artificial Intelligence",
    warning_empty: "Please enter text to analyze.",
    analyzing: "AI is analyzing your text in depth...",
    positive: "Positive Sentiment",
    negative: "Negative Sentiment",
    confidence: "AI Confidence",
    sentiment: "Sentiment",
    words_analyzed: "Words analyzed",
    error_server: "The server responded with an error. Please try again.",
    error_timeout: "Timeout exceeded. The server is taking too long to respond.",
    error_connection: "Unable to contact the API. Wait a few seconds...",
    examples: "Sample sentences",
    history: "History",
    history_cleared: "History cleared.",
    no_history: "No analysis performed yet.",
    language: "Language",
    dashboard: "Dashboard",
    analysis: "Analysis",
    total_analyses: "Total Analyses",
    positive_count: "Positive Analyses",
    negative_count: "Negative Analyses",
    avg_confidence: "Average Confidence",
    sentiment_distribution: "Sentiment Distribution",
    confidence_evolution: "Confidence Evolution",
    word_count_distribution: "Word Count Distribution",
    recent_analyses: "Recent Analyses",
    sentiment_by_time: "Sentiments by Hour",
    no_data: "No data available. Perform analyses to see statistics.",
};

static ES: Labels = Labels {
    title: "Analizador de Sentimientos IA",
    subtitle: "Análisis instantáneo impulsado por Inteligencia Artificial",
    warning_empty: "Por favor ingrese texto para analizar.",
    analyzing: "La IA está analizando tu texto en profundidad...",
    positive: "Sentimiento Positivo",
    negative: "Sentimiento Negativo",
    confidence: "Confianza de la IA",
    sentiment: "Sentimiento",
    words_analyzed: "Palabras analizadas",
    error_server: "El servidor respondió con un error. Por favor intente nuevamente.",
    error_timeout: "Tiempo de espera excedido. El servidor está tardando demasiado en responder.",
    error_connection: "No se puede contactar con la API. Espere unos segundos...",
    examples: "Frases de ejemplo",
    history: "Historial",
    history_cleared: "Historial borrado.",
    no_history: "No se ha realizado ningún análisis aún.",
    language: "Idioma",
    dashboard: "Panel",
    analysis: "Análisis",
    total_analyses: "Análisis Totales",
    positive_count: "Análisis Positivos",
    negative_count: "Análisis Negativos",
    avg_confidence: "Confianza Media",
    sentiment_distribution: "Distribución de Sentimientos",
    confidence_evolution: "Evolución de la Confianza",
    word_count_distribution: "Distribución de Palabras",
    recent_analyses: "Análisis Recientes",
    sentiment_by_time: "Sentimientos por Hora",
    no_data: "No hay datos disponibles. Realice análisis para ver estadísticas.",
};

static AR: Labels = Labels {
    title: "محلل المشاعر بالذكاء الاصطناعي",
    subtitle: "تحليل فوري مدعوم بالذكاء الاصطناعي",
    warning_empty: "يرجى إدخال نص للتحليل.",
    analyzing: "الذكاء الاصطناعي يحلل نصك بعمق...",
    positive: "مشاعر إيجابية",
    negative: "مشاعر سلبية",
    confidence: "ثقة الذكاء الاصطناعي",
    sentiment: "المشاعر",
    words_analyzed: "الكلمات المحللة",
    error_server: "استجاب الخادم بخطأ. يرجى المحاولة مرة أخرى.",
    error_timeout: "انتهت المهلة الزمنية. الخادم يستغرق وقتًا طويلاً للرد.",
    error_connection: "تعذر الاتصال بواجهة برمجة التطبيقات. انتظر بضع ثوان...",
    examples: "أمثلة على الجمل",
    history: "السجل",
    history_cleared: "تم مسح السجل.",
    no_history: "لم يتم إجراء أي تحليل حتى الآن.",
    language: "اللغة",
    dashboard: "لوحة التحكم",
    analysis: "تحليل",
    total_analyses: "إجمالي التحليلات",
    positive_count: "التحليلات الإيجابية",
    negative_count: "التحليلات السلبية",
    avg_confidence: "متوسط الثقة",
    sentiment_distribution: "توزيع المشاعر",
    confidence_evolution: "تطور الثقة",
    word_count_distribution: "توزيع عدد الكلمات",
    recent_analyses: "التحليلات الأخيرة",
    sentiment_by_time: "المشاعر حسب الساعة",
    no_data: "لا توجد بيانات متاحة. قم بإجراء تحليلات لرؤية الإحصائيات.",
};

static EXAMPLES_FR: [&str; 6] = [
    "J'adore cette application, elle est incroyable et très intuitive !",
    "Le service client est excellent, j'ai reçu une aide rapide et efficace.",
    "Quelle déception ! Le produit ne correspond pas du tout à la description.",
    "Je suis très satisfait de mon achat, la qualité est au rendez-vous.",
    "C'est horrible, je ne recommande absolument pas cette expérience.",
    "Une expérience formidable ! Je reviendrai certainement.",
];

static EXAMPLES_EN: [&str; 6] = [
    "I love this application, it's amazing and very intuitive!",
    "The customer service is excellent, I received quick and efficient help.",
    "What a disappointment! The product doesn't match the description at all.",
    "I'm very satisfied with my purchase, the quality is there.",
    "It's horrible, I absolutely don't recommend this experience.",
    "A wonderful experience! I will definitely come back.",
];

static EXAMPLES_ES: [&str; 6] = [
    "¡Me encanta esta aplicación, es increíble y muy intuitiva!",
    "El servicio al cliente es excelente, recibí ayuda rápida y eficiente.",
    "¡Qué decepción! El producto no coincide en absoluto con la descripción.",
    "Estoy muy satisfecho con mi compra, la calidad está presente.",
    "Es horrible, no recomiendo absolutamente esta experiencia.",
    "¡Una experiencia maravillosa! Definitivamente volveré.",
];

static EXAMPLES_AR: [&str; 6] = [
    "أحب هذا التطبيق، إنه مذهل وسهل الاستخدام للغاية!",
    "خدمة العملاء ممتازة، تلقيت مساعدة سريعة وفعالة.",
    "يا للخيبة! المنتج لا يتطابق مع الوصف على الإطلاق.",
    "أنا راضٍ جدًا عن عملية الشراء، الجودة موجودة.",
    "إنه فظيع، لا أوصي بهذه التجربة على الإطلاق.",
    "تجربة رائعة! سأعود بالتأكيد.",
];

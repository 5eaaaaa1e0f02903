use crate::domain::model::{GenerationOptions, NarrativeKind, NarrativeRequest, SignId};
use chrono::{Datelike, NaiveDate};

const ARABIC_WEEKDAYS: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// A ready-to-send instruction for the text generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub options: GenerationOptions,
}

fn arabic_indic_digits(n: impl ToString) -> String {
    n.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Long Egyptian-Arabic date, e.g. `الجمعة، ١٦ أكتوبر ٢٠٢٦`.
pub fn arabic_date_label(date: NaiveDate) -> String {
    let weekday = ARABIC_WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    let month = ARABIC_MONTHS[date.month0() as usize];
    format!(
        "{}، {} {} {}",
        weekday,
        arabic_indic_digits(date.day()),
        month,
        arabic_indic_digits(date.year())
    )
}

fn daily_horoscope_prompt(sign: SignId, today: NaiveDate) -> String {
    format!(
        "ابحث عن توقعات برج {sign} لليوم {today} على الإنترنت.\n\
         بناءً على نتائج البحث، قم بصياغة \"حظك اليوم\" بطريقة مشوقة وغامضة.\n\
         \n\
         المطلوب:\n\
         - تلخيص أهم التوقعات المهنية، العاطفية، والصحية لهذا اليوم.\n\
         - تقديم نصيحة فلكية واحدة مستندة إلى حركة الكواكب الحالية المذكورة في النتائج.\n\
         - لا تنسخ النصوص حرفياً، بل أعد صياغتها بأسلوب أدبي جذاب باللغة العربية.\n\
         - اجعل النص لا يقل عن 80 كلمة.",
        sign = sign.arabic_name(),
        today = arabic_date_label(today),
    )
}

fn deep_analysis_prompt(sign: SignId) -> String {
    format!(
        "قدم تحليلاً فلكياً عميقاً ومفصلاً لشخصية برج {sign} باللغة العربية.\n\
         المطلوب:\n\
         1. السمات الشخصية الجوهرية (الإيجابية والسلبية).\n\
         2. نقاط القوة الخفية.\n\
         3. الطبيعة العاطفية وكيف يحب.\n\
         اكتب ما لا يقل عن 10 أسطر. لا تستخدم نقاط رؤوس أقلام بسيطة، بل اكتب فقرات مترابطة بأسلوب أدبي وعميق.",
        sign = sign.arabic_name(),
    )
}

fn compatibility_prompt(first: SignId, second: SignId) -> String {
    format!(
        "حلل التوافق العاطفي والروحي بين برج {first} وبرج {second} باللغة العربية.\n\
         قدم تقريراً شاملاً يغطي:\n\
         1. الرابط العاطفي.\n\
         2. أسلوب التفاهم والتواصل.\n\
         3. التحديات المحتملة.\n\
         4. نسبة توافق تقديرية في نهاية النص.\n\
         اكتب بأسلوب سردي ممتع ومفصل.",
        first = first.arabic_name(),
        second = second.arabic_name(),
    )
}

/// Renders the instruction for `request`. `today` only feeds the daily horoscope.
pub fn build_prompt(request: &NarrativeRequest, today: NaiveDate) -> Prompt {
    let text = match (request.kind(), request.signs()) {
        (NarrativeKind::DailyHoroscope, [sign]) => daily_horoscope_prompt(*sign, today),
        (NarrativeKind::DeepAnalysis, [sign]) => deep_analysis_prompt(*sign),
        (NarrativeKind::Compatibility, [first, second]) => compatibility_prompt(*first, *second),
        // NarrativeRequest constructors make any other shape unrepresentable.
        (kind, signs) => unreachable!("{:?} request with {} signs", kind, signs.len()),
    };

    tracing::debug!(
        kind = ?request.kind(),
        grounding = request.grounding_requested(),
        chars = text.chars().count(),
        "built narrative prompt"
    );

    Prompt {
        text,
        options: GenerationOptions {
            use_web_search: request.grounding_requested(),
        },
    }
}

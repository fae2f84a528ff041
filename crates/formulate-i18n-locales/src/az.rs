//! Azerbaijani.

use formulate_i18n_core::{
    CaseRule, Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext,
    sentence_with,
};

pub const TAG: &str = "az";

pub fn dictionary() -> Dictionary {
    Dictionary::new()
        .with(Rule::Accepted, accepted)
        .with(Rule::After, after)
        .with(Rule::Alpha, alpha)
        .with(Rule::Alphanumeric, alphanumeric)
        .with(Rule::Before, before)
        .with(Rule::Between, between)
        .with(Rule::Confirm, confirm)
        .with(Rule::Date, date)
        .with(Rule::Default, fallback)
        .with(Rule::Email, email)
        .with(Rule::EndsWith, ends_with)
        .with(Rule::In, in_list)
        .with(Rule::Matches, matches)
        .with(Rule::Max, max)
        .with(Rule::Mime, mime)
        .with(Rule::Min, min)
        .with(Rule::Not, not)
        .with(Rule::Number, number)
        .with(Rule::Required, required)
        .with(Rule::StartsWith, starts_with)
        .with(Rule::Url, url)
}

pub fn register(host: &mut dyn ExtensionHost) {
    host.extend(Extension::locale(TAG, dictionary()));
}

fn s(text: &str) -> String {
    sentence_with(CaseRule::Turkic, text)
}

fn accepted(ctx: &ValidationContext) -> String {
    format!("Xahiş olunur, {} qəbul edin.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} {date} tarixindən sonra olmalıdır.", s(ctx.name())),
        None => format!("{} daha gec tarix olmalıdır.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} yalnız hərflərdən ibarət ola bilər.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!(
        "{} yalnız hərf və rəqəmlərdən ibarət ola bilər.",
        s(ctx.name())
    )
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} tarixindən əvvəl olmalıdır {date}.", s(ctx.name())),
        None => format!("{} daha erkən tarix olmalıdır.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} {low} və {high} arasında olmalıdır.", s(ctx.name())),
        _ => format!(
            "{} {low} və {high} simvol uzunluğu arasında olmalıdır.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} uyğun gəlmir.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} düzgün tarix deyil, xahiş olunur {format} formatını istifadə edin",
            s(ctx.name())
        ),
        None => format!("{} düzgün tarix deyil.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Xana düzgün deyil.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” düzgün e-poçt ünvanı deyil."),
        None => "Xahiş olunur, düzgün e-poçt ünvanı daxil edin.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” düzgün dəyərlə bitmir."),
        None => "Xana düzgün dəyərlə bitmir.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” icazə verilən {} deyil.", s(value), ctx.name()),
        None => format!("Bu icazə verilən {} deyil.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} icazə verilən dəyər deyil.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Maksimum {limit} {} seçə bilərsiniz.", ctx.name()),
        Measure::Magnitude => format!("{} maksimum {limit} olmalıdır.", s(ctx.name())),
        Measure::Length => format!("{} maksimum {limit} simvol olmalıdır.", s(ctx.name())),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Heç bir fayl formatına icazə verilmir.");
    format!("{} {types} tipində olmalıdır", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Ən azı {limit} {} seçə bilərsiniz.", ctx.name()),
        Measure::Magnitude => format!("{} minimum {limit} olmalıdır.", s(ctx.name())),
        Measure::Length => format!("{} minimum {limit} simvol olmalıdır.", s(ctx.name())),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” icazə verilən {} dəyəri deyil.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} rəqəm olmalıdır.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} tələb edilir.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” düzgün dəyərlə başlamır."),
        None => "Xana düzgün dəyərlə başlamır.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Xahiş olunur, düzgün url daxil edin.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn dotted_capital_i() {
        let ctx = ValidationContext::new("istifadəçi adı");
        let out = dictionary().render(Rule::Required, &ctx).expect("rule present");
        assert_eq!(out, "İstifadəçi adı tələb edilir.");
    }

    #[test]
    fn between_length_wording() {
        let ctx = ValidationContext::new("şifrə")
            .with_value("abc")
            .with_args(["8", "20"]);
        let out = dictionary().render(Rule::Between, &ctx).expect("rule present");
        assert_eq!(out, "Şifrə 8 və 20 simvol uzunluğu arasında olmalıdır.");
    }
}

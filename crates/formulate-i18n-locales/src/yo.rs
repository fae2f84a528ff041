//! Yoruba.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "yo";

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

fn accepted(ctx: &ValidationContext) -> String {
    format!("Jọwọ gba awọn {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} gbọdọ jẹ lẹhin {date}.", s(ctx.name())),
        None => format!("{} gbọdọ jẹ ọjọ ti o pẹ.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} le ni awọn ohun kikọ labidi nikan.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!(
        "{} le nikan ni awọn lẹta ati awọn nọmba ninu.",
        s(ctx.name())
    )
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} gbọdọ wa ṣaaju {date}.", s(ctx.name())),
        None => format!("{} gbọdọ jẹ ọjọ iṣaaju.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} gbọdọ wa laarin awọn {low} ati {high}.", s(ctx.name())),
        _ => format!(
            "{} gbọdọ wa laarin awọn {low} ati awọn ohun kikọ {high} pẹ.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} ko baramu.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} kii ṣe ọjọ ti o wulo, jọwọ lo ọna kika {format}",
            s(ctx.name())
        ),
        None => format!("{} kii ṣe ọjọ to wulo.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Aaye yii ko wulo.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” kii ṣe adirẹsi imeeli to wulo."),
        None => "Jowo fun fun wa ni imeli re to je otito.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” ko pari pẹlu iye to wulo."),
        None => "Aaye yii ko pari pẹlu iye to wulo.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” kii ṣe {} ti o gba laaye.", s(value), ctx.name()),
        None => format!("Eyi kii ṣe {} ti o gba laaye.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} kii ṣe iye ti a gba laaye.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("O le yan {limit} {} nikan.", ctx.name()),
        Measure::Magnitude => format!(
            "{} gbọdọ jẹ kere ju tabi dogba si {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "{} gbọdọ jẹ kere ju tabi dogba si awọn ohun kikọ {limit} pẹ.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Ko si awọn ọna kika faili laaye.");
    format!("{} gbọdọ jẹ ti iru: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("O nilo ni o kere {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} gbọdọ jẹ o kere {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "{} gbọdọ jẹ o kere ju awọn kikọ {limit} gun.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” kii ṣe {} ti o gba laaye.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} gbọdọ jẹ nọmba kan.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} nilo.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” ko bẹrẹ pẹlu iye to wulo."),
        None => "Aaye yii ko bẹrẹ pẹlu iye to wulo.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Jọwọ ṣafikun url to wulo kan.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn in_capitalizes_value() {
        let ctx = ValidationContext::new("awọ").with_value("pupa");
        let out = dictionary().render(Rule::In, &ctx).expect("rule present");
        assert_eq!(out, "“Pupa” kii ṣe awọ ti o gba laaye.");
    }
}

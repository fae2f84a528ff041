//! Indonesian.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "id";

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
    format!("Harap setujui {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} harus setelah {date}.", s(ctx.name())),
        None => format!("{} harus tanggal setelahnya.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} hanya boleh diisi karakter alfabet.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} hanya boleh diisi huruf dan angka.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} harus sebelum {date}.", s(ctx.name())),
        None => format!("{} harus tanggal sebelumnya.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} harus antara {low} sampai {high}.", s(ctx.name())),
        _ => format!(
            "{} harus antara {low} sampai {high} karakter.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} tidak cocok.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} bukan tanggal yang sah, harap gunakan format {format}",
            s(ctx.name())
        ),
        None => format!("{} bukan tanggal yang sah.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Bilah ini tidak sah.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” bukan alamat email yang sah."),
        None => "Harap masukkan alamat email yang sah.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” tidak diakhiri dengan nilai yang sah."),
        None => "Bilah ini tidak diakhiri dengan nilai yang sah.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!(
            "“{}” bukan merupakan {} yang diizinkan.",
            s(value),
            ctx.name()
        ),
        None => format!("Ini bukan merupakan {} yang diizinkan.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} bukan merupakan nilai yang diizinkan.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Anda hanya boleh memilih {limit} {}.", ctx.name()),
        Measure::Magnitude => format!(
            "{} harus kurang dari atau sama dengan {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "{} harus kurang dari atau sama dengan {limit} karakter.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Tidak ada format file yang diizinkan.");
    format!("{} harus bertipe: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Anda memerlukan setidaknya {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} harus setidaknya {limit}.", s(ctx.name())),
        Measure::Length => format!("{} harus setidaknya {limit} karakter.", s(ctx.name())),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” bukan merupakan {} yang sah.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} harus berupa angka.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} wajib diisi.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” tidak diawali dengan nilai yang sah."),
        None => "Bilah ini tidak diawali dengan nilai yang sah.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Harap masukkan url yang sah.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn before_uses_sebelum() {
        let ctx = ValidationContext::new("tanggal").with_args(["2020-01-01"]);
        let out = dictionary().render(Rule::Before, &ctx).expect("rule present");
        assert_eq!(out, "Tanggal harus sebelum 2020-01-01.");
    }

    #[test]
    fn email_with_number_value_is_quoted() {
        let ctx = ValidationContext::new("email").with_value(42);
        let out = dictionary().render(Rule::Email, &ctx).expect("rule present");
        assert_eq!(out, "“42” bukan alamat email yang sah.");
    }
}

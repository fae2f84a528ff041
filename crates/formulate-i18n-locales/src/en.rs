//! English. Every other dictionary is checked against this one.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "en";

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
    format!("Please accept the {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} must be after {date}.", s(ctx.name())),
        None => format!("{} must be a later date.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} can only contain alphabetical characters.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} can only contain letters and numbers.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} must be before {date}.", s(ctx.name())),
        None => format!("{} must be an earlier date.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} must be between {low} and {high}.", s(ctx.name())),
        _ => format!(
            "{} must be between {low} and {high} characters long.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} does not match.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} is not a valid date, please use the format {format}",
            s(ctx.name())
        ),
        None => format!("{} is not a valid date.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "This field isn’t valid.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” is not a valid email address."),
        None => "Please enter a valid email address.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” doesn’t end with a valid value."),
        None => "This field doesn’t end with a valid value.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” is not an allowed {}.", s(value), ctx.name()),
        None => format!("This is not an allowed {}.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} is not an allowed value.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("You may only select {limit} {}.", ctx.name()),
        Measure::Magnitude => format!(
            "{} must be less than or equal to {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "{} must be less than or equal to {limit} characters long.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("No file formats allowed.");
    format!("{} must be of the type: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("You need at least {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} must be at least {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "{} must be at least {limit} characters long.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” is not an allowed {}.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} must be a number.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} is required.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” doesn’t start with a valid value."),
        None => "This field doesn’t start with a valid value.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Please include a valid url.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    fn render(rule: Rule, ctx: &ValidationContext) -> String {
        dictionary().render(rule, ctx).expect("rule present")
    }

    #[test]
    fn required_capitalizes_name() {
        let ctx = ValidationContext::new("email");
        assert_eq!(render(Rule::Required, &ctx), "Email is required.");
    }

    #[test]
    fn between_numeric_value_uses_magnitude() {
        let ctx = ValidationContext::new("Age").with_value(15).with_args(["10", "20"]);
        assert_eq!(render(Rule::Between, &ctx), "Age must be between 10 and 20.");
    }

    #[test]
    fn between_text_value_uses_length() {
        let ctx = ValidationContext::new("username")
            .with_value("ab")
            .with_args(["3", "16"]);
        assert_eq!(
            render(Rule::Between, &ctx),
            "Username must be between 3 and 16 characters long."
        );
    }

    #[test]
    fn between_override_forces_length() {
        let ctx = ValidationContext::new("pin")
            .with_value("12")
            .with_args(["4", "6", "length"]);
        assert_eq!(
            render(Rule::Between, &ctx),
            "Pin must be between 4 and 6 characters long."
        );
    }

    #[test]
    fn max_collection_uses_selection() {
        let ctx = ValidationContext::new("Tags")
            .with_value(vec!["a", "b", "c"])
            .with_args(["2"]);
        assert_eq!(render(Rule::Max, &ctx), "You may only select 2 Tags.");
    }

    #[test]
    fn min_readings() {
        let ctx = ValidationContext::new("toppings")
            .with_value(vec!["cheese"])
            .with_args(["2"]);
        assert_eq!(render(Rule::Min, &ctx), "You need at least 2 toppings.");

        let ctx = ValidationContext::new("quantity").with_value("0").with_args(["1"]);
        assert_eq!(render(Rule::Min, &ctx), "Quantity must be at least 1.");

        let ctx = ValidationContext::new("password").with_value("abc").with_args(["8"]);
        assert_eq!(
            render(Rule::Min, &ctx),
            "Password must be at least 8 characters long."
        );
    }

    #[test]
    fn max_value_override_on_text() {
        let ctx = ValidationContext::new("code")
            .with_value("abc")
            .with_args(["5", "value"]);
        assert_eq!(render(Rule::Max, &ctx), "Code must be less than or equal to 5.");
    }

    #[test]
    fn email_without_value_is_generic() {
        let ctx = ValidationContext::new("Email").with_value("");
        assert_eq!(render(Rule::Email, &ctx), "Please enter a valid email address.");
        let ctx = ValidationContext::new("Email");
        assert_eq!(render(Rule::Email, &ctx), "Please enter a valid email address.");
    }

    #[test]
    fn email_quotes_value() {
        let ctx = ValidationContext::new("Email").with_value("jon@");
        assert_eq!(
            render(Rule::Email, &ctx),
            "“jon@” is not a valid email address."
        );
    }

    #[test]
    fn in_capitalizes_string_value() {
        let ctx = ValidationContext::new("fruit").with_value("kiwi");
        assert_eq!(render(Rule::In, &ctx), "“Kiwi” is not an allowed fruit.");
        let ctx = ValidationContext::new("fruit").with_value(4);
        assert_eq!(render(Rule::In, &ctx), "This is not an allowed fruit.");
    }

    #[test]
    fn date_and_after_without_args() {
        let ctx = ValidationContext::new("birthday");
        assert_eq!(render(Rule::Date, &ctx), "Birthday is not a valid date.");
        assert_eq!(render(Rule::After, &ctx), "Birthday must be a later date.");
        let ctx = ValidationContext::new("birthday").with_args(["MM/DD/YYYY"]);
        assert_eq!(
            render(Rule::Date, &ctx),
            "Birthday is not a valid date, please use the format MM/DD/YYYY"
        );
    }

    #[test]
    fn mime_without_types() {
        let ctx = ValidationContext::new("avatar");
        assert_eq!(
            render(Rule::Mime, &ctx),
            "Avatar must be of the type: No file formats allowed."
        );
        let ctx = ValidationContext::new("avatar").with_args(["image/png, image/jpeg"]);
        assert_eq!(
            render(Rule::Mime, &ctx),
            "Avatar must be of the type: image/png, image/jpeg"
        );
    }

    #[test]
    fn missing_required_inputs_fall_back_to_default() {
        let ctx = ValidationContext::new("age").with_value(4);
        assert_eq!(render(Rule::Between, &ctx), "This field isn’t valid.");
        assert_eq!(render(Rule::Max, &ctx), "This field isn’t valid.");
        let ctx = ValidationContext::new("color");
        assert_eq!(render(Rule::Not, &ctx), "This field isn’t valid.");
    }

    #[test]
    fn not_quotes_value() {
        let ctx = ValidationContext::new("color").with_value("red");
        assert_eq!(render(Rule::Not, &ctx), "“red” is not an allowed color.");
    }
}

use expense_tracker::currency::{
    format_currency, format_dollars, format_fixed, percentage, round_to_cents, LocaleConfig,
};

#[test]
fn advice_amounts_use_two_decimals_without_grouping() {
    assert_eq!(format_dollars(35.0), "$35.00");
    assert_eq!(format_dollars(1234.5), "$1234.50");
    assert_eq!(format_fixed(20.208333), "20.21");
}

#[test]
fn rounding_follows_the_stored_binary_value() {
    assert_eq!(round_to_cents(60.625), 60.63);
    assert_eq!(round_to_cents(0.125), 0.13);
    assert_eq!(round_to_cents(2.675), 2.67);
    assert_eq!(format_fixed(25.025), "25.02");
    assert_eq!(format_fixed(50.025), "50.02");
    assert_eq!(format_fixed(30.005), "30.00");
}

#[test]
fn percentage_of_total() {
    assert_eq!(percentage(60.0, 70.0), 86);
    assert_eq!(percentage(10.0, 70.0), 14);
    assert_eq!(percentage(30.0, 30.0), 100);
}

#[test]
fn display_currency_honours_locale() {
    let locale = LocaleConfig {
        decimal_separator: ',',
        grouping_separator: ' ',
    };
    assert_eq!(format_currency(&locale, 1234.5), "$1 234,50");
    assert_eq!(format_currency(&LocaleConfig::default(), 70.0), "$70.00");
}

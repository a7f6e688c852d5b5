use crate::modules::auth::store::AccountRecord;

/// Sum the value of every holding in the account
pub fn total_value(account: &AccountRecord) -> f64 {
    account
        .assets()
        .iter()
        .fold(0.0, |total, asset| total + asset.value())
}

/// Render an amount with two decimals and thousands separators (1,234.50)
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Values that round to zero are printed unsigned
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::encryption::Credential;
    use crate::modules::portfolio::model::Asset;

    fn account_with(assets: &[(&str, f64)]) -> AccountRecord {
        let mut account = AccountRecord::new(
            "investor".to_string(),
            Credential::derive("Abcdef1", 1),
            "investor@example.com".to_string(),
        );
        for (name, value) in assets {
            account.add_asset(Asset::new(*name, *value).unwrap());
        }
        account
    }

    #[test]
    fn test_total_value() {
        let account = account_with(&[("Gold", 100.0), ("AAPL", 250.5)]);
        assert_eq!(total_value(&account), 350.5);
    }

    #[test]
    fn test_empty_portfolio_totals_zero() {
        let account = account_with(&[]);
        assert_eq!(total_value(&account), 0.0);
        assert_eq!(format_amount(total_value(&account)), "0.00");
    }

    #[test]
    fn test_duplicate_and_negative_holdings_are_summed() {
        let account = account_with(&[("Gold", 100.0), ("Gold", 100.0), ("Loan", -50.0)]);
        assert_eq!(total_value(&account), 150.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(5.5), "5.50");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(459000.0), "459,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1500.5), "-1,500.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }
}

use chrono::NaiveDate;
use pelorus_core::{Reliability, SourceRef, TariffRecord};
use rust_decimal::Decimal;

pub fn all() -> Vec<TariffRecord> {
    vec![
        t("8517.62", "Machines for reception/transmission of voice or data", Some("CN"), "25.0", (2025, 9, 27)),
        t("8703.80", "Motor vehicles with only electric motor for propulsion", Some("CN"), "100.0", (2025, 9, 27)),
        t("7208.39", "Flat-rolled iron or non-alloy steel, hot-rolled", Some("EU"), "0.0", (2025, 1, 1)),
        t("0406.90", "Cheese, other", None, "10.0", (2024, 7, 1)),
        t("6403.99", "Footwear with leather uppers, other", None, "8.5", (2024, 7, 1)),
    ]
}

fn t(
    hs_code: &str,
    description: &str,
    partner: Option<&str>,
    rate: &str,
    effective: (i32, u32, u32),
) -> TariffRecord {
    let partner_label = partner.unwrap_or("mfn");
    TariffRecord {
        id: format!("{hs_code}:{partner_label}"),
        hs_code: hs_code.to_string(),
        description: description.to_string(),
        partner: partner.map(str::to_string),
        rate_percent: rate.parse::<Decimal>().ok(),
        effective_date: NaiveDate::from_ymd_opt(effective.0, effective.1, effective.2),
        sources: vec![SourceRef::new(
            "pelorus-mock",
            format!("mock://tariffs/{hs_code}/{partner_label}"),
            Reliability::High,
        )],
    }
}

use emi_sip_analyzer::{
    FinanceError, LoanTerms, compare, compute_emi, compute_expense_adjusted_value,
    compute_lump_sum_future_value, compute_sip_future_value, compute_total_interest,
};
use rstest::rstest;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

#[rstest]
#[case(dec!(1_000), dec!(0.01), 1)]
#[case(dec!(50_000), dec!(0.065), 36)]
#[case(dec!(1_200_000), dec!(0.085), 120)]
#[case(dec!(1_200_000), dec!(0.085), 240)]
#[case(dec!(7_500_000), dec!(0.11), 360)]
fn emi_schedule_repays_more_than_principal(
    #[case] principal: Decimal,
    #[case] rate: Decimal,
    #[case] months: u32,
) {
    let emi = compute_emi(principal, rate, months).unwrap();
    assert!(emi * Decimal::from(months) > principal);
}

#[test]
fn emi_decreases_with_tenure() {
    let emis: Vec<Decimal> = (1..=30)
        .map(|years| compute_emi(dec!(1_200_000), dec!(0.085), years * 12).unwrap())
        .collect();
    assert!(emis.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn emi_increases_with_rate() {
    let emis: Vec<Decimal> = (1..=20)
        .map(|bp| compute_emi(dec!(1_200_000), Decimal::new(bp, 2), 240).unwrap())
        .collect();
    assert!(emis.windows(2).all(|w| w[0] < w[1]));
}

#[rstest]
#[case(dec!(0.001))]
#[case(dec!(0.000001))]
#[case(dec!(0.0000000001))]
fn sip_value_approaches_plain_sum_as_rate_vanishes(#[case] rate: Decimal) {
    let plain = dec!(1000) * dec!(120);
    let fv = compute_sip_future_value(dec!(1000), rate, 120).unwrap();
    let zero = compute_sip_future_value(dec!(1000), Decimal::ZERO, 120).unwrap();

    assert_eq!(zero, plain);
    // Drift is bounded by roughly contribution * n^2 * rate.
    assert!((fv - plain).abs() <= dec!(1000) * dec!(14_400) * rate + dec!(0.01));
}

#[test]
fn lump_sum_at_zero_rate_is_a_fixed_point() {
    for years in 1..=30 {
        let fv = compute_lump_sum_future_value(dec!(250_000.75), Decimal::ZERO, years).unwrap();
        assert_eq!(fv, dec!(250_000.75));
    }
}

#[rstest]
#[case(dec!(0.12), dec!(0.001), 1)]
#[case(dec!(0.12), dec!(0.03), 30)]
#[case(dec!(0.02), dec!(0.025), 10)]
#[case(dec!(0), dec!(0.01), 5)]
fn expense_ratio_always_costs_something(
    #[case] rate: Decimal,
    #[case] expense_ratio: Decimal,
    #[case] years: u32,
) {
    let impact = compute_expense_adjusted_value(dec!(1_000_000), rate, expense_ratio, years).unwrap();
    assert!(impact.loss > Decimal::ZERO);
}

#[test]
fn reference_scenario() {
    let short = LoanTerms::new(dec!(1_200_000), dec!(0.085), 120).unwrap();
    let long = LoanTerms::new(dec!(1_200_000), dec!(0.085), 240).unwrap();
    let result = compare(&short, &long, dec!(0.12)).unwrap();

    assert!((result.emi_short_term.emi - dec!(14_880)).abs() <= dec!(2));
    assert!((result.emi_long_term.emi - dec!(10_416)).abs() <= dec!(3));
    assert!((result.monthly_surplus - dec!(4_464)).abs() <= dec!(1));
}

#[test]
fn sip_of_reference_surplus_matches_closed_form() {
    let c = dec!(4_464);
    let i = dec!(0.01);
    let fv = compute_sip_future_value(c, i, 240).unwrap();

    let growth = Decimal::ONE + i;
    let expected = c * ((growth.powu(240) - Decimal::ONE) / i) * growth;
    assert!((fv - expected).abs() <= dec!(0.01));
    assert!(fv > dec!(1_000_000));
}

#[rstest]
#[case(dec!(1_200_000), dec!(0.085), 120)]
#[case(dec!(333_333.33), dec!(0.0725), 77)]
fn total_interest_agrees_with_emi(
    #[case] principal: Decimal,
    #[case] rate: Decimal,
    #[case] months: u32,
) {
    let emi = compute_emi(principal, rate, months).unwrap();
    let interest = compute_total_interest(principal, emi, months).unwrap();
    assert_eq!(interest, emi * Decimal::from(months) - principal);
}

#[test]
fn repeated_comparisons_are_identical() {
    let short = LoanTerms::new(dec!(2_000_000), dec!(0.09), 180).unwrap();
    let long = LoanTerms::new(dec!(2_000_000), dec!(0.09), 300).unwrap();
    assert_eq!(
        compare(&short, &long, dec!(0.11)).unwrap(),
        compare(&short, &long, dec!(0.11)).unwrap()
    );
}

#[test]
fn comparisons_run_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let short = LoanTerms::new(dec!(1_200_000), dec!(0.085), 120).unwrap();
                let long = LoanTerms::new(dec!(1_200_000), dec!(0.085), 240).unwrap();
                compare(&short, &long, dec!(0.12)).unwrap()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn misordered_comparison_is_degenerate() {
    let short = LoanTerms::new(dec!(1_200_000), dec!(0.085), 240).unwrap();
    let long = LoanTerms::new(dec!(1_200_000), dec!(0.085), 120).unwrap();
    assert!(matches!(
        compare(&short, &long, dec!(0.12)),
        Err(FinanceError::DegenerateComparison { .. })
    ));
}

mod common;

use anyhow::Result;
use common::{SampleExpenses, test_service};
use outlay::application::ExpenseSummary;
use outlay::domain::{ExpenseRecord, by_category, total};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_empty_summary() -> Result<()> {
    let (service, _temp) = test_service()?;

    let summary = service.summary();

    assert!(summary.is_empty());
    assert_eq!(summary.total, 0.0);
    assert!(summary.categories.is_empty());
    Ok(())
}

#[test]
fn test_summary_totals() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::add_basic(&mut service)?;

    let summary = service.summary();

    assert_eq!(summary.count, 4);
    assert!(approx(summary.total, 64.75));

    let names: Vec<&str> = summary
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(names, vec!["food", "transport", "entertainment"]);

    let food = &summary.categories[0];
    assert!(approx(food.total, 15.75));
    assert_eq!(food.count, 2);
    assert!(approx(food.average, 7.875));
    Ok(())
}

#[test]
fn test_percentages_add_up() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::add_basic(&mut service)?;

    let summary = service.summary();
    let sum: f64 = summary.categories.iter().map(|c| c.percentage).sum();

    assert!(approx(sum, 100.0));
    Ok(())
}

#[test]
fn test_aggregates_from_documented_examples() {
    assert_eq!(total(&[]), 0.0);
    assert_eq!(
        total(&[
            ExpenseRecord::new(10.0, "", "a"),
            ExpenseRecord::new(5.5, "", "b"),
        ]),
        15.5
    );

    let records = vec![
        ExpenseRecord::new(10.0, "", "food"),
        ExpenseRecord::new(5.0, "", "food"),
        ExpenseRecord::new(2.0, "", "transport"),
    ];
    let totals: Vec<(String, f64)> = by_category(&records)
        .into_iter()
        .map(|t| (t.category, t.total))
        .collect();
    assert_eq!(
        totals,
        vec![("food".to_string(), 15.0), ("transport".to_string(), 2.0)]
    );
}

#[test]
fn test_summary_serializes_to_json() -> Result<()> {
    let summary = ExpenseSummary::from_records(&[ExpenseRecord::new(10.0, "", "food")]);

    let value = serde_json::to_value(&summary)?;

    assert_eq!(value["total"], 10.0);
    assert_eq!(value["categories"][0]["category"], "food");
    assert_eq!(value["categories"][0]["percentage"], 100.0);
    Ok(())
}

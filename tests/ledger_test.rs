mod common;

use anyhow::Result;
use common::{SampleExpenses, test_service};
use outlay::application::AppError;
use outlay::domain::{ExpenseRecord, ParseAmountError};

#[test]
fn test_add_expense_appends_one_record() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    let record = service.add_expense("12.5", "lunch", "FOOD")?.clone();

    assert_eq!(service.list_expenses().len(), 1);
    assert_eq!(record, ExpenseRecord::new(12.5, "lunch", "food"));
    assert_eq!(service.list_expenses()[0].category, "food");
    assert!(service.has_unsaved_changes());

    Ok(())
}

#[test]
fn test_add_expense_invalid_amount() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::add_basic(&mut service)?;
    let before = service.list_expenses().to_vec();

    for bad in ["", "twelve", "12,50", "1.2.3", "nan", "inf", "0", "-4"] {
        let err = service.add_expense(bad, "bad", "food").unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)), "{bad:?}");
    }

    assert_eq!(service.list_expenses(), before.as_slice());
    Ok(())
}

#[test]
fn test_invalid_amount_does_not_mark_unsaved() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    let err = service.add_expense("abc", "", "food").unwrap_err();

    assert!(matches!(
        err,
        AppError::InvalidAmount(ParseAmountError::NotANumber(_))
    ));
    assert!(!service.has_unsaved_changes());
    Ok(())
}

#[test]
fn test_description_is_kept_verbatim() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    service.add_expense("1", "", "misc")?;
    service.add_expense("2", "  Gift for Mum  ", "misc")?;

    assert_eq!(service.list_expenses()[0].description, "");
    assert_eq!(service.list_expenses()[1].description, "  Gift for Mum  ");
    Ok(())
}

#[test]
fn test_categories() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    assert!(service.categories().is_empty());

    SampleExpenses::add_basic(&mut service)?;

    let categories: Vec<String> = service.categories().into_iter().collect();
    assert_eq!(categories, vec!["entertainment", "food", "transport"]);
    Ok(())
}

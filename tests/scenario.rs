use std::sync::Mutex;

use decicalc::{CalcError, Calculator, Decimal};
use rust_decimal_macros::dec;

#[test]
fn test_full_session() {
    let mut calc = Calculator::new();

    calc.calculate("+", dec!(1), dec!(2)).unwrap();
    assert_eq!(calc.result().to_string(), "3");

    calc.calculate("-", dec!(5), dec!(3)).unwrap();
    assert_eq!(calc.result(), dec!(2.00));

    calc.calculate("*", dec!(6), dec!(4)).unwrap();
    assert_eq!(calc.result().to_string(), "24");

    calc.calculate("/", dec!(7), dec!(2)).unwrap();
    assert_eq!(calc.result().to_string(), "3.50");

    calc.undo();
    assert_eq!(calc.result(), dec!(24));

    calc.redo();
    assert_eq!(calc.result().to_string(), "3.50");

    let err = calc.calculate("/", dec!(1), dec!(0)).unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
    assert_eq!(err.to_string(), "Division by zero!");
    assert_eq!(calc.result().to_string(), "3.50");

    let err = calc.calculate("%", dec!(1), dec!(2)).unwrap_err();
    assert_eq!(err, CalcError::UnsupportedOperator("%".to_string()));
    assert_eq!(err.to_string(), "Unsupported operator: %");
    assert_eq!(calc.result().to_string(), "3.50");
    assert_eq!(calc.depth(), 4);
}

#[test]
fn test_each_calculation_deepens_history() {
    let mut calc = Calculator::new();
    let ops = ["+", "-", "*", "/", "+", "+"];

    for (i, op) in ops.iter().enumerate() {
        calc.calculate(op, dec!(9), dec!(3)).unwrap();
        assert_eq!(calc.depth(), i + 1);
        assert_eq!(calc.undo_depth(), 0);
    }
}

#[test]
fn test_matching_operators_cannot_be_undone() {
    let mut calc = Calculator::new();
    calc.calculate("*", dec!(2), dec!(3)).unwrap();
    calc.calculate("*", dec!(4), dec!(5)).unwrap();

    calc.undo();
    assert_eq!(calc.result(), dec!(20));
    assert_eq!(calc.depth(), 2);
    assert!(!calc.can_redo());
}

#[test]
fn test_undo_everything_then_redo() {
    let mut calc = Calculator::new();
    calc.calculate("+", dec!(1), dec!(2)).unwrap();

    calc.undo();
    assert_eq!(calc.result(), Decimal::ZERO);
    assert_eq!(calc.depth(), 0);

    // undo on an empty history changes nothing
    calc.undo();
    assert_eq!(calc.undo_depth(), 1);

    calc.redo();
    assert_eq!(calc.result(), dec!(3));
    calc.redo();
    assert_eq!(calc.depth(), 1);
}

#[test]
fn test_new_calculation_discards_redo() {
    let mut calc = Calculator::new();
    calc.calculate("+", dec!(1), dec!(2)).unwrap();
    calc.calculate("/", dec!(1), dec!(4)).unwrap();
    calc.undo();
    assert!(calc.can_redo());

    calc.calculate("-", dec!(10), dec!(4)).unwrap();
    calc.redo();
    assert_eq!(calc.result(), dec!(6));
    assert_eq!(calc.depth(), 2);
}

#[test]
fn test_shared_behind_mutex() {
    let calc = Mutex::new(Calculator::new());

    std::thread::scope(|s| {
        for i in 1..=4 {
            let calc = &calc;
            s.spawn(move || {
                let mut calc = calc.lock().unwrap();
                calc.calculate("+", Decimal::from(i), dec!(0)).unwrap();
            });
        }
    });

    assert_eq!(calc.lock().unwrap().depth(), 4);
}

//! Assertion functions exposed to scripts

use rhai::{Dynamic, Engine, EvalAltResult, FnPtr, ImmutableString, NativeCallContext};

/// Strict equality: same dynamic type and same rendered value
fn same(actual: &Dynamic, expected: &Dynamic) -> bool {
    actual.type_name() == expected.type_name() && actual.to_string() == expected.to_string()
}

pub(super) fn register(engine: &mut Engine) {
    engine.register_fn(
        "assert_eq",
        |actual: Dynamic, expected: Dynamic| -> Result<(), Box<EvalAltResult>> {
            if same(&actual, &expected) {
                Ok(())
            } else {
                Err(format!(
                    "Expected values to be strictly equal:\n  actual: {:?}\n  expected: {:?}",
                    actual, expected
                )
                .into())
            }
        },
    );

    engine.register_fn(
        "assert_ne",
        |actual: Dynamic, expected: Dynamic| -> Result<(), Box<EvalAltResult>> {
            if same(&actual, &expected) {
                Err(format!("Expected values to differ, both were {:?}", actual).into())
            } else {
                Ok(())
            }
        },
    );

    engine.register_fn(
        "assert_true",
        |condition: bool| -> Result<(), Box<EvalAltResult>> {
            if condition {
                Ok(())
            } else {
                Err("Expected condition to be true".into())
            }
        },
    );

    engine.register_fn(
        "assert_true",
        |condition: bool, message: ImmutableString| -> Result<(), Box<EvalAltResult>> {
            if condition {
                Ok(())
            } else {
                Err(message.to_string().into())
            }
        },
    );

    engine.register_fn(
        "assert_throws",
        |context: NativeCallContext, action: FnPtr| -> Result<(), Box<EvalAltResult>> {
            match action.call_within_context::<Dynamic>(&context, ()) {
                Ok(value) => Err(format!("Expected function to throw, it returned {:?}", value).into()),
                Err(_) => Ok(()),
            }
        },
    );
}

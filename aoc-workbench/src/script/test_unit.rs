//! Test units: scripts that register cases

use super::ScriptHost;
use crate::error::{CaseError, LoadError};
use crate::loader::UnitLoader;
use crate::registry::{TestOptions, TestRegistry};
use rhai::{AST, Dynamic, Engine, FnPtr, ImmutableString};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Registration calls made while the unit's top level runs
struct PendingCase {
    name: String,
    action: FnPtr,
    options: TestOptions,
}

/// Engine and compiled unit shared by the actions of one load
struct LoadedUnit {
    engine: Engine,
    ast: AST,
}

/// Loads `*.test.rhai` units through a [`ScriptHost`]
#[derive(Clone)]
pub struct ScriptTestLoader {
    host: ScriptHost,
}

impl ScriptTestLoader {
    pub fn new(host: ScriptHost) -> Self {
        Self { host }
    }
}

impl UnitLoader for ScriptTestLoader {
    fn evaluate(&self, path: &Path, registry: &mut TestRegistry) -> Result<(), LoadError> {
        let mut engine = self.host.engine();
        let pending: Rc<RefCell<Vec<PendingCase>>> = Rc::default();

        for (function, options) in [
            ("test", TestOptions::default()),
            ("test_skip", TestOptions::skip()),
            ("test_only", TestOptions::only()),
        ] {
            let pending = Rc::clone(&pending);
            engine.register_fn(function, move |name: ImmutableString, action: FnPtr| {
                pending.borrow_mut().push(PendingCase {
                    name: name.to_string(),
                    action,
                    options,
                });
            });
        }

        let ast = self.host.compile(&engine, path)?;
        engine.run_ast(&ast).map_err(|err| LoadError::Eval {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        let cases = pending.take();
        let unit = Rc::new(LoadedUnit { engine, ast });
        for case in cases {
            let unit = Rc::clone(&unit);
            let action = case.action;
            registry.register(
                case.name,
                move || {
                    action
                        .call::<Dynamic>(&unit.engine, &unit.ast, ())
                        .map(drop)
                        .map_err(|err| CaseError::new(err.to_string()))
                },
                case.options,
            );
        }
        Ok(())
    }
}

//! Solution units: scripts defining `part1`, `part2` and optionally `parse_input`

use super::ScriptHost;
use crate::day::{Day, Part};
use crate::error::{LoadError, SolutionError};
use crate::solution::SolutionUnit;
use rhai::{AST, Dynamic, Engine, Module, Scope};
use std::path::Path;
use tracing::debug;

const PARSE_INPUT: &str = "parse_input";
/// Namespace the evaluated unit is registered under
const UNIT_NAMESPACE: &str = "unit";
const INPUT_VAR: &str = "input";

/// A freshly evaluated solution unit
///
/// The top level runs once, producing a module whose functions keep the
/// unit's own imports. Entry points are called through that module.
pub struct ScriptSolution {
    day: Day,
    engine: Engine,
    ast: AST,
}

impl ScriptSolution {
    /// Compile the unit and run its top level once
    pub fn load(host: &ScriptHost, day: Day, path: &Path) -> Result<Self, LoadError> {
        debug!(unit = %path.display(), "loading solution unit");
        let mut engine = host.engine();
        let ast = host.compile(&engine, path)?;
        let module = Module::eval_ast_as_new(Scope::new(), &ast, &engine).map_err(|err| {
            LoadError::Eval {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        engine.register_static_module(UNIT_NAMESPACE, module.into());

        Ok(Self { day, engine, ast })
    }

    /// Parameter count of the unit's function `name`, if it defines one
    fn arity(&self, name: &str) -> Option<usize> {
        self.ast
            .iter_functions()
            .find(|function| function.name == name)
            .map(|function| function.params.len())
    }

    pub fn defines(&self, name: &str) -> bool {
        self.arity(name).is_some()
    }

    fn call(&self, name: &str, argument: Dynamic) -> Result<Dynamic, String> {
        if let Some(arity) = self.arity(name)
            && arity != 1
        {
            return Err(format!(
                "{}() must take exactly one parameter (the input), found {}",
                name, arity
            ));
        }

        let mut scope = Scope::new();
        scope.push_dynamic(INPUT_VAR, argument);
        let script = format!("{}::{}({})", UNIT_NAMESPACE, name, INPUT_VAR);
        self.engine
            .eval_with_scope::<Dynamic>(&mut scope, &script)
            .map_err(|err| err.to_string())
    }
}

impl SolutionUnit for ScriptSolution {
    type Input = Dynamic;

    fn parse_input(&mut self, raw: &str) -> Result<Self::Input, SolutionError> {
        if !self.defines(PARSE_INPUT) {
            return Ok(Dynamic::from(raw.to_string()));
        }
        self.call(PARSE_INPUT, Dynamic::from(raw.to_string()))
            .map_err(|message| SolutionError::Parse {
                day: self.day.get(),
                message,
            })
    }

    fn has_part(&self, part: Part) -> bool {
        self.defines(part.function_name())
    }

    fn solve(&mut self, part: Part, input: Self::Input) -> Result<String, SolutionError> {
        self.call(part.function_name(), input)
            .map(|answer| answer.to_string())
            .map_err(|message| SolutionError::Part {
                day: self.day.get(),
                part: part.number(),
                message,
            })
    }
}

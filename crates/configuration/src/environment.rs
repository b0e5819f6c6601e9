//! Where secrets are read from.

use std::collections::HashMap;

use thiserror::Error;

use crate::values::Variable;

/// A source of environment variables.
pub trait Environment {
    fn read(&self, variable: &Variable) -> Result<String, Error>;
}

/// Errors reading from an environment.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the environment variable {0} is not set")]
    NonExistentVariable(Variable, #[source] std::env::VarError),
    #[error("the environment variable {0} is set but empty")]
    EmptyVariable(Variable),
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        let value = std::env::var(&variable.0)
            .map_err(|err| Error::NonExistentVariable(variable.clone(), err))?;
        if value.is_empty() {
            Err(Error::EmptyVariable(variable.clone()))
        } else {
            Ok(value)
        }
    }
}

/// A fixed set of variables, for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(HashMap<Variable, String>);

impl<V: Into<Variable>, S: Into<String>, const N: usize> From<[(V, S); N]> for FixedEnvironment {
    fn from(value: [(V, S); N]) -> Self {
        FixedEnvironment(
            value
                .into_iter()
                .map(|(variable, value)| (variable.into(), value.into()))
                .collect(),
        )
    }
}

impl Environment for FixedEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        match self.0.get(variable) {
            None => Err(Error::NonExistentVariable(
                variable.clone(),
                std::env::VarError::NotPresent,
            )),
            Some(value) if value.is_empty() => Err(Error::EmptyVariable(variable.clone())),
            Some(value) => Ok(value.clone()),
        }
    }
}

impl<E: Environment> Environment for &E {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        (*self).read(variable)
    }
}

impl Environment for HashMap<String, String> {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        match self.get(&variable.0) {
            None => Err(Error::NonExistentVariable(
                variable.clone(),
                std::env::VarError::NotPresent,
            )),
            Some(value) if value.is_empty() => Err(Error::EmptyVariable(variable.clone())),
            Some(value) => Ok(value.clone()),
        }
    }
}

// Shared test double for driving the migration engine without a database

use roost_migrate::executor::{BoxError, Executor};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

/// Scripted outcome for one executor call, consumed in order
#[derive(Debug)]
#[allow(dead_code)]
pub enum Step {
    BatchOk,
    BatchErr(&'static str),
    ExecOk(usize),
    ExecErr(&'static str),
    ScalarRow(i64),
    ScalarNone,
    ScalarErr(&'static str),
}

/// One observed executor call with the SQL it carried
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Call {
    Batch(String),
    Exec(String),
    Scalar(String),
}

#[derive(Debug)]
struct ScriptError(&'static str);

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ScriptError {}

/// Executor fake that replays a scripted sequence of outcomes and
/// records every call so tests can assert on order and content
pub struct ScriptedExecutor {
    steps: RefCell<VecDeque<Step>>,
    calls: RefCell<Vec<Call>>,
}

#[allow(dead_code)]
impl ScriptedExecutor {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: RefCell::new(steps.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Calls observed so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next_step(&self, call: &Call) -> Step {
        self.steps
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted executor call: {:?}", call))
    }
}

impl Executor for ScriptedExecutor {
    fn execute_batch(&self, sql: &str) -> Result<(), BoxError> {
        let call = Call::Batch(sql.to_string());
        self.calls.borrow_mut().push(call.clone());
        match self.next_step(&call) {
            Step::BatchOk => Ok(()),
            Step::BatchErr(msg) => Err(Box::new(ScriptError(msg))),
            other => panic!("scripted {:?} does not fit batch call {:?}", other, call),
        }
    }

    fn execute(&self, sql: &str, _params: &[&str]) -> Result<usize, BoxError> {
        let call = Call::Exec(sql.to_string());
        self.calls.borrow_mut().push(call.clone());
        match self.next_step(&call) {
            Step::ExecOk(changed) => Ok(changed),
            Step::ExecErr(msg) => Err(Box::new(ScriptError(msg))),
            other => panic!("scripted {:?} does not fit execute call {:?}", other, call),
        }
    }

    fn query_scalar(&self, sql: &str, _params: &[&str]) -> Result<Option<i64>, BoxError> {
        let call = Call::Scalar(sql.to_string());
        self.calls.borrow_mut().push(call.clone());
        match self.next_step(&call) {
            Step::ScalarRow(v) => Ok(Some(v)),
            Step::ScalarNone => Ok(None),
            Step::ScalarErr(msg) => Err(Box::new(ScriptError(msg))),
            other => panic!("scripted {:?} does not fit scalar call {:?}", other, call),
        }
    }
}

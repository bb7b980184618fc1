use serde::{Deserialize, Serialize};

/// A delivered invocation: function name plus ordered string arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Request {
    /// Builds a request from a function name and any string-like arguments.
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

//! Reply lines written by the command driver

use std::fmt;

/// One reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Write acknowledged
    Ok,
    /// Value found
    Value(String),
    /// Key absent or expired
    Nil,
    Bool(bool),
    Integer(usize),
    /// Command rejected
    Error(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Value(value) => write!(f, "{}", value),
            Reply::Nil => write!(f, "(nil)"),
            Reply::Bool(flag) => write!(f, "{}", flag),
            Reply::Integer(n) => write!(f, "{}", n),
            Reply::Error(message) => write!(f, "ERR {}", message),
        }
    }
}

impl From<Option<String>> for Reply {
    fn from(value: Option<String>) -> Self {
        value.map_or(Reply::Nil, Reply::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_rendering() {
        assert_eq!(Reply::Ok.to_string(), "OK");
        assert_eq!(Reply::Value("hello".to_string()).to_string(), "hello");
        assert_eq!(Reply::Nil.to_string(), "(nil)");
        assert_eq!(Reply::Bool(true).to_string(), "true");
        assert_eq!(Reply::Integer(42).to_string(), "42");
        assert_eq!(
            Reply::Error("unknown verb".to_string()).to_string(),
            "ERR unknown verb"
        );
    }

    #[test]
    fn test_reply_from_option() {
        assert_eq!(Reply::from(None), Reply::Nil);
        assert_eq!(
            Reply::from(Some("v".to_string())),
            Reply::Value("v".to_string())
        );
    }
}

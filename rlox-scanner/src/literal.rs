#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Number(f64),
    String(&'a str),
}

impl Literal<'_> {
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Literal::Number(n) => Some(n),
            Literal::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Literal::String(s) => Some(s),
            Literal::Number(_) => None,
        }
    }
}

impl From<f64> for Literal<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl<'a> From<&'a str> for Literal<'a> {
    fn from(s: &'a str) -> Self {
        Self::String(s)
    }
}

impl std::fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Debug keeps the fractional part: 42.0 rather than 42
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::String(s) => s.fmt(f),
        }
    }
}

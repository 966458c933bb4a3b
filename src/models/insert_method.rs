use serde::Serialize;

/// How a time card entered the store.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum InsertMethod {
    Clock,
    Manual,
}

impl InsertMethod {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            InsertMethod::Clock => "clock",
            InsertMethod::Manual => "manual",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock" => Some(InsertMethod::Clock),
            "manual" => Some(InsertMethod::Manual),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_str_round_trip() {
        assert_eq!(
            InsertMethod::from_db_str(InsertMethod::Clock.to_db_str()),
            Some(InsertMethod::Clock)
        );
        assert_eq!(
            InsertMethod::from_db_str(InsertMethod::Manual.to_db_str()),
            Some(InsertMethod::Manual)
        );
        assert_eq!(InsertMethod::from_db_str("typed"), None);
    }
}

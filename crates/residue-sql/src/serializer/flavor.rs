use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Mysql,
    Postgresql,
    Sqlite,
    /// SQLite with the `internal_startswith`, `internal_endswith` and
    /// `internal_contains` functions registered.
    SqliteInternal,
    Sqlserver,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn sqlite_internal() -> Serializer {
        Serializer {
            flavor: Flavor::SqliteInternal,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn sqlserver() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlserver,
        }
    }

    /// Returns the serializer for a dialect name. Unknown dialects render as
    /// SQLite.
    pub fn for_dialect(dialect: &str) -> Serializer {
        match dialect.to_ascii_lowercase().as_str() {
            "mysql" => Serializer::mysql(),
            "postgres" | "postgresql" => Serializer::postgresql(),
            "sqlserver" => Serializer::sqlserver(),
            "sqlite-internal" => Serializer::sqlite_internal(),
            _ => Serializer::sqlite(),
        }
    }

    pub(super) fn is_mysql(&self) -> bool {
        self.flavor == Flavor::Mysql
    }
}

use std::fmt;
use std::str::FromStr;

/// The closed set of tables the gateway may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Sites,
    Library,
    Messages,
}

/// Fixed SQL for one table. Callers bind values; they never shape the text.
#[derive(Debug)]
pub struct TableStatements {
    pub create: &'static str,
    pub select: &'static str,
    pub upsert: &'static str,
    pub delete: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTable(pub String);

impl fmt::Display for UnknownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table '{}' is not allowed", self.0)
    }
}

impl std::error::Error for UnknownTable {}

impl Table {
    pub const ALL: [Table; 3] = [Table::Sites, Table::Library, Table::Messages];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Sites => "sites",
            Table::Library => "library",
            Table::Messages => "messages",
        }
    }

    pub fn statements(&self) -> &'static TableStatements {
        match self {
            Table::Sites => &SITES,
            Table::Library => &LIBRARY,
            Table::Messages => &MESSAGES,
        }
    }
}

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sites" => Ok(Table::Sites),
            "library" => Ok(Table::Library),
            "messages" => Ok(Table::Messages),
            other => Err(UnknownTable(other.to_string())),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static SITES: TableStatements = TableStatements {
    create: "CREATE TABLE IF NOT EXISTS sites (
       id TEXT PRIMARY KEY,
       user_id TEXT NOT NULL,
       domain TEXT NOT NULL,
       site_name TEXT NOT NULL,
       username TEXT NOT NULL,
       app_password TEXT NOT NULL,
       status TEXT NOT NULL DEFAULT 'online',
       wp_version TEXT
     )",
    select: "SELECT id, user_id, domain, site_name, username, app_password, status, wp_version
       FROM sites
       ORDER BY id DESC",
    upsert: "INSERT INTO sites (id, user_id, domain, site_name, username, app_password, status, wp_version)
       VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'online'), $8)
       ON CONFLICT (id) DO UPDATE
       SET user_id = EXCLUDED.user_id,
           domain = EXCLUDED.domain,
           site_name = EXCLUDED.site_name,
           username = EXCLUDED.username,
           app_password = EXCLUDED.app_password,
           status = COALESCE($7, sites.status),
           wp_version = EXCLUDED.wp_version",
    delete: "DELETE FROM sites WHERE id = $1",
};

static LIBRARY: TableStatements = TableStatements {
    create: "CREATE TABLE IF NOT EXISTS library (
       id TEXT PRIMARY KEY,
       user_id TEXT NOT NULL,
       name TEXT NOT NULL,
       \"type\" TEXT NOT NULL,
       file_name TEXT NOT NULL,
       file_size TEXT NOT NULL,
       upload_date TEXT NOT NULL
     )",
    select: "SELECT id, user_id, name, \"type\", file_name, file_size, upload_date
       FROM library
       ORDER BY id DESC",
    // upload_date is write-once
    upsert: "INSERT INTO library (id, user_id, name, \"type\", file_name, file_size, upload_date)
       VALUES ($1, $2, $3, $4, $5, $6, $7)
       ON CONFLICT (id) DO UPDATE
       SET name = EXCLUDED.name,
           \"type\" = EXCLUDED.\"type\",
           file_name = EXCLUDED.file_name,
           file_size = EXCLUDED.file_size",
    delete: "DELETE FROM library WHERE id = $1",
};

static MESSAGES: TableStatements = TableStatements {
    create: "CREATE TABLE IF NOT EXISTS messages (
       id TEXT PRIMARY KEY,
       sender_id TEXT,
       receiver_id TEXT,
       subject TEXT,
       content TEXT,
       \"timestamp\" TEXT,
       \"read\" BOOLEAN NOT NULL DEFAULT FALSE
     )",
    select: "SELECT id, sender_id, receiver_id, subject, content, \"timestamp\", \"read\"
       FROM messages
       ORDER BY id DESC",
    // Only read and content move after creation
    upsert: "INSERT INTO messages (id, sender_id, receiver_id, subject, content, \"timestamp\", \"read\")
       VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE))
       ON CONFLICT (id) DO UPDATE
       SET content = COALESCE($5, messages.content),
           \"read\" = COALESCE($7, messages.\"read\")",
    delete: "DELETE FROM messages WHERE id = $1",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_allow_listed_names_only() {
        assert_eq!("sites".parse::<Table>(), Ok(Table::Sites));
        assert_eq!("library".parse::<Table>(), Ok(Table::Library));
        assert_eq!("messages".parse::<Table>(), Ok(Table::Messages));
        assert_eq!(
            "users".parse::<Table>(),
            Err(UnknownTable("users".to_string()))
        );
        assert!("Sites".parse::<Table>().is_err());
        assert!("sites; DROP TABLE sites".parse::<Table>().is_err());
    }

    #[test]
    fn statements_target_their_own_table() {
        for table in Table::ALL {
            let statements = table.statements();
            let from = format!("FROM {}", table.name());
            assert!(statements.select.contains(&from));
            assert!(statements.select.contains("ORDER BY id DESC"));
            assert!(statements.delete.starts_with(&format!("DELETE {}", from)));
            assert!(statements
                .upsert
                .starts_with(&format!("INSERT INTO {} ", table.name())));
            assert!(statements.upsert.contains("ON CONFLICT (id) DO UPDATE"));
            assert!(statements
                .create
                .starts_with(&format!("CREATE TABLE IF NOT EXISTS {} ", table.name())));
        }
    }

    #[test]
    fn site_upsert_replaces_every_column_but_id() {
        let sites = Table::Sites.statements().upsert;
        let (_, update) = sites.split_once("DO UPDATE").unwrap();
        for column in [
            "user_id",
            "domain",
            "site_name",
            "username",
            "app_password",
            "status",
            "wp_version",
        ] {
            assert!(update.contains(&format!("{} =", column)), "{} must be updated", column);
        }
        assert!(!update.contains("id = EXCLUDED.id"));
    }

    #[test]
    fn write_once_columns_are_not_updated() {
        let library = Table::Library.statements().upsert;
        let (_, update) = library.split_once("DO UPDATE").unwrap();
        assert!(!update.contains("upload_date"));
        assert!(!update.contains("user_id"));

        let messages = Table::Messages.statements().upsert;
        let (_, update) = messages.split_once("DO UPDATE").unwrap();
        for column in ["subject", "sender_id", "receiver_id", "\"timestamp\""] {
            assert!(!update.contains(column), "{} must not be updated", column);
        }
    }

    #[test]
    fn statements_only_use_placeholders() {
        for table in Table::ALL {
            let statements = table.statements();
            for sql in [statements.select, statements.upsert, statements.delete] {
                assert!(!sql.contains('{'));
                assert!(!sql.contains("'%"));
            }
        }
    }
}

//! Declarative table definitions and the DDL they render to.
//!
//! The rental database is described as data first and turned into
//! `CREATE TABLE IF NOT EXISTS` statements, so the same definition can be
//! applied to a fresh or an existing file.

/// Schema definition for the SQLite database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }

    /// Render every table as an idempotent `CREATE TABLE IF NOT EXISTS` batch.
    pub fn to_sql(&self) -> String {
        self.tables
            .iter()
            .map(TableDefinition::to_sql)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    pub fn to_sql(&self) -> String {
        let mut lines: Vec<String> = self.columns.iter().map(ColumnDefinition::to_sql).collect();
        lines.extend(self.foreign_keys.iter().map(ForeignKey::to_sql));

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
            self.name,
            lines.join(",\n    ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Text,
    Real,
    Blob,
}

impl DataType {
    pub fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
            DataType::Real => "REAL",
            DataType::Blob => "BLOB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    PrimaryKey,
    /// Only valid directly after `PrimaryKey` on an `INTEGER` column.
    AutoIncrement,
    NotNull,
    Unique,
}

impl ColumnConstraint {
    pub fn as_sql(self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY",
            ColumnConstraint::AutoIncrement => "AUTOINCREMENT",
            ColumnConstraint::NotNull => "NOT NULL",
            ColumnConstraint::Unique => "UNIQUE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub column: String,
    pub foreign_table: String,
    pub foreign_column: String,
}

impl ForeignKey {
    pub fn new(column: &str, foreign_table: &str, foreign_column: &str) -> Self {
        Self {
            column: column.to_string(),
            foreign_table: foreign_table.to_string(),
            foreign_column: foreign_column.to_string(),
        }
    }

    fn to_sql(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {}({})",
            self.column, self.foreign_table, self.foreign_column
        )
    }
}

/// The `movies` and `rentals` tables.
///
/// Rental dates are ISO 8601 `YYYY-MM-DD` text; a missing `return_date`
/// marks a rental that is still outstanding.
pub fn rental_schema() -> Schema {
    let id = || {
        ColumnDefinition::new("id", DataType::Integer)
            .with_constraint(ColumnConstraint::PrimaryKey)
            .with_constraint(ColumnConstraint::AutoIncrement)
    };

    let movies = TableDefinition::new("movies")
        .with_column(id())
        .with_column(
            ColumnDefinition::new("title", DataType::Text)
                .with_constraint(ColumnConstraint::NotNull),
        )
        .with_column(ColumnDefinition::new("genre", DataType::Text))
        .with_column(ColumnDefinition::new("release_year", DataType::Integer));

    let rentals = TableDefinition::new("rentals")
        .with_column(id())
        .with_column(
            ColumnDefinition::new("movie_id", DataType::Integer)
                .with_constraint(ColumnConstraint::NotNull),
        )
        .with_column(ColumnDefinition::new("customer_name", DataType::Text))
        .with_column(
            ColumnDefinition::new("rental_date", DataType::Text)
                .with_constraint(ColumnConstraint::NotNull),
        )
        .with_column(ColumnDefinition::new("return_date", DataType::Text))
        .with_foreign_key(ForeignKey::new("movie_id", "movies", "id"));

    Schema::new().add_table(movies).add_table(rentals)
}

//! Declarative list of the collections every guild database contains.
//!
//! Adding a per-guild record type means adding one [`CollectionSpec`] here, a
//! [`CollectionKey`] variant, and the typed handle bound for it in
//! [`TenantStoreFactory`](super::store::TenantStoreFactory).

use sea_orm::sea_query::{
    Alias, ColumnDef, Expr, Index, IndexCreateStatement, Query, SelectStatement, Table,
    TableCreateStatement,
};

/// Name of a per-guild collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKey {
    Tome,
    Aspects,
}

impl CollectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Tome => "tome",
            CollectionKey::Aspects => "aspects",
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of a collection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text compared without regard to ASCII case, including by unique indexes.
    CaseInsensitiveText,
    Integer,
    Timestamp,
}

/// Value a field takes when an insert leaves it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    None,
    Integer(i64),
    /// Insert time.
    Now,
}

/// Constraints declared for one field of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: FieldDefault,
    /// No two records may hold the same value, as compared by `kind`.
    pub unique: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind, default: FieldDefault) -> Self {
        Self {
            name,
            kind,
            required: true,
            default,
            unique: false,
        }
    }

    const fn unique(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: FieldDefault::None,
            unique: true,
        }
    }

    fn column_def(&self) -> ColumnDef {
        let mut column = ColumnDef::new(Alias::new(self.name));

        match self.kind {
            FieldKind::Text => column.string(),
            FieldKind::CaseInsensitiveText => column.string().extra("COLLATE NOCASE"),
            FieldKind::Integer => column.big_integer(),
            FieldKind::Timestamp => column.timestamp_with_time_zone(),
        };

        if self.required {
            column.not_null();
        } else {
            column.null();
        }

        match self.default {
            FieldDefault::None => {}
            FieldDefault::Integer(value) => {
                column.default(value);
            }
            FieldDefault::Now => {
                column.default(Expr::current_timestamp());
            }
        }

        column
    }
}

/// One collection of the tenant schema set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    pub key: CollectionKey,
    pub fields: &'static [FieldSpec],
}

/// Every collection has an auto-increment primary key named `id` in addition to its
/// declared fields.
pub const PRIMARY_KEY: &str = "id";

impl CollectionSpec {
    /// `CREATE TABLE IF NOT EXISTS` for this collection.
    pub fn create_statement(&self) -> TableCreateStatement {
        let mut table = Table::create();
        table
            .table(Alias::new(self.key.as_str()))
            .if_not_exists()
            .col(
                ColumnDef::new(Alias::new(PRIMARY_KEY))
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            );

        for field in self.fields {
            table.col(field.column_def());
        }

        table.to_owned()
    }

    /// `CREATE UNIQUE INDEX IF NOT EXISTS` for every unique field.
    ///
    /// The index inherits the column collation, so a case-insensitive field is unique
    /// regardless of case.
    pub fn index_statements(&self) -> Vec<IndexCreateStatement> {
        self.fields
            .iter()
            .filter(|field| field.unique)
            .map(|field| {
                Index::create()
                    .name(format!("idx_{}_{}_unique", self.key.as_str(), field.name))
                    .table(Alias::new(self.key.as_str()))
                    .col(Alias::new(field.name))
                    .unique()
                    .if_not_exists()
                    .to_owned()
            })
            .collect()
    }

    /// Cheap read used to verify the collection exists after creation.
    pub fn probe_statement(&self) -> SelectStatement {
        Query::select()
            .expr(Expr::val(1))
            .from(Alias::new(self.key.as_str()))
            .limit(1)
            .to_owned()
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

const TOME_FIELDS: &[FieldSpec] = &[
    FieldSpec::unique("username", FieldKind::CaseInsensitiveText),
    FieldSpec::required("date_added", FieldKind::Timestamp, FieldDefault::Now),
];

const ASPECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::unique("uuid", FieldKind::Text),
    FieldSpec::required("aspects", FieldKind::Integer, FieldDefault::Integer(0)),
    FieldSpec::required("emeralds", FieldKind::Integer, FieldDefault::Integer(0)),
    FieldSpec::required("raids", FieldKind::Integer, FieldDefault::Integer(0)),
];

/// The tenant schema set, in creation order.
pub const TENANT_SCHEMA: &[CollectionSpec] = &[
    CollectionSpec {
        key: CollectionKey::Tome,
        fields: TOME_FIELDS,
    },
    CollectionSpec {
        key: CollectionKey::Aspects,
        fields: ASPECT_FIELDS,
    },
];

pub fn collection_keys() -> impl Iterator<Item = CollectionKey> {
    TENANT_SCHEMA.iter().map(|spec| spec.key)
}

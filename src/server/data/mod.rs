//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organized by domain:
//! EVE Online entities, Heimdall identity users and the connector tables (sets, linked users
//! and the connector log).

/// Sets, linked users and the connector log
pub mod connector;
/// EVE Online entities
pub mod eve;
/// Heimdall users
pub mod user;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, SimpleExpr},
    IntoSimpleExpr,
};

/// Case-insensitive substring match of a text column, `LIKE` alone is case-sensitive on
/// Postgres.
fn contains_ignore_case(column: impl IntoSimpleExpr, query: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column.into_simple_expr()))
        .like(format!("%{}%", query.to_lowercase()))
}
